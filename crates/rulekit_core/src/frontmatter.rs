//! Front-matter parsing and serialization for rule documents.
//!
//! The on-disk format is a loose line-based block delimited by `---`:
//! each header line splits on the first `:` into a key and a trimmed
//! value. It is deliberately not YAML — values containing `:` or
//! newlines are unsupported, and no escaping is performed on output.

use std::fmt;

use indexmap::IndexMap;

/// Opening and closing front-matter delimiter.
const DELIMITER: &str = "---";

/// A front-matter value: text or a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Flag(bool),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(flag) => Some(*flag),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

/// Ordered front-matter map. Keys serialize in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: IndexMap<String, Value>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. A replaced key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Text value for a key, if the key holds text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Boolean value for a key, if the key holds a flag.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_flag)
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` onto `self`: existing keys keep their position and
    /// take the new value, new keys append in `other`'s order.
    pub fn merge(&mut self, other: &FrontMatter) {
        for (key, value) in other.iter() {
            self.set(key, value.clone());
        }
    }

    /// Serialize as a delimited header block followed by the body.
    ///
    /// Values are written verbatim, booleans as `true`/`false` literals.
    /// No escaping: a value containing `:` or a newline breaks the
    /// format, a documented limitation of the wire format.
    pub fn serialize(&self, body: &str) -> String {
        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(body);
        out
    }
}

/// A rule document split into front matter and body.
#[derive(Debug, Clone, Default)]
pub struct RuleDocument {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl RuleDocument {
    /// Parse a document.
    ///
    /// A document has front matter iff it starts with the literal `---`
    /// delimiter; the header ends at the next `\n---`. `true`/`false`
    /// values decode as booleans. A document with no opening delimiter
    /// (or no closing one) is all body.
    pub fn parse(content: &str) -> Self {
        if !content.starts_with(DELIMITER) {
            return Self {
                front_matter: FrontMatter::new(),
                body: content.to_string(),
            };
        }

        let Some(end) = content[DELIMITER.len()..].find("\n---") else {
            return Self {
                front_matter: FrontMatter::new(),
                body: content.to_string(),
            };
        };

        let header = &content[DELIMITER.len()..DELIMITER.len() + end];
        let rest = &content[DELIMITER.len() + end + "\n---".len()..];

        let mut front_matter = FrontMatter::new();
        for line in header.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            match value.trim() {
                "true" => front_matter.set(key, true),
                "false" => front_matter.set(key, false),
                value => front_matter.set(key, value),
            }
        }

        // Leading blank lines after the closing delimiter are not body.
        let body = rest
            .trim_start_matches(|c| c == '\r' || c == '\n')
            .to_string();

        Self { front_matter, body }
    }

    /// The body with any front matter removed.
    pub fn strip_front_matter(content: &str) -> String {
        Self::parse(content).body
    }
}
