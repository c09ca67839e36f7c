//! Placeholder substitution in rule bodies.

use crate::frontmatter::FrontMatter;

/// Placeholder names recognized in template bodies.
pub const PLACEHOLDERS: &[&str] = &["detectedVersion", "versionRange", "projectPath", "stack"];

/// Replace the recognized `{name}` tokens in `body` with values from
/// `metadata`.
///
/// Replacement is a global literal replace. A token whose metadata value
/// is absent or empty stays in the output verbatim, so generic template
/// fragments can be reused in contexts that do not supply every
/// variable. `projectPath` is normalized before substitution.
pub fn substitute(body: &str, metadata: &FrontMatter) -> String {
    let mut result = body.to_string();

    for name in PLACEHOLDERS {
        let value = match *name {
            "projectPath" => metadata
                .text(name)
                .map(|path| normalize_project_path(Some(path))),
            _ => metadata.text(name).map(str::to_string),
        };

        if let Some(value) = value {
            if !value.is_empty() {
                result = result.replace(&format!("{{{}}}", name), &value);
            }
        }
    }

    result
}

/// `""` and `"."` mean the project root, rendered `./`; any other path
/// is used as-is.
pub fn normalize_project_path(path: Option<&str>) -> String {
    match path {
        None | Some("") | Some(".") | Some("./") => "./".to_string(),
        Some(path) => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> FrontMatter {
        let mut front = FrontMatter::new();
        for (key, value) in pairs {
            front.set(*key, *value);
        }
        front
    }

    #[test]
    fn test_substitute_all_tokens() {
        let meta = metadata(&[
            ("stack", "react"),
            ("detectedVersion", "18"),
            ("versionRange", "v18"),
            ("projectPath", "apps/web"),
        ]);

        let body = "Stack {stack} v{detectedVersion} ({versionRange}) at {projectPath}.";
        assert_eq!(
            substitute(body, &meta),
            "Stack react v18 (v18) at apps/web."
        );
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let meta = metadata(&[("stack", "vue")]);
        assert_eq!(substitute("{stack} and {stack}", &meta), "vue and vue");
    }

    #[test]
    fn test_missing_value_leaves_token_verbatim() {
        let meta = metadata(&[("stack", "react")]);
        let body = "{stack} uses {versionRange}";
        assert_eq!(substitute(body, &meta), "react uses {versionRange}");
    }

    #[test]
    fn test_empty_value_leaves_token_verbatim() {
        let meta = metadata(&[("versionRange", "")]);
        assert_eq!(substitute("{versionRange}", &meta), "{versionRange}");
    }

    #[test]
    fn test_project_path_normalized() {
        let meta = metadata(&[("projectPath", ".")]);
        assert_eq!(substitute("root is {projectPath}", &meta), "root is ./");
    }

    #[test]
    fn test_idempotent_once_resolved() {
        let meta = metadata(&[("stack", "react"), ("projectPath", "apps/web")]);
        let once = substitute("{stack} in {projectPath}", &meta);
        let twice = substitute(&once, &meta);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_tokens_untouched() {
        let meta = metadata(&[("stack", "react")]);
        assert_eq!(substitute("{custom} {stack}", &meta), "{custom} react");
    }

    #[test]
    fn test_normalize_project_path() {
        assert_eq!(normalize_project_path(None), "./");
        assert_eq!(normalize_project_path(Some("")), "./");
        assert_eq!(normalize_project_path(Some(".")), "./");
        assert_eq!(normalize_project_path(Some("./")), "./");
        assert_eq!(normalize_project_path(Some("apps/web")), "apps/web");
    }
}
