//! Front-matter resolution from the layered kit configuration.
//!
//! Precedence, lowest to highest: stack-level default globs, stack-level
//! pattern rules, architecture-scoped globs, architecture-scoped pattern
//! rules. The global always-apply list is independent of that chain.

use std::path::Path;

use indexmap::IndexMap;
use rulekit_config::{KitConfig, RuleRefs, ROOT_PLACEHOLDER};
use tracing::debug;

use crate::frontmatter::FrontMatter;
use crate::substitute::normalize_project_path;

/// Glob assigned to rules living under a `global/` template path.
const GLOBAL_GLOB: &str = "**/*";

/// Compute the final front matter for one rule file.
///
/// `supplied` is the caller-provided partial map (stack, projectPath,
/// version metadata, ...); pass-through keys survive untouched.
///
/// Pattern-rule matching is by terminal file name only, not full path:
/// identically-named rule files in different template subdirectories of
/// one stack are indistinguishable here, and the last matching entry
/// wins. Configuration files in the wild depend on this, so it is kept
/// as-is.
pub fn resolve_front_matter(
    source_path: &Path,
    supplied: &FrontMatter,
    config: &KitConfig,
) -> FrontMatter {
    let mut front = supplied.clone();
    // Pipeline control flag, never emitted.
    front.remove("debug");

    let project_path = normalize_project_path(front.text("projectPath"));
    let path_prefix = if project_path == "./" {
        String::new()
    } else {
        format!("{}/", project_path)
    };
    front.set("projectPath", project_path);

    let file_name = source_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let is_global_rule = has_segment(source_path, "global");
    let stack = front
        .text("stack")
        .map(str::to_string)
        .or_else(|| segment_after(source_path, "stacks"));

    if config.always_applies(&file_name) {
        front.set("alwaysApply", true);
    }

    if is_global_rule {
        front.set("globs", GLOBAL_GLOB);
        if front.flag("alwaysApply") != Some(true) {
            front.set("alwaysApply", false);
        }
    } else if let Some(rules) = stack.as_deref().and_then(|s| config.stack(s)) {
        apply_scope(
            &mut front,
            rules.globs.as_deref(),
            rules.pattern_rules.as_ref(),
            &file_name,
            &path_prefix,
        );

        if let Some(arch) = segment_after(source_path, "architectures") {
            if let Some(scoped) = rules.architectures.as_ref().and_then(|a| a.get(&arch)) {
                debug!("Applying architecture overrides '{}' to {}", arch, file_name);
                apply_scope(
                    &mut front,
                    scoped.globs.as_deref(),
                    scoped.pattern_rules.as_ref(),
                    &file_name,
                    &path_prefix,
                );
            }
        }
    }

    front
}

/// Apply one configuration scope: default globs first, then pattern-rule
/// overrides for files the scope enumerates by name.
fn apply_scope(
    front: &mut FrontMatter,
    globs: Option<&[String]>,
    pattern_rules: Option<&IndexMap<String, RuleRefs>>,
    file_name: &str,
    path_prefix: &str,
) {
    if let Some(globs) = globs {
        let joined = globs
            .iter()
            .map(|glob| glob.replace(ROOT_PLACEHOLDER, path_prefix))
            .collect::<Vec<_>>()
            .join(",");
        front.set("globs", joined);
    }

    if let Some(rules) = pattern_rules {
        for (pattern, refs) in rules {
            for rule_path in refs.paths() {
                let terminal = rule_path.rsplit('/').next().unwrap_or(rule_path);
                if terminal == file_name {
                    front.set("globs", pattern.replace(ROOT_PLACEHOLDER, path_prefix));
                }
            }
        }
    }
}

/// Whether the path's directory portion contains `segment`.
fn has_segment(path: &Path, segment: &str) -> bool {
    path.parent()
        .map(|parent| parent.components().any(|c| c.as_os_str() == segment))
        .unwrap_or(false)
}

/// The path component immediately following `segment`, if any.
fn segment_after(path: &Path, segment: &str) -> Option<String> {
    let mut components = path.components();
    while let Some(component) = components.next() {
        if component.as_os_str() == segment {
            return components
                .next()
                .and_then(|next| next.as_os_str().to_str())
                .map(str::to_string);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> KitConfig {
        KitConfig::parse(json).unwrap()
    }

    fn supplied(pairs: &[(&str, &str)]) -> FrontMatter {
        let mut front = FrontMatter::new();
        for (key, value) in pairs {
            front.set(*key, *value);
        }
        front
    }

    #[test]
    fn test_global_rule_gets_wildcard_glob() {
        let cfg = config(r#"{ "global": { "always": ["general.md"] } }"#);

        let front = resolve_front_matter(
            Path::new("templates/global/general.md"),
            &supplied(&[]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("**/*"));
        assert_eq!(front.flag("alwaysApply"), Some(true));

        let front = resolve_front_matter(
            Path::new("templates/global/tooling.md"),
            &supplied(&[]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("**/*"));
        assert_eq!(front.flag("alwaysApply"), Some(false));
    }

    #[test]
    fn test_stack_globs_with_root_prefix() {
        let cfg = config(r#"{ "react": { "globs": ["<root>/src/**/*.tsx"] } }"#);

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/base/naming.md"),
            &supplied(&[("stack", "react"), ("projectPath", "apps/web")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("apps/web/src/**/*.tsx"));
    }

    #[test]
    fn test_root_prefix_empty_for_project_root() {
        let cfg = config(r#"{ "react": { "globs": ["<root>/src/**/*.tsx"] } }"#);

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/base/naming.md"),
            &supplied(&[("stack", "react"), ("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("src/**/*.tsx"));
        assert_eq!(front.text("projectPath"), Some("./"));
    }

    #[test]
    fn test_multiple_globs_joined_with_comma() {
        let cfg = config(
            r#"{ "laravel": { "globs": ["<root>/app/**/*.php", "<root>/routes/**/*.php"] } }"#,
        );

        let front = resolve_front_matter(
            Path::new("templates/stacks/laravel/base/conventions.md"),
            &supplied(&[("stack", "laravel"), ("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("app/**/*.php,routes/**/*.php"));
    }

    #[test]
    fn test_pattern_rule_overrides_stack_default() {
        let cfg = config(
            r#"{
                "react": {
                    "globs": ["<root>/src/**/*.tsx"],
                    "pattern_rules": {
                        "<root>/src/components/**/*.tsx": "stacks/react/base/components.md"
                    }
                }
            }"#,
        );

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/base/components.md"),
            &supplied(&[("stack", "react"), ("projectPath", "apps/web")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("apps/web/src/components/**/*.tsx"));
    }

    #[test]
    fn test_pattern_rule_last_match_wins() {
        let cfg = config(
            r#"{
                "react": {
                    "pattern_rules": {
                        "first/**": "base/shared.md",
                        "second/**": ["base/other.md", "base/shared.md"]
                    }
                }
            }"#,
        );

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/base/shared.md"),
            &supplied(&[("stack", "react"), ("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("second/**"));
    }

    #[test]
    fn test_architecture_scope_wins_over_stack_scope() {
        let cfg = config(
            r#"{
                "react": {
                    "globs": ["<root>/src/**/*.tsx"],
                    "architectures": {
                        "atomic": { "globs": ["<root>/src/components/**/*.tsx"] }
                    }
                }
            }"#,
        );

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/architectures/atomic/structure.md"),
            &supplied(&[("stack", "react"), ("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("src/components/**/*.tsx"));
    }

    #[test]
    fn test_stack_inferred_from_path() {
        let cfg = config(r#"{ "vue": { "globs": ["<root>/src/**/*.vue"] } }"#);

        let front = resolve_front_matter(
            Path::new("templates/stacks/vue/base/sfc.md"),
            &supplied(&[("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.text("globs"), Some("src/**/*.vue"));
    }

    #[test]
    fn test_always_apply_outside_global() {
        let cfg = config(
            r#"{
                "react": { "globs": ["<root>/src/**/*.tsx"] },
                "global": { "always": ["conventions.md"] }
            }"#,
        );

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/base/conventions.md"),
            &supplied(&[("stack", "react"), ("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.flag("alwaysApply"), Some(true));
        assert_eq!(front.text("globs"), Some("src/**/*.tsx"));
    }

    #[test]
    fn test_unknown_stack_passes_meta_through() {
        let cfg = config(r#"{ "react": {} }"#);

        let front = resolve_front_matter(
            Path::new("templates/stacks/solid/base/signals.md"),
            &supplied(&[("stack", "solid"), ("projectPath", ".")]),
            &cfg,
        );
        assert_eq!(front.text("stack"), Some("solid"));
        assert!(front.get("globs").is_none());
    }

    #[test]
    fn test_debug_key_stripped() {
        let cfg = KitConfig::default();
        let mut meta = supplied(&[("stack", "react")]);
        meta.set("debug", true);

        let front = resolve_front_matter(
            Path::new("templates/stacks/react/base/naming.md"),
            &meta,
            &cfg,
        );
        assert!(front.get("debug").is_none());
    }
}
