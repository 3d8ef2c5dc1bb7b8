//! Structure checks for an existing skill directory.
//!
//! Two failure modes:
//! - fatal: `skill.json` is missing or unreadable. [`check_skill`] returns
//!   `Err` and no other check runs.
//! - accumulated: every other finding becomes a [`Diagnostic`]. All checks run
//!   even when earlier ones fail.
//!
//! Codes E001–E005 are errors, W001–W003 warnings.

use std::path::{Component, Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::diagnostics::{Diagnostic, E001, E002, E003, E004, E005, W001, W002, W003};
use crate::errors::{Result, SkillBuilderError};
use crate::fs_util::is_executable;
use crate::models::{DEFAULT_ENTRY, MAX_DESCRIPTION_LEN, METADATA_FILE, README_FILE};
use crate::validator::validate_skill_name;

/// Metadata fields that must be present and non-empty.
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "title",
    "description",
    "version",
    "author",
    "license",
    "runtime",
    "entry",
];

/// README sections whose absence produces a warning.
pub const REQUIRED_SECTIONS: &[&str] = &["Install", "Usage", "Safety", "License"];

/// Check the skill package in `dir`.
///
/// Returns every finding in check order. An empty list means the skill is
/// clean.
pub fn check_skill(dir: &Path) -> Result<Vec<Diagnostic>> {
    let metadata = read_metadata(dir)?;
    debug!(dir = %dir.display(), "checking skill");

    let mut diags = Vec::new();
    diags.extend(check_metadata(&metadata));
    diags.extend(check_readme(dir));
    diags.extend(check_entry(dir, &metadata));
    Ok(diags)
}

/// Load `skill.json` as a JSON object.
fn read_metadata(dir: &Path) -> Result<Map<String, Value>> {
    let path = dir.join(METADATA_FILE);
    if !path.exists() {
        return Err(SkillBuilderError::MetadataNotFound {
            dir: dir.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(&path).map_err(|e| SkillBuilderError::Metadata {
        message: e.to_string(),
    })?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(SkillBuilderError::Metadata {
            message: "expected a JSON object".to_string(),
        }),
        Err(e) => Err(SkillBuilderError::Metadata {
            message: e.to_string(),
        }),
    }
}

/// Field presence, name format, description length, and commands.
fn check_metadata(meta: &Map<String, Value>) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    for &field in REQUIRED_FIELDS {
        if !meta.get(field).is_some_and(is_truthy) {
            diags.push(
                Diagnostic::error(E001, format!("Missing required field: {field}"))
                    .with_field(field),
            );
        }
    }

    if let Some(name) = meta.get("name").filter(|v| is_truthy(v)) {
        let valid = name
            .as_str()
            .is_some_and(|n| validate_skill_name(n).is_ok());
        if !valid {
            diags.push(
                Diagnostic::error(
                    E002,
                    "Invalid skill name format (must be lowercase kebab-case)",
                )
                .with_field("name"),
            );
        }
    }

    if let Some(description) = meta.get("description").and_then(Value::as_str) {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            diags.push(
                Diagnostic::warning(
                    W001,
                    format!("Description exceeds {MAX_DESCRIPTION_LEN} characters"),
                )
                .with_field("description"),
            );
        }
    }

    let has_commands = match meta.get("commands") {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(other) => is_truthy(other),
        None => false,
    };
    if !has_commands {
        diags.push(
            Diagnostic::error(E003, "At least one command is required").with_field("commands"),
        );
    }

    diags
}

/// README presence and recommended sections.
fn check_readme(dir: &Path) -> Vec<Diagnostic> {
    let path = dir.join(README_FILE);
    let readme = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => {
            return vec![Diagnostic::error(E004, "README.md is missing").with_field("readme")];
        }
    };

    REQUIRED_SECTIONS
        .iter()
        .filter(|section| !readme.contains(&format!("## {section}")))
        .map(|section| {
            Diagnostic::warning(
                W002,
                format!("README missing recommended section: {section}"),
            )
            .with_field("readme")
        })
        .collect()
}

/// Entry file presence and execute permission.
fn check_entry(dir: &Path, meta: &Map<String, Value>) -> Vec<Diagnostic> {
    let entry = meta
        .get("entry")
        .and_then(Value::as_str)
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_ENTRY);
    let path = dir.join(relative_to_skill(entry));

    if !path.exists() {
        return vec![
            Diagnostic::error(E005, format!("Entry file not found: {entry}")).with_field("entry"),
        ];
    }
    if !is_executable(&path) {
        return vec![Diagnostic::warning(
            W003,
            "Entry file is not executable (chmod +x required)",
        )
        .with_field("entry")];
    }
    Vec::new()
}

/// Drop root and prefix components so `entry` always resolves inside the
/// skill directory.
fn relative_to_skill(entry: &str) -> PathBuf {
    Path::new(entry)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::sample;
    use crate::models::Runtime;
    use crate::writer::create_skill;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const README: &str = "# T\n\n## Install\n\n## Usage\n\n## Safety\n\n## License\n\nMIT\n";

    fn full_metadata() -> Value {
        serde_json::json!({
            "name": "log-tail",
            "title": "Log Tail",
            "description": "Follow log files",
            "version": "0.1.0",
            "author": "octo",
            "license": "MIT",
            "runtime": "node",
            "entry": "index.js",
            "tags": ["logs", "ops"],
            "commands": [{"name": "follow", "description": "Stream"}]
        })
    }

    /// Write a skill directory from parts; `None` skips the file.
    fn make_skill(meta: &Value, readme: Option<&str>, entry: Option<u32>) -> (TempDir, PathBuf) {
        let parent = tempdir().unwrap();
        let dir = parent.path().to_path_buf();
        fs::write(dir.join("skill.json"), serde_json::to_string(meta).unwrap()).unwrap();
        if let Some(text) = readme {
            fs::write(dir.join("README.md"), text).unwrap();
        }
        if let Some(mode) = entry {
            let path = dir.join("index.js");
            fs::write(&path, "#!/usr/bin/env node\n").unwrap();
            set_mode(&path, mode);
        }
        (parent, dir)
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(not(unix))]
    fn set_mode(_path: &Path, _mode: u32) {}

    fn messages(diags: &[Diagnostic]) -> Vec<&str> {
        diags.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn complete_skill_is_clean() {
        let (_p, dir) = make_skill(&full_metadata(), Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn created_skill_is_clean() {
        for runtime in Runtime::ALL {
            let parent = tempdir().unwrap();
            let created = create_skill(parent.path(), &sample(runtime)).unwrap();
            let diags = check_skill(&created.dir).unwrap();
            assert!(diags.is_empty(), "{runtime:?}: {diags:?}");
        }
    }

    #[test]
    fn missing_metadata_is_fatal() {
        let dir = tempdir().unwrap();
        let err = check_skill(dir.path()).unwrap_err();
        assert!(matches!(err, SkillBuilderError::MetadataNotFound { .. }));
        assert_eq!(err.to_string(), "skill.json not found in current directory");
    }

    #[test]
    fn malformed_metadata_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("skill.json"), "{ not json").unwrap();
        let err = check_skill(dir.path()).unwrap_err();
        assert!(matches!(err, SkillBuilderError::Metadata { .. }));
    }

    #[test]
    fn non_object_metadata_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("skill.json"), "[1, 2]").unwrap();
        let err = check_skill(dir.path()).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"), "{err}");
    }

    #[test]
    fn missing_license_and_commands_is_two_errors() {
        let mut meta = full_metadata();
        let obj = meta.as_object_mut().unwrap();
        obj.remove("license");
        obj.remove("commands");
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(
            messages(&diags),
            [
                "Missing required field: license",
                "At least one command is required"
            ]
        );
        assert!(diags.iter().all(Diagnostic::is_error));
    }

    #[test]
    fn falsy_fields_count_as_missing() {
        let mut meta = full_metadata();
        meta["title"] = Value::String(String::new());
        meta["author"] = Value::Null;
        meta["runtime"] = Value::Bool(false);
        meta["version"] = serde_json::json!(0);
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        let fields: Vec<_> = diags.iter().filter_map(|d| d.field).collect();
        assert_eq!(fields, ["title", "version", "author", "runtime"]);
    }

    #[test]
    fn invalid_name_is_one_error() {
        let mut meta = full_metadata();
        meta["name"] = Value::String("Log_Tail".to_string());
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(
            messages(&diags),
            ["Invalid skill name format (must be lowercase kebab-case)"]
        );
    }

    #[test]
    fn non_string_name_is_invalid() {
        let mut meta = full_metadata();
        meta["name"] = serde_json::json!(42);
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, E002);
    }

    #[test]
    fn long_description_is_warning_only() {
        let mut meta = full_metadata();
        meta["description"] = Value::String("d".repeat(121));
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(messages(&diags), ["Description exceeds 120 characters"]);
        assert!(diags[0].is_warning());
    }

    #[test]
    fn two_part_version_is_clean() {
        let mut meta = full_metadata();
        meta["version"] = Value::String("1.0".to_string());
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn empty_commands_array_is_error() {
        let mut meta = full_metadata();
        meta["commands"] = serde_json::json!([]);
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(messages(&diags), ["At least one command is required"]);
    }

    #[test]
    fn missing_readme_is_error() {
        let (_p, dir) = make_skill(&full_metadata(), None, Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(messages(&diags), ["README.md is missing"]);
        assert!(diags[0].is_error());
    }

    #[test]
    fn readme_missing_safety_is_one_warning() {
        let readme = README.replace("## Safety\n\n", "");
        let (_p, dir) = make_skill(&full_metadata(), Some(&readme), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(
            messages(&diags),
            ["README missing recommended section: Safety"]
        );
        assert!(diags[0].is_warning());
    }

    #[test]
    fn readme_without_sections_warns_per_section() {
        let (_p, dir) = make_skill(&full_metadata(), Some("# Just a title\n"), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(diags.len(), REQUIRED_SECTIONS.len());
        assert!(diags.iter().all(|d| d.code == W002));
    }

    #[test]
    fn missing_entry_is_error() {
        let (_p, dir) = make_skill(&full_metadata(), Some(README), None);
        let diags = check_skill(&dir).unwrap();
        assert_eq!(messages(&diags), ["Entry file not found: index.js"]);
    }

    #[test]
    fn entry_defaults_to_index_js() {
        let mut meta = full_metadata();
        meta.as_object_mut().unwrap().remove("entry");
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        // Only the missing field; index.js is found.
        assert_eq!(messages(&diags), ["Missing required field: entry"]);
    }

    #[test]
    fn entry_path_follows_metadata() {
        let mut meta = full_metadata();
        meta["entry"] = Value::String("main.py".to_string());
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(messages(&diags), ["Entry file not found: main.py"]);
    }

    #[test]
    fn absolute_entry_resolves_inside_skill_dir() {
        let mut meta = full_metadata();
        meta["entry"] = Value::String("/index.js".to_string());
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        assert!(check_skill(&dir).unwrap().is_empty());

        meta["entry"] = Value::String("/usr/bin/env".to_string());
        let (_p, dir) = make_skill(&meta, Some(README), Some(0o755));
        assert_eq!(
            messages(&check_skill(&dir).unwrap()),
            ["Entry file not found: /usr/bin/env"]
        );
    }

    #[test]
    fn entry_naming_a_directory_is_found() {
        let mut meta = full_metadata();
        meta["entry"] = Value::String("bin".to_string());
        let (_p, dir) = make_skill(&meta, Some(README), None);
        fs::create_dir(dir.join("bin")).unwrap();
        let diags = check_skill(&dir).unwrap();
        assert!(diags.iter().all(|d| d.code != E005), "{diags:?}");
    }

    #[test]
    fn relative_to_skill_strips_root() {
        assert_eq!(relative_to_skill("/a/b.js"), PathBuf::from("a/b.js"));
        assert_eq!(relative_to_skill("src/main.py"), PathBuf::from("src/main.py"));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_entry_is_warning() {
        let (_p, dir) = make_skill(&full_metadata(), Some(README), Some(0o644));
        let diags = check_skill(&dir).unwrap();
        assert_eq!(
            messages(&diags),
            ["Entry file is not executable (chmod +x required)"]
        );
        assert!(diags[0].is_warning());
    }

    #[test]
    fn all_checks_run_after_early_failures() {
        let meta = serde_json::json!({ "name": "BAD NAME" });
        let (_p, dir) = make_skill(&meta, None, None);
        let diags = check_skill(&dir).unwrap();
        let codes: Vec<_> = diags.iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            [E001, E001, E001, E001, E001, E001, E001, E002, E003, E004, E005]
        );
    }

    #[test]
    fn truthiness_matches_json_semantics() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(false)));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
        assert!(is_truthy(&serde_json::json!(1.5)));
        assert!(is_truthy(&serde_json::json!([])));
        assert!(is_truthy(&serde_json::json!({})));
        assert!(is_truthy(&serde_json::json!("x")));
    }
}
