//! Field validators shared by the interactive collector and the structure
//! checker.
//!
//! Each validator returns `Ok(())` on success or a short, user-facing message.
//! None of them panic.

use std::sync::LazyLock;

use regex::Regex;

/// Skill names: lowercase alphanumeric segments joined by single hyphens.
static SKILL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("skill name regex must compile")
});

/// Command names: like skill names, but letters only.
static COMMAND_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(-[a-z]+)*$").expect("command name regex must compile")
});

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("version regex must compile"));

/// Validate a skill name (`my-skill`, `tool2`).
pub fn validate_skill_name(name: &str) -> Result<(), &'static str> {
    if SKILL_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err("Skill name must be lowercase, kebab-case (e.g., my-skill)")
    }
}

/// Validate a `MAJOR.MINOR.PATCH` version string.
pub fn validate_version(version: &str) -> Result<(), &'static str> {
    if VERSION_RE.is_match(version) {
        Ok(())
    } else {
        Err("Version must follow semver (e.g., 0.1.0)")
    }
}

/// Validate a command name.
///
/// Stricter than [`validate_skill_name`]: digits are rejected.
pub fn validate_command_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Command name is required");
    }
    if COMMAND_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err("Must be lowercase kebab-case")
    }
}
