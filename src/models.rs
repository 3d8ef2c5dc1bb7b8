use serde::Serialize;

/// Version stamped into every generated skill.
pub const SKILL_VERSION: &str = "0.1.0";

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 120;

/// Minimum number of tags a skill must declare.
pub const MIN_TAGS: usize = 2;

/// Maximum number of tags a skill may declare.
pub const MAX_TAGS: usize = 5;

/// Metadata file name inside a skill directory.
pub const METADATA_FILE: &str = "skill.json";

/// Human documentation file name inside a skill directory.
pub const README_FILE: &str = "README.md";

/// Entry file assumed when `skill.json` does not name one.
pub const DEFAULT_ENTRY: &str = "index.js";

/// Execution environment a skill is scaffolded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Node,
    Python,
}

impl Runtime {
    /// All runtimes, in the order they are offered.
    pub const ALL: [Runtime; 2] = [Runtime::Node, Runtime::Python];

    /// Human-friendly label shown in prompts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Runtime::Node => "Node.js",
            Runtime::Python => "Python",
        }
    }

    /// Name of the runnable entry file.
    #[must_use]
    pub fn entry_file(self) -> &'static str {
        match self {
            Runtime::Node => "index.js",
            Runtime::Python => "main.py",
        }
    }
}

/// License choices offered at scaffold time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
}

impl License {
    /// All licenses, in the order they are offered.
    pub const ALL: [License; 4] = [
        License::Mit,
        License::Apache2,
        License::Gpl3,
        License::Bsd3Clause,
    ];

    /// SPDX identifier.
    #[must_use]
    pub fn spdx(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Bsd3Clause => "BSD-3-Clause",
        }
    }
}

/// One sub-action a skill exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
}

/// Operator answers that drive the generated safety notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyProfile {
    pub modifies_files: bool,
    pub confirm_destructive: bool,
}

impl Default for SafetyProfile {
    fn default() -> Self {
        Self {
            modifies_files: false,
            confirm_destructive: true,
        }
    }
}

/// Everything collected during `create`, consumed by the template renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDescription {
    pub name: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub runtime: Runtime,
    pub tags: Vec<String>,
    pub license: License,
    pub commands: Vec<CommandDescriptor>,
    pub safety: SafetyProfile,
}

impl SkillDescription {
    /// Name of the first command, used in generated examples.
    #[must_use]
    pub fn first_command(&self) -> &str {
        self.commands
            .first()
            .map(|c| c.name.as_str())
            .unwrap_or("help")
    }
}

/// The `skill.json` document as written by `create`.
#[derive(Debug, Serialize)]
pub struct SkillMetadata<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub version: &'static str,
    pub author: &'a str,
    pub license: License,
    pub runtime: Runtime,
    pub entry: &'static str,
    pub tags: &'a [String],
    pub commands: &'a [CommandDescriptor],
}

impl<'a> From<&'a SkillDescription> for SkillMetadata<'a> {
    fn from(desc: &'a SkillDescription) -> Self {
        Self {
            name: &desc.name,
            title: &desc.title,
            description: &desc.description,
            version: SKILL_VERSION,
            author: &desc.author,
            license: desc.license,
            runtime: desc.runtime,
            entry: desc.runtime.entry_file(),
            tags: &desc.tags,
            commands: &desc.commands,
        }
    }
}
