pub mod checker;
pub mod collector;
pub mod diagnostics;
pub mod errors;
mod fs_util;
pub mod models;
pub mod prompt;
pub mod template;
pub mod validator;
pub mod writer;

// Re-export key types at crate root for convenience.
pub use checker::check_skill;
pub use collector::collect_skill;
pub use diagnostics::{Diagnostic, Severity};
pub use errors::{Result, SkillBuilderError};
pub use models::{CommandDescriptor, License, Runtime, SafetyProfile, SkillDescription};
pub use prompt::{LinePrompter, Prompter};
pub use template::{template_files, RenderedFile, RuntimeFiles};
pub use validator::{validate_command_name, validate_skill_name, validate_version};
pub use writer::{create_skill, create_skill_with_progress, CreatedSkill};
