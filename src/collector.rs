//! Interactive collection of a [`SkillDescription`].
//!
//! The collector walks a fixed list of questions through a [`Prompter`].
//! Every text field runs the same explicit loop:
//!
//! ```text
//! Collecting -> Validating -> Accepted
//!                          -> Rejected -> Collecting
//! ```
//!
//! and commands are gathered by a second loop
//! (`CollectingCommand -> AwaitContinue -> {CollectingCommand, Done}`).
//! An abort at any prompt cancels the whole collection.

use tracing::debug;

use crate::errors::Result;
use crate::models::{
    CommandDescriptor, License, Runtime, SafetyProfile, SkillDescription, MAX_DESCRIPTION_LEN,
    MAX_TAGS, MIN_TAGS,
};
use crate::prompt::Prompter;
use crate::validator::{validate_command_name, validate_skill_name};

/// Progress of a single validated text field.
enum FieldStep<T> {
    Collecting,
    Validating(String),
    Accepted(T),
    Rejected(&'static str),
}

/// Progress of the command sub-loop.
enum CommandStep {
    CollectingCommand,
    AwaitContinue,
    Done,
}

/// Run the full question sequence.
///
/// Returns `Ok(None)` if the operator aborted; nothing should be written in
/// that case. On success the command list is never empty.
pub fn collect_skill<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<SkillDescription>> {
    macro_rules! answer {
        ($e:expr) => {
            match $e? {
                Some(v) => v,
                None => {
                    debug!("collection aborted by operator");
                    return Ok(None);
                }
            }
        };
    }

    let name = answer!(ask_field(
        prompter,
        "Skill name (lowercase, kebab-case):",
        |v| validate_skill_name(v).map(|()| v.to_string())
    ));
    let title = answer!(ask_field(prompter, "Human-friendly title:", |v| {
        required(v, "Title is required")
    }));
    let description = answer!(ask_field(
        prompter,
        "One-line description (max 120 chars):",
        parse_description
    ));
    let author = answer!(ask_field(prompter, "Author name or GitHub username:", |v| {
        required(v, "Author is required")
    }));

    let runtime_labels: Vec<&str> = Runtime::ALL.iter().map(|r| r.label()).collect();
    let runtime = Runtime::ALL[answer!(prompter.select("Select runtime:", &runtime_labels))];

    let tags = answer!(ask_field(
        prompter,
        "Tags (2-5, comma-separated):",
        parse_tags
    ));

    let license_labels: Vec<&str> = License::ALL.iter().map(|l| l.spdx()).collect();
    let license = License::ALL[answer!(prompter.select("License:", &license_labels))];

    debug!(%name, ?runtime, ?license, "top-level fields collected");

    prompter.notice("Configure commands (at least 1 required):")?;
    let commands = answer!(collect_commands(prompter));

    prompter.notice("Safety configuration:")?;
    let modifies_files = answer!(prompter.confirm("Will this skill modify existing files?", false));
    let confirm_destructive = answer!(prompter.confirm(
        "Should dangerous operations require confirmation?",
        true
    ));

    Ok(Some(SkillDescription {
        name,
        title,
        description,
        author,
        runtime,
        tags,
        license,
        commands,
        safety: SafetyProfile {
            modifies_files,
            confirm_destructive,
        },
    }))
}

/// Ask one text field until `parse` accepts it.
fn ask_field<P, T, F>(prompter: &mut P, message: &str, parse: F) -> Result<Option<T>>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> std::result::Result<T, &'static str>,
{
    let mut step = FieldStep::Collecting;
    loop {
        step = match step {
            FieldStep::Collecting => match prompter.text(message)? {
                Some(raw) => FieldStep::Validating(raw),
                None => return Ok(None),
            },
            FieldStep::Validating(raw) => match parse(&raw) {
                Ok(value) => FieldStep::Accepted(value),
                Err(reason) => FieldStep::Rejected(reason),
            },
            FieldStep::Rejected(reason) => {
                prompter.notice(reason)?;
                FieldStep::Collecting
            }
            FieldStep::Accepted(value) => return Ok(Some(value)),
        };
    }
}

/// Gather one or more commands.
fn collect_commands<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<Vec<CommandDescriptor>>> {
    // Both answers are required, so each pass appends and `Done` is only
    // reachable with at least one command.
    let mut commands: Vec<CommandDescriptor> = Vec::new();
    let mut step = CommandStep::CollectingCommand;
    loop {
        step = match step {
            CommandStep::CollectingCommand => {
                let Some(name) = ask_field(prompter, "Command name (lowercase):", |v| {
                    validate_command_name(v).map(|()| v.to_string())
                })?
                else {
                    return Ok(None);
                };
                let Some(description) = ask_field(prompter, "Command description:", |v| {
                    required(v, "Description is required")
                })?
                else {
                    return Ok(None);
                };
                debug!(command = %name, "command collected");
                commands.push(CommandDescriptor { name, description });
                CommandStep::AwaitContinue
            }
            CommandStep::AwaitContinue => match prompter.confirm("Add another command?", false)? {
                Some(true) => CommandStep::CollectingCommand,
                Some(false) => CommandStep::Done,
                None => return Ok(None),
            },
            CommandStep::Done => {
                debug_assert!(!commands.is_empty());
                return Ok(Some(commands));
            }
        };
    }
}

fn required(value: &str, message: &'static str) -> std::result::Result<String, &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(value.to_string())
    }
}

fn parse_description(value: &str) -> std::result::Result<String, &'static str> {
    if value.is_empty() {
        return Err("Description is required");
    }
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err("Description must be under 120 characters");
    }
    Ok(value.to_string())
}

/// Split a comma-separated tag list, dropping empty items.
fn parse_tags(value: &str) -> std::result::Result<Vec<String>, &'static str> {
    let tags: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    if tags.len() < MIN_TAGS {
        return Err("At least 2 tags required");
    }
    if tags.len() > MAX_TAGS {
        return Err("Maximum 5 tags allowed");
    }
    Ok(tags)
}
