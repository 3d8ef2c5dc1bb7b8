//! Renders the files of a skill package from a [`SkillDescription`].
//!
//! Every function here is pure: the writer decides where the output goes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::Result;
use crate::models::{
    Runtime, SafetyProfile, SkillDescription, SkillMetadata, METADATA_FILE, README_FILE,
    SKILL_VERSION,
};

/// One generated file, relative to the skill directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: &'static str,
    pub content: String,
    pub executable: bool,
}

/// Runtime-specific companion files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeFiles {
    /// `package.json` plus `index.js`.
    Node { manifest: String, entry: String },
    /// `main.py` plus `requirements.txt`.
    Python { entry: String, requirements: String },
}

/// Render every file of the package, in the order they should be written.
pub fn template_files(desc: &SkillDescription) -> Result<Vec<RenderedFile>> {
    let mut files = vec![
        RenderedFile {
            path: METADATA_FILE,
            content: render_metadata(desc)?,
            executable: false,
        },
        RenderedFile {
            path: README_FILE,
            content: render_readme(desc),
            executable: false,
        },
    ];

    match render_runtime_files(desc)? {
        RuntimeFiles::Node { manifest, entry } => {
            files.push(RenderedFile {
                path: "package.json",
                content: manifest,
                executable: false,
            });
            files.push(RenderedFile {
                path: Runtime::Node.entry_file(),
                content: entry,
                executable: true,
            });
        }
        RuntimeFiles::Python {
            entry,
            requirements,
        } => {
            files.push(RenderedFile {
                path: Runtime::Python.entry_file(),
                content: entry,
                executable: true,
            });
            files.push(RenderedFile {
                path: "requirements.txt",
                content: requirements,
                executable: false,
            });
        }
    }

    files.push(RenderedFile {
        path: ".gitignore",
        content: render_gitignore(),
        executable: false,
    });
    files.push(RenderedFile {
        path: "examples/README.md",
        content: render_examples_readme(desc),
        executable: false,
    });

    Ok(files)
}

/// Render `skill.json`.
pub fn render_metadata(desc: &SkillDescription) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&SkillMetadata::from(desc))?;
    json.push('\n');
    Ok(json)
}

/// Render the runtime-specific manifest and entry file.
pub fn render_runtime_files(desc: &SkillDescription) -> Result<RuntimeFiles> {
    Ok(match desc.runtime {
        Runtime::Node => RuntimeFiles::Node {
            manifest: render_node_manifest(desc)?,
            entry: render_node_entry(desc),
        },
        Runtime::Python => RuntimeFiles::Python {
            entry: render_python_entry(desc),
            requirements: render_requirements(desc),
        },
    })
}

/// Render the bullet list of safety notes.
#[must_use]
pub fn render_safety(profile: &SafetyProfile) -> String {
    let mut notes = Vec::with_capacity(3);
    if profile.modifies_files {
        notes.push("- This skill may modify existing files");
        if profile.confirm_destructive {
            notes.push("- All destructive operations require explicit confirmation");
        }
    } else {
        notes.push("- This skill does not modify existing files");
    }
    notes.push("- No network requests are made without user consent");
    notes.join("\n")
}

/// Render `README.md`.
#[must_use]
pub fn render_readme(desc: &SkillDescription) -> String {
    let SkillDescription {
        name,
        title,
        description,
        author,
        ..
    } = desc;
    let commands = desc
        .commands
        .iter()
        .map(|c| format!("- `{}`: {}", c.name, c.description))
        .collect::<Vec<_>>()
        .join("\n");
    let first = desc.first_command();
    let safety = render_safety(&desc.safety);
    let license = desc.license.spdx();
    let (install, run) = match desc.runtime {
        Runtime::Node => ("npm install", "node index.js"),
        Runtime::Python => ("pip install -r requirements.txt", "python main.py"),
    };

    format!(
        "# {title}\n\
         \n\
         {description}\n\
         \n\
         ## Install\n\
         \n\
         ```bash\n\
         npx skills install {name}\n\
         ```\n\
         \n\
         ## Usage\n\
         \n\
         ```bash\n\
         {name} <command> [options]\n\
         ```\n\
         \n\
         ## Commands\n\
         \n\
         {commands}\n\
         \n\
         ## Examples\n\
         \n\
         ```bash\n\
         # Example usage\n\
         {name} {first}\n\
         ```\n\
         \n\
         ## Safety\n\
         \n\
         {safety}\n\
         \n\
         ## Development\n\
         \n\
         ```bash\n\
         # Clone the repository\n\
         git clone https://github.com/{author}/{name}\n\
         cd {name}\n\
         \n\
         # Install dependencies\n\
         {install}\n\
         \n\
         # Test locally\n\
         {run}\n\
         ```\n\
         \n\
         ## License\n\
         \n\
         {license}\n"
    )
}

#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'static str,
    description: &'a str,
    main: &'static str,
    bin: BTreeMap<&'a str, &'static str>,
    scripts: PackageScripts,
    keywords: &'a [String],
    author: &'a str,
    license: &'static str,
    engines: PackageEngines,
}

#[derive(Serialize)]
struct PackageScripts {
    test: &'static str,
}

#[derive(Serialize)]
struct PackageEngines {
    node: &'static str,
}

/// Render `package.json` for the node runtime.
pub fn render_node_manifest(desc: &SkillDescription) -> Result<String> {
    let manifest = PackageManifest {
        name: &desc.name,
        version: SKILL_VERSION,
        description: &desc.description,
        main: "index.js",
        bin: BTreeMap::from([(desc.name.as_str(), "./index.js")]),
        scripts: PackageScripts {
            test: "echo \"Error: no test specified\" && exit 1",
        },
        keywords: &desc.tags,
        author: &desc.author,
        license: desc.license.spdx(),
        engines: PackageEngines { node: ">=14.0.0" },
    };
    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    Ok(json)
}

/// Render the `index.js` stub.
#[must_use]
pub fn render_node_entry(desc: &SkillDescription) -> String {
    let name = js_single(&desc.name);
    let available = available_commands(desc);
    let mut lines: Vec<String> = vec![
        "#!/usr/bin/env node".into(),
        String::new(),
        "const args = process.argv.slice(2);".into(),
        String::new(),
        "function showHelp() {".into(),
        "  console.log(`".into(),
        js_template(&desc.title),
        String::new(),
        format!("Usage: {} <command> [options]", js_template(&desc.name)),
        String::new(),
        "Commands:".into(),
    ];
    for cmd in &desc.commands {
        lines.push(format!(
            "  {:<15} {}",
            js_template(&cmd.name),
            js_template(&cmd.description)
        ));
    }
    lines.extend([
        String::new(),
        "Options:".into(),
        "  --help, -h      Show this help message".into(),
        "  --version, -v   Show version".into(),
        "`);".into(),
        "}".into(),
        String::new(),
        "function showVersion() {".into(),
        format!("  console.log('{name} v{SKILL_VERSION}');"),
        "}".into(),
        String::new(),
        "// Parse command".into(),
        "const command = args[0];".into(),
        String::new(),
        "if (!command || command === '--help' || command === '-h') {".into(),
        "  showHelp();".into(),
        "  process.exit(0);".into(),
        "}".into(),
        String::new(),
        "if (command === '--version' || command === '-v') {".into(),
        "  showVersion();".into(),
        "  process.exit(0);".into(),
        "}".into(),
        String::new(),
        "// Handle commands".into(),
        "switch (command) {".into(),
    ]);
    for cmd in &desc.commands {
        let cmd_name = js_single(&cmd.name);
        lines.extend([
            format!("  case '{cmd_name}':"),
            format!("    console.log('Executing {cmd_name}...');"),
            format!("    // TODO: Implement {} command", cmd.name),
            "    break;".into(),
        ]);
    }
    lines.extend([
        String::new(),
        "  default:".into(),
        "    console.error(`Unknown command: ${command}`);".into(),
        format!("    console.error('Available commands: {}');", js_single(&available)),
        format!("    console.error('Run \"{name} --help\" for usage information');"),
        "    process.exit(1);".into(),
        "}".into(),
    ]);
    finish(lines)
}

/// Render the `main.py` stub.
#[must_use]
pub fn render_python_entry(desc: &SkillDescription) -> String {
    let name = py_single(&desc.name);
    let known = desc
        .commands
        .iter()
        .map(|c| format!("'{}'", py_single(&c.name)))
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines: Vec<String> = vec![
        "#!/usr/bin/env python3".into(),
        "\"\"\"".into(),
        py_docstring(&desc.title),
        py_docstring(&desc.description),
        "\"\"\"".into(),
        String::new(),
        "import sys".into(),
        "import argparse".into(),
        String::new(),
        String::new(),
        "def main():".into(),
        "    parser = argparse.ArgumentParser(".into(),
        format!("        description='{}',", py_single(&desc.description)),
        format!("        prog='{name}'"),
        "    )".into(),
        String::new(),
        format!(
            "    parser.add_argument('--version', action='version', version='{name} {SKILL_VERSION}')"
        ),
        String::new(),
        "    subparsers = parser.add_subparsers(dest='command', help='Available commands')".into(),
        String::new(),
    ];
    for cmd in &desc.commands {
        let var = cmd.name.replace('-', "_");
        let cmd_name = py_single(&cmd.name);
        lines.extend([
            format!("    # {} command", cmd.name),
            format!(
                "    {var}_parser = subparsers.add_parser('{cmd_name}', help='{}')",
                py_help(&cmd.description)
            ),
            format!("    # TODO: Add arguments for {}", cmd.name),
            String::new(),
        ]);
    }
    // Unknown subcommands are caught before argparse sees them.
    lines.extend([
        format!("    commands = [{known}]"),
        "    if len(sys.argv) > 1 and not sys.argv[1].startswith('-') \\".into(),
        "            and sys.argv[1] not in commands:".into(),
        "        print('Unknown command: ' + sys.argv[1], file=sys.stderr)".into(),
        "        print('Available commands: ' + ', '.join(commands), file=sys.stderr)".into(),
        "        sys.exit(1)".into(),
        String::new(),
        "    args = parser.parse_args()".into(),
        String::new(),
        "    if not args.command:".into(),
        "        parser.print_help()".into(),
        "        sys.exit(0)".into(),
        String::new(),
    ]);
    for (i, cmd) in desc.commands.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "elif" };
        let cmd_name = py_single(&cmd.name);
        lines.extend([
            format!("    {keyword} args.command == '{cmd_name}':"),
            format!("        print('Executing {cmd_name}...')"),
            format!("        # TODO: Implement {} command", cmd.name),
        ]);
    }
    lines.extend([
        String::new(),
        String::new(),
        "if __name__ == '__main__':".into(),
        "    main()".into(),
    ]);
    finish(lines)
}

/// Render `requirements.txt` for the python runtime.
#[must_use]
pub fn render_requirements(desc: &SkillDescription) -> String {
    format!("# Python dependencies for {}\n", desc.name)
}

/// Render `.gitignore`.
#[must_use]
pub fn render_gitignore() -> String {
    "node_modules/\n\
     *.pyc\n\
     __pycache__/\n\
     .DS_Store\n\
     *.log\n\
     .env\n\
     dist/\n"
        .to_string()
}

/// Render `examples/README.md`.
#[must_use]
pub fn render_examples_readme(desc: &SkillDescription) -> String {
    let SkillDescription { name, title, .. } = desc;
    let first = desc.first_command();
    format!(
        "# Example for {title}\n\
         \n\
         This directory contains example usage of {name}.\n\
         \n\
         ## Basic Example\n\
         \n\
         ```bash\n\
         {name} {first}\n\
         ```\n"
    )
}

// ── Helpers ────────────────────────────────────────────────────────────

fn available_commands(desc: &SkillDescription) -> String {
    desc.commands
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Escape text for a single-quoted JavaScript string.
fn js_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape text for a JavaScript template literal.
fn js_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Escape text for a single-quoted Python string.
fn py_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape text for an argparse help string (`%` is a format marker there).
fn py_help(s: &str) -> String {
    py_single(s).replace('%', "%%")
}

fn py_docstring(s: &str) -> String {
    s.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}
