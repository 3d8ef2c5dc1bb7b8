use skill_builder::{create_skill_with_progress, LinePrompter, Runtime};

pub(crate) fn run() {
    let cwd = super::working_dir("create");

    println!("\nSkill Builder - Create a new skill\n");
    println!("This tool will help you create a compliant skill for the skills registry\n");

    let desc = {
        let mut prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stdout().lock());
        match skill_builder::collect_skill(&mut prompter) {
            Ok(Some(desc)) => desc,
            Ok(None) => {
                eprintln!("\nSkill creation cancelled");
                return;
            }
            Err(e) => {
                tracing::debug!(error = ?e, "prompt failed");
                eprintln!("skill-builder create: {e}");
                std::process::exit(1);
            }
        }
    };

    println!("\nCreating skill in {}...", cwd.join(&desc.name).display());
    let result =
        create_skill_with_progress(&cwd, &desc, |file| println!("  ✓ Creating {file}"));
    if let Err(e) = result {
        tracing::debug!(error = ?e, "create failed");
        eprintln!("skill-builder create: {e}");
        std::process::exit(1);
    }

    println!("\nSkill \"{}\" created successfully!\n", desc.name);
    println!("Next steps:");
    println!("  cd {}", desc.name);
    match desc.runtime {
        Runtime::Node => {
            println!("  npm install");
            println!("  node index.js --help");
        }
        Runtime::Python => {
            println!("  pip install -r requirements.txt");
            println!("  python main.py --help");
        }
    }
    println!("\n  # Implement your commands in the entry file");
    println!("  # Test your skill");
}
