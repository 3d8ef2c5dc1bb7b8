use skill_builder::diagnostics::partition;

pub(crate) fn run() {
    let cwd = super::working_dir("validate");

    let diags = match skill_builder::check_skill(&cwd) {
        Ok(diags) => diags,
        Err(e) => {
            tracing::debug!(error = ?e, "validation aborted");
            eprintln!("skill-builder validate: {e}");
            std::process::exit(1);
        }
    };

    if diags.is_empty() {
        eprintln!("Skill validation passed!");
        return;
    }

    let (errors, warnings) = partition(&diags);
    if !errors.is_empty() {
        eprintln!("{} error(s) found:", errors.len());
        for d in &errors {
            eprintln!("  • {d}");
        }
    }
    if !warnings.is_empty() {
        if !errors.is_empty() {
            eprintln!();
        }
        eprintln!("{} warning(s):", warnings.len());
        for d in &warnings {
            eprintln!("  • {d}");
        }
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }
}
