//! CLI Doctor Command
//!
//! Reports which upstream credentials are present and any config findings.

use menulens_config::{validate, MenuLensConfig};

use crate::terminal_output::{note_error, note_success, note_warn};

pub fn run(config: &MenuLensConfig) {
    println!("\nMenuLens doctor\n");

    let checks = credential_checks(config);
    for (name, present) in &checks {
        if *present {
            note_success(&format!("{name} is set"));
        } else {
            note_warn(&format!("{name} is missing"));
        }
    }

    let report = validate(config);
    for warning in &report.warnings {
        note_warn(&format!("{}: {}", warning.path, warning.message));
    }
    for error in &report.errors {
        note_error(&format!("{}: {}", error.path, error.message));
    }

    println!();
    if report.is_valid() {
        note_success("Configuration is valid");
    } else {
        note_error(&format!("{} configuration error(s)", report.errors.len()));
    }
}

fn credential_checks(config: &MenuLensConfig) -> [(&'static str, bool); 3] {
    let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    [
        ("OPENAI_API_KEY", set(&config.llm.api_key)),
        ("GOOGLE_API_KEY", set(&config.search.api_key)),
        ("GOOGLE_CSE_ID", set(&config.search.engine_id)),
    ]
}
