use bugboard_core::BugForm;
use bugboard_core::validate::{sanitize, validate_bug};
use serde_json::json;

use crate::support::print_payload;

pub fn run(
    title: String,
    description: String,
    priority: String,
    status: String,
    json_output: bool,
) {
    let form = BugForm {
        title: sanitize(&title),
        description: sanitize(&description),
        priority,
        status,
    };

    let errors = validate_bug(&form);
    let valid = errors.is_empty();

    if json_output {
        let payload = json!({
            "action": "bug.check",
            "valid": valid,
            "errors": errors
        });
        print_payload(&payload);
    } else {
        println!("bugboard check\n  Valid: {valid}\n  Errors: {}", errors.len());
        for err in &errors {
            println!("  - {}: {}", err.field, err.message);
        }
    }

    if !valid {
        std::process::exit(1);
    }
}
