use serde_json::json;

use crate::support::{new_session, print_payload};

pub fn run(json_output: bool) {
    let session = new_session(0);
    let entries: Vec<&str> = session.debug_logs().collect();

    if json_output {
        let payload = json!({
            "action": "session.logs",
            "count": entries.len(),
            "entries": entries
        });
        print_payload(&payload);
    } else {
        println!("bugboard logs\n  Count: {}", entries.len());
        for entry in entries {
            println!("  {entry}");
        }
    }
}
