use bugboard_core::validate::{sanitize, validate_bug};
use bugboard_core::{Bug, BugDraft, BugForm, BugPatch, BugPriority, BugStatus};
use serde_json::json;

use crate::support::{self, bug_json, new_session, print_payload};

pub async fn run_add(
    title: String,
    description: String,
    status: String,
    priority: String,
    latency_ms: u64,
    json_output: bool,
) {
    let form = BugForm {
        title: sanitize(&title),
        description: sanitize(&description),
        priority,
        status,
    };

    let errors = validate_bug(&form);
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("error: {}: {}", err.field, err.message);
        }
        std::process::exit(1);
    }

    let status = BugStatus::parse(&form.status).expect("status validated above");
    let priority = BugPriority::parse(&form.priority).expect("priority validated above");
    let draft = BugDraft {
        title: form.title,
        description: form.description,
        status,
        priority,
    };

    let mut session = new_session(latency_ms);
    if let Err(err) = session.create_bug(draft).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let created = session.bugs().first().expect("created bug must be first");
    if json_output {
        let payload = json!({
            "action": "bug.add",
            "count": session.bugs().len(),
            "bug": bug_json(created)
        });
        print_payload(&payload);
    } else {
        println!(
            "bugboard add\n  Filed: #{} [{} {}] {}",
            created.id, created.status, created.priority, created.title
        );
    }
}

pub fn run_list(status: Option<String>, priority: Option<String>, json_output: bool) {
    let status = status.map(|raw| support::parse_status_or_exit(&raw));
    let priority = priority.map(|raw| support::parse_priority_or_exit(&raw));

    let session = new_session(0);
    let rows: Vec<&Bug> = session
        .bugs()
        .iter()
        .filter(|bug| status.is_none_or(|s| bug.status == s))
        .filter(|bug| priority.is_none_or(|p| bug.priority == p))
        .collect();

    if json_output {
        let items = rows.iter().map(|bug| bug_json(bug)).collect::<Vec<_>>();
        let payload = json!({
            "action": "bug.list",
            "count": items.len(),
            "items": items
        });
        print_payload(&payload);
    } else {
        println!("bugboard list\n  Count: {}", rows.len());
        for bug in rows {
            println!(
                "  - #{} [{} {}] {}",
                bug.id, bug.status, bug.priority, bug.title
            );
        }
    }
}

pub async fn run_update(
    id: u64,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    latency_ms: u64,
    json_output: bool,
) {
    let patch = BugPatch {
        title: title.map(|raw| sanitize(&raw)),
        description: description.map(|raw| sanitize(&raw)),
        status: status.map(|raw| support::parse_status_or_exit(&raw)),
        priority: priority.map(|raw| support::parse_priority_or_exit(&raw)),
    };

    if patch.is_empty() {
        eprintln!("error: no update fields provided");
        std::process::exit(1);
    }

    let mut session = new_session(latency_ms);
    let found = session.bugs().iter().any(|bug| bug.id == id);
    session.update_bug(id, patch).await;

    let updated = session.bugs().iter().find(|bug| bug.id == id);
    if json_output {
        let payload = json!({
            "action": "bug.update",
            "id": id,
            "found": found,
            "bug": updated.map(bug_json)
        });
        print_payload(&payload);
    } else if let Some(bug) = updated {
        println!(
            "bugboard update\n  Updated: #{} [{} {}] {}",
            bug.id, bug.status, bug.priority, bug.title
        );
    } else {
        println!("bugboard update\n  No bug with id {id}; nothing changed");
    }
}

pub async fn run_delete(id: u64, latency_ms: u64, json_output: bool) {
    let mut session = new_session(latency_ms);
    let before = session.bugs().len();
    session.delete_bug(id).await;
    let deleted = session.bugs().len() < before;

    if json_output {
        let payload = json!({
            "action": "bug.delete",
            "id": id,
            "deleted": deleted,
            "count": session.bugs().len()
        });
        print_payload(&payload);
    } else if deleted {
        println!("bugboard delete\n  Deleted: #{id}");
    } else {
        println!("bugboard delete\n  No bug with id {id}; nothing changed");
    }
}
