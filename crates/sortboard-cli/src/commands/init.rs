//! The `sortboard init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    for (path, contents) in [
        ("catalog.json", SAMPLE_CATALOG),
        ("layout.json", SAMPLE_LAYOUT),
        ("events.json", SAMPLE_EVENTS),
    ] {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, contents)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Run: sortboard validate --catalog catalog.json");
    println!("  2. Run: sortboard score --catalog catalog.json --layout layout.json");
    println!("  3. Run: sortboard replay --catalog catalog.json --events events.json --seed 1");

    Ok(())
}

const SAMPLE_CATALOG: &str = r#"{
  "tasks": [
    { "id": "t01", "content": "Develop project charter", "group": "INITIATING" },
    { "id": "t02", "content": "Identify stakeholders", "group": "INITIATING" },
    { "id": "t03", "content": "Develop project management plan", "group": "PLANNING" },
    { "id": "t04", "content": "Define scope", "group": "PLANNING" },
    { "id": "t05", "content": "Create WBS", "group": "PLANNING" },
    { "id": "t06", "content": "Estimate costs", "group": "PLANNING" },
    { "id": "t07", "content": "Direct and manage project work", "group": "EXECUTING" },
    { "id": "t08", "content": "Acquire resources", "group": "EXECUTING" },
    { "id": "t09", "content": "Manage communications", "group": "EXECUTING" },
    { "id": "t10", "content": "Monitor and control project work", "group": "MONITORING" },
    { "id": "t11", "content": "Perform integrated change control", "group": "MONITORING" },
    { "id": "t12", "content": "Close project or phase", "group": "CLOSING" }
  ]
}
"#;

const SAMPLE_LAYOUT: &str = r#"{
  "zones": {
    "initiating": ["t01", "t02"],
    "planning": ["t04", "t03"],
    "executing": ["t07"]
  }
}
"#;

const SAMPLE_EVENTS: &str = r#"{
  "events": [
    { "type": "dragstart", "card": "t01" },
    { "type": "dragover", "zone": "initiating", "pointer_y": 0.0 },
    { "type": "drop" },
    { "type": "dragend" },
    { "type": "dragstart", "card": "t04" },
    { "type": "dragover", "zone": "planning", "pointer_y": 100.0 },
    { "type": "drop" },
    { "type": "dragend" },
    { "type": "shuffle" }
  ]
}
"#;
