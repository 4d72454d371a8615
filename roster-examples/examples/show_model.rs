//! Example: print one descriptor as JSON, looked up by id or alias.
//!
//! Run: `cargo run -p roster-examples --example show_model -- sdxl`

use std::env;
use std::process::ExitCode;

use roster::build_catalog;

fn main() -> ExitCode {
    let name = env::args().nth(1).unwrap_or_else(|| "gpt-4o".to_string());

    let catalog = build_catalog().expect("builtin catalog is valid");
    match catalog.get(&name) {
        Some(model) => {
            let json = serde_json::to_string_pretty(model.as_ref())
                .expect("descriptors serialize to JSON");
            println!("{json}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("no model answers to {name:?}");
            ExitCode::FAILURE
        }
    }
}
