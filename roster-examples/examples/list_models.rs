//! Example: list the catalog, optionally filtered by provider.
//!
//! Builds a fresh catalog and prints one line per model with tier, context
//! window, and streaming support.
//!
//! Run: `cargo run -p roster-examples --example list_models -- anthropic`

use std::env;

use roster::{build_catalog, Provider};

fn main() {
    let catalog = build_catalog().expect("builtin catalog is valid");

    let provider: Option<Provider> = env::args().nth(1).map(|arg| {
        arg.parse()
            .unwrap_or_else(|e| panic!("{e}; expected one of the catalog providers"))
    });

    let models = match provider {
        Some(p) => catalog.models_by_provider(p),
        None => catalog.models().to_vec(),
    };

    println!("{} models", models.len());
    for model in &models {
        let context = model
            .max_input_tokens
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        let streaming = if model.streaming { "streaming" } else { "no-stream" };
        println!(
            "{:<45} {:<10} {:<10} ctx={:<8} {}",
            model.id, model.provider, model.tier, context, streaming
        );
    }

    println!();
    for group in catalog.groups() {
        println!("group {:<20} {} models", group.name, group.models.len());
    }
}
