//! Generate bindings for a component directory and print the report.
//! Run with: cargo run --example generate_bindings [links.json] [components/ui]

use codelink::prelude::*;
use std::path::PathBuf;

fn main() -> Result<(), CodeLinkError> {
    let mut args = std::env::args().skip(1);
    let links = args
        .next()
        .unwrap_or_else(|| "component-links.json".to_string());
    let dir = args.next().unwrap_or_else(|| "components/ui".to_string());

    let options = GenerateOptions {
        links_path: PathBuf::from(links),
        components_dir: PathBuf::from(dir),
        ..Default::default()
    };

    let report = CodeLinkCore::generate(&options)?;

    println!("Generated bindings in: {}", options.output_dir().display());
    for created in &report.created {
        println!(
            "  {} -> {} ({})",
            created.main_export,
            created.output_path.display(),
            created.url
        );
    }

    if !report.missing.is_empty() {
        println!("\nNo link for:");
        for missing in &report.missing {
            println!("  - {} (exports: {})", missing.component, missing.exports.joined());
        }
    }

    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.file, skipped.reason);
    }

    Ok(())
}
