//! Example: extending the usage-example table before running the pipeline.
//! Run with: cargo run --example custom_templates [links.json] [components/ui]

use codelink::{
    load_link_table, CodeLinkCore, CodeLinkError, ExampleSynthesizer, ExampleTemplate,
    GenerateOptions,
};
use std::path::PathBuf;

const SHEET_EXAMPLE: &str = r#"() => (
      <Sheet>
        <SheetTrigger>Open</SheetTrigger>
        <SheetContent>Content</SheetContent>
      </Sheet>
    )"#;

fn main() -> Result<(), CodeLinkError> {
    let mut args = std::env::args().skip(1);
    let options = GenerateOptions {
        links_path: PathBuf::from(args.next().unwrap_or_else(|| "component-links.json".into())),
        components_dir: PathBuf::from(args.next().unwrap_or_else(|| "components/ui".into())),
        ..Default::default()
    };

    let matcher = load_link_table(&options.links_path)?;

    // Built-ins keep priority; the sheet template only applies where none of them does.
    let mut synthesizer = ExampleSynthesizer::with_builtin_templates();
    synthesizer.push(ExampleTemplate::new(
        "sheet",
        &["SheetTrigger", "SheetContent"],
        SHEET_EXAMPLE,
    ));

    let report = CodeLinkCore::generate_with(&matcher, &synthesizer, &options)?;
    println!(
        "{} created, {} missing, {} skipped",
        report.created.len(),
        report.missing.len(),
        report.skipped.len()
    );
    Ok(())
}
