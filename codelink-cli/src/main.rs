//! CodeLink CLI - generate Figma Code Connect bindings from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use codelink::codegen::builtin_templates;
use codelink::{normalize_key, CodeLinkCore, GenerateOptions, GenerationReport, MatchKind};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codelink")]
#[command(about = "Figma Code Connect binding generator for UI components", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate binding files for every matched component in a directory
    Generate {
        /// Directory containing component sources
        #[arg(value_name = "DIR", default_value = "components/ui")]
        dir: PathBuf,

        /// Link table JSON with { "components": [{ "name", "url" }] }
        #[arg(short, long, value_name = "FILE", default_value = "component-links.json")]
        links: PathBuf,

        /// Write bindings here instead of next to the sources
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Source file extension to scan
        #[arg(long, default_value = "tsx")]
        extension: String,

        /// Suffix of generated files
        #[arg(long, default_value = "figma.tsx")]
        suffix: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Report what would be generated without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the exports and main component detected in one source file
    Exports {
        /// Path to a component source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Source file extension
        #[arg(long, default_value = "tsx")]
        extension: String,
    },

    /// Resolve a component name against the link table
    Match {
        /// Component or file base name (e.g. "dropdown-menu")
        #[arg(value_name = "NAME")]
        name: String,

        /// Link table JSON
        #[arg(short, long, value_name = "FILE", default_value = "component-links.json")]
        links: PathBuf,
    },

    /// List the specialized usage-example templates
    Templates {
        /// Show the template bodies
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON report for scripts
    Json,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let exit_code = match cli.command {
        Commands::Generate {
            dir,
            links,
            out_dir,
            extension,
            suffix,
            format,
            dry_run,
        } => {
            let options = GenerateOptions {
                links_path: links,
                components_dir: dir,
                out_dir,
                source_extension: extension,
                generated_suffix: suffix,
                dry_run,
            };
            handle_generate(&options, format)
        }
        Commands::Exports { file, extension } => handle_exports(&file, &extension),
        Commands::Match { name, links } => handle_match(&name, &links),
        Commands::Templates { verbose } => {
            handle_templates(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn handle_generate(options: &GenerateOptions, format: OutputFormat) -> i32 {
    match CodeLinkCore::generate(options) {
        Ok(report) => {
            match format {
                OutputFormat::Human => output_human(&report, options.dry_run),
                OutputFormat::Json => output_json(&report),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn file_display(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Partial => "partial",
    }
}

fn output_human(report: &GenerationReport, dry_run: bool) {
    println!("\n=== Code Connect generation report ===");

    let rows: Vec<[String; 4]> = report
        .created
        .iter()
        .map(|c| {
            [
                c.component.clone(),
                c.main_export.clone(),
                file_display(&c.output_path),
                kind_label(c.match_kind).to_string(),
            ]
        })
        .collect();
    print_table(&["component", "export", "file", "match"], &rows);

    if !report.missing.is_empty() {
        eprintln!("\nNot found in link table:");
        for m in &report.missing {
            eprintln!("   - {} (exports: {})", m.component, m.exports.joined());
        }
    }

    if !report.skipped.is_empty() {
        eprintln!("\nSkipped:");
        for s in &report.skipped {
            eprintln!("   - {}: {}", s.file, s.reason);
        }
    }

    if dry_run {
        println!("\nDry run: {} binding file(s) would be created", report.created.len());
    } else {
        println!("\nCreated {} binding file(s)", report.created.len());
    }
}

fn print_table(headers: &[&str; 4], rows: &[[String; 4]]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join(" │ ")
    };

    println!("{}", line(&headers[..]));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─")
    );
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        println!("{}", line(cells.as_slice()));
    }
}

fn output_json(report: &GenerationReport) {
    let output = serde_json::json!({
        "created": report.created,
        "missing": report.missing,
        "skipped": report.skipped,
        "summary": {
            "total_files": report.total_files(),
            "created": report.created.len(),
            "missing": report.missing.len(),
            "skipped": report.skipped.len(),
        }
    });
    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn handle_exports(file: &Path, extension: &str) -> i32 {
    match CodeLinkCore::inspect_file(file, extension) {
        Ok(info) => {
            println!("File:     {}", file.display());
            println!("Key:      {}", info.key);
            if info.exports.is_empty() {
                println!("Exports:  (none)");
            } else {
                println!("Exports:  {}", info.exports.joined());
            }
            println!("Main:     {}", info.main_export);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_match(name: &str, links: &Path) -> i32 {
    let matcher = match codelink::load_link_table(links) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let key = normalize_key(name);
    println!("Key:      {}", key);
    match matcher.find(&key) {
        Some(found) => {
            println!("Record:   {}", found.record.name);
            println!("Match:    {}", kind_label(found.kind));
            println!("URL:      {}", found.url());
        }
        None => println!("No matching record"),
    }
    0
}

fn handle_templates(verbose: bool) {
    println!("Usage-example templates (first match wins):\n");

    for template in builtin_templates() {
        println!("  {}", template.base_name);
        println!("    requires: {}", template.required.join(", "));
        if verbose {
            println!("    example:  {}", template.body);
        }
        println!();
    }

    println!("  (default)");
    println!("    {}", codelink::codegen::generic_example("Component"));
}
