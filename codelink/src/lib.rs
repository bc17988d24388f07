//! CodeLink - Figma Code Connect binding generator
//!
//! This library scans a directory of UI component sources, infers what each
//! file exports, matches the file to a design-tool URL from a link table and
//! writes one `*.figma.tsx` binding per matched component.
//!
//! # Quick Start
//!
//! ```no_run
//! use codelink::{CodeLinkCore, GenerateOptions};
//! use std::path::PathBuf;
//!
//! let options = GenerateOptions {
//!     links_path: PathBuf::from("figma/component-links.json"),
//!     components_dir: PathBuf::from("src/components/ui"),
//!     ..Default::default()
//! };
//! let report = CodeLinkCore::generate(&options).unwrap();
//!
//! for created in &report.created {
//!     println!("{} -> {}", created.main_export, created.output_path.display());
//! }
//! ```
//!
//! # Pipeline
//!
//! - **Export extraction**: three independent text rules, no syntax tree
//! - **Link matching**: exact key match, then first partial match in table order
//! - **Example synthesis**: gated templates for compound components, generic fallback
//! - **Composition**: fixed-layout binding file, byte-identical across runs

pub mod codegen;
pub mod core;
pub mod links;
pub mod parser;

// Re-export main types
pub use crate::core::{
    discover_component_files, CodeLinkCore, CodeLinkError, CreatedBinding, FileExports,
    GenerateOptions, GenerationReport, MatchOutcome, MissingComponent, SkippedFile, SourceFile,
    NO_EXPORTS_REASON,
};
pub use codegen::{ExampleSynthesizer, ExampleTemplate, GeneratedUnit};
pub use links::{find_url, ComponentRecord, LinkMatch, LinkMatcher, LinkTable, MatchKind};
pub use parser::{extract_exports, normalize_key, select_main_export, ExportRule, ExportSet};

/// Load a link table file (convenience wrapper).
pub fn load_link_table(path: &std::path::Path) -> Result<LinkMatcher, CodeLinkError> {
    CodeLinkCore::load_links(&GenerateOptions {
        links_path: path.to_path_buf(),
        ..Default::default()
    })
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CodeLinkCore, CodeLinkError, ExampleSynthesizer, ExportSet, GenerateOptions,
        GenerationReport, LinkMatcher, MatchOutcome,
    };
}
