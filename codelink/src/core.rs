//! Generation pipeline shared by the CLI and library callers.
//!
//! One run loads the link table, lists candidate component files and turns
//! each file into exactly one [`MatchOutcome`]. Only a missing or unreadable
//! link table aborts the run; every per-file failure is bucketed.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::codegen::binding::{compose, import_clause, GeneratedUnit};
use crate::codegen::examples::ExampleSynthesizer;
use crate::links::matcher::{LinkMatcher, MatchKind, MatcherError};
use crate::parser::exports::{extract_exports, ExportSet};
use crate::parser::naming::{normalize_key, select_main_export};

/// Skip reason for files where no extraction rule matched.
pub const NO_EXPORTS_REASON: &str = "No exports found";

#[derive(Debug, thiserror::Error)]
pub enum CodeLinkError {
    #[error("Link table unavailable (expected at {}): {source}", .path.display())]
    LinkTable {
        path: PathBuf,
        #[source]
        source: MatcherError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Options for a generation run.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Link table JSON file.
    pub links_path: PathBuf,
    /// Directory scanned for component sources.
    pub components_dir: PathBuf,
    /// Where binding files go; defaults to `components_dir`.
    pub out_dir: Option<PathBuf>,
    /// Extension of candidate source files, without the dot.
    pub source_extension: String,
    /// Suffix of generated files, without the leading dot.
    pub generated_suffix: String,
    /// Compute outcomes without writing anything.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            links_path: PathBuf::from("component-links.json"),
            components_dir: PathBuf::from("components/ui"),
            out_dir: None,
            source_extension: "tsx".to_string(),
            generated_suffix: "figma.tsx".to_string(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    pub fn output_dir(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or(&self.components_dir)
    }

    /// Deterministic output path for a source base name.
    pub fn output_path(&self, base_name: &str) -> PathBuf {
        self.output_dir()
            .join(format!("{}.{}", base_name, self.generated_suffix))
    }

    fn is_candidate(&self, file_name: &str) -> bool {
        let generated = format!(".{}", self.generated_suffix);
        if file_name.starts_with('.') || file_name.ends_with(&generated) {
            return false;
        }
        base_name_of(file_name, &self.source_extension).is_some()
    }
}

/// Strip `.<extension>` from a file name; `None` if it does not carry it.
fn base_name_of<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|base| !base.is_empty())
}

/// One candidate input file, read once.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub base_name: String,
    pub path: PathBuf,
    pub raw_text: String,
}

impl SourceFile {
    pub fn read(path: &Path, extension: &str) -> Result<Self, CodeLinkError> {
        let file_name = file_name_of(path);
        let base_name = base_name_of(&file_name, extension)
            .map(str::to_string)
            .ok_or_else(|| {
                CodeLinkError::Other(format!("Not a .{} source file: {}", extension, file_name))
            })?;
        let raw_text = std::fs::read_to_string(path)?;
        Ok(Self {
            base_name,
            path: path.to_path_buf(),
            raw_text,
        })
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedBinding {
    pub component: String,
    pub main_export: String,
    pub url: String,
    pub match_kind: MatchKind,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingComponent {
    pub component: String,
    pub exports: ExportSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Terminal state of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    Created(CreatedBinding),
    Missing(MissingComponent),
    Skipped(SkippedFile),
}

/// All outcomes of a run, split into the three buckets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub created: Vec<CreatedBinding>,
    pub missing: Vec<MissingComponent>,
    pub skipped: Vec<SkippedFile>,
}

impl GenerationReport {
    pub fn push(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Created(c) => self.created.push(c),
            MatchOutcome::Missing(m) => self.missing.push(m),
            MatchOutcome::Skipped(s) => self.skipped.push(s),
        }
    }

    pub fn total_files(&self) -> usize {
        self.created.len() + self.missing.len() + self.skipped.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.skipped.is_empty()
    }
}

/// Exports and main component of a single file, for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct FileExports {
    pub base_name: String,
    pub key: String,
    pub exports: ExportSet,
    pub main_export: String,
}

/// List candidate component files in a directory (non-recursive).
///
/// Hidden files and already-generated bindings are excluded. Results are
/// sorted by file name so runs are reproducible across platforms.
pub fn discover_component_files(
    dir: &Path,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>, CodeLinkError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if options.is_candidate(&file_name_of(&path)) {
            files.push(path);
        }
    }
    files.sort_by_key(|p| file_name_of(p));
    Ok(files)
}

fn write_file_safe(path: &Path, contents: &str) -> Result<(), CodeLinkError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Core generation API used by the CLI.
pub struct CodeLinkCore;

impl CodeLinkCore {
    /// Load the link table named by `options`.
    pub fn load_links(options: &GenerateOptions) -> Result<LinkMatcher, CodeLinkError> {
        LinkMatcher::load_from_file(&options.links_path).map_err(|source| {
            CodeLinkError::LinkTable {
                path: options.links_path.clone(),
                source,
            }
        })
    }

    /// Run the whole pipeline with the built-in example templates.
    pub fn generate(options: &GenerateOptions) -> Result<GenerationReport, CodeLinkError> {
        let matcher = Self::load_links(options)?;
        let synthesizer = ExampleSynthesizer::with_builtin_templates();
        Self::generate_with(&matcher, &synthesizer, options)
    }

    /// Run the pipeline with a caller-supplied matcher and template table.
    pub fn generate_with(
        matcher: &LinkMatcher,
        synthesizer: &ExampleSynthesizer,
        options: &GenerateOptions,
    ) -> Result<GenerationReport, CodeLinkError> {
        let files = discover_component_files(&options.components_dir, options)?;
        tracing::info!(
            "Generating bindings for {} file(s) in {:?}",
            files.len(),
            options.components_dir
        );

        let mut report = GenerationReport::default();
        for path in files {
            let outcome = match Self::process_file(&path, matcher, synthesizer, options) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    MatchOutcome::Skipped(SkippedFile {
                        file: file_name_of(&path),
                        reason: e.to_string(),
                    })
                }
            };
            report.push(outcome);
        }

        tracing::info!(
            "Created {}, missing {}, skipped {}",
            report.created.len(),
            report.missing.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Turn one source file into its outcome, writing the binding when matched.
    pub fn process_file(
        path: &Path,
        matcher: &LinkMatcher,
        synthesizer: &ExampleSynthesizer,
        options: &GenerateOptions,
    ) -> Result<MatchOutcome, CodeLinkError> {
        let source = SourceFile::read(path, &options.source_extension)?;
        let exports = extract_exports(&source.raw_text);
        if exports.is_empty() {
            return Ok(MatchOutcome::Skipped(SkippedFile {
                file: file_name_of(path),
                reason: NO_EXPORTS_REASON.to_string(),
            }));
        }

        let main_export = select_main_export(&exports, &source.base_name);
        let key = normalize_key(&source.base_name);
        // a record with an empty URL is a gap in the table, not a binding
        let Some(link) = matcher.find(&key).filter(|m| !m.url().is_empty()) else {
            tracing::debug!("No link for {:?} (key {:?})", source.base_name, key);
            return Ok(MatchOutcome::Missing(MissingComponent {
                component: source.base_name,
                exports,
            }));
        };

        let unit = Self::render(synthesizer, options, &source, &exports, &main_export, link.url());
        if options.dry_run {
            tracing::debug!("Dry run, not writing {:?}", unit.path);
        } else {
            write_file_safe(&unit.path, &unit.contents)?;
        }

        Ok(MatchOutcome::Created(CreatedBinding {
            component: source.base_name,
            main_export,
            url: link.url().to_string(),
            match_kind: link.kind,
            output_path: unit.path,
        }))
    }

    fn render(
        synthesizer: &ExampleSynthesizer,
        options: &GenerateOptions,
        source: &SourceFile,
        exports: &ExportSet,
        main_export: &str,
        url: &str,
    ) -> GeneratedUnit {
        let imports = import_clause(exports, &source.base_name);
        GeneratedUnit {
            path: options.output_path(&source.base_name),
            contents: compose(
                synthesizer,
                url,
                &imports,
                main_export,
                &source.base_name,
                exports,
            ),
        }
    }

    /// Extract and summarize the exports of one file without matching it.
    pub fn inspect_file(path: &Path, extension: &str) -> Result<FileExports, CodeLinkError> {
        let source = SourceFile::read(path, extension)?;
        let exports = extract_exports(&source.raw_text);
        let main_export = select_main_export(&exports, &source.base_name);
        Ok(FileExports {
            key: normalize_key(&source.base_name),
            base_name: source.base_name,
            exports,
            main_export,
        })
    }
}
