//! Binding file generation: usage examples and the file composer.

pub mod binding;
pub mod examples;

// Re-exports for convenience
pub use binding::{compose, import_clause, props_entry, GeneratedUnit, CONNECT_MODULE, PROVENANCE};
pub use examples::{builtin_templates, generic_example, ExampleSynthesizer, ExampleTemplate};
