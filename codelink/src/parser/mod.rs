pub mod exports;
pub mod naming;

// Re-export for convenience
pub use exports::{extract_exports, extract_with_rules, ExportRule, ExportSet};
pub use naming::{
    component_name_from_base, normalize_key, select_main_export, CanonicalKey,
    FALLBACK_COMPONENT, KEY_SEPARATOR,
};
