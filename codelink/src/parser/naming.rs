//! Name handling shared by both sides of the matching step.
//!
//! [`normalize_key`] turns any display name or file base name into a
//! canonical comparison key. [`select_main_export`] picks the primary
//! component of a file from its export set.

use crate::parser::exports::ExportSet;

/// Separator used between alphanumeric runs of a canonical key.
pub const KEY_SEPARATOR: char = '-';

/// Name returned by [`select_main_export`] when nothing better is available.
pub const FALLBACK_COMPONENT: &str = "Component";

/// Canonical, comparison-safe form of a name.
pub type CanonicalKey = String;

/// Normalize a name into a canonical key.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single [`KEY_SEPARATOR`] and trims separators from both
/// ends. Symbol-only input yields an empty key. Normalizing a key again
/// returns it unchanged.
pub fn normalize_key(name: &str) -> CanonicalKey {
    let mut key = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !key.is_empty() {
                key.push(KEY_SEPARATOR);
            }
            pending_separator = false;
            key.push(c);
        } else {
            pending_separator = true;
        }
    }

    key
}

/// Strip a trailing `.figma` marker so generated files map back to their source name.
fn source_base_name(file_base_name: &str) -> &str {
    file_base_name
        .strip_suffix(".figma")
        .unwrap_or(file_base_name)
}

/// Derive a PascalCase component name from a file base name.
///
/// `"dropdown-menu"` becomes `"DropdownMenu"`. Only the first letter of each
/// hyphen/underscore segment is touched; the rest of the segment is kept as is.
pub fn component_name_from_base(file_base_name: &str) -> String {
    source_base_name(file_base_name)
        .split(['-', '_'])
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Select the primary component exported by a file.
///
/// Preference order:
/// 1. the name derived from the file base name, if it is exported;
/// 2. the first export starting with an uppercase letter;
/// 3. the derived name itself;
/// 4. the first export;
/// 5. [`FALLBACK_COMPONENT`].
pub fn select_main_export(exports: &ExportSet, file_base_name: &str) -> String {
    let derived = component_name_from_base(file_base_name);

    if exports.contains(&derived) {
        return derived;
    }

    if let Some(capitalized) = exports.iter().find(|name| starts_uppercase(name)) {
        return capitalized.to_string();
    }

    if !derived.is_empty() {
        return derived;
    }

    exports
        .iter()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_COMPONENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exports(names: &[&str]) -> ExportSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_key("Button"), "button");
        assert_eq!(normalize_key("Dropdown Menu"), "dropdown-menu");
        assert_eq!(normalize_key("dropdown_menu"), "dropdown-menu");
        assert_eq!(normalize_key("  Alert / Dialog  "), "alert-dialog");
    }

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(normalize_key("--Card---Header--"), "card-header");
        assert_eq!(normalize_key("Input OTP (v2)"), "input-otp-v2");
    }

    #[test]
    fn test_normalize_symbol_only() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("  ///  "), "");
        assert_eq!(normalize_key("🎨"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "Button",
            "Dropdown Menu / Item",
            "__private__",
            "ÄÖÜ Panel",
            "a--b",
            "",
            "Tabs (Horizontal) 2",
        ];
        for s in samples {
            let once = normalize_key(s);
            assert_eq!(normalize_key(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_component_name_from_base() {
        assert_eq!(component_name_from_base("button"), "Button");
        assert_eq!(component_name_from_base("dropdown-menu"), "DropdownMenu");
        assert_eq!(component_name_from_base("radio_group"), "RadioGroup");
        assert_eq!(component_name_from_base("dialog.figma"), "Dialog");
        assert_eq!(component_name_from_base(""), "");
    }

    #[test]
    fn test_select_main_prefers_derived_name() {
        let set = exports(&["DropdownMenuTrigger", "DropdownMenu"]);
        assert_eq!(select_main_export(&set, "dropdown-menu"), "DropdownMenu");
    }

    #[test]
    fn test_select_main_first_capitalized() {
        let set = exports(&["buttonVariants", "IconButton", "Button2"]);
        assert_eq!(select_main_export(&set, "button"), "IconButton");
    }

    #[test]
    fn test_select_main_ignores_non_ascii_capitals() {
        let set = exports(&["Équipe", "Button"]);
        assert_eq!(select_main_export(&set, "team"), "Button");
    }

    #[test]
    fn test_select_main_falls_back_to_derived() {
        let set = exports(&["useToast", "toast"]);
        assert_eq!(select_main_export(&set, "use-toast"), "UseToast");
    }

    #[test]
    fn test_select_main_empty_base() {
        let set = exports(&["helper"]);
        assert_eq!(select_main_export(&set, ""), "helper");
        assert_eq!(select_main_export(&ExportSet::new(), ""), FALLBACK_COMPONENT);
    }
}
