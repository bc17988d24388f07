//! Best-effort export extraction for component source files.
//!
//! There is no syntax tree here. Each [`ExportRule`] scans the raw text for
//! one declaration shape and appends what it finds to an [`ExportSet`].
//! Rules run in order and their results are unioned, so a new shape can be
//! added without touching the existing ones.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;

/// `function Button(` — a capitalized function declaration.
static FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+([A-Z][a-zA-Z0-9]*)\s*\(").expect("static regex"));

/// `export { Foo, Bar as Baz }` — a grouped export clause.
static GROUPED_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s*\{\s*([^}]+)\s*\}").expect("static regex"));

/// `export const Foo` / `export function Foo`.
static EXPORTED_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(?:const|function)\s+([A-Z][a-zA-Z0-9]*)").expect("static regex")
});

/// Insertion-ordered set of exported names found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExportSet {
    names: IndexSet<String>,
}

impl ExportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True when every name in `required` is present.
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|name| self.contains(name.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names joined with `", "`, in discovery order.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

impl<'a> FromIterator<&'a str> for ExportSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ExportSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl FromIterator<String> for ExportSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// One independent extraction heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRule {
    /// Capitalized function declaration followed by an argument list.
    FunctionDeclaration,
    /// Grouped export clause; the first token of each item is kept, so
    /// `Bar as Baz` contributes `Bar`.
    GroupedExport,
    /// `export const Name` or `export function Name` with a capitalized name.
    ExportedDeclaration,
}

impl ExportRule {
    /// Every rule, in the order results are merged.
    pub const ALL: [ExportRule; 3] = [
        ExportRule::FunctionDeclaration,
        ExportRule::GroupedExport,
        ExportRule::ExportedDeclaration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExportRule::FunctionDeclaration => "function_declaration",
            ExportRule::GroupedExport => "grouped_export",
            ExportRule::ExportedDeclaration => "exported_declaration",
        }
    }

    /// Append every name this rule finds in `text` to `exports`.
    pub fn apply(&self, text: &str, exports: &mut ExportSet) {
        match self {
            ExportRule::FunctionDeclaration => collect_first_group(&FUNCTION_DECL, text, exports),
            ExportRule::ExportedDeclaration => collect_first_group(&EXPORTED_DECL, text, exports),
            ExportRule::GroupedExport => {
                for caps in GROUPED_EXPORT.captures_iter(text) {
                    let Some(items) = caps.get(1) else { continue };
                    for item in items.as_str().split(',') {
                        if let Some(name) = item.split_whitespace().next() {
                            exports.insert(name);
                        }
                    }
                }
            }
        }
    }
}

fn collect_first_group(pattern: &Regex, text: &str, exports: &mut ExportSet) {
    for caps in pattern.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            exports.insert(name.as_str());
        }
    }
}

/// Extract the exported component names of a source file.
///
/// An empty result is a normal outcome, not an error.
pub fn extract_exports(text: &str) -> ExportSet {
    extract_with_rules(text, &ExportRule::ALL)
}

/// Extract using a caller-chosen subset or ordering of rules.
pub fn extract_with_rules(text: &str, rules: &[ExportRule]) -> ExportSet {
    let mut exports = ExportSet::new();
    for rule in rules {
        let before = exports.len();
        rule.apply(text, &mut exports);
        tracing::trace!(
            "Rule {} added {} export(s)",
            rule.name(),
            exports.len() - before
        );
    }
    exports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &ExportSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_exported_function() {
        let set = extract_exports("export function Button(props) { return null }");
        assert!(set.contains("Button"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_grouped_export_with_alias() {
        let set = extract_exports("const Foo = 1;\nconst Bar = 2;\nexport { Foo, Bar as Baz }\n");
        assert_eq!(names(&set), vec!["Foo", "Bar"]);
        assert!(!set.contains("Baz"));
    }

    #[test]
    fn test_exported_const() {
        let set = extract_exports("export const Card = React.forwardRef(() => null)");
        assert_eq!(names(&set), vec!["Card"]);
    }

    #[test]
    fn test_lowercase_declarations_ignored() {
        let set = extract_exports("function helper() {}\nexport const value = 1\n");
        assert!(set.is_empty());
    }

    #[test]
    fn test_no_exports() {
        assert!(extract_exports("const x = 1").is_empty());
        assert!(extract_exports("").is_empty());
    }

    #[test]
    fn test_rule_order_and_dedup() {
        let text = r#"
export const Trigger = Primitive.Trigger
function Tabs({ className }) {}
function TabsList() {}
export { Tabs, TabsList, Trigger as TabsTrigger }
"#;
        let set = extract_exports(text);
        // function declarations first, then grouped clause, then export-const
        assert_eq!(names(&set), vec!["Tabs", "TabsList", "Trigger"]);
    }

    #[test]
    fn test_grouped_export_multiline_keeps_raw_tokens() {
        let text = "export {\n  Dialog,\n  DialogContent,\n  type DialogProps,\n}\n";
        let set = extract_exports(text);
        assert_eq!(names(&set), vec!["Dialog", "DialogContent", "type"]);
    }

    #[test]
    fn test_single_rule() {
        let text = "function Alert() {}\nexport { Alert, AlertTitle }";
        let set = extract_with_rules(text, &[ExportRule::GroupedExport]);
        assert_eq!(names(&set), vec!["Alert", "AlertTitle"]);
    }

    #[test]
    fn test_contains_all() {
        let set: ExportSet = ["Tabs", "TabsList"].into_iter().collect();
        assert!(set.contains_all(&["TabsList", "Tabs"]));
        assert!(!set.contains_all(&["Tabs", "TabsTrigger"]));
        assert!(set.contains_all::<&str>(&[]));
    }

    #[test]
    fn test_joined() {
        let set: ExportSet = ["A", "B", "A"].into_iter().collect();
        assert_eq!(set.joined(), "A, B");
    }
}
