//! Binding File Composer
//!
//! Assembles one Code Connect binding file. The layout is fixed so repeated
//! runs over unchanged inputs produce byte-identical output.

use std::path::PathBuf;

use crate::codegen::examples::ExampleSynthesizer;
use crate::parser::exports::ExportSet;
use crate::parser::naming::select_main_export;

/// Provenance marker written at the top of every generated file.
pub const PROVENANCE: &str = "/* Auto-generated by codelink. Do not edit. */";

/// Module imported for the binding call.
pub const CONNECT_MODULE: &str = "@figma/code-connect";

/// Synthesized output for one matched component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub path: PathBuf,
    pub contents: String,
}

/// Import of every export from the sibling source module.
///
/// Falls back to the derived main component when nothing was extracted.
pub fn import_clause(exports: &ExportSet, file_base_name: &str) -> String {
    let names = if exports.is_empty() {
        select_main_export(exports, file_base_name)
    } else {
        exports.joined()
    };
    format!("import {{ {} }} from \"./{}\"", names, file_base_name)
}

/// Property map entry. Always emitted, empty until component props can be
/// introspected.
pub fn props_entry(_exports: &ExportSet, _main_component: &str) -> String {
    "props: {},".to_string()
}

/// Escape a value for a double-quoted string literal.
fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Compose the full text of a binding file.
pub fn compose(
    synthesizer: &ExampleSynthesizer,
    url: &str,
    import_clause: &str,
    main_component: &str,
    file_base_name: &str,
    exports: &ExportSet,
) -> String {
    let example = synthesizer.synthesize(exports, main_component, file_base_name);
    let props = props_entry(exports, main_component);

    format!(
        r#"{provenance}

import React from "react"
import figma from "{connect}"
{imports}

figma.connect(
  {component},
  {url},
  {{
    {props}
    example: {example}
  }}
)
"#,
        provenance = PROVENANCE,
        connect = CONNECT_MODULE,
        imports = import_clause,
        component = main_component,
        url = quote_literal(url),
        props = props,
        example = example,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exports(names: &[&str]) -> ExportSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_import_clause_lists_all_exports() {
        let set = exports(&["Card", "CardHeader", "CardContent"]);
        assert_eq!(
            import_clause(&set, "card"),
            r#"import { Card, CardHeader, CardContent } from "./card""#
        );
    }

    #[test]
    fn test_import_clause_empty_exports() {
        assert_eq!(
            import_clause(&ExportSet::new(), "radio-group"),
            r#"import { RadioGroup } from "./radio-group""#
        );
    }

    #[test]
    fn test_compose_layout() {
        let synth = ExampleSynthesizer::with_builtin_templates();
        let set = exports(&["Button"]);
        let imports = import_clause(&set, "button");
        let text = compose(&synth, "https://figma.example/1", &imports, "Button", "button", &set);

        let expected = r#"/* Auto-generated by codelink. Do not edit. */

import React from "react"
import figma from "@figma/code-connect"
import { Button } from "./button"

figma.connect(
  Button,
  "https://figma.example/1",
  {
    props: {},
    example: (p) => <Button {...p}>Button</Button>
  }
)
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_url_is_escaped() {
        let synth = ExampleSynthesizer::new();
        let set = exports(&["Badge"]);
        let text = compose(&synth, r#"https://x/"a"\b"#, "", "Badge", "badge", &set);
        assert!(text.contains(r#""https://x/\"a\"\\b""#));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let synth = ExampleSynthesizer::with_builtin_templates();
        let set = exports(&["Tabs", "TabsList", "TabsTrigger", "TabsContent"]);
        let imports = import_clause(&set, "tabs");
        let a = compose(&synth, "u", &imports, "Tabs", "tabs", &set);
        let b = compose(&synth, "u", &imports, "Tabs", "tabs", &set);
        assert_eq!(a, b);
        assert!(a.contains("<TabsTrigger value=\"tab1\">"));
    }
}
