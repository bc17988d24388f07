//! Example Synthesizer
//!
//! Produces the `example:` snippet of a binding. Compound components get a
//! hand-written template that shows their real composition; everything else
//! gets a generic wrapper around the main component.
//!
//! Templates are checked in order and the first whose gate passes wins. New
//! templates go after the existing ones so earlier choices never change.

use crate::parser::exports::ExportSet;

/// A specialized usage template gated on file name and required sub-parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTemplate {
    /// File base name this template applies to (e.g. `"dialog"`).
    pub base_name: String,
    /// Exports that must all be present for the template to apply.
    pub required: Vec<String>,
    /// Snippet text, emitted verbatim.
    pub body: String,
}

impl ExampleTemplate {
    pub fn new(base_name: &str, required: &[&str], body: &str) -> Self {
        Self {
            base_name: base_name.to_string(),
            required: required.iter().map(|s| s.to_string()).collect(),
            body: body.to_string(),
        }
    }

    /// True when this template applies to the given file.
    pub fn matches(&self, exports: &ExportSet, file_base_name: &str) -> bool {
        self.base_name == file_base_name && exports.contains_all(&self.required)
    }
}

const DIALOG_EXAMPLE: &str = r#"() => (
      <Dialog>
        <DialogTrigger>Open</DialogTrigger>
        <DialogContent>
          <DialogHeader>
            <DialogTitle>Title</DialogTitle>
          </DialogHeader>
        </DialogContent>
      </Dialog>
    )"#;

const TABS_EXAMPLE: &str = r#"() => (
      <Tabs defaultValue="tab1">
        <TabsList>
          <TabsTrigger value="tab1">Tab 1</TabsTrigger>
        </TabsList>
        <TabsContent value="tab1">Content</TabsContent>
      </Tabs>
    )"#;

const TOOLTIP_EXAMPLE: &str = r#"() => (
      <Tooltip>
        <TooltipTrigger>Hover</TooltipTrigger>
        <TooltipContent>Tooltip</TooltipContent>
      </Tooltip>
    )"#;

const DROPDOWN_MENU_EXAMPLE: &str = r#"() => (
      <DropdownMenu>
        <DropdownMenuTrigger>Open</DropdownMenuTrigger>
        <DropdownMenuContent>
          <DropdownMenuItem>Item</DropdownMenuItem>
        </DropdownMenuContent>
      </DropdownMenu>
    )"#;

const CARD_EXAMPLE: &str = r#"() => (
      <Card>
        <CardHeader>
          <CardTitle>Title</CardTitle>
        </CardHeader>
        <CardContent>Content</CardContent>
      </Card>
    )"#;

/// Built-in templates, in evaluation order.
pub fn builtin_templates() -> Vec<ExampleTemplate> {
    vec![
        ExampleTemplate::new("dialog", &["DialogTrigger", "DialogContent"], DIALOG_EXAMPLE),
        ExampleTemplate::new("tabs", &["TabsList", "TabsTrigger"], TABS_EXAMPLE),
        ExampleTemplate::new("tooltip", &["TooltipTrigger", "TooltipContent"], TOOLTIP_EXAMPLE),
        ExampleTemplate::new(
            "dropdown-menu",
            &["DropdownMenuTrigger", "DropdownMenuContent"],
            DROPDOWN_MENU_EXAMPLE,
        ),
        ExampleTemplate::new("card", &["CardHeader", "CardContent"], CARD_EXAMPLE),
    ]
}

/// Generic wrapper used when no template applies.
pub fn generic_example(main_component: &str) -> String {
    format!(
        "(p) => <{0} {{...p}}>{0}</{0}>",
        main_component
    )
}

/// Ordered template table with a generic fallback.
#[derive(Debug, Clone, Default)]
pub struct ExampleSynthesizer {
    templates: Vec<ExampleTemplate>,
}

impl ExampleSynthesizer {
    /// Synthesizer with no specialized templates; always emits the generic wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_templates() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }

    /// Append a template after the existing ones.
    pub fn push(&mut self, template: ExampleTemplate) {
        self.templates.push(template);
    }

    pub fn templates(&self) -> &[ExampleTemplate] {
        &self.templates
    }

    /// First template whose gate passes, if any.
    pub fn find_template(
        &self,
        exports: &ExportSet,
        file_base_name: &str,
    ) -> Option<&ExampleTemplate> {
        self.templates
            .iter()
            .find(|t| t.matches(exports, file_base_name))
    }

    pub fn synthesize(
        &self,
        exports: &ExportSet,
        main_component: &str,
        file_base_name: &str,
    ) -> String {
        match self.find_template(exports, file_base_name) {
            Some(template) => template.body.clone(),
            None => generic_example(main_component),
        }
    }
}
