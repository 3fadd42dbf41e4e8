//! Template rendering on top of minijinja.

use minijinja::{Environment, UndefinedBehavior};
use startfast_core::{to_kebab_case, to_pascal_case, to_snake_case};

use crate::{error::TemplateError, variables::VariableBag};

const INLINE_TEMPLATE: &str = "<inline>";

/// Renders named or inline templates against a [`VariableBag`].
///
/// Undefined variables are errors, a single trailing newline is preserved,
/// and block tags do not leave blank lines behind. Three case filters are
/// available to templates: `snake_case`, `pascal_case` and `kebab_case`.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("snake_case", snake_case);
        env.add_filter("pascal_case", pascal_case);
        env.add_filter("kebab_case", kebab_case);
        Self { env }
    }

    /// Register a named template. Malformed source fails here rather than at render time.
    pub fn add_template(
        &mut self,
        name: &'static str,
        source: &'static str,
    ) -> Result<(), TemplateError> {
        self.env
            .add_template(name, source)
            .map_err(|e| TemplateError::from_minijinja(name, e))
    }

    pub fn render(&self, name: &str, vars: &VariableBag) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| TemplateError::from_minijinja(name, e))?;
        template
            .render(vars)
            .map_err(|e| TemplateError::from_minijinja(name, e))
    }

    pub fn render_str(&self, source: &str, vars: &VariableBag) -> Result<String, TemplateError> {
        self.env
            .render_str(source, vars)
            .map_err(|e| TemplateError::from_minijinja(INLINE_TEMPLATE, e))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn snake_case(value: &str) -> String {
    to_snake_case(value)
}

fn pascal_case(value: &str) -> String {
    to_pascal_case(value)
}

fn kebab_case(value: &str) -> String {
    to_kebab_case(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> VariableBag {
        VariableBag::new()
            .with("name", "order-line")
            .unwrap()
            .with("enabled", true)
            .unwrap()
    }

    #[test]
    fn test_render_named() {
        let mut renderer = Renderer::new();
        renderer
            .add_template("greeting", "class {{ name | pascal_case }}:\n    pass\n")
            .unwrap();

        let out = renderer.render("greeting", &bag()).unwrap();
        assert_eq!(out, "class OrderLine:\n    pass\n");
    }

    #[test]
    fn test_case_filters() {
        let renderer = Renderer::new();
        let out = renderer
            .render_str(
                "{{ name | snake_case }} {{ name | kebab_case }} {{ name | pascal_case }}",
                &bag(),
            )
            .unwrap();
        assert_eq!(out, "order_line order-line OrderLine");
    }

    #[test]
    fn test_block_tags_leave_no_blank_lines() {
        let renderer = Renderer::new();
        let out = renderer
            .render_str("a\n{% if enabled %}\nb\n{% endif %}\nc\n", &bag())
            .unwrap();
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn test_undefined_variable_is_error() {
        let renderer = Renderer::new();
        let err = renderer.render_str("{{ missing }}", &bag()).unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[test]
    fn test_unknown_filter_is_error() {
        let renderer = Renderer::new();
        let err = renderer
            .render_str("{{ name | shout }}", &bag())
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::Render { .. } | TemplateError::Syntax { .. }
        ));
    }

    #[test]
    fn test_malformed_template_rejected_on_add() {
        let mut renderer = Renderer::new();
        let err = renderer.add_template("broken", "{% if %}").unwrap_err();
        assert!(matches!(err, TemplateError::Syntax { .. }));
        assert!(matches!(
            renderer.render("broken", &bag()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_unknown_template() {
        let renderer = Renderer::new();
        let err = renderer.render("nope", &bag()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "nope"));
    }

    #[test]
    fn test_rendering_is_pure() {
        let mut renderer = Renderer::new();
        renderer.add_template("t", "{{ name }}\n").unwrap();
        let vars = bag();
        assert_eq!(
            renderer.render("t", &vars).unwrap(),
            renderer.render("t", &vars).unwrap()
        );
    }
}
