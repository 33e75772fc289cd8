//! Template renderer.

use super::{TemplateError, DASHBOARD_TEMPLATE, REPORT_TEMPLATE};
use handlebars::{
    html_escape, no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use serde::Serialize;

/// Output escaping applied to interpolated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escaping {
    /// Escape HTML special characters.
    Html,

    /// Emit values verbatim (markdown).
    None,
}

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - The requested escaping
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry(escaping: Escaping) -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    match escaping {
        Escaping::Html => hbs.register_escape_fn(html_escape),
        Escaping::None => hbs.register_escape_fn(no_escape),
    }

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    // Register the eq helper for conditionals
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Template renderer for the dashboard page and the markdown report.
pub struct TemplateRenderer {
    html: Handlebars<'static>,
    markdown: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            html: create_handlebars_registry(Escaping::Html),
            markdown: create_handlebars_registry(Escaping::None),
        }
    }

    /// Renders the dashboard page.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_dashboard<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        self.render_html(DASHBOARD_TEMPLATE, data)
    }

    /// Renders the markdown report.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_report<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        self.render_markdown(REPORT_TEMPLATE, data)
    }

    /// Renders an HTML template with the given data.
    pub fn render_html<T: Serialize>(&self, template: &str, data: &T) -> Result<String, TemplateError> {
        Ok(self.html.render_template(template, data)?)
    }

    /// Renders a markdown template with the given data.
    pub fn render_markdown<T: Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<String, TemplateError> {
        Ok(self.markdown.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple_template() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render_markdown("{{open}} open of {{total}}", &json!({"open": 3, "total": 5}))
            .unwrap();

        assert_eq!(result, "3 open of 5");
    }

    #[test]
    fn test_render_conditional_eq() {
        let renderer = TemplateRenderer::new();
        let template = r#"{{#if (eq priority "high")}}bg-danger{{else}}bg-secondary{{/if}}"#;

        let high = renderer
            .render_html(template, &json!({"priority": "high"}))
            .unwrap();
        let low = renderer
            .render_html(template, &json!({"priority": "low"}))
            .unwrap();

        assert_eq!(high, "bg-danger");
        assert_eq!(low, "bg-secondary");
    }

    #[test]
    fn test_html_is_escaped() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render_html("{{title}}", &json!({"title": "<script>alert('xss')</script>"}))
            .unwrap();

        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_no_markdown_escaping() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render_markdown("{{table}}", &json!({"table": "| a | b |"}))
            .unwrap();

        assert_eq!(result, "| a | b |");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variables() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render_markdown("{{missing}}", &json!({}));

        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }
}
