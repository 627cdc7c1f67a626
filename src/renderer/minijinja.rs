use crate::error::{Error, Result};
use crate::renderer::{Bindings, TemplateRenderer};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Placeholders are plain `{{ name }}` expressions. Rendering is a single pass
/// over the template source: substituted values are emitted as-is and never
/// parsed again, so a value that happens to contain `{{ schema }}` stays literal.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        // Generated sources are not HTML: `Lazy<IBookingRepository>` must survive verbatim.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, bindings: &Bindings) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())?;
        let tmpl = env.get_template(name)?;

        let mut unbound: Vec<String> = tmpl
            .undeclared_variables(false)
            .into_iter()
            .filter(|variable| !bindings.is_bound(variable))
            .collect();
        if !unbound.is_empty() {
            unbound.sort();
            return Err(Error::UnboundPlaceholder {
                template: name.to_string(),
                placeholders: unbound.join(", "),
            });
        }

        match tmpl.render(bindings.to_context()) {
            Ok(rendered) => Ok(rendered),
            Err(e) => {
                log::error!("Failed to render template '{name}': {e}");
                Err(e.into())
            }
        }
    }
}
