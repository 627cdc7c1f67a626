//! Placeholder substitution over template bodies.

mod bindings;
mod minijinja;

pub use self::bindings::{Bindings, Placeholder};
pub use self::minijinja::MiniJinjaRenderer;

use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template body with the given bindings.
    ///
    /// # Arguments
    /// * `name` - Template name, used in error messages
    /// * `template` - Template source
    /// * `bindings` - Placeholder values
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text, or an error naming unbound placeholders
    fn render(&self, name: &str, template: &str, bindings: &Bindings) -> Result<String>;
}
