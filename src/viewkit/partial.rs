//! # Partial Rendering
//!
//! A partial is a named sub-template rendered with a set of variables. The
//! [`PartialRenderer`] only normalizes how the partial was specified and then
//! forwards to a [`TemplateRenderer`]; it never inspects the output.
//!
//! ## Accepted Shapes
//!
//! | Shape | Template rendered | Variables |
//! |-------|-------------------|-----------|
//! | `Name("nav")` | `nav` | call parameters |
//! | `Sequence(["nav", "alias"])` | `nav` | call parameters |
//! | `Model(model)` | `model.template()` | model variables merged with call parameters |
//!
//! A missing partial, an empty name, or an empty sequence fails with
//! [`ViewError::MissingPartial`]; a sequence of any length other than two fails
//! with [`ViewError::InvalidPartialShape`]. In both cases the renderer is not
//! called.

use crate::error::{Result, ViewError};
use serde_json::Value;
use std::borrow::Cow;
use viewkit_engine::Engine;

/// Variables handed to a template.
pub type Variables = serde_json::Map<String, Value>;

/// The rendering primitive partials are forwarded to.
pub trait TemplateRenderer {
    fn render(&self, template: &str, variables: &Variables) -> Result<String>;
}

impl TemplateRenderer for Engine {
    fn render(&self, template: &str, variables: &Variables) -> Result<String> {
        Ok(Engine::render(self, template, variables)?)
    }
}

impl<R: TemplateRenderer + ?Sized> TemplateRenderer for &R {
    fn render(&self, template: &str, variables: &Variables) -> Result<String> {
        (**self).render(template, variables)
    }
}

/// A template name bundled with its own variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    template: String,
    variables: Variables,
}

impl ViewModel {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: Variables::new(),
        }
    }

    /// Adds a variable, returning the model for chaining.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Merges `variables` into the model. Existing names are overwritten.
    pub fn set_variables(&mut self, variables: &Variables) -> &mut Self {
        for (name, value) in variables {
            self.variables.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }
}

/// How a partial was specified by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Partial {
    /// A plain template name.
    Name(String),

    /// `[template, alias]`. Only the template is used; any other length is an error.
    Sequence(Vec<String>),

    /// A model carrying its template name and variables.
    Model(ViewModel),
}

impl From<&str> for Partial {
    fn from(name: &str) -> Self {
        Partial::Name(name.to_string())
    }
}

impl From<String> for Partial {
    fn from(name: String) -> Self {
        Partial::Name(name)
    }
}

impl From<Vec<String>> for Partial {
    fn from(items: Vec<String>) -> Self {
        Partial::Sequence(items)
    }
}

impl From<Vec<&str>> for Partial {
    fn from(items: Vec<&str>) -> Self {
        Partial::Sequence(items.into_iter().map(String::from).collect())
    }
}

impl From<ViewModel> for Partial {
    fn from(model: ViewModel) -> Self {
        Partial::Model(model)
    }
}

/// Validates partial specifications and forwards them to a renderer.
pub struct PartialRenderer<R: TemplateRenderer> {
    renderer: R,
}

impl<R: TemplateRenderer> PartialRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Renders a partial, returning the renderer's output unchanged.
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingPartial`] and [`ViewError::InvalidPartialShape`] for
    /// unusable specifications; otherwise whatever the renderer returns.
    pub fn render(&self, partial: Option<Partial>, params: &Variables) -> Result<String> {
        let partial = partial.ok_or(ViewError::MissingPartial)?;

        let (template, variables): (String, Cow<'_, Variables>) = match partial {
            Partial::Name(name) if name.is_empty() => return Err(ViewError::MissingPartial),
            Partial::Name(name) => (name, Cow::Borrowed(params)),
            Partial::Sequence(items) if items.is_empty() => return Err(ViewError::MissingPartial),
            Partial::Sequence(items) if items.len() != 2 => {
                return Err(ViewError::InvalidPartialShape(items.len()))
            }
            Partial::Sequence(mut items) => (items.swap_remove(0), Cow::Borrowed(params)),
            Partial::Model(mut model) => {
                model.set_variables(params);
                (model.template, Cow::Owned(model.variables))
            }
        };

        tracing::debug!(template = %template, vars = variables.len(), "rendering partial");
        self.renderer.render(&template, &variables)
    }

    /// Shorthand for rendering a partial given by name.
    pub fn render_name(&self, name: &str, params: &Variables) -> Result<String> {
        self.render(Some(Partial::from(name)), params)
    }
}
