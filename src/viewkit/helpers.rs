//! # Helper Wiring
//!
//! [`ViewHelpers`] builds every helper once, at startup, from a [`ViewConfig`]:
//! the escaper, the attribute serializer, the element renderer and the partial
//! renderer with its template engine. Dependencies are passed explicitly through
//! constructors; there is no container lookup.
//!
//! The element renderer is also exposed to templates as functions:
//!
//! | Function | Output |
//! |----------|--------|
//! | `html_attribs(attribs)` | ` id="x" class="c"` |
//! | `open_tag(name, attribs)` | `<a href="#">` |
//! | `close_tag(name)` | `</a>` |
//! | `html_element(name, attribs, content)` | `<a href="#">Home</a>` |
//!
//! All of them return safe strings, so they are not escaped again inside
//! `.html` templates. `content` is escaped unless it is already safe.

use crate::attributes::AttributeMap;
use crate::config::ViewConfig;
use crate::element::HtmlElement;
use crate::error::Result;
use crate::escape::{Escaper, HtmlEscaper, StrictEscaper};
use crate::partial::{Partial, PartialRenderer, Variables};
use crate::serializer::AttributeSerializer;
use std::sync::Arc;
use viewkit_engine::minijinja::{Error as TemplateError, ErrorKind};
use viewkit_engine::{Engine, Value};

/// Escaper selected at runtime from configuration.
pub type DynEscaper = Box<dyn Escaper>;

/// All view helpers, wired together.
pub struct ViewHelpers {
    element: Arc<HtmlElement<DynEscaper>>,
    partials: PartialRenderer<Engine>,
}

impl ViewHelpers {
    pub fn from_config(config: &ViewConfig) -> Self {
        let escaper: DynEscaper = if config.strict_attribute_escaping {
            Box::new(StrictEscaper)
        } else {
            Box::new(HtmlEscaper)
        };
        let serializer = AttributeSerializer::with_options(escaper, config.serializer_options());
        let element = Arc::new(HtmlElement::new(serializer));

        tracing::debug!(
            templates = %config.templates_dir.display(),
            ext = %config.template_ext,
            "wiring view helpers"
        );
        let mut engine =
            Engine::from_dir(&config.templates_dir).with_default_extension(&config.template_ext);
        register_functions(&mut engine, Arc::clone(&element));

        Self {
            element,
            partials: PartialRenderer::new(engine),
        }
    }

    pub fn element(&self) -> &HtmlElement<DynEscaper> {
        &self.element
    }

    pub fn serializer(&self) -> &AttributeSerializer<DynEscaper> {
        self.element.serializer()
    }

    /// The engine behind the partial renderer, e.g. to register inline templates.
    pub fn engine_mut(&mut self) -> &mut Engine {
        self.partials.renderer_mut()
    }

    pub fn render_partial(&self, partial: Option<Partial>, params: &Variables) -> Result<String> {
        self.partials.render(partial, params)
    }
}

impl Default for ViewHelpers {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

fn register_functions(engine: &mut Engine, element: Arc<HtmlElement<DynEscaper>>) {
    let env = engine.env_mut();

    let el = Arc::clone(&element);
    env.add_function(
        "html_attribs",
        move |attribs: Value| -> std::result::Result<Value, TemplateError> {
            let attribs = attribute_map(&attribs)?;
            Ok(Value::from_safe_string(el.serializer().serialize(&attribs)))
        },
    );

    let el = Arc::clone(&element);
    env.add_function(
        "open_tag",
        move |name: String, attribs: Option<Value>| -> std::result::Result<Value, TemplateError> {
            let attribs = match attribs {
                Some(value) => attribute_map(&value)?,
                None => AttributeMap::new(),
            };
            Ok(Value::from_safe_string(el.open_tag(&name, &attribs)))
        },
    );

    let el = Arc::clone(&element);
    env.add_function("close_tag", move |name: String| -> Value {
        Value::from_safe_string(el.close_tag(&name))
    });

    env.add_function(
        "html_element",
        move |name: String,
              attribs: Value,
              content: Option<Value>|
              -> std::result::Result<Value, TemplateError> {
            let attribs = attribute_map(&attribs)?;
            let content = content.map(|c| content_markup(&c)).unwrap_or_default();
            Ok(Value::from_safe_string(
                element.to_html(&name, &attribs, &content),
            ))
        },
    );
}

/// Converts a template value into an attribute map, keeping map order.
fn attribute_map(value: &Value) -> std::result::Result<AttributeMap, TemplateError> {
    if value.is_undefined() || value.is_none() {
        return Ok(AttributeMap::new());
    }
    serde_json::to_string(value)
        .and_then(|json| AttributeMap::from_json(&json))
        .map_err(|e| {
            TemplateError::new(
                ErrorKind::InvalidOperation,
                format!("attributes must be a map: {}", e),
            )
        })
}

fn content_markup(content: &Value) -> String {
    if content.is_undefined() || content.is_none() {
        String::new()
    } else if content.is_safe() {
        content.to_string()
    } else {
        html_escape::encode_text(&content.to_string()).into_owned()
    }
}
