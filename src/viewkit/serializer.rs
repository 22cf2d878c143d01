//! # Attribute Serialization
//!
//! Turns an [`AttributeMap`] into the attribute part of an HTML tag.
//!
//! ## Rules
//!
//! For every entry, in insertion order:
//!
//! 1. Entries holding null or the empty text are dropped. `0`, `false` and
//!    empty sequences are kept.
//! 2. The name is escaped as HTML text.
//! 3. `true` renders as a bare name (` disabled`). Nothing else does.
//! 4. Names starting with `on` (event handlers) and the name `constraints`
//!    are not escaped: scalars are written as-is and everything else is
//!    encoded as JSON. With [`SerializerOptions::structured_values_as_json`]
//!    the same applies to any structured value, whatever its name.
//! 5. Any other value is coerced to text (sequences joined by a space) and
//!    escaped as an attribute value.
//! 6. With an [`IdPrefix`], the value of `id` is prefixed (`menu-main`).
//! 7. Values containing `"` are wrapped in single quotes, all others in
//!    double quotes.
//!
//! ## Known Limitation
//!
//! Quote selection is a heuristic, not escaping. An unescaped value holding
//! both `"` and `'` (only possible for a scalar event/constraints value) produces
//! broken markup.

use crate::attributes::{AttributeMap, AttributeValue};
use crate::escape::{Escaper, HtmlEscaper};

/// Variant behavior of the serializer. Both switches default to off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerOptions {
    /// Treat structured (object-like) values like event attributes: encode
    /// them as JSON and skip attribute escaping, whatever the name.
    pub structured_values_as_json: bool,

    /// Prefix applied to the value of the `id` attribute.
    pub id_prefix: Option<IdPrefix>,
}

/// Component prefix used to namespace `id` values.
///
/// Derived from a fully-qualified type name: the last path segment,
/// lower-cased. `App\View\Menu` and `app::view::Menu` both give `menu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPrefix(String);

impl IdPrefix {
    /// Derives the prefix from a fully-qualified type name. Both `\` and `::`
    /// are accepted as separators; generic arguments are ignored.
    pub fn from_type_name(name: &str) -> Self {
        let base = name.split('<').next().unwrap_or(name);
        let segment = base
            .rsplit(|c: char| c == '\\' || c == ':')
            .next()
            .unwrap_or(base);
        Self(segment.trim().to_lowercase())
    }

    /// Derives the prefix from a Rust type.
    ///
    /// ```rust
    /// use viewkit::serializer::IdPrefix;
    ///
    /// struct Breadcrumbs;
    /// assert_eq!(IdPrefix::of::<Breadcrumbs>().as_str(), "breadcrumbs");
    /// ```
    pub fn of<T: ?Sized>() -> Self {
        Self::from_type_name(std::any::type_name::<T>())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins the prefix and an (already escaped) id value with a hyphen.
    pub fn apply(&self, value: &str) -> String {
        format!("{}-{}", self.0, value)
    }
}

/// Builds attribute strings and the tags around them.
///
/// # Example
///
/// ```rust
/// use viewkit::attributes::AttributeMap;
/// use viewkit::serializer::AttributeSerializer;
///
/// let serializer = AttributeSerializer::default();
/// let attribs = AttributeMap::new()
///     .with("id", "x")
///     .with("title", "")
///     .with("class", vec!["btn", "btn-primary"])
///     .with("disabled", true);
///
/// assert_eq!(
///     serializer.open_tag("button", &attribs),
///     r#"<button id="x" class="btn btn-primary" disabled>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AttributeSerializer<E: Escaper = HtmlEscaper> {
    escaper: E,
    options: SerializerOptions,
}

impl Default for AttributeSerializer<HtmlEscaper> {
    fn default() -> Self {
        Self::new(HtmlEscaper)
    }
}

impl<E: Escaper> AttributeSerializer<E> {
    pub fn new(escaper: E) -> Self {
        Self::with_options(escaper, SerializerOptions::default())
    }

    pub fn with_options(escaper: E, options: SerializerOptions) -> Self {
        Self { escaper, options }
    }

    /// Enables or disables JSON encoding of structured values under any name.
    pub fn structured_values_as_json(mut self, enabled: bool) -> Self {
        self.options.structured_values_as_json = enabled;
        self
    }

    /// Enables `id` normalization with the given prefix.
    pub fn with_id_prefix(mut self, prefix: IdPrefix) -> Self {
        self.options.id_prefix = Some(prefix);
        self
    }

    /// `<element attribs…>`. The element name is not validated.
    pub fn open_tag(&self, element: &str, attribs: &AttributeMap) -> String {
        format!("<{}{}>", element, self.serialize(attribs))
    }

    /// `</element>`. The element name is not validated or escaped.
    pub fn close_tag(&self, element: &str) -> String {
        format!("</{}>", element)
    }

    /// Serializes attributes using the configured id prefix, if any.
    ///
    /// Every fragment carries its own leading space; the result is empty when
    /// no attribute survives filtering.
    pub fn serialize(&self, attribs: &AttributeMap) -> String {
        self.serialize_with(attribs, self.options.id_prefix.as_ref())
    }

    /// Serializes attributes, normalizing `id` with `prefix` for this call
    /// only (overrides the configured prefix).
    pub fn serialize_with_id_prefix(&self, attribs: &AttributeMap, prefix: &IdPrefix) -> String {
        self.serialize_with(attribs, Some(prefix))
    }

    fn serialize_with(&self, attribs: &AttributeMap, id_prefix: Option<&IdPrefix>) -> String {
        tracing::trace!(count = attribs.len(), "serializing attributes");

        let mut xhtml = String::new();

        for (name, value) in attribs.iter().filter(|(_, v)| !v.is_omitted()) {
            let key = self.escaper.escape_text(name);

            if value.is_true() {
                xhtml.push_str(&format!(" {}", key));
                continue;
            }

            let mut val = if self.renders_raw(&key, value) {
                if value.is_scalar() {
                    value.to_text()
                } else {
                    value.to_json()
                }
            } else {
                self.escaper.escape_attribute_value(&value.to_text())
            };

            if key == "id" {
                if let Some(prefix) = id_prefix {
                    val = prefix.apply(&val);
                }
            }

            xhtml.push_str(&format!(" {}={}", key, quote(&val)));
        }

        xhtml
    }

    /// Event handlers, `constraints`, and (when enabled) structured values
    /// bypass attribute escaping.
    fn renders_raw(&self, key: &str, value: &AttributeValue) -> bool {
        is_event_or_constraint(key)
            || (self.options.structured_values_as_json && value.is_structured())
    }
}

/// True for event-handler names (`on…`, case-sensitive) and `constraints`.
pub fn is_event_or_constraint(key: &str) -> bool {
    key.starts_with("on") || key == "constraints"
}

fn quote(value: &str) -> String {
    if value.contains('"') {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}
