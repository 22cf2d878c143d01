//! Escaping primitives consumed by the serializer.
//!
//! The serializer needs two operations: one for attribute names, which are
//! escaped as running HTML text, and one for ordinary attribute values. Both are
//! behind the [`Escaper`] trait so callers (and tests) can supply their own.

/// The pair of escaping operations used when building attribute strings.
pub trait Escaper: Send + Sync {
    /// Escapes text for HTML content. Applied to attribute names.
    fn escape_text(&self, text: &str) -> String;

    /// Escapes an ordinary attribute value for a quoted attribute context.
    fn escape_attribute_value(&self, value: &str) -> String;
}

/// Entity escaping of the HTML-significant characters.
///
/// Names escape `& < > " ' /`; values escape `& < > "`, so an escaped value
/// never contains a double quote and always ends up double-quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape_text(&self, text: &str) -> String {
        html_escape::encode_safe(text).into_owned()
    }

    fn escape_attribute_value(&self, value: &str) -> String {
        html_escape::encode_double_quoted_attribute(value).into_owned()
    }
}

/// Character-reference escaping of every non-alphanumeric ASCII character
/// in attribute values (spaces included). Names are escaped like [`HtmlEscaper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictEscaper;

impl Escaper for StrictEscaper {
    fn escape_text(&self, text: &str) -> String {
        html_escape::encode_safe(text).into_owned()
    }

    fn escape_attribute_value(&self, value: &str) -> String {
        html_escape::encode_unquoted_attribute(value).into_owned()
    }
}

impl<E: Escaper + ?Sized> Escaper for &E {
    fn escape_text(&self, text: &str) -> String {
        (**self).escape_text(text)
    }

    fn escape_attribute_value(&self, value: &str) -> String {
        (**self).escape_attribute_value(value)
    }
}

impl<E: Escaper + ?Sized> Escaper for Box<E> {
    fn escape_text(&self, text: &str) -> String {
        (**self).escape_text(text)
    }

    fn escape_attribute_value(&self, value: &str) -> String {
        (**self).escape_attribute_value(value)
    }
}
