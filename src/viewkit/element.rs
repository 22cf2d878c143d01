//! Element rendering: an opening tag, content, and the matching closing tag.

use crate::attributes::AttributeMap;
use crate::escape::{Escaper, HtmlEscaper};
use crate::serializer::{AttributeSerializer, IdPrefix};

/// Renders complete elements around already-escaped content.
///
/// The content is inserted verbatim; escaping it is the caller's job.
///
/// # Example
///
/// ```rust
/// use viewkit::attributes::AttributeMap;
/// use viewkit::element::HtmlElement;
///
/// let element = HtmlElement::default();
/// let attribs = AttributeMap::new().with("href", "#").with("target", "_blank");
///
/// assert_eq!(
///     element.to_html("a", &attribs, "Home"),
///     r##"<a href="#" target="_blank">Home</a>"##
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HtmlElement<E: Escaper = HtmlEscaper> {
    serializer: AttributeSerializer<E>,
}

impl Default for HtmlElement<HtmlEscaper> {
    fn default() -> Self {
        Self::new(AttributeSerializer::default())
    }
}

impl<E: Escaper> HtmlElement<E> {
    pub fn new(serializer: AttributeSerializer<E>) -> Self {
        Self { serializer }
    }

    pub fn serializer(&self) -> &AttributeSerializer<E> {
        &self.serializer
    }

    pub fn open_tag(&self, element: &str, attribs: &AttributeMap) -> String {
        self.serializer.open_tag(element, attribs)
    }

    pub fn close_tag(&self, element: &str) -> String {
        self.serializer.close_tag(element)
    }

    /// `<element attribs…>content</element>`
    pub fn to_html(&self, element: &str, attribs: &AttributeMap, content: &str) -> String {
        format!(
            "{}{}{}",
            self.open_tag(element, attribs),
            content,
            self.close_tag(element)
        )
    }

    /// Like [`to_html`](Self::to_html), with the `id` value namespaced by
    /// `prefix` (`menu-main` for id `main`).
    pub fn to_html_with_prefix(
        &self,
        element: &str,
        attribs: &AttributeMap,
        content: &str,
        prefix: &IdPrefix,
    ) -> String {
        format!(
            "<{}{}>{}{}",
            element,
            self.serializer.serialize_with_id_prefix(attribs, prefix),
            content,
            self.close_tag(element)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingEscaper;
    use serde_json::json;

    fn escaper() -> RecordingEscaper {
        RecordingEscaper::new()
            .text("class", "classEscaped")
            .text("href", "hrefEscaped")
            .text("target", "targetEscaped")
            .text("open", "openEscaped")
            .attr("testId", "testIdEscaped")
            .attr("test-class", "testClassEscaped")
            .attr("#", "#Escaped")
            .attr("_blank", "_blankEscaped")
    }

    fn link_attribs() -> AttributeMap {
        AttributeMap::new()
            .with("id", "testId")
            .with("title", "")
            .with("class", "test-class")
            .with("href", "#")
            .with("target", "_blank")
            .with("onClick", json!({"a": "b"}))
            .with("data-test", vec!["test-class1", "test-class2"])
    }

    #[test]
    fn test_to_html() {
        let escaper = escaper();
        let element = HtmlElement::new(AttributeSerializer::new(&escaper));

        assert_eq!(
            element.to_html("a", &link_attribs(), "testLabelTranslatedAndEscaped"),
            r##"<a id="testIdEscaped" classEscaped="testClassEscaped" hrefEscaped="#Escaped" targetEscaped="_blankEscaped" onClick='{"a":"b"}' data-test="test-class1 test-class2">testLabelTranslatedAndEscaped</a>"##
        );
        assert_eq!(escaper.text_calls().len(), 6);
        assert_eq!(escaper.attr_calls().len(), 5);
    }

    #[test]
    fn test_to_html_ignoring_null_attributes() {
        let escaper = escaper();
        let element = HtmlElement::new(AttributeSerializer::new(&escaper));
        let attribs = link_attribs().with("open", None::<bool>);

        assert_eq!(
            element.to_html("a", &attribs, "label"),
            r##"<a id="testIdEscaped" classEscaped="testClassEscaped" hrefEscaped="#Escaped" targetEscaped="_blankEscaped" onClick='{"a":"b"}' data-test="test-class1 test-class2">label</a>"##
        );
        assert_eq!(escaper.text_calls().len(), 6);
    }

    #[test]
    fn test_open_not_ignoring_true_attributes() {
        let escaper = escaper();
        let element = HtmlElement::new(AttributeSerializer::new(&escaper));
        let attribs = link_attribs().with("open", true);

        assert_eq!(
            element.open_tag("a", &attribs),
            r##"<a id="testIdEscaped" classEscaped="testClassEscaped" hrefEscaped="#Escaped" targetEscaped="_blankEscaped" onClick='{"a":"b"}' data-test="test-class1 test-class2" openEscaped>"##
        );
    }

    #[test]
    fn test_close() {
        let element = HtmlElement::default();
        assert_eq!(element.close_tag("a"), "</a>");
    }

    #[test]
    fn test_empty_content_and_attributes() {
        let element = HtmlElement::default();
        assert_eq!(element.to_html("p", &AttributeMap::new(), ""), "<p></p>");
    }

    #[test]
    fn test_to_html_with_prefix() {
        let element = HtmlElement::default();
        let attribs = AttributeMap::new().with("id", "top").with("class", "nav");

        assert_eq!(
            element.to_html_with_prefix(
                "ul",
                &attribs,
                "<li>x</li>",
                &IdPrefix::from_type_name(r"Mezzio\Navigation\Menu")
            ),
            r#"<ul id="menu-top" class="nav"><li>x</li></ul>"#
        );
    }

    #[test]
    fn test_to_html_with_prefix_without_id() {
        let element = HtmlElement::default();
        let attribs = AttributeMap::new().with("class", "nav");

        assert_eq!(
            element.to_html_with_prefix("ul", &attribs, "", &IdPrefix::from_type_name("Menu")),
            r#"<ul class="nav"></ul>"#
        );
    }
}
