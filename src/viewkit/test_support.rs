//! Fakes shared by the unit tests.

use crate::error::Result;
use crate::escape::Escaper;
use crate::partial::{TemplateRenderer, Variables};
use std::collections::HashMap;
use std::sync::Mutex;

/// Escaper that returns canned replacements and records every call.
///
/// Inputs without a canned replacement are returned unchanged.
#[derive(Default)]
pub struct RecordingEscaper {
    text: HashMap<String, String>,
    attr: HashMap<String, String>,
    pub text_calls: Mutex<Vec<String>>,
    pub attr_calls: Mutex<Vec<String>>,
}

impl RecordingEscaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, input: &str, output: &str) -> Self {
        self.text.insert(input.to_string(), output.to_string());
        self
    }

    pub fn attr(mut self, input: &str, output: &str) -> Self {
        self.attr.insert(input.to_string(), output.to_string());
        self
    }

    pub fn text_calls(&self) -> Vec<String> {
        self.text_calls.lock().unwrap().clone()
    }

    pub fn attr_calls(&self) -> Vec<String> {
        self.attr_calls.lock().unwrap().clone()
    }
}

impl Escaper for RecordingEscaper {
    fn escape_text(&self, text: &str) -> String {
        self.text_calls.lock().unwrap().push(text.to_string());
        self.text.get(text).cloned().unwrap_or_else(|| text.to_string())
    }

    fn escape_attribute_value(&self, value: &str) -> String {
        self.attr_calls.lock().unwrap().push(value.to_string());
        self.attr
            .get(value)
            .cloned()
            .unwrap_or_else(|| value.to_string())
    }
}

/// Renderer that returns a fixed output and records each call.
pub struct RecordingRenderer {
    output: String,
    pub calls: Mutex<Vec<(String, Variables)>>,
}

impl RecordingRenderer {
    pub fn returning(output: &str) -> Self {
        Self {
            output: output.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Variables)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render(&self, template: &str, variables: &Variables) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((template.to_string(), variables.clone()));
        Ok(self.output.clone())
    }
}
