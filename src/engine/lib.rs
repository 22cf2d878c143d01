//! # viewkit-engine - Named Template Rendering
//!
//! The rendering backend that viewkit partials are forwarded to. It is a thin
//! layer over [minijinja](https://docs.rs/minijinja) that keeps one compiled
//! [`Environment`] around and renders templates by name.
//!
//! ## Quick Example
//!
//! ```rust
//! use viewkit_engine::Engine;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Card {
//!     title: String,
//! }
//!
//! let mut engine = Engine::new();
//! engine.add_template("card", "<h2>{{ title }}</h2>").unwrap();
//!
//! let html = engine.render("card", &Card { title: "Hello".into() }).unwrap();
//! assert_eq!(html, "<h2>Hello</h2>");
//! ```
//!
//! ## Template Sources
//!
//! Templates either get registered up front with [`Engine::add_template`] or
//! are loaded lazily from a directory with [`Engine::from_dir`]. Both can be
//! mixed: registered templates win over files with the same name.
//!
//! When a default extension is configured ([`Engine::with_default_extension`]),
//! names without an extension get it appended before lookup, so a partial can
//! be referred to as `nav` while living in `nav.html`.
//!
//! ## Escaping
//!
//! minijinja decides auto-escaping from the template name: `.html`, `.htm` and
//! `.xml` templates escape interpolated values, everything else renders them
//! verbatim. Markup produced by helper functions should be returned as
//! [`Value::from_safe_string`] so it is not escaped twice.

use std::path::{Path, PathBuf};

pub use minijinja;
pub use minijinja::{Environment, Error, Value};
use serde::Serialize;

/// Name used for templates rendered from an inline source string.
pub const INLINE_TEMPLATE_NAME: &str = "_inline";

/// A renderer holding compiled templates.
///
/// Templates are compiled once and reused.
///
/// # Example
///
/// ```rust
/// use viewkit_engine::Engine;
/// use serde::Serialize;
///
/// let mut engine = Engine::new();
/// engine.add_template("header", "{{ title }}").unwrap();
/// engine.add_template("stats", "Count: {{ n }}").unwrap();
///
/// #[derive(Serialize)]
/// struct Header { title: String }
///
/// #[derive(Serialize)]
/// struct Stats { n: usize }
///
/// let h = engine.render("header", &Header { title: "Report".into() }).unwrap();
/// let s = engine.render("stats", &Stats { n: 42 }).unwrap();
/// assert_eq!(h, "Report");
/// assert_eq!(s, "Count: 42");
/// ```
pub struct Engine {
    env: Environment<'static>,
    root: Option<PathBuf>,
    default_extension: Option<String>,
}

impl Engine {
    /// Creates an engine with no templates and no loader.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            root: None,
            default_extension: None,
        }
    }

    /// Creates an engine that loads templates from `dir` on first use.
    ///
    /// Template names are paths relative to `dir` (e.g. `partials/nav.html`).
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let root = dir.as_ref().to_path_buf();
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(root.clone()));
        Self {
            env,
            root: Some(root),
            default_extension: None,
        }
    }

    /// Sets the extension appended to template names that have none.
    ///
    /// The leading dot is optional: `"html"` and `".html"` are equivalent.
    pub fn with_default_extension(mut self, ext: &str) -> Self {
        let ext = ext.trim_start_matches('.');
        self.default_extension = if ext.is_empty() {
            None
        } else {
            Some(format!(".{}", ext))
        };
        self
    }

    /// The directory templates are loaded from, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(self.resolve_name(name), source.to_string())
    }

    /// Returns true if `name` resolves to a registered or loadable template.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(&self.resolve_name(name)).is_ok()
    }

    /// Renders a template by name with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let resolved = self.resolve_name(name);
        tracing::debug!(template = %resolved, "rendering template");
        let tmpl = self.env.get_template(&resolved)?;
        tmpl.render(data)
    }

    /// Renders an inline template source without registering it.
    ///
    /// Inline sources are never auto-escaped.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        tracing::trace!(len = source.len(), "rendering inline template");
        self.env.render_named_str(INLINE_TEMPLATE_NAME, source, data)
    }

    /// Mutable access to the underlying environment, used to register
    /// helper functions and filters.
    pub fn env_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    fn resolve_name(&self, name: &str) -> String {
        match &self.default_extension {
            Some(ext) if !has_extension(name) => format!("{}{}", name, ext),
            _ => name.to_string(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn has_extension(name: &str) -> bool {
    let file_name = name.rsplit('/').next().unwrap_or(name);
    matches!(file_name.rfind('.'), Some(pos) if pos > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    #[derive(Serialize)]
    struct ListData {
        items: Vec<String>,
        count: usize,
    }

    #[test]
    fn test_add_and_render() {
        let mut engine = Engine::new();
        engine.add_template("test", "{{ message }}").unwrap();

        let output = engine
            .render(
                "test",
                &SimpleData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert_eq!(output, "hi");
    }

    #[test]
    fn test_unknown_template_error() {
        let engine = Engine::new();

        let result = engine.render(
            "nonexistent",
            &SimpleData {
                message: "x".into(),
            },
        );
        assert!(result.is_err());
        assert!(!engine.has_template("nonexistent"));
    }

    #[test]
    fn test_multiple_templates() {
        let mut engine = Engine::new();
        engine.add_template("tmpl_a", "A: {{ message }}").unwrap();
        engine.add_template("tmpl_b", "B: {{ message }}").unwrap();

        let data = SimpleData {
            message: "test".into(),
        };

        assert_eq!(engine.render("tmpl_a", &data).unwrap(), "A: test");
        assert_eq!(engine.render("tmpl_b", &data).unwrap(), "B: test");
    }

    #[test]
    fn test_template_with_loop() {
        let mut engine = Engine::new();
        engine
            .add_template(
                "list",
                "{% for item in items %}<li>{{ item }}</li>{% endfor %}{{ count }}",
            )
            .unwrap();

        let data = ListData {
            items: vec!["one".into(), "two".into()],
            count: 2,
        };

        let output = engine.render("list", &data).unwrap();
        assert_eq!(output, "<li>one</li><li>two</li>2");
    }

    #[test]
    fn test_template_syntax_error() {
        let mut engine = Engine::new();
        let result = engine.add_template("broken", "{{ unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_html_templates_escape_values() {
        let mut engine = Engine::new();
        engine.add_template("card.html", "<p>{{ message }}</p>").unwrap();

        let output = engine
            .render(
                "card.html",
                &SimpleData {
                    message: "<b>".into(),
                },
            )
            .unwrap();
        assert!(output.starts_with("<p>&lt;b&gt;"));
    }

    #[test]
    fn test_render_str_is_not_escaped() {
        let engine = Engine::new();
        let output = engine
            .render_str(
                "{{ message }}",
                &SimpleData {
                    message: "<b>".into(),
                },
            )
            .unwrap();
        assert_eq!(output, "<b>");
    }

    #[test]
    fn test_default_extension_is_appended() {
        let mut engine = Engine::new().with_default_extension("html");
        engine.add_template("nav", "<nav></nav>").unwrap();

        assert!(engine.has_template("nav"));
        assert!(engine.has_template("nav.html"));
        assert_eq!(
            engine
                .render(
                    "nav",
                    &SimpleData {
                        message: String::new()
                    }
                )
                .unwrap(),
            "<nav></nav>"
        );
    }

    #[test]
    fn test_default_extension_empty_disables() {
        let engine = Engine::new().with_default_extension(".");
        assert_eq!(engine.resolve_name("nav"), "nav");
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("nav.html"));
        assert!(has_extension("partials/nav.html"));
        assert!(!has_extension("nav"));
        assert!(!has_extension("partials.d/nav"));
        assert!(!has_extension(".hidden"));
    }

    #[test]
    fn test_from_dir_loads_templates() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("partials")).unwrap();
        fs::write(
            temp_dir.path().join("partials/greeting.txt"),
            "Hello {{ message }}!",
        )
        .unwrap();

        let engine = Engine::from_dir(temp_dir.path()).with_default_extension("txt");
        assert_eq!(engine.root(), Some(temp_dir.path()));

        let output = engine
            .render(
                "partials/greeting",
                &SimpleData {
                    message: "world".into(),
                },
            )
            .unwrap();
        assert_eq!(output, "Hello world!");
    }

    #[test]
    fn test_from_dir_missing_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        let engine = Engine::from_dir(temp_dir.path());

        let result = engine.render("missing.html", &serde_json::json!({}));
        assert!(result.is_err());
    }
}
