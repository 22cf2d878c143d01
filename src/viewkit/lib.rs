//! # Viewkit Architecture
//!
//! Viewkit is a small set of **view helpers** for server-side HTML templates: it turns
//! attribute maps into tag markup and forwards partial-view rendering to a template engine.
//!
//! The one piece with real rules is attribute serialization; everything else is wiring
//! around it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints markup, reports errors          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Wiring (helpers.rs, config.rs)                             │
//! │  - Builds every helper once from a ViewConfig               │
//! │  - Exposes the element helpers to templates as functions    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Helpers (element.rs, partial.rs)                           │
//! │  - HtmlElement: open tag + content + close tag              │
//! │  - PartialRenderer: validates and forwards partials         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (serializer.rs, attributes/, escape.rs)               │
//! │  - Pure functions over their arguments, no I/O, no state    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use viewkit::attributes;
//! use viewkit::element::HtmlElement;
//!
//! let element = HtmlElement::default();
//! let attribs = attributes! {
//!     "id" => "save",
//!     "class" => vec!["btn", "btn-primary"],
//!     "disabled" => true,
//! };
//!
//! assert_eq!(
//!     element.to_html("button", &attribs, "Save"),
//!     r#"<button id="save" class="btn btn-primary" disabled>Save</button>"#
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`attributes`]: `AttributeMap` and `AttributeValue`
//! - [`serializer`]: The attribute serialization rules
//! - [`escape`]: Escaping primitives behind the `Escaper` trait
//! - [`element`]: Complete element rendering
//! - [`partial`]: Partial specification and forwarding
//! - [`helpers`]: Startup wiring and template functions
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod attributes;
pub mod config;
pub mod element;
pub mod error;
pub mod escape;
pub mod helpers;
pub mod partial;
pub mod serializer;

#[cfg(test)]
pub(crate) mod test_support;
