//! # Attributes
//!
//! The input side of serialization: an [`AttributeMap`] is an insertion-ordered
//! collection of tag attributes, each holding an [`AttributeValue`].
//!
//! Values are intentionally loose (text, numbers, booleans, sequences, opaque
//! structured objects, null) because attribute maps are usually assembled from
//! template data. The serializer never rejects a value; it coerces it.

mod map;
mod value;

pub use map::AttributeMap;
pub use value::AttributeValue;
