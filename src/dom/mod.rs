//! Owned HTML document tree.
//!
//! The renderer works on an explicit tree handle rather than a process-wide
//! document: templates are parsed into a [`Document`], mutated in place, and
//! serialized back out.
//!
//! - [`node`]: `Document`, `Node`, `Element`, `Text` and their mutators
//! - [`parse`]: tolerant single-pass HTML parser
//! - [`serialize`]: HTML serializer with escaping

mod node;
mod parse;
mod serialize;

pub use node::{Document, Element, Node};
pub use parse::parse;
pub use serialize::{serialize, serialize_element};
