//! Conversion between SGF properties and the data of a game tree node.
//!
//! Each [`Converter`] handles one family of properties, e.g. `B` and `W` for
//! moves. The [`registry()`] finds the converter for a property code, and the
//! [`codec`] functions apply all of them to a node.
//!
//! ```
//! use sgf_props::{codec, registry, Node, NodePosition, RawProperty};
//!
//! let registry = registry().unwrap();
//! let mut node = Node::new();
//! let props = [
//!     RawProperty::new("SZ", &["19"]),
//!     RawProperty::new("KM", &["6.5"]),
//!     RawProperty::new("AB", &["dd", "pp"]),
//! ];
//! codec::decode_properties(registry, &mut node, NodePosition::Root, &props).unwrap();
//! assert_eq!(
//!     codec::encode_node(registry, &node, NodePosition::Root).unwrap(),
//!     "SZ[19]AB[dd][pp]KM[6.5]"
//! );
//! ```

pub use codec::RawProperty;
pub use color::*;
pub use errors::*;
pub use moves::*;
pub use node::*;
pub use point::*;
pub use prop::*;

#[cfg(test)]
mod arbitrary;
pub mod codec;
mod color;
mod errors;
mod moves;
mod node;
mod point;
pub mod prop;
