mod converters;
mod registry;

pub use converters::*;
pub use registry::*;

use crate::{Node, PropertyError};

pub const SIZE: &str = "SZ";
pub const BLACK_PLACEMENT: &str = "AB";
pub const WHITE_PLACEMENT: &str = "AW";
pub const BLACK_MOVE: &str = "B";
pub const WHITE_MOVE: &str = "W";
pub const KOMI: &str = "KM";
pub const PLAYER: &str = "PL";

/// Where in the game tree a converter's properties are legal.
///
/// This is a contract with the caller, converters don't check it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    RootOnly,
    AnyNode,
}

/// The position of a node in its game tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodePosition {
    Root,
    Child,
}

impl Scope {
    pub fn applies_at(&self, position: NodePosition) -> bool {
        match self {
            Scope::RootOnly => position == NodePosition::Root,
            Scope::AnyNode => true,
        }
    }
}

/// Reads the raw values of a property into the node.
pub type DecodeFn =
    fn(node: &mut Node, prop: &str, values: &[String]) -> Result<(), PropertyError>;

/// Writes the node's state as property text. An empty string means the
/// property is omitted.
pub type EncodeFn = fn(node: &Node) -> Result<String, PropertyError>;

/// Converts one or more related properties between their SGF text and a [`Node`].
#[derive(Clone, Copy)]
pub struct Converter {
    pub props: &'static [&'static str],
    pub scope: Scope,
    decode: DecodeFn,
    encode: EncodeFn,
}

impl Converter {
    pub const fn new(
        props: &'static [&'static str],
        scope: Scope,
        decode: DecodeFn,
        encode: EncodeFn,
    ) -> Self {
        Self {
            props,
            scope,
            decode,
            encode,
        }
    }

    pub fn decode(
        &self,
        node: &mut Node,
        prop: &str,
        values: &[String],
    ) -> Result<(), PropertyError> {
        (self.decode)(node, prop, values)
    }

    pub fn encode(&self, node: &Node) -> Result<String, PropertyError> {
        (self.encode)(node)
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("props", &self.props)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
