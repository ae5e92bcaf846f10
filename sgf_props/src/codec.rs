//! Converting all properties of a node at once.
//!
//! These are the helpers a tree walker uses: they consult each converter's
//! [`Scope`](crate::Scope) to decide whether it applies at the node's position,
//! and keep properties without an applicable converter so they survive a
//! roundtrip.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Node, NodeError, NodePosition, PropertyError, Registry};

/// A property as split off by a tokenizer, with its values unescaped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProperty {
    pub prop: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl RawProperty {
    pub fn new(prop: &str, values: &[&str]) -> Self {
        Self {
            prop: String::from(prop),
            values: values.iter().map(|value| String::from(*value)).collect(),
        }
    }
}

/// Decodes a single property into the node.
///
/// A property without a converter, or whose converter doesn't apply at this
/// position, is stored in [`Node::unhandled`].
pub fn decode_property(
    registry: &Registry,
    node: &mut Node,
    position: NodePosition,
    prop: &str,
    values: &[String],
) -> Result<(), PropertyError> {
    match registry.lookup(prop) {
        Some(converter) if converter.scope.applies_at(position) => {
            trace!(prop, ?values, "Decoding property");
            converter.decode(node, prop, values)
        }
        converter => {
            debug!(
                prop,
                known = converter.is_some(),
                ?position,
                "Keeping unhandled property"
            );
            let entry = node.unhandled.entry(String::from(prop)).or_default();
            if values.is_empty() {
                // Written as `[]`, which reads back as a single empty value
                entry.push(String::new());
            } else {
                entry.extend_from_slice(values);
            }
            Ok(())
        }
    }
}

/// Decodes the properties in order, stopping at the first error.
pub fn decode_properties(
    registry: &Registry,
    node: &mut Node,
    position: NodePosition,
    props: &[RawProperty],
) -> Result<(), NodeError> {
    for raw in props {
        decode_property(registry, node, position, &raw.prop, &raw.values).map_err(|err| {
            NodeError {
                prop: raw.prop.clone(),
                err,
            }
        })?;
    }
    Ok(())
}

/// Renders all properties of the node.
///
/// Converted properties come first, in registry order, followed by the
/// unhandled ones sorted by code. Unhandled properties whose converter
/// applies at this position are left out, the converter owns them.
pub fn encode_node(
    registry: &Registry,
    node: &Node,
    position: NodePosition,
) -> Result<String, NodeError> {
    let mut result = String::new();
    for converter in registry.converters() {
        if !converter.scope.applies_at(position) {
            continue;
        }
        let fragment = converter.encode(node).map_err(|err| NodeError {
            prop: converter.props.join("/"),
            err,
        })?;
        if !fragment.is_empty() {
            trace!(%fragment, "Encoded property");
            result += &fragment;
        }
    }
    for (prop, values) in &node.unhandled {
        if registry
            .lookup(prop)
            .is_some_and(|converter| converter.scope.applies_at(position))
        {
            debug!(prop, "Skipping unhandled property that has a converter");
            continue;
        }
        result += prop;
        if values.is_empty() {
            result += "[]";
        }
        for value in values {
            result.push('[');
            result += &escape_value(value);
            result.push(']');
        }
    }
    Ok(result)
}

/// Escapes the characters that would end a property value early.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == ']' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
