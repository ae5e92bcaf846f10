use anyhow::Context;
use sgf_props::{codec, registry, Node, NodePosition, RawProperty};
use tracing::info;

pub struct Config {
    /// Whether the properties belong to the root node or a node below it.
    pub position: NodePosition,
}

/// Decodes a JSON list of raw properties into a fresh node.
pub fn decode_json(config: &Config, input: &str) -> anyhow::Result<Node> {
    let props: Vec<RawProperty> =
        serde_json::from_str(input).context("Could not read the list of raw properties")?;
    let registry = registry()?;
    let mut node = Node::new();
    codec::decode_properties(registry, &mut node, config.position, &props)?;
    info!(
        num_props = props.len(),
        num_unhandled = node.unhandled.len(),
        "Decoded node"
    );
    Ok(node)
}

/// Renders a node given as JSON into property text.
pub fn encode_json(config: &Config, input: &str) -> anyhow::Result<String> {
    let node: Node = serde_json::from_str(input).context("Could not read the node")?;
    let text = codec::encode_node(registry()?, &node, config.position)?;
    info!(len = text.len(), "Encoded node");
    Ok(text)
}
