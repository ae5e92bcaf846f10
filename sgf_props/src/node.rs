use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Color, Move};

/// Game-wide metadata, only found on the root node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// The board size. `0` means unspecified, otherwise it is between 1 and 25.
    #[serde(default)]
    pub size: u8,
    /// `None` if the komi was never given, which is different from zero komi.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub komi: Option<f64>,
    /// The player to move first.
    #[serde(default)]
    pub player: Color,
}

/// A single node of a game tree, holding the data converted from its properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Created on the first game-wide property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_info: Option<GameInfo>,
    /// A node holds at most one move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mv: Option<Move>,
    /// Setup stones, in the order they were given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<Move>,
    /// Properties that no converter handled, kept verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unhandled: BTreeMap<String, Vec<String>>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game info, created if it doesn't exist yet.
    pub fn game_info_mut(&mut self) -> &mut GameInfo {
        self.game_info.get_or_insert_with(GameInfo::default)
    }
}
