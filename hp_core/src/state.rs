//! Canonical player state model

use serde::{Deserialize, Serialize};

/// Snapshot of everything tracked for a player character.
///
/// A player's state is replaced as a whole by each transition on the owning
/// [`Player`](crate::player::Player); callers only ever see it through an
/// immutable borrow. Field names serialize in camelCase to match the
/// character template format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Character name, used as the lookup key (case-insensitive).
    pub name: String,
    /// Overall character level.
    pub level: i32,
    /// Current effective hit points.
    pub hit_points: i32,
    /// Temporary hit point buffer, consumed before effective hit points.
    #[serde(default)]
    pub temporary_hit_points: i32,
    /// Classes the character has levels in.
    pub classes: Vec<PlayerClass>,
    /// Ability scores, adjustable by held items at load time.
    pub stats: PlayerStats,
    /// Items currently held by the character.
    pub items: Vec<PlayerItem>,
    /// Damage defenses affecting incoming damage.
    pub defenses: Vec<PlayerDefense>,
}

impl PlayerState {
    /// One-line rendering of the key attributes for diagnostic logging.
    pub fn summary(&self) -> String {
        format!(
            "{} (level {}): {} HP, {} temporary HP",
            self.name, self.level, self.hit_points, self.temporary_hit_points
        )
    }
}

/// A class the character has levels in. Descriptive only; the transition
/// logic never consumes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClass {
    pub name: String,
    pub hit_dice_value: i32,
    pub class_level: i32,
}

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// A held item carrying at most one stat modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub name: String,
    pub modifier: ItemModifier,
}

/// What an item modifies and by how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    /// Object the modifier targets, e.g. `"stats"`.
    pub affected_object: String,
    /// Attribute within the target object, e.g. `"constitution"`.
    pub affected_value: String,
    /// Magnitude added to the affected attribute.
    pub value: i32,
}

/// Maps a damage type to a mitigation kind (`"immunity"` or `"resistance"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDefense {
    /// Damage type this defense applies to; matched case-insensitively.
    #[serde(rename = "type")]
    pub damage_type: String,
    /// Mitigation kind. Unknown kinds provide no mitigation.
    pub defense: String,
}
