//! hp_core - Hit point tracking for player characters
//!
//! This library provides:
//! - PlayerState: the canonical snapshot of a character's stats, items,
//!   and defenses
//! - Player: the aggregate owning a state and the hit point transitions
//!   (damage, healing, temporary hit points)
//! - Damage mitigation: immunity and resistance defense handling
//! - Template loading: one-time construction of a player from a JSON
//!   character template, including item stat adjustment

pub mod defense;
pub mod player;
pub mod state;
pub mod template;

// Re-export core types for convenience
pub use defense::mitigated_damage;
pub use player::Player;
pub use state::{ItemModifier, PlayerClass, PlayerDefense, PlayerItem, PlayerState, PlayerStats};
pub use template::{load_player, parse_player, TemplateError};
