//! Damage mitigation from player defenses
//!
//! A defense maps a damage type to a mitigation kind:
//! - `immunity`: no damage is taken
//! - `resistance`: half damage, rounded down
//! - anything else: full damage

use crate::state::PlayerDefense;

/// Defense kind granting full immunity to a damage type.
pub const IMMUNITY: &str = "immunity";

/// Defense kind halving incoming damage (rounded down).
pub const RESISTANCE: &str = "resistance";

/// Calculate the damage to take after applying the first defense matching
/// the damage type.
///
/// The damage type comparison is case-insensitive. An empty damage type
/// only matches a defense whose own type is empty, so in practice it deals
/// full damage. Unknown defense kinds mitigate nothing.
pub fn mitigated_damage(defenses: &[PlayerDefense], damage_type: &str, amount: i32) -> i32 {
    let matched = defenses
        .iter()
        .find(|d| d.damage_type.eq_ignore_ascii_case(damage_type));

    let Some(defense) = matched else {
        return amount;
    };

    match defense.defense.as_str() {
        IMMUNITY => 0,
        // Integer division floors the half value, to the player's advantage
        RESISTANCE => amount / 2,
        _ => amount,
    }
}
