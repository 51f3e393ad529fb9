//! Hit point operations orchestrated over the player store

use std::sync::Arc;

use hp_core::PlayerState;
use thiserror::Error;

use crate::store::PlayerStore;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("player {0} was not found")]
    PlayerNotFound(String),
}

/// Service resolving a player by name, applying exactly one hit point
/// operation, and returning the resulting state snapshot.
pub struct HitPointManager {
    store: Arc<PlayerStore>,
}

impl HitPointManager {
    pub fn new(store: Arc<PlayerStore>) -> Self {
        HitPointManager { store }
    }

    /// Deal damage of the given type to the named player.
    pub fn deal_damage(
        &self,
        name: &str,
        damage_type: &str,
        amount: i32,
    ) -> Result<PlayerState, ManagerError> {
        let state = self
            .store
            .update(name, |player| player.deal_damage(damage_type, amount))
            .ok_or_else(|| ManagerError::PlayerNotFound(name.to_string()))?;

        tracing::info!("dealt {} {} damage: {}", amount, damage_type, state.summary());
        Ok(state)
    }

    /// Heal the named player's current hit points.
    pub fn heal(&self, name: &str, amount: i32) -> Result<PlayerState, ManagerError> {
        let state = self
            .store
            .update(name, |player| player.heal(amount))
            .ok_or_else(|| ManagerError::PlayerNotFound(name.to_string()))?;

        tracing::info!("healed {} hit points: {}", amount, state.summary());
        Ok(state)
    }

    /// Grant temporary hit points to the named player.
    pub fn add_temporary_hit_points(
        &self,
        name: &str,
        amount: i32,
    ) -> Result<PlayerState, ManagerError> {
        let state = self
            .store
            .update(name, |player| player.add_temporary_hit_points(amount))
            .ok_or_else(|| ManagerError::PlayerNotFound(name.to_string()))?;

        tracing::info!("granted {} temporary hit points: {}", amount, state.summary());
        Ok(state)
    }

    /// Current state snapshot for the named player.
    pub fn player_info(&self, name: &str) -> Result<PlayerState, ManagerError> {
        self.store
            .snapshot(name)
            .ok_or_else(|| ManagerError::PlayerNotFound(name.to_string()))
    }
}
