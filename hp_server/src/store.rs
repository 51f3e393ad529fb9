//! In-memory player storage
//!
//! Players are keyed by lowercased name, making lookups case-insensitive.
//! Each entry is mutated under its own map lock, so two concurrent
//! requests against the same player are serialized here rather than in
//! the core.

use std::path::Path;

use dashmap::DashMap;
use hp_core::{Player, PlayerState, TemplateError};

/// Player storage backing the hit point service.
#[derive(Default)]
pub struct PlayerStore {
    players: DashMap<String, Player>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a player from a JSON template file and add it to the store.
    ///
    /// Returns the seeded player's name. An existing player with the same
    /// name is replaced.
    pub fn seed_from_template(&self, path: &Path) -> Result<String, TemplateError> {
        let player = hp_core::load_player(path)?;
        tracing::debug!("parsed template: {}", player.summary());

        let name = player.state().name.clone();
        self.insert(player);
        Ok(name)
    }

    /// Add a fully constructed player to the store.
    pub fn insert(&self, player: Player) {
        let key = player.state().name.to_lowercase();
        self.players.insert(key, player);
    }

    /// Whether a player with this name exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(&name.to_lowercase())
    }

    /// Current state snapshot for a player, or `None` if unknown.
    pub fn snapshot(&self, name: &str) -> Option<PlayerState> {
        self.players
            .get(&name.to_lowercase())
            .map(|player| player.state().clone())
    }

    /// Run one mutating operation against a player under its entry lock,
    /// returning the resulting snapshot, or `None` if the player is
    /// unknown.
    pub fn update(&self, name: &str, op: impl FnOnce(&mut Player)) -> Option<PlayerState> {
        let mut entry = self.players.get_mut(&name.to_lowercase())?;
        op(entry.value_mut());
        Some(entry.state().clone())
    }
}
