//! Player construction from JSON character templates

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::player::Player;
use crate::state::PlayerState;

/// Template loading error
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("player template not found at {0}")]
    NotFound(String),
    #[error("failed to read template file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse template JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a player from a JSON template file.
///
/// Fails with [`TemplateError::NotFound`] when the path does not exist.
pub fn load_player(path: &Path) -> Result<Player, TemplateError> {
    if !path.exists() {
        return Err(TemplateError::NotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    parse_player(&contents)
}

/// Build a player from JSON template text.
///
/// The item stat adjustment runs here, once, before the health cap is
/// frozen from the adjusted state. Nothing outside this module can re-run
/// it: the pass is not idempotent, so a second application would double
/// every item bonus.
pub fn parse_player(json: &str) -> Result<Player, TemplateError> {
    let template: PlayerState = serde_json::from_str(json)?;
    let adjusted = adjust_stats_for_items(template);
    Ok(Player::new(adjusted))
}

/// Apply item stat modifiers to the parsed template.
///
/// Items targeting the `stats` object adjust the named ability score;
/// matching is case-insensitive on both the object and the attribute.
/// Only constitution is wired up so far, other attributes pass through
/// untouched.
fn adjust_stats_for_items(mut state: PlayerState) -> PlayerState {
    let PlayerState { items, stats, .. } = &mut state;

    for item in items.iter() {
        if !item.modifier.affected_object.eq_ignore_ascii_case("stats") {
            continue;
        }

        if item.modifier.affected_value.eq_ignore_ascii_case("constitution") {
            stats.constitution += item.modifier.value;
        }
    }

    state
}
