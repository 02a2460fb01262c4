//! Character sheet loader.

use std::path::Path;

use cultivation_core::{
    Attributes, Character, EngineConfig, Realm, add_cultivation_progress, adjust_karma,
};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Authored starting point for a character.
///
/// Pools are not part of the sheet: a character always starts full at its
/// realm's ceilings and with `max_stamina` derived from strength.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    #[serde(default)]
    pub realm: Realm,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub karma: i64,
    #[serde(default)]
    pub progress: f64,
}

impl CharacterSheet {
    /// Builds a fresh character from the sheet.
    ///
    /// Attributes are floor-clamped and progress is clamped to the cap.
    pub fn into_character(self, config: &EngineConfig) -> Character {
        let character = Character::at_realm(self.name, self.attributes, self.realm, config);
        let character = add_cultivation_progress(character, self.progress, config);
        adjust_karma(character, self.karma)
    }
}

/// Loader for character sheets from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load a character sheet.
    ///
    /// RON format: a single [`CharacterSheet`].
    pub fn load_sheet(path: &Path) -> LoadResult<CharacterSheet> {
        let content = read_file(path)?;
        let sheet: CharacterSheet = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON at {:?}: {}", path, e))?;

        if sheet.name.trim().is_empty() {
            anyhow::bail!("Character sheet {:?} has an empty name", path);
        }
        Ok(sheet)
    }

    /// Load a sheet and build the character it describes.
    pub fn load(path: &Path, config: &EngineConfig) -> LoadResult<Character> {
        let character = Self::load_sheet(path)?.into_character(config);
        debug!(
            character = %character.name,
            realm = %character.realm(),
            "loaded character"
        );
        Ok(character)
    }

    /// Load a full saved character, effects and timers included.
    pub fn load_saved(path: &Path) -> LoadResult<Character> {
        let content = read_file(path)?;
        let mut character: Character = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse saved character RON at {:?}: {}", path, e)
        })?;
        character.resources.clamp_all();
        Ok(character)
    }

    /// Write a character to disk in the format [`Self::load_saved`] reads.
    pub fn save(path: &Path, character: &Character) -> LoadResult<()> {
        let content = ron::ser::to_string_pretty(character, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize character: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_builds_full_character_at_realm() {
        let sheet: CharacterSheet = ron::from_str(
            r#"(
                name: "Lin Feng",
                realm: foundation_establishment,
                attributes: (strength: 14, luck: 0),
                karma: -20,
                progress: 130.0,
            )"#,
        )
        .unwrap();
        let config = EngineConfig::default();
        let c = sheet.into_character(&config);

        assert_eq!(c.realm(), Realm::FoundationEstablishment);
        assert_eq!(c.resources.max_health, 250.0);
        assert_eq!(c.resources.qi, 200.0);
        assert_eq!(c.resources.max_stamina, 170.0);
        assert_eq!(c.attributes.luck, 1);
        assert_eq!(c.attributes.agility, 10);
        assert_eq!(c.karma, -20);
        assert_eq!(c.cultivation.progress, 100.0);
        assert!(c.cultivation.breakthrough_ready);
    }
}
