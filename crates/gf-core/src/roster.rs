use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::creature::{Appearance, CreatureProfile, Rgb, Species};
use crate::error::{CoreError, CoreResult};
use crate::geometry::Size;

/// One creature as written in a roster file. Omitted fields take species defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Which variant to create.
    pub species: Species,
    /// Display name.
    pub name: String,
    /// Flavour text.
    #[serde(default)]
    pub description: String,
    /// Acquisition cost.
    #[serde(default)]
    pub cost: u32,
    /// Body colour override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Rgb>,
    /// Accent colour override (mane or wings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgb>,
    /// Sprite footprint override as `[width, height]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<(u32, u32)>,
}

impl RosterEntry {
    fn new(species: Species, name: &str, description: &str, cost: u32) -> Self {
        Self {
            species,
            name: name.to_string(),
            description: description.to_string(),
            cost,
            body: None,
            accent: None,
            size: None,
        }
    }

    /// Build a validated profile with a fresh id.
    pub fn into_profile(self) -> CoreResult<CreatureProfile> {
        let defaults = Appearance::for_species(self.species);
        let appearance = Appearance {
            body: self.body.unwrap_or(defaults.body),
            accent: self.accent.unwrap_or(defaults.accent),
        };
        let mut profile = CreatureProfile::new(self.species, self.name)
            .with_description(self.description)
            .with_cost(self.cost)
            .with_appearance(appearance);
        if let Some((w, h)) = self.size {
            profile = profile.with_size(Size::new(w, h));
        }
        profile.validate()?;
        Ok(profile)
    }
}

/// The set of creatures a session starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Entries in the order they are added to the session.
    pub creatures: Vec<RosterEntry>,
}

impl Roster {
    /// Built-in roster used when no file is given.
    pub fn starter() -> Self {
        Self {
            creatures: vec![
                RosterEntry::new(
                    Species::Unicorn,
                    "Stardust",
                    "A gentle unicorn with a silver mane",
                    150,
                ),
                RosterEntry {
                    accent: Some(Rgb(170, 140, 255)),
                    ..RosterEntry::new(
                        Species::Unicorn,
                        "Moonbeam",
                        "Only gallops after sunset",
                        200,
                    )
                },
                RosterEntry::new(Species::Fairy, "Pip", "Small, curious, always hungry", 80),
                RosterEntry {
                    body: Some(Rgb(180, 255, 180)),
                    accent: Some(Rgb(255, 240, 160)),
                    ..RosterEntry::new(Species::Fairy, "Thistle", "Guards the meadow flowers", 120)
                },
            ],
        }
    }

    /// Parse a roster from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a roster from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::from_json(&text)?;
        log::info!(
            "loaded roster {} with {} creatures",
            path.display(),
            roster.creatures.len()
        );
        Ok(roster)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find an entry by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&RosterEntry> {
        self.creatures
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Validate every entry and build profiles.
    pub fn profiles(&self) -> CoreResult<Vec<CreatureProfile>> {
        self.creatures
            .iter()
            .cloned()
            .map(RosterEntry::into_profile)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_roster_has_both_species() {
        let roster = Roster::starter();
        let profiles = roster.profiles().unwrap();
        assert_eq!(profiles.len(), 4);
        assert!(profiles.iter().any(|p| p.species == Species::Unicorn));
        assert!(profiles.iter().any(|p| p.species == Species::Fairy));
    }

    #[test]
    fn minimal_entry_takes_defaults() {
        let roster =
            Roster::from_json(r#"{ "creatures": [ { "species": "fairy", "name": "Wisp" } ] }"#)
                .unwrap();
        let profile = roster.profiles().unwrap().remove(0);
        assert_eq!(profile.name, "Wisp");
        assert_eq!(profile.cost, 0);
        assert_eq!(profile.size, Size::new(50, 50));
        assert_eq!(profile.appearance, Appearance::for_species(Species::Fairy));
    }

    #[test]
    fn overrides_are_applied() {
        let json = r#"{ "creatures": [ {
            "species": "unicorn", "name": "Blaze", "cost": 300,
            "body": [10, 20, 30], "size": [40, 32]
        } ] }"#;
        let profile = Roster::from_json(json).unwrap().profiles().unwrap().remove(0);
        assert_eq!(profile.appearance.body, Rgb(10, 20, 30));
        assert_eq!(profile.appearance.accent, Appearance::for_species(Species::Unicorn).accent);
        assert_eq!(profile.size, Size::new(40, 32));
        assert_eq!(profile.cost, 300);
    }

    #[test]
    fn unknown_species_is_a_parse_error() {
        let err = Roster::from_json(r#"{ "creatures": [ { "species": "dragon", "name": "X" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn invalid_entry_fails_profiles() {
        let roster =
            Roster::from_json(r#"{ "creatures": [ { "species": "fairy", "name": "" } ] }"#).unwrap();
        assert!(matches!(roster.profiles(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn json_round_trip_preserves_starter() {
        let roster = Roster::starter();
        let json = roster.to_json_pretty().unwrap();
        assert_eq!(Roster::from_json(&json).unwrap(), roster);
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, Roster::starter().to_json_pretty().unwrap()).unwrap();
        assert_eq!(Roster::load(&path).unwrap().creatures.len(), 4);

        let missing = Roster::load(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(CoreError::Io { .. })));
    }

    #[test]
    fn find_is_case_insensitive() {
        let roster = Roster::starter();
        assert_eq!(roster.find("pip").map(|e| e.species), Some(Species::Fairy));
        assert!(roster.find("nobody").is_none());
    }
}
