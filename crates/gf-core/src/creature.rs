use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::geometry::Size;

/// Unique identifier for every creature in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub Uuid);

impl CreatureId {
    /// Generate a new random creature ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of creature. Each species is a distinct variant struct in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// A horned, maned, four-legged creature.
    Unicorn,
    /// A small winged creature.
    Fairy,
}

impl Species {
    /// Parse a species name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unicorn" => Some(Self::Unicorn),
            "fairy" => Some(Self::Fairy),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicorn => write!(f, "unicorn"),
            Self::Fairy => write!(f, "fairy"),
        }
    }
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self(255, 255, 255);

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }
}

/// The two colours a procedural sprite is drawn with.
///
/// `accent` is the mane and tail for unicorns and the wings for fairies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    /// Main body colour.
    pub body: Rgb,
    /// Secondary colour.
    pub accent: Rgb,
}

impl Appearance {
    /// Default colours for a species.
    pub fn for_species(species: Species) -> Self {
        match species {
            Species::Unicorn => Self {
                body: Rgb::WHITE,
                accent: Rgb(255, 150, 200),
            },
            Species::Fairy => Self {
                body: Rgb(255, 200, 150),
                accent: Rgb(200, 230, 255),
            },
        }
    }
}

/// Default sprite footprint in pixels.
pub const DEFAULT_SPRITE_SIZE: Size = Size {
    width: 50,
    height: 50,
};

/// Fixed identity of a creature: who it is, what it costs, and how it looks.
///
/// Profiles never change during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureProfile {
    /// Unique identifier.
    pub id: CreatureId,
    /// Which variant this creature is.
    pub species: Species,
    /// Display name.
    pub name: String,
    /// Short flavour text.
    pub description: String,
    /// Acquisition cost in currency.
    pub cost: u32,
    /// Sprite colours.
    pub appearance: Appearance,
    /// Sprite footprint in pixels.
    pub size: Size,
}

impl CreatureProfile {
    /// Create a profile with species defaults and no description.
    pub fn new(species: Species, name: impl Into<String>) -> Self {
        Self {
            id: CreatureId::new(),
            species,
            name: name.into(),
            description: String::new(),
            cost: 0,
            appearance: Appearance::for_species(species),
            size: DEFAULT_SPRITE_SIZE,
        }
    }

    /// Set the flavour text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the acquisition cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the sprite colours.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Set the sprite footprint.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Reject profiles the simulation cannot place: blank names and empty sprites.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("creature name is empty".into()));
        }
        if self.size.is_empty() {
            return Err(CoreError::Validation(format!(
                "{} has an empty sprite size {}",
                self.name, self.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_round_trips_through_display_and_parse() {
        for species in [Species::Unicorn, Species::Fairy] {
            assert_eq!(Species::parse(&species.to_string()), Some(species));
        }
        assert_eq!(Species::parse("FAIRY"), Some(Species::Fairy));
        assert_eq!(Species::parse("dragon"), None);
    }

    #[test]
    fn species_serializes_snake_case() {
        let json = serde_json::to_string(&Species::Unicorn).unwrap();
        assert_eq!(json, "\"unicorn\"");
    }

    #[test]
    fn creature_id_display_is_short() {
        assert_eq!(CreatureId::new().to_string().len(), 8);
    }

    #[test]
    fn profile_builder_sets_fields() {
        let profile = CreatureProfile::new(Species::Fairy, "Pip")
            .with_description("Tiny and quick")
            .with_cost(120)
            .with_size(Size::new(20, 24));
        assert_eq!(profile.name, "Pip");
        assert_eq!(profile.cost, 120);
        assert_eq!(profile.size, Size::new(20, 24));
        assert_eq!(profile.appearance, Appearance::for_species(Species::Fairy));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let profile = CreatureProfile::new(Species::Unicorn, "   ");
        assert!(matches!(profile.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_sprite() {
        let profile = CreatureProfile::new(Species::Unicorn, "Nova").with_size(Size::new(0, 10));
        assert!(profile.validate().is_err());
    }

    #[test]
    fn rgb_to_unit_scales_channels() {
        let [r, g, b] = Rgb(255, 0, 51).to_unit();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!(g.abs() < f32::EPSILON);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
