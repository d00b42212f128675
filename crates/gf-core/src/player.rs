use serde::{Deserialize, Serialize};

use crate::creature::{CreatureId, CreatureProfile};
use crate::error::{CoreError, CoreResult};

/// Reputation needed per level before the next level-up.
pub const LEVEL_UP_REPUTATION: i32 = 10;

/// Starting currency for a new player.
pub const STARTING_CURRENCY: u32 = 500;

/// Reputation granted by adopting a creature.
const ADOPTION_REPUTATION: i32 = 1;

/// Everything the player owns and has decided during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    /// Current level, starting at 1.
    pub level: u32,
    /// Spendable currency.
    pub currency: u32,
    /// Accumulated reputation. Decisions may lower it.
    pub reputation: i32,
    /// Ids of every decision taken, oldest first.
    pub decision_history: Vec<String>,
    /// Creatures acquired through adoption.
    pub owned: Vec<CreatureId>,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            level: 1,
            currency: STARTING_CURRENCY,
            reputation: 0,
            decision_history: Vec::new(),
            owned: Vec::new(),
        }
    }
}

impl PlayerData {
    /// Start with a custom amount of currency.
    pub fn with_currency(currency: u32) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    /// Return `true` if the player holds at least `amount`.
    pub fn can_afford(&self, amount: u32) -> bool {
        self.currency >= amount
    }
}

/// Result of an accepted decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The decision that was taken.
    pub icon_id: String,
    /// What it cost.
    pub cost: u32,
    /// Currency after paying.
    pub currency: u32,
    /// Reputation after the effect.
    pub reputation: i32,
    /// Level after progression.
    pub level: u32,
    /// Number of levels gained by this decision.
    pub levels_gained: u32,
}

/// Applies purchases and their consequences to [`PlayerData`].
#[derive(Debug, Clone, Default)]
pub struct PlayerManager {
    data: PlayerData,
}

impl PlayerManager {
    /// Wrap existing player data.
    pub fn new(data: PlayerData) -> Self {
        Self { data }
    }

    /// Read-only view of the player.
    pub fn data(&self) -> &PlayerData {
        &self.data
    }

    /// Take a paid decision: pay `cost`, gain `effect` reputation, record it, then level up.
    ///
    /// Nothing changes when the player cannot afford it.
    pub fn handle_decision(&mut self, icon_id: &str, cost: u32, effect: i32) -> CoreResult<Decision> {
        if !self.data.can_afford(cost) {
            log::warn!(
                "decision '{icon_id}' rejected: costs {cost}, player has {}",
                self.data.currency
            );
            return Err(CoreError::InsufficientFunds {
                needed: cost,
                available: self.data.currency,
            });
        }

        self.data.currency -= cost;
        self.data.reputation += effect;
        self.data.decision_history.push(icon_id.to_string());
        let levels_gained = self.check_progression();

        Ok(Decision {
            icon_id: icon_id.to_string(),
            cost,
            currency: self.data.currency,
            reputation: self.data.reputation,
            level: self.data.level,
            levels_gained,
        })
    }

    /// Buy a creature. On success its id joins the owned list.
    pub fn adopt(&mut self, profile: &CreatureProfile) -> CoreResult<Decision> {
        let icon_id = format!("adopt:{}", profile.name);
        let decision = self.handle_decision(&icon_id, profile.cost, ADOPTION_REPUTATION)?;
        self.data.owned.push(profile.id);
        log::info!(
            "adopted {} the {} for {} (currency left: {})",
            profile.name,
            profile.species,
            profile.cost,
            decision.currency
        );
        Ok(decision)
    }

    fn check_progression(&mut self) -> u32 {
        let mut gained = 0;
        while i64::from(self.data.reputation)
            > i64::from(LEVEL_UP_REPUTATION) * i64::from(self.data.level)
        {
            self.data.level += 1;
            gained += 1;
        }
        if gained > 0 {
            log::info!("level up: player is now level {}", self.data.level);
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Species;

    #[test]
    fn new_player_defaults() {
        let data = PlayerData::default();
        assert_eq!(data.level, 1);
        assert_eq!(data.currency, 500);
        assert_eq!(data.reputation, 0);
        assert!(data.decision_history.is_empty());
        assert!(data.can_afford(500));
        assert!(!data.can_afford(501));
    }

    #[test]
    fn decision_pays_and_records() {
        let mut mgr = PlayerManager::default();
        let d = mgr.handle_decision("plant_flowers", 50, 3).unwrap();
        assert_eq!(d.currency, 450);
        assert_eq!(d.reputation, 3);
        assert_eq!(d.levels_gained, 0);
        assert_eq!(mgr.data().decision_history, vec!["plant_flowers"]);
    }

    #[test]
    fn unaffordable_decision_changes_nothing() {
        let mut mgr = PlayerManager::new(PlayerData::with_currency(10));
        let err = mgr.handle_decision("castle", 11, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientFunds {
                needed: 11,
                available: 10
            }
        ));
        assert_eq!(mgr.data(), &PlayerData::with_currency(10));
    }

    #[test]
    fn reputation_over_threshold_levels_up() {
        let mut mgr = PlayerManager::default();
        let d = mgr.handle_decision("festival", 0, 11).unwrap();
        assert_eq!(d.level, 2);
        assert_eq!(d.levels_gained, 1);

        // Level 2 needs more than 20.
        let d = mgr.handle_decision("parade", 0, 5).unwrap();
        assert_eq!(d.level, 2);
        let d = mgr.handle_decision("fireworks", 0, 20).unwrap();
        assert_eq!(d.reputation, 36);
        assert_eq!(d.level, 4);
        assert_eq!(d.levels_gained, 2);
    }

    #[test]
    fn negative_effects_never_level() {
        let mut mgr = PlayerManager::default();
        let d = mgr.handle_decision("neglect", 0, -4).unwrap();
        assert_eq!(d.reputation, -4);
        assert_eq!(d.level, 1);
    }

    #[test]
    fn adopt_records_owned_creature() {
        let mut mgr = PlayerManager::default();
        let profile = CreatureProfile::new(Species::Unicorn, "Nova").with_cost(200);
        let d = mgr.adopt(&profile).unwrap();
        assert_eq!(d.icon_id, "adopt:Nova");
        assert_eq!(d.currency, 300);
        assert_eq!(mgr.data().owned, vec![profile.id]);
    }

    #[test]
    fn failed_adoption_owns_nothing() {
        let mut mgr = PlayerManager::new(PlayerData::with_currency(5));
        let profile = CreatureProfile::new(Species::Fairy, "Pip").with_cost(80);
        assert!(mgr.adopt(&profile).is_err());
        assert!(mgr.data().owned.is_empty());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spending_never_overdraws(
                start in 0u32..1000,
                decisions in proptest::collection::vec((0u32..300, -5i32..15), 0..40),
            ) {
                let mut mgr = PlayerManager::new(PlayerData::with_currency(start));
                let mut level = 1;
                for (i, (cost, effect)) in decisions.into_iter().enumerate() {
                    let before = mgr.data().currency;
                    match mgr.handle_decision(&format!("d{i}"), cost, effect) {
                        Ok(d) => prop_assert_eq!(d.currency, before - cost),
                        Err(_) => prop_assert_eq!(mgr.data().currency, before),
                    }
                    prop_assert!(mgr.data().level >= level);
                    level = mgr.data().level;
                }
            }
        }
    }
}
