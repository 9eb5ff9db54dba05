//! Named fighters and duel definitions.
//!
//! Templates carry what a fighter brings to every duel (health, initiative,
//! weapon). The dice are rolled per duel, so they live on the [`Entrant`].

use std::collections::BTreeMap;

use duel_core::{DiceRoll, DuelConfig, DuelSetup, Fighter, SetupError, Side, Weapon};

/// A fighter as described in the roster file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterTemplate {
    pub name: String,
    pub health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initiative: u32,
    pub weapon: Weapon,
}

impl FighterTemplate {
    /// Builds the duel-ready fighter with the given roll.
    pub fn instantiate(&self, roll: DiceRoll) -> Fighter {
        Fighter::new(self.health, self.initiative, self.weapon).with_roll(roll)
    }
}

/// One side of a duel: a roster name and the dice it rolled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entrant {
    pub fighter: String,
    pub roll: DiceRoll,
}

/// A duel as described in a duel file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSpec {
    pub entrants: (Entrant, Entrant),
}

/// A fighter with its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedFighter {
    pub name: String,
    pub fighter: Fighter,
}

/// Both named fighters of a duel, in the order the duel file lists them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedDuel {
    pub a: NamedFighter,
    pub b: NamedFighter,
}

impl NamedDuel {
    pub fn named(&self, side: Side) -> &NamedFighter {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn name(&self, side: Side) -> &str {
        &self.named(side).name
    }

    /// Validates the dice budget and builds the setup.
    pub fn setup(&self, config: &DuelConfig) -> Result<DuelSetup, SetupError> {
        DuelSetup::checked(self.a.fighter, self.b.fighter, config)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("fighter '{0}' appears more than once in the roster")]
    DuplicateFighter(String),

    #[error("unknown fighter '{0}'")]
    UnknownFighter(String),
}

/// Fighter templates indexed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    fighters: BTreeMap<String, FighterTemplate>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting duplicate names.
    pub fn from_templates(
        templates: impl IntoIterator<Item = FighterTemplate>,
    ) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for template in templates {
            roster.insert(template)?;
        }
        Ok(roster)
    }

    pub fn insert(&mut self, template: FighterTemplate) -> Result<(), RosterError> {
        if self.fighters.contains_key(&template.name) {
            return Err(RosterError::DuplicateFighter(template.name));
        }
        self.fighters.insert(template.name.clone(), template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FighterTemplate> {
        self.fighters.get(name)
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fighters.keys().map(String::as_str)
    }

    fn entrant(&self, entrant: &Entrant) -> Result<NamedFighter, RosterError> {
        let template = self
            .get(&entrant.fighter)
            .ok_or_else(|| RosterError::UnknownFighter(entrant.fighter.clone()))?;
        Ok(NamedFighter {
            name: template.name.clone(),
            fighter: template.instantiate(entrant.roll),
        })
    }

    /// Looks up both entrants and attaches their rolls.
    pub fn resolve(&self, spec: &DuelSpec) -> Result<NamedDuel, RosterError> {
        let (a, b) = &spec.entrants;
        Ok(NamedDuel {
            a: self.entrant(a)?,
            b: self.entrant(b)?,
        })
    }
}
