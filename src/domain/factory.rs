//! Themed unit factories.
//!
//! Every [`UnitFactory`] produces one unit per role, all of the factory's own
//! [`Theme`]. Client code such as [`spawn_and_activate_army`] only sees the
//! traits, so swapping the factory swaps every produced unit at once.

use std::fmt;

use tracing::{debug, instrument};

/// Faction a factory produces units for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Fire,
    Ice,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Fire, Theme::Ice];

    /// Identifying token found in every description this theme produces.
    pub fn token(&self) -> &'static str {
        match self {
            Theme::Fire => "Fire",
            Theme::Ice => "Ice",
        }
    }

    pub fn factory(&self) -> Box<dyn UnitFactory> {
        match self {
            Theme::Fire => Box::new(FireUnitFactory),
            Theme::Ice => Box::new(IceUnitFactory),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Capability category each theme supplies exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Melee,
    Caster,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Melee, Role::Caster];

    pub fn token(&self) -> &'static str {
        match self {
            Role::Melee => "Knight",
            Role::Caster => "Mage",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

pub trait MeleeUnit {
    fn theme(&self) -> Theme;
    fn attack(&self) -> String;
}

pub trait CasterUnit {
    fn theme(&self) -> Theme;
    fn cast_spell(&self) -> String;
}

pub trait UnitFactory {
    fn theme(&self) -> Theme;
    fn create_melee_unit(&self) -> Box<dyn MeleeUnit>;
    fn create_caster_unit(&self) -> Box<dyn CasterUnit>;

    /// Creates the unit for `role` and returns the text of using it.
    fn create_and_use(&self, role: Role) -> String {
        match role {
            Role::Melee => self.create_melee_unit().attack(),
            Role::Caster => self.create_caster_unit().cast_spell(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FireKnight;

impl MeleeUnit for FireKnight {
    fn theme(&self) -> Theme {
        Theme::Fire
    }

    fn attack(&self) -> String {
        "Fire Knight strikes with a flaming sword! (Burn Damage)".to_string()
    }
}

#[derive(Debug, Default)]
pub struct FireMage;

impl CasterUnit for FireMage {
    fn theme(&self) -> Theme {
        Theme::Fire
    }

    fn cast_spell(&self) -> String {
        "Fire Mage casts a fireball! (Explosion)".to_string()
    }
}

#[derive(Debug, Default)]
pub struct IceKnight;

impl MeleeUnit for IceKnight {
    fn theme(&self) -> Theme {
        Theme::Ice
    }

    fn attack(&self) -> String {
        "Ice Knight strikes with a frost blade! (Slow Effect)".to_string()
    }
}

#[derive(Debug, Default)]
pub struct IceMage;

impl CasterUnit for IceMage {
    fn theme(&self) -> Theme {
        Theme::Ice
    }

    fn cast_spell(&self) -> String {
        "Ice Mage casts a blizzard! (Area Freeze)".to_string()
    }
}

#[derive(Debug, Default)]
pub struct FireUnitFactory;

impl UnitFactory for FireUnitFactory {
    fn theme(&self) -> Theme {
        Theme::Fire
    }

    fn create_melee_unit(&self) -> Box<dyn MeleeUnit> {
        debug!("producing FireKnight");
        Box::new(FireKnight)
    }

    fn create_caster_unit(&self) -> Box<dyn CasterUnit> {
        debug!("producing FireMage");
        Box::new(FireMage)
    }
}

#[derive(Debug, Default)]
pub struct IceUnitFactory;

impl UnitFactory for IceUnitFactory {
    fn theme(&self) -> Theme {
        Theme::Ice
    }

    fn create_melee_unit(&self) -> Box<dyn MeleeUnit> {
        debug!("producing IceKnight");
        Box::new(IceKnight)
    }

    fn create_caster_unit(&self) -> Box<dyn CasterUnit> {
        debug!("producing IceMage");
        Box::new(IceMage)
    }
}

/// Creates a melee and a caster unit and uses them, in that order.
///
/// Works with any factory through the traits only; the returned lines are the
/// units' actions in call order.
#[instrument(level = "debug", skip(factory), fields(theme = %factory.theme()))]
pub fn spawn_and_activate_army(factory: &dyn UnitFactory) -> Vec<String> {
    let knight = factory.create_melee_unit();
    let mage = factory.create_caster_unit();

    vec![knight.attack(), mage.cast_spell()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fire_factory_when_spawning_then_melee_line_precedes_caster_line() {
        let lines = spawn_and_activate_army(&FireUnitFactory);
        assert_eq!(
            lines,
            vec![
                "Fire Knight strikes with a flaming sword! (Burn Damage)",
                "Fire Mage casts a fireball! (Explosion)",
            ]
        );
    }

    #[test]
    fn given_theme_when_creating_factory_then_products_share_theme() {
        for theme in Theme::ALL {
            let factory = theme.factory();
            assert_eq!(factory.theme(), theme);
            assert_eq!(factory.create_melee_unit().theme(), theme);
            assert_eq!(factory.create_caster_unit().theme(), theme);
        }
    }
}
