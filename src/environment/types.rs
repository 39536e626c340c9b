use serde::{Deserialize, Serialize};

// Catalog entity types, as served by the backend.

#[derive(
    Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash, Default,
)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A ship is never stored on its own server-side. It only exists as a
/// projection of a character's `ship` field, so equality is structural.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Ship {
    pub name: String,
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub race: String,
    pub role: String,
    pub faction: String,
    pub image: String,
    pub ship: Ship,
}

impl Character {
    pub fn ship(&self) -> Ship {
        self.ship.clone()
    }
}

/// Creation payload: a character as described by the caller, minus the id.
/// The id is assigned from the environment's sequence when the creation
/// action is built.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct NewCharacter {
    pub name: String,
    pub race: String,
    pub role: String,
    pub faction: String,
    pub image: String,
    pub ship: Ship,
}

impl NewCharacter {
    pub fn with_id(self, id: CharacterId) -> Character {
        Character {
            id,
            name: self.name,
            race: self.race,
            role: self.role,
            faction: self.faction,
            image: self.image,
            ship: self.ship,
        }
    }
}
