use super::actions::CatalogAction;
use crate::environment::types::{Character, Ship};

/// One immutable snapshot of the catalog. Cloning is cheap, the `im`
/// containers share structure between snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub characters: im::Vector<Character>,
    pub character_detail: Option<Character>,
    pub ships: im::Vector<Ship>,
}

/// Pure transition function. Folds one action into the given snapshot and
/// returns a new one; the input is never mutated. Untouched fields are
/// shared between the two snapshots.
pub fn reduce(state: &CatalogState, action: &CatalogAction) -> CatalogState {
    log::trace!("{action}");
    let mut next = state.clone();
    match action {
        CatalogAction::GetCharacters(characters) => {
            next.characters = characters.clone();
        }
        CatalogAction::GetCharacterDetail(detail) => {
            next.character_detail = detail.clone();
        }
        CatalogAction::CreateCharacter(character) => {
            next.characters.push_back(character.clone());
        }
        CatalogAction::DeleteCharacter(id) => {
            // first match only; unknown ids are a no-op
            if let Some(index) = next.characters.iter().position(|c| c.id == *id) {
                next.characters.remove(index);
            }
        }
        CatalogAction::GetShips(ships) => {
            next.ships = ships.clone();
        }
    }
    next
}
