use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use strum_macros::Display;

use crate::environment::types::{Character, CharacterId, NewCharacter, Ship};
use crate::environment::Environment;

/// A tagged record describing a single state transition. The `Display`
/// implementation yields the action tag (`GET_CHARACTERS`, ...) used in logs.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogAction {
    GetCharacters(im::Vector<Character>),
    /// `None` is the "empty record" the backend answers for an unknown id.
    GetCharacterDetail(Option<Character>),
    CreateCharacter(Character),
    DeleteCharacter(CharacterId),
    GetShips(im::Vector<Ship>),
}

/// A deferred unit of work: performs its I/O when awaited, then resolves to
/// the action to dispatch. Transport failures reject the future; there are
/// no retries and nothing is swallowed.
pub type ActionFuture = BoxFuture<'static, Result<CatalogAction, String>>;

/// GET `/characters`, wrapped into [`CatalogAction::GetCharacters`].
pub fn get_characters(environment: &Environment) -> ActionFuture {
    let model = environment.model.clone();
    async move {
        let characters = model.characters().await?;
        Ok(CatalogAction::GetCharacters(characters.into()))
    }
    .boxed()
}

/// GET `/character/:id`, wrapped into [`CatalogAction::GetCharacterDetail`].
pub fn get_character_detail(environment: &Environment, id: CharacterId) -> ActionFuture {
    let model = environment.model.clone();
    async move {
        let detail = model.character(id).await?;
        Ok(CatalogAction::GetCharacterDetail(detail))
    }
    .boxed()
}

/// Synchronous: assigns the next id from the environment's sequence and
/// returns the creation action immediately. The backend is not involved.
pub fn create_character(environment: &Environment, character: NewCharacter) -> CatalogAction {
    CatalogAction::CreateCharacter(character.with_id(environment.next_character_id()))
}

/// Synchronous: the deletion action for one character.
pub fn delete_character(id: CharacterId) -> CatalogAction {
    CatalogAction::DeleteCharacter(id)
}

/// GET `/characters`, projected to the ship of every character and wrapped
/// into [`CatalogAction::GetShips`].
pub fn get_ships(environment: &Environment) -> ActionFuture {
    let model = environment.model.clone();
    async move {
        let ships = model.ships().await?;
        Ok(CatalogAction::GetShips(ships.into()))
    }
    .boxed()
}
