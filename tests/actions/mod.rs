//! Action-creator tests against a mocked catalog backend.

use holocron::catalog::actions;
use holocron::{CatalogAction, CharacterId, Environment};

use crate::util;

/// `get_characters` resolves to a `GET_CHARACTERS` action carrying the full
/// fetched list.
#[tokio::test]
async fn get_characters_wraps_the_fetched_list() -> Result<(), String> {
    util::init_logging();
    let mut server = mockito::Server::new_async().await;
    let seed = util::seed_characters();
    let mock = util::mock_characters_endpoint(&mut server, &seed).await;
    let environment = util::environment_for(&server);

    let action = actions::get_characters(&environment).await?;

    assert_eq!(action.to_string(), "GET_CHARACTERS");
    match action {
        CatalogAction::GetCharacters(payload) => {
            assert_eq!(payload.len(), 3);
            assert_eq!(payload, im::Vector::from(seed));
        }
        other => return Err(format!("unexpected action {other:?}")),
    }
    mock.assert_async().await;
    Ok(())
}

/// `get_character_detail` fetches `/character/:id` for the requested id.
#[tokio::test]
async fn get_character_detail_fetches_by_id() -> Result<(), String> {
    let mut server = mockito::Server::new_async().await;
    let vader = util::seed_characters().remove(1);
    let mock = util::mock_character_endpoint(&mut server, vader.id, Some(&vader)).await;
    let environment = util::environment_for(&server);

    let action = actions::get_character_detail(&environment, vader.id).await?;

    assert_eq!(action, CatalogAction::GetCharacterDetail(Some(vader)));
    mock.assert_async().await;
    Ok(())
}

/// An unknown id answers an empty JSON object, which resolves to the empty
/// detail record rather than an error.
#[tokio::test]
async fn get_character_detail_unknown_id_resolves_to_empty_record() -> Result<(), String> {
    let mut server = mockito::Server::new_async().await;
    let mock = util::mock_character_endpoint(&mut server, CharacterId(42), None).await;
    let environment = util::environment_for(&server);

    let action = actions::get_character_detail(&environment, CharacterId(42)).await?;

    assert_eq!(action, CatalogAction::GetCharacterDetail(None));
    mock.assert_async().await;
    Ok(())
}

/// A fresh environment assigns ids 4, 5, ... regardless of payload content,
/// and does so without any network call.
#[test]
fn create_character_assigns_incremental_ids() {
    let environment = Environment::default();

    let first = actions::create_character(&environment, util::boba_fett());
    let second = actions::create_character(&environment, util::mandalorian());

    assert_eq!(
        first,
        CatalogAction::CreateCharacter(util::boba_fett().with_id(CharacterId(4)))
    );
    assert_eq!(
        second,
        CatalogAction::CreateCharacter(util::mandalorian().with_id(CharacterId(5)))
    );
}

/// The id sequence belongs to the environment, not the process: separate
/// environments both start at 4.
#[test]
fn id_sequences_are_per_environment() {
    let one = Environment::default();
    let two = Environment::default();

    let a = actions::create_character(&one, util::boba_fett());
    let b = actions::create_character(&two, util::mandalorian());

    assert_eq!(
        a,
        CatalogAction::CreateCharacter(util::boba_fett().with_id(CharacterId(4)))
    );
    assert_eq!(
        b,
        CatalogAction::CreateCharacter(util::mandalorian().with_id(CharacterId(4)))
    );
}

/// Clones of one environment share the sequence and never hand out the same
/// id twice.
#[test]
fn environment_clones_share_the_id_sequence() {
    let environment = Environment::default();
    let clone = environment.clone();

    assert_eq!(environment.next_character_id(), CharacterId(4));
    assert_eq!(clone.next_character_id(), CharacterId(5));
    assert_eq!(environment.next_character_id(), CharacterId(6));
}

/// `delete_character` wraps the id to remove, nothing else.
#[test]
fn delete_character_wraps_the_id() {
    assert_eq!(
        actions::delete_character(CharacterId(1)),
        CatalogAction::DeleteCharacter(CharacterId(1))
    );
    assert_eq!(
        actions::delete_character(CharacterId(2)),
        CatalogAction::DeleteCharacter(CharacterId(2))
    );
}

/// `get_ships` fetches the characters and projects each to its ship,
/// preserving order.
#[tokio::test]
async fn get_ships_projects_each_character() -> Result<(), String> {
    let mut server = mockito::Server::new_async().await;
    let mock = util::mock_characters_endpoint(&mut server, &util::seed_characters()).await;
    let environment = util::environment_for(&server);

    let action = actions::get_ships(&environment).await?;

    match action {
        CatalogAction::GetShips(payload) => {
            assert_eq!(payload.len(), 3);
            assert_eq!(payload, im::Vector::from(util::seed_ships()));
        }
        other => return Err(format!("unexpected action {other:?}")),
    }
    mock.assert_async().await;
    Ok(())
}

/// A transport failure rejects the returned future; the error names the
/// failing call and nothing is retried.
#[tokio::test]
async fn transport_failure_rejects_the_future() {
    util::init_logging();
    let mut server = mockito::Server::new_async().await;
    let _mock = util::mock_characters_failure(&mut server).await;
    let environment = util::environment_for(&server);

    let result = actions::get_characters(&environment).await;

    let error = result.expect_err("a 500 must reject the future");
    assert!(error.contains("characters"), "unexpected error: {error}");
}
