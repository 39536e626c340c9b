use super::actions::{self, CatalogAction};
use super::reducer::{reduce, CatalogState};
use crate::environment::types::{CharacterId, NewCharacter};
use crate::environment::Environment;

/// The catalog operations as data. Evaluating a command performs whatever
/// I/O it needs and resolves to the action that gets folded into the store.
#[derive(Clone, Debug)]
pub enum Command {
    GetCharacters,
    GetCharacterDetail(CharacterId),
    CreateCharacter(NewCharacter),
    DeleteCharacter(CharacterId),
    GetShips,
}

/// Holds the current [`CatalogState`] snapshot and pushes every new one to
/// its subscribers. Dispatching is synchronous: one action is fully folded
/// before the next one can observe the state.
pub struct Store {
    state: CatalogState,
    subscribers: Vec<flume::Sender<CatalogState>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: CatalogState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Folds one action into the current snapshot and notifies subscribers.
    pub fn dispatch(&mut self, action: CatalogAction) {
        self.state = reduce(&self.state, &action);
        let snapshot = &self.state;
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
    }

    /// Evaluates a command against the environment, then dispatches the
    /// resulting action. A transport failure propagates to the caller and
    /// nothing is dispatched.
    pub async fn run(&mut self, command: Command, environment: &Environment) -> Result<(), String> {
        let action = match command {
            Command::GetCharacters => actions::get_characters(environment).await?,
            Command::GetCharacterDetail(id) => {
                actions::get_character_detail(environment, id).await?
            }
            Command::CreateCharacter(character) => {
                actions::create_character(environment, character)
            }
            Command::DeleteCharacter(id) => actions::delete_character(id),
            Command::GetShips => actions::get_ships(environment).await?,
        };
        self.dispatch(action);
        Ok(())
    }

    /// A channel receiving every snapshot produced after this call. This is
    /// where a view layer would attach.
    pub fn subscribe(&mut self) -> flume::Receiver<CatalogState> {
        let (sender, receiver) = flume::unbounded();
        self.subscribers.push(sender);
        receiver
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
