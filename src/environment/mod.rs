pub mod model;
pub mod types;

pub use model::Model;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use types::CharacterId;

/// The seed data occupies ids 1-3; locally created characters start right
/// above so they never collide with it.
const FIRST_CREATED_ID: u64 = 4;

/// Everything the action layer needs to do its work: the API model and the
/// id sequence for locally created characters. Clones share the sequence.
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    character_ids: Arc<AtomicU64>,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Model::default())
    }
}

impl Environment {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            character_ids: Arc::new(AtomicU64::new(FIRST_CREATED_ID)),
        }
    }

    pub fn update_model(&mut self, model: Model) {
        self.model = model;
    }

    /// Strictly increasing, starting at 4 for a fresh environment.
    pub fn next_character_id(&self) -> CharacterId {
        CharacterId(self.character_ids.fetch_add(1, Ordering::SeqCst))
    }
}
