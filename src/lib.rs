//! State-management core of a character & starship catalog client: a typed
//! model of the catalog REST API, action creators wrapping its calls, and a
//! pure reducer folding their results into immutable state snapshots.

pub mod catalog;
pub mod environment;

pub use catalog::{reduce, ActionFuture, CatalogAction, CatalogState, Command, Store};
pub use environment::types::{Character, CharacterId, NewCharacter, Ship};
pub use environment::{Environment, Model};
