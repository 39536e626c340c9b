pub mod actions;
pub mod reducer;
pub mod store;

pub use actions::{ActionFuture, CatalogAction};
pub use reducer::{reduce, CatalogState};
pub use store::{Command, Store};
