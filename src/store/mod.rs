//! In-memory registries holding the application state.
//!
//! Both registries live for the whole process and are injected into request
//! handlers; nothing is persisted across restarts.

mod helpers;
mod links;
mod users;

pub use links::LinkRegistry;
pub use users::UserDirectory;
