//! Headless list view: state store, fetch tracking, debounce and render derivation.

mod debounce;
mod fetch;
mod list_view;
mod render;
mod store;

pub use debounce::Debouncer;
pub use fetch::FetchOutcome;
pub use fetch::FetchState;
pub use fetch::FetchTracker;
pub use fetch::Settled;
pub use list_view::*;
pub use render::*;
pub use store::StateStore;
