//! User list client library
//!
//! A GraphQL client for the `getAllUsers` query plus the headless list view
//! state machine that drives paging, sorting and debounced searching.

pub mod api;
pub mod error;
pub mod model;
pub mod view;

mod client;

pub use client::*;
pub use view::ListView;
pub use view::ListViewConfig;
