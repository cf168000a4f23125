//! Data model types

mod column;
mod params;
mod user;

pub use column::*;
pub use params::*;
pub use user::*;
