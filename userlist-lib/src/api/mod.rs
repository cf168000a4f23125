//! GraphQL query contract and the fetch seam used by the list view.

mod query;

pub use query::*;

use async_trait::async_trait;

use crate::error::Error;
use crate::model::QueryParams;
use crate::model::UsersPage;

/// Something that can answer a `getAllUsers` query.
///
/// Implemented by [`UserListClient`](crate::UserListClient); tests plug in
/// scripted sources.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetches one page of users for the given parameters.
    async fn fetch_users(&self, params: &QueryParams) -> Result<UsersPage, Error>;
}
