//! Error types

mod api;
mod graphql;

pub use api::*;
pub use graphql::*;

/// Top-level error for user list operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport or HTTP-level failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered with a GraphQL `errors` array.
    #[error("{0}")]
    GraphQl(GraphQlError),

    /// Items-per-page value outside the allowed set.
    #[error("Invalid items per page: {0} (allowed: 5, 10, 20, 100)")]
    InvalidItemsPerPage(u32),
}

impl Error {
    /// Returns `true` if this error came from the GraphQL layer rather than transport.
    pub fn is_graphql(&self) -> bool {
        matches!(self, Self::GraphQl(_))
    }
}

impl From<GraphQlError> for Error {
    fn from(err: GraphQlError) -> Self {
        Self::GraphQl(err)
    }
}
