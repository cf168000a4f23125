//! `getAllUsers` request and response bodies.

use log::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ApiError;
use crate::error::Error;
use crate::error::GraphQlError;
use crate::model::PaginationInfo;
use crate::model::QueryParams;
use crate::model::UserRecord;
use crate::model::UsersPage;

/// Entity type passed to `paginationInfo`.
pub const ENTITY_TYPE: &str = "users";

/// Operation name of the users query.
pub const OPERATION_NAME: &str = "getAllUsers";

/// The users query document.
pub const GET_USERS_QUERY: &str = r#"query getAllUsers(
  $page: Int!
  $limit: Int!
  $entityType: String!
  $searchTerm: String
  $sortByOrder: String
  $sortByField: String
) {
  getUsers(
    page: $page
    limit: $limit
    searchTerm: $searchTerm
    sortByOrder: $sortByOrder
    sortByField: $sortByField
  ) {
    _id
    email
    name
    age
    location
  }

  paginationInfo(entityType: $entityType, limit: $limit, page: $page) {
    currentPage
    hasNextPage
    hasPreviousPage
    totalPages
  }
}"#;

/// JSON body POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: Variables<'a>,
}

impl<'a> GraphQlRequest<'a> {
    /// Builds the `getAllUsers` request for the given parameters.
    pub fn get_all_users(params: &'a QueryParams) -> Self {
        Self {
            query: GET_USERS_QUERY,
            operation_name: OPERATION_NAME,
            variables: Variables::from_params(params),
        }
    }
}

/// Variables of the `getAllUsers` query.
///
/// Empty search and sort values are sent as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables<'a> {
    pub page: u32,
    pub limit: u32,
    pub entity_type: &'static str,
    pub search_term: Option<&'a str>,
    pub sort_by_order: Option<&'static str>,
    pub sort_by_field: Option<&'a str>,
}

impl<'a> Variables<'a> {
    fn from_params(params: &'a QueryParams) -> Self {
        Self {
            page: params.page,
            limit: params.limit.get(),
            entity_type: ENTITY_TYPE,
            search_term: params.search(),
            sort_by_order: params.sort_order.map(|o| o.as_str()),
            sort_by_field: params.sort_by_field(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<UsersData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsersData {
    #[serde(default)]
    get_users: Option<Vec<UserRecord>>,
    #[serde(default)]
    pagination_info: Option<PaginationInfo>,
}

/// Decodes a `getAllUsers` response body.
///
/// A non-empty `errors` array wins over any partial `data`.
pub fn decode_users_response(body: &str) -> Result<UsersPage, Error> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

    let mut errors = response.errors.into_iter();
    if let Some(first) = errors.next() {
        for extra in errors {
            match extra.path_string() {
                Some(path) => warn!("Additional GraphQL error at {}: {}", path, extra.message),
                None => warn!("Additional GraphQL error: {}", extra.message),
            }
        }
        return Err(Error::GraphQl(first));
    }

    let data = response
        .data
        .ok_or_else(|| ApiError::parse_with_body("response has no data", body))?;

    Ok(UsersPage::new(
        data.get_users.unwrap_or_default(),
        data.pagination_info.unwrap_or_default(),
    ))
}
