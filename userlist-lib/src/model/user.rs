//! User records and pagination info as returned by `getAllUsers`.

use serde::Deserialize;

/// A single user row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier, used as the row key.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    pub age: u32,
}

/// Pagination metadata for the current query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One complete response: the page of users plus its pagination info.
///
/// Replaced wholesale whenever a newer response is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersPage {
    users: Vec<UserRecord>,
    pagination: PaginationInfo,
}

impl UsersPage {
    /// Creates a page from its parts.
    pub fn new(users: Vec<UserRecord>, pagination: PaginationInfo) -> Self {
        Self { users, pagination }
    }

    /// Returns the users on this page.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Returns the pagination info reported with this page.
    pub fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Total number of pages, zero if unknown.
    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_wire_names() {
        let json = r#"{"_id":"u1","email":"a@x.io","name":"Alice","age":31,"location":"Oslo"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.age, 31);
        assert_eq!(user.location, "Oslo");
    }

    #[test]
    fn test_pagination_camel_case() {
        let json = r#"{"currentPage":2,"hasNextPage":true,"hasPreviousPage":true,"totalPages":7}"#;
        let info: PaginationInfo = serde_json::from_str(json).unwrap();
        assert_eq!(
            info,
            PaginationInfo {
                current_page: 2,
                total_pages: 7,
                has_next_page: true,
                has_previous_page: true,
            }
        );
    }
}
