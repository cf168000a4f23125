//! Table columns and sort direction.

use std::fmt;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the wire value (`"asc"` or `"desc"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sortable table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header label.
    pub name: &'static str,
    /// Field name sent as `sortByField`.
    pub field: &'static str,
    /// Current sort marker, at most one column has one.
    pub sort: Option<SortOrder>,
}

impl Column {
    /// Creates an unsorted column.
    pub const fn new(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            sort: None,
        }
    }

    /// Sets the initial sort marker.
    pub const fn sorted(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }
}

/// The user table's columns in display order.
///
/// Name starts with an ascending marker, matching the server's default order.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name").sorted(SortOrder::Asc),
        Column::new("Email", "email"),
        Column::new("Location", "location"),
        Column::new("Age", "age"),
    ]
}
