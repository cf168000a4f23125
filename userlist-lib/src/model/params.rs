//! Query parameters for `getAllUsers`.

use std::fmt;

use crate::error::Error;

use super::SortOrder;

/// Allowed items-per-page values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemsPerPage {
    #[default]
    Five,
    Ten,
    Twenty,
    Hundred,
}

impl ItemsPerPage {
    /// All options in selector order.
    pub const ALL: [Self; 4] = [Self::Five, Self::Ten, Self::Twenty, Self::Hundred];

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Hundred => 100,
        }
    }

    /// Next larger option, wrapping to the smallest.
    pub fn next(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::Twenty,
            Self::Twenty => Self::Hundred,
            Self::Hundred => Self::Five,
        }
    }

    /// Next smaller option, wrapping to the largest.
    pub fn previous(self) -> Self {
        match self {
            Self::Five => Self::Hundred,
            Self::Ten => Self::Five,
            Self::Twenty => Self::Ten,
            Self::Hundred => Self::Twenty,
        }
    }
}

impl TryFrom<u32> for ItemsPerPage {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|option| option.get() == value)
            .ok_or(Error::InvalidItemsPerPage(value))
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Snapshot of everything needed to issue one `getAllUsers` fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// 1-based page number.
    pub page: u32,
    pub limit: ItemsPerPage,
    /// Empty means no filter.
    pub search_term: String,
    /// Empty means server default order.
    pub sort_field: String,
    pub sort_order: Option<SortOrder>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: ItemsPerPage::default(),
            search_term: String::new(),
            sort_field: String::new(),
            sort_order: None,
        }
    }
}

impl QueryParams {
    /// Search term, or `None` when empty.
    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search_term)
    }

    /// Sort field, or `None` when empty.
    pub fn sort_by_field(&self) -> Option<&str> {
        non_empty(&self.sort_field)
    }

    /// Sort order wire value, `""` when unsorted.
    pub fn sort_by_order(&self) -> &'static str {
        self.sort_order.map(|o| o.as_str()).unwrap_or("")
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_page_try_from() {
        assert_eq!(ItemsPerPage::try_from(20).unwrap(), ItemsPerPage::Twenty);
        assert!(matches!(
            ItemsPerPage::try_from(7),
            Err(Error::InvalidItemsPerPage(7))
        ));
    }

    #[test]
    fn test_items_per_page_cycle() {
        let mut option = ItemsPerPage::Five;
        for _ in 0..ItemsPerPage::ALL.len() {
            option = option.next();
        }
        assert_eq!(option, ItemsPerPage::Five);
        assert_eq!(ItemsPerPage::Five.previous(), ItemsPerPage::Hundred);
    }

    #[test]
    fn test_default_params() {
        let params = QueryParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit.get(), 5);
        assert_eq!(params.search(), None);
        assert_eq!(params.sort_by_field(), None);
        assert_eq!(params.sort_by_order(), "");
    }
}
