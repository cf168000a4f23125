//! Page, limit, search and sort bookkeeping.

use crate::model::Column;
use crate::model::ItemsPerPage;
use crate::model::QueryParams;
use crate::model::SortOrder;
use crate::model::default_columns;

/// Mutable list state owned by a [`ListView`](super::ListView).
///
/// Mutators return `true` when something actually changed, so callers only
/// refetch on real changes.
#[derive(Debug, Clone)]
pub struct StateStore {
    page: u32,
    limit: ItemsPerPage,
    search_text: String,
    sort_field: String,
    sort_order: Option<SortOrder>,
    columns: Vec<Column>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(ItemsPerPage::default())
    }
}

impl StateStore {
    /// Creates a store on page 1 with the given limit and default columns.
    pub fn new(limit: ItemsPerPage) -> Self {
        Self {
            page: 1,
            limit,
            search_text: String::new(),
            sort_field: String::new(),
            sort_order: None,
            columns: default_columns(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> ItemsPerPage {
        self.limit
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Snapshot of the current query parameters.
    pub fn params(&self) -> QueryParams {
        QueryParams {
            page: self.page,
            limit: self.limit,
            search_term: self.search_text.clone(),
            sort_field: self.sort_field.clone(),
            sort_order: self.sort_order,
        }
    }

    /// Sets the page. Page 0 is ignored.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Moves back one page, never below 1.
    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.page.saturating_sub(1).max(1))
    }

    /// Moves forward one page, never past `total_pages`.
    ///
    /// With no known pages the store stays on page 1.
    pub fn next_page(&mut self, total_pages: u32) -> bool {
        let target = self.page.saturating_add(1).min(total_pages).max(1);
        self.set_page(target)
    }

    /// Sets the limit and returns to page 1.
    pub fn set_limit(&mut self, limit: ItemsPerPage) -> bool {
        let changed = self.limit != limit || self.page != 1;
        self.limit = limit;
        self.page = 1;
        changed
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search_text {
            return false;
        }
        self.search_text = text;
        true
    }

    /// Toggles the sort on `field`: unsorted or descending becomes ascending,
    /// ascending becomes descending. Every other column loses its marker.
    ///
    /// Returns the new order, or `None` if no column has that field.
    pub fn toggle_sort(&mut self, field: &str) -> Option<SortOrder> {
        let current = self.columns.iter().find(|c| c.field == field)?.sort;
        let order = current.map_or(SortOrder::Asc, SortOrder::flipped);

        for column in &mut self.columns {
            column.sort = (column.field == field).then_some(order);
        }
        self.sort_field = field.to_string();
        self.sort_order = Some(order);
        Some(order)
    }
}
