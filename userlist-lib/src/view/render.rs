//! Derives what to draw from a [`ListView`].
//!
//! Front ends paint a [`Frame`]; they never read view state directly.

use crate::api::UserSource;
use crate::model::ItemsPerPage;
use crate::model::SortOrder;
use crate::model::UserRecord;

use super::ListView;

/// Everything needed to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub search_text: String,
    pub header: Vec<HeaderCell>,
    pub body: Body,
    /// Fetch in flight or search quiet period open.
    pub loading: bool,
    pub limit: ItemsPerPage,
    pub pagination: PaginationControls,
    pub actions_allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: &'static str,
    pub field: &'static str,
    pub sort: Option<SortOrder>,
}

impl HeaderCell {
    /// Arrow shown next to the label.
    pub fn indicator(&self) -> &'static str {
        match self.sort {
            Some(SortOrder::Asc) => "▲",
            Some(SortOrder::Desc) => "▼",
            None => "",
        }
    }
}

/// Table area contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The latest fetch failed; shown instead of the table.
    Error(String),
    Rows(Vec<Row>),
}

impl Body {
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Rows(rows) => rows,
            Self::Error(_) => &[],
        }
    }
}

/// One table row, cells in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stable identity, the record id.
    pub key: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<PageButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

impl Frame {
    pub fn derive<S: UserSource + 'static>(view: &ListView<S>) -> Self {
        let store = view.store();

        let header: Vec<HeaderCell> = store
            .columns()
            .iter()
            .map(|c| HeaderCell {
                label: c.name,
                field: c.field,
                sort: c.sort,
            })
            .collect();

        let body = match view.error() {
            Some(message) => Body::Error(message.to_string()),
            None => Body::Rows(
                view.data()
                    .map(|page| {
                        page.users()
                            .iter()
                            .map(|user| Row {
                                key: user.id.clone(),
                                cells: header.iter().map(|h| cell(user, h.field)).collect(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
        };

        let pagination = view
            .data()
            .map(|page| {
                let info = page.pagination();
                PaginationControls {
                    previous_enabled: info.has_previous_page,
                    next_enabled: info.has_next_page,
                    pages: (1..=info.total_pages)
                        .map(|number| PageButton {
                            number,
                            active: number == store.page(),
                        })
                        .collect(),
                }
            })
            .unwrap_or_default();

        Self {
            search_text: store.search_text().to_string(),
            header,
            body,
            loading: view.loading() || view.search_loading(),
            limit: store.limit(),
            pagination,
            actions_allowed: view.actions_allowed(),
        }
    }
}

fn cell(user: &UserRecord, field: &str) -> String {
    match field {
        "name" => user.name.clone(),
        "email" => user.email.clone(),
        "location" => user.location.clone(),
        "age" => user.age.to_string(),
        _ => String::new(),
    }
}
