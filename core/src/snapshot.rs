//! Serializable picture of what the viewer currently shows.
//!
//! Produced by `ViewerSession::snapshot()` after every command and written
//! as one JSON line in IPC mode.

use crate::{
    detail::PortfolioDetail,
    i18n::Locale,
    table::SortDirection,
    theme::ThemeMode,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: String,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

impl HeaderCell {
    /// Label with the sort marker appended, as shown in the header row.
    pub fn display(&self) -> String {
        match self.sort {
            Some(dir) => format!("{}{}", self.label, dir.marker()),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub client_id: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub locale: Locale,
    pub theme: ThemeMode,
    pub theme_toggle_label: &'static str,
    pub filter_text: String,
    pub filter_placeholder: String,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
    /// Rows surviving the filter, across all pages.
    pub total_rows: usize,
    /// Rows loaded, before filtering.
    pub loaded_rows: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub rows_label: String,
    pub page_label: String,
    pub detail: Option<PortfolioDetail>,
}
