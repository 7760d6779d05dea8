//! The viewer session: merged rows plus the state of the view over them.
//!
//! PIPELINE (fixed order, rerun on every snapshot):
//!   1. Filter  — free text over the full data set
//!   2. Sort    — at most one column, stable
//!   3. Paginate
//!
//! RULES:
//!   - Merged rows are set once at construction and never mutated.
//!   - All state changes go through `apply()`.
//!   - A failed command leaves the state untouched.

use crate::{
    command::ViewerCommand,
    config::ViewerConfig,
    detail::PortfolioDetail,
    error::{DeskError, DeskResult},
    filter::filter_rows,
    i18n::{translate, Locale},
    join::MergedCustomer,
    snapshot::{HeaderCell, RowView, ViewSnapshot},
    table::{sort_rows, toggle_sort, Column, Pagination, SortDirection, SortState},
    theme::ThemeMode,
    types::ClientId,
};

pub struct ViewerSession {
    rows: Vec<MergedCustomer>,
    pub filter_text: String,
    pub sort: Option<SortState>,
    pub pagination: Pagination,
    pub locale: Locale,
    pub theme: ThemeMode,
    selected: Option<ClientId>,
}

impl ViewerSession {
    pub fn new(rows: Vec<MergedCustomer>) -> Self {
        Self {
            rows,
            filter_text: String::new(),
            sort: Some(SortState::default()),
            pagination: Pagination::default(),
            locale: Locale::default(),
            theme: ThemeMode::default(),
            selected: None,
        }
    }

    /// Session seeded with the page size, locale and theme from `config`.
    pub fn with_config(rows: Vec<MergedCustomer>, config: &ViewerConfig) -> DeskResult<Self> {
        let mut session = Self::new(rows);
        session.pagination = Pagination::with_page_size(config.page_size)?;
        session.locale = config.locale;
        session.theme = config.theme;
        Ok(session)
    }

    pub fn rows(&self) -> &[MergedCustomer] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&MergedCustomer> {
        let id = self.selected.as_deref()?;
        self.find(id)
    }

    fn find(&self, client_id: &str) -> Option<&MergedCustomer> {
        self.rows.iter().find(|r| r.client_id() == client_id)
    }

    /// Filtered and sorted rows, across all pages.
    pub fn filtered_sorted(&self) -> Vec<&MergedCustomer> {
        let mut rows = filter_rows(&self.rows, &self.filter_text);
        sort_rows(&mut rows, self.sort);
        rows
    }

    /// Rows on the current page, with the index pulled back in range.
    pub fn visible(&self) -> Vec<&MergedCustomer> {
        let rows = self.filtered_sorted();
        self.clamped_pagination(rows.len()).page(&rows).to_vec()
    }

    fn clamped_pagination(&self, total: usize) -> Pagination {
        let mut pagination = self.pagination;
        pagination.clamp(total);
        pagination
    }

    fn filtered_count(&self) -> usize {
        if self.filter_text.is_empty() {
            self.rows.len()
        } else {
            filter_rows(&self.rows, &self.filter_text).len()
        }
    }

    pub fn apply(&mut self, cmd: ViewerCommand) -> DeskResult<()> {
        log::debug!("session: {cmd:?}");
        match cmd {
            ViewerCommand::SetFilter { text } => {
                self.filter_text = text;
                self.pagination.first();
            }
            ViewerCommand::ToggleSort { column } => {
                self.sort = toggle_sort(self.sort, column)?;
            }
            ViewerCommand::SetSort { column, desc } => {
                let direction = if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                self.sort = Some(SortState::new(column, direction)?);
            }
            ViewerCommand::ClearSort => self.sort = None,
            ViewerCommand::SetPageSize { size } => self.pagination.set_page_size(size)?,
            ViewerCommand::FirstPage => self.pagination.first(),
            ViewerCommand::PreviousPage => self.pagination.previous(),
            ViewerCommand::NextPage => {
                let total = self.filtered_count();
                self.pagination.next(total);
            }
            ViewerCommand::LastPage => {
                let total = self.filtered_count();
                self.pagination.last(total);
            }
            ViewerCommand::GotoPage { index } => {
                let total = self.filtered_count();
                self.pagination.goto(index, total);
            }
            ViewerCommand::SetLanguage { lang } => self.locale = lang,
            ViewerCommand::ToggleTheme => self.theme = self.theme.toggle(),
            ViewerCommand::ViewPortfolios { client_id } => {
                if self.find(&client_id).is_none() {
                    return Err(DeskError::CustomerNotFound { client_id });
                }
                self.selected = Some(client_id);
            }
            ViewerCommand::CloseDetail => self.selected = None,
        }
        Ok(())
    }

    pub fn detail(&self) -> Option<PortfolioDetail> {
        self.selected()
            .map(|row| PortfolioDetail::for_customer(row, self.locale))
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let filtered = self.filtered_sorted();
        let total_rows = filtered.len();
        let pagination = self.clamped_pagination(total_rows);
        let page = pagination.page(&filtered);

        let headers = Column::ALL
            .iter()
            .map(|col| HeaderCell {
                id: col.id(),
                label: col.header(self.locale).to_string(),
                sortable: col.is_sortable(),
                sort: self
                    .sort
                    .filter(|s| s.column == *col)
                    .map(|s| s.direction),
            })
            .collect();

        let rows = page
            .iter()
            .map(|row| RowView {
                client_id: row.client_id().to_string(),
                cells: Column::ALL
                    .iter()
                    .map(|col| col.cell(row, self.locale))
                    .collect(),
            })
            .collect();

        let of = translate(self.locale, "of");
        let page_count = pagination.page_count(total_rows);

        ViewSnapshot {
            locale: self.locale,
            theme: self.theme,
            theme_toggle_label: self.theme.toggle_label(),
            filter_text: self.filter_text.clone(),
            filter_placeholder: translate(self.locale, "Filter table...").to_string(),
            headers,
            rows,
            total_rows,
            loaded_rows: self.rows.len(),
            page_index: pagination.page_index(),
            page_count,
            page_size: pagination.page_size(),
            can_previous: pagination.can_previous(),
            can_next: pagination.can_next(total_rows),
            rows_label: format!(
                "{} {of} {total_rows} {}",
                page.len(),
                translate(self.locale, "Rows")
            ),
            page_label: format!("{} {of} {page_count}", pagination.page_index() + 1),
            detail: self.detail(),
        }
    }
}
