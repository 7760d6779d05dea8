//! Table model: column definitions, single-column sorting and pagination.
//!
//! Pipeline order is filter -> sort -> paginate. The filter lives in
//! `filter.rs`; this module takes over from the filtered rows.

use crate::{
    error::{DeskError, DeskResult},
    format::format_currency,
    i18n::{translate, Locale},
    join::MergedCustomer,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub const PAGE_SIZES: &[usize] = &[10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ── Columns ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    FullName,
    RiskProfile,
    AnnualIncome,
    Residence,
    ClientType,
    Portfolios,
}

impl Column {
    /// Display order.
    pub const ALL: [Column; 6] = [
        Column::FullName,
        Column::RiskProfile,
        Column::AnnualIncome,
        Column::Residence,
        Column::ClientType,
        Column::Portfolios,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::RiskProfile => "riskProfile",
            Self::AnnualIncome => "annualIncome",
            Self::Residence => "residence",
            Self::ClientType => "clientType",
            Self::Portfolios => "portfolios",
        }
    }

    /// i18n key of the header label.
    pub fn header_key(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::RiskProfile => "Risk Profile",
            Self::AnnualIncome => "Annual Income",
            Self::Residence => "Residence",
            Self::ClientType => "Client Type",
            Self::Portfolios => "Portfolios",
        }
    }

    pub fn header(&self, locale: Locale) -> &'static str {
        translate(locale, self.header_key())
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, Self::Portfolios)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::AnnualIncome)
    }

    /// Direction applied the first time the column is toggled.
    pub fn first_sort_direction(&self) -> SortDirection {
        if self.is_numeric() {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn cell(&self, row: &MergedCustomer, locale: Locale) -> String {
        let c = &row.customer;
        match self {
            Self::FullName => c.full_name(),
            Self::RiskProfile => row.risk_profile_name().unwrap_or_default().to_string(),
            Self::AnnualIncome => format_currency(c.annual_income, &c.currency),
            Self::Residence => c.residence.clone(),
            Self::ClientType => {
                format!("{} {}", c.client_kind().icon(), c.client_type.to_lowercase())
            }
            Self::Portfolios => translate(locale, "View Portfolios").to_string(),
        }
    }

    fn compare(&self, a: &MergedCustomer, b: &MergedCustomer) -> Ordering {
        match self {
            Self::AnnualIncome => a.customer.annual_income.total_cmp(&b.customer.annual_income),
            Self::FullName => compare_text(&a.customer.full_name(), &b.customer.full_name()),
            Self::RiskProfile => compare_text(
                a.risk_profile_name().unwrap_or_default(),
                b.risk_profile_name().unwrap_or_default(),
            ),
            Self::Residence => compare_text(&a.customer.residence, &b.customer.residence),
            Self::ClientType => compare_text(&a.customer.client_type, &b.customer.client_type),
            Self::Portfolios => Ordering::Equal,
        }
    }
}

impl FromStr for Column {
    type Err = DeskError;

    fn from_str(id: &str) -> DeskResult<Self> {
        Column::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| DeskError::UnknownColumn { id: id.to_string() })
    }
}

/// Case-insensitive comparison, falling back to byte order on ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ── Sorting ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Asc => " 🔼",
            Self::Desc => " 🔽",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: Column::FullName,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    pub fn new(column: Column, direction: SortDirection) -> DeskResult<Self> {
        if !column.is_sortable() {
            return Err(DeskError::ColumnNotSortable {
                id: column.id().to_string(),
            });
        }
        Ok(Self { column, direction })
    }

    /// Parse `column` or `column:asc` / `column:desc`.
    pub fn parse(arg: &str) -> DeskResult<Self> {
        let (id, dir) = arg.split_once(':').unwrap_or((arg, ""));
        let column: Column = id.parse()?;
        let direction = match dir.trim().to_lowercase().as_str() {
            "" => column.first_sort_direction(),
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => {
                return Err(DeskError::Other(anyhow::anyhow!(
                    "Unknown sort direction '{other}' in '{arg}'"
                )))
            }
        };
        Self::new(column, direction)
    }
}

/// Advance the sort on `column`: unsorted -> first direction -> reversed -> unsorted.
/// Sorting on another column replaces the current sort.
pub fn toggle_sort(current: Option<SortState>, column: Column) -> DeskResult<Option<SortState>> {
    if !column.is_sortable() {
        return Err(DeskError::ColumnNotSortable {
            id: column.id().to_string(),
        });
    }
    let first = column.first_sort_direction();
    Ok(match current {
        Some(s) if s.column == column && s.direction == first => Some(SortState {
            column,
            direction: first.reversed(),
        }),
        Some(s) if s.column == column => None,
        _ => Some(SortState {
            column,
            direction: first,
        }),
    })
}

/// Stable sort; rows with equal keys keep their input order in both directions.
pub fn sort_rows(rows: &mut [&MergedCustomer], sort: Option<SortState>) {
    let Some(sort) = sort else { return };
    rows.sort_by(|a, b| {
        let ord = sort.column.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

// ── Pagination ─────────────────────────────────────────────────

/// Page window over the filtered rows. The size is always one of `PAGE_SIZES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagination")]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

#[derive(Deserialize)]
struct RawPagination {
    #[serde(default)]
    page_index: usize,
    page_size: usize,
}

impl TryFrom<RawPagination> for Pagination {
    type Error = DeskError;

    fn try_from(raw: RawPagination) -> DeskResult<Self> {
        let mut pagination = Self::with_page_size(raw.page_size)?;
        pagination.page_index = raw.page_index;
        Ok(pagination)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn with_page_size(page_size: usize) -> DeskResult<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            page_index: 0,
            page_size,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Never less than one, so an empty table still shows "1 of 1".
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> DeskResult<()> {
        validate_page_size(page_size)?;
        self.page_size = page_size;
        self.page_index = 0;
        Ok(())
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    pub fn last(&mut self, total: usize) {
        self.page_index = self.page_count(total) - 1;
    }

    /// Jump to `index`, clamped to the last page.
    pub fn goto(&mut self, index: usize, total: usize) {
        self.page_index = index.min(self.page_count(total) - 1);
    }

    /// Pull the page index back in range after the row count shrank.
    pub fn clamp(&mut self, total: usize) {
        self.goto(self.page_index, total);
    }

    /// The slice of `rows` on the current page.
    pub fn page<'r, T>(&self, rows: &'r [T]) -> &'r [T] {
        let start = (self.page_index * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }
}

fn validate_page_size(size: usize) -> DeskResult<()> {
    if PAGE_SIZES.contains(&size) {
        Ok(())
    } else {
        Err(DeskError::InvalidPageSize {
            size,
            allowed: PAGE_SIZES,
        })
    }
}
