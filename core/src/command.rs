use crate::{i18n::Locale, table::Column, types::ClientId};
use serde::{Deserialize, Serialize};

/// Every user action the viewer understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerCommand {
    // ── Filtering ─────────────────────────────────
    SetFilter { text: String },

    // ── Sorting ───────────────────────────────────
    ToggleSort { column: Column },
    SetSort { column: Column, desc: bool },
    ClearSort,

    // ── Pagination ────────────────────────────────
    SetPageSize { size: usize },
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    GotoPage { index: usize },

    // ── Presentation ──────────────────────────────
    SetLanguage { lang: Locale },
    ToggleTheme,

    // ── Portfolio detail ──────────────────────────
    ViewPortfolios { client_id: ClientId },
    CloseDetail,
}
