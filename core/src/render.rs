//! Plain-text rendering of a view snapshot for the terminal.

use crate::{
    detail::PortfolioDetail,
    error::DeskResult,
    i18n::translate,
    snapshot::ViewSnapshot,
    theme::{Rgb, ANSI_RESET},
};
use std::fmt::Write;

/// Render the table, the row counter and the pager.
///
/// With `colour` set, the header row is painted with the active theme's
/// header background and text colour using 24-bit ANSI escapes.
pub fn render_table(snapshot: &ViewSnapshot, colour: bool) -> DeskResult<String> {
    let headers: Vec<String> = snapshot.headers.iter().map(|h| h.display()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &snapshot.rows {
        for (w, cell) in widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut out = String::new();
    let filter = if snapshot.filter_text.is_empty() {
        format!("[{}]", snapshot.filter_placeholder)
    } else {
        snapshot.filter_text.clone()
    };
    let _ = writeln!(out, "{filter}");

    let header_line = format_line(&headers, &widths);
    if colour {
        let palette = snapshot.theme.palette();
        let bg = Rgb::from_hex(palette.table_header_background)?;
        let fg = Rgb::from_hex(palette.button_text_color)?;
        let _ = writeln!(out, "{}{}{header_line}{ANSI_RESET}", bg.ansi_bg(), fg.ansi_fg());
    } else {
        let _ = writeln!(out, "{header_line}");
    }
    let _ = writeln!(out, "{}", separator(&widths));

    for row in &snapshot.rows {
        let _ = writeln!(out, "{}", format_line(&row.cells, &widths));
    }

    let _ = writeln!(
        out,
        "{} {} | {}",
        translate(snapshot.locale, "Show"),
        snapshot.page_size,
        snapshot.rows_label
    );
    let _ = writeln!(
        out,
        "{} {} {} {} {}",
        if snapshot.can_previous { "<<" } else { "  " },
        if snapshot.can_previous { "<" } else { " " },
        snapshot.page_label,
        if snapshot.can_next { ">" } else { " " },
        if snapshot.can_next { ">>" } else { "  " },
    );

    if let Some(detail) = &snapshot.detail {
        out.push('\n');
        out.push_str(&render_detail(detail, snapshot));
    }
    Ok(out)
}

pub fn render_detail(detail: &PortfolioDetail, snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    let _ = writeln!(out, "{}", "-".repeat(display_width(&detail.title)));
    for line in &detail.lines {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "[{}]", translate(snapshot.locale, "Close"));
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(display_width(cell));
        let _ = write!(line, " {cell}{} |", " ".repeat(pad));
    }
    line
}

fn separator(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        let _ = write!(line, "{}|", "-".repeat(width + 2));
    }
    line
}

/// Character count; wide glyphs such as the sort markers count as one.
fn display_width(s: &str) -> usize {
    s.chars().count()
}
