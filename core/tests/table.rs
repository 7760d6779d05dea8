//! Column sorting and pagination.

use clientdesk_core::{
    customer::CustomerRecord,
    i18n::Locale,
    join_records,
    table::{sort_rows, toggle_sort, Column, Pagination, SortDirection, SortState, PAGE_SIZES},
    DeskError, MergedCustomer,
};

fn row(id: &str, first: &str, last: &str, income: f64) -> CustomerRecord {
    CustomerRecord {
        client_id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        annual_income: income,
        currency: "CHF".into(),
        residence: "Bern".into(),
        client_type: "Private".into(),
        risk_profile: 1,
        portfolios: Vec::new(),
    }
}

fn merged() -> Vec<MergedCustomer> {
    join_records(
        &[
            row("1", "zack", "Johnson", 50_000.0),
            row("2", "Alice", "Smith", 250_000.0),
            row("3", "Marco", "Rossi", 90_000.0),
            row("4", "alice", "Smith", 90_000.0),
        ],
        &[],
        &[],
    )
}

fn sorted_ids(rows: &[MergedCustomer], sort: Option<SortState>) -> Vec<&str> {
    let mut refs: Vec<&MergedCustomer> = rows.iter().collect();
    sort_rows(&mut refs, sort);
    refs.into_iter().map(|r| r.client_id()).collect()
}

#[test]
fn default_sort_is_full_name_ascending() {
    let sort = SortState::default();
    assert_eq!(sort.column, Column::FullName);
    assert_eq!(sort.direction, SortDirection::Asc);
}

#[test]
fn full_name_sort_ignores_case_with_stable_tie_break() {
    let rows = merged();
    let asc = SortState::new(Column::FullName, SortDirection::Asc).unwrap();
    assert_eq!(sorted_ids(&rows, Some(asc)), vec!["2", "4", "3", "1"]);

    let desc = SortState::new(Column::FullName, SortDirection::Desc).unwrap();
    assert_eq!(sorted_ids(&rows, Some(desc)), vec!["1", "3", "4", "2"]);
}

#[test]
fn income_sorts_numerically_and_keeps_ties_in_input_order() {
    let rows = merged();
    let desc = SortState::new(Column::AnnualIncome, SortDirection::Desc).unwrap();
    assert_eq!(sorted_ids(&rows, Some(desc)), vec!["2", "3", "4", "1"]);

    let asc = SortState::new(Column::AnnualIncome, SortDirection::Asc).unwrap();
    assert_eq!(sorted_ids(&rows, Some(asc)), vec!["1", "3", "4", "2"]);
}

#[test]
fn no_sort_keeps_input_order() {
    let rows = merged();
    assert_eq!(sorted_ids(&rows, None), vec!["1", "2", "3", "4"]);
}

#[test]
fn toggle_cycles_text_column_asc_desc_none() {
    let s1 = toggle_sort(None, Column::Residence).unwrap();
    assert_eq!(s1.map(|s| s.direction), Some(SortDirection::Asc));
    let s2 = toggle_sort(s1, Column::Residence).unwrap();
    assert_eq!(s2.map(|s| s.direction), Some(SortDirection::Desc));
    let s3 = toggle_sort(s2, Column::Residence).unwrap();
    assert_eq!(s3, None);
}

#[test]
fn toggle_starts_numeric_column_descending() {
    let s = toggle_sort(Some(SortState::default()), Column::AnnualIncome).unwrap();
    assert_eq!(
        s,
        Some(SortState {
            column: Column::AnnualIncome,
            direction: SortDirection::Desc
        })
    );
}

#[test]
fn portfolios_column_cannot_be_sorted() {
    assert!(matches!(
        toggle_sort(None, Column::Portfolios),
        Err(DeskError::ColumnNotSortable { .. })
    ));
    assert!(SortState::parse("portfolios:asc").is_err());
}

#[test]
fn sort_spec_parsing() {
    assert_eq!(
        SortState::parse("annualIncome").unwrap().direction,
        SortDirection::Desc
    );
    assert_eq!(
        SortState::parse("FULLNAME:desc").unwrap(),
        SortState::new(Column::FullName, SortDirection::Desc).unwrap()
    );
    assert!(matches!(
        SortState::parse("nope"),
        Err(DeskError::UnknownColumn { .. })
    ));
    assert!(SortState::parse("residence:sideways").is_err());
}

#[test]
fn cells_render_display_values() {
    let rows = merged();
    let alice = &rows[1];
    assert_eq!(Column::FullName.cell(alice, Locale::En), "Alice Smith");
    assert_eq!(Column::AnnualIncome.cell(alice, Locale::En), "CHF 250’000.00");
    assert_eq!(Column::ClientType.cell(alice, Locale::En), "🔒 private");
    assert_eq!(Column::RiskProfile.cell(alice, Locale::En), "");
    assert_eq!(Column::Portfolios.cell(alice, Locale::En), "View Portfolios");
    assert_eq!(Column::FullName.header(Locale::Fr), "Nom Complet");
}

#[test]
fn page_count_and_navigation_bounds() {
    let mut p = Pagination::default();
    assert_eq!(p.page_count(0), 1);
    assert_eq!(p.page_count(10), 1);
    assert_eq!(p.page_count(32), 4);
    assert!(!p.can_previous());
    assert!(p.can_next(32));

    p.next(32);
    p.next(32);
    p.next(32);
    assert_eq!(p.page_index(), 3);
    assert!(!p.can_next(32));
    p.next(32);
    assert_eq!(p.page_index(), 3, "next() past the end is a no-op");

    p.previous();
    assert_eq!(p.page_index(), 2);
    p.first();
    p.previous();
    assert_eq!(p.page_index(), 0);
}

#[test]
fn last_page_holds_the_remainder() {
    let items: Vec<u32> = (0..32).collect();
    let mut p = Pagination::default();
    p.last(items.len());
    assert_eq!(p.page(&items), &[30, 31]);
}

#[test]
fn goto_and_clamp_stay_in_range() {
    let mut p = Pagination::default();
    p.goto(99, 32);
    assert_eq!(p.page_index(), 3);
    p.clamp(5);
    assert_eq!(p.page_index(), 0);
}

#[test]
fn page_size_changes_are_validated_and_reset_index() {
    let mut p = Pagination::default();
    p.next(100);
    p.set_page_size(20).unwrap();
    assert_eq!(p.page_index(), 0);
    assert_eq!(p.page_size(), 20);

    for size in PAGE_SIZES {
        assert!(Pagination::with_page_size(*size).is_ok());
    }
    assert!(matches!(
        p.set_page_size(15),
        Err(DeskError::InvalidPageSize { size: 15, .. })
    ));
    assert_eq!(p.page_size(), 20, "Rejected size leaves state untouched");
}

#[test]
fn deserialized_pagination_rejects_unlisted_page_sizes() {
    let zero = serde_json::from_str::<Pagination>(r#"{"page_index": 0, "page_size": 0}"#);
    assert!(zero.is_err(), "A zero page size must not get past decoding");
    assert!(serde_json::from_str::<Pagination>(r#"{"page_index": 1, "page_size": 15}"#).is_err());

    let p: Pagination = serde_json::from_str(r#"{"page_index": 2, "page_size": 20}"#).unwrap();
    assert_eq!(p.page_index(), 2);
    assert_eq!(p.page_size(), 20);
    assert_eq!(p.page_count(45), 3);
}
