//! The data files shipped in `data/` load, repair and join cleanly.
//!
//! The files carry trailing commas on purpose; strict JSON would reject them.

use clientdesk_core::{
    config::ViewerConfig,
    dataset::{load_merged, RawDataSet},
    DeskError,
};
use std::path::PathBuf;

const CUSTOMERS: &str = include_str!("../../data/data.json");
const PORTFOLIOS: &str = include_str!("../../data/portfolio.json");
const RISK_PROFILES: &str = include_str!("../../data/riskProfiles.json");

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

#[test]
fn bundled_files_are_not_strict_json() {
    assert!(
        serde_json::from_str::<serde_json::Value>(CUSTOMERS).is_err(),
        "Fixture lost its trailing commas; the tolerant path is no longer exercised"
    );
}

#[test]
fn bundled_files_decode_tolerantly() {
    let raw = RawDataSet::from_texts(CUSTOMERS, PORTFOLIOS, RISK_PROFILES).unwrap();
    assert_eq!(raw.customers.len(), 32);
    assert_eq!(raw.portfolios.len(), 30);
    assert_eq!(raw.risk_profiles.len(), 5);
}

#[test]
fn join_over_bundled_data_resolves_keys() {
    let merged = RawDataSet::from_texts(CUSTOMERS, PORTFOLIOS, RISK_PROFILES)
        .unwrap()
        .join();

    assert_eq!(merged.len(), 32);

    let alice = &merged[0];
    assert_eq!(alice.customer.full_name(), "Alice Smith");
    assert_eq!(alice.risk_profile_name(), Some("Conservative"));
    assert_eq!(alice.portfolios().len(), 1);
    assert_eq!(alice.portfolios()[0].investment_type, "Equity");

    for id in ["6", "20"] {
        let row = merged.iter().find(|m| m.client_id() == id).unwrap();
        assert!(row.portfolios().is_empty(), "Client {id} has no portfolio record");
    }

    let orphan = merged.iter().find(|m| m.client_id() == "31").unwrap();
    assert!(orphan.risk_profile_details.is_none(), "Risk profile 9 does not exist");
}

#[test]
fn load_from_data_dir_matches_included_text() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = ViewerConfig {
        data_dir: data_dir(),
        ..ViewerConfig::default()
    };
    let from_disk = load_merged(&config).unwrap();
    let from_text = RawDataSet::from_texts(CUSTOMERS, PORTFOLIOS, RISK_PROFILES)
        .unwrap()
        .join();

    assert_eq!(from_disk, from_text);
}

#[test]
fn missing_file_is_an_io_error() {
    let config = ViewerConfig {
        data_dir: data_dir(),
        portfolios_file: "does-not-exist.json".into(),
        ..ViewerConfig::default()
    };
    match load_merged(&config) {
        Err(DeskError::Io { path, .. }) => assert!(path.ends_with("does-not-exist.json")),
        other => panic!("Expected an I/O error, got {other:?}"),
    }
}

#[test]
fn unrepairable_file_stops_the_whole_load() {
    let dir = std::env::temp_dir().join(format!("clientdesk-broken-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("data.json"), CUSTOMERS).unwrap();
    std::fs::write(dir.join("portfolio.json"), "[{\"portfolioId\": \"1\" \"investments\": []}]")
        .unwrap();
    std::fs::write(dir.join("riskProfiles.json"), RISK_PROFILES).unwrap();

    let config = ViewerConfig {
        data_dir: dir.clone(),
        ..ViewerConfig::default()
    };
    let result = load_merged(&config);
    std::fs::remove_dir_all(&dir).ok();

    match result {
        Err(DeskError::Parse { resource, .. }) => assert!(resource.ends_with("portfolio.json")),
        other => panic!("Expected a parse error and no rows, got {other:?}"),
    }
}
