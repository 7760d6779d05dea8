//! Core of the customer table viewer.
//!
//! Loads customer, portfolio and risk-profile records, joins them into
//! merged rows and exposes the filter / sort / paginate view over them.

pub mod command;
pub mod config;
pub mod customer;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod filter;
pub mod format;
pub mod i18n;
pub mod join;
pub mod names;
pub mod render;
pub mod rng;
pub mod sample;
pub mod session;
pub mod snapshot;
pub mod table;
pub mod theme;
pub mod tolerant;
pub mod types;

pub use error::{DeskError, DeskResult};
pub use filter::filter_rows;
pub use join::{join_records, MergedCustomer};
pub use tolerant::{clean_json, parse_tolerant};
