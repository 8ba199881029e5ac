//! wbc-rs
//!
//! A lightweight Rust library for retrieving World Bank country reference
//! data and total-population time series as typed, sorted records.
//!
//! ### Features
//! - Fetch the full country list (`/countries`), sorted by name
//! - Fetch population observations per country and year range
//! - Transparent pagination: all pages are walked sequentially and
//!   concatenated in page order
//! - Best-effort results: a failed page hands back everything fetched so
//!   far together with the error ([`Paged`])
//! - Tolerant decoding of the API's loosely-typed JSON (string-encoded
//!   numbers, null observations, absent nested objects)
//!
//! ### Example
//! ```no_run
//! use wbc_rs::Client;
//!
//! let client = Client::default();
//!
//! let countries = client.country_list();
//! println!("{} countries", countries.items.len());
//!
//! let population = client.population_by_country("US", Some(2007), Some(2017));
//! for p in &population.items {
//!     println!("{} {}: {}", p.country_name, p.year, p.value);
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod net;
pub mod sort;

pub use api::{Client, Paged};
pub use error::Error;
pub use models::{CountryRecord, LabeledPair, PopulationRecord, ResponseHeader};
pub use net::HttpTransport;
