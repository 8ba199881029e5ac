//! Synchronous client for the World Bank countries and population endpoints.
//!
//! The API serves every list as a paginated envelope: a two-element JSON
//! array whose first element is a [`ResponseHeader`] and whose second is the
//! data array for that page. [`Client`] walks all pages sequentially and
//! hands back typed records.
//!
//! Pagination is deliberately best-effort: when a later page fails, the
//! caller still receives everything collected up to that point, together
//! with the error, as a [`Paged`] value. Use [`Paged::into_result`] to get
//! fail-fast semantics instead.
//!
//! Typical usage:
//! ```no_run
//! # use wbc_rs::Client;
//! let client = Client::default();
//! let countries = client.country_list();
//! for c in &countries.items {
//!     println!("{} ({})", c.name, c.iso2_code);
//! }
//! ```

use crate::error::Error;
use crate::models::{
    CountryRecord, PopulationRecord, ResponseHeader, map_country_page, map_population_page,
};
use crate::net::{HttpTransport, build_query, decode, encode};
use crate::sort;
use chrono::{Datelike, Utc};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;

/// Path of the country list resource.
const COUNTRY_LIST_PATH: &str = "/countries";
/// Indicator id for total population.
const POPULATION_INDICATOR: &str = "SP.POP.TOTL";
/// Page sizes used by the two entry points.
const COUNTRY_PER_PAGE: u32 = 500;
const POPULATION_PER_PAGE: u32 = 100;

/// Result of a multi-page fetch.
///
/// `items` holds whatever was collected; `error` is set when collection was
/// interrupted. The two are independent, so callers can tell "no data for
/// this query" (empty items, no error) from "data collection was
/// interrupted" (any number of items, plus an error).
#[derive(Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub error: Option<Error>,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> Paged<T> {
    /// True when every page was fetched.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Fail-fast view: discard partial items when any page failed.
    pub fn into_result(self) -> Result<Vec<T>, Error> {
        match self.error {
            None => Ok(self.items),
            Some(e) => Err(e),
        }
    }

    fn map<U>(self, f: impl FnOnce(&[T]) -> Vec<U>) -> Paged<U> {
        Paged {
            items: f(&self.items),
            error: self.error,
        }
    }
}

/// Client for the World Bank API.
///
/// Owns its [`HttpTransport`]; construct one per configuration and reuse it,
/// there is no hidden process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Fetch the full country reference list, sorted ascending by name.
    ///
    /// All pages of `/countries` at 500 records per page.
    pub fn country_list(&self) -> Paged<CountryRecord> {
        let fetched = self.fetch_all_pages(COUNTRY_LIST_PATH, &HashMap::new(), COUNTRY_PER_PAGE);
        let mut out = fetched.map(|items| map_country_page(items));
        sort::sort_by(&mut out.items, sort::by_name);
        out
    }

    /// Fetch total-population observations for one country, 100 records per
    /// page, in the API's own order (most recent year first).
    ///
    /// `start_year` defaults to the current year, `end_year` defaults to
    /// `start_year`; the pair becomes the API's inclusive `date=start:end`
    /// range.
    pub fn population_by_country(
        &self,
        country_id: &str,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Paged<PopulationRecord> {
        let start = start_year.unwrap_or_else(|| Utc::now().year());
        let end = end_year.unwrap_or(start);
        let path = format!(
            "{}/{}/indicators/{}",
            COUNTRY_LIST_PATH,
            encode(country_id),
            POPULATION_INDICATOR
        );
        let params = HashMap::from([("date".to_string(), format!("{start}:{end}"))]);
        self.fetch_all_pages(&path, &params, POPULATION_PER_PAGE)
            .map(|items| map_population_page(items))
    }

    /// Walk every page of `resource` and concatenate the per-page data
    /// arrays in page order.
    ///
    /// The first request carries no `page` parameter (the API defaults to
    /// page 1); the page count is read once from that response and trusted
    /// for the rest of the query. `total == 0` is a valid empty result, not
    /// an error. Any page failure stops the walk and returns the partial
    /// accumulation together with the error.
    fn fetch_all_pages(
        &self,
        resource: &str,
        base_params: &HashMap<String, String>,
        per_page: u32,
    ) -> Paged<Value> {
        let mut params = base_params.clone();
        params.insert("format".into(), "json".into());
        params.insert("per_page".into(), per_page.to_string());

        let mut out = Paged::default();
        let (header, data) = match self.fetch_page(resource, &params) {
            Ok(page) => page,
            Err(e) => {
                out.error = Some(e);
                return out;
            }
        };
        if header.total == 0 {
            debug!("{resource}: no results");
            return out;
        }
        // A bogus page count with data present still means the API served
        // one page; never skip the data we already hold.
        let pages = header.pages.max(1);
        debug!(
            "{resource}: loading {pages} pages, {} per page, {} total",
            header.per_page, header.total
        );
        out.items.extend(data);

        for page in 2..=pages {
            params.insert("page".into(), page.to_string());
            match self.fetch_page(resource, &params) {
                Ok((_, data)) => {
                    debug!("{resource}: page {page}, {} records", data.len());
                    out.items.extend(data);
                }
                Err(e) => {
                    warn!("{resource}: page {page} failed, returning partial result: {e}");
                    out.error = Some(e);
                    return out;
                }
            }
        }
        out
    }

    /// Fetch and decode one page: `[header, dataArray]`.
    ///
    /// A missing data array element decodes as an empty page. A missing or
    /// malformed header is a [`Error::Decode`], as is an API-level error
    /// payload (a `message` object in position 0).
    fn fetch_page(
        &self,
        resource: &str,
        params: &HashMap<String, String>,
    ) -> Result<(ResponseHeader, Vec<Value>), Error> {
        let body = self
            .transport
            .get(&format!("{}{}", resource, build_query(params)))?;
        let v = decode(&body)?;
        let arr = v
            .as_array()
            .ok_or_else(|| Error::Decode("expected a top-level array".into()))?;
        let first = arr
            .first()
            .ok_or_else(|| Error::Decode("empty response array".into()))?;
        if first.get("message").is_some() {
            return Err(Error::Decode(format!("world bank api error: {first}")));
        }
        let header: ResponseHeader = serde_json::from_value(first.clone())
            .map_err(|e| Error::Decode(format!("response header: {e}")))?;
        let data = arr.get(1).and_then(Value::as_array).cloned().unwrap_or_default();
        Ok((header, data))
    }
}
