//! Ordering helpers for country records.
//!
//! The sort key is pluggable: pass any comparator to [`sort_by`], or use one
//! of the built-ins. A stable sort keeps ties deterministic, although no two
//! countries are expected to share a name or ISO2 code in practice.

use crate::models::CountryRecord;
use std::cmp::Ordering;

/// Sort records in place with a caller-supplied comparator.
pub fn sort_by<T, F>(records: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    records.sort_by(cmp);
}

/// Ascending by country name.
pub fn by_name(a: &CountryRecord, b: &CountryRecord) -> Ordering {
    a.name.cmp(&b.name)
}

/// Ascending by ISO 2 code.
pub fn by_iso2_code(a: &CountryRecord, b: &CountryRecord) -> Ordering {
    a.iso2_code.cmp(&b.iso2_code)
}

/// Reorder a country list ascending by ISO 2 code.
pub fn sort_countries_by_iso2(records: &mut [CountryRecord]) {
    sort_by(records, by_iso2_code);
}
