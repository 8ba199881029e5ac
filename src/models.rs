use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata section returned by the API (position 0 of every paginated
/// response).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// 1-based page index of this response.
    pub page: i32,
    /// Total number of pages for the query.
    pub pages: i32,
    /// Some responses encode `per_page` as a string, others as a number.
    /// Accept both and normalize to `String`.
    #[serde(deserialize_with = "de_string_from_string_or_number")]
    pub per_page: String,
    pub total: u64,
}

/// Serde helper: accept either a JSON string or a JSON integer and keep it
/// as a `String`.
fn de_string_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct StringVisitor;

    impl<'de> Visitor<'de> for StringVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(s.to_owned())
        }
    }

    deserializer.deserialize_any(StringVisitor)
}

/// Generic `(code, label)` tuple the API nests everywhere: region, income
/// level, lending type, indicator, country reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabeledPair {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

impl LabeledPair {
    /// Extract a pair from an arbitrary JSON node. The API is inconsistent
    /// about the presence and typing of these nested objects, so this
    /// cannot fail: absent or non-string fields become empty strings.
    pub fn from_value(v: &Value) -> Self {
        let field = |key: &str| {
            v.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        LabeledPair {
            id: field("id"),
            value: field("value"),
        }
    }
}

/// Serde helper: lenient [`LabeledPair`], never fails.
fn de_labeled_pair<'de, D>(deserializer: D) -> Result<LabeledPair, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(LabeledPair::from_value(&v))
}

/// Serde helper: string if the node is a string, empty string otherwise
/// (null, number, absent).
fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(v.as_str().unwrap_or_default().to_owned())
}

/// Serde helper: unsigned integer from a string-encoded number. The API
/// reports missing observations as `null`; anything that does not parse
/// coerces to 0 (coerce-with-default policy, see the mapper docs).
fn de_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::String(s) => s.parse().unwrap_or(0),
        Value::Number(n) => n.as_u64().unwrap_or(0),
        _ => 0,
    })
}

/// Raw country entry as served by `/countries` (position 1 array).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCountry {
    pub id: String,
    #[serde(rename = "iso2Code")]
    pub iso2_code: String,
    pub name: String,
    #[serde(default, deserialize_with = "de_labeled_pair")]
    pub region: LabeledPair,
    #[serde(default, deserialize_with = "de_labeled_pair")]
    pub adminregion: LabeledPair,
    #[serde(rename = "incomeLevel", default, deserialize_with = "de_labeled_pair")]
    pub income_level: LabeledPair,
    #[serde(rename = "lendingType", default, deserialize_with = "de_labeled_pair")]
    pub lending_type: LabeledPair,
    #[serde(rename = "capitalCity", default, deserialize_with = "de_lenient_string")]
    pub capital_city: String,
    /// Coordinates arrive as string-encoded decimals.
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub longitude: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub latitude: String,
}

/// One country reference record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryRecord {
    pub id: String,
    pub iso2_code: String,
    pub name: String,
    pub region: LabeledPair,
    pub admin_region: LabeledPair,
    pub income_level: LabeledPair,
    pub lending_type: LabeledPair,
    pub capital_city: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<RawCountry> for CountryRecord {
    fn from(r: RawCountry) -> Self {
        Self {
            id: r.id,
            iso2_code: r.iso2_code,
            name: r.name,
            region: r.region,
            admin_region: r.adminregion,
            income_level: r.income_level,
            lending_type: r.lending_type,
            capital_city: r.capital_city,
            // Aggregates like "World" carry empty coordinate strings;
            // those coerce to 0.0 rather than failing the record.
            longitude: r.longitude.parse().unwrap_or(0.0),
            latitude: r.latitude.parse().unwrap_or(0.0),
        }
    }
}

/// Raw population entry for the `SP.POP.TOTL` indicator (position 1 array).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPopulation {
    #[serde(default, deserialize_with = "de_labeled_pair")]
    pub country: LabeledPair,
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub value: u64,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub date: String,
}

/// One population observation (country, year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopulationRecord {
    pub country_id: String,
    pub country_name: String,
    /// 0 when the API reports `null` for the year.
    pub value: u64,
    /// Kept verbatim as a string, as served by the API's `date` field.
    pub year: String,
}

impl From<RawPopulation> for PopulationRecord {
    fn from(r: RawPopulation) -> Self {
        Self {
            country_id: r.country.id,
            country_name: r.country.value,
            value: r.value,
            year: r.date,
        }
    }
}

/// Map one page of decoded `/countries` data to typed records.
///
/// Policy: a record missing any of the required `id`/`iso2Code`/`name`
/// strings is skipped with a warning; the rest of the page survives.
/// Optional fields coerce to defaults and never fail a record.
pub fn map_country_page(data: &[Value]) -> Vec<CountryRecord> {
    data.iter()
        .filter_map(|v| match serde_json::from_value::<RawCountry>(v.clone()) {
            Ok(raw) => Some(CountryRecord::from(raw)),
            Err(e) => {
                warn!("skipping malformed country record: {e}");
                None
            }
        })
        .collect()
}

/// Map one page of decoded population data to typed records. All fields are
/// lenient, so only a non-object element can be skipped.
pub fn map_population_page(data: &[Value]) -> Vec<PopulationRecord> {
    data.iter()
        .filter_map(
            |v| match serde_json::from_value::<RawPopulation>(v.clone()) {
                Ok(raw) => Some(PopulationRecord::from(raw)),
                Err(e) => {
                    warn!("skipping malformed population record: {e}");
                    None
                }
            },
        )
        .collect()
}
