use crate::{error::GateInError, utils::util::Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const UNKNOWN_STYLE_NUMBER: &str = "<unknown>";

/// A merchandise option exactly as it arrives from the dataset.
///
/// Every field is optional at this stage. Scalar values are kept in their textual
/// form so that numbers such as `order_qty` export exactly as stored. `division`
/// is kept as a raw JSON value because its type is only checked when the record
/// is validated by [`Record::from_raw`].
///
/// Status and product reference appear under two spellings in gate-in exports.
/// Both are read; the `CurrenStatus`/`Product_Reference` columns win when a row
/// carries both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub division: Option<Value>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub group_section: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub sub_department: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub gate_date: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub style_number: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub colour: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub order_qty: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub store_launch_week: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub current_status: Option<String>,
    #[serde(default, rename = "CurrenStatus", deserialize_with = "scalar_text")]
    pub curren_status: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_reference: Option<String>,
    #[serde(
        default,
        rename = "Product_Reference",
        deserialize_with = "scalar_text"
    )]
    pub product_reference_source: Option<String>,
}

fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value_to_text(&value)))
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Gate entry date: the stored text plus the instant it denotes, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDate {
    raw: String,
    parsed: Option<NaiveDateTime>,
}

impl GateDate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_gate_date(&raw);
        Self { raw, parsed }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.parsed.map(|timestamp| timestamp.date())
    }

    /// Parsed instant; plain dates resolve to midnight.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.parsed
    }
}

/// Parses the date forms seen in gate-in datasets: plain ISO dates, RFC 3339
/// timestamps and naive ISO timestamps. Timestamps with an offset resolve to
/// UTC.
pub fn parse_gate_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.naive_utc())
        })
        .or_else(|| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f").ok())
}

/// A validated merchandise option. `division` is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub division: String,
    pub group_section: Option<String>,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub gate_date: Option<GateDate>,
    pub style_number: Option<String>,
    pub colour: Option<String>,
    pub product_type: Option<String>,
    pub order_qty: Option<String>,
    pub store_launch_week: Option<String>,
    pub current_status: Option<String>,
    pub image: Option<String>,
    pub product_reference: Option<String>,
}

impl Record {
    pub fn new(division: impl Into<String>) -> Self {
        Self {
            division: division.into(),
            group_section: None,
            department: None,
            sub_department: None,
            gate_date: None,
            style_number: None,
            colour: None,
            product_type: None,
            order_qty: None,
            store_launch_week: None,
            current_status: None,
            image: None,
            product_reference: None,
        }
    }

    pub fn with(mut self, updates: impl FnOnce(&mut Self)) -> Self {
        updates(&mut self);
        self
    }

    /// Validates a raw record found at `position` in the fetched dataset.
    pub fn from_raw(raw: RawRecord, position: usize) -> Result<Self> {
        let style_number_label = || {
            raw.style_number
                .clone()
                .unwrap_or_else(|| UNKNOWN_STYLE_NUMBER.to_string())
        };
        let division = match &raw.division {
            Some(Value::String(division)) => division.clone(),
            None | Some(Value::Null) => {
                return Err(GateInError::MissingDivision {
                    position,
                    style_number: style_number_label(),
                })
            }
            Some(other) => {
                return Err(GateInError::InvalidDivision {
                    position,
                    style_number: style_number_label(),
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            division,
            group_section: raw.group_section,
            department: raw.department,
            sub_department: raw.sub_department,
            gate_date: raw
                .gate_date
                .filter(|raw_date| !raw_date.is_empty())
                .map(GateDate::new),
            style_number: raw.style_number,
            colour: raw.colour,
            product_type: raw.product_type,
            order_qty: raw.order_qty,
            store_launch_week: raw.store_launch_week,
            current_status: raw.curren_status.or(raw.current_status),
            image: raw.image,
            product_reference: raw.product_reference_source.or(raw.product_reference),
        })
    }

    /// Gate instant used for ordering; absent and unparsable dates are `None`.
    pub fn gate_timestamp(&self) -> Option<NaiveDateTime> {
        self.gate_date.as_ref().and_then(GateDate::timestamp)
    }

    /// Image URL, or `placeholder` when the record has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }
}
