// src/models/schema.rs

//! Declarative field tables and the validator that interprets them.
//!
//! Each record type lists its fields as static [`FieldSpec`]s. [`validate`]
//! checks a JSON payload against such a table, collecting every failure, and
//! returns a normalized object holding every declared field with defaults
//! resolved.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::{FieldError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Integer,
    Boolean,
    TextList,
    Timestamp,
}

impl FieldType {
    fn error_kind(self) -> &'static str {
        match self {
            FieldType::Text => "string_type",
            FieldType::Number => "float_type",
            FieldType::Integer => "int_type",
            FieldType::Boolean => "bool_type",
            FieldType::TextList => "list_type",
            FieldType::Timestamp => "datetime_type",
        }
    }

    fn error_message(self) -> &'static str {
        match self {
            FieldType::Text => "Input should be a valid string",
            FieldType::Number => "Input should be a valid number",
            FieldType::Integer => "Input should be a valid integer",
            FieldType::Boolean => "Input should be a valid boolean",
            FieldType::TextList => "Input should be a valid list of strings",
            FieldType::Timestamp => "Input should be a valid datetime",
        }
    }

    /// Checks the JSON type and returns the normalized value.
    fn coerce(self, value: &Value) -> Option<Value> {
        match self {
            FieldType::Text => value.is_string().then(|| value.clone()),
            FieldType::Number => value.is_number().then(|| value.clone()),
            FieldType::Integer => {
                if value.is_i64() || value.is_u64() {
                    Some(value.clone())
                } else {
                    // 3.0 is accepted as 3; 3.5 and values past i64 are not
                    value
                        .as_f64()
                        .filter(|f| f.fract() == 0.0)
                        .filter(|f| (i64::MIN as f64..i64::MAX as f64).contains(f))
                        .map(|f| Value::from(f as i64))
                }
            }
            FieldType::Boolean => value.is_boolean().then(|| value.clone()),
            FieldType::TextList => value
                .as_array()
                .filter(|items| items.iter().all(Value::is_string))
                .map(|_| value.clone()),
            FieldType::Timestamp => value.as_str().and_then(parse_timestamp).map(|ts| {
                Value::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }),
        }
    }
}

/// Accepts RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Value substituted when a field is absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Text(&'static str),
    Number(f64),
    Boolean(bool),
    EmptyList,
}

impl DefaultValue {
    pub fn to_json(self) -> Value {
        match self {
            DefaultValue::Text(s) => Value::from(s),
            DefaultValue::Number(n) => Value::from(n),
            DefaultValue::Boolean(b) => Value::from(b),
            DefaultValue::EmptyList => Value::Array(Vec::new()),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    Required,
    Default { value: DefaultValue },
    /// Inclusive numeric bounds; `None` leaves that side open.
    Range { min: Option<f64>, max: Option<f64> },
    EmailSyntax,
    /// Conventional values only, nothing is enforced.
    FreeString,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Whether an explicit `null` is accepted.
    pub nullable: bool,
    pub constraints: &'static [Constraint],
    pub description: &'static str,
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }

    pub fn default_value(&self) -> Option<DefaultValue> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Default { value } => Some(*value),
            _ => None,
        })
    }
}

/// A record type stored in its own collection and validated by its table.
pub trait Schema: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;
    const FIELDS: &'static [FieldSpec];

    /// Validates an inbound payload and binds it to the typed record.
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let record = validate(Self::FIELDS, payload)?;
        serde_json::from_value(Value::Object(record)).map_err(|e| {
            ValidationError::single(FieldError::new(&["body"], "value_error", e.to_string()))
        })
    }
}

/// Checks `payload` against `fields`, reporting every offending field.
pub fn validate(fields: &[FieldSpec], payload: &Value) -> Result<Map<String, Value>, ValidationError> {
    let object = payload.as_object().ok_or_else(|| {
        ValidationError::single(FieldError::new(
            &["body"],
            "dict_type",
            "Input should be a valid dictionary",
        ))
    })?;

    let mut record = Map::new();
    let mut errors = Vec::new();

    for spec in fields {
        let loc = ["body", spec.name];
        match object.get(spec.name) {
            None | Some(Value::Null) if spec.is_required() => {
                errors.push(FieldError::new(&loc, "missing", "Field required"));
            }
            None => {
                let value = spec.default_value().map_or(Value::Null, DefaultValue::to_json);
                record.insert(spec.name.to_string(), value);
            }
            Some(Value::Null) if spec.nullable => {
                record.insert(spec.name.to_string(), Value::Null);
            }
            Some(raw) => match spec.ty.coerce(raw) {
                Some(value) => {
                    let before = errors.len();
                    check_constraints(spec, &value, &mut errors);
                    if errors.len() == before {
                        record.insert(spec.name.to_string(), value);
                    }
                }
                None => errors.push(FieldError::new(
                    &loc,
                    spec.ty.error_kind(),
                    spec.ty.error_message(),
                )),
            },
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(ValidationError { errors })
    }
}

fn check_constraints(spec: &FieldSpec, value: &Value, errors: &mut Vec<FieldError>) {
    let loc = ["body", spec.name];
    for constraint in spec.constraints {
        match constraint {
            Constraint::Range { min, max } => {
                let Some(n) = value.as_f64() else { continue };
                if let Some(min) = min.filter(|min| n < *min) {
                    errors.push(FieldError::new(
                        &loc,
                        "greater_than_equal",
                        format!("Input should be greater than or equal to {}", min),
                    ));
                }
                if let Some(max) = max.filter(|max| n > *max) {
                    errors.push(FieldError::new(
                        &loc,
                        "less_than_equal",
                        format!("Input should be less than or equal to {}", max),
                    ));
                }
            }
            Constraint::EmailSyntax => {
                if !value.as_str().is_some_and(is_valid_email) {
                    errors.push(FieldError::new(
                        &loc,
                        "value_error",
                        "value is not a valid email address",
                    ));
                }
            }
            Constraint::Required | Constraint::Default { .. } | Constraint::FreeString => {}
        }
    }
}

const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~-";

/// Lightweight address check: a dot-atom local part, `@`, and a dotted
/// domain of letter/digit/hyphen labels ending in an alphabetic TLD.
pub fn is_valid_email(address: &str) -> bool {
    if address.len() > 254 {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }

    let local_ok = local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
    });
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
