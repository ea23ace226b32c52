//! Schema validation for untrusted JSON coming off the wire.
//!
//! # Design
//! The record shape is described once, declaratively, by the serde derive
//! on the private `ActressRecord`. Validation is "deserialize into the wire
//! record or fail", preceded by an explicit object check so a top-level
//! array or primitive is reported as such instead of as a generic type
//! error. The nationality check runs last because it depends on the
//! caller's policy; only then is the public `Actress` built.

use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::types::{Actress, Nationality};

/// How strictly the `nationality` field is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NationalityPolicy {
    /// Only the eleven known nationalities are accepted.
    #[default]
    Strict,
    /// Any string is accepted; unknown values become `Nationality::Unlisted`.
    Lenient,
}

impl FromStr for NationalityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(NationalityPolicy::Strict),
            "lenient" => Ok(NationalityPolicy::Lenient),
            other => Err(format!("unknown nationality policy: {other}")),
        }
    }
}

/// Why a JSON value was rejected as an actress record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A field is missing or has the wrong type, or `most_famous_movies`
    /// does not hold exactly three strings.
    #[error("record does not match the actress schema: {0}")]
    Mismatch(String),

    #[error("unknown nationality {0:?}")]
    UnknownNationality(String),
}

/// Wire shape of an actress. Serde structs also accept JSON arrays
/// positionally, so this is only deserialized behind the object check.
#[derive(Deserialize)]
struct ActressRecord {
    #[serde(deserialize_with = "whole_number")]
    id: i64,
    name: String,
    #[serde(deserialize_with = "whole_number")]
    birth_year: i64,
    /// Absent is fine; an explicit `null` is not.
    #[serde(default, deserialize_with = "present_whole_number")]
    death_year: Option<i64>,
    biography: String,
    image: String,
    most_famous_movies: [String; 3],
    awards: String,
    nationality: Nationality,
}

impl From<ActressRecord> for Actress {
    fn from(record: ActressRecord) -> Self {
        Actress {
            id: record.id,
            name: record.name,
            birth_year: record.birth_year,
            death_year: record.death_year,
            biography: record.biography,
            image: record.image,
            most_famous_movies: record.most_famous_movies,
            awards: record.awards,
            nationality: record.nationality,
        }
    }
}

/// Any JSON number with an integral value in `i64` range, so `1949`,
/// `1949.0` and `1e3` all pass while `1949.5` does not.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(D::Error::custom(format!(
            "expected a whole number in i64 range, found {number}"
        ))),
    }
}

/// Only reached when the key is present.
fn present_whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer).map(Some)
}

/// Validate `value` and produce the typed record.
pub fn validate_actress(value: &Value, policy: NationalityPolicy) -> Result<Actress, SchemaError> {
    if !value.is_object() {
        return Err(SchemaError::NotAnObject {
            found: json_kind(value),
        });
    }

    let record =
        ActressRecord::deserialize(value).map_err(|e| SchemaError::Mismatch(e.to_string()))?;

    if policy == NationalityPolicy::Strict && !record.nationality.is_known() {
        return Err(SchemaError::UnknownNationality(record.nationality.to_string()));
    }
    Ok(record.into())
}

/// Predicate form of [`validate_actress`].
pub fn is_actress_like(value: &Value, policy: NationalityPolicy) -> bool {
    validate_actress(value, policy).is_ok()
}

/// Name of the JSON type of `value`, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::Nationality;

    fn valid() -> Value {
        json!({
            "id": 1,
            "name": "Meryl Streep",
            "birth_year": 1949,
            "biography": "Widely regarded as one of the greatest actresses of her generation.",
            "image": "https://example.com/streep.jpg",
            "most_famous_movies": ["Sophie's Choice", "The Devil Wears Prada", "Kramer vs. Kramer"],
            "awards": "3 Academy Awards",
            "nationality": "American"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut record = valid();
        record[field] = value;
        record
    }

    fn without(field: &str) -> Value {
        let mut record = valid();
        record.as_object_mut().unwrap().remove(field);
        record
    }

    #[test]
    fn accepts_well_formed_record() {
        let actress = validate_actress(&valid(), NationalityPolicy::Strict).unwrap();
        assert_eq!(actress.id, 1);
        assert_eq!(actress.name, "Meryl Streep");
        assert_eq!(actress.death_year, None);
        assert_eq!(actress.most_famous_movies[1], "The Devil Wears Prada");
        assert_eq!(actress.nationality, Nationality::American);
    }

    #[test]
    fn accepts_numeric_death_year() {
        let actress =
            validate_actress(&with("death_year", json!(2011)), NationalityPolicy::Strict).unwrap();
        assert_eq!(actress.death_year, Some(2011));
    }

    #[test]
    fn rejects_null_death_year() {
        assert!(!is_actress_like(&with("death_year", Value::Null), NationalityPolicy::Strict));
    }

    #[test]
    fn rejects_string_death_year() {
        assert!(!is_actress_like(&with("death_year", json!("2011")), NationalityPolicy::Strict));
    }

    #[test]
    fn rejects_every_missing_required_field() {
        for field in [
            "id",
            "name",
            "birth_year",
            "biography",
            "image",
            "most_famous_movies",
            "awards",
            "nationality",
        ] {
            let err = validate_actress(&without(field), NationalityPolicy::Lenient).unwrap_err();
            assert!(matches!(err, SchemaError::Mismatch(_)), "{field}: {err}");
        }
    }

    #[test]
    fn rejects_wrong_typed_fields() {
        let cases = [
            ("id", json!("1")),
            ("name", json!(42)),
            ("birth_year", json!("1949")),
            ("biography", json!(null)),
            ("image", json!(["url"])),
            ("most_famous_movies", json!("one, two, three")),
            ("awards", json!(3)),
            ("nationality", json!(1)),
        ];
        for (field, value) in cases {
            assert!(
                !is_actress_like(&with(field, value), NationalityPolicy::Lenient),
                "{field} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_fractional_year() {
        assert!(!is_actress_like(&with("birth_year", json!(1949.5)), NationalityPolicy::Strict));
    }

    #[test]
    fn accepts_whole_numbers_written_as_floats() {
        let mut record = valid();
        record["id"] = json!(1e3);
        record["birth_year"] = json!(1949.0);
        record["death_year"] = json!(2.011e3);
        let actress = validate_actress(&record, NationalityPolicy::Strict).unwrap();
        assert_eq!(actress.id, 1000);
        assert_eq!(actress.birth_year, 1949);
        assert_eq!(actress.death_year, Some(2011));
    }

    #[test]
    fn rejects_numbers_outside_i64() {
        assert!(!is_actress_like(&with("id", json!(u64::MAX)), NationalityPolicy::Strict));
        assert!(!is_actress_like(&with("id", json!(1e300)), NationalityPolicy::Strict));
    }

    #[test]
    fn positional_array_never_becomes_an_actress() {
        let positional = json!([
            1,
            "A",
            1949,
            2000,
            "b",
            "i",
            ["A", "B", "C"],
            "x",
            "Martian"
        ]);
        for policy in [NationalityPolicy::Strict, NationalityPolicy::Lenient] {
            let err = validate_actress(&positional, policy).unwrap_err();
            assert_eq!(err, SchemaError::NotAnObject { found: "array" });
        }
    }

    #[test]
    fn movies_must_have_exactly_three_entries() {
        let two = with("most_famous_movies", json!(["A", "B"]));
        let four = with("most_famous_movies", json!(["A", "B", "C", "D"]));
        assert!(!is_actress_like(&two, NationalityPolicy::Strict));
        assert!(!is_actress_like(&four, NationalityPolicy::Strict));
    }

    #[test]
    fn movies_must_all_be_strings() {
        let mixed = with("most_famous_movies", json!(["A", 2, "C"]));
        assert!(!is_actress_like(&mixed, NationalityPolicy::Strict));
    }

    #[test]
    fn rejects_non_objects() {
        for (value, kind) in [
            (Value::Null, "null"),
            (json!(true), "boolean"),
            (json!(3), "number"),
            (json!("actress"), "string"),
            (json!([valid()]), "array"),
        ] {
            let err = validate_actress(&value, NationalityPolicy::Strict).unwrap_err();
            assert_eq!(err, SchemaError::NotAnObject { found: kind });
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert!(is_actress_like(&with("agent", json!("CAA")), NationalityPolicy::Strict));
    }

    #[test]
    fn strict_policy_rejects_unknown_nationality() {
        let record = with("nationality", json!("Canadian"));
        let err = validate_actress(&record, NationalityPolicy::Strict).unwrap_err();
        assert_eq!(err, SchemaError::UnknownNationality("Canadian".to_string()));
    }

    #[test]
    fn lenient_policy_keeps_unknown_nationality() {
        let record = with("nationality", json!("Canadian"));
        let actress = validate_actress(&record, NationalityPolicy::Lenient).unwrap();
        assert_eq!(actress.nationality, Nationality::Unlisted("Canadian".to_string()));
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("strict".parse::<NationalityPolicy>().unwrap(), NationalityPolicy::Strict);
        assert_eq!(" Lenient ".parse::<NationalityPolicy>().unwrap(), NationalityPolicy::Lenient);
        assert!("loose".parse::<NationalityPolicy>().is_err());
    }
}
