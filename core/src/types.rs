//! Domain records for the actress API.
//!
//! # Design
//! These types mirror the mock-server's seed data but are defined
//! independently; the mock-server stores raw JSON so it can also serve
//! records that do not fit this shape. Integration tests catch drift.
//!
//! `Actress` is serialize-only: the one way to decode it from JSON is the
//! validator in `crate::validate`, so holding one means the record passed
//! the schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single actress record returned by the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Actress {
    pub id: i64,
    pub name: String,
    pub birth_year: i64,
    /// `None` for living actresses or when the year is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i64>,
    pub biography: String,
    /// URL of a portrait. Never dereferenced.
    pub image: String,
    pub most_famous_movies: [String; 3],
    pub awards: String,
    pub nationality: Nationality,
}

/// Nationalities known to the API.
///
/// `Unlisted` carries any other string and is only produced when the
/// validator runs with `NationalityPolicy::Lenient`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Nationality {
    American,
    British,
    Australian,
    IsraeliAmerican,
    SouthAfrican,
    French,
    Indian,
    Israeli,
    Spanish,
    SouthKorean,
    Chinese,
    Unlisted(String),
}

impl Nationality {
    /// Every known nationality, in declaration order.
    pub const KNOWN: [Nationality; 11] = [
        Nationality::American,
        Nationality::British,
        Nationality::Australian,
        Nationality::IsraeliAmerican,
        Nationality::SouthAfrican,
        Nationality::French,
        Nationality::Indian,
        Nationality::Israeli,
        Nationality::Spanish,
        Nationality::SouthKorean,
        Nationality::Chinese,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Nationality::American => "American",
            Nationality::British => "British",
            Nationality::Australian => "Australian",
            Nationality::IsraeliAmerican => "Israeli-American",
            Nationality::SouthAfrican => "South African",
            Nationality::French => "French",
            Nationality::Indian => "Indian",
            Nationality::Israeli => "Israeli",
            Nationality::Spanish => "Spanish",
            Nationality::SouthKorean => "South Korean",
            Nationality::Chinese => "Chinese",
            Nationality::Unlisted(other) => other,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Nationality::Unlisted(_))
    }
}

impl From<String> for Nationality {
    fn from(value: String) -> Self {
        Nationality::KNOWN
            .into_iter()
            .find(|known| known.as_str() == value)
            .unwrap_or(Nationality::Unlisted(value))
    }
}

impl From<Nationality> for String {
    fn from(value: Nationality) -> Self {
        match value {
            Nationality::Unlisted(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
