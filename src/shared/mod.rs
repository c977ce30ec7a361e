//! Shared newtypes and utilities used across all domain modules.
//!
//! `Endpoint` is serialization-transparent: it serializes identically to the
//! raw path segment the upstream API expects.

pub mod image;
pub mod normalize;

pub use image::{clean_image_url, resolve_image};
pub use normalize::normalize_name;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Category ────────────────────────────────────────────────────────────────

/// Resource family queried by a lookup. Each one owns a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Character,
    BreathingStyle,
    Demon,
}

impl Category {
    /// All categories in page order.
    pub const ALL: [Category; 3] = [
        Category::Character,
        Category::BreathingStyle,
        Category::Demon,
    ];

    /// Path segment under the API base URL.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::Character => "characters",
            Category::BreathingStyle => "breathings",
            Category::Demon => "demons",
        }
    }

    /// Noun used in error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::BreathingStyle => "breathing style",
            Category::Demon => "demon",
        }
    }

    /// Section heading shown on the page.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Character => "Personagem",
            Category::BreathingStyle => "Respiração",
            Category::Demon => "Oni",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::BreathingStyle => "breathing",
            Category::Demon => "demon",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected character, breathing or demon)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "characters" | "personagem" => Ok(Category::Character),
            "breathing" | "breathings" | "breathing_style" | "breathing-style"
            | "respiracao" | "respiração" => Ok(Category::BreathingStyle),
            "demon" | "demons" | "oni" => Ok(Category::Demon),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

// ─── Endpoint ────────────────────────────────────────────────────────────────

/// Normalized path segment identifying a resource (e.g. `"Giyu_Tomioka"`).
///
/// Built with [`normalize_name`]; an empty endpoint is never sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Endpoint(s))
    }
}

// ─── RouteLayout ─────────────────────────────────────────────────────────────

/// How request URLs are built from the base URL.
///
/// The upstream API has been queried both ways: with a per-category prefix
/// (`/characters/{id}`) and with the endpoint directly under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteLayout {
    /// `{base}/{category}/{endpoint}`
    #[default]
    PerCategory,
    /// `{base}/{endpoint}`
    Flat,
}

impl FromStr for RouteLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-category" | "per_category" | "category" => Ok(RouteLayout::PerCategory),
            "flat" => Ok(RouteLayout::Flat),
            other => Err(format!("unknown route layout '{}'", other)),
        }
    }
}
