//! Record domain — display-ready lookup results and the detail allow-list.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Allow-list ──────────────────────────────────────────────────────────────

/// A recognized detail field and the label the page shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField {
    /// Field name in the API record.
    pub key: &'static str,
    /// Alternate spellings seen upstream, checked after `key`.
    pub aliases: &'static [&'static str],
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> DetailField {
    DetailField {
        key,
        aliases: &[],
        label,
    }
}

/// Fields eligible for display, in display order.
pub const DETAIL_FIELDS: &[DetailField] = &[
    field("race", "Raça"),
    field("gender", "Gênero"),
    field("age", "Idade"),
    field("birthday", "Aniversário"),
    field("height", "Altura"),
    field("weight", "Peso"),
    field("hair color", "Cor do Cabelo"),
    DetailField {
        key: "eye color",
        aliases: &["eye color "],
        label: "Cor dos Olhos",
    },
    field("affiliation", "Afiliação"),
    field("occupation", "Ocupação"),
    field("combat style", "Estilo de Combate"),
    field("breathing_style", "Estilo de Respiração"),
    field("blood_demon_art", "Arte Demoníaca"),
    field("partner(s)", "Parceiro(s)"),
    field("status", "Status"),
    field("relative(s)", "Parentes"),
    field("manga debut", "Debut (Mangá)"),
    field("anime debut", "Debut (Anime)"),
    field("japanese va", "Dublador Japonês"),
    field("english va", "Dublador Inglês"),
    field("stage play", "Peça Teatral"),
];

/// Name shown when a record carries no usable `name`.
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// Alt text for a record image when the record has no name.
pub const DEFAULT_IMAGE_ALT: &str = "Imagem do Item";

// ─── DisplayResult ───────────────────────────────────────────────────────────

/// One rendered `label: value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

impl fmt::Display for DetailItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// A successful lookup, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub name: String,
    pub image_url: String,
    pub image_alt: String,
    pub details: Vec<DetailItem>,
}

impl DisplayResult {
    /// Find a rendered detail by its label.
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }

    /// Detail lines as `label: value` strings.
    pub fn detail_lines(&self) -> Vec<String> {
        self.details.iter().map(ToString::to_string).collect()
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record has no fields at all.
    Empty,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Empty => write!(f, "Record has no fields"),
        }
    }
}

impl std::error::Error for RecordError {}
