use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// A record id as it appears in the source data. The catalog mixes numeric
/// and string ids (a genre's `shows` list may contain `3` and `"7"`), so
/// comparisons always go through [`IdValue::canonical`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Num(i64),
    Text(String),
}

impl IdValue {
    /// Canonical string form used for all id comparisons and map keys.
    pub fn canonical(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    pub fn matches(&self, other: &IdValue) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Podcast {
    pub id: IdValue,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genres: Vec<IdValue>,
    #[serde(default)]
    pub seasons: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: IdValue,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub shows: Vec<IdValue>,
}

impl Genre {
    /// Whether a podcast belongs to this genre, matching ids permissively.
    pub fn contains(&self, podcast_id: &IdValue) -> bool {
        self.shows.iter().any(|s| s.matches(podcast_id))
    }
}

/// Lookup table from canonical genre id to display name. Built once from
/// the genre list and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct GenreMap {
    names: HashMap<String, String>,
}

impl GenreMap {
    pub fn from_genres(genres: &[Genre]) -> Self {
        let names = genres
            .iter()
            .map(|g| (g.id.canonical(), g.title.clone()))
            .collect();
        Self { names }
    }

    pub fn name(&self, id: &IdValue) -> Option<&str> {
        self.names.get(&id.canonical()).map(String::as_str)
    }
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full dataset. Loaded once at startup and treated as immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub podcasts: Vec<Podcast>,
    pub genres: Vec<Genre>,
}

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

impl Catalog {
    /// Parse the catalog bundled into the binary.
    pub fn embedded() -> Result<Self, DataError> {
        Ok(serde_json::from_str(EMBEDDED_CATALOG)?)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn genre_map(&self) -> GenreMap {
        GenreMap::from_genres(&self.genres)
    }
}
