//! Celestial bodies and calculated points included in every chart.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean lunar apogee
    BlackLilith,
    /// Mean lunar node
    NorthNode,
    SouthNode,
    Chiron,
}

// Swiss Ephemeris body numbers
const SE_MEAN_NODE: i32 = 10;
const SE_MEAN_APOG: i32 = 12;
const SE_CHIRON: i32 = 15;

/// How a body's coordinates are obtained from the ephemeris
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySource {
    /// Queried directly with this provider code
    Ephemeris(i32),
    /// Point opposite the body with this code: longitude + 180°, same latitude and speed
    OppositeOf(i32),
}

impl BodyId {
    pub fn source(self) -> BodySource {
        match self {
            BodyId::Sun => BodySource::Ephemeris(0),
            BodyId::Moon => BodySource::Ephemeris(1),
            BodyId::Mercury => BodySource::Ephemeris(2),
            BodyId::Venus => BodySource::Ephemeris(3),
            BodyId::Mars => BodySource::Ephemeris(4),
            BodyId::Jupiter => BodySource::Ephemeris(5),
            BodyId::Saturn => BodySource::Ephemeris(6),
            BodyId::Uranus => BodySource::Ephemeris(7),
            BodyId::Neptune => BodySource::Ephemeris(8),
            BodyId::Pluto => BodySource::Ephemeris(9),
            BodyId::BlackLilith => BodySource::Ephemeris(SE_MEAN_APOG),
            BodyId::NorthNode => BodySource::Ephemeris(SE_MEAN_NODE),
            BodyId::SouthNode => BodySource::OppositeOf(SE_MEAN_NODE),
            BodyId::Chiron => BodySource::Ephemeris(SE_CHIRON),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Moon => "Moon",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Pluto => "Pluto",
            BodyId::BlackLilith => "Black Lilith",
            BodyId::NorthNode => "North Node",
            BodyId::SouthNode => "South Node",
            BodyId::Chiron => "Chiron",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            BodyId::Sun => '☉',
            BodyId::Moon => '☽',
            BodyId::Mercury => '☿',
            BodyId::Venus => '♀',
            BodyId::Mars => '♂',
            BodyId::Jupiter => '♃',
            BodyId::Saturn => '♄',
            BodyId::Uranus => '⛢',
            BodyId::Neptune => '♆',
            BodyId::Pluto => '♇',
            BodyId::BlackLilith => '⚸',
            BodyId::NorthNode => '☊',
            BodyId::SouthNode => '☋',
            BodyId::Chiron => '⚷',
        }
    }
}

/// One row of the body catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: BodyId,
    pub name: String,
    pub glyph: char,
}

impl CatalogEntry {
    pub fn new(id: BodyId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            glyph: id.glyph(),
        }
    }

    /// Glyph and name, e.g. "☉ Sun"
    pub fn label(&self) -> String {
        format!("{} {}", self.glyph, self.name)
    }
}

/// Immutable list of bodies to compute, in display order.
///
/// Build it once at startup and hand it to [`crate::chart::ChartBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCatalog {
    entries: Vec<CatalogEntry>,
}

impl BodyCatalog {
    /// Sun, Moon, the eight planets from Mercury to Pluto, Black Lilith,
    /// both lunar nodes and Chiron.
    pub fn standard() -> Self {
        Self::from_ids(&[
            BodyId::Sun,
            BodyId::Moon,
            BodyId::Mercury,
            BodyId::Venus,
            BodyId::Mars,
            BodyId::Jupiter,
            BodyId::Saturn,
            BodyId::Uranus,
            BodyId::Neptune,
            BodyId::Pluto,
            BodyId::BlackLilith,
            BodyId::NorthNode,
            BodyId::SouthNode,
            BodyId::Chiron,
        ])
    }

    /// Catalog of the given bodies; duplicates keep their first position.
    pub fn from_ids(ids: &[BodyId]) -> Self {
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(ids.len());
        for &id in ids {
            if !entries.iter().any(|e| e.id == id) {
                entries.push(CatalogEntry::new(id));
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: BodyId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
