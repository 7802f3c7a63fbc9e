use serde::{Deserialize, Serialize};
use std::fmt;

/// The five classical (Ptolemaic) aspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            AspectKind::Conjunction => '☌',
            AspectKind::Sextile => '⚹',
            AspectKind::Square => '□',
            AspectKind::Trine => '△',
            AspectKind::Opposition => '☍',
        }
    }

    /// Name and glyph, e.g. "Square □"
    pub fn label(self) -> String {
        format!("{} {}", self.name(), self.glyph())
    }

    /// Aspects whose exact angle lies within `orb` of `separation`.
    pub fn matching(separation: f64, orb: f64) -> impl Iterator<Item = AspectKind> {
        Self::ALL
            .into_iter()
            .filter(move |kind| (separation - kind.angle()).abs() <= orb)
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which chart an aspect endpoint was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartRole {
    /// Both endpoints come from the same chart
    Single,
    Transit,
    Natal,
}

impl ChartRole {
    fn prefix(self) -> Option<&'static str> {
        match self {
            ChartRole::Single => None,
            ChartRole::Transit => Some("Transit"),
            ChartRole::Natal => Some("Natal"),
        }
    }
}

/// Reference to a body taking part in an aspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectEndpoint {
    pub body: String,
    /// Display label, e.g. "☉ Sun"
    pub label: String,
    pub chart: ChartRole,
}

impl fmt::Display for AspectEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chart.prefix() {
            Some(prefix) => write!(f, "{} {}", prefix, self.label),
            None => f.write_str(&self.label),
        }
    }
}

/// A detected aspect between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub from: AspectEndpoint,
    pub to: AspectEndpoint,
    pub kind: AspectKind,
    /// Shortest-arc separation in degrees, [0, 180]
    pub separation: f64,
    /// Deviation from the exact aspect angle
    pub orb: f64,
}

impl AspectRecord {
    /// Human-readable line, e.g. "Transit ☉ Sun Square □ Natal ☽ Moon"
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AspectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.kind.label(), self.to)
    }
}
