use crate::aspects::types::{AspectEndpoint, AspectKind, AspectRecord, ChartRole};
use crate::chart::{ChartSnapshot, PositionRecord};
use crate::zodiac::normalize_degrees;

/// Orb for a transiting body against a natal body
pub const TRANSIT_NATAL_ORB: f64 = 1.0;
/// Orb for bodies of the same kind of chart (natal-natal, transit-transit)
pub const INTRA_SET_ORB: f64 = 8.0;

pub fn orb_for(cross_mode: bool) -> f64 {
    if cross_mode {
        TRANSIT_NATAL_ORB
    } else {
        INTRA_SET_ORB
    }
}

/// Shortest-arc distance between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect matcher over chart snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectMatcher;

impl AspectMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Aspects within one chart. Each unordered pair is reported once,
    /// in chart order.
    pub fn compute_intra_set(&self, snapshot: &ChartSnapshot, orb: f64) -> Vec<AspectRecord> {
        let positions = snapshot.positions();
        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let (a, b) = (&positions[i], &positions[j]);
                if a.body == b.body {
                    continue;
                }
                self.push_matches(&mut aspects, a, ChartRole::Single, b, ChartRole::Single, orb);
            }
        }
        aspects
    }

    /// Aspects from every body of `transit` to every body of `natal`.
    /// Pairs of bodies with the same name are skipped.
    pub fn compute_cross_set(
        &self,
        transit: &ChartSnapshot,
        natal: &ChartSnapshot,
        orb: f64,
    ) -> Vec<AspectRecord> {
        let mut aspects = Vec::new();
        for a in transit.iter() {
            for b in natal.iter() {
                if a.body == b.body {
                    continue;
                }
                self.push_matches(&mut aspects, a, ChartRole::Transit, b, ChartRole::Natal, orb);
            }
        }
        aspects
    }

    /// Match `set_a` against itself, or against `set_b` when given.
    ///
    /// `cross_mode` selects the orb: [`TRANSIT_NATAL_ORB`] when comparing a
    /// transit chart to a natal chart, [`INTRA_SET_ORB`] otherwise.
    pub fn match_aspects(
        &self,
        set_a: &ChartSnapshot,
        set_b: Option<&ChartSnapshot>,
        cross_mode: bool,
    ) -> Vec<AspectRecord> {
        let orb = orb_for(cross_mode);
        match set_b {
            Some(set_b) => self.compute_cross_set(set_a, set_b, orb),
            None => self.compute_intra_set(set_a, orb),
        }
    }

    fn push_matches(
        &self,
        out: &mut Vec<AspectRecord>,
        a: &PositionRecord,
        role_a: ChartRole,
        b: &PositionRecord,
        role_b: ChartRole,
        orb: f64,
    ) {
        let separation = angular_separation(a.longitude, b.longitude);
        for kind in AspectKind::matching(separation, orb) {
            out.push(AspectRecord {
                from: endpoint(a, role_a),
                to: endpoint(b, role_b),
                kind,
                separation,
                orb: (separation - kind.angle()).abs(),
            });
        }
    }
}

/// See [`AspectMatcher::match_aspects`].
pub fn match_aspects(
    set_a: &ChartSnapshot,
    set_b: Option<&ChartSnapshot>,
    cross_mode: bool,
) -> Vec<AspectRecord> {
    AspectMatcher::new().match_aspects(set_a, set_b, cross_mode)
}

fn endpoint(record: &PositionRecord, chart: ChartRole) -> AspectEndpoint {
    AspectEndpoint {
        body: record.body.clone(),
        label: record.label(),
        chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_symmetric_and_bounded() {
        let samples = [0.0, 0.5, 10.0, 89.9, 179.0, 180.0, 181.0, 270.0, 359.9];
        for &a in &samples {
            for &b in &samples {
                let s = angular_separation(a, b);
                assert!((0.0..=180.0).contains(&s), "{a} vs {b} gave {s}");
                assert_eq!(s, angular_separation(b, a));
            }
        }
    }

    #[test]
    fn test_separation_wraps() {
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert_eq!(angular_separation(10.0, 100.0), 90.0);
    }

    #[test]
    fn test_exact_square_with_zero_orb() {
        let kinds: Vec<AspectKind> = AspectKind::matching(90.0, 0.0).collect();
        assert_eq!(kinds, vec![AspectKind::Square]);
        assert_eq!(AspectKind::matching(90.0 + 1.0 + 1e-9, 1.0).count(), 0);
    }

    #[test]
    fn test_orb_selection() {
        assert_eq!(orb_for(true), 1.0);
        assert_eq!(orb_for(false), 8.0);
    }
}
