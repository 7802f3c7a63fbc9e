pub mod calculator;
pub mod types;

pub use calculator::{
    angular_separation, match_aspects, orb_for, AspectMatcher, INTRA_SET_ORB, TRANSIT_NATAL_ORB,
};
pub use types::{AspectEndpoint, AspectKind, AspectRecord, ChartRole};
