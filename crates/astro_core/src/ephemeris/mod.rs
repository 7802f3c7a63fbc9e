
pub mod adapter;
pub mod provider;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use provider::{EphemerisError, EphemerisProvider};
pub use types::{GeoLocation, HouseCusps, HouseSystem, RawPosition};
