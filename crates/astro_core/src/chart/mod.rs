pub mod builder;
pub mod catalog;
pub mod houses;
pub mod types;

pub use builder::{ChartBuilder, ChartError};
pub use catalog::{BodyCatalog, BodyId, BodySource, CatalogEntry};
pub use houses::whole_sign_house;
pub use types::{ChartBuild, ChartSnapshot, PositionRecord, SkippedBody, ASCENDANT, DESCENDANT};
