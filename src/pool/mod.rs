//! Pool shell: shape and finish tables, validated dimensions, the geometry
//! builder and its cache.

mod builder;
mod cache;
mod dimensions;
mod finish;
mod shape;
mod spec;

pub use builder::{BuildPoolSolid, Footprint, GeneratedSolid, SolidPart, GALLONS_PER_CUBIC_FOOT};
pub use cache::SolidCache;
pub use dimensions::Dimensions;
pub use finish::{FinishKind, FinishProfile};
pub use shape::{Construction, ShapeKind, ShapeProfile, WaterSizing};
pub use spec::PoolSpec;
