pub mod curve;
pub mod outline;
pub mod surface;

pub use curve::{CubicBezier, Curve, CurveDomain, Line};
pub use outline::{FlattenParams, Outline, OutlineSegment};
pub use surface::{Plane, Surface};
