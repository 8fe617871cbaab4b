mod extrude;

pub use extrude::{Bevel, Extrude};
