pub mod geometry;
pub mod notation;
