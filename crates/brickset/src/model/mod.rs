//! Domain Models - The vocabulary of Brickset

pub mod lego_set;
pub mod packaging_type;
