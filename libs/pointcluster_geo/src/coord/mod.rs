pub mod bbox;
pub mod point;
