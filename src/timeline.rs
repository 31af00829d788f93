pub mod ease;
pub mod ops;
pub mod segment;
