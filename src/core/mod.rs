pub mod error;
pub mod parameter;
pub mod paramset;
pub mod signature;
pub mod spectrum;
pub mod statement;
pub mod texture;
pub mod value;
pub mod values;

/// Numeric scalars written to the scene file.
pub type Float = f64;
