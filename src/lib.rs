pub mod builder;
pub mod core;

pub use crate::builder::{Builder, TextureType, TransformTime};
pub use crate::core::error::{Error, Result};
pub use crate::core::paramset::ParamSet;
pub use crate::core::spectrum::{blackbody, rgb, sampled, xyz};
pub use crate::core::texture::texture;
pub use crate::core::value::Value;
pub use crate::core::Float;
