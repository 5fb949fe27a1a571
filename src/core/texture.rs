use std::fmt;
use std::fmt::{Display, Formatter};

use crate::core::error::{Error, Result};
use crate::core::signature::ParamType;
use crate::core::value::Value;

/// Tags a value as a reference to a previously declared texture, so that a
/// name is not mistaken for a string parameter or a spectrum filename.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    args: Vec<Value>,
}

impl Texture {
    pub(crate) fn into_args(self) -> Vec<Value> {
        self.args
    }
}

impl Display for Texture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "texture(")?;
        for (i, v) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/// Wraps a texture name as an explicit texture reference.
pub fn texture(name: impl Into<Value>) -> Value {
    Value::Texture(Texture {
        args: vec![name.into()],
    })
}

/// Pass 1 of type resolution: decide between the texture reading and the
/// float/spectrum reading of a value declared with one of the texture tags.
///
/// Bare numbers take the cheaper non-texture reading. A bare string is a
/// texture name for `float_texture`, but for `texture` and `spectrum_texture`
/// it could equally be a spectrum filename, so the caller must wrap it.
/// Non-texture declared types pass through untouched.
pub(crate) fn unpack(declared: ParamType, value: Value) -> Result<(&'static str, Value)> {
    if !declared.is_texture() {
        return Ok((declared.tag(), value));
    }

    let value = match value {
        Value::Texture(t) => return Ok(("texture", Value::Array(t.into_args()))),
        v => v,
    };

    let is_string = value.leads_with_string();

    match declared {
        ParamType::FloatTexture if is_string => Ok(("texture", value)),
        ParamType::FloatTexture => Ok(("float", value)),
        _ if is_string => Err(Error::AmbiguousType(value.to_string())),
        ParamType::SpectrumTexture => Ok(("spectrum", value)),
        _ => Ok(("float", value)),
    }
}
