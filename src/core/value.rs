use std::fmt;
use std::fmt::{Display, Formatter};

use crate::core::spectrum::Spectrum;
use crate::core::texture::Texture;
use crate::core::Float;

/// A raw parameter value as supplied at a call site, before type resolution.
///
/// Numbers, strings and booleans arrive through `From` impls; sequences may be
/// nested arbitrarily and are flattened when the statement is rendered. The
/// `Spectrum` and `Texture` variants carry the caller's disambiguation
/// wrappers (see [`crate::rgb`], [`crate::texture`] and friends).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(Float),
    Str(String),
    Bool(bool),
    Array(Vec<Value>),
    Spectrum(Spectrum),
    Texture(Texture),
}

impl Value {
    /// A value counts as a string when its first flattened scalar is one.
    pub(crate) fn leads_with_string(&self) -> bool {
        match self {
            Value::Str(_) => true,
            Value::Array(inner) => inner.first().map_or(false, Value::leads_with_string),
            _ => false,
        }
    }

    pub(crate) fn is_spectrum(&self) -> bool {
        matches!(self, Value::Spectrum(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Array(inner) => {
                write!(f, "[")?;
                for (i, v) in inner.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Spectrum(s) => write!(f, "{}", s),
            Value::Texture(t) => write!(f, "{}", t),
        }
    }
}

impl From<Float> for Value {
    fn from(v: Float) -> Self {
        Value::Num(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Num(v as Float)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Num(v as Float)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Num(v as Float)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Num(v as Float)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Spectrum> for Value {
    fn from(v: Spectrum) -> Self {
        Value::Spectrum(v)
    }
}

impl From<Texture> for Value {
    fn from(v: Texture) -> Self {
        Value::Texture(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::Array(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Array(IntoIterator::into_iter(values).map(Into::into).collect())
    }
}
