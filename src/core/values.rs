use std::fmt;
use std::fmt::{Display, Formatter};

use crate::core::value::Value;
use crate::core::Float;

/// One scalar token of a statement's value list.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Num(Float),
    Str(String),
    Bool(bool),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Num(n) => write!(f, "{}", n),
            Scalar::Str(s) => write!(f, "\"{}\"", s),
            // pbrt reads booleans as the quoted literals
            Scalar::Bool(b) => write!(f, "\"{}\"", b),
        }
    }
}

/// The ordered, flattened value sequence of one parameter or one fixed-size
/// statement. Nested sequences are flattened depth-first, left to right;
/// flattening an already-flat sequence leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(Vec<Scalar>);

impl Values {
    pub fn new() -> Self {
        Values(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scalars(&self) -> &[Scalar] {
        &self.0
    }

    fn push_flattened(&mut self, value: Value) {
        match value {
            Value::Num(n) => self.0.push(Scalar::Num(n)),
            Value::Str(s) => self.0.push(Scalar::Str(s)),
            Value::Bool(b) => self.0.push(Scalar::Bool(b)),
            Value::Array(inner) => {
                for v in inner {
                    self.push_flattened(v);
                }
            }
            // Wrappers only reach this point nested inside a sequence; their
            // contents flatten like any other values.
            Value::Spectrum(s) => self.push_flattened(Value::Array(s.into_args())),
            Value::Texture(t) => self.push_flattened(Value::Array(t.into_args())),
        }
    }
}

impl From<Value> for Values {
    fn from(value: Value) -> Self {
        let mut values = Values::new();
        values.push_flattened(value);
        values
    }
}

impl Display for Values {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, scalar) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", scalar)?;
        }
        Ok(())
    }
}
