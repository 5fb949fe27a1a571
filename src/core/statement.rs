use std::fmt;
use std::fmt::{Display, Formatter};

use crate::core::error::{Error, Result};
use crate::core::parameter::ParameterList;
use crate::core::values::Values;

/// One finished line of scene description. Terminal artifact of a directive
/// invocation; rendered once through `Display` and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `Directive v1 v2 ... vN` with exactly N positional values.
    FixedSize { directive: String, values: Values },
    /// `Directive "kind" "type name" [values] ...`.
    Variadic {
        directive: String,
        kind: String,
        params: ParameterList,
    },
}

impl Statement {
    /// Values count against the declared arity after flattening, so a single
    /// sub-array holding all components is fine.
    pub fn fixed_size(
        directive: &str,
        expected: usize,
        values: impl Into<Values>,
    ) -> Result<Statement> {
        let values = values.into();

        if values.len() != expected {
            return Err(Error::WrongArgumentCount {
                directive: directive.to_owned(),
                given: values.len(),
                expected,
            });
        }

        Ok(Statement::FixedSize {
            directive: directive.to_owned(),
            values,
        })
    }

    pub fn variadic(directive: &str, kind: &str, params: ParameterList) -> Statement {
        Statement::Variadic {
            directive: directive.to_owned(),
            kind: kind.to_owned(),
            params,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::FixedSize { directive, values } => {
                if values.is_empty() {
                    write!(f, "{}", directive)
                } else {
                    write!(f, "{} {}", directive, values)
                }
            }
            Statement::Variadic {
                directive,
                kind,
                params,
            } => {
                if params.is_empty() {
                    write!(f, "{} \"{}\"", directive, kind)
                } else {
                    write!(f, "{} \"{}\" {}", directive, kind, params)
                }
            }
        }
    }
}
