use std::fmt;
use std::fmt::{Display, Formatter};

use crate::core::error::{Error, Result};
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;
use crate::core::spectrum::Spectrum;
use crate::core::texture;
use crate::core::value::Value;
use crate::core::values::Values;

/// The resolved (wire type, name) label of one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    ty: &'static str,
    name: String,
}

impl Parameter {
    pub fn new(ty: &'static str, name: impl Into<String>) -> Self {
        Parameter {
            ty,
            name: name.into(),
        }
    }

    pub fn type_tag(&self) -> &str {
        self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{} {}\"", self.ty, self.name)
    }
}

/// Ordered (label, values) pairs of one variadic statement; entry order is
/// the order the parameters were supplied in, which is also the wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterList {
    entries: Vec<(Parameter, Values)>,
}

impl ParameterList {
    /// Runs the whole encoding pipeline for one directive invocation:
    /// override extension, unknown-name validation, then per-entry type
    /// resolution (texture pass, spectrum pass) and value flattening.
    pub fn from(params: ParamSet, signature: Signature) -> Result<ParameterList> {
        let signature = signature.extend_with_overrides(&params);
        signature.check(&params)?;

        let mut entries = Vec::with_capacity(params.len());

        for (name, value) in params.into_entries() {
            let declared = match signature.type_of(&name) {
                Some(ty) => ty,
                // check() ran above, so this arm never fires; kept so the
                // lookup stays total.
                None => return Err(Error::UnknownParameter(vec![name])),
            };

            let (ty, value) = texture::unpack(declared, value)?;

            let (ty, values) = if ty == "spectrum" || value.is_spectrum() {
                let (kind, args) = Spectrum::unpack(value)?;
                (kind.wire_tag(), Values::from(Value::Array(args)))
            } else {
                (ty, Values::from(value))
            };

            entries.push((Parameter::new(ty, name), values));
        }

        Ok(ParameterList { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Parameter, Values)] {
        &self.entries
    }
}

impl Display for ParameterList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (parameter, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} [{}]", parameter, values)?;
        }
        Ok(())
    }
}
