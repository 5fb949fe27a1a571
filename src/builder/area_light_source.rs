use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `AreaLightSource` directive; `diffuse` is the only kind.
pub struct AreaLightSourceBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> AreaLightSourceBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        AreaLightSourceBuilder { builder }
    }

    pub fn diffuse(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        let signature = Signature::new(
            false,
            &[
                ("L", "spectrum"),
                ("twosided", "bool"),
                ("samples", "integer"),
            ],
        )?;

        self.builder
            .variadic("AreaLightSource", "diffuse", signature, params)
    }
}
