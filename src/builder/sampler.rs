use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `Sampler` directive variants.
pub struct SamplerBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> SamplerBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        SamplerBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("Sampler", kind, Signature::new(false, table)?, params)
    }

    /// The (0,2)-sequence sampler; pbrt spells the kind `02sequence`.
    pub fn o2sequence(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("02sequence", &[("pixelsamples", "integer")], params)
    }

    pub fn halton(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("halton", &[("pixelsamples", "integer")], params)
    }

    pub fn maxmindist(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("maxmindist", &[("pixelsamples", "integer")], params)
    }

    pub fn random(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("random", &[("pixelsamples", "integer")], params)
    }

    pub fn sobol(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("sobol", &[("pixelsamples", "integer")], params)
    }

    pub fn stratified(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "stratified",
            &[
                ("jitter", "bool"),
                ("xsamples", "integer"),
                ("ysamples", "integer"),
            ],
            params,
        )
    }
}
