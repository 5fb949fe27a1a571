use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `Integrator` directive variants.
pub struct IntegratorBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> IntegratorBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        IntegratorBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("Integrator", kind, Signature::new(false, table)?, params)
    }

    pub fn bdpt(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "bdpt",
            &[
                ("maxdepth", "integer"),
                ("pixelbounds", "integer"),
                ("lightsamplestrategy", "string"),
                ("visualizestrategies", "bool"),
                ("visualizeweights", "bool"),
            ],
            params,
        )
    }

    pub fn directlighting(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "directlighting",
            &[
                ("strategy", "string"),
                ("maxdepth", "integer"),
                ("pixelbounds", "integer"),
            ],
            params,
        )
    }

    pub fn mlt(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "mlt",
            &[
                ("maxdepth", "integer"),
                ("bootstrapsamples", "integer"),
                ("chains", "integer"),
                ("mutationsperpixel", "integer"),
                ("largestepprobability", "float"),
                ("sigma", "float"),
            ],
            params,
        )
    }

    pub fn path(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "path",
            &[
                ("maxdepth", "integer"),
                ("pixelbounds", "integer"),
                ("rrthreshold", "float"),
                ("lightsamplestrategy", "string"),
            ],
            params,
        )
    }

    pub fn sppm(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "sppm",
            &[
                ("maxdepth", "integer"),
                ("iterations", "integer"),
                ("photonsperiteration", "integer"),
                ("imagewritefrequency", "integer"),
                ("radius", "float"),
            ],
            params,
        )
    }

    pub fn whitted(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "whitted",
            &[("maxdepth", "integer"), ("pixelbounds", "integer")],
            params,
        )
    }
}
