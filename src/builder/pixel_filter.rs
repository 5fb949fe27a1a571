use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `PixelFilter` directive variants.
pub struct PixelFilterBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> PixelFilterBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        PixelFilterBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("PixelFilter", kind, Signature::new(false, table)?, params)
    }

    pub fn box_filter(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("box", &[("xwidth", "float"), ("ywidth", "float")], params)
    }

    pub fn gaussian(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "gaussian",
            &[
                ("xwidth", "float"),
                ("ywidth", "float"),
                ("alpha", "float"),
            ],
            params,
        )
    }

    pub fn mitchell(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "mitchell",
            &[
                ("xwidth", "float"),
                ("ywidth", "float"),
                ("B", "float"),
                ("C", "float"),
            ],
            params,
        )
    }

    pub fn sinc(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "sinc",
            &[("xwidth", "float"), ("ywidth", "float"), ("tau", "float")],
            params,
        )
    }

    pub fn triangle(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "triangle",
            &[("xwidth", "float"), ("ywidth", "float")],
            params,
        )
    }
}
