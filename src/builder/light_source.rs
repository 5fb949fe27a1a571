use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `LightSource` directive variants.
pub struct LightSourceBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> LightSourceBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        LightSourceBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("LightSource", kind, Signature::new(false, table)?, params)
    }

    pub fn distant(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "distant",
            &[
                ("scale", "spectrum"),
                ("L", "spectrum"),
                ("from", "point3"),
                ("to", "point3"),
            ],
            params,
        )
    }

    pub fn goniometric(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "goniometric",
            &[
                ("scale", "spectrum"),
                ("I", "spectrum"),
                ("mapname", "string"),
            ],
            params,
        )
    }

    pub fn infinite(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "infinite",
            &[
                ("scale", "spectrum"),
                ("L", "spectrum"),
                ("samples", "integer"),
                ("mapname", "string"),
            ],
            params,
        )
    }

    pub fn point(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "point",
            &[
                ("scale", "spectrum"),
                ("I", "spectrum"),
                ("from", "point3"),
            ],
            params,
        )
    }

    pub fn projection(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "projection",
            &[
                ("scale", "spectrum"),
                ("I", "spectrum"),
                ("fov", "float"),
                ("mapname", "string"),
            ],
            params,
        )
    }

    pub fn spot(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "spot",
            &[
                ("scale", "spectrum"),
                ("I", "spectrum"),
                ("from", "point3"),
                ("to", "point3"),
                ("coneangle", "float"),
                ("conedeltaangle", "float"),
            ],
            params,
        )
    }
}
