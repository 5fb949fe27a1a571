use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `Accelerator` directive variants.
pub struct AcceleratorBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> AcceleratorBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        AcceleratorBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("Accelerator", kind, Signature::new(false, table)?, params)
    }

    pub fn bvh(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "bvh",
            &[("maxnodeprims", "integer"), ("splitmethod", "string")],
            params,
        )
    }

    pub fn kdtree(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "kdtree",
            &[
                ("intersectcost", "integer"),
                ("traversalcost", "integer"),
                ("emptybonus", "float"),
                ("maxprims", "integer"),
                ("maxdepth", "integer"),
            ],
            params,
        )
    }
}
