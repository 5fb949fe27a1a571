use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes `MakeNamedMedium` directives. The medium name and the `"string
/// type"` label are folded into the directive token, so the kind string lands
/// where pbrt expects the medium type.
pub struct NamedMediumBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
    directive: String,
}

impl<'a, W: Write> NamedMediumBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>, name: &str) -> Self {
        NamedMediumBuilder {
            builder,
            directive: format!("MakeNamedMedium \"{}\" \"string type\"", name),
        }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        let NamedMediumBuilder { builder, directive } = self;
        builder.variadic(&directive, kind, Signature::new(false, table)?, params)
    }

    pub fn homogeneous(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "homogeneous",
            &[
                ("sigma_a", "spectrum"),
                ("sigma_s", "spectrum"),
                ("preset", "string"),
                ("g", "float"),
                ("scale", "float"),
            ],
            params,
        )
    }

    pub fn heterogeneous(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "heterogeneous",
            &[
                ("sigma_a", "spectrum"),
                ("sigma_s", "spectrum"),
                ("preset", "string"),
                ("g", "float"),
                ("scale", "float"),
                ("p0", "point3"),
                ("p1", "point3"),
                ("nx", "integer"),
                ("ny", "integer"),
                ("nz", "integer"),
                ("density", "float"),
            ],
            params,
        )
    }
}
