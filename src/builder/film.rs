use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `Film` directive; `image` is the only kind pbrt has.
pub struct FilmBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> FilmBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        FilmBuilder { builder }
    }

    pub fn image(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        let signature = Signature::new(
            false,
            &[
                ("xresolution", "integer"),
                ("yresolution", "integer"),
                ("cropwindow", "float"),
                ("scale", "float"),
                ("maxsampleluminance", "float"),
                ("diagonal", "float"),
                ("filename", "string"),
            ],
        )?;

        self.builder.variadic("Film", "image", signature, params)
    }
}
