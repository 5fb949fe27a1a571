use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `Camera` directive variants.
pub struct CameraBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> CameraBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        CameraBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("Camera", kind, Signature::new(false, table)?, params)
    }

    pub fn environment(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "environment",
            &[
                ("shutteropen", "float"),
                ("shutterclose", "float"),
                ("frameaspectratio", "float"),
                ("screenwindow", "float"),
            ],
            params,
        )
    }

    pub fn orthographic(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "orthographic",
            &[
                ("shutteropen", "float"),
                ("shutterclose", "float"),
                ("frameaspectratio", "float"),
                ("screenwindow", "float"),
                ("lensradius", "float"),
                ("focaldistance", "float"),
            ],
            params,
        )
    }

    pub fn perspective(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "perspective",
            &[
                ("shutteropen", "float"),
                ("shutterclose", "float"),
                ("frameaspectratio", "float"),
                ("screenwindow", "float"),
                ("lensradius", "float"),
                ("focaldistance", "float"),
                ("fov", "float"),
                ("halffov", "float"),
            ],
            params,
        )
    }

    pub fn realistic(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "realistic",
            &[
                ("shutteropen", "float"),
                ("shutterclose", "float"),
                ("lensfile", "string"),
                ("aperturediameter", "float"),
                ("focusdistance", "float"),
                ("simpleweighting", "bool"),
            ],
            params,
        )
    }
}
