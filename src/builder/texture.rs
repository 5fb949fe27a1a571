use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// The data type a `Texture` directive produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureType {
    Float,
    Color,
    Spectrum,
}

impl Display for TextureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let token = match self {
            TextureType::Float => "float",
            TextureType::Color => "color",
            TextureType::Spectrum => "spectrum",
        };
        write!(f, "{}", token)
    }
}

/// Writes the `Texture` directive variants. The texture name and data type
/// are folded into the directive token, giving the
/// `Texture "name" "type" "kind" ...` grammar.
pub struct TextureBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
    directive: String,
}

impl<'a, W: Write> TextureBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>, name: &str, ty: TextureType) -> Self {
        TextureBuilder {
            builder,
            directive: format!("Texture \"{}\" \"{}\"", name, ty),
        }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        let TextureBuilder { builder, directive } = self;
        builder.variadic(&directive, kind, Signature::new(false, table)?, params)
    }

    pub fn bilerp(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "bilerp",
            &[
                ("mapping", "string"),
                ("uscale", "float"),
                ("vscale", "float"),
                ("udelta", "float"),
                ("vdelta", "float"),
                ("v1", "vector3"),
                ("v2", "vector3"),
                ("v00", "texture"),
                ("v01", "texture"),
                ("v10", "texture"),
                ("v11", "texture"),
            ],
            params,
        )
    }

    pub fn checkerboard(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "checkerboard",
            &[
                ("mapping", "string"),
                ("uscale", "float"),
                ("vscale", "float"),
                ("udelta", "float"),
                ("vdelta", "float"),
                ("v1", "vector3"),
                ("v2", "vector3"),
                ("dimension", "integer"),
                ("tex1", "texture"),
                ("tex2", "texture"),
                ("aamode", "string"),
            ],
            params,
        )
    }

    pub fn constant(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("constant", &[("value", "texture")], params)
    }

    pub fn dots(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "dots",
            &[
                ("mapping", "string"),
                ("uscale", "float"),
                ("vscale", "float"),
                ("udelta", "float"),
                ("vdelta", "float"),
                ("v1", "vector3"),
                ("v2", "vector3"),
                ("inside", "texture"),
                ("outside", "texture"),
            ],
            params,
        )
    }

    pub fn fbm(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "fbm",
            &[("octaves", "integer"), ("roughness", "float")],
            params,
        )
    }

    pub fn imagemap(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "imagemap",
            &[
                ("mapping", "string"),
                ("uscale", "float"),
                ("vscale", "float"),
                ("udelta", "float"),
                ("vdelta", "float"),
                ("v1", "vector3"),
                ("v2", "vector3"),
                ("filename", "string"),
                ("wrap", "string"),
                ("maxanisotropy", "float"),
                ("trilinear", "bool"),
                ("scale", "float"),
                ("gamma", "bool"),
            ],
            params,
        )
    }

    pub fn marble(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "marble",
            &[
                ("octaves", "integer"),
                ("roughness", "float"),
                ("scale", "float"),
                ("variation", "float"),
            ],
            params,
        )
    }

    pub fn mix(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "mix",
            &[
                ("tex1", "texture"),
                ("tex2", "texture"),
                ("amount", "float_texture"),
            ],
            params,
        )
    }

    pub fn scale(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "scale",
            &[("tex1", "texture"), ("tex2", "texture")],
            params,
        )
    }

    pub fn uv(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "uv",
            &[
                ("mapping", "string"),
                ("uscale", "float"),
                ("vscale", "float"),
                ("udelta", "float"),
                ("vdelta", "float"),
                ("v1", "vector3"),
                ("v2", "vector3"),
            ],
            params,
        )
    }

    pub fn windy(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write("windy", &[("mapping", "string")], params)
    }

    pub fn wrinkled(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "wrinkled",
            &[("octaves", "integer"), ("roughness", "float")],
            params,
        )
    }
}
