use std::io::Write;

use crate::builder::Builder;
use crate::core::error::Result;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;

/// Writes the `Shape` directive variants. Every shape signature accepts
/// material overrides, so shape-level calls may carry extra material
/// parameters destined for the enclosing material.
pub struct ShapeBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> ShapeBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        ShapeBuilder { builder }
    }

    fn write(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        self.builder
            .variadic("Shape", kind, Signature::new(true, table)?, params)
    }

    pub fn cone(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "cone",
            &[
                ("radius", "float"),
                ("height", "float"),
                ("phimax", "float"),
            ],
            params,
        )
    }

    pub fn curve(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "curve",
            &[
                ("P", "point3"),
                ("basis", "string"),
                ("degree", "integer"),
                ("type", "string"),
                ("N", "normal3"),
                ("width", "float"),
                ("width0", "float"),
                ("width1", "float"),
                ("splitdepth", "integer"),
            ],
            params,
        )
    }

    pub fn cylinder(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "cylinder",
            &[
                ("radius", "float"),
                ("zmin", "float"),
                ("zmax", "float"),
                ("phimax", "float"),
            ],
            params,
        )
    }

    pub fn disk(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "disk",
            &[
                ("height", "float"),
                ("radius", "float"),
                ("innerradius", "float"),
                ("phimax", "float"),
            ],
            params,
        )
    }

    pub fn hyperboloid(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "hyperboloid",
            &[("p1", "point3"), ("p2", "point3"), ("phimax", "float")],
            params,
        )
    }

    pub fn paraboloid(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "paraboloid",
            &[
                ("radius", "float"),
                ("zmin", "float"),
                ("zmax", "float"),
                ("phimax", "float"),
            ],
            params,
        )
    }

    pub fn sphere(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "sphere",
            &[
                ("radius", "float"),
                ("zmin", "float"),
                ("zmax", "float"),
                ("phimax", "float"),
            ],
            params,
        )
    }

    pub fn trianglemesh(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "trianglemesh",
            &[
                ("indices", "integer"),
                ("P", "point3"),
                ("N", "normal3"),
                ("S", "vector3"),
                ("uv", "float"),
                ("alpha", "float_texture"),
                ("shadowalpha", "float_texture"),
                ("st", "float"),
            ],
            params,
        )
    }

    pub fn heightfield(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "heightfield",
            &[("nu", "integer"), ("nv", "integer"), ("Pz", "float")],
            params,
        )
    }

    pub fn loopsubdiv(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "loopsubdiv",
            &[
                ("levels", "integer"),
                ("indices", "integer"),
                ("P", "point3"),
            ],
            params,
        )
    }

    pub fn nurbs(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "nurbs",
            &[
                ("nu", "integer"),
                ("nv", "integer"),
                ("uorder", "integer"),
                ("vorder", "integer"),
                ("uknots", "float"),
                ("vknots", "float"),
                ("u0", "float"),
                ("v0", "float"),
                ("u1", "float"),
                ("v1", "float"),
                ("P", "point3"),
                ("Pw", "float"),
            ],
            params,
        )
    }

    pub fn plymesh(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
        self.write(
            "plymesh",
            &[
                ("filename", "string"),
                ("alpha", "float_texture"),
                ("shadowalpha", "float_texture"),
            ],
            params,
        )
    }
}
