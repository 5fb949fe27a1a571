use std::io::Write;

use crate::builder::Builder;
use crate::core::error::{Error, Result};
use crate::core::parameter::ParameterList;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;
use crate::core::statement::Statement;

/// Writes the `Material` directive variants.
pub struct MaterialBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
}

impl<'a, W: Write> MaterialBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>) -> Self {
        MaterialBuilder { builder }
    }
}

/// Decorator around the material encoder for `MakeNamedMaterial`. Each kind
/// method builds the same statement a `Material` call would and rewrites the
/// leading directive token to `MakeNamedMaterial "<name>" "string type"`
/// before it reaches the sink, which yields exactly the named-material
/// grammar.
pub struct NamedMaterialBuilder<'a, W: Write> {
    builder: &'a mut Builder<W>,
    name: String,
}

impl<'a, W: Write> NamedMaterialBuilder<'a, W> {
    pub(crate) fn new(builder: &'a mut Builder<W>, name: &str) -> Self {
        NamedMaterialBuilder {
            builder,
            name: name.to_owned(),
        }
    }

    fn forward(
        self,
        kind: &str,
        table: &[(&str, &str)],
        params: ParamSet,
    ) -> Result<&'a mut Builder<W>> {
        let statement = Statement::variadic(
            "Material",
            kind,
            ParameterList::from(params, Signature::new(false, table)?)?,
        );

        let prefix = format!("MakeNamedMaterial \"{}\" \"string type\"", self.name);
        let line = statement.to_string().replacen("Material", &prefix, 1);

        self.builder.append(&line)
    }
}

// One entry per material kind; expands to the kind methods on both the plain
// and the named-material builders, plus the by-string dispatch used when the
// kind arrives as data.
macro_rules! material_kinds {
    ($( $method:ident => $kind:literal [ $( ($pname:literal, $ptype:literal) ),* $(,)? ] )*) => {
        impl<'a, W: Write> MaterialBuilder<'a, W> {
            $(
            pub fn $method(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
                self.builder.variadic(
                    "Material",
                    $kind,
                    Signature::new(false, &[$(($pname, $ptype)),*])?,
                    params,
                )
            }
            )*
        }

        impl<'a, W: Write> NamedMaterialBuilder<'a, W> {
            $(
            pub fn $method(self, params: ParamSet) -> Result<&'a mut Builder<W>> {
                self.forward($kind, &[$(($pname, $ptype)),*], params)
            }
            )*

            /// Dispatches on a material kind string, for callers that carry
            /// the kind as data rather than as a method call.
            pub fn kind(self, kind: &str, params: ParamSet) -> Result<&'a mut Builder<W>> {
                match kind {
                    $( $kind => self.$method(params), )*
                    other => Err(Error::UnknownMaterial(other.to_owned())),
                }
            }
        }
    }
}

material_kinds! {
    disney => "disney" [
        ("bumpmap", "float_texture"),
        ("color", "spectrum_texture"),
        ("anisotropic", "float_texture"),
        ("clearcoat", "float_texture"),
        ("clearcoatgloss", "float_texture"),
        ("eta", "float_texture"),
        ("metallic", "float_texture"),
        ("roughness", "float_texture"),
        ("scatterdistance", "spectrum_texture"),
        ("sheen", "float_texture"),
        ("sheentint", "float_texture"),
        ("spectrans", "float_texture"),
        ("speculartint", "float_texture"),
        ("thin", "bool"),
        ("difftrans", "spectrum_texture"),
        ("flatness", "spectrum_texture"),
    ]

    fourier => "fourier" [
        ("bumpmap", "float_texture"),
        ("bsdffile", "string"),
    ]

    glass => "glass" [
        ("bumpmap", "float_texture"),
        ("Kr", "spectrum_texture"),
        ("Kt", "spectrum_texture"),
        ("eta", "float_texture"),
        ("uroughness", "float_texture"),
        ("vroughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    hair => "hair" [
        ("bumpmap", "float_texture"),
        ("sigma_a", "spectrum_texture"),
        ("color", "spectrum_texture"),
        ("eumelanin", "float_texture"),
        ("pheomelanin", "float_texture"),
        ("eta", "float_texture"),
        ("beta_m", "float_texture"),
        ("beta_n", "float_texture"),
        ("alpha", "float_texture"),
    ]

    kdsubsurface => "kdsubsurface" [
        ("bumpmap", "float_texture"),
        ("Kd", "spectrum_texture"),
        ("mfp", "float_texture"),
        ("eta", "float_texture"),
        ("Kr", "spectrum_texture"),
        ("Kt", "spectrum_texture"),
        ("uroughness", "float_texture"),
        ("vroughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    matte => "matte" [
        ("bumpmap", "float_texture"),
        ("Kd", "spectrum_texture"),
        ("sigma", "float_texture"),
    ]

    metal => "metal" [
        ("bumpmap", "float_texture"),
        ("eta", "spectrum_texture"),
        ("k", "spectrum_texture"),
        ("roughness", "float_texture"),
        ("uroughness", "float_texture"),
        ("vroughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    mirror => "mirror" [
        ("bumpmap", "float_texture"),
        ("Kr", "spectrum_texture"),
    ]

    mix => "mix" [
        ("bumpmap", "float_texture"),
        ("amount", "spectrum_texture"),
        ("namedmaterial1", "string"),
        ("namedmaterial2", "string"),
    ]

    none => "none" [
        ("bumpmap", "float_texture"),
    ]

    plastic => "plastic" [
        ("bumpmap", "float_texture"),
        ("Kd", "spectrum_texture"),
        ("Ks", "spectrum_texture"),
        ("roughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    substrate => "substrate" [
        ("bumpmap", "float_texture"),
        ("Kd", "spectrum_texture"),
        ("Ks", "spectrum_texture"),
        ("uroughness", "float_texture"),
        ("vroughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    subsurface => "subsurface" [
        ("bumpmap", "float_texture"),
        ("name", "string"),
        ("sigma_a", "spectrum_texture"),
        ("sigma_prime_s", "spectrum_texture"),
        ("scale", "float"),
        ("eta", "float_texture"),
        ("Kr", "spectrum_texture"),
        ("Kt", "spectrum_texture"),
        ("uroughness", "float_texture"),
        ("vroughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    translucent => "translucent" [
        ("bumpmap", "float_texture"),
        ("Kd", "spectrum_texture"),
        ("Ks", "spectrum_texture"),
        ("reflect", "spectrum_texture"),
        ("transmit", "spectrum_texture"),
        ("roughness", "float_texture"),
        ("remaproughness", "bool"),
    ]

    uber => "uber" [
        ("bumpmap", "float_texture"),
        ("Kd", "spectrum_texture"),
        ("Ks", "spectrum_texture"),
        ("Kr", "spectrum_texture"),
        ("Kt", "spectrum_texture"),
        ("roughness", "float_texture"),
        ("uroughness", "float_texture"),
        ("vroughness", "float_texture"),
        ("eta", "float_texture"),
        ("opacity", "spectrum_texture"),
        ("remaproughness", "bool"),
    ]
}
