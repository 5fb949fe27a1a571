use std::collections::HashMap;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::debug;

use crate::core::error::{Error, Result};
use crate::core::paramset::ParamSet;

/// The closed set of type tags a signature may declare. The three texture
/// tags and `spectrum` are resolved to concrete wire types per value; the
/// rest are written as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    Float,
    Point2,
    Point3,
    Vector2,
    Vector3,
    Normal3,
    Bool,
    String,
    Spectrum,
    Texture,
    FloatTexture,
    SpectrumTexture,
}

impl ParamType {
    pub fn from_tag(tag: &str) -> Option<ParamType> {
        let ty = match tag {
            "integer" => ParamType::Integer,
            "float" => ParamType::Float,
            "point2" => ParamType::Point2,
            "point3" => ParamType::Point3,
            "vector2" => ParamType::Vector2,
            "vector3" => ParamType::Vector3,
            "normal3" => ParamType::Normal3,
            "bool" => ParamType::Bool,
            "string" => ParamType::String,
            "spectrum" => ParamType::Spectrum,
            "texture" => ParamType::Texture,
            "float_texture" => ParamType::FloatTexture,
            "spectrum_texture" => ParamType::SpectrumTexture,
            _ => return None,
        };

        Some(ty)
    }

    pub fn tag(self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::Float => "float",
            ParamType::Point2 => "point2",
            ParamType::Point3 => "point3",
            ParamType::Vector2 => "vector2",
            ParamType::Vector3 => "vector3",
            ParamType::Normal3 => "normal3",
            ParamType::Bool => "bool",
            ParamType::String => "string",
            ParamType::Spectrum => "spectrum",
            ParamType::Texture => "texture",
            ParamType::FloatTexture => "float_texture",
            ParamType::SpectrumTexture => "spectrum_texture",
        }
    }

    pub fn is_texture(self) -> bool {
        matches!(
            self,
            ParamType::Texture | ParamType::FloatTexture | ParamType::SpectrumTexture
        )
    }
}

lazy_static! {
    /// The union of every parameter name used by any material variant, typed.
    /// Consulted when an override-friendly signature meets a name it does not
    /// declare itself.
    static ref MATERIAL_PARAMS: HashMap<&'static str, ParamType> = {
        let mut m = HashMap::new();

        m.insert("Kd", ParamType::SpectrumTexture);
        m.insert("Kr", ParamType::SpectrumTexture);
        m.insert("Ks", ParamType::SpectrumTexture);
        m.insert("Kt", ParamType::SpectrumTexture);
        m.insert("alpha", ParamType::FloatTexture);
        m.insert("amount", ParamType::SpectrumTexture);
        m.insert("anisotropic", ParamType::FloatTexture);
        m.insert("beta_m", ParamType::FloatTexture);
        m.insert("beta_n", ParamType::FloatTexture);
        m.insert("bsdffile", ParamType::String);
        m.insert("bumpmap", ParamType::FloatTexture);
        m.insert("clearcoat", ParamType::FloatTexture);
        m.insert("clearcoatgloss", ParamType::FloatTexture);
        m.insert("color", ParamType::SpectrumTexture);
        m.insert("difftrans", ParamType::SpectrumTexture);
        m.insert("eumelanin", ParamType::FloatTexture);
        m.insert("flatness", ParamType::SpectrumTexture);
        m.insert("k", ParamType::SpectrumTexture);
        m.insert("metallic", ParamType::FloatTexture);
        m.insert("mfp", ParamType::FloatTexture);
        m.insert("name", ParamType::String);
        m.insert("namedmaterial1", ParamType::String);
        m.insert("namedmaterial2", ParamType::String);
        m.insert("opacity", ParamType::SpectrumTexture);
        m.insert("pheomelanin", ParamType::FloatTexture);
        m.insert("reflect", ParamType::SpectrumTexture);
        m.insert("remaproughness", ParamType::Bool);
        m.insert("roughness", ParamType::FloatTexture);
        m.insert("scale", ParamType::Float);
        m.insert("scatterdistance", ParamType::SpectrumTexture);
        m.insert("sheen", ParamType::FloatTexture);
        m.insert("sheentint", ParamType::FloatTexture);
        m.insert("sigma", ParamType::FloatTexture);
        m.insert("sigma_a", ParamType::SpectrumTexture);
        m.insert("sigma_prime_s", ParamType::SpectrumTexture);
        m.insert("spectrans", ParamType::FloatTexture);
        m.insert("speculartint", ParamType::FloatTexture);
        m.insert("thin", ParamType::Bool);
        m.insert("transmit", ParamType::SpectrumTexture);
        m.insert("uroughness", ParamType::FloatTexture);
        m.insert("vroughness", ParamType::FloatTexture);

        // eta is a float_texture for most materials but a spectrum_texture
        // for metal; the generic tag stays permissive for both.
        m.insert("eta", ParamType::Texture);

        m
    };
}

/// The name → type contract of one directive variant. Entry order is the
/// order of the static table it was built from. Built per invocation from the
/// static tables, so validation cost is paid eagerly and close to the caller.
#[derive(Debug, Clone)]
pub struct Signature {
    types: IndexMap<String, ParamType>,
    allow_material_overrides: bool,
}

impl Signature {
    /// Parses a static name/tag table. Fails with `UnknownTypeTag` naming
    /// every tag outside the closed set.
    pub fn new(allow_material_overrides: bool, table: &[(&str, &str)]) -> Result<Signature> {
        let mut types = IndexMap::with_capacity(table.len());
        let mut unknown = Vec::new();

        for (name, tag) in table {
            match ParamType::from_tag(tag) {
                Some(ty) => {
                    types.insert((*name).to_owned(), ty);
                }
                None => unknown.push((*tag).to_owned()),
            }
        }

        if !unknown.is_empty() {
            return Err(Error::UnknownTypeTag(unknown));
        }

        Ok(Signature {
            types,
            allow_material_overrides,
        })
    }

    pub fn type_of(&self, name: &str) -> Option<ParamType> {
        self.types.get(name).copied()
    }

    /// Shape-level calls may carry extra material parameters destined for an
    /// enclosing material statement. When the signature opts in, every
    /// supplied name it does not declare is adopted from the material
    /// parameter catalog; names the catalog does not know stay out and fail
    /// validation downstream. Must run before [`Signature::check`].
    pub fn extend_with_overrides(mut self, params: &ParamSet) -> Signature {
        if !self.allow_material_overrides {
            return self;
        }
        self.allow_material_overrides = false;

        for name in params.names() {
            if self.types.contains_key(name) {
                continue;
            }

            if let Some(&ty) = MATERIAL_PARAMS.get(name) {
                debug!("accepting material override \"{}\" as {}", name, ty.tag());
                self.types.insert(name.to_owned(), ty);
            }
        }

        self
    }

    /// Rejects every supplied name the signature does not declare, in
    /// encounter order. Never mutates the parameter set.
    pub fn check(&self, params: &ParamSet) -> Result<()> {
        let surplus: Vec<String> = params
            .names()
            .filter(|name| !self.types.contains_key(*name))
            .map(str::to_owned)
            .collect();

        if surplus.is_empty() {
            Ok(())
        } else {
            Err(Error::UnknownParameter(surplus))
        }
    }
}
