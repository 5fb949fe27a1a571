use std::fmt;
use std::fmt::{Display, Formatter};

use crate::core::error::{Error, Result};
use crate::core::value::Value;
use crate::core::Float;

/// The spectrum representations pbrt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumKind {
    Rgb,
    Xyz,
    Sampled,
    Blackbody,
}

impl SpectrumKind {
    /// The type tag written to the scene file.
    pub fn wire_tag(self) -> &'static str {
        match self {
            SpectrumKind::Rgb => "rgb",
            SpectrumKind::Xyz => "xyz",
            SpectrumKind::Sampled => "spectrum",
            SpectrumKind::Blackbody => "blackbody",
        }
    }

    fn constructor(self) -> &'static str {
        match self {
            SpectrumKind::Rgb => "rgb",
            SpectrumKind::Xyz => "xyz",
            SpectrumKind::Sampled => "sampled",
            SpectrumKind::Blackbody => "blackbody",
        }
    }
}

/// Tags a value as spectral data and names its representation, so that a
/// number sequence is not mistaken for plain floats. Built once by the
/// constructor functions below and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    kind: SpectrumKind,
    args: Vec<Value>,
}

impl Spectrum {
    pub(crate) fn new(kind: SpectrumKind, args: Vec<Value>) -> Self {
        Spectrum { kind, args }
    }

    pub(crate) fn into_args(self) -> Vec<Value> {
        self.args
    }

    /// Pass 2 of type resolution: a value headed for spectrum rendering must
    /// carry an explicit representation. On success the concrete type becomes
    /// the spectrum's own tag and the concrete values its components.
    pub(crate) fn unpack(value: Value) -> Result<(SpectrumKind, Vec<Value>)> {
        match value {
            Value::Spectrum(s) => Ok((s.kind, s.args)),
            other => Err(Error::AmbiguousSpectrum(other.to_string())),
        }
    }
}

impl Display for Spectrum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind.constructor())?;
        for (i, v) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/// Wraps three components as an RGB color.
pub fn rgb(r: Float, g: Float, b: Float) -> Value {
    Value::Spectrum(Spectrum::new(
        SpectrumKind::Rgb,
        vec![r.into(), g.into(), b.into()],
    ))
}

/// Wraps three components as an XYZ color.
pub fn xyz(x: Float, y: Float, z: Float) -> Value {
    Value::Spectrum(Spectrum::new(
        SpectrumKind::Xyz,
        vec![x.into(), y.into(), z.into()],
    ))
}

/// Wraps (wavelength, value) pairs, or the name of an SPD file, as a sampled
/// spectrum. Written with the `spectrum` tag.
pub fn sampled(values: impl Into<Value>) -> Value {
    Value::Spectrum(Spectrum::new(SpectrumKind::Sampled, vec![values.into()]))
}

/// Wraps a temperature in Kelvin and a scale factor as a blackbody emitter.
pub fn blackbody(temperature: Float, scale: Float) -> Value {
    Value::Spectrum(Spectrum::new(
        SpectrumKind::Blackbody,
        vec![temperature.into(), scale.into()],
    ))
}
