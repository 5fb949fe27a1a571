pub mod accelerator;
pub mod area_light_source;
pub mod camera;
pub mod film;
pub mod integrator;
pub mod light_source;
pub mod material;
pub mod named_medium;
pub mod pixel_filter;
pub mod sampler;
pub mod shape;
pub mod texture;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::Write;

use log::trace;

use crate::core::error::Result;
use crate::core::parameter::ParameterList;
use crate::core::paramset::ParamSet;
use crate::core::signature::Signature;
use crate::core::statement::Statement;
use crate::core::value::Value;
use crate::core::values::Values;
use crate::core::Float;

pub use self::accelerator::AcceleratorBuilder;
pub use self::area_light_source::AreaLightSourceBuilder;
pub use self::camera::CameraBuilder;
pub use self::film::FilmBuilder;
pub use self::integrator::IntegratorBuilder;
pub use self::light_source::LightSourceBuilder;
pub use self::material::{MaterialBuilder, NamedMaterialBuilder};
pub use self::named_medium::NamedMediumBuilder;
pub use self::pixel_filter::PixelFilterBuilder;
pub use self::sampler::SamplerBuilder;
pub use self::shape::ShapeBuilder;
pub use self::texture::{TextureBuilder, TextureType};

/// Which transforms an `ActiveTransform` directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformTime {
    StartTime,
    EndTime,
    All,
}

impl Display for TransformTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let token = match self {
            TransformTime::StartTime => "StartTime",
            TransformTime::EndTime => "EndTime",
            TransformTime::All => "All",
        };
        write!(f, "{}", token)
    }
}

/// Encodes a scene as pbrt statements, appending exactly one line per
/// statement to the output sink, in call order. Directive methods return the
/// builder again so calls chain; a failed directive writes nothing.
///
/// ```
/// use pbrt_writer::{params, Builder};
///
/// let mut b = Builder::new();
/// b.translate(1.0, 2.0, 3.0).unwrap()
///     .shape().sphere(params! { radius: 1.0 }).unwrap();
///
/// assert_eq!(b.to_string(), "Translate 1 2 3\nShape \"sphere\" \"float radius\" [1]\n");
/// ```
pub struct Builder<W: Write> {
    sink: W,
}

impl Builder<Vec<u8>> {
    /// A builder that collects the scene in memory; read it back with
    /// `to_string`.
    pub fn new() -> Self {
        Builder { sink: Vec::new() }
    }
}

impl Default for Builder<Vec<u8>> {
    fn default() -> Self {
        Builder::new()
    }
}

impl Display for Builder<Vec<u8>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.sink))
    }
}

impl<W: Write> Builder<W> {
    pub fn with_sink(sink: W) -> Self {
        Builder { sink }
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    pub(crate) fn append(&mut self, line: &str) -> Result<&mut Self> {
        trace!("{}", line);
        writeln!(self.sink, "{}", line)?;
        Ok(self)
    }

    pub(crate) fn write(&mut self, statement: Statement) -> Result<&mut Self> {
        self.append(&statement.to_string())
    }

    fn fixed(
        &mut self,
        directive: &str,
        expected: usize,
        values: impl Into<Values>,
    ) -> Result<&mut Self> {
        self.write(Statement::fixed_size(directive, expected, values)?)
    }

    pub(crate) fn variadic(
        &mut self,
        directive: &str,
        kind: &str,
        signature: Signature,
        params: ParamSet,
    ) -> Result<&mut Self> {
        self.write(Statement::variadic(
            directive,
            kind,
            ParameterList::from(params, signature)?,
        ))
    }

    // General structure

    /// Writes one `# `-prefixed line per input line.
    pub fn comment(&mut self, text: &str) -> Result<&mut Self> {
        for line in text.lines() {
            self.append(&format!("# {}", line))?;
        }
        Ok(self)
    }

    pub fn include(&mut self, path: &str) -> Result<&mut Self> {
        self.fixed("Include", 1, Value::from(path))
    }

    // Transformations

    pub fn identity(&mut self) -> Result<&mut Self> {
        self.fixed("Identity", 0, Values::new())
    }

    pub fn translate(&mut self, x: Float, y: Float, z: Float) -> Result<&mut Self> {
        self.fixed("Translate", 3, Value::from([x, y, z]))
    }

    pub fn scale(&mut self, x: Float, y: Float, z: Float) -> Result<&mut Self> {
        self.fixed("Scale", 3, Value::from([x, y, z]))
    }

    pub fn rotate(&mut self, angle: Float, x: Float, y: Float, z: Float) -> Result<&mut Self> {
        self.fixed("Rotate", 4, Value::from([angle, x, y, z]))
    }

    /// Nine values: eye, look-at point and up vector.
    pub fn look_at(&mut self, values: impl Into<Value>) -> Result<&mut Self> {
        self.fixed("LookAt", 9, values.into())
    }

    /// Sixteen matrix entries, column-major as pbrt expects.
    pub fn transform(&mut self, matrix: impl Into<Value>) -> Result<&mut Self> {
        self.fixed("Transform", 16, matrix.into())
    }

    pub fn concat_transform(&mut self, matrix: impl Into<Value>) -> Result<&mut Self> {
        self.fixed("ConcatTransform", 16, matrix.into())
    }

    pub fn transform_times(&mut self, start: Float, end: Float) -> Result<&mut Self> {
        self.fixed("TransformTimes", 2, Value::from([start, end]))
    }

    pub fn coordinate_system(&mut self, name: &str) -> Result<&mut Self> {
        self.fixed("CoordinateSystem", 1, Value::from(name))
    }

    pub fn coord_sys_transform(&mut self, name: &str) -> Result<&mut Self> {
        self.fixed("CoordSysTransform", 1, Value::from(name))
    }

    pub fn active_transform(&mut self, time: TransformTime) -> Result<&mut Self> {
        self.fixed(&format!("ActiveTransform {}", time), 0, Values::new())
    }

    pub fn reverse_orientation(&mut self) -> Result<&mut Self> {
        self.fixed("ReverseOrientation", 0, Values::new())
    }

    // Block directives

    pub fn world_begin<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.fixed("WorldBegin", 0, Values::new())?;
        build(self)?;
        self.fixed("WorldEnd", 0, Values::new())
    }

    pub fn attribute_begin<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.fixed("AttributeBegin", 0, Values::new())?;
        build(self)?;
        self.fixed("AttributeEnd", 0, Values::new())
    }

    pub fn transform_begin<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.fixed("TransformBegin", 0, Values::new())?;
        build(self)?;
        self.fixed("TransformEnd", 0, Values::new())
    }

    pub fn object_begin<F>(&mut self, name: &str, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.fixed("ObjectBegin", 1, Value::from(name))?;
        build(self)?;
        self.fixed("ObjectEnd", 0, Values::new())
    }

    pub fn object_instance(&mut self, name: &str) -> Result<&mut Self> {
        self.fixed("ObjectInstance", 1, Value::from(name))
    }

    /// Selects a material declared earlier with `make_named_material`.
    pub fn named_material(&mut self, name: &str) -> Result<&mut Self> {
        self.fixed("NamedMaterial", 1, Value::from(name))
    }

    // Variant families

    pub fn accelerator(&mut self) -> AcceleratorBuilder<W> {
        AcceleratorBuilder::new(self)
    }

    pub fn area_light_source(&mut self) -> AreaLightSourceBuilder<W> {
        AreaLightSourceBuilder::new(self)
    }

    pub fn camera(&mut self) -> CameraBuilder<W> {
        CameraBuilder::new(self)
    }

    pub fn film(&mut self) -> FilmBuilder<W> {
        FilmBuilder::new(self)
    }

    pub fn integrator(&mut self) -> IntegratorBuilder<W> {
        IntegratorBuilder::new(self)
    }

    pub fn light_source(&mut self) -> LightSourceBuilder<W> {
        LightSourceBuilder::new(self)
    }

    pub fn material(&mut self) -> MaterialBuilder<W> {
        MaterialBuilder::new(self)
    }

    /// Declares a `MakeNamedMaterial`; the returned builder exposes the same
    /// material kinds as [`Builder::material`].
    pub fn make_named_material(&mut self, name: &str) -> NamedMaterialBuilder<W> {
        NamedMaterialBuilder::new(self, name)
    }

    pub fn make_named_medium(&mut self, name: &str) -> NamedMediumBuilder<W> {
        NamedMediumBuilder::new(self, name)
    }

    pub fn pixel_filter(&mut self) -> PixelFilterBuilder<W> {
        PixelFilterBuilder::new(self)
    }

    pub fn sampler(&mut self) -> SamplerBuilder<W> {
        SamplerBuilder::new(self)
    }

    pub fn shape(&mut self) -> ShapeBuilder<W> {
        ShapeBuilder::new(self)
    }

    /// Declares a `Texture` directive. The name can be referenced from later
    /// parameters by wrapping it with [`crate::texture`].
    pub fn texture(&mut self, name: &str, ty: TextureType) -> TextureBuilder<W> {
        TextureBuilder::new(self, name, ty)
    }
}
