use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything here is a programmer error in the scene-building code, reported
/// to the immediate caller before any text reaches the sink.
#[derive(Debug, Error)]
pub enum Error {
    /// A signature table declared a type tag outside the closed type set.
    #[error("unknown types: {}", .0.join(", "))]
    UnknownTypeTag(Vec<String>),

    /// The caller supplied parameter names the directive variant does not take.
    #[error("{}", keyword_message(.0))]
    UnknownParameter(Vec<String>),

    #[error("wrong number of arguments to {directive} (given {given}, expected {expected})")]
    WrongArgumentCount {
        directive: String,
        given: usize,
        expected: usize,
    },

    /// A value headed for spectrum rendering was not wrapped with a
    /// representation.
    #[error(
        "Please specify the spectrum representation for {0}.\n\
         You can do this by wrapping the value: rgb({0})\n\
         Valid representations are: rgb, xyz, sampled and blackbody"
    )]
    AmbiguousSpectrum(String),

    /// A bare string where the schema admits both a texture reference and a
    /// spectrum value.
    #[error(
        "Please specify whether {0} is a spectrum or texture.\n\
         If it's a texture, wrap it with: texture({0})\n\
         If it's a spectrum, wrap it with a representation: rgb({0})\n\
         Valid representations are: rgb, xyz, sampled and blackbody"
    )]
    AmbiguousType(String),

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn keyword_message(names: &[String]) -> String {
    if names.len() == 1 {
        format!("unknown keyword: {}", names[0])
    } else {
        format!("unknown keywords: {}", names.join(", "))
    }
}
