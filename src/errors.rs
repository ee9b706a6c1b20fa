//! Error types with diagnostics using miette
//!
//! The badge component itself never surfaces most of these to callers: a
//! failed render is logged and skipped. They exist so the pipeline and the
//! surfaces can report precisely what went wrong.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the render pipeline, the surfaces, and input parsing
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum BadgeError {
    #[error("drawing surface unavailable for a {width}x{height} image")]
    #[diagnostic(
        code(favbadge::surface::unavailable),
        help("the surface is acquired when the base image finishes loading")
    )]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("failed to encode surface: {message}")]
    #[diagnostic(code(favbadge::encode::failed))]
    Encode { message: String },

    #[error("failed to decode image: {message}")]
    #[diagnostic(code(favbadge::image::decode))]
    ImageDecode { message: String },

    #[error("unknown anchor position: {name}")]
    #[diagnostic(
        code(favbadge::anchor::unknown),
        help(
            "expected one of top, right, bottom, left, topLeft, topRight, bottomRight, bottomLeft, center"
        )
    )]
    UnknownPosition { name: String },

    #[error("invalid color: {value}")]
    #[diagnostic(code(favbadge::paint::invalid_color))]
    InvalidColor { value: String },
}
