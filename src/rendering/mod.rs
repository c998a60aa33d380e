mod force_diagram;

pub use force_diagram::{ForceArrow, ForceDiagram, ForceKind};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("Failed to build path: {0}")]
    Path(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(String),
}
