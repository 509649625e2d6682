use thiserror::Error;

/// Failures that stop a render before it starts or while writing it out.
///
/// Numerical trouble inside a single light path is never reported here; the
/// integrator degrades such samples to zero instead.
#[derive(Error, Debug)]
pub enum RenderError{
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot build an acceleration structure over an empty scene")]
    EmptyScene,

    #[error("Scene contains geometry without a bounding box")]
    Unbounded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
