use thiserror::Error;

/// Top-level error type for the poolscape crate.
#[derive(Debug, Error)]
pub enum PoolscapeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Design(#[from] DesignError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("scene export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological operations.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to modeling operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors raised at the design boundary, before geometry is built.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("no scene element with id {0}")]
    UnknownElement(u32),
}

/// Errors related to build configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse build options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("option {name} = {value} is out of range")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Errors reported by a site analysis service.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("site analysis unavailable: {0}")]
    Unavailable(String),

    #[error("no photos supplied for site analysis")]
    NoPhotos,
}

/// Convenience type alias for results using [`PoolscapeError`].
pub type Result<T> = std::result::Result<T, PoolscapeError>;
