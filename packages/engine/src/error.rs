use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while configuring the engine.
///
/// Nothing inside a simulation tick returns this type: per-particle failures are
/// reported as `None`/`false` and never abort a step.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog bundle is not valid JSON or does not match the bundle schema.
    #[error("catalog bundle parse error: {0}")]
    CatalogParse(#[source] serde_json::Error),

    /// Catalog has no usable particle besides the technical empty particle.
    #[error("catalog has no usable particle definitions")]
    EmptyCatalog,

    /// Settings JSON could not be parsed.
    #[error("settings parse error: {0}")]
    SettingsParse(#[source] serde_json::Error),

    /// Settings parsed but describe an impossible world.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
