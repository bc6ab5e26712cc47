use thiserror::Error;

/// Errors raised while building or validating a body catalog.
/// All of these are fatal at startup; the per-frame path never sees them.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("body '{name}': eccentricity {value} outside [0, 1)")]
    Eccentricity { name: String, value: f64 },

    #[error("body '{name}': orbital period must be nonzero")]
    ZeroOrbitalPeriod { name: String },

    #[error("body '{name}': rotation period must be nonzero")]
    ZeroRotationPeriod { name: String },

    #[error("body '{name}': radius must be positive (got {value})")]
    NonPositiveRadius { name: String, value: f64 },

    #[error("duplicate body name '{0}'")]
    DuplicateName(String),

    #[error("moon '{moon}': unknown parent body '{parent}'")]
    UnknownParent { moon: String, parent: String },

    #[error("catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
