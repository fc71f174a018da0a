use thiserror::Error;

/// A requested named preset or location that does not exist.
/// A distinct error kind so callers can fall back deliberately -- never a
/// silent wrong-roster or wrong-location substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no practice preset named `{0}`")]
    PresetNotFound(String),

    #[error("no location named `{0}` in the active roster")]
    LocationNotFound(String),
}
