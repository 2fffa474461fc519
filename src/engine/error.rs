#[derive(Debug)]
pub enum EngineError {
    /// Malformed input: empty keys, bad guest counts, inverted dates.
    Validation(&'static str),
    /// No reservation with this ID.
    NotFound(String),
    /// The hotel key failed the directory existence check.
    HotelNotFound(String),
    /// A caller-supplied ID collides with a stored record.
    AlreadyExists(String),
    /// The stay overlaps an active reservation (its ID is carried).
    Overlap { conflicting: String },
    /// Illegal status transition.
    Lifecycle(&'static str),
    /// Underlying persistence failure (seed file IO or parse).
    Storage(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Validation(msg) => write!(f, "invalid reservation: {msg}"),
            EngineError::NotFound(id) => write!(f, "reservation not found: {id}"),
            EngineError::HotelNotFound(key) => write!(f, "hotel not found: {key}"),
            EngineError::AlreadyExists(id) => write!(f, "reservation already exists: {id}"),
            EngineError::Overlap { conflicting } => {
                write!(f, "dates overlap reservation {conflicting}")
            }
            EngineError::Lifecycle(msg) => write!(f, "illegal transition: {msg}"),
            EngineError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Short outcome label for metrics.
    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "invalid",
            EngineError::NotFound(_) | EngineError::HotelNotFound(_) => "not_found",
            EngineError::AlreadyExists(_)
            | EngineError::Overlap { .. }
            | EngineError::Lifecycle(_) => "conflict",
            EngineError::Storage(_) => "error",
        }
    }
}
