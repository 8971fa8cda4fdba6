/// Alias for `Result<T, SkError>`.
pub type SkResult<T> = Result<T, SkError>;

/// Errors that can occur when working with the spawn registry.
///
/// Note what is deliberately absent: registering over an existing kind
/// is last-write-wins, and unregistering an unknown kind is a no-op.
/// Neither is an error.
#[derive(Debug, thiserror::Error)]
pub enum SkError {
    /// The requested kind has no registered spawner.
    #[error("no spawner registered for kind \"{0}\"")]
    UnknownKind(String),
}
