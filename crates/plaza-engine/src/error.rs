/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that abort an engine operation outright.
///
/// Everything recoverable (missing spawn class, a rejected spawn, a
/// resource that fails to load) degrades to a diagnostics record instead;
/// only the absence of a world context is fatal to a call.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No world is attached to the manager.
    #[error("no world attached to the plaza manager")]
    MissingWorld,
}
