/// Error types for history operations.
use thiserror::Error;

/// Failures reported by the `UndoManager`.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// `undo()` or `redo()` was called with nothing on the respective
    /// stack. Recoverable: the manager is back in its idle state when
    /// this is returned, and callers checking `can_undo`/`can_redo`
    /// first never see it.
    #[error("no actions to be {0}")]
    EmptyHistory(&'static str),

    /// `reconcile` was given a type identifier with no registered
    /// implementation. Integration error: the caller is reconciling
    /// against a type that was never registered.
    #[error("no operation type registered under `{0}`")]
    UnknownType(String),

    /// The resolved operation type failed to transform a history entry.
    /// Neither stack has been mutated when this is returned.
    #[error("operation type `{type_id}` failed to transform history")]
    TransformFailed {
        type_id: String,
        #[source]
        source: anyhow::Error,
    },
}
