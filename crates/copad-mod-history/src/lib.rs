/// Undo/redo history management for collaborative editing.
///
/// Provides an `UndoManager` that records inverses of locally-applied
/// operations on two bounded stacks and keeps every queued entry
/// transformed against remote operations as they arrive, so that
/// popping and applying any history entry at any future time yields a
/// correct edit relative to the then-current document.
pub mod config;
pub mod error;
pub mod manager;

pub use config::HistoryConfig;
pub use error::HistoryError;
pub use manager::UndoManager;
