/// Core undo/redo manager for a collaboratively edited document.
///
/// Records inverses of locally-applied operations on two bounded
/// stacks. A three-state machine routes each incoming inverse to the
/// correct stack depending on whether it was produced by an ordinary
/// edit, an undo, or a redo. `reconcile` keeps every queued entry
/// transformed against remote operations so the history stays valid
/// as the document moves underneath it.
use std::collections::VecDeque;

use serde_json::Value;

use copad_ot::{is_noop, OtType, Side, TypeRegistry};

use crate::config::HistoryConfig;
use crate::error::HistoryError;

/// Whose inverse the next recorded operation is.
///
/// Set at the start of `undo()`/`redo()` and consumed by the matching
/// record call, so that the inverse of an undo can be told apart from
/// the inverse of a normal edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryState {
    Default,
    Undoing,
    Redoing,
}

/// Manages undo/redo history for a single document session.
///
/// Owned exclusively by one editing session and called from that
/// session's single control flow; not internally synchronized.
///
/// The session contract: after applying a local edit, feed its inverse
/// to [`record_undoable`](Self::record_undoable). After applying a
/// remote operation, call [`reconcile`](Self::reconcile) — once per
/// remote operation, in application order, before any further
/// undo/redo. To undo, pop via [`undo`](Self::undo), apply the
/// returned operation, and report its inverse via
/// [`record_redoable`](Self::record_redoable) (symmetrically
/// [`redo`](Self::redo) / [`record_undoable`](Self::record_undoable)).
pub struct UndoManager {
    /// Undo stack; front is the oldest entry, back is the top.
    undo_stack: VecDeque<Value>,
    /// Redo stack, same orientation.
    redo_stack: VecDeque<Value>,
    /// Routing state for the next recorded inverse.
    state: HistoryState,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl std::fmt::Debug for UndoManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoManager")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("state", &self.state)
            .field("history_limit", &self.config.history_limit)
            .finish()
    }
}

impl UndoManager {
    /// Creates a new empty manager.
    ///
    /// # Panics
    ///
    /// Panics if `config.history_limit` is zero.
    pub fn new(config: HistoryConfig) -> Self {
        assert!(config.history_limit > 0, "history limit must be positive");
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            state: HistoryState::Default,
            config,
        }
    }

    /// Convenience constructor with an explicit history limit.
    pub fn with_limit(history_limit: usize) -> Self {
        Self::new(HistoryConfig { history_limit })
    }

    /// Pushes onto a stack, evicting the oldest entry if the limit is
    /// reached. The stacks are sliding windows, not hard cutoffs.
    fn push_bounded(stack: &mut VecDeque<Value>, op: Value, limit: usize) {
        if stack.len() >= limit {
            stack.pop_front();
            tracing::trace!(limit, "evicted oldest history entry");
        }
        stack.push_back(op);
    }

    /// Records the inverse of a just-applied operation as undoable.
    ///
    /// The editing session calls this for every inverse it computes.
    /// Routing depends on what produced the operation being inverted:
    ///
    /// - ordinary edit (idle state): push onto the undo stack and clear
    ///   the redo stack — a fresh forward edit abolishes the redo branch;
    /// - a redo: push onto the undo stack so the redo can be undone
    ///   again; the redo stack was already consumed by the redo itself;
    /// - an undo: discard. Pushing it back would create an undo loop;
    ///   it belongs on the redo stack via `record_redoable`.
    ///
    /// No-op operations are never recorded and change nothing.
    pub fn record_undoable(&mut self, op: Value) {
        match self.state {
            HistoryState::Undoing => {}
            HistoryState::Redoing => {
                self.state = HistoryState::Default;
                if !is_noop(&op) {
                    Self::push_bounded(&mut self.undo_stack, op, self.config.history_limit);
                }
            }
            HistoryState::Default => {
                if is_noop(&op) {
                    return;
                }
                Self::push_bounded(&mut self.undo_stack, op, self.config.history_limit);
                self.redo_stack.clear();
            }
        }
    }

    /// Records the inverse of a just-applied undo as redoable.
    ///
    /// Only honored while an undo is pending (see [`undo`](Self::undo));
    /// in any other state the operation is discarded. Restores the
    /// manager to its idle state even when the inverse is a no-op.
    pub fn record_redoable(&mut self, op: Value) {
        match self.state {
            HistoryState::Undoing => {
                self.state = HistoryState::Default;
                if !is_noop(&op) {
                    Self::push_bounded(&mut self.redo_stack, op, self.config.history_limit);
                }
            }
            HistoryState::Redoing | HistoryState::Default => {}
        }
    }

    /// Pops the most recent undoable operation.
    ///
    /// The caller applies the returned operation to the document,
    /// computes its inverse, and must report that inverse via
    /// [`record_redoable`](Self::record_redoable) — exactly once per
    /// successful `undo()`. Until then the manager stays in its undoing
    /// state, during which `record_undoable` calls are discarded (the
    /// session's generic record path fires for the undo's own
    /// application too).
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::EmptyHistory` if there is nothing to
    /// undo. The manager is back in its idle state when this happens.
    pub fn undo(&mut self) -> Result<Value, HistoryError> {
        self.state = HistoryState::Undoing;
        match self.undo_stack.pop_back() {
            Some(op) => Ok(op),
            None => {
                self.state = HistoryState::Default;
                Err(HistoryError::EmptyHistory("undone"))
            }
        }
    }

    /// Pops the most recent redoable operation.
    ///
    /// Symmetric to [`undo`](Self::undo): apply the returned operation
    /// and report its inverse via
    /// [`record_undoable`](Self::record_undoable), which lands it back
    /// on the undo stack.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::EmptyHistory` if there is nothing to
    /// redo. The manager is back in its idle state when this happens.
    pub fn redo(&mut self) -> Result<Value, HistoryError> {
        self.state = HistoryState::Redoing;
        match self.redo_stack.pop_back() {
            Some(op) => Ok(op),
            None => {
                self.state = HistoryState::Default;
                Err(HistoryError::EmptyHistory("redone"))
            }
        }
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of queued undoable operations.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of queued redoable operations.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Transforms all queued history against a remote operation.
    ///
    /// Must be called after every remote operation is applied to the
    /// document, in application order, so that popping any history
    /// entry later still yields a correct edit. Entries are transformed
    /// oldest to newest with left priority: queued local history yields
    /// precedence to operations it has not yet seen.
    ///
    /// All-or-nothing: either every entry on both stacks is replaced,
    /// or the manager is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::UnknownType` if `type_id` is not
    /// registered (checked even when both stacks are empty), or
    /// `HistoryError::TransformFailed` if the implementation rejects
    /// an entry.
    pub fn reconcile(
        &mut self,
        remote_op: &Value,
        type_id: &str,
        registry: &TypeRegistry,
    ) -> Result<(), HistoryError> {
        let ot = registry
            .lookup(type_id)
            .ok_or_else(|| HistoryError::UnknownType(type_id.to_string()))?;

        let undo_stack = Self::transform_stack(&self.undo_stack, remote_op, ot, type_id)?;
        let redo_stack = Self::transform_stack(&self.redo_stack, remote_op, ot, type_id)?;

        tracing::debug!(
            type_id,
            undo_depth = undo_stack.len(),
            redo_depth = redo_stack.len(),
            "reconciled history against remote operation"
        );
        self.undo_stack = undo_stack;
        self.redo_stack = redo_stack;
        Ok(())
    }

    /// Transforms one stack, oldest to newest, into a fresh container.
    fn transform_stack(
        stack: &VecDeque<Value>,
        remote_op: &Value,
        ot: &dyn OtType,
        type_id: &str,
    ) -> Result<VecDeque<Value>, HistoryError> {
        stack
            .iter()
            .map(|entry| {
                ot.transform(entry, remote_op, Side::Left)
                    .map_err(|source| HistoryError::TransformFailed {
                        type_id: type_id.to_string(),
                        source,
                    })
            })
            .collect()
    }

    /// Discards all history and returns to the idle state.
    ///
    /// For session resets such as a document reload, after which queued
    /// inverses no longer correspond to the document state.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.state = HistoryState::Default;
    }
}
