/// The capability contract implemented by pluggable operation types.
use anyhow::Result;
use serde_json::Value;

/// Priority side passed to `transform` to break ties when concurrent
/// operations touch the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The wire-level spelling used by operation-type implementations.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// An operation-type implementation: the transform algebra for one
/// document model (plain text, rich text, JSON, ...).
///
/// Implementations are identified by a short name and/or a canonical
/// URI; either may be absent, in which case the type is simply not
/// registered under that key.
pub trait OtType: Send + Sync {
    /// Short type name, e.g. `"json0"`.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Canonical type URI.
    fn uri(&self) -> Option<&str> {
        None
    }

    /// Rewrites `op` so that applying `other` first and then the result
    /// is equivalent to the original intent of `op`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operations are malformed for this type.
    fn transform(&self, op: &Value, other: &Value, side: Side) -> Result<Value>;
}

/// Whether an operation is a no-op that must never be recorded in
/// undo/redo history.
///
/// Operations are opaque, so emptiness is judged purely structurally:
/// null, empty array, empty string and empty object all count as empty.
pub fn is_noop(op: &Value) -> bool {
    match op {
        Value::Null => true,
        Value::Array(components) => components.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
