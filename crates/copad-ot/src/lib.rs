/// Operation-type contract for collaborative editing.
///
/// Defines the capability interface (`OtType`) that pluggable operation
/// types implement, and the `TypeRegistry` that maps type identifiers
/// (name or URI) to implementations. Operations themselves are opaque
/// JSON values; this crate never inspects their structure beyond the
/// no-op predicate.
pub mod op_type;
pub mod registry;

pub use op_type::{is_noop, OtType, Side};
pub use registry::TypeRegistry;
