/// Registry mapping type identifiers to operation-type implementations.
///
/// Constructed explicitly and passed to consumers by reference, so
/// independent sessions in the same process can hold independent
/// registrations (important in tests). Registration is expected to
/// happen once at startup, before the registry is shared.
use std::collections::HashMap;
use std::sync::Arc;

use crate::op_type::OtType;

/// Maps type names and URIs to their implementations.
///
/// A single implementation is reachable under both its `name()` and its
/// `uri()` when both are present. The last registration for a given
/// identifier wins, silently.
#[derive(Default, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, Arc<dyn OtType>>,
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("identifiers", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation type under its name and URI.
    ///
    /// Identifiers the implementation does not provide are skipped.
    /// An implementation providing neither is unreachable and is
    /// effectively dropped.
    pub fn register(&mut self, ot: Arc<dyn OtType>) {
        if let Some(name) = ot.name() {
            self.types.insert(name.to_string(), Arc::clone(&ot));
        }
        if let Some(uri) = ot.uri() {
            self.types.insert(uri.to_string(), Arc::clone(&ot));
        }
    }

    /// Looks up an implementation by name or URI.
    pub fn lookup(&self, identifier: &str) -> Option<&dyn OtType> {
        self.types.get(identifier).map(|ot| ot.as_ref())
    }

    /// Number of registered identifiers (not implementations; a type
    /// with both a name and a URI counts twice).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether any identifier is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op_type::Side;
    use anyhow::Result;
    use serde_json::Value;

    struct FakeType {
        name: Option<&'static str>,
        uri: Option<&'static str>,
        tag: &'static str,
    }

    impl OtType for FakeType {
        fn name(&self) -> Option<&str> {
            self.name
        }

        fn uri(&self) -> Option<&str> {
            self.uri
        }

        fn transform(&self, _op: &Value, _other: &Value, _side: Side) -> Result<Value> {
            Ok(Value::String(self.tag.to_string()))
        }
    }

    fn tagged(name: Option<&'static str>, uri: Option<&'static str>, tag: &'static str) -> Arc<dyn OtType> {
        Arc::new(FakeType { name, uri, tag })
    }

    #[test]
    fn test_register_under_name_and_uri() {
        let mut registry = TypeRegistry::new();
        registry.register(tagged(Some("json0"), Some("http://sharejs.org/types/JSONv0"), "a"));

        assert!(registry.lookup("json0").is_some());
        assert!(registry.lookup("http://sharejs.org/types/JSONv0").is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_name_only() {
        let mut registry = TypeRegistry::new();
        registry.register(tagged(Some("text"), None, "a"));

        assert!(registry.lookup("text").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_without_identifiers_is_unreachable() {
        let mut registry = TypeRegistry::new();
        registry.register(tagged(None, None, "a"));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_missing_identifier() {
        let registry = TypeRegistry::new();
        assert!(registry.lookup("nope").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = TypeRegistry::new();
        registry.register(tagged(Some("text"), None, "first"));
        registry.register(tagged(Some("text"), None, "second"));

        let ot = registry.lookup("text").expect("registered");
        let out = ot
            .transform(&Value::Null, &Value::Null, Side::Left)
            .expect("transform");
        assert_eq!(out, Value::String("second".to_string()));
    }
}
