/// Maximum number of operations kept on the undo and redo stacks.
/// Oldest entries are evicted when a push would exceed this limit.
const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Configuration for an `UndoManager`.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Max operations per stack (undo and redo each). Must be positive.
    pub history_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.history_limit, 100);
    }
}
