//! Where the diagnostics read environment presence from.

use std::collections::HashMap;

/// Answers whether a configuration value is present.
pub trait EnvSource: Send + Sync {
    /// True when `key` is set to a non-empty value.
    fn is_set(&self, key: &str) -> bool;
}

/// The live process environment, read at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn is_set(&self, key: &str) -> bool {
        std::env::var_os(key).is_some_and(|v| !v.is_empty())
    }
}

/// Fixed set of values, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn is_set(&self, key: &str) -> bool {
        self.vars.get(key).is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_env_treats_empty_as_missing() {
        let env = StaticEnv::from_pairs([("A", "1"), ("B", "")]);
        assert!(env.is_set("A"));
        assert!(!env.is_set("B"));
        assert!(!env.is_set("C"));
    }

    #[test]
    fn process_env_missing_key() {
        assert!(!ProcessEnv.is_set("KIR_API_SURELY_UNSET_VARIABLE"));
    }
}
