use crate::core::Rule;
use crate::providers;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<RuleRegistry> = Lazy::new(providers::builtin_registry);

/// Ordered provider rules. Iteration order is match priority, so more
/// specific patterns must be registered before more general ones.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<(String, Rule)>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in provider set, compiled on first use.
    pub fn builtin() -> &'static RuleRegistry {
        &BUILTIN
    }

    pub fn register(&mut self, key: impl Into<String>, rule: Rule) {
        self.rules.push((key.into(), rule));
    }

    pub fn with_rule(mut self, key: impl Into<String>, rule: Rule) -> Self {
        self.register(key, rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.iter().find(|(k, _)| *k == key).map(|(_, rule)| rule)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
