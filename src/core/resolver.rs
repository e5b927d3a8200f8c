use crate::core::RuleRegistry;
use crate::utils::{expand_embed_url, expand_markup};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Everything needed to render a player for one source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDescriptor {
    pub provider: String,
    pub source_url: String,
    pub height: u32,
    pub player_url: String,
    /// Unexpanded markup template; fields are bound at activation time.
    pub markup: String,
    pub preconnect_targets: Vec<String>,
}

impl EmbedDescriptor {
    pub fn with_height(mut self, height: Option<u32>) -> Self {
        if let Some(height) = height {
            self.height = height;
        }
        self
    }

    /// Field set the markup template is expanded against.
    pub fn fields(&self, height: u32) -> HashMap<&'static str, String> {
        HashMap::from([
            ("site", self.provider.clone()),
            ("provider", self.provider.clone()),
            ("source", self.source_url.clone()),
            ("height", height.to_string()),
            ("embed", self.player_url.clone()),
            ("src", self.player_url.clone()),
        ])
    }

    pub fn render_markup(&self, height: u32) -> String {
        expand_markup(&self.markup, &self.fields(height))
    }
}

pub struct Resolver<'a> {
    registry: &'a RuleRegistry,
}

impl Resolver<'static> {
    pub fn builtin() -> Self {
        Self::new(RuleRegistry::builtin())
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        self.registry
    }

    /// First rule in registry order whose pattern matches wins.
    pub fn resolve(&self, url: &str) -> Option<EmbedDescriptor> {
        if url.is_empty() {
            return None;
        }

        for (key, rule) in self.registry.iter() {
            if let Some(id) = rule.identify(url) {
                debug!("{} matched provider {} with id {:?}", url, key, id);
                return Some(EmbedDescriptor {
                    provider: key.to_string(),
                    source_url: url.to_string(),
                    height: rule.default_height,
                    player_url: expand_embed_url(&rule.embed_template, &id),
                    markup: rule.markup_template.clone(),
                    preconnect_targets: rule.preconnect_targets.clone(),
                });
            }
        }

        debug!("No provider matched {}", url);
        None
    }
}
