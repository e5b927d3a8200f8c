use crate::error::Result;
use regex::Regex;

/// Turns the capture groups of a matched pattern into the identifier that
/// fills the embed template.
#[derive(Clone, Copy)]
pub enum IdExtractor {
    FirstCapture,
    Custom(fn(&[&str]) -> String),
}

impl IdExtractor {
    pub fn extract(&self, captures: &[&str]) -> String {
        match self {
            IdExtractor::FirstCapture => captures.first().map(|s| s.to_string()).unwrap_or_default(),
            IdExtractor::Custom(extract) => extract(captures),
        }
    }
}

impl std::fmt::Debug for IdExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdExtractor::FirstCapture => f.write_str("FirstCapture"),
            IdExtractor::Custom(_) => f.write_str("Custom"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    pub embed_template: String,
    pub markup_template: String,
    pub default_height: u32,
    pub preconnect_targets: Vec<String>,
    pub id_extractor: IdExtractor,
}

impl Rule {
    pub fn new(
        pattern: &str,
        embed_template: &str,
        markup_template: &str,
        default_height: u32,
        preconnect_targets: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            embed_template: embed_template.to_string(),
            markup_template: markup_template.to_string(),
            default_height,
            preconnect_targets: preconnect_targets.iter().map(|s| s.to_string()).collect(),
            id_extractor: IdExtractor::FirstCapture,
        })
    }

    pub fn with_id_extractor(mut self, extract: fn(&[&str]) -> String) -> Self {
        self.id_extractor = IdExtractor::Custom(extract);
        self
    }

    /// Runs the pattern and, on a match, returns the extracted identifier.
    /// Groups that did not participate in the match are passed as empty strings.
    pub fn identify(&self, url: &str) -> Option<String> {
        let captures = self.pattern.captures(url)?;
        let groups: Vec<&str> = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect();

        Some(self.id_extractor.extract(&groups))
    }
}
