use crate::element::HintSink;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Preload,
    Preconnect,
}

impl HintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HintKind::Preload => "preload",
            HintKind::Preconnect => "preconnect",
        }
    }
}

/// A `<link>` resource hint appended to the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHint {
    pub kind: HintKind,
    pub href: String,
    pub resource_type: Option<String>,
}

impl fmt::Display for LinkHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<link rel="{}" href="{}""#, self.kind.as_str(), self.href)?;
        if let Some(resource_type) = &self.resource_type {
            write!(f, r#" as="{}""#, resource_type)?;
        }
        f.write_str(r#" crossorigin="true">"#)
    }
}

/// Page-wide record of every URL a hint has been issued for. Clones share
/// the same set, so every element on a page should hold a clone of one
/// registry.
#[derive(Debug, Clone, Default)]
pub struct PrefetchRegistry {
    requested: Arc<Mutex<HashSet<String>>>,
}

impl PrefetchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the URL was not present before.
    pub fn insert_if_absent(&self, url: &str) -> bool {
        let mut requested = self.requested.lock().unwrap_or_else(|e| e.into_inner());
        requested.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        let requested = self.requested.lock().unwrap_or_else(|e| e.into_inner());
        requested.contains(url)
    }

    pub fn len(&self) -> usize {
        self.requested.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a hint for `url` unless one was already issued on this page.
    pub fn add_prefetch(
        &self,
        head: &mut dyn HintSink,
        kind: HintKind,
        url: &str,
        resource_type: Option<&str>,
    ) -> bool {
        if !self.insert_if_absent(url) {
            debug!("Skipping duplicate {} hint for {}", kind.as_str(), url);
            return false;
        }

        head.append_hint(LinkHint {
            kind,
            href: url.to_string(),
            resource_type: resource_type.map(str::to_string),
        });
        true
    }

    pub fn warm_connections(&self, head: &mut dyn HintSink, targets: &[String]) -> usize {
        targets
            .iter()
            .filter(|target| self.add_prefetch(head, HintKind::Preconnect, target, None))
            .count()
    }
}
