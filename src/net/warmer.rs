use crate::config::Config;
use crate::element::{HintKind, HintSink, LinkHint};
use crate::error::Result;
use futures::future::join_all;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

/// Hint sink that records every hint and, when warming is enabled, makes a
/// fire-and-forget request for it: `HEAD` for preconnects, `GET` for preloads.
pub struct HttpWarmer {
    client: reqwest::Client,
    enabled: bool,
    hints: Vec<LinkHint>,
    pending: Vec<JoinHandle<()>>,
}

impl HttpWarmer {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            enabled: config.warm_connections,
            hints: Vec::new(),
            pending: Vec::new(),
        })
    }

    pub fn hints(&self) -> &[LinkHint] {
        &self.hints
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Waits for every outstanding warm-up request.
    pub async fn flush(&mut self) {
        for result in join_all(self.pending.drain(..)).await {
            if let Err(e) = result {
                warn!("Warm-up task failed: {}", e);
            }
        }
    }

    fn spawn_request(&mut self, hint: &LinkHint) {
        let url = match Url::parse(&hint.href) {
            Ok(url) => url,
            Err(e) => {
                warn!("Not warming invalid URL {:?}: {}", hint.href, e);
                return;
            }
        };

        if tokio::runtime::Handle::try_current().is_err() {
            debug!("No runtime available, recording {} without warming", url);
            return;
        }

        let request = match hint.kind {
            HintKind::Preconnect => self.client.head(url.clone()),
            HintKind::Preload => self.client.get(url.clone()),
        };
        let kind = hint.kind;

        self.pending.push(tokio::spawn(async move {
            match request.send().await {
                Ok(response) => debug!("{} {} -> {}", kind.as_str(), url, response.status()),
                Err(e) => warn!("{} {} failed: {}", kind.as_str(), url, e),
            }
        }));
    }
}

impl HintSink for HttpWarmer {
    fn append_hint(&mut self, hint: LinkHint) {
        if self.enabled {
            self.spawn_request(&hint);
        }
        self.hints.push(hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> Config {
        Config {
            warm_connections: false,
            ..Config::default()
        }
    }

    fn hint(href: &str) -> LinkHint {
        LinkHint {
            kind: HintKind::Preconnect,
            href: href.to_string(),
            resource_type: None,
        }
    }

    #[tokio::test]
    async fn test_disabled_warmer_only_records() {
        let mut warmer = HttpWarmer::new(&offline_config()).unwrap();
        warmer.append_hint(hint("https://www.youtube.com"));

        assert_eq!(warmer.hints().len(), 1);
        assert_eq!(warmer.pending(), 0);
        warmer.flush().await;
    }

    #[tokio::test]
    async fn test_invalid_url_is_recorded_but_not_requested() {
        let mut warmer = HttpWarmer::new(&Config::default()).unwrap();
        warmer.append_hint(hint("not a url"));

        assert_eq!(warmer.hints().len(), 1);
        assert_eq!(warmer.pending(), 0);
    }

    #[test]
    fn test_no_runtime_records_without_spawning() {
        let mut warmer = HttpWarmer::new(&Config::default()).unwrap();
        warmer.append_hint(hint("https://www.youtube.com"));

        assert_eq!(warmer.hints().len(), 1);
        assert_eq!(warmer.pending(), 0);
    }
}
