use crate::config::{Config, DEFAULT_POSTER_URL};
use crate::core::{EmbedDescriptor, Resolver};
use crate::element::{ElementHost, HintKind, HintSink, PrefetchRegistry};
use crate::error::{EmbedError, Result};
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub const ACTIVATED_CLASS: &str = "lyt-activated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Primed,
    Warmed,
    Activated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementEvent {
    Connected,
    PointerOver,
    Click,
}

/// Raw attributes as the host reads them off the element.
#[derive(Debug, Clone, Default)]
pub struct ElementAttributes {
    pub src: String,
    pub height: Option<String>,
    pub poster_url: Option<String>,
}

impl ElementAttributes {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_poster_url(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    /// Fills attributes the element left unset from `config`.
    pub fn with_defaults(mut self, config: &Config) -> Self {
        if self.poster_url.is_none() {
            self.poster_url = Some(config.default_poster_url.clone());
        }
        self
    }

    pub fn height_override(&self) -> Result<Option<u32>> {
        self.height.as_deref().map(parse_height).transpose()
    }
}

pub fn parse_height(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(height) if height > 0 => Ok(height),
        _ => Err(EmbedError::InvalidHeight {
            value: value.to_string(),
        }),
    }
}

/// One lazily activated embed.
///
/// Stages only move forward: `Idle -> Primed -> [Warmed ->] Activated`.
/// An element whose source matched no provider stays `Idle` for good.
pub struct LiteEmbed<E: ElementHost> {
    source_url: String,
    height_override: Option<u32>,
    poster_url: String,
    descriptor: Option<EmbedDescriptor>,
    stage: Stage,
    element: E,
    prefetch: PrefetchRegistry,
}

impl<E: ElementHost> LiteEmbed<E> {
    /// Resolves the source once and preloads the poster, whether or not a
    /// provider matched.
    pub fn new(
        attributes: ElementAttributes,
        element: E,
        resolver: &Resolver<'_>,
        prefetch: PrefetchRegistry,
        head: &mut dyn HintSink,
    ) -> Self {
        let height_override = attributes.height_override().unwrap_or_else(|e| {
            warn!("{}; falling back to provider default", e);
            None
        });
        let poster_url = attributes
            .poster_url
            .unwrap_or_else(|| DEFAULT_POSTER_URL.to_string());
        let descriptor = resolver
            .resolve(&attributes.src)
            .map(|descriptor| descriptor.with_height(height_override));

        prefetch.add_prefetch(head, HintKind::Preload, &poster_url, Some("image"));

        Self {
            source_url: attributes.src,
            height_override,
            poster_url,
            descriptor,
            stage: Stage::Idle,
            element,
            prefetch,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn height_override(&self) -> Option<u32> {
        self.height_override
    }

    pub fn poster_url(&self) -> &str {
        &self.poster_url
    }

    pub fn descriptor(&self) -> Option<&EmbedDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn is_inert(&self) -> bool {
        self.descriptor.is_none()
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    pub fn dispatch(&mut self, event: ElementEvent, head: &mut dyn HintSink) -> Stage {
        let Some(descriptor) = &self.descriptor else {
            debug!("Ignoring {:?} on inert element for {:?}", event, self.source_url);
            return self.stage;
        };

        let next = match (self.stage, event) {
            (Stage::Idle, ElementEvent::Connected) => {
                self.element.set_background_image(&self.poster_url);
                self.element.set_height(descriptor.height);
                self.element.append_play_button();
                Stage::Primed
            }
            (Stage::Primed, ElementEvent::PointerOver) => {
                let issued = self
                    .prefetch
                    .warm_connections(head, &descriptor.preconnect_targets);
                debug!("Issued {} preconnect hints for {}", issued, descriptor.provider);
                Stage::Warmed
            }
            (Stage::Primed | Stage::Warmed, ElementEvent::Click) => {
                let html = descriptor.render_markup(descriptor.height);
                self.element.insert_markup(&html);
                self.element.add_class(ACTIVATED_CLASS);
                Stage::Activated
            }
            (stage, event) => {
                debug!("Ignoring {:?} in stage {:?}", event, stage);
                stage
            }
        };

        if next != self.stage {
            debug!("{}: {:?} -> {:?}", self.source_url, self.stage, next);
            self.stage = next;
        }
        self.stage
    }

    /// Dispatches events from `events` until the sender side is dropped.
    pub async fn run(
        &mut self,
        head: &mut dyn HintSink,
        mut events: mpsc::UnboundedReceiver<ElementEvent>,
    ) -> Stage {
        while let Some(event) = events.recv().await {
            self.dispatch(event, head);
        }
        self.stage
    }
}
