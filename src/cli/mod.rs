use crate::config::Config;
use crate::core::{RuleRegistry, Resolver};
use crate::element::{parse_height, ElementAttributes, ElementEvent, LiteEmbed, PrefetchRegistry, RecordedElement};
use crate::net::HttpWarmer;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "lite-embed")]
#[command(about = "Resolve video URLs into lazily activated embeds")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the embed descriptor for a URL
    Resolve {
        #[arg(value_name = "URL")]
        url: String,

        /// Height override in pixels
        #[arg(long)]
        height: Option<String>,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate an element from construction to activation
    Render {
        #[arg(value_name = "URL")]
        url: String,

        /// Height override in pixels
        #[arg(long)]
        height: Option<String>,

        /// Poster image shown before activation
        #[arg(long)]
        poster_url: Option<String>,

        /// Hover the element before clicking it
        #[arg(long)]
        hover: bool,

        /// Record hints without contacting any origin
        #[arg(long)]
        no_warm: bool,
    },
    /// List built-in providers in match order
    Providers,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Command::Resolve { url, height, json } => self.resolve(url, height.as_deref(), *json),
            Command::Render {
                url,
                height,
                poster_url,
                hover,
                no_warm,
            } => {
                let mut config = config;
                if *no_warm {
                    config.warm_connections = false;
                }
                let attributes = ElementAttributes {
                    src: url.clone(),
                    height: height.clone(),
                    poster_url: poster_url.clone(),
                }
                .with_defaults(&config);
                self.render(&config, attributes, *hover).await
            }
            Command::Providers => {
                self.providers();
                Ok(())
            }
        }
    }

    fn resolve(&self, url: &str, height: Option<&str>, json: bool) -> Result<()> {
        let height = height.map(parse_height).transpose()?;
        let descriptor = Resolver::builtin()
            .resolve(url)
            .ok_or_else(|| anyhow::anyhow!("No provider matches URL: {}", url))?
            .with_height(height);

        if json {
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
            return Ok(());
        }

        println!("Provider: {}", descriptor.provider);
        println!("Source: {}", descriptor.source_url);
        println!("Player: {}", descriptor.player_url);
        println!("Height: {}", descriptor.height);
        println!("Preconnect: {}", descriptor.preconnect_targets.join(", "));
        if self.verbose {
            println!("Markup: {}", descriptor.render_markup(descriptor.height));
        }

        Ok(())
    }

    async fn render(&self, config: &Config, attributes: ElementAttributes, hover: bool) -> Result<()> {
        let mut head = HttpWarmer::new(config)?;
        let resolver = Resolver::builtin();
        let mut embed = LiteEmbed::new(
            attributes,
            RecordedElement::default(),
            &resolver,
            PrefetchRegistry::new(),
            &mut head,
        );

        if embed.is_inert() {
            println!("No provider matches {}; element stays inert", embed.source_url());
        }

        let (events, receiver) = mpsc::unbounded_channel();
        events.send(ElementEvent::Connected)?;
        if hover {
            events.send(ElementEvent::PointerOver)?;
        }
        events.send(ElementEvent::Click)?;
        drop(events);

        let stage = embed.run(&mut head, receiver).await;
        head.flush().await;

        println!("Stage: {:?}", stage);
        println!("Hints:");
        for hint in head.hints() {
            println!("  {}", hint);
        }
        println!("Element:");
        println!("  {}", embed.element().to_html());

        Ok(())
    }

    fn providers(&self) {
        for (key, rule) in RuleRegistry::builtin().iter() {
            println!("{} (height {})", key, rule.default_height);
            if self.verbose {
                println!("  pattern: {}", rule.pattern.as_str());
            }
            for target in &rule.preconnect_targets {
                println!("  preconnect {}", target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::try_parse_from(["lite-embed", "render", "https://youtu.be/abc123", "--hover", "--no-warm"]).unwrap();
        match cli.command {
            Command::Render { url, hover, no_warm, height, .. } => {
                assert_eq!(url, "https://youtu.be/abc123");
                assert!(hover);
                assert!(no_warm);
                assert!(height.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lite-embed", "providers", "-v", "--config", "embed.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("embed.toml")));
    }
}
