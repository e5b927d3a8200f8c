use anyhow::Result;
use lite_embed::config::{Config, DEFAULT_POSTER_URL};
use lite_embed::element::{
    ElementAttributes, ElementEvent, HintKind, LiteEmbed, PrefetchRegistry, RecordedElement, RecordedHead, Stage,
    ACTIVATED_CLASS,
};
use lite_embed::net::HttpWarmer;
use lite_embed::{Resolver, Rule, RuleRegistry};
use tokio::sync::mpsc;
use tokio_test::assert_ok;

#[tokio::test]
async fn test_every_provider_resolves() -> Result<()> {
    let resolver = Resolver::builtin();

    let test_cases = vec![
        ("https://v.qq.com/x/page/k0912abc.html", "qq", "vid=k0912abc"),
        ("https://v.youku.com/v_show/id_XMzk5.html?spm=a2h0k", "youku", "embed/XMzk5"),
        ("https://www.bilibili.com/video/av12345", "bilibili", "aid=12345"),
        ("https://vimeo.com/76979871", "vimeo", "video/76979871"),
        ("https://youtu.be/abc123", "youtube", "embed/abc123"),
        ("https://codepen.io/alice/pen/xyz", "codepen", "alice/embed/xyz"),
    ];

    for (url, provider, id) in test_cases {
        let descriptor = resolver
            .resolve(url)
            .ok_or_else(|| anyhow::anyhow!("{} did not resolve", url))?;
        assert_eq!(descriptor.provider, provider);
        assert_eq!(descriptor.source_url, url);
        assert!(descriptor.player_url.contains(id), "{} missing {}", descriptor.player_url, id);
        assert_eq!(descriptor.preconnect_targets, RuleRegistry::builtin().get(provider).unwrap().preconnect_targets);
    }

    Ok(())
}

#[tokio::test]
async fn test_youtube_query_parameters() -> Result<()> {
    let descriptor = Resolver::builtin()
        .resolve("https://www.youtube.com/watch?v=abc123&t=30&foo=bar")
        .unwrap();

    assert_eq!(descriptor.player_url, "https://www.youtube.com/embed/abc123?start=30");
    assert!(!descriptor.player_url.contains("foo"));

    Ok(())
}

#[tokio::test]
async fn test_absent_descriptors() -> Result<()> {
    let resolver = Resolver::builtin();

    assert!(resolver.resolve("").is_none());
    assert!(resolver.resolve("https://www.dailymotion.com/video/x7tgad0").is_none());

    Ok(())
}

#[tokio::test]
async fn test_custom_registry_priority() -> Result<()> {
    let narrow = Rule::new(r"https://cdn\.test/v/(\w+)", "https://narrow/<%= remote_id %>", "{{SRC}}", 100, &[])?;
    let broad = Rule::new(r"https://cdn\.test/(.*)", "https://broad/<%= remote_id %>", "{{SRC}}", 100, &[])?;
    let registry = RuleRegistry::new().with_rule("narrow", narrow).with_rule("broad", broad);
    let resolver = Resolver::new(&registry);

    assert_eq!(resolver.resolve("https://cdn.test/v/abc").unwrap().provider, "narrow");
    assert_eq!(resolver.resolve("https://cdn.test/other").unwrap().provider, "broad");

    Ok(())
}

#[tokio::test]
async fn test_bilibili_end_to_end() -> Result<()> {
    let mut head = RecordedHead::default();
    let resolver = Resolver::builtin();
    let mut embed = LiteEmbed::new(
        ElementAttributes::new("https://www.bilibili.com/video/av12345"),
        RecordedElement::default(),
        &resolver,
        PrefetchRegistry::new(),
        &mut head,
    );

    let descriptor = embed.descriptor().cloned().unwrap();
    assert_eq!(descriptor.height, 498);

    embed.dispatch(ElementEvent::Connected, &mut head);
    embed.dispatch(ElementEvent::Click, &mut head);

    let element = embed.into_element();
    let html = element.inner_html();
    assert!(html.contains(r#"height="498""#));
    assert!(html.contains(&format!(r#"src="{}""#, descriptor.player_url)));
    assert!(element.has_class(ACTIVATED_CLASS));
    assert_eq!(element.height, Some(498));

    Ok(())
}

#[tokio::test]
async fn test_shared_registry_across_elements() -> Result<()> {
    let mut head = RecordedHead::default();
    let resolver = Resolver::builtin();
    let prefetch = PrefetchRegistry::new();

    let mut first = LiteEmbed::new(
        ElementAttributes::new("https://youtu.be/first"),
        RecordedElement::default(),
        &resolver,
        prefetch.clone(),
        &mut head,
    );
    let mut second = LiteEmbed::new(
        ElementAttributes::new("https://youtu.be/second"),
        RecordedElement::default(),
        &resolver,
        prefetch.clone(),
        &mut head,
    );

    for embed in [&mut first, &mut second] {
        embed.dispatch(ElementEvent::Connected, &mut head);
        embed.dispatch(ElementEvent::PointerOver, &mut head);
    }

    // One poster preload and the four YouTube origins, each issued once.
    assert_eq!(head.hints.len(), 5);
    assert_eq!(head.hints.iter().filter(|h| h.kind == HintKind::Preload).count(), 1);
    assert_eq!(head.hints[0].href, DEFAULT_POSTER_URL);
    assert_eq!(prefetch.len(), 5);

    Ok(())
}

#[tokio::test]
async fn test_event_loop_drives_lifecycle() -> Result<()> {
    let config = Config {
        warm_connections: false,
        ..Config::default()
    };
    let mut head = HttpWarmer::new(&config)?;
    let resolver = Resolver::builtin();
    let mut embed = LiteEmbed::new(
        ElementAttributes::new("https://vimeo.com/76979871").with_height("400"),
        RecordedElement::default(),
        &resolver,
        PrefetchRegistry::new(),
        &mut head,
    );

    let (events, receiver) = mpsc::unbounded_channel();
    for event in [
        ElementEvent::Connected,
        ElementEvent::PointerOver,
        ElementEvent::PointerOver,
        ElementEvent::Click,
        ElementEvent::Click,
    ] {
        assert_ok!(events.send(event));
    }
    drop(events);

    let stage = embed.run(&mut head, receiver).await;
    head.flush().await;

    assert_eq!(stage, Stage::Activated);
    assert_eq!(head.hints().len(), 4);
    assert_eq!(embed.element().inner_html().matches("<iframe").count(), 1);
    assert!(embed.element().inner_html().contains(r#"height="400""#));

    Ok(())
}

#[tokio::test]
async fn test_config_file_loading() -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new()?;
    writeln!(file, "default_poster_url = \"https://img.test/poster.jpg\"")?;
    writeln!(file, "timeout = 5")?;

    let config = assert_ok!(Config::load(Some(file.path())));
    assert_eq!(config.default_poster_url, "https://img.test/poster.jpg");
    assert_eq!(config.timeout, 5);
    assert!(config.warm_connections);

    assert!(Config::load(Some(std::path::Path::new("/nonexistent/lite-embed.toml"))).is_err());

    Ok(())
}
