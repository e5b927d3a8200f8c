//! Built-in provider rules.
//!
//! Registration order is match priority: the first rule whose pattern
//! matches a URL decides the provider.

mod codepen;
mod youtube;

use crate::core::{Rule, RuleRegistry};

pub use codepen::codepen_id;
pub use youtube::youtube_id;

const FRAME_MARKUP: &str = r#"<iframe scrolling='no' frameborder='no' allowtransparency='true' allowfullscreen='true' style='width: 100%;' height="{{HEIGHT}}" src="{{SRC}}"></iframe>"#;

fn rule(pattern: &str, embed_template: &str, markup: &str, height: u32, preconnects: &[&str]) -> Rule {
    Rule::new(pattern, embed_template, markup, height, preconnects)
        .expect("built-in provider pattern must compile")
}

pub fn builtin_registry() -> RuleRegistry {
    RuleRegistry::new()
        .with_rule(
            "qq",
            rule(
                r"https?://v\.qq\.com/x/(?:page|cover)/(?:[^/]+/)?((?-u:\w)+)\.html",
                "https://v.qq.com/txp/iframe/player.html?vid=<%= remote_id %>",
                FRAME_MARKUP,
                300,
                &["https://v.qq.com", "https://vm.gtimg.cn", "https://btrace.video.qq.com"],
            ),
        )
        .with_rule(
            "youku",
            rule(
                r"https?://v\.youku\.com/v_show/id_([^.]+)\.html?",
                "http://player.youku.com/embed/<%= remote_id %>",
                FRAME_MARKUP,
                498,
                &["http://player.youku.com", "https://api.youku.com", "http://g.alicdn.com"],
            ),
        )
        .with_rule(
            "bilibili",
            rule(
                r"https?://www\.bilibili\.com/video/av([0-9]+)",
                "https://player.bilibili.com/player.html?aid=<%= remote_id %>&page=1",
                FRAME_MARKUP,
                498,
                &["https://player.bilibili.com", "https://api.bilibili.com", "https://s1.hdslb.com"],
            ),
        )
        .with_rule(
            "vimeo",
            rule(
                r"(?:https?://)?(?:www\.)?vimeo\.co(?:.+/([^/][0-9]+)(?:#t=[0-9]+)?s?$)",
                "https://player.vimeo.com/video/<%= remote_id %>?title=0&byline=0",
                r#"<iframe style="width:100%;" height="{{HEIGHT}}" src="{{SRC}}" frameborder="0"></iframe>"#,
                320,
                &["https://player.vimeo.com", "https://i.vimeocdn.com", "https://f.vimeocdn.com"],
            ),
        )
        .with_rule(
            "youtube",
            rule(
                r"(?:https?://)?(?:www\.)?(?:youtu\.be/|youtube\.com/(?:v/|u/(?-u:\w)/|embed/|watch))(?:(?:\?v=)?([^#&?=]*))?((?:[?&](?-u:\w)*=(?-u:\w)*)*)",
                "https://www.youtube.com/embed/<%= remote_id %>",
                r#"<iframe style="width:100%;" height="{{HEIGHT}}" src="{{SRC}}" frameborder="0" allowfullscreen></iframe>"#,
                320,
                &[
                    "https://www.youtube.com",
                    "https://www.google.com",
                    "https://googleads.g.doubleclick.net",
                    "https://static.doubleclick.net",
                ],
            )
            .with_id_extractor(youtube_id),
        )
        .with_rule(
            "codepen",
            rule(
                r"https?://codepen\.io/([^/?&]*)/pen/([^/?&]*)",
                "https://codepen.io/<%= remote_id %>?height=300&theme-id=0&default-tab=css,result&embed-version=2",
                FRAME_MARKUP,
                300,
                &["https://codepen.io", "https://static.codepen.io", "https://fonts.googleapis.com"],
            )
            .with_id_extractor(codepen_id),
        )
}
