//! Capabilities the lifecycle needs from whatever renders the element.

use crate::element::LinkHint;

/// The page area resource hints are appended to.
pub trait HintSink {
    fn append_hint(&mut self, hint: LinkHint);
}

pub trait ElementHost {
    fn set_background_image(&mut self, url: &str);
    fn set_height(&mut self, px: u32);
    fn append_play_button(&mut self);
    /// Appends raw markup after the existing children.
    fn insert_markup(&mut self, html: &str);
    fn add_class(&mut self, class: &str);
}

#[derive(Debug, Clone, Default)]
pub struct RecordedHead {
    pub hints: Vec<LinkHint>,
}

impl HintSink for RecordedHead {
    fn append_hint(&mut self, hint: LinkHint) {
        self.hints.push(hint);
    }
}

/// In-memory element used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedElement {
    pub background_image: Option<String>,
    pub height: Option<u32>,
    pub children: Vec<String>,
    pub classes: Vec<String>,
}

impl RecordedElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn inner_html(&self) -> String {
        self.children.concat()
    }

    pub fn to_html(&self) -> String {
        let mut style = Vec::new();
        if let Some(url) = &self.background_image {
            style.push(format!("background-image: url(&quot;{}&quot;)", url));
        }
        if let Some(height) = self.height {
            style.push(format!("height: {}px", height));
        }

        let mut html = String::from("<lite-embed");
        if !self.classes.is_empty() {
            html.push_str(&format!(r#" class="{}""#, self.classes.join(" ")));
        }
        if !style.is_empty() {
            html.push_str(&format!(r#" style="{}""#, style.join("; ")));
        }
        html.push('>');
        html.push_str(&self.inner_html());
        html.push_str("</lite-embed>");
        html
    }
}

impl ElementHost for RecordedElement {
    fn set_background_image(&mut self, url: &str) {
        self.background_image = Some(url.to_string());
    }

    fn set_height(&mut self, px: u32) {
        self.height = Some(px);
    }

    fn append_play_button(&mut self) {
        self.children.push(r#"<div class="lte-playbtn"></div>"#.to_string());
    }

    fn insert_markup(&mut self, html: &str) {
        self.children.push(html.to_string());
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}
