//! Content block model — the unit of rendered page output.
//!
//! Blocks are plain data. The composer produces them, the HTML renderer and
//! the JSON API consume them. Nothing here knows about HTTP.

use serde::Serialize;

/// A run of inline text inside a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Strong { text: String },
    Link { label: String, url: String },
}

pub fn text(s: impl Into<String>) -> Inline {
    Inline::Text { text: s.into() }
}

pub fn strong(s: impl Into<String>) -> Inline {
    Inline::Strong { text: s.into() }
}

pub fn link(label: impl Into<String>, url: impl Into<String>) -> Inline {
    Inline::Link {
        label: label.into(),
        url: url.into(),
    }
}

/// Which loaded image an `Image` block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    Profile,
    Testimonial,
}

impl ImageRef {
    /// Route the image is served from.
    pub fn href(self) -> &'static str {
        match self {
            ImageRef::Profile => "/images/profile",
            ImageRef::Testimonial => "/images/testimonial",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Page-level title (the person's name on Home).
    Title { text: String },
    Heading { level: u8, text: String },
    Paragraph { spans: Vec<Inline> },
    BulletList {
        marker: Option<String>,
        items: Vec<Vec<Inline>>,
    },
    Divider,
    Spacer,
    Image {
        image: ImageRef,
        width: u32,
        caption: Option<String>,
    },
    DownloadButton {
        label: String,
        file_name: String,
        mime: String,
        href: String,
    },
    Link { label: String, url: String },
    /// Side-by-side columns; `weights[i]` is the relative width of `columns[i]`.
    Columns {
        weights: Vec<u32>,
        columns: Vec<Vec<ContentBlock>>,
    },
    /// Third-party HTML passed through untouched.
    EmbeddedHtml { html: String, height: u32 },
}

impl ContentBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(spans: Vec<Inline>) -> Self {
        ContentBlock::Paragraph { spans }
    }

    /// Paragraph holding a single plain-text run.
    pub fn plain(s: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            spans: vec![text(s)],
        }
    }

    pub fn bullets<I, S>(marker: Option<&str>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::BulletList {
            marker: marker.map(str::to_string),
            items: items.into_iter().map(|s| vec![text(s)]).collect(),
        }
    }

    /// Equal-width columns.
    pub fn columns(columns: Vec<Vec<ContentBlock>>) -> Self {
        ContentBlock::Columns {
            weights: vec![1; columns.len()],
            columns,
        }
    }

    /// Depth-first traversal over this block and every nested block.
    #[cfg(test)]
    pub fn walk(&self) -> Vec<&ContentBlock> {
        let mut out = vec![self];
        if let ContentBlock::Columns { columns, .. } = self {
            for block in columns.iter().flatten() {
                out.extend(block.walk());
            }
        }
        out
    }
}

/// Flattens a block sequence, descending into columns.
#[cfg(test)]
pub fn flatten(blocks: &[ContentBlock]) -> Vec<&ContentBlock> {
    blocks.iter().flat_map(ContentBlock::walk).collect()
}

/// Concatenated visible text of a block sequence, for searching.
#[cfg(test)]
pub fn plain_text(blocks: &[ContentBlock]) -> String {
    fn spans(out: &mut Vec<String>, spans: &[Inline]) {
        for span in spans {
            match span {
                Inline::Text { text } | Inline::Strong { text } => out.push(text.clone()),
                Inline::Link { label, .. } => out.push(label.clone()),
            }
        }
    }

    let mut out = Vec::new();
    for block in flatten(blocks) {
        match block {
            ContentBlock::Title { text } | ContentBlock::Heading { text, .. } => {
                out.push(text.clone())
            }
            ContentBlock::Paragraph { spans: s } => spans(&mut out, s),
            ContentBlock::BulletList { items, .. } => {
                for item in items {
                    spans(&mut out, item);
                }
            }
            ContentBlock::Image {
                caption: Some(caption),
                ..
            } => out.push(caption.clone()),
            ContentBlock::DownloadButton { label, .. } | ContentBlock::Link { label, .. } => {
                out.push(label.clone())
            }
            _ => {}
        }
    }
    out.join(" ")
}
