//! Report view model for due-diligence sections
//!
//! Converts the raw `due_diligence` payload into render state: one
//! collapsible section per mapping entry, in server order, plus the minimal
//! HTML-to-text extraction used to display section bodies natively.

use serde_json::Value;

/// Rendered state of the report area
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReportView {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// One collapsible block per section, in server order
    Sections(Vec<Section>),
    /// The payload was present but not a section mapping
    InvalidData,
}

/// One titled, collapsible report section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// Raw HTML content as returned by the backend
    pub body: String,
    /// Collapsed initially; toggled per block, reset on every full render
    pub expanded: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Build sections from the `due_diligence` payload value.
///
/// Returns `None` when the value is not an object. Object entries keep the
/// order produced by the server, which is also the display order. Section
/// bodies that are not strings render via their JSON form.
pub fn sections_from_value(value: &Value) -> Option<Vec<Section>> {
    let map = value.as_object()?;
    Some(
        map.iter()
            .map(|(title, content)| {
                let body = match content.as_str() {
                    Some(s) => s.to_string(),
                    None => content.to_string(),
                };
                Section::new(title.clone(), body)
            })
            .collect(),
    )
}

// =============================================================================
// HTML Block Extraction
// =============================================================================

/// Display category of one extracted block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `<h1>` report title
    Heading,
    /// `<h2>` / `<h3>` section heading
    Subheading,
    /// `<p>` or bare text
    Paragraph,
}

/// One displayable text block extracted from a section body
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlBlock {
    pub kind: BlockKind,
    pub text: String,
}

/// Extract displayable text blocks from a section's HTML string.
///
/// The backend emits simple documents (`h1`/`h2`/`p`, sometimes wrapped in a
/// full page with a `<style>` head), so this walks tags rather than building
/// a DOM. Headings and paragraphs become blocks while `<style>`/`<script>`/
/// `<head>` bodies are dropped; text is entity-decoded with whitespace
/// collapsed. A body with no markup comes back as a single paragraph.
pub fn html_blocks(html: &str) -> Vec<HtmlBlock> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut kind = BlockKind::Paragraph;
    // Name of the tag whose body is currently being skipped
    let mut skipping: Option<String> = None;

    let mut rest = html;
    while let Some(lt) = rest.find('<') {
        let (before, after) = rest.split_at(lt);
        if skipping.is_none() {
            current.push_str(before);
        }

        let Some(gt) = after.find('>') else {
            // Unterminated tag, treat the remainder as text
            if skipping.is_none() {
                current.push_str(after);
            }
            rest = "";
            break;
        };
        let tag = &after[1..gt];
        rest = &after[gt + 1..];

        let name = tag_name(tag);
        let closing = tag.starts_with('/');

        if let Some(skip_tag) = &skipping {
            if closing && &name == skip_tag {
                skipping = None;
            }
            continue;
        }

        match (closing, name.as_str()) {
            (false, "style") | (false, "script") | (false, "head") => {
                flush(&mut blocks, &mut current, kind);
                skipping = Some(name);
            }
            (false, "h1") => {
                flush(&mut blocks, &mut current, kind);
                kind = BlockKind::Heading;
            }
            (false, "h2") | (false, "h3") => {
                flush(&mut blocks, &mut current, kind);
                kind = BlockKind::Subheading;
            }
            (false, "p") => {
                flush(&mut blocks, &mut current, kind);
                kind = BlockKind::Paragraph;
            }
            (true, "h1") | (true, "h2") | (true, "h3") | (true, "p") | (true, "body")
            | (true, "html") | (false, "br") => {
                flush(&mut blocks, &mut current, kind);
                kind = BlockKind::Paragraph;
            }
            // Unknown and inline tags contribute nothing themselves
            _ => {}
        }
    }

    if skipping.is_none() {
        current.push_str(rest);
    }
    flush(&mut blocks, &mut current, kind);
    blocks
}

fn flush(blocks: &mut Vec<HtmlBlock>, current: &mut String, kind: BlockKind) {
    let text = collapse_whitespace(&decode_entities(current));
    current.clear();
    if !text.is_empty() {
        blocks.push(HtmlBlock { kind, text });
    }
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Decode the entities the backend actually produces; `&amp;` last so the
/// others are not double-decoded.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
