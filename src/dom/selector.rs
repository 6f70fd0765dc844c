//! Compound selectors used to locate mount points.
//!
//! Supports one compound selector: an optional tag followed by any number of
//! `#id` and `.class` parts (`main`, `#app`, `section.report.wide`).
//! Combinators and attribute selectors are not supported.

use super::node::Node;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a compound selector. Returns `None` for empty or unsupported
    /// input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(|c: char| c.is_whitespace() || "[]>+~:*,".contains(c)) {
            return None;
        }

        let mut selector = Selector::default();
        let mut rest = input;

        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            selector.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                '.' => selector.classes.push(name.to_string()),
                _ => return None,
            }
            rest = &body[end..];
        }

        Some(selector)
    }

    pub fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if node.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }
}
