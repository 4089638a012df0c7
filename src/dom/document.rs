use crate::dom::element::ElementNode;
use crate::error::{Result, TrackerError};
use scraper::{ElementRef, Html};

/// An owned DOM tree for a single catalog page
#[derive(Debug, Clone)]
pub struct Document {
    /// Root element of the tree
    pub root: ElementNode,
}

impl Document {
    /// Create a Document from an already-built root element
    pub fn new(root: ElementNode) -> Self {
        Self { root }
    }

    /// Parse an HTML string into an owned tree
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        Self::new(convert(parsed.root_element()))
    }

    /// Load a tree previously captured with [`Document::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let root: ElementNode = serde_json::from_str(json)
            .map_err(|e| TrackerError::DocumentParseFailed(e.to_string()))?;
        Ok(Self::new(root))
    }

    /// Serialize the tree to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root)
            .map_err(|e| TrackerError::SerializationFailed(e.to_string()))
    }

    /// Count total elements in the tree
    pub fn count_elements(&self) -> usize {
        self.root.count_subtree()
    }
}

/// Convert a parsed scraper element into an owned ElementNode.
///
/// Whitespace-only text runs are dropped. The first meaningful text run becomes
/// the element's own text; later runs become synthetic text children so that
/// rendered text keeps its document order.
fn convert(el: ElementRef) -> ElementNode {
    let value = el.value();
    let mut node = ElementNode::new(value.name());
    for (key, attr) in value.attrs() {
        node.add_attribute(key, attr);
    }

    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            let raw: &str = &text.text;
            if raw.trim().is_empty() {
                continue;
            }
            if node.children.is_empty() && node.text_content.is_none() {
                node.text_content = Some(raw.to_string());
            } else {
                node.add_child(ElementNode::text_node(raw));
            }
        } else if let Some(child_el) = ElementRef::wrap(child) {
            // Non-rendered subtrees contribute nothing to label or value text
            if matches!(child_el.value().name(), "script" | "style" | "noscript") {
                continue;
            }
            node.add_child(convert(child_el));
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rows() {
        let html = r#"
            <html><body>
                <div class="description_col1">Agency</div>
                <div class="description_col2">State Library</div>
            </body></html>
        "#;

        let doc = Document::parse(html);
        assert_eq!(doc.root.tag_name, "html");

        let body = doc
            .root
            .children
            .iter()
            .find(|c| c.is_tag("body"))
            .expect("body present");
        assert_eq!(body.children.len(), 2);
        assert!(body.children[0].has_class("description_col1"));
        assert_eq!(body.children[0].rendered_text(), "Agency");
        assert_eq!(body.children[1].rendered_text(), "State Library");
    }

    #[test]
    fn test_parse_drops_scripts_and_whitespace() {
        let html = r#"
            <html><body>
                <script>var x = 1;</script>
                <style>.a {}</style>
                <p>Hello</p>
            </body></html>
        "#;

        let doc = Document::parse(html);
        let body = doc
            .root
            .children
            .iter()
            .find(|c| c.is_tag("body"))
            .unwrap();
        assert_eq!(body.children.len(), 1);
        assert!(body.children[0].is_tag("p"));
    }

    #[test]
    fn test_parse_keeps_interleaved_text_order() {
        let html = "<html><body><div>Digital <span>Collection</span> Name</div></body></html>";

        let doc = Document::parse(html);
        let body = doc
            .root
            .children
            .iter()
            .find(|c| c.is_tag("body"))
            .unwrap();
        let cell = &body.children[0];
        assert_eq!(cell.rendered_text(), "Digital Collection Name");
    }

    #[test]
    fn test_json_round_trip() {
        let html = "<html><body><div class=\"description_col1\">Title</div></body></html>";
        let doc = Document::parse(html);

        let json = doc.to_json().unwrap();
        let restored = Document::from_json(&json).unwrap();
        assert_eq!(restored.root, doc.root);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Document::from_json("not json").is_err());
    }

    #[test]
    fn test_count_elements() {
        let html = "<html><body><p>One</p><p>Two</p></body></html>";
        let doc = Document::parse(html);
        // html + head + body + 2 * p
        assert_eq!(doc.count_elements(), 5);
    }
}
