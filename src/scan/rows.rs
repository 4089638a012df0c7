use crate::dom::{Document, ElementNode};

/// A candidate label/value pair yielded by a row-selection strategy
#[derive(Debug, Clone, Copy)]
pub struct CandidateRow<'a> {
    /// Node rendering the field's name
    pub label: &'a ElementNode,

    /// Node rendering the field's value, when the expected structure is present
    pub value: Option<&'a ElementNode>,
}

/// Capability: yield label/value candidate pairs from a tree, in document order.
///
/// Catalog templates expose field rows in different shapes; each shape is a
/// selection strategy chosen by configuration rather than a parallel code path.
pub trait RowSelector {
    /// Collect all candidate pairs from the document
    fn candidates<'a>(&self, document: &'a Document) -> Vec<CandidateRow<'a>>;
}

/// Selects label nodes carrying a marker class; the value node is the label's
/// next sibling element
#[derive(Debug, Clone)]
pub struct ClassMarkerRows {
    class: String,
}

impl ClassMarkerRows {
    /// Create a selector for the given marker class
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into() }
    }
}

impl RowSelector for ClassMarkerRows {
    fn candidates<'a>(&self, document: &'a Document) -> Vec<CandidateRow<'a>> {
        let mut out = Vec::new();
        collect_class_marked(&document.root, &self.class, &mut out);
        out
    }
}

fn collect_class_marked<'a>(
    node: &'a ElementNode,
    class: &str,
    out: &mut Vec<CandidateRow<'a>>,
) {
    for (i, child) in node.children.iter().enumerate() {
        if child.has_class(class) {
            // nextElementSibling semantics: text runs between elements don't count
            let value = node.children[i + 1..].iter().find(|c| !c.is_text_node());
            out.push(CandidateRow { label: child, value });
        }
        collect_class_marked(child, class, out);
    }
}

/// Selects `<tr>` rows; label and value nodes are the cells at fixed child
/// indices
#[derive(Debug, Clone)]
pub struct TableRows {
    label_cell: usize,
    value_cell: usize,
}

impl TableRows {
    /// Create a selector with explicit label/value cell positions
    pub fn new(label_cell: usize, value_cell: usize) -> Self {
        Self { label_cell, value_cell }
    }
}

impl Default for TableRows {
    fn default() -> Self {
        Self { label_cell: 0, value_cell: 1 }
    }
}

impl RowSelector for TableRows {
    fn candidates<'a>(&self, document: &'a Document) -> Vec<CandidateRow<'a>> {
        let mut out = Vec::new();
        collect_table_rows(&document.root, self.label_cell, self.value_cell, &mut out);
        out
    }
}

fn collect_table_rows<'a>(
    node: &'a ElementNode,
    label_cell: usize,
    value_cell: usize,
    out: &mut Vec<CandidateRow<'a>>,
) {
    if node.is_tag("tr") {
        let cells: Vec<&ElementNode> =
            node.children.iter().filter(|c| !c.is_text_node()).collect();
        if let Some(label) = cells.get(label_cell) {
            out.push(CandidateRow {
                label,
                value: cells.get(value_cell).copied(),
            });
        }
    }
    for child in &node.children {
        collect_table_rows(child, label_cell, value_cell, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_div(class: &str, text: &str) -> ElementNode {
        ElementNode::new("div").with_class(class).with_text(text)
    }

    #[test]
    fn test_class_marker_pairs_with_next_sibling() {
        let mut body = ElementNode::new("body");
        body.add_child(labeled_div("description_col1", "Agency"));
        body.add_child(labeled_div("description_col2", "State Library"));
        body.add_child(labeled_div("description_col1", "Title"));
        body.add_child(labeled_div("description_col2", "Annual Report"));
        let doc = Document::new(body);

        let selector = ClassMarkerRows::new("description_col1");
        let candidates = selector.candidates(&doc);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].label.rendered_text(), "Agency");
        assert_eq!(
            candidates[0].value.unwrap().rendered_text(),
            "State Library"
        );
        assert_eq!(candidates[1].label.rendered_text(), "Title");
        assert_eq!(
            candidates[1].value.unwrap().rendered_text(),
            "Annual Report"
        );
    }

    #[test]
    fn test_class_marker_skips_text_runs_between_siblings() {
        let mut body = ElementNode::new("body");
        body.add_child(labeled_div("description_col1", "Agency"));
        body.add_child(ElementNode::text_node("  "));
        body.add_child(labeled_div("description_col2", "State Library"));
        let doc = Document::new(body);

        let candidates = ClassMarkerRows::new("description_col1").candidates(&doc);
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].value.unwrap().rendered_text(),
            "State Library"
        );
    }

    #[test]
    fn test_class_marker_last_child_has_no_value() {
        let mut body = ElementNode::new("body");
        body.add_child(labeled_div("description_col1", "Agency"));
        let doc = Document::new(body);

        let candidates = ClassMarkerRows::new("description_col1").candidates(&doc);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].value.is_none());
    }

    #[test]
    fn test_table_rows_fixed_cells() {
        let mut table = ElementNode::new("table");
        let mut row = ElementNode::new("tr");
        row.add_child(ElementNode::new("td").with_text("Digital Collection"));
        row.add_child(ElementNode::new("td").with_text("NC Maps"));
        table.add_child(row);
        let doc = Document::new(table);

        let candidates = TableRows::default().candidates(&doc);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label.rendered_text(), "Digital Collection");
        assert_eq!(candidates[0].value.unwrap().rendered_text(), "NC Maps");
    }

    #[test]
    fn test_table_rows_missing_value_cell() {
        let mut table = ElementNode::new("table");
        let mut row = ElementNode::new("tr");
        row.add_child(ElementNode::new("td").with_text("Agency"));
        table.add_child(row);
        let doc = Document::new(table);

        let candidates = TableRows::default().candidates(&doc);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].value.is_none());
    }

    #[test]
    fn test_table_rows_missing_label_cell_yields_nothing() {
        let mut table = ElementNode::new("table");
        table.add_child(ElementNode::new("tr"));
        let doc = Document::new(table);

        let candidates = TableRows::default().candidates(&doc);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_table_rows_document_order_across_nested_tables() {
        let mut outer = ElementNode::new("table");
        let mut row1 = ElementNode::new("tr");
        row1.add_child(ElementNode::new("td").with_text("First"));
        row1.add_child(ElementNode::new("td").with_text("1"));
        let mut row2 = ElementNode::new("tr");
        row2.add_child(ElementNode::new("td").with_text("Second"));
        row2.add_child(ElementNode::new("td").with_text("2"));
        outer.add_child(row1);
        outer.add_child(row2);
        let doc = Document::new(outer);

        let candidates = TableRows::default().candidates(&doc);
        let labels: Vec<String> = candidates
            .iter()
            .map(|c| c.label.rendered_text())
            .collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }
}
