//! DOM tree representation for catalog pages
//!
//! This module provides the owned tree the field scan runs against. It includes:
//! - ElementNode: representation of a rendered DOM element
//! - Document: a full page tree, built from an HTML string or a JSON capture

pub mod document;
pub mod element;

pub use document::Document;
pub use element::{ElementNode, TEXT_NODE_TAG};
