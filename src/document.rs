//! Parsed HTML input.
//!
//! The extractor only needs two capabilities from a document node: finding
//! descendants by tag name and reading their text. [`Node`] captures exactly
//! that, and is implemented for `scraper`'s [`ElementRef`] so any parsed
//! [`Html`] tree can be fed in directly.
//!
//! # Example
//!
//! ```rust
//! use tablescrape::document::{HtmlDocument, Node};
//!
//! let doc = HtmlDocument::parse("<table><tr><th>Name</th></tr></table>");
//! let cells = doc.root().find_all("th").unwrap();
//! assert_eq!(cells[0].text_content(), "Name");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// A node of a parsed HTML tree.
pub trait Node: Clone {
    /// All descendant elements with the given tag name, in document order.
    ///
    /// The node itself is never included.
    fn find_all(&self, tag: &str) -> Result<Vec<Self>>;

    /// Concatenated text of every descendant text node, as found in the markup.
    fn text_content(&self) -> String;
}

impl<'a> Node for ElementRef<'a> {
    fn find_all(&self, tag: &str) -> Result<Vec<Self>> {
        let selector = tag_selector(tag)?;
        Ok(self.select(&selector).collect())
    }

    fn text_content(&self) -> String {
        ElementRef::text(self).collect()
    }
}

/// Build a selector that matches a bare tag name and nothing else.
///
/// Anything carrying CSS syntax (classes, combinators, whitespace) is
/// rejected so callers cannot smuggle arbitrary selectors through.
pub fn tag_selector(tag: &str) -> Result<Selector> {
    let valid = tag
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return Err(ScrapeError::InvalidTag(tag.to_string()));
    }

    Selector::parse(tag).map_err(|_| ScrapeError::InvalidTag(tag.to_string()))
}

/// An owned, parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a complete HTML document.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parse an HTML fragment (e.g. a lone `<table>` snippet).
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Root element of the tree; every table in the document is below it.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Parser errors html5ever recovered from while building the tree.
    pub fn parse_errors(&self) -> usize {
        self.html.errors.len()
    }
}
