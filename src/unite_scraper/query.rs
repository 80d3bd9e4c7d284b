use ::scraper::{ElementRef, Selector};

use crate::error::{Result, UniteError};

/// Read-only view of a parsed document node.
///
/// The extractors only ever talk to this trait, so the HTML engine behind it
/// can be swapped without touching any selector logic.
pub trait Query: Sized {
    /// First descendant matching `selector`, in document order.
    fn find_first(&self, selector: &str) -> Result<Option<Self>>;

    /// Every descendant matching `selector`, in document order. May be empty.
    fn find_all(&self, selector: &str) -> Result<Vec<Self>>;

    /// Concatenated text of the node and its descendants, trimmed at both
    /// ends. Inner whitespace is kept as-is.
    fn text_content(&self) -> String;

    /// Raw value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<'a> Query for ElementRef<'a> {
    fn find_first(&self, selector: &str) -> Result<Option<Self>> {
        let selector = Selector::parse(selector)?;
        Ok(self.select(&selector).next())
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Self>> {
        let selector = Selector::parse(selector)?;
        Ok(self.select(&selector).collect())
    }

    fn text_content(&self) -> String {
        ElementRef::text(self).collect::<String>().trim().to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

/// First match of `selector` under `node`, or a [`UniteError::MissingField`]
/// naming `context`.
pub(crate) fn required<N: Query>(node: &N, selector: &str, context: &'static str) -> Result<N> {
    node.find_first(selector)?
        .ok_or(UniteError::MissingField { context })
}
