//! Markup locator — finds the embedded state script in a listing page.

use scraper::{Html, Selector};

use crate::error::{ParseError, ParseResult};

/// Return the text content of the single element matching `selector`.
///
/// Zero or several matches are both a [`ParseError::NotFound`]; the page is
/// expected to carry exactly one state script.
pub fn locate_state_script(markup: &str, selector: &str) -> ParseResult<String> {
    let compiled = Selector::parse(selector).map_err(|err| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: err.to_string(),
    })?;

    let document = Html::parse_document(markup);
    let matches: Vec<_> = document.select(&compiled).collect();
    match matches.as_slice() {
        [script] => {
            let text: String = script.text().collect();
            tracing::debug!(selector, bytes = text.len(), "located state script");
            Ok(text)
        }
        other => Err(ParseError::not_found(selector, other.len())),
    }
}
