//! State decoder — turns the raw script text into a loosely typed JSON tree.

use serde_json::Value;

use crate::error::ParseResult;

/// Decode the state script text. Leading and trailing whitespace around the
/// JSON document is tolerated; anything else malformed is a
/// [`ParseError::Decode`](crate::ParseError::Decode).
pub fn decode_state(raw: &str) -> ParseResult<Value> {
    Ok(serde_json::from_str(raw)?)
}
