use serde_json::Value;
use crate::codec::{construct_style_with, serialize_style};
use crate::config::CodecConfig;
use crate::error::StyleError;
use crate::helpers::trim_value;
use crate::like::StyleLike;
use crate::native::Style;

// Parse a style document. A malformed document is an error; a well-formed
// one that the native constructors reject yields `Ok(None)`.
pub fn style_from_json(json: &str) -> Result<Option<Style>, StyleError> {
    let value: Value = serde_json::from_str(json)?;
    construct_style_value(value, &CodecConfig::default())
}

pub fn construct_style_value(value: Value, config: &CodecConfig) -> Result<Option<Style>, StyleError> {
    if value.is_null() {
        return Ok(None);
    }
    let like: StyleLike = serde_json::from_value(trim_value(value))?;
    Ok(construct_style_with(Some(&like), config))
}

pub fn serialize_style_value(style: &Style) -> Result<Value, StyleError> {
    let like = serialize_style(Some(style)).unwrap_or_default();
    Ok(trim_value(serde_json::to_value(like)?))
}

pub fn style_to_json(style: &Style) -> Result<String, StyleError> {
    Ok(serde_json::to_string(&serialize_style_value(style)?)?)
}
