use crate::error::SettingsError;
use std::collections::HashMap;

pub const TAG_MODE: &str = "mode";
pub const TAG_RATE: &str = "rate";
pub const TAG_MINMAX: &str = "minmax";
pub const TAG_PRIORITY: &str = "priority";
pub const TAG_FACING: &str = "facing";
pub const TAG_RS: &str = "rs";
pub const TAG_COLOR: &str = "color";

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateValue {
    Int(i32),
    Text(String),
}

/// Batch of field edits collected by an external editor, keyed by the
/// shared tag-name constants above.
pub type UpdateMap = HashMap<String, UpdateValue>;

pub fn int_field(data: &UpdateMap, key: &'static str) -> Result<Option<i32>, SettingsError> {
    match data.get(key) {
        None => Ok(None),
        Some(UpdateValue::Int(value)) => Ok(Some(*value)),
        Some(UpdateValue::Text(_)) => Err(SettingsError::InvalidFieldValue { field: key }),
    }
}

pub fn text_field<'a>(
    data: &'a UpdateMap,
    key: &'static str,
) -> Result<Option<&'a str>, SettingsError> {
    match data.get(key) {
        None => Ok(None),
        Some(UpdateValue::Text(value)) => Ok(Some(value.as_str())),
        Some(UpdateValue::Int(_)) => Err(SettingsError::InvalidFieldValue { field: key }),
    }
}
