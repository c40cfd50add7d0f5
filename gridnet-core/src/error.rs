#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// Strict parse failure on the interactive edit path. Surfaced to the
    /// caller as a rejected edit.
    #[error("invalid value '{value}' for field '{field}'")]
    InvalidEnumValue { field: &'static str, value: String },
    #[error("field '{field}' expects an integer value")]
    InvalidFieldValue { field: &'static str },
    /// Out-of-range ordinal on a tag read. Fatal to the single connector
    /// being loaded, never to its siblings.
    #[error("corrupted saved state: field '{field}' holds out-of-range value {value}")]
    CorruptedState { field: &'static str, value: i32 },
    #[error("unknown channel type '{0}'")]
    UnknownChannelType(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tag error: {0}")]
    Tag(#[from] tag::TagError),
}
