use std::collections::BTreeMap;

const MARKER_BYTE: u8 = 1;
const MARKER_INT: u8 = 2;
const MARKER_STR: u8 = 3;
const MARKER_BOOL: u8 = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Byte(i8),
    Int(i32),
    Str(String),
    Bool(bool),
}

/// String-keyed compound used as the save-compatible persistence format.
/// Absent keys are meaningful: callers test presence before reading so
/// that "field absent" and "field equals zero" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCompound {
    entries: BTreeMap<String, TagValue>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("tag data truncated at offset {0}")]
    Truncated(usize),
    #[error("unknown tag marker {0:#04x}")]
    UnknownMarker(u8),
    #[error("tag key is not valid utf-8")]
    InvalidKey,
}

impl TagCompound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_byte(&mut self, key: &str, value: i8) {
        self.entries.insert(key.to_string(), TagValue::Byte(value));
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_string(), TagValue::Int(value));
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), TagValue::Str(value.to_string()));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_string(), TagValue::Bool(value));
    }

    pub fn get_byte(&self, key: &str) -> Option<i8> {
        match self.entries.get(key) {
            Some(TagValue::Byte(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.entries.get(key) {
            Some(TagValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(TagValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(TagValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (key, value) in &self.entries {
            match value {
                TagValue::Byte(v) => {
                    out.push(MARKER_BYTE);
                    encode_key(&mut out, key);
                    out.push(*v as u8);
                }
                TagValue::Int(v) => {
                    out.push(MARKER_INT);
                    encode_key(&mut out, key);
                    out.extend_from_slice(&v.to_be_bytes());
                }
                TagValue::Str(v) => {
                    out.push(MARKER_STR);
                    encode_key(&mut out, key);
                    encode_key(&mut out, v);
                }
                TagValue::Bool(v) => {
                    out.push(MARKER_BOOL);
                    encode_key(&mut out, key);
                    out.push(u8::from(*v));
                }
            }
        }
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, TagError> {
        let mut cursor = Cursor { data, offset: 0 };
        let mut compound = TagCompound::new();
        while !cursor.done() {
            let marker = cursor.take_u8()?;
            let key = cursor.take_string()?;
            let value = match marker {
                MARKER_BYTE => TagValue::Byte(cursor.take_u8()? as i8),
                MARKER_INT => TagValue::Int(cursor.take_i32()?),
                MARKER_STR => TagValue::Str(cursor.take_string()?),
                MARKER_BOOL => TagValue::Bool(cursor.take_u8()? != 0),
                other => return Err(TagError::UnknownMarker(other)),
            };
            compound.entries.insert(key, value);
        }
        Ok(compound)
    }
}

fn encode_key(out: &mut Vec<u8>, text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(u16::MAX as usize) as u16;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&bytes[..len as usize]);
}

struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn done(&self) -> bool {
        self.offset >= self.data.len()
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], TagError> {
        let end = self
            .offset
            .checked_add(count)
            .ok_or(TagError::Truncated(self.offset))?;
        if end > self.data.len() {
            return Err(TagError::Truncated(self.offset));
        }
        let slice = &self.data[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn take_u8(&mut self) -> Result<u8, TagError> {
        Ok(self.take(1)?[0])
    }

    fn take_i32(&mut self) -> Result<i32, TagError> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn take_string(&mut self) -> Result<String, TagError> {
        let bytes = self.take(2)?;
        let len = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| TagError::InvalidKey)
    }
}
