use crate::color::ChannelColor;
use crate::error::SettingsError;
use crate::redstone::RedstoneMode;
use crate::side::Side;
use crate::translate;
use crate::update::{text_field, UpdateMap, TAG_FACING, TAG_RS};
use serde_json::{Map, Value};
use tag::TagCompound;

pub const COLOR_TAGS: [&str; 4] = ["color0", "color1", "color2", "color3"];

/// Configuration shared by every connector variant, embedded by value.
/// The occupied side is fixed at construction; it is part of the
/// connector's identity and is never persisted or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseSettings {
    side: Side,
    pub facing_override: Option<Side>,
    pub colors: [ChannelColor; 4],
    pub redstone_mode: RedstoneMode,
    pub advanced: bool,
}

impl BaseSettings {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            facing_override: None,
            colors: [ChannelColor::Off; 4],
            redstone_mode: RedstoneMode::Ignored,
            advanced: false,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// The side actually used for transfers. The override is an advanced
    /// feature; without the advanced flag the connector's own side wins.
    pub fn effective_facing(&self) -> Side {
        if self.advanced {
            self.facing_override.unwrap_or(self.side)
        } else {
            self.side
        }
    }
}

/// Applies the shared editor fields. The optional facing override is fully
/// replaced on every call (absent key clears it); redstone mode and colors
/// are replaced only when their key is present. Validation happens before
/// any field is assigned, so a rejected batch leaves the settings intact.
pub fn update_base(settings: &mut BaseSettings, data: &UpdateMap) -> Result<(), SettingsError> {
    let facing = match text_field(data, TAG_FACING)? {
        Some(value) => Some(translate::parse_side(value)?),
        None => None,
    };
    let redstone = match text_field(data, TAG_RS)? {
        Some(value) => Some(translate::parse_redstone_mode(value)?),
        None => None,
    };
    let mut colors = settings.colors;
    for (slot, key) in COLOR_TAGS.into_iter().enumerate() {
        if let Some(value) = text_field(data, key)? {
            colors[slot] = translate::parse_channel_color(key, value)?;
        }
    }

    settings.facing_override = facing;
    if let Some(mode) = redstone {
        settings.redstone_mode = mode;
    }
    settings.colors = colors;
    Ok(())
}

pub fn write_base_json(settings: &BaseSettings, object: &mut Map<String, Value>) {
    if let Some(facing) = settings.facing_override {
        object.insert(TAG_FACING.to_string(), Value::from(facing.name()));
    }
    object.insert(TAG_RS.to_string(), Value::from(settings.redstone_mode.name()));
    for (slot, key) in COLOR_TAGS.into_iter().enumerate() {
        object.insert(key.to_string(), Value::from(settings.colors[slot].name()));
    }
    object.insert("advanced".to_string(), Value::from(settings.advanced));
}

/// Lenient document read: unknown enum names fall back through the
/// translators instead of failing the whole load.
pub fn read_base_json(settings: &mut BaseSettings, object: &Map<String, Value>) {
    settings.facing_override =
        translate::facing_or_none(object.get(TAG_FACING).and_then(Value::as_str));
    settings.redstone_mode =
        translate::redstone_mode_or_default(object.get(TAG_RS).and_then(Value::as_str));
    for (slot, key) in COLOR_TAGS.into_iter().enumerate() {
        settings.colors[slot] =
            translate::channel_color_or_default(object.get(key).and_then(Value::as_str));
    }
    settings.advanced = object
        .get("advanced")
        .and_then(Value::as_bool)
        .unwrap_or(false);
}

pub fn write_base_tag(settings: &BaseSettings, tag: &mut TagCompound) {
    if let Some(facing) = settings.facing_override {
        tag.set_byte(TAG_FACING, facing.index() as i8);
    }
    tag.set_byte(TAG_RS, settings.redstone_mode.index() as i8);
    for (slot, key) in COLOR_TAGS.into_iter().enumerate() {
        tag.set_byte(key, settings.colors[slot].index() as i8);
    }
    tag.set_bool("advanced", settings.advanced);
}

pub fn read_base_tag(settings: &mut BaseSettings, tag: &TagCompound) -> Result<(), SettingsError> {
    settings.facing_override = match tag.get_byte(TAG_FACING) {
        Some(raw) => Some(Side::from_index(raw as u8).ok_or(SettingsError::CorruptedState {
            field: TAG_FACING,
            value: raw as i32,
        })?),
        None => None,
    };

    let raw = tag.get_byte(TAG_RS).unwrap_or(0);
    settings.redstone_mode =
        RedstoneMode::from_index(raw as u8).ok_or(SettingsError::CorruptedState {
            field: TAG_RS,
            value: raw as i32,
        })?;

    for (slot, key) in COLOR_TAGS.into_iter().enumerate() {
        let raw = tag.get_byte(key).unwrap_or(0);
        settings.colors[slot] =
            ChannelColor::from_index(raw as u8).ok_or(SettingsError::CorruptedState {
                field: key,
                value: raw as i32,
            })?;
    }

    settings.advanced = tag.get_bool("advanced").unwrap_or(false);
    Ok(())
}
