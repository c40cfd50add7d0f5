//! String/enum translation with two distinct policies: strict parsing for
//! the interactive edit path, and lenient translation for document reads,
//! where saved data may predate the current format.

use crate::color::ChannelColor;
use crate::error::SettingsError;
use crate::redstone::RedstoneMode;
use crate::settings::energy::EnergyMode;
use crate::side::Side;
use crate::update::{TAG_FACING, TAG_MODE, TAG_RS};

pub fn parse_energy_mode(value: &str) -> Result<EnergyMode, SettingsError> {
    EnergyMode::from_name(value).ok_or_else(|| SettingsError::InvalidEnumValue {
        field: TAG_MODE,
        value: value.to_string(),
    })
}

pub fn parse_redstone_mode(value: &str) -> Result<RedstoneMode, SettingsError> {
    RedstoneMode::from_name(value).ok_or_else(|| SettingsError::InvalidEnumValue {
        field: TAG_RS,
        value: value.to_string(),
    })
}

pub fn parse_channel_color(
    field: &'static str,
    value: &str,
) -> Result<ChannelColor, SettingsError> {
    ChannelColor::from_name(value).ok_or_else(|| SettingsError::InvalidEnumValue {
        field,
        value: value.to_string(),
    })
}

pub fn parse_side(value: &str) -> Result<Side, SettingsError> {
    Side::from_name(value).ok_or_else(|| SettingsError::InvalidEnumValue {
        field: TAG_FACING,
        value: value.to_string(),
    })
}

pub fn energy_mode_or_default(name: Option<&str>) -> EnergyMode {
    match name {
        Some(value) => EnergyMode::from_name(value).unwrap_or_else(|| {
            log::warn!("unknown energy mode '{value}', falling back to INS");
            EnergyMode::Insert
        }),
        None => EnergyMode::Insert,
    }
}

pub fn redstone_mode_or_default(name: Option<&str>) -> RedstoneMode {
    match name {
        Some(value) => RedstoneMode::from_name(value).unwrap_or_else(|| {
            log::warn!("unknown redstone mode '{value}', falling back to IGNORED");
            RedstoneMode::default()
        }),
        None => RedstoneMode::default(),
    }
}

pub fn channel_color_or_default(name: Option<&str>) -> ChannelColor {
    match name {
        Some(value) => ChannelColor::from_name(value).unwrap_or_else(|| {
            log::warn!("unknown channel color '{value}', falling back to OFF");
            ChannelColor::default()
        }),
        None => ChannelColor::default(),
    }
}

pub fn facing_or_none(name: Option<&str>) -> Option<Side> {
    let value = name?;
    let side = Side::from_name(value);
    if side.is_none() {
        log::warn!("unknown facing '{value}', dropping the override");
    }
    side
}
