pub mod base;
pub mod energy;

pub use base::BaseSettings;
pub use energy::{EnergyConnectorSettings, EnergyMode};

use crate::config::RateLimits;
use crate::error::SettingsError;
use crate::indicator::IndicatorIcon;
use crate::update::UpdateMap;
use serde_json::Value;
use tag::TagCompound;

/// The seam the editor and the persistence layers talk to. One
/// implementation per channel type; the editor never sees the concrete
/// variant.
pub trait ConnectorSettings {
    /// Strict: a malformed batch is rejected and nothing changes.
    fn update(&mut self, data: &UpdateMap) -> Result<(), SettingsError>;

    /// Pure query; unknown tag names are simply disabled.
    fn is_enabled(&self, tag: &str) -> bool;

    fn write_to_json(&self, limits: &RateLimits) -> Value;

    /// Lenient: unknown enum names fall back to defaults, never an error.
    fn read_from_json(&mut self, value: &Value);

    fn write_to_tag(&self, tag: &mut TagCompound);

    /// Strict on structure: an out-of-range ordinal is corruption.
    fn read_from_tag(&mut self, tag: &TagCompound) -> Result<(), SettingsError>;

    fn indicator_icon(&self) -> Option<IndicatorIcon>;
}

impl ConnectorSettings for EnergyConnectorSettings {
    fn update(&mut self, data: &UpdateMap) -> Result<(), SettingsError> {
        EnergyConnectorSettings::update(self, data)
    }

    fn is_enabled(&self, tag: &str) -> bool {
        EnergyConnectorSettings::is_enabled(self, tag)
    }

    fn write_to_json(&self, limits: &RateLimits) -> Value {
        EnergyConnectorSettings::write_to_json(self, limits)
    }

    fn read_from_json(&mut self, value: &Value) {
        EnergyConnectorSettings::read_from_json(self, value)
    }

    fn write_to_tag(&self, tag: &mut TagCompound) {
        EnergyConnectorSettings::write_to_tag(self, tag)
    }

    fn read_from_tag(&mut self, tag: &TagCompound) -> Result<(), SettingsError> {
        EnergyConnectorSettings::read_from_tag(self, tag)
    }

    fn indicator_icon(&self) -> Option<IndicatorIcon> {
        EnergyConnectorSettings::indicator_icon(self)
    }
}
