use crate::config::RateLimits;
use crate::error::SettingsError;
use crate::indicator::{IndicatorIcon, GUI_ELEMENTS_SHEET};
use crate::settings::base::{
    read_base_json, read_base_tag, update_base, write_base_json, write_base_tag, BaseSettings,
    COLOR_TAGS,
};
use crate::side::Side;
use crate::translate;
use crate::update::{
    int_field, text_field, UpdateMap, TAG_FACING, TAG_MINMAX, TAG_MODE, TAG_PRIORITY, TAG_RATE,
    TAG_RS,
};
use serde_json::{Map, Value};
use tag::TagCompound;

/// Role of an energy connector on its channel. The wire names (INS/EXT)
/// and the declaration order are both persisted formats; the ordinal is
/// stored as a byte in the tag representation and must stay stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnergyMode {
    #[default]
    Insert,
    Extract,
}

impl EnergyMode {
    pub const ALL: [EnergyMode; 2] = [EnergyMode::Insert, EnergyMode::Extract];

    pub fn index(self) -> u8 {
        match self {
            EnergyMode::Insert => 0,
            EnergyMode::Extract => 1,
        }
    }

    pub fn from_index(index: u8) -> Option<EnergyMode> {
        EnergyMode::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            EnergyMode::Insert => "INS",
            EnergyMode::Extract => "EXT",
        }
    }

    pub fn from_name(name: &str) -> Option<EnergyMode> {
        EnergyMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

/// One energy connector: shared base configuration plus the energy
/// channel's own mode, priority, rate and min/max buffer level. The
/// integer fields are true optionals; "unset" and "zero" are different
/// states everywhere, and only priority coerces to a default on read.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyConnectorSettings {
    pub base: BaseSettings,
    mode: EnergyMode,
    priority: Option<i32>,
    rate: Option<i32>,
    minmax: Option<i32>,
}

impl EnergyConnectorSettings {
    pub fn new(side: Side) -> Self {
        Self {
            base: BaseSettings::new(side),
            mode: EnergyMode::Insert,
            priority: Some(0),
            rate: None,
            minmax: None,
        }
    }

    pub fn mode(&self) -> EnergyMode {
        self.mode
    }

    /// Never fails: unset coerces to 0.
    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }

    pub fn rate(&self) -> Option<i32> {
        self.rate
    }

    pub fn minmax(&self) -> Option<i32> {
        self.minmax
    }

    /// Commits a batch of editor fields. Mode is replaced only when its
    /// key is present and parses strictly; the three integer fields are
    /// fully replaced on every call, so an absent key clears the field.
    /// Nothing is assigned until the whole batch has validated.
    pub fn update(&mut self, data: &UpdateMap) -> Result<(), SettingsError> {
        let mode = match text_field(data, TAG_MODE)? {
            Some(value) => Some(translate::parse_energy_mode(value)?),
            None => None,
        };
        let rate = int_field(data, TAG_RATE)?;
        let minmax = int_field(data, TAG_MINMAX)?;
        let priority = int_field(data, TAG_PRIORITY)?;
        update_base(&mut self.base, data)?;

        if let Some(mode) = mode {
            self.mode = mode;
        }
        self.rate = rate;
        self.minmax = minmax;
        self.priority = priority;
        Ok(())
    }

    /// Pure visibility predicate for the editor. Directional extraction
    /// always uses the connector's own side, so the facing override is
    /// only offered when inserting, and only in advanced mode.
    pub fn is_enabled(&self, tag: &str) -> bool {
        if tag == TAG_FACING {
            return self.mode == EnergyMode::Insert && self.base.advanced;
        }
        tag == TAG_MODE
            || tag == TAG_RS
            || tag == TAG_RATE
            || tag == TAG_MINMAX
            || tag == TAG_PRIORITY
            || COLOR_TAGS.contains(&tag)
    }

    pub fn write_to_json(&self, limits: &RateLimits) -> Value {
        let mut object = Map::new();
        write_base_json(&self.base, &mut object);
        object.insert("energymode".to_string(), Value::from(self.mode.name()));
        if let Some(priority) = self.priority {
            object.insert(TAG_PRIORITY.to_string(), Value::from(priority));
        }
        if let Some(rate) = self.rate {
            object.insert(TAG_RATE.to_string(), Value::from(rate));
            // advisory only: tells the importing side this connector needs
            // an advanced connector to sustain the stored rate
            if rate > limits.normal {
                object.insert("advancedneeded".to_string(), Value::from(true));
            }
        }
        if let Some(minmax) = self.minmax {
            object.insert(TAG_MINMAX.to_string(), Value::from(minmax));
        }
        Value::Object(object)
    }

    /// Lenient inverse of `write_to_json`. Unknown mode names fall back
    /// to INS, absent integers stay absent.
    pub fn read_from_json(&mut self, value: &Value) {
        let Some(object) = value.as_object() else {
            log::warn!("connector document is not an object, keeping current settings");
            return;
        };
        read_base_json(&mut self.base, object);
        self.mode =
            translate::energy_mode_or_default(object.get("energymode").and_then(Value::as_str));
        self.priority = json_int(object, TAG_PRIORITY);
        self.rate = json_int(object, TAG_RATE);
        self.minmax = json_int(object, TAG_MINMAX);
    }

    pub fn write_to_tag(&self, tag: &mut TagCompound) {
        write_base_tag(&self.base, tag);
        tag.set_byte("itemMode", self.mode.index() as i8);
        if let Some(priority) = self.priority {
            tag.set_int(TAG_PRIORITY, priority);
        }
        if let Some(rate) = self.rate {
            tag.set_int(TAG_RATE, rate);
        }
        if let Some(minmax) = self.minmax {
            tag.set_int(TAG_MINMAX, minmax);
        }
    }

    pub fn read_from_tag(&mut self, tag: &TagCompound) -> Result<(), SettingsError> {
        read_base_tag(&mut self.base, tag)?;
        let raw = tag.get_byte("itemMode").unwrap_or(0);
        self.mode = EnergyMode::from_index(raw as u8).ok_or(SettingsError::CorruptedState {
            field: "itemMode",
            value: raw as i32,
        })?;
        self.priority = tag.get_int(TAG_PRIORITY);
        self.rate = tag.get_int(TAG_RATE);
        self.minmax = tag.get_int(TAG_MINMAX);
        Ok(())
    }

    pub fn indicator_icon(&self) -> Option<IndicatorIcon> {
        let icon = match self.mode {
            EnergyMode::Insert => IndicatorIcon::new(GUI_ELEMENTS_SHEET, 0, 70, 13, 10),
            EnergyMode::Extract => IndicatorIcon::new(GUI_ELEMENTS_SHEET, 13, 70, 13, 10),
        };
        Some(icon)
    }

    /// Display text for the rate field; the ceiling mentioned here never
    /// clamps what is stored.
    pub fn rate_tooltip(&self, limits: &RateLimits) -> String {
        let ceiling = limits.ceiling(self.base.advanced);
        match self.mode {
            EnergyMode::Insert => format!("energy to insert per operation (max {ceiling})"),
            EnergyMode::Extract => format!("energy to extract per operation (max {ceiling})"),
        }
    }

    /// The min/max field changes meaning with the mode: a floor to keep
    /// in the source when extracting, a cap to fill to when inserting.
    pub fn minmax_label(&self) -> &'static str {
        match self.mode {
            EnergyMode::Insert => "max",
            EnergyMode::Extract => "min",
        }
    }
}

fn json_int(object: &Map<String, Value>, key: &str) -> Option<i32> {
    object.get(key).and_then(Value::as_i64).map(|v| v as i32)
}
