use crate::error::SettingsError;
use crate::settings::{ConnectorSettings, EnergyConnectorSettings};
use crate::side::Side;
use std::collections::BTreeMap;
use tag::TagCompound;

pub trait ChannelType {
    fn name(&self) -> &'static str;
    fn create_connector(&self, side: Side) -> Box<dyn ConnectorSettings>;
}

pub struct EnergyChannelType;

impl ChannelType for EnergyChannelType {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn create_connector(&self, side: Side) -> Box<dyn ConnectorSettings> {
        Box::new(EnergyConnectorSettings::new(side))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsumerId(pub u64);

/// Side-keyed consumer identity: which consumer a connector serves and on
/// which of its faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SidedConsumer {
    pub consumer: ConsumerId,
    pub side: Side,
}

/// Association of a channel type, a sided consumer and that consumer's
/// connector settings. Persistence is delegated to the settings.
pub struct ConnectorInfo {
    type_name: &'static str,
    id: SidedConsumer,
    advanced: bool,
    settings: Box<dyn ConnectorSettings>,
}

impl ConnectorInfo {
    pub fn new(channel_type: &dyn ChannelType, id: SidedConsumer, advanced: bool) -> Self {
        // the connector sits on the face opposite the consumer's side
        let settings = channel_type.create_connector(id.side.opposite());
        Self {
            type_name: channel_type.name(),
            id,
            advanced,
            settings,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn id(&self) -> SidedConsumer {
        self.id
    }

    pub fn is_advanced(&self) -> bool {
        self.advanced
    }

    pub fn settings(&self) -> &dyn ConnectorSettings {
        self.settings.as_ref()
    }

    pub fn settings_mut(&mut self) -> &mut dyn ConnectorSettings {
        self.settings.as_mut()
    }

    pub fn write_to_tag(&self, tag: &mut TagCompound) {
        self.settings.write_to_tag(tag);
    }

    pub fn read_from_tag(&mut self, tag: &TagCompound) -> Result<(), SettingsError> {
        self.settings.read_from_tag(tag)
    }
}

/// Name-keyed lookup of the channel types known to this network.
#[derive(Default)]
pub struct ChannelTypeRegistry {
    types: BTreeMap<&'static str, Box<dyn ChannelType>>,
}

impl ChannelTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, channel_type: Box<dyn ChannelType>) {
        self.types.insert(channel_type.name(), channel_type);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ChannelType> {
        self.types.get(name).map(|channel_type| channel_type.as_ref())
    }

    pub fn create_connector(
        &self,
        name: &str,
        side: Side,
    ) -> Result<Box<dyn ConnectorSettings>, SettingsError> {
        let channel_type = self
            .get(name)
            .ok_or_else(|| SettingsError::UnknownChannelType(name.to_string()))?;
        Ok(channel_type.create_connector(side))
    }
}

/// One connector as stored in a saved network: enough identity to rebuild
/// it plus the tag its settings were persisted to.
pub struct StoredConnector {
    pub type_name: String,
    pub id: SidedConsumer,
    pub advanced: bool,
    pub tag: TagCompound,
}

/// Restores a batch of connectors. A connector whose type is unknown or
/// whose tag is corrupt is dropped with a warning; its siblings still load.
pub fn load_connectors(
    registry: &ChannelTypeRegistry,
    stored: &[StoredConnector],
) -> Vec<ConnectorInfo> {
    let mut loaded = Vec::with_capacity(stored.len());
    for entry in stored {
        let Some(channel_type) = registry.get(&entry.type_name) else {
            log::warn!(
                "skipping connector for {:?}: unknown channel type '{}'",
                entry.id,
                entry.type_name
            );
            continue;
        };
        let mut info = ConnectorInfo::new(channel_type, entry.id, entry.advanced);
        match info.read_from_tag(&entry.tag) {
            Ok(()) => loaded.push(info),
            Err(err) => {
                log::warn!("skipping connector for {:?}: {err}", entry.id);
            }
        }
    }
    loaded
}
