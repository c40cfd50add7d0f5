pub mod color;
pub mod config;
pub mod error;
pub mod indicator;
pub mod redstone;
pub mod registry;
pub mod settings;
pub mod side;
pub mod translate;
pub mod update;

pub use color::ChannelColor;
pub use config::RateLimits;
pub use error::SettingsError;
pub use indicator::IndicatorIcon;
pub use redstone::RedstoneMode;
pub use registry::{
    load_connectors, ChannelType, ChannelTypeRegistry, ConnectorInfo, ConsumerId, EnergyChannelType,
    SidedConsumer, StoredConnector,
};
pub use settings::{BaseSettings, ConnectorSettings, EnergyConnectorSettings, EnergyMode};
pub use side::Side;
pub use update::{UpdateMap, UpdateValue};
