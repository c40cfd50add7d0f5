/// Redstone gating applied to a connector. Ordinal order is part of the
/// persisted tag format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RedstoneMode {
    #[default]
    Ignored,
    Off,
    On,
    Pulse,
}

impl RedstoneMode {
    pub const ALL: [RedstoneMode; 4] = [
        RedstoneMode::Ignored,
        RedstoneMode::Off,
        RedstoneMode::On,
        RedstoneMode::Pulse,
    ];

    pub fn index(self) -> u8 {
        match self {
            RedstoneMode::Ignored => 0,
            RedstoneMode::Off => 1,
            RedstoneMode::On => 2,
            RedstoneMode::Pulse => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<RedstoneMode> {
        RedstoneMode::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            RedstoneMode::Ignored => "IGNORED",
            RedstoneMode::Off => "OFF",
            RedstoneMode::On => "ON",
            RedstoneMode::Pulse => "PULSE",
        }
    }

    pub fn from_name(name: &str) -> Option<RedstoneMode> {
        RedstoneMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}
