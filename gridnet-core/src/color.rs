/// Per-connector channel color filter. Ordinal order is part of the
/// persisted tag format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChannelColor {
    #[default]
    Off,
    Red,
    Green,
    Blue,
    Yellow,
}

impl ChannelColor {
    pub const ALL: [ChannelColor; 5] = [
        ChannelColor::Off,
        ChannelColor::Red,
        ChannelColor::Green,
        ChannelColor::Blue,
        ChannelColor::Yellow,
    ];

    pub fn index(self) -> u8 {
        match self {
            ChannelColor::Off => 0,
            ChannelColor::Red => 1,
            ChannelColor::Green => 2,
            ChannelColor::Blue => 3,
            ChannelColor::Yellow => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<ChannelColor> {
        ChannelColor::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelColor::Off => "OFF",
            ChannelColor::Red => "RED",
            ChannelColor::Green => "GREEN",
            ChannelColor::Blue => "BLUE",
            ChannelColor::Yellow => "YELLOW",
        }
    }

    pub fn from_name(name: &str) -> Option<ChannelColor> {
        ChannelColor::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}
