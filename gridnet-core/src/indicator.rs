pub const GUI_ELEMENTS_SHEET: &str = "gui/guielements.png";

/// Texture region shown next to a connector in channel overviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorIcon {
    pub sheet: &'static str,
    pub u: i32,
    pub v: i32,
    pub width: i32,
    pub height: i32,
}

impl IndicatorIcon {
    pub const fn new(sheet: &'static str, u: i32, v: i32, width: i32, height: i32) -> Self {
        Self {
            sheet,
            u,
            v,
            width,
            height,
        }
    }
}
