/// One of the five independently controlled style properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleDimension {
    FontFamily,
    FontSize,
    FontColor,
    ContainerWidth,
    BackgroundColor,
}

impl StyleDimension {
    pub const ALL: [StyleDimension; 5] = [
        StyleDimension::FontFamily,
        StyleDimension::FontSize,
        StyleDimension::FontColor,
        StyleDimension::ContainerWidth,
        StyleDimension::BackgroundColor,
    ];

    /// Record key name
    pub fn key(&self) -> &'static str {
        match self {
            StyleDimension::FontFamily => "font-family",
            StyleDimension::FontSize => "font-size",
            StyleDimension::FontColor => "font-color",
            StyleDimension::ContainerWidth => "container-width",
            StyleDimension::BackgroundColor => "background-color",
        }
    }

    /// CSS custom property the preview surface reads
    pub fn css_property(&self) -> &'static str {
        match self {
            StyleDimension::FontFamily => "--font-family",
            StyleDimension::FontSize => "--font-size",
            StyleDimension::FontColor => "--font-color",
            StyleDimension::ContainerWidth => "--container-width",
            StyleDimension::BackgroundColor => "--bg-color",
        }
    }
}
