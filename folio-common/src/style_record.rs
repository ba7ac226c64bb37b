//! Full and partial style records
//!
//! A `StyleRecord` always carries all five dimensions; the struct shape is
//! what rules out partial records. Partial updates travel as `StylePatch`.

use std::collections::BTreeMap;

use crate::dimension::StyleDimension;

/// Complete set of style values for the article preview
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRecord {
    pub font_family: String,
    pub font_size: String,
    pub font_color: String,
    pub container_width: String,
    pub background_color: String,
}

impl StyleRecord {
    pub fn get(&self, dimension: StyleDimension) -> &str {
        match dimension {
            StyleDimension::FontFamily => &self.font_family,
            StyleDimension::FontSize => &self.font_size,
            StyleDimension::FontColor => &self.font_color,
            StyleDimension::ContainerWidth => &self.container_width,
            StyleDimension::BackgroundColor => &self.background_color,
        }
    }

    pub fn set(&mut self, dimension: StyleDimension, value: impl Into<String>) {
        let slot = match dimension {
            StyleDimension::FontFamily => &mut self.font_family,
            StyleDimension::FontSize => &mut self.font_size,
            StyleDimension::FontColor => &mut self.font_color,
            StyleDimension::ContainerWidth => &mut self.container_width,
            StyleDimension::BackgroundColor => &mut self.background_color,
        };
        *slot = value.into();
    }

    /// Shallow merge: only dimensions present in the patch are overwritten.
    pub fn merge(&mut self, patch: &StylePatch) {
        for (dimension, value) in patch.iter() {
            self.set(dimension, value);
        }
    }

    /// The five custom properties in fixed dimension order.
    pub fn css_properties(&self) -> [(&'static str, &str); 5] {
        StyleDimension::ALL.map(|d| (d.css_property(), self.get(d)))
    }

    /// Inline `style` attribute value for the preview container
    pub fn to_inline_style(&self) -> String {
        self.css_properties()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Partial style record emitted by selectors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylePatch(BTreeMap<StyleDimension, String>);

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(dimension: StyleDimension, value: impl Into<String>) -> Self {
        Self::new().with(dimension, value)
    }

    pub fn with(mut self, dimension: StyleDimension, value: impl Into<String>) -> Self {
        self.0.insert(dimension, value.into());
        self
    }

    pub fn get(&self, dimension: StyleDimension) -> Option<&str> {
        self.0.get(&dimension).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleDimension, &str)> {
        self.0.iter().map(|(d, v)| (*d, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyleRecord {
        StyleRecord {
            font_family: "Open Sans".into(),
            font_size: "18px".into(),
            font_color: "#000".into(),
            container_width: "700px".into(),
            background_color: "#fff".into(),
        }
    }

    #[test]
    fn test_merge_keeps_unrelated_keys() {
        let mut record = sample();
        record.merge(&StylePatch::single(StyleDimension::FontSize, "36px"));
        assert_eq!(record.font_size, "36px");
        assert_eq!(record.font_family, "Open Sans");
        assert_eq!(record.font_color, "#000");
        assert_eq!(record.container_width, "700px");
        assert_eq!(record.background_color, "#fff");
    }

    #[test]
    fn test_merge_multiple_dimensions() {
        let mut record = sample();
        let patch = StylePatch::new()
            .with(StyleDimension::FontColor, "#fe3a3a")
            .with(StyleDimension::BackgroundColor, "#000");
        record.merge(&patch);
        assert_eq!(record.font_color, "#fe3a3a");
        assert_eq!(record.background_color, "#000");
        assert_eq!(record.font_size, "18px");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut record = sample();
        record.merge(&StylePatch::new());
        assert_eq!(record, sample());
    }

    #[test]
    fn test_later_value_wins_within_patch() {
        let patch = StylePatch::new()
            .with(StyleDimension::FontSize, "25px")
            .with(StyleDimension::FontSize, "36px");
        assert_eq!(patch.iter().count(), 1);
        assert_eq!(patch.get(StyleDimension::FontSize), Some("36px"));
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(
            sample().to_inline_style(),
            "--font-family: Open Sans; --font-size: 18px; --font-color: #000; \
             --container-width: 700px; --bg-color: #fff;"
        );
    }
}
