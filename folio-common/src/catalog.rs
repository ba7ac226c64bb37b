//! Built-in option tables for each style dimension

use thiserror::Error;

use crate::dimension::StyleDimension;
use crate::style_option::StyleOption;
use crate::style_record::StyleRecord;

pub const FONT_FAMILY_OPTIONS: &[StyleOption] = &[
    StyleOption::new("Open Sans", "Open Sans"),
    StyleOption::new("Ubuntu", "Ubuntu"),
    StyleOption::new("Cormorant Garamond", "Cormorant Garamond"),
    StyleOption::new("Days One", "Days One"),
    StyleOption::new("Merriweather", "Merriweather"),
];

pub const FONT_SIZE_OPTIONS: &[StyleOption] = &[
    StyleOption::new("18px", "18px"),
    StyleOption::new("25px", "25px"),
    StyleOption::new("36px", "36px"),
];

pub const FONT_COLOR_OPTIONS: &[StyleOption] = &[
    StyleOption::new("Black", "#000"),
    StyleOption::new("White", "#fff"),
    StyleOption::new("Gray", "#c4c4c4"),
    StyleOption::new("Pink", "#feafe8"),
    StyleOption::new("Purple", "#d7b5fd"),
    StyleOption::new("Red", "#fe3a3a"),
    StyleOption::new("Yellow", "#ffc802"),
    StyleOption::new("Green", "#80d994"),
    StyleOption::new("Blue", "#6fa7f0"),
];

pub const BACKGROUND_COLOR_OPTIONS: &[StyleOption] = &[
    StyleOption::new("White", "#fff"),
    StyleOption::new("Black", "#000"),
    StyleOption::new("Gray", "#c4c4c4"),
    StyleOption::new("Pink", "#feafe8"),
    StyleOption::new("Beige", "#fff6e1"),
    StyleOption::new("Yellow", "#ffc802"),
    StyleOption::new("Green", "#80d994"),
    StyleOption::new("Blue", "#6fa7f0"),
];

pub const CONTAINER_WIDTH_OPTIONS: &[StyleOption] = &[
    StyleOption::new("Narrow", "700px"),
    StyleOption::new("Medium", "948px"),
    StyleOption::new("Wide", "1394px"),
];

/// Which presentational control a dimension is bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-choice list
    Select,
    /// Mutually exclusive toggle group
    ToggleGroup,
}

/// Options, default and presentation for one dimension
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionCatalog {
    pub dimension: StyleDimension,
    pub title: &'static str,
    pub control: ControlKind,
    pub options: &'static [StyleOption],
    pub default: StyleOption,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no options listed for {0:?}")]
    EmptyOptions(StyleDimension),
    #[error("default {value:?} for {dimension:?} is not one of its options")]
    DefaultNotListed {
        dimension: StyleDimension,
        value: &'static str,
    },
}

/// The full option catalog, one entry per dimension in panel order
#[derive(Clone, Debug, PartialEq)]
pub struct StyleCatalog {
    pub font_family: DimensionCatalog,
    pub font_size: DimensionCatalog,
    pub font_color: DimensionCatalog,
    pub background_color: DimensionCatalog,
    pub container_width: DimensionCatalog,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            font_family: DimensionCatalog {
                dimension: StyleDimension::FontFamily,
                title: "Font",
                control: ControlKind::Select,
                options: FONT_FAMILY_OPTIONS,
                default: FONT_FAMILY_OPTIONS[0],
            },
            font_size: DimensionCatalog {
                dimension: StyleDimension::FontSize,
                title: "Font size",
                control: ControlKind::ToggleGroup,
                options: FONT_SIZE_OPTIONS,
                default: FONT_SIZE_OPTIONS[0],
            },
            font_color: DimensionCatalog {
                dimension: StyleDimension::FontColor,
                title: "Font color",
                control: ControlKind::Select,
                options: FONT_COLOR_OPTIONS,
                default: FONT_COLOR_OPTIONS[0],
            },
            background_color: DimensionCatalog {
                dimension: StyleDimension::BackgroundColor,
                title: "Background color",
                control: ControlKind::Select,
                options: BACKGROUND_COLOR_OPTIONS,
                default: BACKGROUND_COLOR_OPTIONS[0],
            },
            container_width: DimensionCatalog {
                dimension: StyleDimension::ContainerWidth,
                title: "Content width",
                control: ControlKind::Select,
                options: CONTAINER_WIDTH_OPTIONS,
                default: CONTAINER_WIDTH_OPTIONS[0],
            },
        }
    }
}

impl StyleCatalog {
    pub fn get(&self, dimension: StyleDimension) -> &DimensionCatalog {
        match dimension {
            StyleDimension::FontFamily => &self.font_family,
            StyleDimension::FontSize => &self.font_size,
            StyleDimension::FontColor => &self.font_color,
            StyleDimension::ContainerWidth => &self.container_width,
            StyleDimension::BackgroundColor => &self.background_color,
        }
    }

    /// Record built from every dimension's default option
    pub fn default_record(&self) -> StyleRecord {
        let mut record = StyleRecord::default();
        for dimension in StyleDimension::ALL {
            record.set(dimension, self.get(dimension).default.value);
        }
        record
    }

    /// Checks that every dimension has options and lists its own default.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for dimension in StyleDimension::ALL {
            let entry = self.get(dimension);
            if entry.options.is_empty() {
                return Err(CatalogError::EmptyOptions(dimension));
            }
            if !entry.options.contains(&entry.default) {
                return Err(CatalogError::DefaultNotListed {
                    dimension,
                    value: entry.default.value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(StyleCatalog::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_record() {
        let record = StyleCatalog::default().default_record();
        assert_eq!(record.font_family, "Open Sans");
        assert_eq!(record.font_size, "18px");
        assert_eq!(record.font_color, "#000");
        assert_eq!(record.container_width, "700px");
        assert_eq!(record.background_color, "#fff");
    }

    #[test]
    fn test_entries_match_their_dimension() {
        let catalog = StyleCatalog::default();
        for dimension in StyleDimension::ALL {
            assert_eq!(catalog.get(dimension).dimension, dimension);
        }
    }

    #[test]
    fn test_only_font_size_is_toggle_group() {
        let catalog = StyleCatalog::default();
        for dimension in StyleDimension::ALL {
            let expected = if dimension == StyleDimension::FontSize {
                ControlKind::ToggleGroup
            } else {
                ControlKind::Select
            };
            assert_eq!(catalog.get(dimension).control, expected);
        }
    }

    #[test]
    fn test_validate_rejects_unlisted_default() {
        let mut catalog = StyleCatalog::default();
        catalog.font_size.default = StyleOption::new("72px", "72px");
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DefaultNotListed {
                dimension: StyleDimension::FontSize,
                value: "72px",
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_options() {
        let mut catalog = StyleCatalog::default();
        catalog.container_width.options = &[];
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyOptions(StyleDimension::ContainerWidth))
        );
    }
}
