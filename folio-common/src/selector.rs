use crate::dimension::StyleDimension;
use crate::style_option::StyleOption;
use crate::style_record::StylePatch;

/// Current selection for one style dimension.
///
/// Every selection, including the initial one, is reported as a single-key
/// patch so the host buffer is seeded even if the control is never touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSelection {
    dimension: StyleDimension,
    selected: StyleOption,
}

impl StyleSelection {
    /// Create the binding and report the default selection once.
    pub fn mount(
        dimension: StyleDimension,
        default: StyleOption,
        on_change: impl FnOnce(StylePatch),
    ) -> Self {
        let selection = Self {
            dimension,
            selected: default,
        };
        on_change(selection.patch());
        selection
    }

    pub fn select(&mut self, option: StyleOption, on_change: impl FnOnce(StylePatch)) {
        self.selected = option;
        on_change(self.patch());
    }

    pub fn is_checked(&self, option: &StyleOption) -> bool {
        self.selected == *option
    }

    pub fn selected(&self) -> StyleOption {
        self.selected
    }

    pub fn dimension(&self) -> StyleDimension {
        self.dimension
    }

    fn patch(&self) -> StylePatch {
        StylePatch::single(self.dimension, self.selected.value)
    }
}
