use tracing::debug;

use crate::style_record::{StylePatch, StyleRecord};

/// Buffered and applied style records for the article preview.
///
/// Edits land in the buffer and are invisible until `apply` copies the
/// buffer into the applied record. `reset` restores the applied record to the
/// defaults but leaves the buffer as it was, so applying again right after a
/// reset brings the pending edits back.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleStyle {
    defaults: StyleRecord,
    buffered: StyleRecord,
    applied: StyleRecord,
}

impl ArticleStyle {
    pub fn new(defaults: StyleRecord) -> Self {
        Self {
            buffered: defaults.clone(),
            applied: defaults.clone(),
            defaults,
        }
    }

    /// Merge a partial update into the buffer. The applied record is untouched.
    pub fn change_style(&mut self, patch: &StylePatch) {
        self.buffered.merge(patch);
    }

    /// Commit the buffer. Returns the new applied record.
    pub fn apply(&mut self) -> &StyleRecord {
        self.applied = self.buffered.clone();
        debug!("Applied article style: {}", self.applied.to_inline_style());
        &self.applied
    }

    /// Show the defaults again. Returns the new applied record.
    pub fn reset(&mut self) -> &StyleRecord {
        self.applied = self.defaults.clone();
        debug!("Reset article style to defaults");
        &self.applied
    }

    pub fn buffered(&self) -> &StyleRecord {
        &self.buffered
    }

    pub fn applied(&self) -> &StyleRecord {
        &self.applied
    }

    pub fn defaults(&self) -> &StyleRecord {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StyleCatalog;
    use crate::dimension::StyleDimension;

    fn style() -> ArticleStyle {
        ArticleStyle::new(StyleCatalog::default().default_record())
    }

    #[test]
    fn test_starts_with_defaults() {
        let s = style();
        assert_eq!(s.buffered(), s.defaults());
        assert_eq!(s.applied(), s.defaults());
    }

    #[test]
    fn test_change_does_not_touch_applied() {
        let mut s = style();
        s.change_style(&StylePatch::single(StyleDimension::FontColor, "#fe3a3a"));
        assert_eq!(s.buffered().font_color, "#fe3a3a");
        assert_eq!(s.applied().font_color, "#000");
    }

    #[test]
    fn test_apply_copies_buffer() {
        let mut s = style();
        s.change_style(&StylePatch::single(StyleDimension::FontSize, "25px"));
        s.change_style(&StylePatch::single(StyleDimension::BackgroundColor, "#000"));
        s.change_style(&StylePatch::single(StyleDimension::FontSize, "36px"));
        let buffered_before = s.buffered().clone();

        let applied = s.apply().clone();

        assert_eq!(applied, buffered_before);
        assert_eq!(s.buffered(), &buffered_before);
    }

    #[test]
    fn test_apply_without_edits_keeps_defaults() {
        let mut s = style();
        let defaults = s.defaults().clone();
        assert_eq!(s.apply(), &defaults);
    }

    #[test]
    fn test_reset_restores_defaults_and_keeps_buffer() {
        let mut s = style();
        s.change_style(&StylePatch::single(StyleDimension::FontFamily, "Ubuntu"));
        s.apply();
        let buffered_before = s.buffered().clone();

        let defaults = s.defaults().clone();
        assert_eq!(s.reset(), &defaults);
        assert_eq!(s.buffered(), &buffered_before);
    }

    #[test]
    fn test_apply_after_reset_brings_back_pending_edits() {
        let mut s = style();
        s.change_style(&StylePatch::single(StyleDimension::ContainerWidth, "1394px"));
        s.apply();
        s.reset();
        assert_eq!(s.apply().container_width, "1394px");
    }

    #[test]
    fn test_later_apply_is_independent_of_buffer() {
        let mut s = style();
        s.change_style(&StylePatch::single(StyleDimension::FontSize, "25px"));
        s.apply();
        s.change_style(&StylePatch::single(StyleDimension::FontSize, "36px"));
        assert_eq!(s.applied().font_size, "25px");
    }
}
