//! The prop-normalize, derive, delegate contract shared by every component.

use gpui::{Refineable, StyleRefinement, Styled};

use crate::theme::ThemeTokens;

/// A component whose styling is derived from its recognized props and the
/// theme, layered beneath the caller's own style overrides.
pub trait ThemedStyle {
    /// Computes the style implied by the recognized props.
    ///
    /// Implementations must be pure: the same props and tokens always yield
    /// the same refinement.
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement;

    /// The caller's overrides, collected through [`gpui::Styled`].
    fn caller_style(&self) -> &StyleRefinement;

    /// The derived style with the caller's overrides applied on top.
    ///
    /// Keys set by the caller always win. Keys the component never derives
    /// are forwarded untouched.
    fn resolve_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let mut style = self.derive_style(tokens);
        style.refine(self.caller_style());
        style
    }
}

/// Applies a resolved refinement onto a delegate element.
pub trait StyledExt: Styled + Sized {
    fn refine_style(mut self, style: &StyleRefinement) -> Self {
        self.style().refine(style);
        self
    }
}

impl<E: Styled> StyledExt for E {}

/// Keeps only the text portion of `style`.
///
/// Inner text delegates (labels, captions) refine with this so that text
/// overrides given to the component reach the text that is painted.
pub fn text_refinement(style: &StyleRefinement) -> StyleRefinement {
    let mut text = StyleRefinement::default();
    text.text = style.text.clone();
    text
}
