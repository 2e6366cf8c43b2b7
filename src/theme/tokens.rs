use gpui::Rgba;

use super::{
    ColorKind, PaletteColor, Theme, ThemeColors, ThemeLayout, ThemeVariant, ThemeVariantKind,
};

/// A read-only view over a theme and one of its variants.
///
/// Style derivation receives this explicitly instead of reaching into the
/// app's globals, which keeps every derivation a pure function of the props
/// and the tokens.
#[derive(Clone, Copy)]
pub struct ThemeTokens<'a> {
    pub theme: &'a Theme,
    pub variant: &'a ThemeVariant,
}

impl<'a> ThemeTokens<'a> {
    pub fn new(theme: &'a Theme, variant: &'a ThemeVariant) -> Self {
        Self { theme, variant }
    }

    pub fn layout(&self) -> &'a ThemeLayout {
        &self.theme.layout
    }

    pub fn colors(&self) -> &'a ThemeColors {
        &self.variant.colors
    }

    pub fn palette(&self, color: ColorKind) -> PaletteColor {
        color.resolve(self)
    }

    pub fn is_dark(&self) -> bool {
        self.variant.kind == ThemeVariantKind::Dark
    }

    /// The shade that reads well as text on the variant's background.
    pub fn readable_shade(&self, color: ColorKind) -> Rgba {
        let palette = self.palette(color);
        if self.is_dark() { palette.light } else { palette.dark }
    }
}

impl Theme {
    /// Resolves the tokens for the variant at `index`.
    pub fn tokens(&self, index: usize) -> ThemeTokens<'_> {
        ThemeTokens::new(self, self.variants.get(index))
    }
}
