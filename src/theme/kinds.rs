#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{AbsoluteLength, FontWeight, Pixels};
use thiserror::Error;

use crate::theme::{PaletteColor, ThemeTokens};

/// Errors produced when converting raw values into design tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("{value} is not a supported {token} size")]
    UnsupportedSize { token: &'static str, value: u32 },
}

/// Semantic palette roles that resolve to a [`PaletteColor`].
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, tokens: &ThemeTokens<'_>) -> PaletteColor)]
pub enum ColorKind {
    #[default]
    #[assoc(resolve = tokens.colors().palette.primary)]
    Primary,
    #[assoc(resolve = tokens.colors().palette.secondary)]
    Secondary,
    #[assoc(resolve = tokens.colors().palette.success)]
    Success,
    #[assoc(resolve = tokens.colors().palette.info)]
    Info,
    #[assoc(resolve = tokens.colors().palette.warning)]
    Warning,
    #[assoc(resolve = tokens.colors().palette.error)]
    Error,
}

impl ColorKind {
    pub const ALL: [ColorKind; 6] = [
        ColorKind::Primary,
        ColorKind::Secondary,
        ColorKind::Success,
        ColorKind::Info,
        ColorKind::Warning,
        ColorKind::Error,
    ];
}

/// Entries of the type scale.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn size(&self, tokens: &ThemeTokens<'_>) -> AbsoluteLength)]
#[func(pub fn weight(&self, tokens: &ThemeTokens<'_>) -> f32)]
pub enum TypographyKind {
    #[assoc(size = tokens.layout().text.default_font.sizes.h1)]
    #[assoc(weight = tokens.layout().text.default_font.weights.h1)]
    H1,
    #[assoc(size = tokens.layout().text.default_font.sizes.h2)]
    #[assoc(weight = tokens.layout().text.default_font.weights.h2)]
    H2,
    #[assoc(size = tokens.layout().text.default_font.sizes.h3)]
    #[assoc(weight = tokens.layout().text.default_font.weights.h3)]
    H3,
    #[assoc(size = tokens.layout().text.default_font.sizes.h4)]
    #[assoc(weight = tokens.layout().text.default_font.weights.h4)]
    H4,
    #[assoc(size = tokens.layout().text.default_font.sizes.h5)]
    #[assoc(weight = tokens.layout().text.default_font.weights.h5)]
    H5,
    #[assoc(size = tokens.layout().text.default_font.sizes.h6)]
    #[assoc(weight = tokens.layout().text.default_font.weights.h6)]
    H6,
    #[assoc(size = tokens.layout().text.default_font.sizes.subtitle1)]
    #[assoc(weight = tokens.layout().text.default_font.weights.subtitle1)]
    Subtitle1,
    #[assoc(size = tokens.layout().text.default_font.sizes.subtitle2)]
    #[assoc(weight = tokens.layout().text.default_font.weights.subtitle2)]
    Subtitle2,
    #[default]
    #[assoc(size = tokens.layout().text.default_font.sizes.body1)]
    #[assoc(weight = tokens.layout().text.default_font.weights.body1)]
    Body1,
    #[assoc(size = tokens.layout().text.default_font.sizes.body2)]
    #[assoc(weight = tokens.layout().text.default_font.weights.body2)]
    Body2,
    #[assoc(size = tokens.layout().text.default_font.sizes.caption)]
    #[assoc(weight = tokens.layout().text.default_font.weights.caption)]
    Caption,
    #[assoc(size = tokens.layout().text.default_font.sizes.overline)]
    #[assoc(weight = tokens.layout().text.default_font.weights.overline)]
    Overline,
}

impl TypographyKind {
    pub const ALL: [TypographyKind; 12] = [
        TypographyKind::H1,
        TypographyKind::H2,
        TypographyKind::H3,
        TypographyKind::H4,
        TypographyKind::H5,
        TypographyKind::H6,
        TypographyKind::Subtitle1,
        TypographyKind::Subtitle2,
        TypographyKind::Body1,
        TypographyKind::Body2,
        TypographyKind::Caption,
        TypographyKind::Overline,
    ];

    pub fn font_weight(&self, tokens: &ThemeTokens<'_>) -> FontWeight {
        FontWeight(self.weight(tokens))
    }
}

/// Component size variants that resolve to theme-defined pixel values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, tokens: &ThemeTokens<'_>) -> Pixels)]
pub enum ThemeLayoutSizeKind {
    #[assoc(resolve = tokens.layout().size.xl)]
    Xl,
    #[assoc(resolve = tokens.layout().size.lg)]
    Lg,
    #[assoc(resolve = tokens.layout().size.md)]
    Md,
    #[assoc(resolve = tokens.layout().size.sm)]
    Sm,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, tokens: &ThemeTokens<'_>) -> Pixels)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(resolve = tokens.layout().padding.xl)]
    Xl,
    #[assoc(resolve = tokens.layout().padding.lg)]
    Lg,
    #[assoc(resolve = tokens.layout().padding.md)]
    Md,
    #[assoc(resolve = tokens.layout().padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, tokens: &ThemeTokens<'_>) -> Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = tokens.layout().corner_radii.xl)]
    Xl,
    #[assoc(resolve = tokens.layout().corner_radii.lg)]
    Lg,
    #[assoc(resolve = tokens.layout().corner_radii.md)]
    Md,
    #[assoc(resolve = tokens.layout().corner_radii.sm)]
    Sm,
}
