use std::{
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
    sync::LazyLock,
};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::deserializers::{
    de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list, de_variants,
};

/// Errors produced while loading a theme definition.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("could not read theme file \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme definition is not valid JSON or does not match the schema.
    #[error("invalid theme definition: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_json(include_str!($path)).expect("built-in theme is valid")
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme from its JSON definition.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(json.as_ref())?;
        tracing::debug!(
            theme = %theme.name,
            variants = theme.variants.len(),
            "parsed theme"
        );
        Ok(theme)
    }

    /// Reads and parses a theme from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(json)
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
    pub icon_font: ThemeIconFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

impl ThemeFont {
    /// The preferred family; the deserializer guarantees at least one entry.
    pub fn primary_family(&self) -> SharedString {
        self.family.first().cloned().unwrap_or_default()
    }
}

/// The font used to render named glyph icons through ligatures.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeIconFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
}

impl ThemeIconFont {
    pub fn primary_family(&self) -> SharedString {
        self.family.first().cloned().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub h1: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h2: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h3: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h4: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h5: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h6: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub subtitle1: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub subtitle2: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body1: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body2: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub overline: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
    pub h5: f32,
    pub h6: f32,
    pub subtitle1: f32,
    pub subtitle2: f32,
    pub body1: f32,
    pub body2: f32,
    pub caption: f32,
    pub overline: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub(crate) variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant selected by the [`ActiveVariantId`] global, or the
    /// first variant when none has been selected.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        self.get(cx.try_global::<ActiveVariantId>().map_or(0, |id| id.0))
    }

    /// Returns the variant at `index`, falling back to the first variant.
    pub fn get(&self, index: usize) -> &ThemeVariant {
        self.variants.get(index).unwrap_or(&self.variants[0])
    }

    /// Finds the index of the first variant of the given kind.
    pub fn position(&self, kind: ThemeVariantKind) -> Option<usize> {
        self.variants.iter().position(|variant| variant.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeVariant> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

pub struct ActiveVariantId(pub usize);

impl gpui::Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub palette: ThemePalette,
    pub text: ThemeTextColors,
    pub background: ThemeBackgroundColors,
    pub divider: Rgba,
    pub action: ThemeActionColors,
}

/// The six semantic color roles, each with its shades.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePalette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub success: PaletteColor,
    pub info: PaletteColor,
    pub warning: PaletteColor,
    pub error: PaletteColor,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub main: Rgba,
    pub light: Rgba,
    pub dark: Rgba,
    pub contrast_text: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub disabled: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub default: Rgba,
    pub paper: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeActionColors {
    pub hover: Rgba,
    pub selected: Rgba,
    pub disabled: Rgba,
    pub disabled_background: Rgba,
}
