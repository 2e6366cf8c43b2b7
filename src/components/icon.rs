use gpui::{
    AnyElement, Hsla, IntoElement, Pixels, Radians, RenderOnce, SharedString, StyleRefinement,
    Styled, Transformation, div, prelude::FluentBuilder, px, svg,
};

use crate::{
    assets::MosaicIconKind,
    style::{StyledExt, ThemedStyle},
    theme::{ColorKind, ThemeExt, ThemeTokens},
    utils::DebugSelectorExt,
};

/// The two shapes an icon can take.
///
/// `Svg` renders a vector asset through gpui's `svg` element. `Glyph` renders
/// a named ligature (e.g. `"home"`) in the theme's icon font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconSource {
    Svg(SharedString),
    Glyph(SharedString),
}

impl From<MosaicIconKind> for IconSource {
    fn from(kind: MosaicIconKind) -> Self {
        IconSource::Svg(kind.path())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    /// Takes its size from the surrounding layout.
    Inherit,
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    pub const ALL: [IconSize; 4] = [
        IconSize::Inherit,
        IconSize::Small,
        IconSize::Medium,
        IconSize::Large,
    ];

    pub fn dimension(&self) -> Option<Pixels> {
        match self {
            IconSize::Inherit => None,
            IconSize::Small => Some(px(20.)),
            IconSize::Medium => Some(px(24.)),
            IconSize::Large => Some(px(35.)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum IconColor {
    /// Uses the text color of the enclosing element.
    #[default]
    Inherit,
    Action,
    Disabled,
    Palette(ColorKind),
    Custom(Hsla),
}

impl IconColor {
    fn resolve(&self, tokens: &ThemeTokens<'_>) -> Option<Hsla> {
        match self {
            IconColor::Inherit => None,
            IconColor::Action => Some(tokens.colors().text.secondary.into()),
            IconColor::Disabled => Some(tokens.colors().text.disabled.into()),
            IconColor::Palette(color) => Some(color.resolve(tokens).main.into()),
            IconColor::Custom(color) => Some(*color),
        }
    }
}

/// An icon backed either by an SVG asset or by a named font glyph.
#[derive(IntoElement)]
pub struct Icon {
    source: IconSource,
    size: IconSize,
    color: IconColor,
    rotate: Radians,
    style: StyleRefinement,
}

impl Icon {
    pub fn new(source: impl Into<IconSource>) -> Self {
        Self {
            source: source.into(),
            size: IconSize::default(),
            color: IconColor::default(),
            rotate: Radians(0.),
            style: StyleRefinement::default(),
        }
    }

    /// Creates an icon from an SVG asset path.
    pub fn svg(path: impl Into<SharedString>) -> Self {
        Self::new(IconSource::Svg(path.into()))
    }

    /// Creates an icon from a glyph name in the theme's icon font.
    pub fn glyph(name: impl Into<SharedString>) -> Self {
        Self::new(IconSource::Glyph(name.into()))
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self
    }

    /// Rotates the icon. Only SVG icons can be rotated.
    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }

    pub fn source(&self) -> &IconSource {
        &self.source
    }

    /// Sets the color unless the caller already picked one.
    pub(crate) fn default_color(mut self, color: impl Into<Hsla>) -> Self {
        if self.color == IconColor::Inherit && self.style.text.color.is_none() {
            self.color = IconColor::Custom(color.into());
        }
        self
    }

    /// Sets the size unless the caller already picked a non-default one.
    pub(crate) fn default_size(mut self, size: IconSize) -> Self {
        if self.size == IconSize::default() && self.style.size.width.is_none() {
            self.size = size;
        }
        self
    }
}

impl From<MosaicIconKind> for Icon {
    fn from(kind: MosaicIconKind) -> Self {
        Icon::new(kind)
    }
}

impl From<IconSource> for Icon {
    fn from(source: IconSource) -> Self {
        Icon::new(source)
    }
}

impl ThemedStyle for Icon {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let mut style = StyleRefinement::default().flex_none();

        if let Some(dimension) = self.size.dimension() {
            style = style.size(dimension).min_w(dimension).min_h(dimension);
        }

        if let Some(color) = self.color.resolve(tokens) {
            style = style.text_color(color);
        }

        if let IconSource::Glyph(_) = self.source {
            style = style
                .font_family(tokens.layout().text.icon_font.primary_family())
                .flex()
                .items_center()
                .justify_center()
                .overflow_hidden();

            if let Some(dimension) = self.size.dimension() {
                style = style.text_size(dimension).line_height(dimension);
            }
        }

        style
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Icon {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let style = self.resolve_style(&cx.theme_tokens());
        let inherited_color = window.text_style().color;

        let element: AnyElement = match self.source {
            IconSource::Svg(path) => svg()
                .debug_tag(|| format!("icon:svg:{path}"))
                .path(path)
                .refine_style(&style)
                .when(style.text.color.is_none(), |this| {
                    this.text_color(inherited_color)
                })
                .with_transformation(Transformation::rotate(self.rotate))
                .into_any_element(),

            IconSource::Glyph(name) => div()
                .debug_tag(|| format!("icon:glyph:{name}"))
                .refine_style(&style)
                .child(name)
                .into_any_element(),
        };

        element
    }
}

impl Styled for Icon {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}
