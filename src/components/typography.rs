use gpui::{
    AbsoluteLength, AnyElement, DefiniteLength, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StyleRefinement, Styled, div, rems,
};
use smallvec::SmallVec;

use crate::{
    style::{StyledExt, ThemedStyle},
    theme::{ColorKind, ThemeExt, ThemeTokens, TypographyKind},
};

/// The text color roles available to [`Typography`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextColor {
    #[default]
    Primary,
    Secondary,
    Disabled,
    Palette(ColorKind),
}

impl TextColor {
    pub fn resolve(&self, tokens: &ThemeTokens<'_>) -> Rgba {
        let text = &tokens.colors().text;

        match self {
            TextColor::Primary => text.primary,
            TextColor::Secondary => text.secondary,
            TextColor::Disabled => text.disabled,
            TextColor::Palette(color) => color.resolve(tokens).main,
        }
    }
}

impl From<ColorKind> for TextColor {
    fn from(color: ColorKind) -> Self {
        TextColor::Palette(color)
    }
}

/// Text set in one of the theme's type scale entries.
#[derive(IntoElement)]
pub struct Typography {
    text: SharedString,
    variant: TypographyKind,
    color: TextColor,
    no_wrap: bool,
    gutter_bottom: bool,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Typography {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: TypographyKind::default(),
            color: TextColor::default(),
            no_wrap: false,
            gutter_bottom: false,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn variant(mut self, variant: TypographyKind) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: impl Into<TextColor>) -> Self {
        self.color = color.into();
        self
    }

    /// Keeps the text on one line, truncating with an ellipsis.
    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn gutter_bottom(mut self, gutter_bottom: bool) -> Self {
        self.gutter_bottom = gutter_bottom;
        self
    }

    /// The text as displayed. Overlines are uppercased.
    pub fn display_text(&self) -> SharedString {
        match self.variant {
            TypographyKind::Overline => self.text.to_uppercase().into(),
            _ => self.text.clone(),
        }
    }
}

impl ThemedStyle for Typography {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let font = &tokens.layout().text.default_font;

        let mut style = StyleRefinement::default()
            .font_family(font.primary_family())
            .text_size(self.variant.size(tokens))
            .font_weight(self.variant.font_weight(tokens))
            .line_height(font.line_height)
            .text_color(self.color.resolve(tokens));

        if self.no_wrap {
            style = style
                .min_w_0()
                .overflow_hidden()
                .whitespace_nowrap()
                .text_ellipsis();
        }

        if self.gutter_bottom {
            style = style.mb(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(0.35))));
        }

        style
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Typography {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let style = self.resolve_style(&cx.theme_tokens());

        div()
            .refine_style(&style)
            .child(self.display_text())
            .children(self.children)
    }
}

impl ParentElement for Typography {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Typography {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}
