use gpui::{
    AnyElement, FontWeight, IntoElement, ParentElement, Pixels, RenderOnce, SharedString,
    StyleRefinement, Styled, div, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    style::{StyledExt, ThemedStyle},
    theme::{
        ThemeExt, ThemeLayoutPaddingKind, ThemeLayoutSizeKind, ThemeTokens, TypographyKind,
    },
};

/// A vertical container for [`ListItem`](crate::components::ListItem)s.
#[derive(IntoElement)]
pub struct List {
    dense: bool,
    disable_padding: bool,
    subheader: Option<SharedString>,
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl List {
    pub fn new() -> Self {
        Self {
            dense: false,
            disable_padding: false,
            subheader: None,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    pub fn disable_padding(mut self, disable_padding: bool) -> Self {
        self.disable_padding = disable_padding;
        self
    }

    pub fn subheader(mut self, subheader: impl Into<SharedString>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }

    fn vertical_padding(&self, tokens: &ThemeTokens<'_>) -> Pixels {
        match (self.disable_padding, self.dense) {
            (true, _) => px(0.),
            (false, true) => ThemeLayoutPaddingKind::Sm.resolve(tokens),
            (false, false) => ThemeLayoutPaddingKind::Md.resolve(tokens),
        }
    }

    fn subheader_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        StyleRefinement::default()
            .h(ThemeLayoutSizeKind::Xl.resolve(tokens))
            .flex()
            .items_center()
            .px(ThemeLayoutPaddingKind::Lg.resolve(tokens))
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(TypographyKind::Caption.size(tokens))
            .font_weight(FontWeight::MEDIUM)
            .text_color(tokens.colors().text.secondary)
            .bg(tokens.colors().background.paper)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemedStyle for List {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let padding = self.vertical_padding(tokens);
        let style = StyleRefinement::default()
            .relative()
            .w_full()
            .flex()
            .flex_col()
            .pb(padding);

        if self.subheader.is_some() {
            style.pt(px(0.))
        } else {
            style.pt(padding)
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for List {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let subheader_style = self.subheader_style(&tokens);

        div()
            .refine_style(&style)
            .when_some(self.subheader, |this, subheader| {
                this.child(div().refine_style(&subheader_style).child(subheader))
            })
            .children(self.children)
    }
}

impl ParentElement for List {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for List {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}
