use gpui::{
    AnyElement, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    StyleRefinement, Styled, div, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    style::{StyledExt, ThemedStyle},
    theme::{ColorKind, ThemeExt, ThemeTokens},
};

const STANDARD_HEIGHT: f32 = 20.;
const DOT_SIZE: f32 = 8.;
const FONT_SIZE: f32 = 12.;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Standard,
    Dot,
}

/// A small bubble anchored to the top-right corner of its children.
///
/// Styles set on the badge through [`Styled`] apply to the bubble, not to
/// the anchored content.
#[derive(IntoElement)]
pub struct Badge {
    variant: BadgeVariant,
    color: ColorKind,
    content: Option<u32>,
    max: u32,
    show_zero: bool,
    invisible: bool,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Badge {
    pub fn new() -> Self {
        Self {
            variant: BadgeVariant::default(),
            color: ColorKind::Primary,
            content: None,
            max: 99,
            show_zero: false,
            invisible: false,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn content(mut self, content: u32) -> Self {
        self.content = Some(content);
        self
    }

    /// Counts above `max` are shown as `"{max}+"`.
    pub fn max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    pub fn show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    pub fn invisible(mut self, invisible: bool) -> Self {
        self.invisible = invisible;
        self
    }

    pub fn is_visible(&self) -> bool {
        if self.invisible {
            return false;
        }

        match (self.variant, self.content) {
            (BadgeVariant::Dot, Some(0)) => self.show_zero,
            (BadgeVariant::Dot, _) => true,
            (BadgeVariant::Standard, None) => false,
            (BadgeVariant::Standard, Some(0)) => self.show_zero,
            (BadgeVariant::Standard, Some(_)) => true,
        }
    }

    /// The text inside the bubble. Dots never carry a label.
    pub fn label(&self) -> Option<SharedString> {
        match (self.variant, self.content) {
            (BadgeVariant::Dot, _) | (_, None) => None,
            (BadgeVariant::Standard, Some(content)) if content > self.max => {
                Some(format!("{}+", self.max).into())
            }
            (BadgeVariant::Standard, Some(content)) => Some(content.to_string().into()),
        }
    }
}

impl Default for Badge {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemedStyle for Badge {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let palette = self.color.resolve(tokens);

        let style = StyleRefinement::default()
            .absolute()
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(palette.main)
            .text_color(palette.contrast_text);

        match self.variant {
            BadgeVariant::Standard => style
                .top(px(-STANDARD_HEIGHT / 2.))
                .right(px(-STANDARD_HEIGHT / 2.))
                .h(px(STANDARD_HEIGHT))
                .min_w(px(STANDARD_HEIGHT))
                .px(px(6.))
                .font_family(tokens.layout().text.default_font.primary_family())
                .text_size(px(FONT_SIZE))
                .font_weight(FontWeight::MEDIUM),
            BadgeVariant::Dot => style
                .top(px(-DOT_SIZE / 2.))
                .right(px(-DOT_SIZE / 2.))
                .size(px(DOT_SIZE))
                .min_w(px(DOT_SIZE)),
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let style = self.resolve_style(&cx.theme_tokens());
        let is_visible = self.is_visible();
        let label = self.label();

        div()
            .relative()
            .flex()
            .flex_none()
            .children(self.children)
            .when(is_visible, |this| {
                this.child(div().refine_style(&style).children(label))
            })
    }
}

impl ParentElement for Badge {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Badge {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use gpui::{AbsoluteLength, Length};

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_labels() {
        assert_eq!(Badge::new().content(4).label(), Some("4".into()));
        assert_eq!(Badge::new().content(100).label(), Some("99+".into()));
        assert_eq!(Badge::new().content(99).label(), Some("99".into()));
        assert_eq!(Badge::new().content(11).max(9).label(), Some("9+".into()));
        assert_eq!(Badge::new().label(), None);
        assert_eq!(
            Badge::new().variant(BadgeVariant::Dot).content(5).label(),
            None
        );
    }

    #[test]
    fn test_visibility() {
        assert!(!Badge::new().is_visible());
        assert!(!Badge::new().content(0).is_visible());
        assert!(Badge::new().content(0).show_zero(true).is_visible());
        assert!(Badge::new().content(3).is_visible());
        assert!(!Badge::new().content(3).invisible(true).is_visible());
        assert!(Badge::new().variant(BadgeVariant::Dot).is_visible());
        assert!(
            !Badge::new()
                .variant(BadgeVariant::Dot)
                .invisible(true)
                .is_visible()
        );
    }

    #[test]
    fn test_dot_with_zero_count_follows_show_zero() {
        let dot = Badge::new().variant(BadgeVariant::Dot).content(0);
        assert!(!dot.is_visible());
        assert!(dot.show_zero(true).is_visible());
        assert!(
            Badge::new()
                .variant(BadgeVariant::Dot)
                .content(4)
                .is_visible()
        );
    }

    #[test]
    fn test_variant_dimensions() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let standard = Badge::new().content(1).resolve_style(&tokens);
        assert_eq!(standard.size.height, Some(Length::from(px(STANDARD_HEIGHT))));
        assert_eq!(
            standard.text.font_size,
            Some(AbsoluteLength::from(px(FONT_SIZE)))
        );

        let dot = Badge::new().variant(BadgeVariant::Dot).resolve_style(&tokens);
        assert_eq!(dot.size.width, Some(Length::from(px(DOT_SIZE))));
        assert_eq!(dot.size.height, Some(Length::from(px(DOT_SIZE))));
        assert_eq!(dot.text.font_size, None);
    }

    #[test]
    fn test_colors_and_overrides() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = Badge::new()
            .color(ColorKind::Error)
            .text_color(gpui::white())
            .resolve_style(&tokens);

        assert_eq!(style.text.color, Some(gpui::white()));
        assert!(style.background.is_some());
    }
}
