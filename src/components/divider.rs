use gpui::{AlignSelf, IntoElement, RenderOnce, StyleRefinement, Styled, div, px};

use crate::{
    style::{StyledExt, ThemedStyle},
    theme::{ThemeExt, ThemeTokens},
    utils::DebugSelectorExt,
};

const THICKNESS: f32 = 1.;
const INSET: f32 = 72.;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DividerVariant {
    #[default]
    FullWidth,
    /// Leaves room for a leading avatar or icon.
    Inset,
    Middle,
}

/// A thin line separating content.
#[derive(IntoElement)]
pub struct Divider {
    orientation: Orientation,
    variant: DividerVariant,
    style: StyleRefinement,
}

impl Divider {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::default(),
            variant: DividerVariant::default(),
            style: StyleRefinement::default(),
        }
    }

    pub fn vertical() -> Self {
        Self::new().orientation(Orientation::Vertical)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn variant(mut self, variant: DividerVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemedStyle for Divider {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let style = StyleRefinement::default()
            .flex_none()
            .bg(tokens.colors().divider);

        // Spaced variants stretch along the main axis so their margins shrink
        // the rule instead of pushing it past the container.
        match (self.orientation, self.variant) {
            (Orientation::Horizontal, DividerVariant::FullWidth) => style.w_full().h(px(THICKNESS)),
            (Orientation::Horizontal, DividerVariant::Inset) => {
                stretched(style.w_auto().h(px(THICKNESS)).ml(px(INSET)))
            }
            (Orientation::Horizontal, DividerVariant::Middle) => {
                stretched(style.w_auto().h(px(THICKNESS)).mx(px(16.)))
            }
            (Orientation::Vertical, DividerVariant::FullWidth) => style.h_full().w(px(THICKNESS)),
            (Orientation::Vertical, DividerVariant::Inset) => {
                stretched(style.h_auto().w(px(THICKNESS)).mt(px(INSET)))
            }
            (Orientation::Vertical, DividerVariant::Middle) => {
                stretched(style.h_auto().w(px(THICKNESS)).my(px(8.)))
            }
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

fn stretched(mut style: StyleRefinement) -> StyleRefinement {
    style.align_self = Some(AlignSelf::Stretch);
    style
}

impl RenderOnce for Divider {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let style = self.resolve_style(&cx.theme_tokens());

        div().debug_tag(|| "divider".into()).refine_style(&style)
    }
}

impl Styled for Divider {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use gpui::{Length, relative};

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_horizontal_divider_is_one_pixel_tall() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = Divider::new().resolve_style(&tokens);

        assert_eq!(style.size.height, Some(Length::from(px(THICKNESS))));
        assert_eq!(style.size.width, Some(Length::from(relative(1.))));
        assert_eq!(style.margin.left, None);
    }

    #[test]
    fn test_vertical_divider_is_one_pixel_wide() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = Divider::vertical().resolve_style(&tokens);

        assert_eq!(style.size.width, Some(Length::from(px(THICKNESS))));
        assert_eq!(style.size.height, Some(Length::from(relative(1.))));
    }

    #[test]
    fn test_variant_margins() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let inset = Divider::new()
            .variant(DividerVariant::Inset)
            .resolve_style(&tokens);
        assert_eq!(inset.margin.left, Some(Length::from(px(INSET))));
        assert_eq!(inset.margin.right, None);

        let middle = Divider::new()
            .variant(DividerVariant::Middle)
            .resolve_style(&tokens);
        assert_eq!(middle.margin.left, Some(Length::from(px(16.))));
        assert_eq!(middle.margin.right, Some(Length::from(px(16.))));

        let middle = Divider::vertical()
            .variant(DividerVariant::Middle)
            .resolve_style(&tokens);
        assert_eq!(middle.margin.top, Some(Length::from(px(8.))));
    }

    #[test]
    fn test_spaced_variants_stretch_instead_of_filling() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let inset = Divider::new()
            .variant(DividerVariant::Inset)
            .resolve_style(&tokens);
        assert_eq!(inset.size.width, Some(Length::Auto));
        assert_eq!(inset.align_self, Some(AlignSelf::Stretch));

        let middle = Divider::vertical()
            .variant(DividerVariant::Middle)
            .resolve_style(&tokens);
        assert_eq!(middle.size.height, Some(Length::Auto));
        assert_eq!(middle.size.width, Some(Length::from(px(THICKNESS))));
        assert_eq!(middle.align_self, Some(AlignSelf::Stretch));

        let full = Divider::new().resolve_style(&tokens);
        assert_eq!(full.align_self, None);
    }

    #[test]
    fn test_caller_thickness_wins() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = Divider::new().h(px(2.)).opacity(0.5).resolve_style(&tokens);

        assert_eq!(style.size.height, Some(Length::from(px(2.))));
        assert_eq!(style.opacity, Some(0.5));
    }

    #[cfg(feature = "test-support")]
    mod gpui_tests {
        use gpui::{InteractiveElement, IntoElement, ParentElement, TestAppContext};

        use super::*;
        use crate::utils::draw_in_window;

        #[gpui::test]
        fn test_middle_divider_stays_inside_its_container(cx: &mut TestAppContext) {
            let mut cx = draw_in_window(cx, |_window, _cx| {
                div()
                    .debug_selector(|| "column".into())
                    .flex()
                    .flex_col()
                    .w(px(200.))
                    .child(Divider::new().variant(DividerVariant::Middle))
                    .into_any_element()
            });

            let column = cx.debug_bounds("column").expect("column painted");
            let divider = cx.debug_bounds("divider").expect("divider painted");
            assert_eq!(divider.size.width, px(168.));
            assert_eq!(divider.origin.x, column.origin.x + px(16.));
            assert_eq!(divider.size.height, px(THICKNESS));
        }
    }
}
