#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::time::Duration;

use enum_assoc::Assoc;
use gpui::{
    AbsoluteLength, AnyElement, App, ClickEvent, Corners, CursorStyle, ElementId, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce, Rgba, SharedString,
    StatefulInteractiveElement, StyleRefinement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;
use smallvec::SmallVec;

use crate::{
    components::{Icon, IconSize},
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt, ClickHandler},
    primitives::min_w0_wrapper,
    style::{StyledExt, ThemedStyle, text_refinement},
    theme::{ColorKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeTokens},
    utils::{
        DebugSelectorExt, ElementIdExt, RgbaExt, SquircleExt, eased_transition, resolved_corners,
        transparent,
    },
};

const MIN_WIDTH: f32 = 64.;
const HOVER_ALPHA: f32 = 0.04;

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn height(&self) -> Pixels)]
#[func(pub fn font_size(&self) -> Pixels)]
#[func(pub fn padding_x(&self) -> Pixels)]
pub enum ButtonSize {
    #[assoc(height = px(30.))]
    #[assoc(font_size = px(13.))]
    #[assoc(padding_x = px(10.))]
    Small,
    #[default]
    #[assoc(height = px(36.))]
    #[assoc(font_size = px(14.))]
    #[assoc(padding_x = px(16.))]
    Medium,
    #[assoc(height = px(42.))]
    #[assoc(font_size = px(15.))]
    #[assoc(padding_x = px(22.))]
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Contained,
    Outlined,
    Text,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [
        ButtonVariant::Contained,
        ButtonVariant::Outlined,
        ButtonVariant::Text,
    ];

    pub fn as_granular(&self, color: ColorKind, tokens: &ThemeTokens<'_>) -> GranularButtonVariant {
        let palette = color.resolve(tokens);

        match self {
            ButtonVariant::Contained => GranularButtonVariant {
                bg_color: palette.main,
                bg_hover_color: palette.dark,
                text_color: palette.contrast_text,
                border_color: transparent(),
            },
            ButtonVariant::Outlined => GranularButtonVariant {
                bg_color: transparent(),
                bg_hover_color: palette.main.alpha(HOVER_ALPHA),
                text_color: palette.main,
                border_color: palette.main.fade(0.5),
            },
            ButtonVariant::Text => GranularButtonVariant {
                bg_color: transparent(),
                bg_hover_color: palette.main.alpha(HOVER_ALPHA),
                text_color: palette.main,
                border_color: transparent(),
            },
        }
    }

    fn as_disabled(&self, tokens: &ThemeTokens<'_>) -> GranularButtonVariant {
        let colors = tokens.colors();
        let bg_color = match self {
            ButtonVariant::Contained => colors.action.disabled_background,
            ButtonVariant::Outlined | ButtonVariant::Text => transparent(),
        };

        GranularButtonVariant {
            bg_color,
            bg_hover_color: bg_color,
            text_color: colors.text.disabled,
            border_color: match self {
                ButtonVariant::Outlined => colors.action.disabled_background,
                _ => transparent(),
            },
        }
    }
}

/// Fully resolved button colors. Pass one to [`Button::variant`] to bypass
/// the palette lookup entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GranularButtonVariant {
    pub bg_color: Rgba,
    pub bg_hover_color: Rgba,
    pub text_color: Rgba,
    pub border_color: Rgba,
}

// Lets `Button::variant` accept both `ButtonVariant` and `GranularButtonVariant`.
#[derive(Clone, Copy)]
enum ButtonVariantEither {
    Left(ButtonVariant),
    Right(GranularButtonVariant),
}

impl From<ButtonVariant> for ButtonVariantEither {
    fn from(value: ButtonVariant) -> Self {
        ButtonVariantEither::Left(value)
    }
}

impl From<GranularButtonVariant> for ButtonVariantEither {
    fn from(value: GranularButtonVariant) -> Self {
        ButtonVariantEither::Right(value)
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    size: ButtonSize,
    variant: ButtonVariantEither,
    color: ColorKind,
    disabled: bool,
    full_width: bool,
    start_icon: Option<Icon>,
    end_icon: Option<Icon>,
    on_click: Option<ClickHandler>,
    click_behavior: ClickBehavior,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            size: ButtonSize::default(),
            variant: ButtonVariantEither::Left(ButtonVariant::default()),
            color: ColorKind::Primary,
            disabled: false,
            full_width: false,
            start_icon: None,
            end_icon: None,
            on_click: None,
            click_behavior: ClickBehavior::default(),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    #[allow(private_bounds)]
    pub fn variant(mut self, variant: impl Into<ButtonVariantEither>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn start_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn end_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(std::rc::Rc::new(on_click));
        self
    }

    /// The label as displayed. Button labels are uppercased.
    pub fn label(&self) -> Option<SharedString> {
        self.text
            .as_ref()
            .map(|text| SharedString::from(text.to_uppercase()))
    }

    /// The text style of the label: the resolved text keys, so text
    /// overrides on the button reach the label.
    pub fn label_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        text_refinement(&self.resolve_style(tokens)).text_ellipsis()
    }

    /// The corners of the painted squircle. A caller radius wins over the
    /// theme radius.
    pub fn surface_corners(&self, tokens: &ThemeTokens<'_>) -> Corners<AbsoluteLength> {
        resolved_corners(
            &self.resolve_style(tokens).corner_radii,
            ThemeLayoutCornerRadiiKind::Sm.resolve(tokens),
        )
    }

    pub fn colors(&self, tokens: &ThemeTokens<'_>) -> GranularButtonVariant {
        match self.variant {
            ButtonVariantEither::Left(variant) if self.disabled => variant.as_disabled(tokens),
            ButtonVariantEither::Left(variant) => variant.as_granular(self.color, tokens),
            ButtonVariantEither::Right(granular) if self.disabled => GranularButtonVariant {
                bg_hover_color: granular.bg_color,
                text_color: tokens.colors().text.disabled,
                ..granular
            },
            ButtonVariantEither::Right(granular) => granular,
        }
    }
}

impl ThemedStyle for Button {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let colors = self.colors(tokens);

        let style = StyleRefinement::default()
            .relative()
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .gap(px(8.))
            .h(self.size.height())
            .min_w(px(MIN_WIDTH))
            .px(self.size.padding_x())
            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(tokens))
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(self.size.font_size())
            .font_weight(FontWeight::MEDIUM)
            .text_color(colors.text_color)
            .cursor(if self.disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            });

        if self.full_width {
            style.w_full()
        } else {
            style
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let colors = self.colors(&tokens);
        let label_style = self.label_style(&tokens);
        let corners = self.surface_corners(&tokens);
        let label_id = self.id.clone();
        let text_color = style
            .text
            .color
            .unwrap_or_else(|| colors.text_color.into());
        let has_caller_background = self.style.background.is_some();
        let label = self.label();
        let is_disabled = self.disabled;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let bg_color_transition = eased_transition(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            Duration::from_millis(250),
            if is_hover && !is_disabled {
                colors.bg_hover_color
            } else {
                colors.bg_color
            },
        );

        let click_behavior = self.click_behavior;

        div()
            .id(self.id)
            .refine_style(&style)
            .when(!has_caller_background, |this| {
                this.child(
                    squircle()
                        .absolute_expand()
                        .match_corners(corners)
                        .border(px(1.))
                        .border_inside()
                        .border_color(colors.border_color)
                        .with_transitions(bg_color_transition, |_cx, this, bg_color| {
                            this.bg(bg_color)
                        }),
                )
            })
            .when_some(self.start_icon, |this, icon| {
                this.child(
                    icon.default_size(IconSize::Small)
                        .default_color(text_color),
                )
            })
            .when_some(label, |this, label| {
                this.child(
                    min_w0_wrapper()
                        .debug_tag(move || format!("{label_id}:label"))
                        .refine_style(&label_style)
                        .child(label),
                )
            })
            .children(self.children)
            .when_some(self.end_icon, |this, icon| {
                this.child(
                    icon.default_size(IconSize::Small)
                        .default_color(text_color),
                )
            })
            .when(!is_disabled, |this| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());
                })
                .when_some(self.on_click, |this, on_click| {
                    this.on_click(click_behavior.wrap(on_click))
                })
            })
    }
}

impl ParentElement for Button {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl ClickBehaviorExt for Button {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

#[cfg(test)]
mod tests {
    use gpui::{AbsoluteLength, DefiniteLength, Length, relative};

    use super::*;
    use crate::{assets::MosaicIconKind, theme::Theme};

    #[test]
    fn test_sizes_map_to_documented_dimensions() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let expected = [(30., 13., 10.), (36., 14., 16.), (42., 15., 22.)];

        for (size, (height, font_size, padding)) in ButtonSize::ALL.into_iter().zip(expected) {
            let style = Button::new("button").size(size).resolve_style(&tokens);

            assert_eq!(style.size.height, Some(Length::from(px(height))), "{size:?}");
            assert_eq!(
                style.text.font_size,
                Some(AbsoluteLength::from(px(font_size))),
                "{size:?}"
            );
            assert_eq!(
                style.padding.left,
                Some(DefiniteLength::from(px(padding))),
                "{size:?}"
            );
        }
    }

    #[test]
    fn test_defaults_are_medium_contained_primary() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let primary = tokens.colors().palette.primary;

        let button = Button::new("button");
        assert_eq!(button.size, ButtonSize::Medium);
        assert_eq!(button.color, ColorKind::Primary);

        let colors = button.colors(&tokens);
        assert_eq!(colors.bg_color, primary.main);
        assert_eq!(colors.text_color, primary.contrast_text);
    }

    #[test]
    fn test_variant_colors() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let error = tokens.colors().palette.error;

        let outlined = ButtonVariant::Outlined.as_granular(ColorKind::Error, &tokens);
        assert_eq!(outlined.text_color, error.main);
        assert_eq!(outlined.border_color, error.main.fade(0.5));
        assert_eq!(outlined.bg_color.a, 0.);

        let text = ButtonVariant::Text.as_granular(ColorKind::Error, &tokens);
        assert_eq!(text.text_color, error.main);
        assert_eq!(text.border_color.a, 0.);
    }

    #[test]
    fn test_disabled_colors() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let colors = tokens.colors();

        for variant in ButtonVariant::ALL {
            let button = Button::new("button").variant(variant).disabled(true);
            let granular = button.colors(&tokens);

            assert_eq!(granular.text_color, colors.text.disabled, "{variant:?}");
            assert_eq!(granular.bg_hover_color, granular.bg_color, "{variant:?}");
            assert_eq!(
                button.resolve_style(&tokens).mouse_cursor,
                Some(CursorStyle::OperationNotAllowed)
            );
        }

        let contained = Button::new("button").disabled(true).colors(&tokens);
        assert_eq!(contained.bg_color, colors.action.disabled_background);
    }

    #[test]
    fn test_granular_variant_bypasses_palette() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let granular = GranularButtonVariant {
            bg_color: gpui::rgb(0x112233),
            bg_hover_color: gpui::rgb(0x223344),
            text_color: gpui::rgb(0xFFFFFF),
            border_color: transparent(),
        };

        let button = Button::new("button").variant(granular);
        assert_eq!(button.colors(&tokens), granular);
    }

    #[test]
    fn test_full_width_and_caller_overrides() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = Button::new("button").full_width(true).resolve_style(&tokens);
        assert_eq!(style.size.width, Some(Length::from(relative(1.))));

        let style = Button::new("button")
            .h(px(50.))
            .ml(px(12.))
            .resolve_style(&tokens);
        assert_eq!(style.size.height, Some(Length::from(px(50.))));
        assert_eq!(style.margin.left, Some(Length::from(px(12.))));
        assert_eq!(style.size.width, None);
    }

    #[test]
    fn test_label_is_uppercased() {
        let button = Button::new("button")
            .text("Save draft")
            .start_icon(MosaicIconKind::Checkmark);

        assert_eq!(button.label(), Some(SharedString::from("SAVE DRAFT")));
        assert!(button.start_icon.is_some());
        assert_eq!(Button::new("button").label(), None);
    }

    #[test]
    fn test_caller_text_overrides_reach_the_label() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let button = Button::new("button")
            .text("Save")
            .text_size(px(20.))
            .font_family("Inter");
        let label = button.label_style(&tokens);

        assert_eq!(label.text.font_size, Some(AbsoluteLength::from(px(20.))));
        assert_eq!(label.text.font_family, Some(SharedString::from("Inter")));
        assert_eq!(
            label.text.color,
            Some(button.colors(&tokens).text_color.into())
        );
        assert_eq!(label.size.height, None);
        assert_eq!(label.padding.left, None);
    }

    #[test]
    fn test_label_defaults_to_size_font() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let label = Button::new("button")
            .size(ButtonSize::Large)
            .label_style(&tokens);
        assert_eq!(label.text.font_size, Some(AbsoluteLength::from(px(15.))));
    }

    #[test]
    fn test_caller_radius_reaches_the_squircle() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let theme_radius = AbsoluteLength::from(tokens.layout().corner_radii.sm);

        let corners = Button::new("button").surface_corners(&tokens);
        assert_eq!(corners.top_left, theme_radius);
        assert_eq!(corners.bottom_right, theme_radius);

        let corners = Button::new("button").rounded(px(18.)).surface_corners(&tokens);
        assert_eq!(corners.top_left, AbsoluteLength::from(px(18.)));
        assert_eq!(corners.bottom_left, AbsoluteLength::from(px(18.)));
    }

    #[cfg(feature = "test-support")]
    mod gpui_tests {
        use gpui::{IntoElement, ParentElement, TestAppContext};

        use super::*;
        use crate::utils::{TextStyleRecorder, draw_in_window};

        #[gpui::test]
        fn test_caller_text_size_is_painted(cx: &mut TestAppContext) {
            let recorder = TextStyleRecorder::default();
            let child = recorder.clone();

            let mut cx = draw_in_window(cx, move |_window, _cx| {
                div()
                    .flex()
                    .flex_col()
                    .child(Button::new("regular").text("Save"))
                    .child(
                        Button::new("large")
                            .text("Save")
                            .text_size(px(20.))
                            .child(child.clone()),
                    )
                    .into_any_element()
            });

            let inherited = recorder.recorded().expect("button children are rendered");
            assert_eq!(inherited.font_size, AbsoluteLength::from(px(20.)));

            let regular = cx.debug_bounds("regular:label").expect("regular label painted");
            let large = cx.debug_bounds("large:label").expect("large label painted");
            assert!(
                large.size.height > regular.size.height,
                "a 20px label must be taller than a 14px one"
            );
        }
    }
}
