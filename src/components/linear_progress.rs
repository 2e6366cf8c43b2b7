use std::time::Duration;

use gpui::{
    Animation, AnimationExt, ElementId, IntoElement, ParentElement, Refineable, RenderOnce,
    SharedString, StyleRefinement, Styled, div, ease_in_out, prelude::FluentBuilder, px,
    relative,
};
use gpui_transitions::TransitionExt;

use crate::{
    style::{StyledExt, ThemedStyle, text_refinement},
    theme::{ColorKind, ThemeExt, ThemeTokens, TypographyKind},
    utils::{ElementIdExt, RgbaExt, eased_transition},
};

const TRACK_HEIGHT: f32 = 4.;
const LABEL_MIN_WIDTH: f32 = 35.;
const INDETERMINATE_BAR_FRACTION: f32 = 0.4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressVariant {
    Determinate,
    #[default]
    Indeterminate,
}

/// Clamps a progress value into `0..=100`. `NaN` is treated as `0` and `-0`
/// becomes `0`.
pub fn clamp_progress(value: f32) -> f32 {
    if value.is_nan() {
        tracing::warn!("progress value is NaN, using 0");
        return 0.;
    }

    let clamped = value.clamp(0., 100.) + 0.;
    if clamped != value {
        tracing::warn!(value, clamped, "progress value out of range");
    }
    clamped
}

/// A horizontal progress bar with an optional percentage label.
#[derive(IntoElement)]
pub struct LinearProgress {
    id: ElementId,
    variant: ProgressVariant,
    value: f32,
    show_label: bool,
    color: ColorKind,
    style: StyleRefinement,
}

impl LinearProgress {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            variant: ProgressVariant::default(),
            value: 0.,
            show_label: false,
            color: ColorKind::Primary,
            style: StyleRefinement::default(),
        }
    }

    pub fn variant(mut self, variant: ProgressVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the completed percentage. Only used by determinate bars.
    pub fn value(mut self, value: f32) -> Self {
        self.value = clamp_progress(value);
        self
    }

    pub fn show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn fraction(&self) -> f32 {
        self.value / 100.
    }

    fn is_labelled(&self) -> bool {
        self.show_label && self.variant == ProgressVariant::Determinate
    }

    /// The rounded percentage shown next to the bar, if any.
    pub fn label(&self) -> Option<SharedString> {
        self.is_labelled()
            .then(|| format!("{}%", self.value.round()).into())
    }

    /// The style of the bar's track, independent of the caller's overrides.
    pub fn track_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let palette = self.color.resolve(tokens);

        StyleRefinement::default()
            .relative()
            .w_full()
            .h(px(TRACK_HEIGHT))
            .overflow_hidden()
            .rounded(px(TRACK_HEIGHT / 2.))
            .bg(palette.main.fade(0.3))
    }

    /// The style of the percentage label. Text overrides on the component
    /// apply to it.
    pub fn label_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let mut style = StyleRefinement::default()
            .flex_none()
            .min_w(px(LABEL_MIN_WIDTH))
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(TypographyKind::Body2.size(tokens))
            .text_color(tokens.colors().text.secondary);
        style.refine(&text_refinement(self.caller_style()));
        style
    }
}

impl ThemedStyle for LinearProgress {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        if self.is_labelled() {
            StyleRefinement::default()
                .w_full()
                .flex()
                .flex_row()
                .items_center()
                .gap(px(8.))
        } else {
            self.track_style(tokens)
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for LinearProgress {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let bar_color = self.color.resolve(&tokens).main;
        let label = self.label();
        let label_style = self.label_style(&tokens);
        let track_style = if label.is_some() {
            self.track_style(&tokens)
        } else {
            style.clone()
        };

        let bar = div().absolute().top_0().h_full().bg(bar_color);

        let bar = match self.variant {
            ProgressVariant::Determinate => {
                let fill = eased_transition(
                    self.id.with_suffix("state:transition:fill"),
                    window,
                    cx,
                    Duration::from_millis(400),
                    self.fraction(),
                );

                bar.left_0()
                    .with_transitions(fill, |_cx, this, fraction| this.w(relative(fraction)))
                    .into_any_element()
            }
            ProgressVariant::Indeterminate => bar
                .w(relative(INDETERMINATE_BAR_FRACTION))
                .with_animation(
                    self.id.with_suffix("animation:indeterminate"),
                    Animation::new(Duration::from_millis(1500))
                        .repeat()
                        .with_easing(ease_in_out),
                    |this, delta| {
                        this.left(relative(
                            (1. + INDETERMINATE_BAR_FRACTION) * delta - INDETERMINATE_BAR_FRACTION,
                        ))
                    },
                )
                .into_any_element(),
        };

        let track = div().refine_style(&track_style).child(bar);

        match label {
            Some(label) => div()
                .refine_style(&style)
                .child(div().flex_1().child(track))
                .child(div().refine_style(&label_style).child(label))
                .into_any_element(),
            None => track.into_any_element(),
        }
    }
}

impl Styled for LinearProgress {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use gpui::{AbsoluteLength, Display, Length};

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_defaults() {
        let progress = LinearProgress::new("progress");

        assert_eq!(progress.variant, ProgressVariant::Indeterminate);
        assert_eq!(progress.value, 0.);
        assert_eq!(progress.color, ColorKind::Primary);
        assert_eq!(progress.label(), None);
    }

    #[test]
    fn test_determinate_label_is_rounded() {
        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .value(75.6)
            .show_label(true);

        assert_eq!(progress.label(), Some(SharedString::from("76%")));
    }

    #[test]
    fn test_label_requires_determinate_variant() {
        let progress = LinearProgress::new("progress").value(40.).show_label(true);
        assert_eq!(progress.label(), None);

        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .value(40.);
        assert_eq!(progress.label(), None);
    }

    #[test]
    fn test_value_is_clamped() {
        assert_eq!(clamp_progress(120.), 100.);
        assert_eq!(clamp_progress(-3.), 0.);
        assert_eq!(clamp_progress(f32::NAN), 0.);
        assert_eq!(clamp_progress(42.5), 42.5);
        assert!(clamp_progress(-0.).is_sign_positive());

        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .value(250.)
            .show_label(true);
        assert_eq!(progress.label(), Some(SharedString::from("100%")));
        assert_eq!(progress.fraction(), 1.);
    }

    #[test]
    fn test_unlabelled_bar_derives_the_track() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = LinearProgress::new("progress").resolve_style(&tokens);

        assert_eq!(style.size.height, Some(Length::from(px(TRACK_HEIGHT))));
        assert_eq!(
            style.corner_radii.top_left,
            Some(AbsoluteLength::from(px(2.)))
        );
        assert!(style.background.is_some());
    }

    #[test]
    fn test_labelled_bar_derives_a_row() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .value(10.)
            .show_label(true);
        let style = progress.resolve_style(&tokens);

        assert_eq!(style.display, Some(Display::Flex));
        assert_eq!(style.size.height, None);
        assert!(style.background.is_none());

        let track = progress.track_style(&tokens);
        assert_eq!(track.size.height, Some(Length::from(px(TRACK_HEIGHT))));
    }

    #[test]
    fn test_caller_height_overrides_track_height() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = LinearProgress::new("progress")
            .h(px(8.))
            .mt(px(4.))
            .resolve_style(&tokens);

        assert_eq!(style.size.height, Some(Length::from(px(8.))));
        assert_eq!(style.margin.top, Some(Length::from(px(4.))));
        assert_eq!(style.size.width, Some(Length::from(relative(1.))));
    }

    #[test]
    fn test_negative_zero_labels_as_zero() {
        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .value(-0.)
            .show_label(true);

        assert_eq!(progress.label(), Some(SharedString::from("0%")));

        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .value(-0.3)
            .show_label(true);
        assert_eq!(progress.label(), Some(SharedString::from("0%")));
    }

    #[test]
    fn test_caller_text_reaches_the_label() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let progress = LinearProgress::new("progress")
            .variant(ProgressVariant::Determinate)
            .show_label(true);
        let label = progress.label_style(&tokens);
        assert_eq!(
            label.text.color,
            Some(tokens.colors().text.secondary.into())
        );

        let label = progress.text_color(gpui::red()).text_size(px(18.)).label_style(&tokens);
        assert_eq!(label.text.color, Some(gpui::red()));
        assert_eq!(label.text.font_size, Some(AbsoluteLength::from(px(18.))));
        assert_eq!(label.min_size.width, Some(Length::from(px(LABEL_MIN_WIDTH))));
    }
}
