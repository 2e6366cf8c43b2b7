#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{rc::Rc, time::Duration};

use enum_assoc::Assoc;
use gpui::{
    AbsoluteLength, App, Corners, CursorStyle, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, RenderOnce, Rgba, StatefulInteractiveElement, StyleRefinement, Styled,
    Window, div, prelude::FluentBuilder, px, relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;

use crate::{
    assets::MosaicIconKind,
    components::{Icon, IconColor, IconSize},
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    style::{StyledExt, ThemedStyle},
    theme::{ColorKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeTokens},
    utils::{
        DebugSelectorExt, ElementIdExt, RgbaExt, SquircleExt, disabled_transition, eased_transition, faded_opacity,
        resolved_corners, transparent,
    },
};

const BORDER_WIDTH: f32 = 2.;

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn dimension(&self) -> Pixels)]
pub enum CheckboxSize {
    #[assoc(dimension = px(18.))]
    Small,
    #[default]
    #[assoc(dimension = px(24.))]
    Medium,
    #[assoc(dimension = px(30.))]
    Large,
}

impl CheckboxSize {
    pub const ALL: [CheckboxSize; 3] = [
        CheckboxSize::Small,
        CheckboxSize::Medium,
        CheckboxSize::Large,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxColors {
    pub background: Rgba,
    pub border: Rgba,
    pub glyph: Rgba,
}

/// A stateless checkbox. The caller owns `checked` and `indeterminate` and
/// supplies them on every render.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    size: CheckboxSize,
    color: ColorKind,
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    on_click: Option<Rc<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    click_behavior: ClickBehavior,
    style: StyleRefinement,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            size: CheckboxSize::default(),
            color: ColorKind::Primary,
            checked: false,
            indeterminate: false,
            disabled: false,
            on_click: None,
            click_behavior: ClickBehavior::default(),
            style: StyleRefinement::default(),
        }
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Shows a dash instead of a checkmark. Takes precedence over `checked`
    /// for display only.
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the value the checkbox should take after the click.
    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn is_marked(&self) -> bool {
        self.checked || self.indeterminate
    }

    pub fn glyph(&self) -> Option<MosaicIconKind> {
        if self.indeterminate {
            Some(MosaicIconKind::Remove)
        } else if self.checked {
            Some(MosaicIconKind::Checkmark)
        } else {
            None
        }
    }

    pub fn toggled_value(&self) -> bool {
        !self.checked
    }

    /// The corners of the painted squircle. A caller radius wins over the
    /// theme radius.
    pub fn surface_corners(&self, tokens: &ThemeTokens<'_>) -> Corners<AbsoluteLength> {
        resolved_corners(
            &self.resolve_style(tokens).corner_radii,
            ThemeLayoutCornerRadiiKind::Sm.resolve(tokens),
        )
    }

    pub fn colors(&self, tokens: &ThemeTokens<'_>) -> CheckboxColors {
        let colors = tokens.colors();
        let palette = self.color.resolve(tokens);

        match (self.is_marked(), self.disabled) {
            (true, false) => CheckboxColors {
                background: palette.main,
                border: palette.main,
                glyph: palette.contrast_text,
            },
            (true, true) => CheckboxColors {
                background: colors.text.disabled,
                border: colors.text.disabled,
                glyph: colors.background.paper,
            },
            (false, false) => CheckboxColors {
                background: transparent(),
                border: colors.text.secondary,
                glyph: transparent(),
            },
            (false, true) => CheckboxColors {
                background: transparent(),
                border: colors.text.disabled,
                glyph: transparent(),
            },
        }
    }
}

impl ThemedStyle for Checkbox {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let dimension = self.size.dimension();

        StyleRefinement::default()
            .relative()
            .size(dimension)
            .min_w(dimension)
            .min_h(dimension)
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(tokens))
            .cursor(if self.disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Checkbox {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let colors = self.colors(&tokens);
        let hover_border_color = self.color.resolve(&tokens).main;
        let corners = self.surface_corners(&tokens);
        let caller_opacity = style.opacity;
        let glyph = self.glyph();
        let is_disabled = self.disabled;
        let toggled_value = self.toggled_value();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let checked_transition = eased_transition(
            self.id.with_suffix("state:transition:checked"),
            window,
            cx,
            Duration::from_millis(285),
            self.is_marked() as u8 as f32,
        );

        let border_color_transition = eased_transition(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(365),
            if is_hover && !is_disabled && !self.is_marked() {
                hover_border_color
            } else {
                colors.border
            },
        );

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);
        let click_behavior = self.click_behavior;
        let selector_id = self.id.clone();

        div()
            .id(self.id)
            .debug_tag(move || selector_id.to_string())
            .refine_style(&style)
            .with_transitions(disabled_transition, move |_cx, this, fade| {
                this.opacity(faded_opacity(caller_opacity, fade))
            })
            .child(
                squircle()
                    .absolute_expand()
                    .match_corners(corners)
                    .border(px(BORDER_WIDTH))
                    .border_inside()
                    .with_transitions(
                        (checked_transition, border_color_transition),
                        move |_cx, this, (checked_delta, border_color)| {
                            this.bg(colors.background.fade(checked_delta))
                                .border_color(border_color)
                        },
                    ),
            )
            .when_some(glyph, |this, glyph| {
                this.child(
                    Icon::new(glyph)
                        .size(IconSize::Inherit)
                        .w(relative(0.75))
                        .h(relative(0.75))
                        .color(IconColor::Custom(colors.glyph.into())),
                )
            })
            .when(!is_disabled, |this| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());
                })
                .when_some(self.on_click, |this, on_click| {
                    this.on_click(move |_event, window, cx| {
                        click_behavior.apply(window, cx);
                        on_click(&toggled_value, window, cx);
                    })
                })
            })
    }
}

impl Styled for Checkbox {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl ClickBehaviorExt for Checkbox {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}
