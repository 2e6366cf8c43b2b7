#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, StyleRefinement, Styled,
    Window, div, prelude::FluentBuilder, px,
};

use crate::{
    assets::MosaicIconKind,
    components::{Avatar, AvatarSize, Icon, IconColor, IconSize},
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt, ClickHandler},
    primitives::min_w0_wrapper,
    style::{StyledExt, ThemedStyle, text_refinement},
    theme::{ColorKind, ThemeExt, ThemeTokens},
    utils::{DISABLED_OPACITY, ElementIdExt, RgbaExt, transparent},
};

const FONT_SIZE: f32 = 13.;
const ADORNMENT_INSET: f32 = 4.;

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn height(&self) -> Pixels)]
#[func(pub fn label_padding(&self) -> Pixels)]
#[func(pub fn avatar_size(&self) -> AvatarSize)]
pub enum ChipSize {
    #[assoc(height = px(24.))]
    #[assoc(label_padding = px(8.))]
    #[assoc(avatar_size = AvatarSize::S18)]
    Small,
    #[default]
    #[assoc(height = px(32.))]
    #[assoc(label_padding = px(12.))]
    #[assoc(avatar_size = AvatarSize::S24)]
    Medium,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipVariant {
    #[default]
    Filled,
    Outlined,
}

/// A chip's color: the neutral default or one of the palette roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipColor {
    #[default]
    Default,
    Palette(ColorKind),
}

impl From<ColorKind> for ChipColor {
    fn from(color: ColorKind) -> Self {
        ChipColor::Palette(color)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipColors {
    pub background: Rgba,
    pub text: Rgba,
    pub border: Option<Rgba>,
    pub delete_icon: Rgba,
}

/// A compact element representing an attribute, filter or entity.
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: Option<SharedString>,
    size: ChipSize,
    variant: ChipVariant,
    color: ChipColor,
    avatar: Option<Avatar>,
    icon: Option<Icon>,
    disabled: bool,
    on_delete: Option<ClickHandler>,
    on_click: Option<ClickHandler>,
    click_behavior: ClickBehavior,
    style: StyleRefinement,
}

impl Chip {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            size: ChipSize::default(),
            variant: ChipVariant::default(),
            color: ChipColor::default(),
            avatar: None,
            icon: None,
            disabled: false,
            on_delete: None,
            on_click: None,
            click_behavior: ClickBehavior::default(),
            style: StyleRefinement::default(),
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn size(mut self, size: ChipSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: ChipVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: impl Into<ChipColor>) -> Self {
        self.color = color.into();
        self
    }

    /// Shows an avatar before the label. Its size is set by the chip.
    pub fn avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Shows an icon before the label. Ignored when an avatar is set.
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Shows a trailing delete icon that invokes `on_delete` when clicked.
    pub fn on_delete(
        mut self,
        on_delete: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_delete = Some(std::rc::Rc::new(on_delete));
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(std::rc::Rc::new(on_click));
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some() && !self.disabled
    }

    fn has_leading(&self) -> bool {
        self.avatar.is_some() || self.icon.is_some()
    }

    /// The style of the label: the resolved text keys plus the label's inset.
    pub fn label_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        text_refinement(&self.resolve_style(tokens))
            .px(self.size.label_padding())
            .text_ellipsis()
    }

    pub fn colors(&self, tokens: &ThemeTokens<'_>) -> ChipColors {
        let colors = tokens.colors();

        match (self.variant, self.color) {
            (ChipVariant::Filled, ChipColor::Default) => ChipColors {
                background: colors.action.selected,
                text: colors.text.primary,
                border: None,
                delete_icon: colors.text.secondary,
            },
            (ChipVariant::Filled, ChipColor::Palette(color)) => {
                let palette = color.resolve(tokens);
                ChipColors {
                    background: palette.main,
                    text: palette.contrast_text,
                    border: None,
                    delete_icon: palette.contrast_text.fade(0.7),
                }
            }
            (ChipVariant::Outlined, ChipColor::Default) => ChipColors {
                background: transparent(),
                text: colors.text.primary,
                border: Some(colors.divider),
                delete_icon: colors.text.secondary,
            },
            (ChipVariant::Outlined, ChipColor::Palette(color)) => {
                let palette = color.resolve(tokens);
                ChipColors {
                    background: transparent(),
                    text: palette.main,
                    border: Some(palette.main.fade(0.7)),
                    delete_icon: palette.main.fade(0.7),
                }
            }
        }
    }
}

impl ThemedStyle for Chip {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let colors = self.colors(tokens);
        let height = self.size.height();

        let mut style = StyleRefinement::default()
            .flex()
            .flex_none()
            .flex_row()
            .items_center()
            .h(height)
            .max_w_full()
            .rounded(height / 2.)
            .pl(px(if self.has_leading() { ADORNMENT_INSET } else { 0. }))
            .pr(px(if self.on_delete.is_some() {
                ADORNMENT_INSET
            } else {
                0.
            }))
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(px(FONT_SIZE))
            .text_color(colors.text)
            .bg(colors.background);

        if let Some(border) = colors.border {
            style = style.border_1().border_color(border);
        }

        if self.is_clickable() {
            style = style.cursor(CursorStyle::PointingHand);
        }

        if self.disabled {
            style = style.opacity(DISABLED_OPACITY);
        }

        style
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let colors = self.colors(&tokens);
        let label_style = self.label_style(&tokens);
        let text_color = style
            .text
            .color
            .unwrap_or_else(|| colors.text.into());
        let is_clickable = self.is_clickable();
        let is_disabled = self.disabled;
        let click_behavior = self.click_behavior;
        let delete_id = self.id.with_suffix("delete");

        let leading = match (self.avatar, self.icon) {
            (Some(avatar), _) => Some(avatar.size(self.size.avatar_size()).into_any_element()),
            (None, Some(icon)) => Some(
                icon.default_size(IconSize::Small)
                    .default_color(text_color)
                    .into_any_element(),
            ),
            (None, None) => None,
        };

        div()
            .id(self.id)
            .refine_style(&style)
            .children(leading)
            .when_some(self.label, |this, label| {
                this.child(
                    min_w0_wrapper()
                        .refine_style(&label_style)
                        .child(label),
                )
            })
            .when_some(self.on_delete, |this, on_delete| {
                this.child(
                    div()
                        .id(delete_id)
                        .flex()
                        .items_center()
                        .when(!is_disabled, |this| {
                            this.cursor_pointer()
                                .on_click(click_behavior.wrap(on_delete))
                        })
                        .child(
                            Icon::new(MosaicIconKind::Cancel)
                                .size(IconSize::Small)
                                .color(IconColor::Custom(colors.delete_icon.into())),
                        ),
                )
            })
            .when(is_clickable, |this| {
                this.hover(|style| style.opacity(0.85))
                    .when_some(self.on_click, |this, on_click| {
                        this.on_click(click_behavior.wrap(on_click))
                    })
            })
    }
}

impl Styled for Chip {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl ClickBehaviorExt for Chip {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

#[cfg(test)]
mod tests {
    use gpui::{AbsoluteLength, DefiniteLength, Length};

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_sizes() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let medium = Chip::new("chip").resolve_style(&tokens);
        assert_eq!(medium.size.height, Some(Length::from(px(32.))));
        assert_eq!(
            medium.corner_radii.top_left,
            Some(AbsoluteLength::from(px(16.)))
        );
        assert_eq!(medium.text.font_size, Some(AbsoluteLength::from(px(13.))));

        let small = Chip::new("chip").size(ChipSize::Small).resolve_style(&tokens);
        assert_eq!(small.size.height, Some(Length::from(px(24.))));
    }

    #[test]
    fn test_avatar_follows_chip_size() {
        assert_eq!(ChipSize::Small.avatar_size(), AvatarSize::S18);
        assert_eq!(ChipSize::Medium.avatar_size(), AvatarSize::S24);
    }

    #[test]
    fn test_adornments_adjust_padding() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let plain = Chip::new("chip").label("Tag").resolve_style(&tokens);
        assert_eq!(plain.padding.left, Some(DefiniteLength::from(px(0.))));

        let adorned = Chip::new("chip")
            .avatar(Avatar::new().initials("M"))
            .on_delete(|_, _, _| {})
            .resolve_style(&tokens);
        assert_eq!(
            adorned.padding.left,
            Some(DefiniteLength::from(px(ADORNMENT_INSET)))
        );
        assert_eq!(
            adorned.padding.right,
            Some(DefiniteLength::from(px(ADORNMENT_INSET)))
        );
    }

    #[test]
    fn test_colors() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);
        let colors = tokens.colors();

        let default = Chip::new("chip").colors(&tokens);
        assert_eq!(default.background, colors.action.selected);
        assert_eq!(default.text, colors.text.primary);
        assert_eq!(default.border, None);

        let filled = Chip::new("chip").color(ColorKind::Success).colors(&tokens);
        assert_eq!(filled.background, colors.palette.success.main);
        assert_eq!(filled.text, colors.palette.success.contrast_text);

        let outlined = Chip::new("chip")
            .variant(ChipVariant::Outlined)
            .colors(&tokens);
        assert_eq!(outlined.border, Some(colors.divider));
        assert_eq!(outlined.background.a, 0.);

        let outlined = Chip::new("chip")
            .variant(ChipVariant::Outlined)
            .color(ColorKind::Info)
            .colors(&tokens);
        assert_eq!(outlined.text, colors.palette.info.main);
    }

    #[test]
    fn test_clickable_only_with_handler_and_enabled() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let chip = Chip::new("chip");
        assert!(!chip.is_clickable());
        assert_eq!(chip.resolve_style(&tokens).mouse_cursor, None);

        let chip = Chip::new("chip").on_click(|_, _, _| {});
        assert!(chip.is_clickable());
        assert_eq!(
            chip.resolve_style(&tokens).mouse_cursor,
            Some(CursorStyle::PointingHand)
        );

        let chip = Chip::new("chip").on_click(|_, _, _| {}).disabled(true);
        assert!(!chip.is_clickable());
        assert_eq!(chip.resolve_style(&tokens).opacity, Some(DISABLED_OPACITY));
    }

    #[test]
    fn test_caller_radius_wins() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let style = Chip::new("chip")
            .rounded(px(4.))
            .mr(px(8.))
            .resolve_style(&tokens);

        assert_eq!(
            style.corner_radii.top_left,
            Some(AbsoluteLength::from(px(4.)))
        );
        assert_eq!(style.margin.right, Some(Length::from(px(8.))));
    }

    #[test]
    fn test_label_inherits_caller_text() {
        let theme = Theme::DEFAULT;
        let tokens = theme.tokens(0);

        let label = Chip::new("chip").label("Tag").label_style(&tokens);
        assert_eq!(label.text.font_size, Some(AbsoluteLength::from(px(FONT_SIZE))));
        assert_eq!(
            label.padding.left,
            Some(DefiniteLength::from(ChipSize::Medium.label_padding()))
        );

        let label = Chip::new("chip")
            .label("Tag")
            .text_size(px(16.))
            .text_color(gpui::red())
            .label_style(&tokens);
        assert_eq!(label.text.font_size, Some(AbsoluteLength::from(px(16.))));
        assert_eq!(label.text.color, Some(gpui::red()));
        assert!(label.background.is_none());
    }
}
