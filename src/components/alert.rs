#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    AnyElement, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Rgba, SharedString, StatefulInteractiveElement, StyleRefinement, Styled, div,
    prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    assets::MosaicIconKind,
    components::{Icon, IconSize},
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt, ClickHandler},
    style::{StyledExt, ThemedStyle},
    theme::{
        ColorKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTokens,
        TypographyKind,
    },
    utils::{ElementIdExt, RgbaExt, transparent},
};

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn icon(&self) -> MosaicIconKind)]
#[func(pub fn color(&self) -> ColorKind)]
pub enum AlertSeverity {
    #[default]
    #[assoc(icon = MosaicIconKind::CheckCircle)]
    #[assoc(color = ColorKind::Success)]
    Success,
    #[assoc(icon = MosaicIconKind::Info)]
    #[assoc(color = ColorKind::Info)]
    Info,
    #[assoc(icon = MosaicIconKind::Warning)]
    #[assoc(color = ColorKind::Warning)]
    Warning,
    #[assoc(icon = MosaicIconKind::Error)]
    #[assoc(color = ColorKind::Error)]
    Error,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 4] = [
        AlertSeverity::Success,
        AlertSeverity::Info,
        AlertSeverity::Warning,
        AlertSeverity::Error,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Standard,
    Filled,
    Outlined,
}

impl AlertVariant {
    pub const ALL: [AlertVariant; 3] = [
        AlertVariant::Standard,
        AlertVariant::Filled,
        AlertVariant::Outlined,
    ];
}

/// Which icon, if any, leads the alert.
#[derive(Default)]
pub enum AlertIcon {
    /// The icon associated with the alert's severity.
    #[default]
    Default,
    Custom(Icon),
    Hidden,
}

/// Colors derived from an alert's severity and variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertColors {
    pub background: Rgba,
    pub text: Rgba,
    pub icon: Rgba,
    pub border: Option<Rgba>,
}

/// A severity-colored message with an optional title and trailing actions.
#[derive(IntoElement)]
pub struct Alert {
    id: ElementId,
    severity: AlertSeverity,
    variant: AlertVariant,
    title: Option<SharedString>,
    icon: AlertIcon,
    action: Option<AnyElement>,
    on_close: Option<ClickHandler>,
    click_behavior: ClickBehavior,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Alert {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            severity: AlertSeverity::default(),
            variant: AlertVariant::default(),
            title: None,
            icon: AlertIcon::default(),
            action: None,
            on_close: None,
            click_behavior: ClickBehavior::default(),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = AlertIcon::Custom(icon);
        self
    }

    pub fn hide_icon(mut self) -> Self {
        self.icon = AlertIcon::Hidden;
        self
    }

    /// Places an element (usually a button) at the trailing edge.
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.action = Some(action.into_any_element());
        self
    }

    /// Shows a close button that invokes `on_close` when clicked.
    pub fn on_close(
        mut self,
        on_close: impl Fn(&gpui::ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_close = Some(std::rc::Rc::new(on_close));
        self
    }

    pub fn has_actions(&self) -> bool {
        self.action.is_some() || self.on_close.is_some()
    }

    pub fn colors(&self, tokens: &ThemeTokens<'_>) -> AlertColors {
        let color = self.severity.color();
        let palette = color.resolve(tokens);
        let readable = tokens.readable_shade(color);

        match self.variant {
            AlertVariant::Standard => AlertColors {
                background: palette.main.fade(0.12),
                text: readable,
                icon: palette.main,
                border: None,
            },
            AlertVariant::Filled => AlertColors {
                background: palette.main,
                text: palette.contrast_text,
                icon: palette.contrast_text,
                border: None,
            },
            AlertVariant::Outlined => AlertColors {
                background: transparent(),
                text: readable,
                icon: palette.main,
                border: Some(palette.main),
            },
        }
    }

    fn leading_icon(&mut self) -> Option<Icon> {
        match std::mem::take(&mut self.icon) {
            AlertIcon::Default => Some(Icon::new(self.severity.icon())),
            AlertIcon::Custom(icon) => Some(icon),
            AlertIcon::Hidden => None,
        }
    }
}

impl ThemedStyle for Alert {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let colors = self.colors(tokens);

        let style = StyleRefinement::default()
            .w_full()
            .flex()
            .flex_row()
            .items_start()
            .gap(px(12.))
            .px(ThemeLayoutPaddingKind::Lg.resolve(tokens))
            .py(px(6.))
            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(tokens))
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(TypographyKind::Body2.size(tokens))
            .font_weight(TypographyKind::Body2.font_weight(tokens))
            .text_color(colors.text)
            .bg(colors.background);

        match colors.border {
            Some(border) => style.border_1().border_color(border),
            None => style,
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for Alert {
    fn render(mut self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let colors = self.colors(&tokens);
        let title_size = TypographyKind::Body1.size(&tokens);
        let hover_color = tokens.colors().action.hover;

        let has_actions = self.has_actions();
        let icon = self.leading_icon();
        let click_behavior = self.click_behavior;
        let close_id = self.id.with_suffix("close");

        div()
            .id(self.id)
            .refine_style(&style)
            .when_some(icon, |this, icon| {
                this.child(
                    div().flex_none().py(px(7.)).child(
                        icon.default_size(IconSize::Small)
                            .default_color(colors.icon),
                    ),
                )
            })
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .py(px(8.))
                    .flex()
                    .flex_col()
                    .when_some(self.title, |this, title| {
                        this.child(
                            div()
                                .mb(px(2.))
                                .text_size(title_size)
                                .font_weight(FontWeight::MEDIUM)
                                .child(title),
                        )
                    })
                    .children(self.children),
            )
            .when(has_actions, |this| {
                this.child(
                    div()
                        .flex_none()
                        .flex()
                        .items_start()
                        .gap(px(8.))
                        .pl(px(16.))
                        .py(px(4.))
                        .children(self.action)
                        .when_some(self.on_close, |this, on_close| {
                            this.child(
                                div()
                                    .id(close_id)
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .p(px(5.))
                                    .rounded_full()
                                    .cursor_pointer()
                                    .hover(move |style| style.bg(hover_color))
                                    .child(Icon::new(MosaicIconKind::Close).size(IconSize::Small))
                                    .on_click(click_behavior.wrap(on_close)),
                            )
                        }),
                )
            })
    }
}

impl ParentElement for Alert {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Alert {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl ClickBehaviorExt for Alert {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}
