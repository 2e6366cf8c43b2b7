use gpui::{
    AnyElement, App, ClickEvent, CursorStyle, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement,
    StyleRefinement, Styled, Window, div, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt, ClickHandler},
    primitives::min_w0_wrapper,
    style::{StyledExt, ThemedStyle, text_refinement},
    theme::{ThemeExt, ThemeLayoutPaddingKind, ThemeTokens, TypographyKind},
    utils::{DISABLED_OPACITY, SlotChildren, SlottedParentElement},
};

/// A row inside a [`List`](crate::components::List).
///
/// With `button` unset the row is static. With it set the row becomes
/// interactive: it gains hover feedback and forwards clicks to `on_click`.
#[derive(IntoElement)]
pub struct ListItem {
    id: ElementId,
    button: bool,
    selected: bool,
    dense: bool,
    disabled: bool,
    divider: bool,
    primary: Option<SharedString>,
    secondary: Option<SharedString>,
    on_click: Option<ClickHandler>,
    click_behavior: ClickBehavior,
    slots: SlotChildren,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl ListItem {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            button: false,
            selected: false,
            dense: false,
            disabled: false,
            divider: false,
            primary: None,
            secondary: None,
            on_click: None,
            click_behavior: ClickBehavior::default(),
            slots: SlotChildren::default(),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn button(mut self, button: bool) -> Self {
        self.button = button;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Draws a divider below the row.
    pub fn divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    pub fn primary(mut self, primary: impl Into<SharedString>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    pub fn secondary(mut self, secondary: impl Into<SharedString>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(std::rc::Rc::new(on_click));
        self
    }

    pub fn is_button(&self) -> bool {
        self.button
    }

    /// The style applied only when the row is selected.
    pub fn selected_style(tokens: &ThemeTokens<'_>) -> StyleRefinement {
        StyleRefinement::default()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(tokens.colors().palette.primary.main)
            .bg(tokens.colors().action.selected)
    }

    /// The style of the primary text. Text overrides on the row apply here.
    pub fn primary_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let mut style = text_refinement(&self.resolve_style(tokens));
        style
            .text
            .color
            .get_or_insert_with(|| tokens.colors().text.primary.into());
        style.text_ellipsis()
    }

    /// The style of the secondary text: the row's font, in the smaller
    /// secondary size and color.
    pub fn secondary_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        text_refinement(&self.resolve_style(tokens))
            .text_size(TypographyKind::Body2.size(tokens))
            .text_color(tokens.colors().text.secondary)
            .text_ellipsis()
    }
}

impl ThemedStyle for ListItem {
    fn derive_style(&self, tokens: &ThemeTokens<'_>) -> StyleRefinement {
        let mut style = StyleRefinement::default()
            .relative()
            .w_full()
            .flex()
            .flex_row()
            .items_center()
            .font_family(tokens.layout().text.default_font.primary_family())
            .text_size(TypographyKind::Body1.size(tokens))
            .gap(ThemeLayoutPaddingKind::Lg.resolve(tokens))
            .px(ThemeLayoutPaddingKind::Lg.resolve(tokens))
            .py(if self.dense {
                ThemeLayoutPaddingKind::Sm.resolve(tokens)
            } else {
                ThemeLayoutPaddingKind::Md.resolve(tokens)
            });

        if self.divider {
            style = style.border_b_1().border_color(tokens.colors().divider);
        }

        if self.button {
            style = style.cursor(if self.disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            });
        }

        if self.disabled {
            style = style.opacity(DISABLED_OPACITY);
        }

        if self.selected {
            style.refine_style(&Self::selected_style(tokens))
        } else {
            style
        }
    }

    fn caller_style(&self) -> &StyleRefinement {
        &self.style
    }
}

impl RenderOnce for ListItem {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let tokens = cx.theme_tokens();
        let style = self.resolve_style(&tokens);
        let hover_color = tokens.colors().action.hover;
        let primary_style = self.primary_style(&tokens);
        let secondary_style = self.secondary_style(&tokens);

        let has_text = self.primary.is_some() || self.secondary.is_some();
        let text = div()
            .flex_1()
            .min_w_0()
            .flex()
            .flex_col()
            .when_some(self.primary, |this, primary| {
                this.child(min_w0_wrapper().refine_style(&primary_style).child(primary))
            })
            .when_some(self.secondary, |this, secondary| {
                this.child(
                    min_w0_wrapper()
                        .refine_style(&secondary_style)
                        .child(secondary),
                )
            });

        let mut content: SmallVec<[AnyElement; 4]> = SmallVec::new();
        content.extend(self.slots.start);
        if has_text {
            content.push(text.into_any_element());
        }
        content.extend(self.children);
        content.extend(self.slots.end);

        if self.button {
            let click_behavior = self.click_behavior;

            div()
                .id(self.id)
                .refine_style(&style)
                .children(content)
                .when(!self.disabled, |this| {
                    this.hover(move |style| style.bg(hover_color))
                        .when_some(self.on_click, |this, on_click| {
                            this.on_click(click_behavior.wrap(on_click))
                        })
                })
                .into_any_element()
        } else {
            div()
                .refine_style(&style)
                .children(content)
                .into_any_element()
        }
    }
}

impl ParentElement for ListItem {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl SlottedParentElement for ListItem {
    fn slots_mut(&mut self) -> &mut SlotChildren {
        &mut self.slots
    }
}

impl Styled for ListItem {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl ClickBehaviorExt for ListItem {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}
