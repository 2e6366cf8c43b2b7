use std::rc::Rc;

use gpui::{App, ClickEvent, Window};

/// A click callback forwarded unchanged from the caller to the delegate element.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Settings that control click event behavior.
///
/// By default, click handlers call `cx.stop_propagation()` and `window.prevent_default()`.
/// This struct allows components to opt out of this behavior.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ClickBehavior {
    /// If true, `cx.stop_propagation()` will NOT be called.
    pub allow_propagation: bool,
    /// If true, `window.prevent_default()` will NOT be called.
    pub allow_default: bool,
}

impl ClickBehavior {
    /// Applies the click behavior settings to the given window and app context.
    pub fn apply(&self, window: &mut Window, cx: &mut App) {
        if !self.allow_default {
            window.prevent_default();
        }
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }

    /// Wraps `handler` so the behavior is applied before it runs.
    pub fn wrap(
        self,
        handler: ClickHandler,
    ) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
        move |event, window, cx| {
            self.apply(window, cx);
            handler(event, window, cx);
        }
    }
}

/// A trait for components that support controlling click event behavior.
pub trait ClickBehaviorExt: Sized {
    /// Returns a mutable reference to the click behavior settings.
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior;

    /// Allows the click event to propagate to parent elements.
    fn allow_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = true;
        self
    }

    /// Allows the system default behavior for the click event.
    fn allow_default_click_behaviour(mut self) -> Self {
        self.click_behavior_mut().allow_default = true;
        self
    }
}
