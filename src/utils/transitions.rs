use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, TransitionGoal, WindowUseTransition};

use crate::utils::ElementIdExt;

/// Opacity applied to disabled interactive components.
pub const DISABLED_OPACITY: f32 = 0.45;

/// A keyed transition that eases towards `goal` whenever the goal changes
/// between renders.
pub fn eased_transition<T>(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    goal: T,
) -> Transition<T>
where
    T: TransitionGoal + Clone + PartialEq + 'static,
{
    let initial = goal.clone();

    let transition = window
        .use_keyed_transition(id, cx, duration, move |_window, _cx| initial.clone())
        .with_easing(ease_out_quint());

    if transition.read_goal(cx) != &goal {
        transition.update(cx, |this, cx| {
            *this = goal;
            cx.notify();
        });
    }

    transition
}

pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    eased_transition(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        Duration::from_millis(365),
        if is_disabled { DISABLED_OPACITY } else { 1. },
    )
}

/// Scales an element's own opacity by an animated fade, so a fade never
/// replaces an opacity the caller asked for.
pub fn faded_opacity(base: Option<f32>, fade: f32) -> f32 {
    base.unwrap_or(1.) * fade
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_multiplies_existing_opacity() {
        assert_eq!(faded_opacity(None, DISABLED_OPACITY), DISABLED_OPACITY);
        assert_eq!(faded_opacity(Some(0.5), 1.), 0.5);
        assert!((faded_opacity(Some(0.5), DISABLED_OPACITY) - 0.225).abs() < 1e-6);
    }
}
