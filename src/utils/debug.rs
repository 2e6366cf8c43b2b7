use gpui::InteractiveElement;

/// Names an inner delegate so window tests can look up where it was painted.
/// Without the `test-support` feature this does nothing.
pub trait DebugSelectorExt: InteractiveElement + Sized {
    #[cfg(feature = "test-support")]
    fn debug_tag(self, selector: impl FnOnce() -> String) -> Self {
        self.debug_selector(selector)
    }

    #[cfg(not(feature = "test-support"))]
    fn debug_tag(self, _selector: impl FnOnce() -> String) -> Self {
        self
    }
}

impl<E: InteractiveElement> DebugSelectorExt for E {}
