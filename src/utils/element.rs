use gpui::{AnyElement, IntoElement};
use smallvec::SmallVec;

/// Components with leading and trailing child slots around their content.
pub trait SlottedParentElement: Sized {
    fn slots_mut(&mut self) -> &mut SlotChildren;

    /// Adds a child before the component's main content.
    fn child_start(mut self, child: impl IntoElement) -> Self {
        self.slots_mut().start.push(child.into_any_element());
        self
    }

    /// Adds a child after the component's main content.
    fn child_end(mut self, child: impl IntoElement) -> Self {
        self.slots_mut().end.push(child.into_any_element());
        self
    }
}

#[derive(Default)]
pub struct SlotChildren {
    pub start: SmallVec<[AnyElement; 1]>,
    pub end: SmallVec<[AnyElement; 1]>,
}

impl SlotChildren {
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}
