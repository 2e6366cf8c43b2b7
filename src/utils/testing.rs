use std::{cell::RefCell, rc::Rc};

use gpui::{
    AnyElement, App, AppContext, Context, IntoElement, Render, RenderOnce, TestAppContext,
    TextStyle, VisualTestContext, Window, div,
};

struct ClosureView<F>(F);

impl<F> Render for ClosureView<F>
where
    F: Fn(&mut Window, &mut App) -> AnyElement + 'static,
{
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        (self.0)(window, cx)
    }
}

/// Opens a window showing whatever `render` returns, installs the default
/// theme and waits for the first frame to be painted.
pub(crate) fn draw_in_window(
    cx: &mut TestAppContext,
    render: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
) -> VisualTestContext {
    let window = cx.update(|cx| {
        crate::init(cx);
        cx.open_window(Default::default(), |_window, cx| {
            cx.new(|_cx| ClosureView(render))
        })
        .unwrap()
    });

    let vcx = VisualTestContext::from_window(window.into(), cx);
    vcx.run_until_parked();
    vcx
}

/// Records the text style its parent hands down while rendering.
#[derive(IntoElement, Clone, Default)]
pub(crate) struct TextStyleRecorder(Rc<RefCell<Option<TextStyle>>>);

impl TextStyleRecorder {
    pub(crate) fn recorded(&self) -> Option<TextStyle> {
        self.0.borrow().clone()
    }
}

impl RenderOnce for TextStyleRecorder {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        *self.0.borrow_mut() = Some(window.text_style());
        div()
    }
}
