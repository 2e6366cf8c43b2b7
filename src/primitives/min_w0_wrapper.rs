use gpui::{Div, Styled, div};

/// A text container with `min-width: 0`, so flex rows can shrink it and its
/// text truncates instead of widening the row.
///
/// It sets no text style of its own. Text inside it inherits from the
/// enclosing element unless the caller refines it explicitly.
pub fn min_w0_wrapper() -> Div {
    div().w_auto().h_auto().min_w_0()
}
