use gpui::{AbsoluteLength, Corners, CornersRefinement, Styled};
use gpui_squircle::{Squircle, SquircleStyled};

/// The four corner radii of a resolved style. Corners left unset take
/// `fallback`.
pub fn resolved_corners(
    radii: &CornersRefinement<AbsoluteLength>,
    fallback: impl Into<AbsoluteLength>,
) -> Corners<AbsoluteLength> {
    let fallback = fallback.into();

    Corners {
        top_left: radii.top_left.unwrap_or(fallback),
        top_right: radii.top_right.unwrap_or(fallback),
        bottom_right: radii.bottom_right.unwrap_or(fallback),
        bottom_left: radii.bottom_left.unwrap_or(fallback),
    }
}

pub trait SquircleExt {
    /// Rounds a squircle background to the corners of the element it backs.
    fn match_corners(self, corners: Corners<AbsoluteLength>) -> Self;
}

impl SquircleExt for Squircle {
    fn match_corners(self, corners: Corners<AbsoluteLength>) -> Self {
        self.rounded_tl(corners.top_left)
            .rounded_tr(corners.top_right)
            .rounded_br(corners.bottom_right)
            .rounded_bl(corners.bottom_left)
    }
}

#[cfg(test)]
mod tests {
    use gpui::{StyleRefinement, px};

    use super::*;

    #[test]
    fn test_resolved_corners_keep_set_radii() {
        let style = StyleRefinement::default().rounded(px(2.)).rounded_tl(px(9.));

        let corners = resolved_corners(&style.corner_radii, px(6.));

        assert_eq!(corners.top_left, AbsoluteLength::from(px(9.)));
        assert_eq!(corners.bottom_right, AbsoluteLength::from(px(2.)));
    }

    #[test]
    fn test_resolved_corners_fill_unset_radii() {
        let style = StyleRefinement::default().rounded_b(px(3.));

        let corners = resolved_corners(&style.corner_radii, px(6.));

        assert_eq!(corners.top_right, AbsoluteLength::from(px(6.)));
        assert_eq!(corners.bottom_left, AbsoluteLength::from(px(3.)));
    }
}
