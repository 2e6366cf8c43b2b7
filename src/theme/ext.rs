use gpui::App;

use crate::theme::{ActiveVariantId, Theme, ThemeTokens, ThemeVariantKind};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    ///
    /// A theme without variants is rejected and the current theme stays.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Activates the first variant of the given kind.
    ///
    /// Returns `false` and leaves the active variant untouched when the theme
    /// has no variant of that kind.
    fn set_theme_variant(&mut self, kind: ThemeVariantKind) -> bool;

    /// Resolves the tokens of the active theme variant.
    fn theme_tokens(&self) -> ThemeTokens<'_>;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        let theme = theme.as_ref();
        if theme.variants.is_empty() {
            tracing::warn!(theme = %theme.name, "ignoring theme without variants");
            return;
        }

        let theme = theme.clone();
        tracing::debug!(theme = %theme.name, "setting theme");

        let active = self.try_global::<ActiveVariantId>().map_or(0, |id| id.0);
        if active >= theme.variants.len() {
            self.set_global(ActiveVariantId(0));
        }

        self.set_global::<Theme>(theme)
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_theme_variant(&mut self, kind: ThemeVariantKind) -> bool {
        let Some(index) = self.get_theme().variants.position(kind) else {
            tracing::warn!(?kind, theme = %self.get_theme().name, "theme has no such variant");
            return false;
        };

        tracing::debug!(?kind, index, "activating theme variant");
        self.set_global(ActiveVariantId(index));
        true
    }

    fn theme_tokens(&self) -> ThemeTokens<'_> {
        let theme = self.get_theme();
        ThemeTokens::new(theme, theme.variants.active(self))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_theme_has_layout(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();

            assert!(theme.layout.size.sm > gpui::px(0.), "Size sm should be positive");
            assert!(theme.layout.size.xl > gpui::px(0.), "Size xl should be positive");
            assert!(
                theme.layout.corner_radii.sm >= gpui::px(0.),
                "Corner radii sm should be non-negative"
            );
            assert!(
                theme.layout.padding.sm >= gpui::px(0.),
                "Padding sm should be non-negative"
            );
        });
    }

    #[gpui::test]
    fn test_tokens_follow_active_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            assert!(!cx.theme_tokens().is_dark(), "First variant is light");

            assert!(cx.set_theme_variant(ThemeVariantKind::Dark));
            assert!(cx.theme_tokens().is_dark());

            assert!(cx.set_theme_variant(ThemeVariantKind::Light));
            assert!(!cx.theme_tokens().is_dark());
        });
    }

    #[gpui::test]
    fn test_missing_variant_kind_keeps_active_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut theme = Theme::DEFAULT.clone();
            theme.variants.variants.retain(|v| v.kind == ThemeVariantKind::Dark);

            cx.set_theme(theme);
            assert!(!cx.set_theme_variant(ThemeVariantKind::Light));
            assert!(cx.theme_tokens().is_dark());
        });
    }

    #[gpui::test]
    fn test_set_theme_resets_out_of_range_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            assert!(cx.set_theme_variant(ThemeVariantKind::Dark));

            let mut theme = Theme::DEFAULT.clone();
            theme.variants.variants.truncate(1);
            cx.set_theme(theme);

            assert_eq!(cx.global::<ActiveVariantId>().0, 0);
        });
    }

    #[gpui::test]
    fn test_theme_without_variants_is_rejected(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            assert!(cx.set_theme_variant(ThemeVariantKind::Dark));

            let mut theme = Theme::DEFAULT.clone();
            theme.name = "empty".into();
            theme.variants.variants.clear();
            cx.set_theme(theme);

            assert_eq!(cx.get_theme().name, Theme::DEFAULT.name);
            assert_eq!(cx.get_theme().variants.len(), 2);
            assert!(cx.theme_tokens().is_dark());
        });
    }
}
