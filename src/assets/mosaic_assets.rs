use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Embedded assets bundled with the mosaic crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct MosaicAssets;

impl AssetProvider for MosaicAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(MosaicAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MosaicIconKind;

    #[test]
    fn test_every_builtin_icon_is_embedded() {
        for kind in MosaicIconKind::ALL {
            let path = kind.path();
            assert!(
                MosaicAssets.get(&path).is_some(),
                "missing embedded icon {path}"
            );
        }
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let icons = MosaicAssets.list("icons/").expect("listing never fails");
        assert_eq!(icons.len(), MosaicIconKind::ALL.len());
        assert!(MosaicAssets.list("fonts/").expect("listing").is_empty());
    }
}
