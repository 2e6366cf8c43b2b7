use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// An [`AssetSource`] that asks each provider in order.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        if let Some(asset) = self.providers.iter().find_map(|provider| provider.get(path)) {
            return Ok(Some(asset));
        }

        tracing::debug!(path, "asset not found in any provider");
        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|assets| assets.list(path).into_iter())
            .flatten()
            .collect())
    }
}

pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Single(&'static str, &'static [u8]);

    impl AssetProvider for Single {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            (path == self.0).then(|| Cow::Borrowed(self.1))
        }

        fn list(&self, path: &str) -> Result<Vec<SharedString>> {
            Ok(self
                .0
                .starts_with(path)
                .then(|| SharedString::from(self.0))
                .into_iter()
                .collect())
        }
    }

    #[test]
    fn test_first_matching_provider_wins() {
        let assets = Assets::new([
            Box::new(Single("icons/a.svg", b"first")),
            Box::new(Single("icons/a.svg", b"second")),
        ]);

        let loaded = assets.load("icons/a.svg").expect("asset exists");
        assert_eq!(loaded.as_deref(), Some(&b"first"[..]));
    }

    #[test]
    fn test_missing_and_empty_paths() {
        let assets = Assets::new([Box::new(Single("icons/a.svg", b"a"))]);

        assert!(assets.load("").expect("empty path is not an error").is_none());
        assert!(assets.load("icons/b.svg").is_err());
    }

    #[test]
    fn test_list_merges_providers() {
        let assets = Assets::new([
            Box::new(Single("icons/a.svg", b"a")),
            Box::new(Single("icons/b.svg", b"b")),
            Box::new(Single("fonts/c.ttf", b"c")),
        ]);

        let listed = assets.list("icons/").expect("listing never fails");
        assert_eq!(listed.len(), 2);
    }
}
