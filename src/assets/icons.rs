#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum MosaicIconKind {
    #[assoc(path = "icons/check_circle.svg".into())]
    CheckCircle,
    #[assoc(path = "icons/info.svg".into())]
    Info,
    #[assoc(path = "icons/warning.svg".into())]
    Warning,
    #[assoc(path = "icons/error.svg".into())]
    Error,
    #[assoc(path = "icons/close.svg".into())]
    Close,
    /// Filled variant of `Close`, used for chip delete affordances.
    #[assoc(path = "icons/cancel.svg".into())]
    Cancel,
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,
    /// Horizontal bar shown by indeterminate checkboxes.
    #[assoc(path = "icons/remove.svg".into())]
    Remove,
}

impl MosaicIconKind {
    pub const ALL: [MosaicIconKind; 8] = [
        MosaicIconKind::CheckCircle,
        MosaicIconKind::Info,
        MosaicIconKind::Warning,
        MosaicIconKind::Error,
        MosaicIconKind::Close,
        MosaicIconKind::Cancel,
        MosaicIconKind::Checkmark,
        MosaicIconKind::Remove,
    ];
}

impl From<MosaicIconKind> for SharedString {
    fn from(kind: MosaicIconKind) -> Self {
        kind.path()
    }
}
