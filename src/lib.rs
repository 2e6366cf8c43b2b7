pub mod primitives;

pub mod extensions;

pub mod components;

pub mod style;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, SlotChildren, SlottedParentElement};

mod assets;
pub use assets::*;

mod init;
pub use init::*;
