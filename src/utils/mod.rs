mod colors;
pub use colors::*;

mod element;
pub use element::*;

mod element_id;
pub use element_id::*;

mod transitions;
pub use transitions::*;

mod debug;
pub use debug::*;

mod squircle;
pub use squircle::*;

#[cfg(all(test, feature = "test-support"))]
mod testing;
#[cfg(all(test, feature = "test-support"))]
pub(crate) use testing::*;
