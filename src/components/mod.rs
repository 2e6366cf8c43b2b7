mod alert;
pub use alert::*;

mod avatar;
pub use avatar::*;

mod badge;
pub use badge::*;

mod button;
pub use button::*;

mod checkbox;
pub use checkbox::*;

mod chip;
pub use chip::*;

mod divider;
pub use divider::*;

mod icon;
pub use icon::*;

mod linear_progress;
pub use linear_progress::*;

mod list;
pub use list::*;

mod list_item;
pub use list_item::*;

mod typography;
pub use typography::*;
