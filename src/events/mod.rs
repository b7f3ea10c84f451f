pub mod page;
pub mod pointer;
pub mod touch;

pub use page::{start_clock, wire_signup_form, wire_tab_title};
pub use pointer::{wire_pointer_move, wire_resize};
pub use touch::{install_burst_styles, wire_touch_start};
