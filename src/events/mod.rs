pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_modal_escape;
pub use pointer::{wire_pointer_tracking, wire_resize};
