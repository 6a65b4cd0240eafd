pub mod constants;
pub mod field;
pub mod interaction;
pub mod project;

pub use field::*;
pub use interaction::*;
pub use project::*;
