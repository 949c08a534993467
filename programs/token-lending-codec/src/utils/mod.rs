pub mod authority;
pub mod layout;

pub use authority::*;
pub use layout::*;
