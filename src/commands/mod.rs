pub mod present;
pub mod price;
pub mod slug;

pub use present::*;
pub use price::*;
pub use slug::*;
