// HTTP routes
pub mod health;
pub mod items;

pub use health::*;
pub use items::*;
