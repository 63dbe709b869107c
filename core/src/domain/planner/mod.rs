pub mod ports;
pub mod render;
pub mod view;
pub mod view_config;

pub use ports::*;
pub use view::*;
pub use view_config::*;
