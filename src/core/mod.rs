pub mod controller;
pub mod frame_driver;
pub mod input_adapter;
pub mod movement;
pub mod viewport;

pub use controller::*;
pub use frame_driver::*;
pub use input_adapter::*;
pub use movement::*;
pub use viewport::*;
