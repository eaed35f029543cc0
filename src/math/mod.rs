mod color;

pub use color::{rgb_from_hex, srgb_to_linear};
