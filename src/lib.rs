pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod sky;
pub mod types;
pub mod water;
pub mod xr;

pub use camera::PerspectiveCamera;
pub use config::SceneConfig;
pub use error::SceneError;
pub use scene::Scene;
