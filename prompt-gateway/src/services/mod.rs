pub mod generation;
pub mod image;
pub mod providers;

pub use generation::{generate_json, EndpointProfile, EndpointProfiles, GenerationError};
pub use image::load_inline_image;
