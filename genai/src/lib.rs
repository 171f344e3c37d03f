pub mod api;
mod errors;
mod ext;
mod model;

pub use errors::*;
pub use model::{GeminiModel, GeminiModelOptions, GenerativeModel};
