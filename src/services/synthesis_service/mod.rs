pub mod backend;
pub mod controller;
pub mod parser;
pub mod prompt;

pub use backend::{GeminiClient, GenerationBackend};
pub use controller::ModelController;
pub use parser::{parse_candidate, strip_fences};
pub use prompt::{build_prompt, measurement_context};
