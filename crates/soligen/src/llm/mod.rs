//! Text generation on top of the template engine.
//!
//! A [`TextModel`] turns a prompt into text. The generators build prompts
//! from randomly sampled background facts and, for annotated output, ask the
//! model to write a template that is then formatted with span tracking.

mod annotated;
mod error;
mod http;
mod model;
pub mod prompt;
mod text;

pub use annotated::{ANNOTATED_EXAMPLES, AnnotatedTextGenerator, TagExample};
pub use error::{GenerateError, ModelError};
pub use http::{AnthropicModel, ChatCompletionsModel};
pub use model::{Completion, ModelSpec, Provider, TextModel};
pub use text::{PROCEDURAL_TYPES, TextGenerator};
