mod text_generator;

pub use text_generator::{
    GenerationConfig, GenerationFailure, GenerationRequest, SafetySetting, TextGenerator,
};
