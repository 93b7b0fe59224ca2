mod fake_text_generator;

#[allow(unused_imports)]
pub use fake_text_generator::{FakeTextGenerator, GateHandle};
