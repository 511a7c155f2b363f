use std::{fmt::Debug, future::Future};

pub trait CompletionClient {
    const DEFAULT_MODEL: &'static str;

    type Error: Debug;

    /// Sends `prompt` as a single user message and returns the generated text.
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>>;
}
