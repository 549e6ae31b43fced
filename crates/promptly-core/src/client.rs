//! Generic, lightweight client bound to a single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! checks that the messages handed in convert into what the backend expects,
//! and no dynamic dispatch shows up in user code.
//!
//! Any backend crate (e.g. `promptly-gemini`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box. Tests
//! plug in a fake backend the same way.
use std::sync::Arc;

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// A client bound to a single provider.
///
/// Cloning is cheap, the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct PromptlyClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for PromptlyClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> PromptlyClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to inspect provider settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChatCompletionProvider + 'static> ChatCompletionProvider for PromptlyClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> std::pin::Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.chat_complete(params).await })
    }
}
