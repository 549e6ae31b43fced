use std::sync::Arc;

use promptly_core::{
    error::PromptlyError,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{GeminiAdapter, api_v1::GenerateContentRequest, error::GeminiError, model_map::map_model};

impl ChatCompletionProvider for GeminiAdapter {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> std::pin::Pin<
        Box<
            dyn Future<
                    Output = promptly_core::error::Result<
                        GenericChatCompletionResponse<GenericMessage>,
                    >,
                > + Send
                + 'p,
        >,
    >
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = params.model();
            let model = map_model(&model).ok_or_else(|| PromptlyError::ModelNotSupported {
                provider: "gemini",
                model: format!("{model:?}"),
            })?;

            let request = GenerateContentRequest::from(params);
            let response = client.generate_content(&model, &request).await?;

            let Some(text) = response.text() else {
                let reason = response
                    .prompt_feedback
                    .as_ref()
                    .and_then(|feedback| feedback.block_reason.as_deref());
                let message = match reason {
                    Some(reason) => format!("prompt was blocked: {reason}"),
                    None => "response has no candidates".to_owned(),
                };
                return Err(GeminiError::Format(message).into());
            };

            if text.is_empty() {
                if let Some(reason) = response.finish_reason().filter(|reason| reason.is_block()) {
                    return Err(GeminiError::Format(format!(
                        "response was blocked: {}",
                        reason.as_str()
                    ))
                    .into());
                }
            }

            let usage = response.usage_metadata.unwrap_or_default();

            Ok(GenericChatCompletionResponse {
                content: GenericMessage::new(text, GenericRole::Assistant),
                usage: Some(GenericUsageReport {
                    prompt_tokens: usage.prompt_token_count,
                    completion_tokens: usage.candidates_token_count,
                    total_tokens: usage.total_token_count,
                }),
            })
        })
    }
}
