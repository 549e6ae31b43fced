use promptly::gemini::GeminiAdapterBuilder;
use promptly::{
    PromptlyClient,
    generic::{GenericMessage, GenericRole},
    model::{GeminiModel, Model},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};

/// # Chat Completion – Direct `chat_complete` Example
///
/// The `promptly` binary always sends a single user message. This example
/// calls [`ChatCompletionProvider::chat_complete`] directly, which means:
///
/// 1. **You** assemble the list of chat messages (system messages end up in
///    Gemini's `systemInstruction`).
/// 2. **You** pick the model and the temperature.
/// 3. The backend returns a [`GenericChatCompletionResponse`] with the
///    assistant message plus token usage statistics.
///
/// ```bash
/// export GEMINI_API_KEY=...      # mandatory
/// cargo run -p promptly --example gemini_chat_complete
/// ```
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let backend = GeminiAdapterBuilder::new_from_env().build()?;

    let client = PromptlyClient::new(backend);

    let messages = vec![
        GenericMessage::new(
            "You are a concise, witty assistant.".into(),
            GenericRole::System,
        ),
        GenericMessage::new(
            "Why is the Rust borrow checker important?".into(),
            GenericRole::User,
        ),
    ];

    let params = ChatCompleteParameters::new(messages, Model::Gemini(GeminiModel::Gemini2_5Flash))
        .with_temperature(0.4);

    let response = client.chat_complete(params).await?;

    println!("Assistant: {}", response.content.text());

    if let Some(usage) = response.usage {
        println!(
            "Tokens – prompt: {}, completion: {}, total: {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
