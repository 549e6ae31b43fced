//! One invocation, start to finish: classify the arguments, connect, send a
//! single prompt, render the reply.
use std::{error::Error, io::Write};

use promptly_core::{
    error::PromptlyError,
    generic::GenericMessage,
    model::{GeminiModel, Model},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::cli::{Invocation, render_report, usage};

/// Every prompt goes to this model.
pub const MODEL: Model = Model::Gemini(GeminiModel::Gemini2_0Flash001);

/// Why a run did not complete. Each variant has its own exit code; the
/// `Display` output is the single line shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// No prompt words were given. The usage text has already been written.
    #[error("no prompt given")]
    Usage,

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::Usage => 1,
            Failure::Configuration(_) => 2,
            Failure::Authentication(_) => 3,
            Failure::Transport(_) => 4,
            Failure::Service(_) => 5,
            Failure::Output(_) => 6,
        }
    }
}

impl From<PromptlyError> for Failure {
    fn from(value: PromptlyError) -> Self {
        match value {
            PromptlyError::Configuration(message) => Failure::Configuration(message),
            err @ (PromptlyError::ModelNotSupported { .. } | PromptlyError::InvalidRequest(_)) => {
                Failure::Configuration(err.to_string())
            }
            PromptlyError::Authentication { message } => Failure::Authentication(message),
            PromptlyError::Transport(source) => Failure::Transport(error_chain(&*source)),
            PromptlyError::Service { message, .. } => Failure::Service(message),
            err @ PromptlyError::Serialization(_) => Failure::Service(err.to_string()),
        }
    }
}

/// `outer: inner: innermost` on a single line.
fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !line.ends_with(&cause_text) {
            line.push_str(": ");
            line.push_str(&cause_text);
        }
        source = cause.source();
    }
    line
}

/// Run one invocation.
///
/// * No prompt words → the usage text goes to `out` and
///   [`Failure::Usage`] is returned; `connect` is never called.
/// * Otherwise `connect` builds the provider, exactly one request with a
///   single user message is sent to [`MODEL`], and the report is written to
///   `out`.
pub async fn execute<A, S, C, P, W>(args: A, connect: C, out: &mut W) -> Result<(), Failure>
where
    A: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: FnOnce() -> promptly_core::error::Result<P>,
    P: ChatCompletionProvider,
    GenericMessage: Into<P::Message>,
    W: Write,
{
    let invocation = Invocation::classify(args);
    if invocation.is_empty() {
        out.write_all(usage().as_bytes())?;
        return Err(Failure::Usage);
    }

    let provider = connect()?;

    tracing::debug!(
        verbose = invocation.verbose,
        prompt_chars = invocation.prompt.chars().count(),
        "submitting prompt"
    );

    let params = ChatCompleteParameters::new(vec![GenericMessage::user(invocation.prompt)], MODEL);
    let response = provider.chat_complete(params).await?;

    render_report(&response, invocation.verbose, out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fmt, io};

    use super::*;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("error sending request")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn transport_message_includes_causes() {
        let err = PromptlyError::Transport(Box::new(Wrapped(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))));

        let failure = Failure::from(err);
        assert_eq!(failure.exit_code(), 4);
        assert_eq!(
            failure.to_string(),
            "request failed: error sending request: connection refused"
        );
    }

    #[test]
    fn categories_have_distinct_exit_codes() {
        let failures = [
            Failure::Usage,
            Failure::Configuration(String::new()),
            Failure::Authentication(String::new()),
            Failure::Transport(String::new()),
            Failure::Service(String::new()),
            Failure::Output(io::Error::other("closed")),
        ];
        let mut codes: Vec<_> = failures.iter().map(Failure::exit_code).collect();
        codes.dedup();
        assert_eq!(codes, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn model_problems_are_configuration_failures() {
        let failure = Failure::from(PromptlyError::ModelNotSupported {
            provider: "gemini",
            model: "Custom(\"\")".into(),
        });
        assert_eq!(failure.exit_code(), 2);
    }
}
