use std::io::{self, Write};

use promptly_core::generic::{GenericChatCompletionResponse, GenericMessage};

/// Print the reply text, then the token counts when `verbose` is set.
///
/// Counts are written exactly as the provider reported them. No header line
/// precedes the text in either mode.
pub fn render_report<W: Write>(
    response: &GenericChatCompletionResponse<GenericMessage>,
    verbose: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", response.content.text())?;

    if !verbose {
        return Ok(());
    }

    match &response.usage {
        Some(usage) => {
            writeln!(out, "Prompt tokens: {}", usage.prompt_tokens)?;
            writeln!(out, "Response tokens: {}", usage.completion_tokens)?;
            writeln!(out, "Total token count: {}", usage.total_tokens)?;
        }
        None => tracing::warn!("provider did not report token usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use promptly_core::generic::{GenericRole, GenericUsageReport};

    use super::*;

    fn response(usage: Option<GenericUsageReport>) -> GenericChatCompletionResponse<GenericMessage> {
        GenericChatCompletionResponse {
            content: GenericMessage::new("Boot.dev is great.".into(), GenericRole::Assistant),
            usage,
        }
    }

    fn render(response: &GenericChatCompletionResponse<GenericMessage>, verbose: bool) -> String {
        let mut out = Vec::new();
        render_report(response, verbose, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn verbose_appends_counts_verbatim() {
        // total deliberately not the sum: the values are passed through.
        let usage = GenericUsageReport {
            prompt_tokens: 1,
            completion_tokens: 2,
            total_tokens: 7,
        };

        assert_eq!(
            render(&response(Some(usage)), true),
            "Boot.dev is great.\nPrompt tokens: 1\nResponse tokens: 2\nTotal token count: 7\n"
        );
    }

    #[test]
    fn quiet_prints_text_only() {
        let usage = GenericUsageReport::default();
        assert_eq!(render(&response(Some(usage)), false), "Boot.dev is great.\n");
    }

    #[test]
    fn verbose_without_usage_prints_text_only() {
        assert_eq!(render(&response(None), true), "Boot.dev is great.\n");
    }
}
