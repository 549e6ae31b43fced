//! Classification of the raw argument list into an [`Invocation`].
//!
//! Only two tokens mean anything to the runner: `--verbose` and `-v`. They
//! match exactly (case-sensitive) and may appear anywhere. Every other token,
//! including ones that merely start with a hyphen, is a word of the prompt.

/// Spellings of the verbosity flag.
pub const VERBOSE_FLAGS: [&str; 2] = ["--verbose", "-v"];

const USAGE: &str = "\
promptly - send a prompt to Google Gemini and print the reply
Usage: promptly <prompt words...> [--verbose|-v]
Example: promptly Why is Rust a good fit for command-line tools? --verbose
";

/// Description line, usage template and one example invocation.
pub fn usage() -> &'static str {
    USAGE
}

/// The argument list, split into what to ask and how much to report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Non-flag tokens joined by single spaces, in their original order.
    pub prompt: String,
    /// `true` if any token was a verbosity flag.
    pub verbose: bool,
}

impl Invocation {
    /// Split `args` (program name excluded) into prompt words and flags.
    pub fn classify<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut verbose = false;
        let mut words = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            if VERBOSE_FLAGS.contains(&arg) {
                verbose = true;
            } else {
                words.push(arg.to_owned());
            }
        }

        Self {
            prompt: words.join(" "),
            verbose,
        }
    }

    /// `true` when nothing but flags (or blank tokens) was given.
    pub fn is_empty(&self) -> bool {
        self.prompt.trim().is_empty()
    }
}
