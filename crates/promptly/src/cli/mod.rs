mod args;
mod output;

pub use args::{Invocation, VERBOSE_FLAGS, usage};
pub use output::render_report;
