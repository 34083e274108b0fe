use crate::{
    interpreter::{context::Context, value::core::Number},
    solve_with,
};

/// How an answer is attached to its line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineOptions {
    /// Put the answer on its own line below the expression instead of after
    /// it.
    pub newline: bool,
}

/// Computes the text to insert after `line`.
///
/// Returns ` = <result>`, preceded by a line break when
/// [`InlineOptions::newline`] is set. Blank lines and lines that fail to
/// evaluate produce `None`, leaving the document untouched; failures are
/// logged at debug level.
///
/// # Examples
/// ```
/// use inline_calc::{
///     inline::{InlineOptions, annotate},
///     interpreter::context::Context,
/// };
///
/// let context = Context::default();
///
/// assert_eq!(annotate("2+3*4", &context, InlineOptions::default()).as_deref(), Some(" = 14"));
/// assert_eq!(annotate("2+3*4", &context, InlineOptions { newline: true }).as_deref(),
///            Some("\n = 14"));
/// assert_eq!(annotate("1/0", &context, InlineOptions::default()), None);
/// assert_eq!(annotate("   ", &context, InlineOptions::default()), None);
/// ```
#[must_use]
pub fn annotate(line: &str, context: &Context, options: InlineOptions) -> Option<String> {
    let number = solve_line(line, context)?;
    let separator = if options.newline { "\n" } else { "" };
    Some(format!("{separator} = {number}"))
}

/// Annotates every line of `text`, returning the annotated document.
///
/// Each line is copied unchanged and followed by its answer, if it has one.
/// Line terminators are kept as they are: `\r\n` stays `\r\n` (also between
/// a line and an answer placed below it), and a last line without a
/// terminator gets none.
///
/// # Examples
/// ```
/// use inline_calc::{
///     inline::{InlineOptions, annotate_text},
///     interpreter::context::Context,
/// };
///
/// let text = "notes\n2^10\n\nsqrt(16)\n";
/// let annotated = annotate_text(text, &Context::default(), InlineOptions::default());
/// assert_eq!(annotated, "notes\n2^10 = 1024\n\nsqrt(16) = 4\n");
/// ```
#[must_use]
pub fn annotate_text(text: &str, context: &Context, options: InlineOptions) -> String {
    let mut output = String::with_capacity(text.len());
    for raw in text.split_inclusive('\n') {
        let (line, terminator) = split_terminator(raw);
        output.push_str(line);
        if let Some(number) = solve_line(line, context) {
            if options.newline {
                output.push_str(if terminator.is_empty() { "\n" } else { terminator });
            }
            output.push_str(" = ");
            output.push_str(&number.to_string());
        }
        output.push_str(terminator);
    }
    output
}

/// Solves one line, logging failures. Blank lines have no answer.
fn solve_line(line: &str, context: &Context) -> Option<Number> {
    if line.trim().is_empty() {
        return None;
    }

    solve_with(line, context).map_err(|error| tracing::debug!(line, %error, "line left unannotated"))
                             .ok()
}

/// Splits a line produced by `split_inclusive('\n')` into its content and its
/// `\n` or `\r\n` terminator.
fn split_terminator(raw: &str) -> (&str, &str) {
    raw.strip_suffix("\r\n")
       .map(|line| (line, "\r\n"))
       .or_else(|| raw.strip_suffix('\n').map(|line| (line, "\n")))
       .unwrap_or((raw, ""))
}
