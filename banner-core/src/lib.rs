//! # banner-core
//!
//! Fixed-width banner line rendering for script helpers.
//!
//! This crate holds the pure formatting logic behind the `print-title`
//! utility: a single operation that produces a decorative line of asterisks,
//! optionally with a caller-supplied title embedded in it. No I/O happens
//! here; callers decide where the rendered line goes.


/// Total number of decorative characters in a banner line.
pub const BUFFER_LEN: usize = 35;

/// Character used to draw the decorative segments.
pub const FILL_CHAR: char = '*';

/// Returns the number of trailing fill characters for a title of
/// `title_len` characters.
///
/// The right-hand segment shrinks by the title length plus the two spaces
/// surrounding it, and clamps to zero once the title no longer fits. The
/// clamp is intentional compatibility behavior: overlong titles produce an
/// empty right segment, never an error or a truncated title.
#[must_use]
pub fn right_fill_len(title_len: usize) -> usize {
    BUFFER_LEN.saturating_sub(title_len.saturating_add(2))
}

/// Renders a banner line, trailing newline included.
///
/// Without a title the line is exactly [`BUFFER_LEN`] asterisks. With a
/// title `T` the line is [`BUFFER_LEN`] asterisks, a space, `T`, a space,
/// and [`right_fill_len`] more asterisks. Title length is counted in
/// characters, not bytes.
///
/// # Parameters
///
/// * `title` - Optional title text to embed in the line
///
/// # Returns
///
/// The complete output line, terminated by a single `\n`. Calling this
/// twice with the same input yields byte-identical results.
#[must_use]
pub fn render_banner(title: Option<&str>) -> String {
    match title {
        None => format!("{}\n", fill(BUFFER_LEN)),
        Some(title) => {
            let right = right_fill_len(title.chars().count());
            format!("{} {title} {}\n", fill(BUFFER_LEN), fill(right))
        }
    }
}

/// Builds a run of `len` fill characters.
fn fill(len: usize) -> String {
    std::iter::repeat(FILL_CHAR).take(len).collect()
}
