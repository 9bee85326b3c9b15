//! CSV tokenizer
//!
//! Converts raw delimited text into a grid of string cells, honoring
//! quoted fields and embedded delimiters.
//!
//! # Design
//!
//! The tokenizer is a single-pass character-scan state machine rather
//! than a full CSV reader: the upload contract needs exact control over
//! blank-line suppression, CRLF handling, and unterminated quotes, and
//! the grid it produces is consumed exactly once by the validator.
//!
//! # Grammar
//!
//! - `"` toggles quote mode; a doubled `""` inside quotes emits one
//!   literal quote character.
//! - `,` outside quotes closes the current field.
//! - `\n` outside quotes closes the current field and row. Rows whose
//!   every field is blank after trimming are dropped.
//! - `\r` outside quotes is ignored, which makes CRLF input equivalent
//!   to LF input.
//! - Everything else, and everything inside quotes (including `,`,
//!   `\n`, and `\r`), is appended to the current field verbatim.
//!
//! End of input flushes the pending field and row under the same
//! blank-row rule, so a missing trailing newline loses nothing. An
//! unterminated quote is treated as closed at end of string; whatever
//! was accumulated is emitted rather than raising an error.

/// Tokenize raw delimited text into ordered rows of ordered cells
///
/// Quoted fields may contain embedded delimiters and newlines verbatim.
/// Fully blank lines (and rows whose cells are all whitespace) are
/// silently dropped, so an empty input string yields an empty grid.
///
/// # Arguments
///
/// * `text` - The raw CSV text to tokenize
///
/// # Returns
///
/// The grid of string cells, in original source order.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<String>> = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(character) = chars.next() {
        match character {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote: emit one literal quote, consume both
                    current_field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                current_row.push(std::mem::take(&mut current_field));
            }
            '\n' if !in_quotes => {
                current_row.push(std::mem::take(&mut current_field));
                flush_row(&mut grid, &mut current_row);
            }
            '\r' if !in_quotes => {}
            _ => current_field.push(character),
        }
    }

    // End of input closes the pending field and row exactly as a newline
    current_row.push(current_field);
    flush_row(&mut grid, &mut current_row);

    grid
}

/// Append the accumulated row to the grid unless every field is blank
fn flush_row(grid: &mut Vec<Vec<String>>, current_row: &mut Vec<String>) {
    let row = std::mem::take(current_row);
    if row.iter().any(|field| !field.trim().is_empty()) {
        grid.push(row);
    }
}
