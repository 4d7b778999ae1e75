//! Text formatting utilities
//!
//! Indentation and quoting helpers shared by every renderer. All functions
//! are pure string transforms with no side effects.

/// Returns `tabs` tab characters.
#[must_use]
pub fn tab_string(tabs: usize) -> String {
    "\t".repeat(tabs)
}

/// Re-indents a multi-line fragment by inserting `tabs` tab characters
/// after every newline.
///
/// Legacy contract: when the transformed text is longer than `tabs`
/// characters, the final `tabs` characters are dropped unconditionally.
/// For a newline-terminated fragment this strips exactly the indentation
/// inserted after the last line; for anything else it truncates content.
/// Callers splice only newline-terminated fragments.
#[must_use]
pub fn add_tabs(text: &str, tabs: usize) -> String {
    let indented = text.replace('\n', &format!("\n{}", tab_string(tabs)));
    let length = indented.chars().count();
    if length > tabs {
        indented.chars().take(length - tabs).collect()
    } else {
        indented
    }
}

/// Splices a fragment into a parent block at the given nesting depth:
/// the fragment is re-indented and prefixed with the depth's indentation.
#[must_use]
pub fn indent_block(fragment: &str, tabs: usize) -> String {
    format!("{}{}", tab_string(tabs), add_tabs(fragment, tabs))
}

/// Renders a Groovy single-quoted string literal with `\` and `'` escaped.
#[must_use]
pub fn single_quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
