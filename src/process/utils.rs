//! Text normalization for fragments embedded in the context block.

/// Normalize a rendered text fragment into an object literal.
///
/// Leading whitespace is dropped up to the first non-whitespace character.
/// From that point on every character is kept verbatim, so whitespace inside
/// or at the end of the fragment survives. The result is wrapped in braces
/// unless it already starts with `{`.
///
/// # Examples
///
/// ```
/// use render_context::process::struct_marshal;
///
/// assert_eq!(struct_marshal("   a: 1"), "{a: 1}");
/// assert_eq!(struct_marshal("{a: 1}"), "{a: 1}");
/// assert_eq!(struct_marshal("  \n  x"), "{x}");
/// ```
pub fn struct_marshal(fragment: &str) -> String {
    let mut trimming = true;
    let mut out = String::with_capacity(fragment.len() + 2);

    for ch in fragment.chars() {
        if trimming {
            if ch.is_whitespace() {
                continue;
            }
            trimming = false;
        }
        out.push(ch);
    }

    if out.starts_with('{') {
        out
    } else {
        format!("{{{out}}}")
    }
}
