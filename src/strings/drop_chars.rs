/// Removes the first `n` characters of `s` and returns the rest.  If `s` has
/// no more than `n` characters, the result is empty.
pub fn drop_chars(s: &str, n: usize) -> &str {
    let boundary = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[boundary..]
}
