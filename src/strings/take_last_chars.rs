/// Returns the last `n` characters of `s`, or all of `s` if it has fewer
/// than `n` characters.
pub fn take_last_chars(s: &str, n: usize) -> &str {
    let boundary = s
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(s.len(), |(i, _)| i);
    &s[boundary..]
}
