/// Removes the longest trailing substring of `s` whose characters all satisfy
/// the given predicate and returns the rest.
pub fn drop_last_while<P: FnMut(char) -> bool>(s: &str, mut predicate: P) -> &str {
    let boundary = s
        .char_indices()
        .rev()
        .take_while(move |&(_, ch)| predicate(ch))
        .last()
        .map_or(s.len(), |(i, _)| i);
    &s[..boundary]
}
