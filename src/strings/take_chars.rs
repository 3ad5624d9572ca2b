/// Returns the first `n` characters of `s`, or all of `s` if it has fewer
/// than `n` characters.
pub fn take_chars(s: &str, n: usize) -> &str {
    let boundary = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[..boundary]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ab1cd2", 0, "")]
    #[case("ab1cd2", 1, "a")]
    #[case("ab1cd2", 3, "ab1")]
    #[case("ab1cd2", 6, "ab1cd2")]
    #[case("ab1cd2", 7, "ab1cd2")]
    #[case("", 0, "")]
    #[case("", 3, "")]
    #[case("héllo", 2, "hé")]
    fn test_take_chars(#[case] s: &str, #[case] n: usize, #[case] prefix: &str) {
        assert_eq!(take_chars(s, n), prefix);
    }
}
