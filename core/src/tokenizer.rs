use lazy_static::lazy_static;
use regex::Regex;

use crate::noise::NoiseWords;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\S+").expect("valid regex");
}

/// Split raw document text into whitespace-delimited tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    RE.find_iter(text).map(|m| m.as_str())
}

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// True when a letter appears anywhere after the first non-letter character,
/// i.e. the token's punctuation is not a purely trailing run.
pub fn has_embedded_punctuation(token: &str) -> bool {
    let mut rest = token.chars().skip_while(|&c| is_letter(c));
    match rest.next() {
        Some(_) => rest.any(is_letter),
        None => false,
    }
}

/// Turn a raw token into a keyword: trailing non-letters are stripped, the
/// rest is lowercased, and noise words are dropped. Returns `None` for tokens
/// with embedded punctuation or nothing left after stripping.
pub fn normalize(token: &str, noise: &NoiseWords) -> Option<String> {
    if has_embedded_punctuation(token) {
        return None;
    }
    let end = token
        .char_indices()
        .find(|&(_, c)| !is_letter(c))
        .map_or(token.len(), |(i, _)| i);
    let keyword = token[..end].to_lowercase();
    if keyword.is_empty() || noise.contains(&keyword) {
        return None;
    }
    Some(keyword)
}

pub fn normalize_opt(token: Option<&str>, noise: &NoiseWords) -> Option<String> {
    token.and_then(|t| normalize(t, noise))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> NoiseWords {
        NoiseWords::new()
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(normalize("hello,", &none()).as_deref(), Some("hello"));
        assert_eq!(normalize("Hello!!", &none()).as_deref(), Some("hello"));
        assert_eq!(normalize("WORLD", &none()).as_deref(), Some("world"));
        assert_eq!(normalize("end.\"", &none()).as_deref(), Some("end"));
    }

    #[test]
    fn rejects_embedded_punctuation() {
        assert_eq!(normalize("do,g", &none()), None);
        assert_eq!(normalize("ab,cd", &none()), None);
        assert_eq!(normalize("don't", &none()), None);
        assert_eq!(normalize("e-mail", &none()), None);
        assert!(!has_embedded_punctuation("plain"));
        assert!(!has_embedded_punctuation("trailing?!"));
        assert!(has_embedded_punctuation("a1b"));
    }

    #[test]
    fn rejects_tokens_without_letters() {
        assert_eq!(normalize("...", &none()), None);
        assert_eq!(normalize("", &none()), None);
        assert_eq!(normalize("1999", &none()), None);
        assert_eq!(normalize("(quoted", &none()), None);
    }

    #[test]
    fn drops_noise_words() {
        let noise = NoiseWords::from_words(["the", "and"]);
        assert_eq!(normalize("The", &noise), None);
        assert_eq!(normalize("and;", &noise), None);
        assert_eq!(normalize("band", &noise).as_deref(), Some("band"));
    }

    #[test]
    fn missing_token_is_none() {
        assert_eq!(normalize_opt(None, &none()), None);
        assert_eq!(normalize_opt(Some("Rust."), &none()).as_deref(), Some("rust"));
    }

    #[test]
    fn splits_on_any_whitespace() {
        let t: Vec<&str> = tokens("  apple\tbanana\n\ncherry  ").collect();
        assert_eq!(t, ["apple", "banana", "cherry"]);
        assert_eq!(tokens("").count(), 0);
    }
}
