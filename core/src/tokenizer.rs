use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALNUM: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
}

/// Lazily yields the tokens of `text`: maximal runs of alphanumeric
/// characters, uppercased. Everything else separates tokens and is
/// discarded. No stemming, no stop words, no length limits.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    ALNUM.find_iter(text).map(|m| m.as_str().to_uppercase())
}
