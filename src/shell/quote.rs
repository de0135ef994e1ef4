//! Quoting of single words for `/bin/sh` command lines.

use std::borrow::Cow;

/// Quote `word` so the shell passes it through as one argument.
///
/// Words made only of safe characters come back unchanged. NUL bytes
/// cannot reach a process argument and are dropped.
pub fn quote_word(word: &str) -> Cow<'_, str> {
    if word.contains('\0') {
        let cleaned = word.replace('\0', "");
        return Cow::Owned(quote_clean(&cleaned).into_owned());
    }
    quote_clean(word)
}

fn quote_clean(word: &str) -> Cow<'_, str> {
    shlex::try_quote(word).unwrap_or(Cow::Borrowed("''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_words_are_unchanged() {
        for word in ["10", "/usr/local", "x86_64-w64-mingw32", "git://h/x264.git"] {
            assert_eq!(quote_word(word), word);
        }
    }

    #[test]
    fn whitespace_stays_in_one_word() {
        let quoted = quote_word("-O2 -g");
        assert_eq!(shlex::split(&quoted), Some(vec!["-O2 -g".to_string()]));
    }

    #[test]
    fn metacharacters_are_not_interpreted() {
        for word in ["/opt/x;echo INJECTED", "$(id)", "a'b\"c", "`uname`", "x && y"] {
            let quoted = quote_word(word);
            assert_eq!(shlex::split(&quoted), Some(vec![word.to_string()]));
        }
    }

    #[test]
    fn empty_word_is_kept_as_an_argument() {
        assert_eq!(quote_word(""), "''");
    }

    #[test]
    fn nul_bytes_are_dropped() {
        assert_eq!(quote_word("a\0b"), "ab");
    }
}
