/// Split on whitespace runs; leading and trailing whitespace yields no words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Wrap a bare shortcode in colons: `dog` becomes `:dog:`.
pub fn shortcode(entry: &str) -> String {
    format!(":{entry}:")
}

/// Join pieces with single spaces, no trailing separator.
pub fn join_words<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    for (idx, piece) in pieces.into_iter().enumerate() {
        if idx > 0 {
            output.push(' ');
        }
        output.push_str(piece.as_ref());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse() {
        let collected: Vec<&str> = words("  hello \t there\n\nfriend  ").collect();
        assert_eq!(collected, ["hello", "there", "friend"]);
        assert_eq!(words(" \n\t ").count(), 0);
    }

    #[test]
    fn joins_with_single_spaces() {
        assert_eq!(join_words(["a", "b", "c"]), "a b c");
        assert_eq!(join_words(Vec::<String>::new()), "");
        assert_eq!(join_words(words("  spaced   out ")), "spaced out");
    }

    #[test]
    fn shortcodes_get_colons() {
        assert_eq!(shortcode("weary"), ":weary:");
    }
}
