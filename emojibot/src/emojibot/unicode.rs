use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Turn `:shortcode:` tokens into Unicode emoji; unknown shortcodes are left as written.
pub fn render_unicode(input: &str) -> String {
    // Lowercase letters, digits, underscores, plus, or minus between colons.
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r":([a-z0-9_+\-]+):").expect("emoji shortcode regex"));

    RE.replace_all(input, |caps: &Captures| {
        emojis::get_by_shortcode(&caps[1])
            .map(|e| e.as_str().to_string())
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}
