use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^[ \t]*version[ \t]*:[ \t]*(.*)$").expect("valid version regex")
});

/// Pull the `version:` value out of a module descriptor body.
///
/// The first line with a non-blank value wins.
pub fn extract_version(body: &str) -> Option<String> {
    VERSION_LINE.captures_iter(body).find_map(|caps| {
        let value = caps.get(1)?.as_str().trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
