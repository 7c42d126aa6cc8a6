use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_YEAR_RE: Regex = Regex::new(r"^(.*?)\s*\((\d{4})\)").unwrap();
    static ref EPISODE_MARKER_RE: Regex = Regex::new(r"(?i)[\s.]S\d{1,2}(E\d{1,2})?.*").unwrap();
    static ref SEASON_MARKER_RE: Regex = Regex::new(r"(?i)[\s.]Season[\s.]\d{1,2}.*").unwrap();
}

/// Replace release-name dot separators with spaces and trim.
fn dedot(name: &str) -> String {
    name.trim().replace('.', " ").trim().to_string()
}

/// Derive a canonical search title and optional year from a movie folder name.
///
/// A leading `<title> (<year>)` pattern yields both parts; anything else is
/// returned whole, de-dotted, with no year.
pub fn normalize_movie_name(folder_name: &str) -> (String, Option<String>) {
    if let Some(caps) = TITLE_YEAR_RE.captures(folder_name) {
        return (dedot(&caps[1]), Some(caps[2].to_string()));
    }
    (dedot(folder_name), None)
}

/// Derive a canonical search title and optional year from a TV folder name.
///
/// Tries the `<title> (<year>)` pattern first. Otherwise strips a trailing
/// `Sx2[Ex2]` or `Season <n>` marker and everything after it. The fallback
/// path never produces a year.
pub fn normalize_tv_name(folder_name: &str) -> (String, Option<String>) {
    if let Some(caps) = TITLE_YEAR_RE.captures(folder_name) {
        return (dedot(&caps[1]), Some(caps[2].to_string()));
    }
    let cleaned = EPISODE_MARKER_RE.replace(folder_name, "");
    let cleaned = SEASON_MARKER_RE.replace(&cleaned, "");
    (dedot(&cleaned), None)
}
