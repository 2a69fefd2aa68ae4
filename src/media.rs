use regex::Regex;
use std::sync::LazyLock;

use crate::config::BASE_PATH;

static YOUTUBE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|embed/|shorts/))([A-Za-z0-9_-]{11})")
        .expect("YouTube path pattern should compile")
});
static YOUTUBE_QUERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]v=([A-Za-z0-9_-]{11})").expect("YouTube query pattern should compile")
});

/// Extract the 11 character video id from a YouTube URL.
///
/// Accepts watch, short-link, embed and shorts URLs, then falls back to a
/// `v=` query parameter anywhere in the URL.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_PATH_RE
        .captures(url)
        .or_else(|| YOUTUBE_QUERY_RE.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Preview image for a YouTube URL, or `None` if no id can be found.
pub fn youtube_thumbnail(url: &str) -> Option<String> {
    youtube_id(url).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

/// Resolve a bundled asset against the configured base path.
pub fn asset(path: &str) -> String {
    join_asset(BASE_PATH, path)
}

pub fn join_asset(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_with_share_param() {
        let url = "https://youtu.be/pmGDxj7VQFk?si=7gK2XanwFnxS-Qfi";
        assert_eq!(youtube_id(url), Some("pmGDxj7VQFk"));
        assert_eq!(
            youtube_thumbnail(url).as_deref(),
            Some("https://img.youtube.com/vi/pmGDxj7VQFk/hqdefault.jpg")
        );
    }

    #[test]
    fn test_accepted_url_shapes() {
        let cases = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        ];
        for url in cases {
            assert_eq!(youtube_id(url), Some("dQw4w9WgXcQ"), "failed for {url}");
        }
    }

    #[test]
    fn test_unmatched_urls_have_no_thumbnail() {
        assert_eq!(youtube_thumbnail("https://www.youtube.com/"), None);
        assert_eq!(youtube_thumbnail("https://youtu.be/short"), None);
        assert_eq!(youtube_thumbnail("https://vimeo.com/123456789"), None);
        assert_eq!(youtube_thumbnail(""), None);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let url = "https://www.youtube.com/shorts/abc_DEF-123";
        let first = youtube_thumbnail(url);
        assert_eq!(first, youtube_thumbnail(url));
        assert_eq!(
            first.as_deref(),
            Some("https://img.youtube.com/vi/abc_DEF-123/hqdefault.jpg")
        );
    }

    #[test]
    fn test_join_asset() {
        assert_eq!(join_asset("/", "pic.jpeg"), "/pic.jpeg");
        assert_eq!(join_asset("/portfolio/", "pic.jpeg"), "/portfolio/pic.jpeg");
        assert_eq!(
            join_asset("/portfolio", "/achievements/sih.jpeg"),
            "/portfolio/achievements/sih.jpeg"
        );
    }

    #[test]
    fn test_asset_uses_base_path() {
        let resolved = asset("resume.pdf");
        assert!(resolved.starts_with(BASE_PATH));
        assert!(resolved.ends_with("/resume.pdf"));
    }
}
