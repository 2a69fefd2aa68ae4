/// Public path the site is mounted under, with leading and trailing slash.
///
/// Set `SITE_BASE_PATH` at build time to serve from a sub-path.
pub const BASE_PATH: &str = env!("SITE_BASE_PATH");

/// Year the site was built, used for the footer copyright.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// localStorage key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme-pref";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_is_slash_delimited() {
        assert!(BASE_PATH.starts_with('/'));
        assert!(BASE_PATH.ends_with('/'));
        assert!(!BASE_PATH.contains("//"));
    }

    #[test]
    fn test_build_year_is_numeric() {
        assert!(BUILD_YEAR.parse::<u32>().is_ok());
    }
}
