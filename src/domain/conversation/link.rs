//! Play Store link parsing.

use crate::domain::foundation::AppId;

/// Extracts the application id from a Play Store listing URL.
///
/// Looks for an `id=` query parameter and takes its value up to the next
/// `&` separator. Returns `None` when the marker is absent or its value is
/// empty; no further URL validation is performed.
///
/// ```
/// use review_courier::domain::conversation::extract_app_id;
///
/// let app_id =
///     extract_app_id("https://play.google.com/store/apps/details?id=com.foo&hl=en").unwrap();
/// assert_eq!(app_id.as_str(), "com.foo");
/// assert!(extract_app_id("https://example.com").is_none());
/// ```
pub fn extract_app_id(text: &str) -> Option<AppId> {
    let (_, after) = text.split_once("id=")?;
    let value = after.split('&').next().unwrap_or("");
    AppId::new(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_followed_by_other_parameters() {
        let app_id =
            extract_app_id("https://play.google.com/store/apps/details?id=com.foo&hl=en").unwrap();
        assert_eq!(app_id.as_str(), "com.foo");
    }

    #[test]
    fn extracts_id_when_it_is_the_last_parameter() {
        let app_id =
            extract_app_id("https://play.google.com/store/apps/details?id=com.test.app").unwrap();
        assert_eq!(app_id.as_str(), "com.test.app");
    }

    #[test]
    fn returns_none_without_id_marker() {
        assert!(extract_app_id("https://example.com").is_none());
    }

    #[test]
    fn returns_none_for_empty_id_value() {
        assert!(extract_app_id("https://play.google.com/store/apps/details?id=&hl=en").is_none());
    }

    #[test]
    fn returns_none_for_plain_text() {
        assert!(extract_app_id("hello there").is_none());
    }
}
