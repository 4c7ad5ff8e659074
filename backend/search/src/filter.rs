/// Substrings that mark a URL as a non-food image (logos, signage, page chrome).
pub const URL_DENYLIST: &[&str] = &["logo", "sign", "banner", "icon"];

/// Whether the URL text contains any denylisted keyword, ignoring case.
/// Only the URL is inspected, never the image.
pub fn is_denylisted(url: &str) -> bool {
    let lower = url.to_lowercase();
    URL_DENYLIST.iter().any(|k| lower.contains(k))
}

/// Drop denylisted URLs, keeping the search engine's order.
pub fn filter_candidates<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    urls.into_iter().filter(|u| !is_denylisted(u)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keywords_case_insensitively() {
        assert!(is_denylisted("https://cdn.example.com/LOGO.png"));
        assert!(is_denylisted("https://example.com/Banner-top.jpg"));
        assert!(is_denylisted("https://example.com/favicon.ico"));
    }

    #[test]
    fn substring_matches_are_accepted_tradeoff() {
        // "design" contains "sign": a known false positive.
        assert!(is_denylisted("https://design-food.com/pasta.jpg"));
    }

    #[test]
    fn keeps_order_of_survivors() {
        let urls = vec![
            "https://a.com/pho.jpg".to_string(),
            "https://b.com/logo.png".to_string(),
            "https://c.com/pho-bowl.jpg".to_string(),
        ];
        assert_eq!(
            filter_candidates(urls),
            vec!["https://a.com/pho.jpg".to_string(), "https://c.com/pho-bowl.jpg".to_string()]
        );
    }
}
