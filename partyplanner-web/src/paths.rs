//! Base URL used when building share links.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/planner` for GitHub Pages),
/// share links point below that path. Otherwise they point at the site root.
#[must_use]
pub fn share_base(origin: &str) -> String {
    share_base_with(origin, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn share_base_with(origin: &str, public_url: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = public_url.trim().trim_matches('/');
    if path.is_empty() {
        format!("{origin}/")
    } else {
        format!("{origin}/{path}/")
    }
}

/// Share base for the page currently loaded in the browser.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn current_share_base() -> String {
    let origin = crate::dom::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default();
    share_base(&origin)
}

#[cfg(test)]
mod tests {
    use super::{share_base, share_base_with};

    #[test]
    fn root_base_when_public_url_missing() {
        assert_eq!(share_base("https://planner.example"), "https://planner.example/");
    }

    #[test]
    fn public_url_is_appended_once() {
        assert_eq!(
            share_base_with("https://planner.example/", "/party/"),
            "https://planner.example/party/"
        );
        assert_eq!(
            share_base_with("https://planner.example", "party"),
            "https://planner.example/party/"
        );
    }
}
