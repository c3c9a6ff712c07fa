use url::Url;

use crate::external_url;

const APP_SCHEMES: [&str; 4] = ["tauri", "isolation", "about", "blob"];
const APP_LOCALHOST_HOSTS: [&str; 2] = ["tauri.localhost", "isolation.localhost"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    AllowInWindow,
    OpenExternally(Url),
    Block,
}

fn same_origin(left: &Url, right: &Url) -> bool {
    left.scheme() == right.scheme()
        && left.host_str() == right.host_str()
        && left.port_or_known_default() == right.port_or_known_default()
}

/// True for URLs served by the app itself: the bundled frontend, the
/// isolation frame, and the dev server while developing.
pub fn is_app_url(target: &Url, dev_origin: Option<&Url>) -> bool {
    if APP_SCHEMES.contains(&target.scheme()) {
        return true;
    }

    if matches!(target.scheme(), "http" | "https")
        && target
            .host_str()
            .is_some_and(|host| APP_LOCALHOST_HOSTS.contains(&host))
    {
        return true;
    }

    dev_origin.is_some_and(|origin| same_origin(origin, target))
}

pub fn decide_navigation(target: &Url, dev_origin: Option<&Url>) -> NavigationDecision {
    if is_app_url(target, dev_origin) {
        return NavigationDecision::AllowInWindow;
    }

    match external_url::parse_openable_url(target.as_str()) {
        Ok(parsed) => NavigationDecision::OpenExternally(parsed),
        Err(_) => NavigationDecision::Block,
    }
}

/// Content never gets a second window; external targets go to the OS handler.
pub fn decide_new_window(target: &Url, dev_origin: Option<&Url>) -> NavigationDecision {
    match decide_navigation(target, dev_origin) {
        NavigationDecision::AllowInWindow => NavigationDecision::Block,
        decision => decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("test url should parse")
    }

    #[test]
    fn bundled_frontend_urls_stay_in_window() {
        for raw in [
            "tauri://localhost/index.html",
            "http://tauri.localhost/index.html",
            "https://tauri.localhost/",
            "isolation://localhost/index.html",
            "about:blank",
        ] {
            assert_eq!(
                decide_navigation(&url(raw), None),
                NavigationDecision::AllowInWindow,
                "{raw}"
            );
        }
    }

    #[test]
    fn dev_server_origin_stays_in_window() {
        let dev_origin = url("http://localhost:1420/");
        assert_eq!(
            decide_navigation(&url("http://localhost:1420/settings"), Some(&dev_origin)),
            NavigationDecision::AllowInWindow
        );
        assert_eq!(
            decide_navigation(&url("http://localhost:3000/"), Some(&dev_origin)),
            NavigationDecision::OpenExternally(url("http://localhost:3000/"))
        );
    }

    #[test]
    fn web_links_are_forwarded_to_the_os() {
        assert_eq!(
            decide_navigation(&url("https://example.com/docs"), None),
            NavigationDecision::OpenExternally(url("https://example.com/docs"))
        );
        assert_eq!(
            decide_navigation(&url("mailto:team@example.com"), None),
            NavigationDecision::OpenExternally(url("mailto:team@example.com"))
        );
    }

    #[test]
    fn unsupported_schemes_are_blocked() {
        assert_eq!(
            decide_navigation(&url("file:///etc/passwd"), None),
            NavigationDecision::Block
        );
        assert_eq!(
            decide_navigation(&url("javascript:alert(1)"), None),
            NavigationDecision::Block
        );
    }

    #[test]
    fn new_window_intents_never_open_in_app() {
        assert_eq!(
            decide_new_window(&url("tauri://localhost/index.html"), None),
            NavigationDecision::Block
        );
        assert_eq!(
            decide_new_window(&url("https://example.com/"), None),
            NavigationDecision::OpenExternally(url("https://example.com/"))
        );
    }

    #[test]
    fn tauri_lookalike_hosts_are_not_app_urls() {
        assert!(!is_app_url(&url("https://tauri.localhost.example.com/"), None));
        assert!(!is_app_url(&url("ftp://tauri.localhost/"), None));
    }
}
