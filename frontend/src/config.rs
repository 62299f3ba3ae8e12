#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://wc26guides.com"
}

/// Height of the fixed top nav. Sections count as reached once their top
/// passes this line.
pub const STICKY_HEADER_OFFSET: f64 = 120.0;

/// Row height of one entry in the sticky table of contents, in px.
pub const TOC_ITEM_HEIGHT: f64 = 40.0;

/// The top nav switches to its compact style past this scroll position.
pub const NAV_COMPACT_AFTER: f64 = 400.0;

pub const BOOKING_AFFILIATE_ID: &str = "2311236";
pub const TICKETS_AFFILIATE_ID: &str = "wc26guides";

/// Absolute URL for a site path, used for canonical links.
pub fn canonical_url(path: &str) -> String {
    format!("{}{}", get_site_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_url_prefixes_site() {
        let url = canonical_url("/cities/toronto");
        assert!(url.starts_with(get_site_url()));
        assert!(url.ends_with("/cities/toronto"));
    }
}
