
#[cfg(debug_assertions)]
pub fn get_storefront_url() -> &'static str {
    "http://localhost:5001"  // Storefront dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_storefront_url() -> &'static str {
    "https://hs-home-git-main-parameshs-projects-5e915c35.vercel.app"
}

/// Link to an in-page anchor on the storefront site ("products", "services").
pub fn storefront_anchor(anchor: &str) -> String {
    format!("{}/#{}", get_storefront_url(), anchor)
}

// International format, digits only, no leading '+'.
pub const WHATSAPP_NUMBER: &str = match option_env!("HYNOX_WHATSAPP_NUMBER") {
    Some(number) => number,
    None => "919500656339",
};

pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const MIN_MESSAGE_CHARS: usize = 10;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// How long a nav click keeps its target active before visibility updates resume.
pub const SCROLL_SETTLE_MS: u32 = 1000;

pub const HERO_LOAD_DELAY_MS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_anchor_appends_fragment() {
        let link = storefront_anchor("products");
        assert!(link.starts_with(get_storefront_url()));
        assert!(link.ends_with("/#products"));
    }

    #[test]
    fn whatsapp_number_is_digits_only() {
        assert!(!WHATSAPP_NUMBER.is_empty());
        assert!(WHATSAPP_NUMBER.chars().all(|c| c.is_ascii_digit()));
    }
}
