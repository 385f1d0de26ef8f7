use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Window scroll offset that puts a section's top edge just under the
/// fixed header.
#[inline]
pub fn scroll_target_top(section_offset_top: f64, header_offset: f64) -> f64 {
    (section_offset_top - header_offset).max(0.0)
}

/// Smooth-scroll the window to the element with id `anchor`.
///
/// Returns `false` when the element is not on the page.
pub fn scroll_to_anchor(anchor: &str, header_offset: f64) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let element = window
        .document()
        .and_then(|doc| doc.get_element_by_id(anchor))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let Some(element) = element else {
        warn!("No section with id '{}' to scroll to", anchor);
        return false;
    };

    let top = scroll_target_top(element.offset_top() as f64, header_offset);
    debug!("Scrolling to '{}' at {}px", anchor, top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Fragment of the current URL without the leading '#', if any.
pub fn current_fragment() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#');
    (!fragment.is_empty()).then(|| fragment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_subtracts_header() {
        assert_eq!(scroll_target_top(1280.0, 80.0), 1200.0);
    }

    #[test]
    fn test_target_never_negative() {
        assert_eq!(scroll_target_top(40.0, 80.0), 0.0);
        assert_eq!(scroll_target_top(0.0, 80.0), 0.0);
    }
}
