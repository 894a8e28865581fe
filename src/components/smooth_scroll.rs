use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::selectors;
use crate::dom::Page;
use crate::events::EventTable;

/// Selector for an in-page anchor, or `None` for the bare `#` placeholder.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Where to scroll so the target's top lands just below the fixed header.
pub fn destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

pub struct SmoothScroll;

impl SmoothScroll {
    pub fn bind(page: &Page, table: &mut EventTable) {
        for anchor in page.query_all(selectors::IN_PAGE_ANCHORS) {
            let page = page.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            table.on(anchor, "a[href^=\"#\"]", "click", "smooth scroll", move |event| {
                event.prevent_default();
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                let Some(target) = page
                    .document
                    .query_selector(selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let header_height = page
                    .query(selectors::HEADER)
                    .and_then(|h| h.dyn_into::<HtmlElement>().ok())
                    .map(|h| f64::from(h.offset_height()))
                    .unwrap_or(0.0);

                let options = ScrollToOptions::new();
                options.set_top(destination(f64::from(target.offset_top()), header_height));
                options.set_behavior(ScrollBehavior::Smooth);
                page.window.scroll_to_with_scroll_to_options(&options);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_goes_nowhere() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn fragment_is_used_as_selector() {
        assert_eq!(anchor_target("#services"), Some("#services"));
        assert_eq!(anchor_target("/about#team"), None);
    }

    #[test]
    fn header_height_is_subtracted() {
        assert_eq!(destination(1200.0, 80.0), 1120.0);
        assert_eq!(destination(40.0, 0.0), 40.0);
    }
}
