use crate::config::selectors;
use crate::dom::{self, Page};
use crate::events::EventTable;

pub const CARD_LIFT: (&str, &str) = ("translateY(-10px)", "translateY(0)");
pub const ICON_TILT: (&str, &str) = ("scale(1.2) rotate(5deg)", "scale(1) rotate(0)");

/// Lift on service cards and a tilt on gallery icons while hovered.
pub struct HoverEffects;

impl HoverEffects {
    pub fn bind(page: &Page, table: &mut EventTable) {
        for card in page.query_all(selectors::SERVICE_CARDS) {
            let (over, out) = CARD_LIFT;
            let target = card.clone();
            table.on(card.clone(), ".service-card", "mouseenter", "card lift", move |_| {
                dom::set_style(&target, "transform", over);
            });
            let target = card.clone();
            table.on(card, ".service-card", "mouseleave", "card settle", move |_| {
                dom::set_style(&target, "transform", out);
            });
        }

        for item in page.query_all(selectors::GALLERY_ITEMS) {
            let Some(icon) = item.query_selector("i").ok().flatten() else {
                continue;
            };
            let (over, out) = ICON_TILT;
            let target = icon.clone();
            table.on(item.clone(), ".gallery-item", "mouseenter", "icon tilt", move |_| {
                dom::set_style(&target, "transform", over);
            });
            table.on(item, ".gallery-item", "mouseleave", "icon settle", move |_| {
                dom::set_style(&icon, "transform", out);
            });
        }
    }
}
