use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::{selectors, PageConfig};
use crate::dom::{self, Page};
use crate::events::EventTable;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionRange {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionRange {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollView {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
    /// `None` leaves the current link highlight untouched.
    pub active_section: Option<String>,
}

impl ScrollView {
    pub fn at(offset: f64, sections: &[SectionRange], config: &PageConfig) -> Self {
        let marker = offset + config.section_marker_offset;
        Self {
            header_scrolled: offset > config.header_scrolled_offset,
            back_to_top_visible: offset > config.back_to_top_offset,
            active_section: sections
                .iter()
                .rev()
                .find(|s| s.contains(marker))
                .map(|s| s.id.clone()),
        }
    }
}

pub fn links_to(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#')) == Some(section_id)
}

/// Sticky header, back-to-top visibility and active nav link, all driven by scroll offset.
pub struct ScrollReactor {
    page: Page,
    header: Option<Element>,
    back_to_top: Option<Element>,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
}

impl ScrollReactor {
    pub fn mount(page: &Page) -> Rc<Self> {
        Rc::new(Self {
            page: page.clone(),
            header: page.query(selectors::HEADER),
            back_to_top: page.by_id(selectors::BACK_TO_TOP).ok(),
            sections: page
                .query_all(selectors::SECTIONS)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect(),
            links: page.query_all(selectors::NAV_LINKS),
        })
    }

    pub fn bind(self: &Rc<Self>, table: &mut EventTable) {
        let this = Rc::clone(self);
        table.on(self.page.window.clone(), "window", "scroll", "scroll reactor", move |_| {
            this.on_scroll();
        });

        if let Some(button) = &self.back_to_top {
            let window = self.page.window.clone();
            table.on(button.clone(), "#backToTop", "click", "back to top", move |_| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            });
        }
    }

    fn section_ranges(&self) -> Vec<SectionRange> {
        self.sections
            .iter()
            .map(|s| SectionRange {
                id: s.id(),
                top: f64::from(s.offset_top()),
                height: f64::from(s.client_height()),
            })
            .collect()
    }

    pub fn on_scroll(&self) {
        let view = ScrollView::at(self.page.scroll_y(), &self.section_ranges(), &self.page.config);

        if let Some(header) = &self.header {
            dom::set_class(header, "scrolled", view.header_scrolled);
        }
        if let Some(button) = &self.back_to_top {
            dom::set_class(button, "visible", view.back_to_top_visible);
        }
        if let Some(active) = view.active_section {
            for link in &self.links {
                let href = link.get_attribute("href");
                dom::set_class(link, "active", links_to(href.as_deref(), &active));
            }
        }
    }
}
