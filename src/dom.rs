use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::PageConfig;
use crate::error::{Error, Result};

/// Handles every component is built from. Cloning only clones JS references.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
}

impl Page {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let config = Rc::new(PageConfig::load(&document));
        Ok(Self { window, document, config })
    }

    pub fn by_id(&self, id: &'static str) -> Result<Element> {
        self.document.get_element_by_id(id).ok_or(Error::Missing(id))
    }

    pub fn query(&self, selector: &'static str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn require(&self, selector: &'static str) -> Result<Element> {
        self.query(selector).ok_or(Error::Missing(selector))
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all(&self.document, selector)
    }

    /// Like `query_all`, but an empty match is treated as the element being absent.
    pub fn require_all(&self, selector: &'static str) -> Result<Vec<Element>> {
        let found = self.query_all(selector);
        if found.is_empty() {
            Err(Error::Missing(selector))
        } else {
            Ok(found)
        }
    }

    pub fn body(&self) -> Result<HtmlElement> {
        self.document.body().ok_or(Error::NoBody)
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    /// Appends a `<style>` block to `<head>` once per id.
    pub fn inject_style(&self, id: &str, css: &str) -> Result<()> {
        if self.document.get_element_by_id(id).is_some() {
            return Ok(());
        }
        let style = self.document.create_element("style")?;
        style.set_id(id);
        style.set_text_content(Some(css));
        let head = self.document.head().ok_or(Error::Missing("head"))?;
        head.append_child(&style)?;
        Ok(())
    }
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let _ = if on { classes.add_1(class) } else { classes.remove_1(class) };
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
