use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use crate::config::selectors;
use crate::dom::{self, Page};
use crate::error::Result;
use crate::events::EventTable;
use crate::timers::Debouncer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Desktop width with the mobile menu still open.
    pub fn should_close_at(self, width: f64, breakpoint: f64) -> bool {
        self.open && width > breakpoint
    }
}

pub struct NavToggle {
    page: Page,
    toggle: Element,
    list: Element,
    body: HtmlElement,
    links: Vec<Element>,
    state: Cell<NavState>,
    resize: Debouncer,
}

impl NavToggle {
    pub fn mount(page: &Page) -> Result<Rc<Self>> {
        Ok(Rc::new(Self {
            page: page.clone(),
            toggle: page.by_id(selectors::NAV_TOGGLE)?,
            list: page.require(selectors::NAV_LIST)?,
            body: page.body()?,
            links: page.query_all(selectors::NAV_LINKS),
            state: Cell::new(NavState::default()),
            resize: Debouncer::new(page.config.resize_debounce_ms),
        }))
    }

    pub fn bind(self: &Rc<Self>, table: &mut EventTable) {
        let this = Rc::clone(self);
        table.on(self.toggle.clone(), "#navToggle", "click", "nav toggle", move |_| {
            this.set(this.state.get().toggled());
        });

        for link in &self.links {
            let this = Rc::clone(self);
            table.on(link.clone(), ".nav-link", "click", "nav close", move |_| {
                this.set(this.state.get().closed());
            });
        }

        let this = Rc::clone(self);
        table.on(self.page.window.clone(), "window", "resize", "nav resize", move |_| {
            let inner = Rc::clone(&this);
            this.resize.schedule(move || {
                let state = inner.state.get();
                if state.should_close_at(inner.page.inner_width(), inner.page.config.nav_breakpoint) {
                    inner.set(state.closed());
                }
            });
        });
    }

    fn set(&self, state: NavState) {
        self.state.set(state);
        dom::set_class(&self.list, "active", state.open);
        dom::set_class(&self.toggle, "active", state.open);
        dom::set_class(&self.body, "no-scroll", state.open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_then_link_closes() {
        let state = NavState::default();
        assert!(!state.open);
        let state = state.toggled();
        assert!(state.open);
        assert!(!state.closed().open);
    }

    #[test]
    fn link_click_closes_regardless_of_prior_state() {
        assert!(!NavState { open: true }.closed().open);
        assert!(!NavState { open: false }.closed().open);
    }

    #[test]
    fn toggle_twice_is_closed() {
        assert_eq!(NavState::default().toggled().toggled(), NavState::default());
    }

    #[test]
    fn resize_closes_only_above_breakpoint_while_open() {
        let open = NavState { open: true };
        assert!(open.should_close_at(1024.0, 768.0));
        assert!(!open.should_close_at(768.0, 768.0));
        assert!(!open.should_close_at(500.0, 768.0));
        assert!(!NavState::default().should_close_at(1024.0, 768.0));
    }
}
