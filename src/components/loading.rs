use web_sys::Element;

use crate::config::selectors;
use crate::dom::{self, Page};
use crate::error::Result;

pub struct LoadingScreen {
    screen: Element,
}

impl LoadingScreen {
    pub fn mount(page: &Page) -> Result<Self> {
        Ok(Self {
            screen: page.by_id(selectors::LOADING_SCREEN)?,
        })
    }

    pub fn fade_out(&self) {
        dom::set_style(&self.screen, "opacity", "0");
        dom::set_style(&self.screen, "visibility", "hidden");
    }
}
