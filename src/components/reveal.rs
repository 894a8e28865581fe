use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::selectors;
use crate::dom::{self, Page};
use crate::error::Result;

pub const REVEALED: [&str; 2] = ["animate__animated", "animate__fadeInUp"];

/// Delay for the `index`-th element of the load-time cascade, 0.1 s apart.
pub fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 / 10.0)
}

fn mark_revealed(el: &Element) {
    for class in REVEALED {
        let _ = el.class_list().add_1(class);
    }
}

/// Fades content in the first time each element scrolls into view.
pub struct RevealAnimator {
    targets: Vec<Element>,
    staggered: Vec<Element>,
}

impl RevealAnimator {
    pub fn mount(page: &Page) -> Result<Self> {
        Ok(Self {
            targets: page.require_all(selectors::REVEAL_TARGETS)?,
            staggered: page.query_all(selectors::STAGGER_TARGETS),
        })
    }

    pub fn observe(&self) -> Result<()> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        mark_revealed(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        init.set_root_margin("0px 0px -100px 0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in &self.targets {
            observer.observe(el);
        }
        callback.forget();
        debug!("observing {} reveal targets", self.targets.len());
        Ok(())
    }

    /// Load-time cascade over the card grids.
    pub fn stagger(&self) {
        for (index, el) in self.staggered.iter().enumerate() {
            dom::set_style(el, "animation-delay", &stagger_delay(index));
            mark_revealed(el);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "0s");
        assert_eq!(stagger_delay(1), "0.1s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(10), "1s");
        assert_eq!(stagger_delay(12), "1.2s");
    }
}
