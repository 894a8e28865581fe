use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::selectors;
use crate::dom::Page;
use crate::error::Result;

/// What a counter element should show after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Running(i64),
    Done(i64),
}

impl Frame {
    pub fn value(self) -> i64 {
        match self {
            Frame::Running(v) | Frame::Done(v) => v,
        }
    }
}

/// Linear count from zero to `target`, one fixed increment per tick. A
/// target at or below zero is reached on the first tick.
#[derive(Debug, Clone)]
pub struct CounterTween {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterTween {
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            increment: target as f64 / ticks.max(1.0),
            current: 0.0,
        }
    }

    pub fn is_trivial(&self) -> bool {
        self.target <= 0
    }

    pub fn tick(&mut self) -> Frame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            Frame::Done(self.target)
        } else {
            Frame::Running(self.current.floor() as i64)
        }
    }
}

/// `parseInt` semantics: skip leading whitespace, accept one sign, take the
/// leading digits.
pub fn parse_target(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Latch that lets exactly one caller through.
#[derive(Debug, Default)]
pub struct FireOnce(Cell<bool>);

impl FireOnce {
    pub fn try_fire(&self) -> bool {
        !self.0.replace(true)
    }
}

pub struct CounterAnimator {
    page: Page,
    region: Element,
    counters: Vec<Element>,
    fired: FireOnce,
}

impl CounterAnimator {
    pub fn mount(page: &Page) -> Result<Rc<Self>> {
        Ok(Rc::new(Self {
            page: page.clone(),
            region: page.require(selectors::STATS_REGION)?,
            counters: page.require_all(selectors::STAT_NUMBERS)?,
            fired: FireOnce::default(),
        }))
    }

    /// Starts every counter the first time the stats region is half visible.
    pub fn watch(self: &Rc<Self>) -> Result<()> {
        let this = Rc::clone(self);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting && this.fired.try_fire() {
                    observer.disconnect();
                    this.start_all();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.5));
        init.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(&self.region);
        callback.forget();
        Ok(())
    }

    fn start_all(&self) {
        debug!("animating {} counters", self.counters.len());
        for el in &self.counters {
            let raw = el.get_attribute("data-count").unwrap_or_default();
            match parse_target(&raw) {
                Some(target) => self.animate(el.clone(), target),
                None => warn!("counter has no numeric data-count: {:?}", raw),
            }
        }
    }

    pub fn animate(&self, element: Element, target: i64) {
        let config = &self.page.config;
        let mut tween = CounterTween::new(target, config.counter_duration_ms, config.counter_tick_ms);
        if tween.is_trivial() {
            element.set_text_content(Some(&target.to_string()));
            return;
        }

        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let handle_clone = handle.clone();
        let interval = Interval::new(config.counter_tick_ms, move || {
            let frame = tween.tick();
            element.set_text_content(Some(&frame.value().to_string()));
            if let Frame::Done(_) = frame {
                handle_clone.borrow_mut().take();
            }
        });
        *handle.borrow_mut() = Some(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: i64) -> Vec<Frame> {
        let mut tween = CounterTween::new(target, 2000, 16);
        let mut frames = Vec::new();
        loop {
            let frame = tween.tick();
            frames.push(frame);
            if let Frame::Done(_) = frame {
                return frames;
            }
            assert!(frames.len() < 10_000, "tween never finished");
        }
    }

    #[test]
    fn counts_to_exactly_one_hundred_without_going_backwards() {
        let frames = run(100);
        let values: Vec<i64> = frames.iter().map(|f| f.value()).collect();

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 100));
        assert_eq!(frames.last(), Some(&Frame::Done(100)));
        assert_eq!(frames.iter().filter(|f| matches!(f, Frame::Done(_))).count(), 1);
    }

    #[test]
    fn finishes_in_about_duration_over_tick_steps() {
        // 2000 / 16 = 125 ticks; float accumulation may need one extra.
        let frames = run(100);
        assert!((125..=126).contains(&frames.len()), "took {} ticks", frames.len());
    }

    #[test]
    fn displayed_value_is_floored() {
        let mut tween = CounterTween::new(100, 2000, 16);
        // 0.8 per tick
        assert_eq!(tween.tick(), Frame::Running(0));
        assert_eq!(tween.tick(), Frame::Running(1));
        assert_eq!(tween.tick(), Frame::Running(2));
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let mut tween = CounterTween::new(0, 2000, 16);
        assert!(tween.is_trivial());
        assert_eq!(tween.tick(), Frame::Done(0));
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_target("250"), Some(250));
        assert_eq!(parse_target("  15+"), Some(15));
        assert_eq!(parse_target("98%"), Some(98));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn parses_a_leading_sign() {
        assert_eq!(parse_target("-5"), Some(-5));
        assert_eq!(parse_target(" +7k"), Some(7));
        assert_eq!(parse_target("-"), None);
        assert_eq!(parse_target("--3"), None);
        assert_eq!(parse_target("- 3"), None);
    }

    #[test]
    fn negative_target_lands_on_first_tick() {
        let mut tween = CounterTween::new(-5, 2000, 16);
        assert!(tween.is_trivial());
        assert_eq!(tween.tick(), Frame::Done(-5));
        assert_eq!(run(-40).len(), 1);
    }

    #[test]
    fn fire_once_lets_one_caller_through() {
        let latch = FireOnce::default();
        assert!(latch.try_fire());
        assert!(!latch.try_fire());
        assert!(!latch.try_fire());
    }
}
