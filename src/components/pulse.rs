use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;

use crate::config::selectors;
use crate::dom::{self, Page};
use crate::error::Result;
use crate::timers::Debouncer;

const PULSE_CSS: &str = r#"
    .pulse {
        animation: pulse 1s ease-in-out;
    }
    @keyframes pulse {
        0% { box-shadow: 0 0 0 0 rgba(26, 86, 219, 0.4); }
        70% { box-shadow: 0 0 0 10px rgba(26, 86, 219, 0); }
        100% { box-shadow: 0 0 0 0 rgba(26, 86, 219, 0); }
    }
"#;

/// Periodically draws attention to the call-to-action buttons.
pub struct PeriodicPulse {
    buttons: Vec<Element>,
    interval_ms: u32,
    duration_ms: u32,
}

impl PeriodicPulse {
    pub fn mount(page: &Page) -> Result<Self> {
        page.inject_style("pulse-style", PULSE_CSS)?;
        Ok(Self {
            buttons: page.require_all(selectors::CTA_BUTTONS)?,
            interval_ms: page.config.pulse_interval_ms,
            duration_ms: page.config.pulse_duration_ms,
        })
    }

    /// Runs for the lifetime of the page. Only the latest un-pulse timeout
    /// is held, so nothing piles up between ticks.
    pub fn start(self) {
        let Self { buttons, interval_ms, duration_ms } = self;
        let buttons = Rc::new(buttons);
        let unpulse = Debouncer::new(duration_ms);
        Interval::new(interval_ms, move || {
            set_pulse(&buttons, true);
            let buttons = Rc::clone(&buttons);
            unpulse.schedule(move || set_pulse(&buttons, false));
        })
        .forget();
    }
}

fn set_pulse(buttons: &[Element], on: bool) {
    for button in buttons {
        dom::set_class(button, "pulse", on);
    }
}

/// Blinks the dashboard indicator lights while a gauge is on the page.
pub struct DashboardLights {
    lights: Vec<Element>,
    interval_ms: u32,
}

impl DashboardLights {
    pub fn mount(page: &Page) -> Result<Self> {
        page.require(selectors::GAUGE_NEEDLE)?;
        Ok(Self {
            lights: page.query_all(selectors::LIGHTS),
            interval_ms: page.config.lights_interval_ms,
        })
    }

    pub fn start(self) {
        let Self { lights, interval_ms } = self;
        Interval::new(interval_ms, move || {
            for light in &lights {
                let _ = light.class_list().toggle("active");
            }
        })
        .forget();
    }
}
