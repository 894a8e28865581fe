//! Wires every component to the page once, in a fixed order, and schedules the
//! DOM-ready and load stages.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};

use crate::components::counter::CounterAnimator;
use crate::components::form::FormAcknowledger;
use crate::components::hover::HoverEffects;
use crate::components::loading::LoadingScreen;
use crate::components::nav::NavToggle;
use crate::components::notification::Notifier;
use crate::components::particles::ParticleField;
use crate::components::pulse::{DashboardLights, PeriodicPulse};
use crate::components::reveal::RevealAnimator;
use crate::components::scroll::ScrollReactor;
use crate::components::smooth_scroll::SmoothScroll;
use crate::components::year;
use crate::dom::Page;
use crate::error::{Error, Result};
use crate::events::EventTable;

/// How far the document got before the script started running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    DomReady,
    Loaded,
}

/// Maps `document.readyState`.
impl From<&str> for Stage {
    fn from(state: &str) -> Self {
        match state {
            "interactive" => Stage::DomReady,
            "complete" => Stage::Loaded,
            _ => Stage::Parsing,
        }
    }
}

impl Stage {
    pub fn awaits_dom_ready(self) -> bool {
        self == Stage::Parsing
    }

    pub fn awaits_load(self) -> bool {
        self != Stage::Loaded
    }
}

fn mounted<T>(component: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(Error::Missing(what)) => {
            info!("{}: skipped, page has no {}", component, what);
            None
        }
        Err(e) => {
            warn!("{}: skipped: {}", component, e);
            None
        }
    }
}

fn on_dom_ready(page: &Page) {
    mounted("current year", year::fill_current_year(page));
    if let Some(lights) = mounted("dashboard lights", DashboardLights::mount(page)) {
        lights.start();
    }
}

fn on_load(page: &Page, reveal: Option<Rc<RevealAnimator>>) {
    let page = page.clone();
    Timeout::new(page.config.loading_delay_ms, move || {
        if let Some(screen) = mounted("loading screen", LoadingScreen::mount(&page)) {
            screen.fade_out();
        }
        if let Some(reveal) = &reveal {
            reveal.stagger();
        }
        if let Some(field) = mounted("particle field", ParticleField::mount(&page)) {
            mounted("particle field", field.spawn());
        }
        if let Some(counters) = mounted("counter animator", CounterAnimator::mount(&page)) {
            mounted("counter animator", counters.watch());
        }
    })
    .forget();
}

/// Defers all mounting until the markup exists.
pub fn run() -> Result<()> {
    let page = Page::current()?;
    debug!("page config: {:?}", page.config);

    let stage = Stage::from(page.document.ready_state().as_str());
    if !stage.awaits_dom_ready() {
        start(&page, stage);
        return Ok(());
    }

    let mut table: EventTable = EventTable::default();
    let ready_page = page.clone();
    table.on(page.document.clone(), "document", "DOMContentLoaded", "start", move |_| {
        start(&ready_page, Stage::DomReady)
    });
    table.register()?;
    Ok(())
}

/// Mounts every component present on the page. A failing component is
/// logged and skipped.
fn start(page: &Page, stage: Stage) {
    let mut table: EventTable = EventTable::default();

    let notifier = mounted("notifications", Notifier::mount(page));
    if let Some(nav) = mounted("navigation toggle", NavToggle::mount(page)) {
        nav.bind(&mut table);
    }
    ScrollReactor::mount(page).bind(&mut table);
    SmoothScroll::bind(page, &mut table);
    match notifier {
        Some(notifier) => {
            if let Some(form) = mounted("form acknowledger", FormAcknowledger::mount(page, notifier)) {
                form.bind(&mut table);
            }
        }
        None => warn!("form acknowledger: skipped, no notifications"),
    }
    HoverEffects::bind(page, &mut table);

    let reveal = mounted("reveal animator", RevealAnimator::mount(page)).map(Rc::new);
    if let Some(reveal) = &reveal {
        mounted("reveal animator", reveal.observe());
    }
    if let Some(pulse) = mounted("periodic pulse", PeriodicPulse::mount(page)) {
        pulse.start();
    }

    on_dom_ready(page);
    if stage.awaits_load() {
        let load_page = page.clone();
        table.on(page.window.clone(), "window", "load", "page load", move |_| {
            on_load(&load_page, reveal.clone())
        });
    } else {
        on_load(page, reveal);
    }

    debug!("{} listeners declared", table.len());
    for row in table.describe() {
        debug!("listen: {}", row);
    }
    if let Some(count) = mounted("event table", table.register()) {
        info!("registered {} listeners", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_running_during_parse_waits_for_both_stages() {
        let stage = Stage::from("loading");
        assert!(stage.awaits_dom_ready());
        assert!(stage.awaits_load());
    }

    #[test]
    fn deferred_script_runs_dom_ready_immediately() {
        let stage = Stage::from("interactive");
        assert!(!stage.awaits_dom_ready());
        assert!(stage.awaits_load());
    }

    #[test]
    fn late_script_runs_everything_immediately() {
        let stage = Stage::from("complete");
        assert_eq!(stage, Stage::Loaded);
        assert!(!stage.awaits_dom_ready());
        assert!(!stage.awaits_load());
    }

    #[test]
    fn missing_elements_only_skip_their_component() {
        let skipped: Option<()> = mounted("form acknowledger", Err(Error::Missing("serviceForm")));
        assert!(skipped.is_none());
        assert_eq!(mounted("current year", Ok(2026)), Some(2026));
    }

    #[test]
    fn unknown_ready_state_is_treated_as_parsing() {
        assert_eq!(Stage::from(""), Stage::Parsing);
        assert!(Stage::from("uninitialized").awaits_dom_ready());
    }

    #[test]
    fn failed_notifications_do_not_stop_startup() {
        let notifier: Option<()> = mounted("notifications", Err(Error::NoBody));
        assert!(notifier.is_none());
        let js: Option<()> = mounted("notifications", Err(Error::Js("append failed".into())));
        assert!(js.is_none());
        assert_eq!(mounted("navigation toggle", Ok("next")), Some("next"));
    }
}
