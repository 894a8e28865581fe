use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Element ids and selectors the page markup provides.
pub mod selectors {
    pub const PAGE_CONFIG: &str = "page-config";
    pub const LOADING_SCREEN: &str = "loadingScreen";
    pub const BACK_TO_TOP: &str = "backToTop";
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const NAV_LIST: &str = ".nav-list";
    pub const NAV_LINKS: &str = ".nav-link";
    pub const CURRENT_YEAR: &str = "currentYear";
    pub const PARTICLES: &str = "particles";
    pub const SERVICE_FORM: &str = "serviceForm";
    pub const STATS_REGION: &str = ".hero-stats";
    pub const STAT_NUMBERS: &str = ".stat-number";
    pub const HEADER: &str = ".header";
    pub const SECTIONS: &str = "section[id]";
    pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
    pub const REVEAL_TARGETS: &str = ".service-card, .gallery-item, .testimonial-card, .feature";
    pub const STAGGER_TARGETS: &str = ".service-card, .gallery-item, .testimonial-card";
    pub const SERVICE_CARDS: &str = ".service-card";
    pub const GALLERY_ITEMS: &str = ".gallery-item";
    pub const CTA_BUTTONS: &str = ".btn-primary, .btn-whatsapp";
    pub const GAUGE_NEEDLE: &str = ".gauge-needle";
    pub const LIGHTS: &str = ".light";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub loading_delay_ms: u32,
    pub particle_count: usize,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub header_scrolled_offset: f64,
    pub back_to_top_offset: f64,
    pub section_marker_offset: f64,
    pub nav_breakpoint: f64,
    pub resize_debounce_ms: u32,
    pub toast_enter_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
    pub pulse_interval_ms: u32,
    pub pulse_duration_ms: u32,
    pub lights_interval_ms: u32,
    pub acknowledgment: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 1500,
            particle_count: 50,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            header_scrolled_offset: 100.0,
            back_to_top_offset: 500.0,
            section_marker_offset: 100.0,
            nav_breakpoint: 768.0,
            resize_debounce_ms: 250,
            toast_enter_delay_ms: 100,
            toast_visible_ms: 5000,
            toast_exit_ms: 300,
            pulse_interval_ms: 5000,
            pulse_duration_ms: 1000,
            lights_interval_ms: 1000,
            acknowledgment: "Service request submitted successfully! We will contact you within 24 hours."
                .to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from `<script type="application/json" id="page-config">`.
    /// Absent or malformed blocks fall back to the defaults.
    pub fn load(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(selectors::PAGE_CONFIG)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("ignoring page config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_override_only_touches_named_fields() {
        let config = PageConfig::from_json(r#"{"particle_count": 12, "nav_breakpoint": 1024}"#).unwrap();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.nav_breakpoint, 1024.0);
        assert_eq!(config.toast_visible_ms, 5000);
        assert_eq!(config.counter_tick_ms, 16);
    }

    #[test]
    fn default_timings_match_the_page_design() {
        let config = PageConfig::default();
        assert_eq!(config.toast_enter_delay_ms, 100);
        assert_eq!(config.toast_visible_ms, 5000);
        assert_eq!(config.toast_exit_ms, 300);
        assert_eq!(config.loading_delay_ms, 1500);
        assert_eq!(config.counter_duration_ms, 2000);
        assert_eq!(config.counter_tick_ms, 16);
        assert_eq!(config.pulse_interval_ms, 5000);
        assert_eq!(config.pulse_duration_ms, 1000);
        assert_eq!(config.lights_interval_ms, 1000);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.particle_count, 50);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PageConfig::from_json("{ particle_count: }").unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(PageConfig::from_json(r#"{"particle_count": "many"}"#).is_err());
    }
}
