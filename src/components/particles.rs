use log::debug;
use rand::Rng;
use web_sys::Element;

use crate::config::selectors;
use crate::dom::Page;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
}

impl ParticleSpec {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            size: rng.gen_range(2.0..7.0),
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            opacity: rng.gen_range(0.1..0.4),
            duration: rng.gen_range(10.0..30.0),
            delay: rng.gen_range(0.0..5.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; \
             background: rgba(255, 255, 255, {opacity}); border-radius: 50%; \
             left: {left}%; top: {top}%; \
             animation: floatParticle {duration}s linear {delay}s infinite; \
             pointer-events: none;",
            size = self.size,
            opacity = self.opacity,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Keyframes shared by every particle; the end drift is picked once per page.
pub fn float_keyframes(rng: &mut impl Rng) -> String {
    let dx: f64 = rng.gen_range(-50.0..50.0);
    let dy: f64 = rng.gen_range(-50.0..50.0);
    let turn: f64 = rng.gen_range(0.0..360.0);
    format!(
        "@keyframes floatParticle {{
            0% {{ transform: translate(0, 0) rotate(0deg); opacity: 0; }}
            10% {{ opacity: 1; }}
            90% {{ opacity: 1; }}
            100% {{ transform: translate({dx}px, {dy}px) rotate({turn}deg); opacity: 0; }}
        }}"
    )
}

pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}

pub struct ParticleField {
    page: Page,
    container: Element,
}

impl ParticleField {
    pub fn mount(page: &Page) -> Result<Self> {
        Ok(Self {
            page: page.clone(),
            container: page.by_id(selectors::PARTICLES)?,
        })
    }

    pub fn spawn(&self) -> Result<()> {
        let mut rng = rand::thread_rng();
        self.page
            .inject_style("particle-keyframes", &float_keyframes(&mut rng))?;

        let specs = generate(self.page.config.particle_count, &mut rng);
        for spec in &specs {
            let particle = self.page.document.create_element("div")?;
            particle.set_class_name("particle");
            particle.set_attribute("style", &spec.css())?;
            self.container.append_child(&particle)?;
        }
        debug!("spawned {} particles", specs.len());
        Ok(())
    }
}
