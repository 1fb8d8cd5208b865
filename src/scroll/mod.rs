// scroll/ - Reading-progress bar
//
// measure -> clamp -> spring -> horizontal scale of a fixed bar.

mod measure;
mod spring;

pub use measure::{ScrollMetrics, progress};
pub use spring::Spring;

use crate::config::SpringConfig;

/// Smoothed scroll progress, always in [0, 1].
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    spring: Spring,
    scale: f64,
}

impl ScrollTracker {
    pub fn new(cfg: SpringConfig) -> Self {
        Self { spring: Spring::new(cfg, 0.0), scale: 0.0 }
    }

    /// Feed one frame of measurements, `dt` seconds after the last.
    ///
    /// An unusable measurement keeps chasing the previous target.
    pub fn update(&mut self, m: ScrollMetrics, dt: f64) -> f64 {
        let target = match progress(m) {
            Some(p) => p,
            None => {
                log::trace!("scroll: measurement unavailable, holding {}", self.spring.target());
                self.spring.target()
            }
        };
        self.scale = self.spring.update(target, dt).clamp(0.0, 1.0);
        self.scale
    }

    /// Snap to the current position, e.g. when the page loads mid-scroll.
    pub fn jump_to(&mut self, m: ScrollMetrics) {
        if let Some(p) = progress(m) {
            self.spring.jump(p);
            self.scale = p;
        }
    }

    pub fn scale_x(&self) -> f64 { self.scale }
    pub fn target(&self) -> f64 { self.spring.target() }

    /// Nothing left to animate; the host may stop requesting frames.
    pub fn is_settled(&self) -> bool { self.spring.is_at_rest() }
}
