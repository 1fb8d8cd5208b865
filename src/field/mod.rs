// field/ - Decorative starfield backdrop
//
// Points are generated once, then only the rotation changes per frame.

mod cloud;
mod rotation;

pub use cloud::{fill_sphere, magnitude};
pub use rotation::{Rotation, apply};

use rand::Rng;

use crate::config::StarFieldConfig;
use crate::error::Result;
use crate::render::Encoder;

/// Starfield world
pub struct StarField {
    cfg: StarFieldConfig,

    // Immutable after construction, stride 3
    points: Vec<f32>,

    rotation: Rotation,

    // Output
    encoder: Encoder,
}

impl StarField {
    pub fn new<R: Rng>(cfg: StarFieldConfig, rng: &mut R) -> Result<Self> {
        cfg.validate()?;
        let points = fill_sphere(cfg.count, cfg.radius, rng);
        log::debug!("starfield: generated {} points, radius {}", cfg.count, cfg.radius);

        Ok(Self {
            rotation: Rotation::new(cfg.tilt),
            cfg,
            points,
            encoder: Encoder::new(0, 0),
        })
    }

    /// Advance the spin by `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        self.rotation.advance(delta, self.cfg.spin_x, self.cfg.spin_y);
    }

    /// Skip ahead `secs` seconds in one step, for offline capture.
    pub fn advance(&mut self, secs: f64) {
        self.rotation.advance_secs(secs, self.cfg.spin_x, self.cfg.spin_y);
    }

    /// Project the rotated cloud into the intensity buffer.
    pub fn render(&mut self, w: u32, h: u32) {
        if w != self.encoder.width() || h != self.encoder.height() {
            log::debug!("starfield: resize {}x{}", w, h);
            self.encoder.resize(w, h);
        }
        self.encoder.clear();
        self.encoder.encode_points(&self.points, &self.rotation, &self.cfg);
    }

    pub fn points(&self) -> &[f32] { &self.points }
    pub fn rotation(&self) -> Rotation { self.rotation }
    pub fn config(&self) -> &StarFieldConfig { &self.cfg }
    pub fn count(&self) -> usize { self.points.len() / 3 }
    pub fn output(&self) -> &[u8] { self.encoder.as_slice() }
}
