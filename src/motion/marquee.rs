// marquee.rs - Endless linear strip
//
// The track is translated from 0 to -100% of its width over one period,
// then starts again. Copies of the strip laid side by side hide the seam.

use crate::config::MarqueeConfig;

/// A skill strip looping over a fixed period.
#[derive(Clone, Copy, Debug, Default)]
pub struct Marquee {
    cfg: MarqueeConfig,
}

impl Marquee {
    pub fn new(cfg: MarqueeConfig) -> Self {
        Self { cfg }
    }

    pub fn duration_secs(&self) -> f64 { self.cfg.duration_secs }

    pub fn offset(&self, elapsed_secs: f64) -> f64 {
        offset(elapsed_secs, self.cfg.duration_secs)
    }
}

/// Translation of the track as a fraction of its width, in (-1, 0].
pub fn offset(elapsed_secs: f64, duration_secs: f64) -> f64 {
    if !elapsed_secs.is_finite() || !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0.0;
    }
    let phase = elapsed_secs.rem_euclid(duration_secs) / duration_secs;
    // rem_euclid can round up to the full period; -0.0 reads oddly on the host
    if phase == 0.0 || phase >= 1.0 { 0.0 } else { -phase }
}
