use wasm_bindgen::prelude::*;

// ============================================================================
// PORTFOLIO ENGINE - Starfield backdrop and scroll progress for the site
// ============================================================================
//
// The host page calls into these types from its requestAnimationFrame loop.
// Everything here is single-threaded and allocation-free per frame.

pub mod config;
pub mod error;
pub mod field;
pub mod motion;
pub mod render;
pub mod scroll;

pub use config::{EngineConfig, MarqueeConfig, SpringConfig, StarFieldConfig};
pub use error::{EngineError, Result};
pub use field::StarField;
pub use scroll::{ScrollMetrics, ScrollTracker, Spring};

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Install console logging and the panic hook once the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    // Fails only if a logger is already installed, which is fine.
    let _ = console_log::init_with_level(level);
}

/// Seed for the decorative RNG. Not reproducible, and not meant to be.
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        (hi << 32) | lo
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0xDEADBEEF)
    }
}

// ----------------------------------------------------------------------------
// Starfield
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = StarField)]
pub struct Backdrop {
    inner: StarField,
}

#[wasm_bindgen(js_class = StarField)]
impl Backdrop {
    // No Default: construction validates config and draws entropy.
    #[wasm_bindgen(constructor)]
    pub fn new() -> std::result::Result<Backdrop, JsError> {
        Self::build(StarFieldConfig::default())
    }

    /// Construct from a JSON `StarFieldConfig`; missing fields use defaults.
    pub fn from_json(json: &str) -> std::result::Result<Backdrop, JsError> {
        Self::build(StarFieldConfig::from_json(json)?)
    }

    /// Construct from the `starfield` section of a whole-page `EngineConfig`.
    pub fn from_engine_json(json: &str) -> std::result::Result<Backdrop, JsError> {
        Self::build(EngineConfig::from_json(json)?.starfield)
    }

    pub fn tick(&mut self, delta: f32) {
        self.inner.tick(delta);
    }

    pub fn render(&mut self, w: u32, h: u32) {
        self.inner.render(w, h);
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const u8 { self.inner.output().as_ptr() }
    pub fn output_len(&self) -> usize { self.inner.output().len() }
    pub fn positions_ptr(&self) -> *const f32 { self.inner.points().as_ptr() }
    pub fn positions_len(&self) -> usize { self.inner.points().len() }
    pub fn count(&self) -> usize { self.inner.count() }
    pub fn radius(&self) -> f32 { self.inner.config().radius }
    pub fn rotation_x(&self) -> f32 { self.inner.rotation().x }
    pub fn rotation_y(&self) -> f32 { self.inner.rotation().y }
    pub fn rotation_z(&self) -> f32 { self.inner.rotation().z }
}

impl Backdrop {
    fn build(cfg: StarFieldConfig) -> std::result::Result<Backdrop, JsError> {
        let mut rng = SmallRng::seed_from_u64(entropy_seed());
        Ok(Self { inner: StarField::new(cfg, &mut rng)? })
    }
}

// ----------------------------------------------------------------------------
// Scroll progress bar
// ----------------------------------------------------------------------------

#[wasm_bindgen]
pub struct ScrollBar {
    inner: ScrollTracker,
}

#[wasm_bindgen]
impl ScrollBar {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScrollBar {
        Self { inner: ScrollTracker::new(SpringConfig::default()) }
    }

    /// Construct from a JSON `SpringConfig`; missing fields use defaults.
    pub fn from_json(json: &str) -> std::result::Result<ScrollBar, JsError> {
        Ok(Self { inner: ScrollTracker::new(SpringConfig::from_json(json)?) })
    }

    /// Construct from the `scroll` section of a whole-page `EngineConfig`.
    pub fn from_engine_json(json: &str) -> std::result::Result<ScrollBar, JsError> {
        Ok(Self { inner: ScrollTracker::new(EngineConfig::from_json(json)?.scroll) })
    }

    /// One frame: raw DOM metrics plus seconds since the previous frame.
    pub fn update(&mut self, scroll_top: f64, scroll_height: f64, client_height: f64, dt: f64) -> f64 {
        self.inner.update(ScrollMetrics::new(scroll_top, scroll_height, client_height), dt)
    }

    pub fn jump_to(&mut self, scroll_top: f64, scroll_height: f64, client_height: f64) {
        self.inner.jump_to(ScrollMetrics::new(scroll_top, scroll_height, client_height));
    }

    pub fn scale_x(&self) -> f64 { self.inner.scale_x() }
    pub fn is_settled(&self) -> bool { self.inner.is_settled() }
}

impl Default for ScrollBar {
    fn default() -> Self { Self::new() }
}

// ----------------------------------------------------------------------------
// Motion helpers
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = Marquee)]
pub struct MarqueeStrip {
    inner: motion::Marquee,
}

#[wasm_bindgen(js_class = Marquee)]
impl MarqueeStrip {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MarqueeStrip {
        Self { inner: motion::Marquee::default() }
    }

    /// Construct from a JSON `MarqueeConfig`; missing fields use defaults.
    pub fn from_json(json: &str) -> std::result::Result<MarqueeStrip, JsError> {
        Ok(Self { inner: motion::Marquee::new(MarqueeConfig::from_json(json)?) })
    }

    /// Construct from the `marquee` section of a whole-page `EngineConfig`.
    pub fn from_engine_json(json: &str) -> std::result::Result<MarqueeStrip, JsError> {
        Ok(Self { inner: motion::Marquee::new(EngineConfig::from_json(json)?.marquee) })
    }

    /// Track translation as a fraction of its width, in (-1, 0].
    pub fn offset(&self, elapsed_secs: f64) -> f64 { self.inner.offset(elapsed_secs) }
    pub fn duration_secs(&self) -> f64 { self.inner.duration_secs() }
}

impl Default for MarqueeStrip {
    fn default() -> Self { Self::new() }
}

/// `[dx, dy]` of the pointer from the card centre.
#[wasm_bindgen]
pub fn card_pointer_offset(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Vec<f64> {
    let (dx, dy) = motion::card_offset(client_x, client_y, motion::Rect::new(left, top, width, height));
    vec![dx, dy]
}
