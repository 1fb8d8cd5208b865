// measure.rs - Normalize raw scroll offsets to [0, 1]

/// Raw viewport measurements, straight from the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self { scroll_top, scroll_height, client_height }
    }
}

/// Fraction of the page scrolled, or `None` when the measurement is unusable.
///
/// A page with nothing to scroll reports 1.0. Overscroll is clamped.
pub fn progress(m: ScrollMetrics) -> Option<f64> {
    if !(m.scroll_top.is_finite() && m.scroll_height.is_finite() && m.client_height.is_finite()) {
        return None;
    }

    let scrollable = m.scroll_height - m.client_height;
    if scrollable <= 0.0 {
        return Some(1.0);
    }

    Some((m.scroll_top / scrollable).clamp(0.0, 1.0))
}
