// pointer.rs - Pointer position relative to a card
//
// Project cards light up around the pointer. The host reads the card's
// bounding rect on pointer move and passes it with the client coordinates.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Offset of the pointer from the card's centre, in CSS pixels.
pub fn card_offset(client_x: f64, client_y: f64, rect: Rect) -> (f64, f64) {
    (
        client_x - rect.left - rect.width / 2.0,
        client_y - rect.top - rect.height / 2.0,
    )
}
