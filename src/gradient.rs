//! Color ramps used by the icon.
//!
//! Channel values are interpolated in floating point and truncated toward
//! zero, so a ramp never overshoots its anchors.

use image::Rgba;

/// Deep purple, deep blue, deep pink: top, middle and bottom of the background.
const BACKGROUND_ANCHORS: [[u8; 3]; 3] = [[120, 80, 200], [80, 120, 220], [200, 80, 160]];

/// Lavender, cyan-blue, magenta, pink: the stops of the ring's angular sweep.
const RING_ANCHORS: [[u8; 3]; 4] = [
    [180, 100, 255],
    [100, 200, 255],
    [255, 100, 180],
    [255, 100, 255],
];

const RING_BANDS: [f64; 2] = [0.33, 0.66];

const TEXT_LINE_FROM: [u8; 3] = [180, 160, 255];
const TEXT_LINE_TO: [u8; 3] = [120, 200, 255];

pub const TEXT_LINE_COUNT: usize = 4;
const TEXT_LINE_ALPHA: u8 = 200;
const RING_ALPHA: u8 = 180;

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = from as f64 + (to as f64 - from as f64) * t;
    value.clamp(0.0, 255.0) as u8
}

fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    [
        lerp_channel(from[0], to[0], t),
        lerp_channel(from[1], to[1], t),
        lerp_channel(from[2], to[2], t),
    ]
}

/// Opaque background color for a vertical position `ratio` in `[0, 1)`.
pub fn background_color(ratio: f64) -> Rgba<u8> {
    let [top, middle, bottom] = BACKGROUND_ANCHORS;
    let [r, g, b] = if ratio < 0.5 {
        lerp_rgb(top, middle, ratio * 2.0)
    } else {
        lerp_rgb(middle, bottom, (ratio - 0.5) * 2.0)
    };
    Rgba([r, g, b, 255])
}

/// Fill color of the `index`-th text line, lavender fading toward blue.
pub fn text_line_color(index: usize) -> Rgba<u8> {
    let ratio = index as f64 / TEXT_LINE_COUNT as f64;
    let [r, g, b] = lerp_rgb(TEXT_LINE_FROM, TEXT_LINE_TO, ratio);
    Rgba([r, g, b, TEXT_LINE_ALPHA])
}

/// Ring color at `angle_degrees` around the circle, measured from +x toward +y.
pub fn ring_color(angle_degrees: u32) -> Rgba<u8> {
    let ratio = angle_degrees as f64 / 360.0;
    let [r, g, b] = if ratio < RING_BANDS[0] {
        lerp_rgb(RING_ANCHORS[0], RING_ANCHORS[1], ratio * 3.0)
    } else if ratio < RING_BANDS[1] {
        lerp_rgb(RING_ANCHORS[1], RING_ANCHORS[2], (ratio - RING_BANDS[0]) * 3.0)
    } else {
        lerp_rgb(RING_ANCHORS[2], RING_ANCHORS[3], (ratio - RING_BANDS[1]) * 3.0)
    };
    Rgba([r, g, b, RING_ALPHA])
}
