//! Hue-range object detection
//!
//! Pure per-frame computation: find the tight bounding box of pixels whose
//! HSV value falls inside a named hue range. Camera capture and frame
//! pacing belong to the caller; this module only ever reads one buffer.
//!
//! Hue bounds are in degrees [0, 360); saturation and value bounds are unit
//! range. Red needs two segments because its hue interval wraps around zero.

use image::RgbImage;
use palette::{FromColor, Hsv, Srgb};

/// One HSV acceptance window; upper saturation/value bounds are always 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSegment {
    pub hue_min: f32,
    pub hue_max: f32,
    pub sat_min: f32,
    pub val_min: f32,
}

impl HueSegment {
    fn contains(&self, hue: f32, saturation: f32, value: f32) -> bool {
        hue >= self.hue_min
            && hue < self.hue_max
            && saturation >= self.sat_min
            && value >= self.val_min
    }
}

/// Named hue ranges for simple colored-object detection
///
/// One entry per detectable color; `segments` usually holds a single
/// window, two for red.
pub const HUE_TARGETS: &[(&str, &[HueSegment])] = &[
    ("yellow", &[seg(40.0, 60.0, 0.392, 0.392)]),
    ("blue", &[seg(200.0, 280.0, 0.588, 0.0)]),
    ("green", &[seg(80.0, 160.0, 0.275, 0.275)]),
    ("red", &[seg(0.0, 20.0, 0.588, 0.588), seg(340.0, 360.0, 0.588, 0.588)]),
    ("purple", &[seg(260.0, 320.0, 0.392, 0.392)]),
    ("orange", &[seg(20.0, 40.0, 0.588, 0.588)]),
    ("pink", &[seg(320.0, 340.0, 0.392, 0.392)]),
    ("cyan", &[seg(160.0, 200.0, 0.588, 0.588)]),
    ("magenta", &[seg(280.0, 340.0, 0.588, 0.588)]),
];

const fn seg(hue_min: f32, hue_max: f32, sat_min: f32, val_min: f32) -> HueSegment {
    HueSegment {
        hue_min,
        hue_max,
        sat_min,
        val_min,
    }
}

/// Look up the acceptance windows for a named color
///
/// Returns `None` for names outside the table, mirroring the permissive
/// lookup the detection loop expects.
pub fn hue_segments(name: &str) -> Option<&'static [HueSegment]> {
    HUE_TARGETS
        .iter()
        .find(|(target, _)| *target == name)
        .map(|(_, segments)| *segments)
}

/// Tight bounding box of matching pixels
///
/// `x_min`/`y_min` are inclusive, `x_max`/`y_max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

/// Find the bounding box of pixels falling inside any of the segments
///
/// Returns `None` when no pixel matches.
pub fn bounding_box(image: &RgbImage, segments: &[HueSegment]) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        let srgb = Srgb::new(
            f32::from(pixel.0[0]) / 255.0,
            f32::from(pixel.0[1]) / 255.0,
            f32::from(pixel.0[2]) / 255.0,
        );
        let hsv = Hsv::from_color(srgb);
        let hue = hsv.hue.into_positive_degrees();

        if segments
            .iter()
            .any(|s| s.contains(hue, hsv.saturation, hsv.value))
        {
            bbox = Some(match bbox {
                None => BoundingBox {
                    x_min: x,
                    y_min: y,
                    x_max: x + 1,
                    y_max: y + 1,
                },
                Some(b) => BoundingBox {
                    x_min: b.x_min.min(x),
                    y_min: b.y_min.min(y),
                    x_max: b.x_max.max(x + 1),
                    y_max: b.y_max.max(y + 1),
                },
            });
        }
    }

    bbox
}
