use image::RgbImage;
use tracing::warn;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::shapes::point::Point;

/// Channel layout of the source pixel buffer. Images decoded with the
/// `image` crate are `Rgb`; OpenCV-style frames arrive `Bgr` and must be
/// reordered on sampling so the emitted hex string is always RGB-ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

/// Reads the pixel at `pt` and encodes it as a canonical color value.
///
/// An out-of-bounds coordinate is a contract violation between the landmark
/// provider and the locator, not a recoverable state; it is logged and
/// surfaced as `CoordinateOutOfBounds`.
pub fn sample(img: &RgbImage, order: ChannelOrder, pt: Point) -> Result<Color> {
    if pt.x < 0 || pt.y < 0 || pt.x >= img.width() as i32 || pt.y >= img.height() as i32 {
        warn!(
            "sample coordinate ({}, {}) outside {}x{} image",
            pt.x,
            pt.y,
            img.width(),
            img.height()
        );
        return Err(Error::CoordinateOutOfBounds {
            x: pt.x,
            y: pt.y,
            width: img.width(),
            height: img.height(),
        });
    }

    let [c0, c1, c2] = img.get_pixel(pt.x as u32, pt.y as u32).0;

    Ok(match order {
        ChannelOrder::Rgb => Color::new(c0, c1, c2),
        ChannelOrder::Bgr => Color::new(c2, c1, c0),
    })
}
