use image::{
    imageops,
    DynamicImage,
    RgbaImage,
};

use crate::layout::Layout;

/// Paste both eyes onto a fresh canvas. Pixels are replaced, not blended, and
/// whatever neither image covers stays transparent black.
pub fn compose(layout: &Layout, first: &DynamicImage, second: &DynamicImage) -> RgbaImage{
    let mut canvas = RgbaImage::new(layout.width, layout.height);
    imageops::replace(&mut canvas, &first.to_rgba8(), 0, 0);
    let (x, y) = layout.second_at;
    imageops::replace(&mut canvas, &second.to_rgba8(), x as i64, y as i64);
    canvas
}
