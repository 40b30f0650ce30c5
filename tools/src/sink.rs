use image::RgbaImage;
use quarry_anvil::{PixelSink, Rgba};

/// Pixel sink over an RGBA image buffer. Every block becomes a zoom-by-zoom
/// square of pixels; the buffer starts fully transparent.
pub struct ImageSink {
    image: RgbaImage,
    zoom: u32,
}

impl ImageSink {
    /// `width` and `height` are in blocks; the image is `zoom` times larger
    /// along each axis.
    pub fn new(width: u32, height: u32, zoom: u32) -> Self {
        Self {
            image: RgbaImage::new(width * zoom, height * zoom),
            zoom,
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl PixelSink for ImageSink {
    fn width_px(&self) -> u32 {
        self.image.width()
    }

    fn height_px(&self) -> u32 {
        self.image.height()
    }

    fn put_block(&mut self, block_x: isize, block_z: isize, colour: Rgba) {
        let left = block_x * self.zoom as isize;
        let top = block_z * self.zoom as isize;
        for dz in 0..self.zoom as isize {
            for dx in 0..self.zoom as isize {
                let (x, y) = (left + dx, top + dz);
                if x < 0
                    || y < 0
                    || x >= self.image.width() as isize
                    || y >= self.image.height() as isize
                {
                    continue; // chunks on the rim overhang the image
                }
                self.image.put_pixel(x as u32, y as u32, image::Rgba(colour));
            }
        }
    }
}
