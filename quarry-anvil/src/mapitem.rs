use std::path::Path;

use crate::{Error, PixelSink, Result, Rgba};

/// The 36 base colours of the in-game map palette: the original eight plus
/// the colours added in 1.7.
pub const MAP_BASE_COLOURS: [[u8; 3]; 36] = [
    [0, 0, 0],
    [127, 178, 56],
    [247, 233, 163],
    [167, 167, 167],
    [255, 0, 0],
    [160, 160, 255],
    [167, 167, 167],
    [0, 124, 0],
    [255, 255, 255],
    [164, 168, 184],
    [183, 106, 47],
    [112, 112, 112],
    [64, 64, 255],
    [104, 83, 50],
    [255, 252, 245],
    [216, 127, 51],
    [178, 76, 216],
    [102, 153, 216],
    [229, 229, 51],
    [127, 204, 25],
    [242, 127, 165],
    [76, 76, 76],
    [153, 153, 153],
    [76, 127, 153],
    [127, 63, 178],
    [51, 76, 178],
    [102, 76, 51],
    [102, 127, 51],
    [153, 51, 51],
    [25, 25, 25],
    [250, 238, 77],
    [92, 219, 213],
    [74, 128, 255],
    [0, 217, 58],
    [21, 20, 31],
    [112, 2, 0],
];

/// Per-shade brightness, over 255. Colour id `4b + s` is base colour `b` at
/// shade `s`.
const MAP_SHADE_MULTIPLIERS: [u32; 4] = [180, 220, 255, 135];

/// The full 144-entry map colour table: every base colour in all four
/// shades, fully opaque.
pub fn map_shade_colours() -> [Rgba; 144] {
    let mut colours = [[0u8; 4]; 144];
    for (base_id, base) in MAP_BASE_COLOURS.iter().enumerate() {
        for (shade, multiplier) in MAP_SHADE_MULTIPLIERS.iter().enumerate() {
            let scale = |c: u8| (c as u32 * multiplier / 255) as u8;
            colours[base_id * 4 + shade] = [scale(base[0]), scale(base[1]), scale(base[2]), 0xff];
        }
    }
    colours
}

/// A decoded in-game map item: the `data` compound of a `data/map_<n>.dat`
/// document.
#[derive(Debug)]
pub struct MapItem {
    pub width: i64,
    pub height: i64,
    pub scale: i64,
    pub dimension: i64,
    pub x_center: i64,
    pub z_center: i64,
    colour_ids: Vec<u8>,
}

impl MapItem {
    /// Read and decode map number `number` from the world's `data`
    /// directory.
    pub fn read(world_root: &Path, number: u32) -> Result<MapItem> {
        let path = world_root.join("data").join(format!("map_{}.dat", number));
        let root = quarry_nbt::from_file(path)?;
        Self::from_tag(&root)
    }

    pub fn from_tag(root: &quarry_nbt::Tag) -> Result<MapItem> {
        let data = root
            .get("data")
            .ok_or_else(|| Error::InvalidMapItem("missing data compound".to_owned()))?;

        let width = data.get("width").map_or(0, |v| v.as_int());
        let height = data.get("height").map_or(0, |v| v.as_int());
        let colours = data
            .get("colors")
            .ok_or_else(|| Error::InvalidMapItem("missing colors".to_owned()))?;

        if width <= 0 || height <= 0 || colours.size() as i64 != width * height {
            return Err(Error::InvalidMapItem(format!(
                "{} colours for a {}x{} map",
                colours.size(),
                width,
                height
            )));
        }

        let colour_ids = (0..colours.size())
            .map(|i| colours.item_as_int(i) as u8)
            .collect();

        Ok(MapItem {
            width,
            height,
            scale: data.get("scale").map_or(0, |v| v.as_int()),
            dimension: data.get("dimension").map_or(0, |v| v.as_int()),
            x_center: data.get("xCenter").map_or(0, |v| v.as_int()),
            z_center: data.get("zCenter").map_or(0, |v| v.as_int()),
            colour_ids,
        })
    }

    /// The colour id of the map pixel at x, y.
    pub fn colour_id(&self, x: i64, y: i64) -> u8 {
        self.colour_ids[(x + y * self.width) as usize]
    }

    /// Draw the map into a sink, one block per map pixel. Colour ids below 4
    /// (the unexplored shades of base colour 0) are transparent and left
    /// unwritten, as are ids beyond the palette.
    pub fn render(&self, sink: &mut dyn PixelSink) {
        let shades = map_shade_colours();
        for y in 0..self.height {
            for x in 0..self.width {
                let id = self.colour_id(x, y) as usize;
                if id < 4 {
                    continue; // transparent
                }
                let colour = match shades.get(id) {
                    Some(colour) => *colour,
                    None => continue,
                };
                sink.put_block(x as isize, y as isize, colour);
            }
        }
    }
}
