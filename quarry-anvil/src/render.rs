use std::path::Path;
use std::sync::Mutex;

use log::{debug, warn};
use quarry_nbt::TagView;
use rayon::prelude::*;

use crate::load_chunk;

/// A colour with channels r, g, b, a.
pub type Rgba = [u8; 4];

pub(crate) const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// How much the darkened height-stripe colour keeps of each RGB channel.
const SHADE_DARKNESS_PERCENT: u32 = 95;

/// Maps a block id and metadata nibble to a colour. Absent means the block
/// has no known colour and is rendered as if it were not there. Immutable
/// after startup and shared freely between render workers.
pub trait Palette: Sync {
    fn pick(&self, id: u8, meta: u8) -> Option<Rgba>;
}

/// Receives rendered blocks. Implementations write a zoom-by-zoom rectangle
/// of pixels per block and clip writes that fall outside the image.
pub trait PixelSink {
    fn width_px(&self) -> u32;
    fn height_px(&self) -> u32;

    /// Write one block at image-relative block coordinates.
    fn put_block(&mut self, block_x: isize, block_z: isize, colour: Rgba);
}

/// The rectangle of blocks to render, in world block coordinates.
#[derive(Debug, Clone, Copy)]
pub struct MapBounds {
    pub center_x: isize,
    pub center_z: isize,
    pub width: isize,
    pub height: isize,
}

impl MapBounds {
    /// World x of the image's left edge.
    pub fn left(&self) -> isize {
        self.center_x - self.width / 2
    }

    /// World z of the image's top edge.
    pub fn top(&self) -> isize {
        self.center_z - self.height / 2
    }

    /// Every chunk touching the rectangle. Chunks on the rim may extend past
    /// the image; the sink clips them.
    fn chunks(&self) -> Vec<(isize, isize)> {
        let mut chunks = Vec::new();
        for cz in (self.top() >> 4)..=((self.top() + self.height) >> 4) {
            for cx in (self.left() >> 4)..=((self.left() + self.width) >> 4) {
                chunks.push((cx, cz));
            }
        }
        chunks
    }
}

/// The height-stripe variant of a colour: RGB scaled to 95%, alpha kept.
pub fn darken(colour: Rgba) -> Rgba {
    let scale = |c: u8| (c as u32 * SHADE_DARKNESS_PERCENT / 100) as u8;
    [
        scale(colour[0]),
        scale(colour[1]),
        scale(colour[2]),
        colour[3],
    ]
}

/// Merge the colour of a newly found block under the translucent colour
/// accumulated above it. What is already there occludes what is below.
/// Integer arithmetic, intermediate widening, channels clamped to 255.
fn compose_under(old: Rgba, new: Rgba) -> Rgba {
    let remaining = 0xff - old[3] as u32;
    let channel = |n: u8, o: u8| {
        let c = (n as u32 * remaining + o as u32 * old[3] as u32) / 0xff;
        c.min(0xff) as u8
    };
    let alpha = ((new[3] as u32 * remaining + old[3] as u32 * 0xff) / 0xff).min(0xff) as u8;
    [
        channel(new[0], old[0]),
        channel(new[1], old[1]),
        channel(new[2], old[2]),
        alpha,
    ]
}

/// Resolve the top-most visible colour of each of a chunk's 256 columns.
///
/// Walks the chunk's sections from the top of the world down, and the blocks
/// within each section from the top down, compositing translucent colours
/// until every column is opaque or the bottom is reached. Sections are taken
/// by their position in the `Sections` list. Blocks in even layers within a
/// section take the darkened colour, which is what draws the height stripes.
pub fn chunk_colours(level: TagView, palette: &dyn Palette) -> [Rgba; 256] {
    let mut colours = [TRANSPARENT; 256];
    let sections = match level.get("Sections") {
        Some(sections) => sections,
        None => return colours,
    };

    let mut opaque = 0;
    'sections: for section_id in (0..16).rev() {
        let section = match sections.item(section_id) {
            Some(section) => section,
            None => continue, // skip empty sections
        };
        let (ids, metas) = match (section.get("Blocks"), section.get("Data")) {
            (Some(ids), Some(metas)) => (ids, metas),
            _ => continue,
        };

        for b in (0..4096usize).rev() {
            let column = b % 256;
            let old = colours[column];
            if old[3] == 0xff {
                continue; // already opaque
            }

            let id = ids.item_as_int(b) as u8;
            if id == 0 {
                continue; // quick jump for air
            }
            let meta = ((metas.item_as_int(b / 2) as u8) >> ((b % 2) * 4)) & 0x0f;

            // unknown metadata falls back to the block's base colour
            let base = match palette.pick(id, meta).or_else(|| palette.pick(id, 0)) {
                Some(base) => base,
                None => continue,
            };

            let colour = if old == TRANSPARENT {
                if (b / 256) % 2 == 0 {
                    darken(base)
                } else {
                    base
                }
            } else {
                compose_under(old, base)
            };

            if colour[3] == 0xff {
                opaque += 1;
            }
            colours[column] = colour;
            if opaque >= 256 {
                break 'sections;
            }
        }
    }

    colours
}

/// Render the map described by `bounds` into the sink, one chunk per rayon
/// task. Chunks that fail to load or decode are logged and skipped; their
/// pixels stay transparent. Output does not depend on worker count or chunk
/// order since chunks cover disjoint pixels.
pub fn render_world_map<S>(
    world_root: &Path,
    bounds: MapBounds,
    palette: &dyn Palette,
    sink: &Mutex<S>,
) where
    S: PixelSink + Send,
{
    let left = bounds.left();
    let top = bounds.top();
    let chunks = bounds.chunks();
    debug!("rendering {} chunks", chunks.len());

    chunks.par_iter().for_each(|&(cx, cz)| {
        let chunk = match load_chunk(world_root, cx, cz) {
            Ok(Some(chunk)) => chunk,
            Ok(None) => return,
            Err(e) => {
                warn!("skipping chunk {},{}: {}", cx, cz, e);
                return;
            }
        };
        let level = match chunk.get("Level") {
            Some(level) => level,
            None => return,
        };

        let colours = chunk_colours(level, palette);

        let mut sink = sink.lock().unwrap();
        for (i, colour) in colours.iter().enumerate() {
            if *colour == TRANSPARENT {
                continue;
            }
            let block_x = cx * 16 + (i % 16) as isize - left;
            let block_z = cz * 16 + (i / 16) as isize - top;
            sink.put_block(block_x, block_z, *colour);
        }
    });
}
