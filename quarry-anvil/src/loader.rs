use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use quarry_nbt::Tag;

use crate::{Region, Result};

/// The region a chunk falls in. Arithmetic shifts, so negative chunk
/// coordinates land in negatively numbered regions.
pub fn region_coords(cx: isize, cz: isize) -> (isize, isize) {
    (cx >> 5, cz >> 5)
}

/// The chunk's slot coordinates within its region, both 0..32.
pub fn slot_coords(cx: isize, cz: isize) -> (usize, usize) {
    (cx.rem_euclid(32) as usize, cz.rem_euclid(32) as usize)
}

/// Path of the region file holding the given region.
pub fn region_path(world_root: &Path, rx: isize, rz: isize) -> PathBuf {
    world_root
        .join("region")
        .join(format!("r.{}.{}.mca", rx, rz))
}

/// Load and decode the chunk at world chunk coordinates cx, cz. A missing
/// region file or an empty slot is `Ok(None)`; errors are real failures
/// reading or decoding a chunk that should be there.
pub fn load_chunk(world_root: &Path, cx: isize, cz: isize) -> Result<Option<Tag>> {
    let (rx, rz) = region_coords(cx, cz);
    let file = match File::open(region_path(world_root, rx, rz)) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut region = Region::new(file);
    let (x, z) = slot_coords(cx, cz);
    let data = match region.read_chunk(x, z)? {
        Some(data) => data,
        None => return Ok(None),
    };

    Ok(Some(quarry_nbt::from_bytes(&data)?))
}
