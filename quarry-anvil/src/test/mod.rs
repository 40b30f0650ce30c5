mod render;

use std::io::{Cursor, Write};
use std::path::PathBuf;

use crate::{Palette, PixelSink, Rgba, CHUNK_HEADER_SIZE, REGION_HEADER_SIZE, SECTOR_SIZE};

/// Builds region file images in memory. Like the NBT builder, this makes no
/// attempt to keep the result valid; broken regions are useful for testing.
pub(crate) struct RegionBuilder {
    data: Vec<u8>,
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self {
            data: vec![0; REGION_HEADER_SIZE],
        }
    }

    /// Append a chunk at the next free sector and point the location table
    /// entry for x, z at it.
    pub fn chunk(mut self, x: usize, z: usize, scheme: u8, compressed: &[u8]) -> Self {
        let sector = self.next_sector();
        let sectors = (CHUNK_HEADER_SIZE + compressed.len() + SECTOR_SIZE - 1) / SECTOR_SIZE;
        self.set_location(x, z, sector as u32, sectors as u8);
        self.data
            .extend_from_slice(&((compressed.len() + 1) as u32).to_be_bytes());
        self.data.push(scheme);
        self.data.extend_from_slice(compressed);
        self.pad();
        self
    }

    /// A slot whose location entry is set but whose payload length is zero.
    pub fn empty_chunk(mut self, x: usize, z: usize) -> Self {
        let sector = self.next_sector();
        self.set_location(x, z, sector as u32, 1);
        self.data.extend_from_slice(&[0; CHUNK_HEADER_SIZE]);
        self.pad();
        self
    }

    /// Set a location entry without writing any chunk data.
    pub fn dangling_location(mut self, x: usize, z: usize, sector: u32, sectors: u8) -> Self {
        self.set_location(x, z, sector, sectors);
        self
    }

    fn set_location(&mut self, x: usize, z: usize, sector: u32, sectors: u8) {
        let entry = (sector << 8) | sectors as u32;
        let pos = 4 * (x + z * 32);
        self.data[pos..pos + 4].copy_from_slice(&entry.to_be_bytes());
    }

    fn next_sector(&self) -> usize {
        self.data.len() / SECTOR_SIZE
    }

    fn pad(&mut self) {
        let sectors = (self.data.len() + SECTOR_SIZE - 1) / SECTOR_SIZE;
        self.data.resize(sectors * SECTOR_SIZE, 0);
    }

    pub fn build(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.data)
    }

    pub fn bytes(self) -> Vec<u8> {
        self.data
    }
}

pub(crate) fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub(crate) fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Sink recording one pixel per block, no zoom. Out-of-range writes are
/// dropped, as the contract requires.
pub(crate) struct TestSink {
    width: u32,
    height: u32,
    pub pixels: Vec<Rgba>,
    pub writes: usize,
}

impl TestSink {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; (width * height) as usize],
            writes: 0,
        }
    }

    pub fn pixel(&self, x: u32, z: u32) -> Rgba {
        self.pixels[(x + z * self.width) as usize]
    }
}

impl PixelSink for TestSink {
    fn width_px(&self) -> u32 {
        self.width
    }

    fn height_px(&self) -> u32 {
        self.height
    }

    fn put_block(&mut self, block_x: isize, block_z: isize, colour: Rgba) {
        if block_x < 0 || block_z < 0 || block_x >= self.width as isize || block_z >= self.height as isize
        {
            return;
        }
        self.pixels[(block_x + block_z * self.width as isize) as usize] = colour;
        self.writes += 1;
    }
}

pub(crate) const STONE: Rgba = [110, 110, 110, 255];
pub(crate) const GLASS: Rgba = [200, 220, 255, 100];

pub(crate) struct TestPalette;

impl Palette for TestPalette {
    fn pick(&self, id: u8, meta: u8) -> Option<Rgba> {
        match (id, meta) {
            (1, 0) => Some(STONE),
            (20, 0) => Some(GLASS),
            _ => None,
        }
    }
}

/// Serialize a chunk document: a nameless root compound holding a `Level`
/// compound with a `Sections` list. `sections[i]` supplies the Blocks and
/// Data arrays of the section at list index i; `None` emits an empty
/// section compound.
pub(crate) fn chunk_doc(sections: &[Option<(Vec<i8>, Vec<i8>)>]) -> Vec<u8> {
    fn put_name(out: &mut Vec<u8>, name: &str) {
        out.extend_from_slice(&(name.len() as u16).to_be_bytes());
        out.extend_from_slice(name.as_bytes());
    }
    fn put_byte_array(out: &mut Vec<u8>, name: &str, bytes: &[i8]) {
        out.push(7);
        put_name(out, name);
        out.extend_from_slice(&(bytes.len() as i32).to_be_bytes());
        out.extend(bytes.iter().map(|b| *b as u8));
    }

    let mut doc = Vec::new();
    doc.push(10);
    put_name(&mut doc, "");
    doc.push(10);
    put_name(&mut doc, "Level");
    doc.push(9);
    put_name(&mut doc, "Sections");
    doc.push(10); // element id: compound
    doc.extend_from_slice(&(sections.len() as i32).to_be_bytes());
    for section in sections {
        if let Some((blocks, data)) = section {
            put_byte_array(&mut doc, "Blocks", blocks);
            put_byte_array(&mut doc, "Data", data);
        }
        doc.push(0); // end of this section
    }
    doc.push(0); // end Level
    doc.push(0); // end root
    doc
}

/// Sections holding exactly one block, at the given section list index and
/// section-local coordinates.
pub(crate) fn single_block_sections(
    section: usize,
    y: usize,
    z: usize,
    x: usize,
    id: u8,
    meta: u8,
) -> Vec<Option<(Vec<i8>, Vec<i8>)>> {
    let mut blocks = vec![0i8; 4096];
    let mut data = vec![0i8; 2048];
    let b = y * 256 + z * 16 + x;
    blocks[b] = id as i8;
    data[b / 2] = (if b % 2 == 0 { meta } else { meta << 4 }) as i8;

    let mut sections: Vec<Option<(Vec<i8>, Vec<i8>)>> = vec![None; section];
    sections.push(Some((blocks, data)));
    sections
}

/// A throwaway world directory under the system temp dir, removed on drop.
pub(crate) struct TempWorld {
    pub root: PathBuf,
}

impl TempWorld {
    pub fn new(name: &str) -> Self {
        let root =
            std::env::temp_dir().join(format!("quarry-anvil-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(root.join("region")).unwrap();
        std::fs::create_dir_all(root.join("data")).unwrap();
        Self { root }
    }

    pub fn write_region(&self, rx: isize, rz: isize, bytes: Vec<u8>) {
        let path = self.root.join("region").join(format!("r.{}.{}.mca", rx, rz));
        std::fs::write(path, bytes).unwrap();
    }
}

impl Drop for TempWorld {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.root).ok();
    }
}
