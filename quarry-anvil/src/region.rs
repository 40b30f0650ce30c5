use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt};
use num_enum::TryFromPrimitive;

use crate::{Error, Result};

/// Region files are allocated in sectors of this many bytes. A chunk
/// occupies a whole number of sectors; its exact compressed size is in the
/// chunk's own header.
pub(crate) const SECTOR_SIZE: usize = 4096;

/// The region header: the location table plus the modification timestamp
/// table, one sector each.
pub(crate) const REGION_HEADER_SIZE: usize = 2 * SECTOR_SIZE;

/// The header preceding each chunk's compressed data.
pub(crate) const CHUNK_HEADER_SIZE: usize = 5;

/// A region: a 32x32 block of chunks, each stored compressed at a location
/// given by the header's sector table. Reads lazily from the underlying
/// stream; nothing is cached.
pub struct Region<S> {
    stream: S,
}

impl<S> Region<S>
where
    S: Read + Seek,
{
    /// Wrap an existing stream. A seek to 0 is assumed to be the start of
    /// the region.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Return the inner stream.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Read the chunk at region-local coordinates x, z, both 0..32. Returns
    /// the uncompressed NBT bytes, or `None` for a slot with no chunk (a
    /// zeroed location entry or a zero-length payload).
    pub fn read_chunk(&mut self, x: usize, z: usize) -> Result<Option<Vec<u8>>> {
        let loc = match self.location(x, z)? {
            Some(loc) => loc,
            None => return Ok(None),
        };

        self.stream
            .seek(SeekFrom::Start(loc.offset * SECTOR_SIZE as u64))?;

        let mut header = [0u8; CHUNK_HEADER_SIZE];
        self.stream.read_exact(&mut header)?;
        let meta = match ChunkMeta::new(&header)? {
            Some(meta) => meta,
            None => return Ok(None),
        };

        let mut compressed = vec![0u8; meta.compressed_len as usize];
        self.stream.read_exact(&mut compressed)?;

        let data = match meta.compression_scheme {
            CompressionScheme::Zlib => {
                let mut decoder = flate2::write::ZlibDecoder::new(vec![]);
                decoder
                    .write_all(&compressed)
                    .and_then(|_| decoder.finish())
                    .map_err(Error::CorruptStream)?
            }
            CompressionScheme::Gzip => {
                let mut decoder = flate2::write::GzDecoder::new(vec![]);
                decoder
                    .write_all(&compressed)
                    .and_then(|_| decoder.finish())
                    .map_err(Error::CorruptStream)?
            }
        };

        Ok(Some(data))
    }

    /// Read the location table entry for the chunk at x, z. `None` means the
    /// slot holds no chunk.
    pub fn location(&mut self, x: usize, z: usize) -> Result<Option<ChunkLocation>> {
        if x >= 32 || z >= 32 {
            return Err(Error::InvalidOffset(x as isize, z as isize));
        }

        self.stream.seek(SeekFrom::Start(header_pos(x, z)))?;

        let mut buf = [0u8; 4];
        self.stream.read_exact(&mut buf[..])?;

        let mut offset = 0u64;
        offset |= (buf[0] as u64) << 16;
        offset |= (buf[1] as u64) << 8;
        offset |= buf[2] as u64;
        let sectors = buf[3] as u64;

        if offset == 0 {
            Ok(None)
        } else {
            Ok(Some(ChunkLocation { offset, sectors }))
        }
    }
}

fn header_pos(x: usize, z: usize) -> u64 {
    (4 * (x + z * 32)) as u64
}

/// Compression schemes chunk data is stored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum CompressionScheme {
    Gzip = 1,
    Zlib = 2,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ChunkLocation {
    /// The offset, in units of 4 KiB sectors, of the chunk within the
    /// region. Sector 0 is the start of the file.
    pub offset: u64,

    /// The number of sectors the chunk occupies.
    pub sectors: u64,
}

/// The 5-byte header before a chunk's compressed data.
#[derive(Debug)]
struct ChunkMeta {
    pub compressed_len: u32,
    pub compression_scheme: CompressionScheme,
}

impl ChunkMeta {
    /// `None` means a zero-length payload: the slot is allocated but holds
    /// no chunk.
    fn new(data: &[u8]) -> Result<Option<Self>> {
        if data.len() < CHUNK_HEADER_SIZE {
            return Err(Error::InsufficientData);
        }

        let mut buf = &data[..CHUNK_HEADER_SIZE];
        let len = buf.read_u32::<BigEndian>()?;
        if len == 0 {
            return Ok(None);
        }

        let scheme = buf.read_u8()?;
        let scheme = CompressionScheme::try_from(scheme)
            .map_err(|_| Error::UnknownCompressionScheme(scheme))?;

        Ok(Some(Self {
            compressed_len: len - 1, // the stored length counts the scheme byte
            compression_scheme: scheme,
        }))
    }
}
