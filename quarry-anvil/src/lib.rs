//! Reading worlds stored in Minecraft's region format.
//!
//! [`Region`] can be given any `Read + Seek` stream, eg a region file, in
//! order to extract compressed chunk data. [`load_chunk`] maps world chunk
//! coordinates to the right region file and slot and decodes the chunk's
//! NBT. [`render_world_map`] draws a top-down map of a block rectangle into
//! a caller-provided pixel sink, and [`MapItem`] decodes the in-game map
//! items stored under `data/`.

mod loader;
mod mapitem;
mod region;
mod render;

pub use loader::*;
pub use mapitem::*;
pub use region::*;
pub use render::*;

#[cfg(test)]
mod test;

#[derive(Debug)]
pub enum Error {
    /// Opening, seeking or reading the underlying stream failed.
    Io(std::io::Error),
    /// The compressed chunk payload would not inflate.
    CorruptStream(std::io::Error),
    /// Chunk coordinates outside the 32x32 region grid.
    InvalidOffset(isize, isize),
    /// Not enough bytes to parse chunk metadata.
    InsufficientData,
    /// The chunk header's compression scheme byte was neither gzip (1) nor
    /// zlib (2).
    UnknownCompressionScheme(u8),
    /// The chunk's NBT payload did not decode.
    Nbt(quarry_nbt::error::Error),
    /// A map item file did not have the expected shape.
    InvalidMapItem(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::CorruptStream(e) => write!(f, "corrupt compressed chunk: {}", e),
            Error::InvalidOffset(x, z) => write!(f, "invalid offset: x = {}, z = {}", x, z),
            Error::InsufficientData => f.write_str("insufficient data to parse chunk metadata"),
            Error::UnknownCompressionScheme(scheme) => {
                write!(f, "unknown compression scheme: {}", scheme)
            }
            Error::Nbt(e) => write!(f, "invalid chunk nbt: {}", e),
            Error::InvalidMapItem(msg) => write!(f, "invalid map item: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<quarry_nbt::error::Error> for Error {
    fn from(e: quarry_nbt::error::Error) -> Error {
        Error::Nbt(e)
    }
}
