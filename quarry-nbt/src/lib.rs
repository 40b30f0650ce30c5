//! quarry-nbt reads NBT data from *Minecraft: Java Edition*. This format is
//! used by the game to store world data, player inventories and map items.
//!
//! * [`from_bytes`] decodes uncompressed NBT into a [`Tag`] tree.
//! * [`from_file`] additionally detects and inflates gzip-compressed files.
//! * [`Tag::get`] navigates a decoded tree by dotted path, eg
//!   `"Level.Sections.0.Blocks"`.
//!
//! # Quick example
//!
//! Print the spawn point stored in a world's `level.dat`:
//!
//! ```no_run
//! fn main() -> quarry_nbt::error::Result<()> {
//!     let root = quarry_nbt::from_file("world/level.dat")?;
//!
//!     for axis in ["SpawnX", "SpawnY", "SpawnZ"] {
//!         let coord = root.get(&format!("Data.{}", axis));
//!         println!("{} = {}", axis, coord.map_or(0, |c| c.as_int()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Strings and names are kept as the raw bytes found on the wire (modified
//! UTF-8 in practice) and only converted for display, so no input is ever
//! rejected or altered for being non-unicode.

pub mod error;

mod de;
mod input;
mod tag;

pub use de::*;
pub use tag::*;

#[cfg(test)]
mod test;

/// An NBT tag id. This identifies the payload kind of a tag on the wire; it
/// does not carry the value or the name.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TagId {
    /// Marks the end of a Compound. Carries no name and no payload.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A length-prefixed string, modified UTF-8 on the wire.
    String = 8,
    /// A homogeneous list of nameless payloads.
    List = 9,
    /// A sequence of named tags, terminated by an End tag.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
}

impl TryFrom<u8> for TagId {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use TagId::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl TagId {
    /// The conventional `TAG_*` name, as used by the pretty printer.
    pub fn type_name(self) -> &'static str {
        match self {
            TagId::End => "TAG_End",
            TagId::Byte => "TAG_Byte",
            TagId::Short => "TAG_Short",
            TagId::Int => "TAG_Int",
            TagId::Long => "TAG_Long",
            TagId::Float => "TAG_Float",
            TagId::Double => "TAG_Double",
            TagId::ByteArray => "TAG_ByteArray",
            TagId::String => "TAG_String",
            TagId::List => "TAG_List",
            TagId::Compound => "TAG_Compound",
            TagId::IntArray => "TAG_IntArray",
        }
    }
}
