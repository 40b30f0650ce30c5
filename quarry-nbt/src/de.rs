use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::input::ByteReader;
use crate::{List, Tag, TagId, Value};

/// Nesting bound for compounds and lists, plenty for real-world data while
/// keeping hostile documents from exhausting the stack.
const MAX_DEPTH: usize = 512;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode one NBT document from uncompressed bytes. The input must start at
/// a named root tag; bytes after the root's payload are ignored.
pub fn from_bytes(input: &[u8]) -> Result<Tag> {
    let mut input = ByteReader::new(input);
    parse_named_tag(&mut input, 0)?.ok_or_else(Error::no_root)
}

/// Decode one NBT document from a reader of uncompressed bytes.
pub fn from_reader(mut reader: impl Read) -> Result<Tag> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    from_bytes(&data)
}

/// Decode one NBT document from a file, inflating it first when the gzip
/// magic is present on the first two bytes.
pub fn from_file(path: impl AsRef<Path>) -> Result<Tag> {
    let raw = fs::read(path)?;
    if raw.starts_with(&GZIP_MAGIC) {
        let mut data = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut data)
            .map_err(Error::corrupt_stream)?;
        from_bytes(&data)
    } else {
        from_bytes(&raw)
    }
}

/// Reads a tag id, name and payload. An End id terminates the enclosing
/// compound and carries neither name nor payload, signalled here as `None`.
fn parse_named_tag(input: &mut ByteReader, depth: usize) -> Result<Option<Tag>> {
    let offset = input.pos();
    let byte = input.u8()?;
    if byte == TagId::End as u8 {
        return Ok(None);
    }
    let id = TagId::try_from(byte).map_err(|_| Error::invalid_tag(byte, offset))?;
    let name = input.short_string()?;
    let value = parse_payload(input, id, depth)?;
    Ok(Some(Tag::new(name, value)))
}

fn parse_payload(input: &mut ByteReader, id: TagId, depth: usize) -> Result<Value> {
    if depth >= MAX_DEPTH {
        return Err(Error::depth_limit());
    }

    Ok(match id {
        TagId::End => unreachable!("end tags are consumed by the compound loop"),
        TagId::Byte => Value::Byte(input.i8()?),
        TagId::Short => Value::Short(input.i16()?),
        TagId::Int => Value::Int(input.i32()?),
        TagId::Long => Value::Long(input.i64()?),
        TagId::Float => Value::Float(input.f32()?),
        TagId::Double => Value::Double(input.f64()?),
        TagId::ByteArray => {
            let len = read_len(input)?;
            let bytes = input.bytes(len)?;
            Value::ByteArray(bytes.iter().map(|b| *b as i8).collect())
        }
        TagId::String => Value::String(input.short_string()?),
        TagId::List => {
            let offset = input.pos();
            let element = input.u8()?;
            let len_offset = input.pos();
            let len = input.i32()?;
            if len < 0 {
                return Err(Error::negative_length(len, len_offset));
            }
            if element == TagId::End as u8 {
                // legal, but only for an empty list
                if len != 0 {
                    return Err(Error::list_of_end(len, offset));
                }
                return Ok(Value::List(List::new(TagId::End, Vec::new())));
            }
            let element = TagId::try_from(element).map_err(|_| Error::invalid_tag(element, offset))?;
            let mut items = Vec::new();
            for _ in 0..len {
                items.push(parse_payload(input, element, depth + 1)?);
            }
            Value::List(List::new(element, items))
        }
        TagId::Compound => {
            let mut children = Vec::new();
            while let Some(child) = parse_named_tag(input, depth + 1)? {
                children.push(child);
            }
            Value::Compound(children)
        }
        TagId::IntArray => {
            let len = read_len(input)?;
            let mut values = Vec::with_capacity(len.min(4096));
            for _ in 0..len {
                values.push(input.i32()?);
            }
            Value::IntArray(values)
        }
    })
}

fn read_len(input: &mut ByteReader) -> Result<usize> {
    let offset = input.pos();
    let len = input.i32()?;
    if len < 0 {
        return Err(Error::negative_length(len, offset));
    }
    Ok(len as usize)
}
