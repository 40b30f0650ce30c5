//! Shared pieces of the command line tools: the built-in block colour table
//! and the image-backed pixel sink the renderers draw into.

pub mod colours;

mod sink;

pub use sink::ImageSink;
