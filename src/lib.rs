//! # nibblehide - text in the low nibble
//!
//! nibblehide hides a text message in the pixel data of a lossless image and
//! recovers it later.
//!
//! ## Overview
//!
//! - Each character becomes 8 bits, split into two 4-bit **symbols**
//! - Each symbol replaces the low nibble of one channel byte
//! - Symbols are written row-major, channel innermost, from the first byte
//! - A **header** of `len_all` symbols in front holds the character count
//! - `len_all` depends only on the image size, so the decoder needs nothing
//!   but the image
//!
//! An image of `rows x columns` pixels carries 1.5 characters per pixel,
//! minus the header.
//!
//! No encryption, no error correction: recompressing the image (JPEG) or
//! touching its pixels destroys the message.
//!
//! ## Example Usage
//!
//! ```rust
//! use nibblehide::codec::Shape;
//! use nibblehide::{decode_message, encode_message, ChannelBuffer};
//!
//! let shape = Shape::new(2, 2, 3).unwrap();
//! let mut buffer = ChannelBuffer::filled(shape, 200);
//!
//! encode_message(&mut buffer, "hi").unwrap();
//! assert_eq!(decode_message(&buffer).unwrap(), "hi");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: bit packing, nibble embedding, capacity and addressing
//! - [`stego`]: message encode/decode against images and image files
//! - [`config`]: settings file

pub mod codec;
pub mod config;
pub mod stego;

// Re-export commonly used types at the crate root
pub use codec::{compute_capacity, Capacity, CodecError, Shape, Symbol};
pub use config::{ConfigError, Settings};
pub use stego::{
    decode_file, decode_message, embed_text_file, encode_file, encode_message,
    encode_message_chunked, read_image, write_image, write_text_file, ChannelBuffer,
    EncodeReport, ImageStegoError,
};
