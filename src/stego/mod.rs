//! Image carriers for the nibble codec.
//!
//! - [`buffer`]: the typed channel buffer the codec works on
//! - [`image`]: message encode/decode against a buffer
//! - [`io`]: PNG/BMP files <-> buffers, text files

pub mod buffer;
pub mod image;
pub mod io;

pub use buffer::ChannelBuffer;
pub use image::{
    decode_file, decode_message, embed_text_file, encode_file, encode_message,
    encode_message_chunked, read_header, read_symbols, write_text_file, EncodeReport,
    ImageStegoError, DEFAULT_CHUNKS,
};
pub use io::{read_image, read_image_bytes, read_text, to_png_bytes, write_image};
