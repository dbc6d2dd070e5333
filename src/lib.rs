//! # lsb_stega 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：在无损图像颜色通道的最低位中
//! 隐藏一段文本，并在之后将其恢复。

// 声明库包含的所有模块。

pub mod api;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod pixels;
pub mod steganography;

pub use api::{capacity, read, write};
pub use error::{Result, StegoError};
pub use pixels::PixelBuffer;
pub use steganography::{decode, encode};
