//! # 图像 I/O 适配模块
//!
//! 负责在磁盘上的无损图像文件与 [`PixelBuffer`] 之间转换。
//! 只接受无损格式，有损压缩会破坏隐藏在最低位中的数据。

use crate::constants::LOSSLESS_EXTENSIONS;
use crate::error::{Result, StegoError};
use crate::pixels::PixelBuffer;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageBuffer, ImageError, Rgb, Rgba};
use log::debug;
use std::path::Path;

fn dimension_mismatch() -> ImageError {
    ImageError::Parameter(ParameterError::from_kind(
        ParameterErrorKind::DimensionMismatch,
    ))
}

/// 检查路径的扩展名是否为受支持的无损格式。
pub fn ensure_lossless(path: &Path) -> Result<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            LOSSLESS_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        });

    if supported {
        Ok(())
    } else {
        Err(StegoError::InvalidFormat {
            path: path.to_path_buf(),
        })
    }
}

/// 读取图像文件并转换为像素缓冲区。
///
/// 带 Alpha 通道的图像转换为 RGBA8，其余转换为 RGB8。
///
/// # Errors
///
/// * 扩展名不是无损格式时返回 [`StegoError::InvalidFormat`]。
/// * 文件无法读取或解码时返回 [`StegoError::Io`]。
pub fn load(path: &Path) -> Result<PixelBuffer> {
    ensure_lossless(path)?;

    let image = image::open(path).map_err(|source| StegoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (image.width(), image.height());
    let (channels, samples) = if image.color().has_alpha() {
        (4, image.into_rgba8().into_raw())
    } else {
        (3, image.into_rgb8().into_raw())
    };

    debug!(
        "Loaded {}: {}x{} with {} channels",
        path.display(),
        width,
        height,
        channels
    );

    PixelBuffer::from_raw(width, height, channels, samples).ok_or_else(|| StegoError::Io {
        path: path.to_path_buf(),
        source: dimension_mismatch(),
    })
}

/// 将像素缓冲区写回磁盘，格式由输出路径的扩展名决定。
///
/// # Errors
///
/// * 输出扩展名不是无损格式时返回 [`StegoError::InvalidFormat`]。
/// * 写入失败时返回 [`StegoError::Io`]。
pub fn save(pixels: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_lossless(path)?;

    let (width, height) = (pixels.width(), pixels.height());
    let samples = pixels.samples().to_vec();

    let saved = if pixels.has_alpha() {
        ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, samples).map(|img| img.save(path))
    } else {
        ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, samples).map(|img| img.save(path))
    };

    saved
        .unwrap_or_else(|| Err(dimension_mismatch()))
        .map_err(|source| StegoError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Saved {}", path.display());
    Ok(())
}
