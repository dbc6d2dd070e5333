//! # 错误类型模块
//!
//! 定义隐写库对外暴露的全部错误。编解码核心只会产生
//! `CapacityExceeded` 与 `CorruptHeader`，其余两种来自图像 I/O 适配层。

use std::path::PathBuf;
use thiserror::Error;

/// 隐写操作可能出现的错误。
#[derive(Error, Debug)]
pub enum StegoError {
    /// 文件扩展名不是受支持的无损格式。
    #[error("Unsupported image format: {} (expected a lossless PNG, BMP, TIFF or QOI file)", .path.display())]
    InvalidFormat { path: PathBuf },

    /// 消息加上长度头部超出了图像可用的槽位数。
    #[error("Not enough space in the image to hide the message. Required: {required} slots, Available: {available} slots")]
    CapacityExceeded { required: usize, available: usize },

    /// 长度头部声明的载荷超出了图像所能容纳的范围。
    #[error("Corrupt length header: declares {declared} payload bits but the image holds only {available}")]
    CorruptHeader { declared: u64, available: usize },

    #[error("Image I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, StegoError>;
