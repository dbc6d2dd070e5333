//! # 调用层接口
//!
//! 供任意外壳 (命令行、图形界面、Web 表单) 调用的三个操作。
//! 每个操作都是一次完整的"读取 → 编解码 → (写回)"流程，结果以类型化的值返回。

use crate::error::Result;
use crate::image_io::{ensure_lossless, load, save};
use crate::steganography::{decode, encode};
use log::info;
use std::path::Path;

/// 将 `message` 隐藏到 `image_path` 指向的图像中，并保存到 `output_path`。
///
/// 所有校验 (输入/输出格式、容量) 都在写出文件之前完成，
/// 失败时不会产生输出文件。
pub fn write(image_path: &Path, message: &str, output_path: &Path) -> Result<()> {
    ensure_lossless(output_path)?;

    let pixels = load(image_path)?;
    let doctored = encode(&pixels, message)?;
    save(&doctored, output_path)?;

    info!(
        "Hid {} bytes from {} into {}",
        message.len(),
        image_path.display(),
        output_path.display()
    );
    Ok(())
}

/// 从 `image_path` 指向的图像中恢复隐藏的文本。
pub fn read(image_path: &Path) -> Result<String> {
    let pixels = load(image_path)?;
    let message = decode(&pixels)?;

    info!(
        "Recovered {} bytes from {}",
        message.len(),
        image_path.display()
    );
    Ok(message)
}

/// 返回 `image_path` 指向的图像最多能隐藏的消息字节数。
pub fn capacity(image_path: &Path) -> Result<usize> {
    load(image_path).map(|pixels| pixels.message_capacity())
}
