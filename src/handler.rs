//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用隐写接口以及向用户报告结果。

use crate::api;
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, RECOVERED_PREFIX};
use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// 在输入图像所在目录下生成默认的隐写图像路径：`doctored_<文件名>`。
fn default_dest(image: &Path) -> PathBuf {
    let file_name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.png".to_owned());
    image.with_file_name(format!("{DOCTORED_PREFIX}{file_name}"))
}

/// 在图像所在目录下生成默认的恢复文本路径：`recovered_<文件名>.txt`。
fn default_text(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    image.with_file_name(format!("{RECOVERED_PREFIX}{stem}.txt"))
}

/// 除非指定了 `--force`，否则拒绝覆盖已存在的输出文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    anyhow::ensure!(
        force,
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );

    warn!("Overwriting existing file {}", path.display());
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责获取要隐藏的文本 (命令行参数或文本文件)、确定输出路径，
/// 然后调用 [`api::write`] 完成读取图像、检查容量、隐写并保存的全过程。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的文本文件，或文本不是合法的 UTF-8。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像格式不受支持、无法读取，或没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(text)) => fs::read_to_string(text).with_context(|| {
            format!(
                "Unable to read text file: {}",
                text.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --message or --text must be provided."),
    };

    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    api::write(&args.image, &message, &dest).with_context(|| {
        format!(
            "Failed to hide the text in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责调用 [`api::read`] 从经过隐写的图像中恢复文本，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件，或长度头部已损坏。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = args.text.unwrap_or_else(|| default_text(&args.image));
    ensure_writable(&text_path, args.force)?;

    let text = api::read(&args.image).with_context(|| {
        format!(
            "Failed to recover the hidden text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&text_path, &text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    if args.print {
        println!("{text}");
    }

    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let bytes = api::capacity(&args.image).with_context(|| {
        format!(
            "Unable to inspect image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} can hide up to {} bytes of UTF-8 text.",
        args.image.to_string_lossy().bold(),
        bytes.to_string().green().bold()
    );
    Ok(())
}
