//! # 像素缓冲区模块
//!
//! `PixelBuffer` 是编解码核心操作的对象：按行优先顺序排列的 8 位采样，
//! 每个像素包含 3 (RGB) 或 4 (RGBA) 个采样。
//!
//! 编解码只通过"颜色槽位"访问采样：槽位 `k` 对应第 `k / 3` 个像素的
//! 第 `k % 3` 个颜色通道。Alpha 采样不属于任何槽位，因此永远不会被修改。

use crate::constants::{COLOR_CHANNELS, HEADER_SLOTS, TERMINATOR_MARKER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// 由原始采样构建缓冲区。
    ///
    /// 当 `channels` 不是 3 或 4，或采样数与 `width * height * channels`
    /// 不一致时返回 `None`。
    pub fn from_raw(width: u32, height: u32, channels: usize, samples: Vec<u8>) -> Option<Self> {
        if channels != 3 && channels != 4 {
            return None;
        }
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(channels)?;
        (samples.len() == expected).then_some(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 每个像素的采样数 (3 或 4)。
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn pixel_count(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// 可用于隐写的颜色槽位总数，即 `3 * pixel_count`。
    pub fn slot_count(&self) -> usize {
        self.pixel_count() * COLOR_CHANNELS
    }

    /// `encode` 能接受的最长消息字节数 (不含终止标记)。
    pub fn message_capacity(&self) -> usize {
        (self.slot_count().saturating_sub(HEADER_SLOTS) / 8)
            .saturating_sub(TERMINATOR_MARKER.len())
    }

    fn sample_index(&self, slot: usize) -> usize {
        (slot / COLOR_CHANNELS) * self.channels + slot % COLOR_CHANNELS
    }

    /// 读取槽位 `slot` 的最低位。调用方负责保证 `slot < slot_count()`。
    pub(crate) fn lsb(&self, slot: usize) -> u8 {
        self.samples[self.sample_index(slot)] & 1
    }

    /// 将槽位 `slot` 的最低位设为 `bit`，高 7 位保持不变。
    pub(crate) fn set_lsb(&mut self, slot: usize, bit: u8) {
        let index = self.sample_index(slot);
        let sample = &mut self.samples[index];
        *sample = (*sample & 0xFE) | (bit & 1);
    }
}
