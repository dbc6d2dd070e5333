//! # LSB 隐写编解码核心
//!
//! 比特流布局 (每个颜色槽位只承载 1 位，均为 MSB 优先)：
//!
//! ```text
//! 槽位 0..32    长度头部，大端序 u32，等于载荷位数
//! 槽位 32..36   头部填充，最低位清零
//! 槽位 36..     载荷：UTF-8(message + "£££")
//! ```
//!
//! 两个函数都是纯函数：`encode` 返回新的缓冲区，`decode` 只读。

use crate::constants::{HEADER_BITS, HEADER_SLOTS, TERMINATOR_MARKER};
use crate::error::{Result, StegoError};
use crate::pixels::PixelBuffer;
use log::{debug, trace};

/// 将 `value` 的低 `bits` 位 (MSB 优先) 写入从 `start` 开始的连续槽位。
fn modify(value: u32, pix: &mut PixelBuffer, start: usize, bits: usize) {
    debug_assert!(bits <= 32);
    debug_assert!(start + bits <= pix.slot_count());

    for i in 0..bits {
        let bit = ((value >> (bits - 1 - i)) & 1) as u8;
        pix.set_lsb(start + i, bit);
    }
}

/// 从 `start` 开始的连续 `bits` 个槽位中按 MSB 优先读出一个整数。
fn recover(pix: &PixelBuffer, start: usize, bits: usize) -> u32 {
    debug_assert!(bits <= 32);
    debug_assert!(start + bits <= pix.slot_count());

    (0..bits).fold(0u32, |acc, i| {
        (acc << 1) | u32::from(pix.lsb(start + i))
    })
}

/// 将消息隐藏到像素缓冲区的副本中并返回该副本。
///
/// 输入缓冲区不会被修改。
///
/// # Errors
///
/// 若 `36 + 载荷位数` 超过图像的颜色槽位数，返回
/// [`StegoError::CapacityExceeded`]。
pub fn encode(pixels: &PixelBuffer, message: &str) -> Result<PixelBuffer> {
    let mut doctored = pixels.clone();
    encode_in_place(&mut doctored, message)?;
    Ok(doctored)
}

/// 与 [`encode`] 相同，但直接修改传入的缓冲区。
///
/// 容量在任何写入之前检查，失败时缓冲区保持原样。
pub fn encode_in_place(pixels: &mut PixelBuffer, message: &str) -> Result<()> {
    let payload = [message.as_bytes(), TERMINATOR_MARKER.as_bytes()].concat();
    let available = pixels.slot_count();

    let payload_bits = payload.len().checked_mul(8);
    let required = payload_bits.and_then(|bits| bits.checked_add(HEADER_SLOTS));
    let header = payload_bits.and_then(|bits| u32::try_from(bits).ok());

    let (payload_bits, header) = match (payload_bits, required, header) {
        (Some(bits), Some(required), Some(header)) if required <= available => (bits, header),
        _ => {
            return Err(StegoError::CapacityExceeded {
                required: required.unwrap_or(usize::MAX),
                available,
            });
        }
    };

    debug!(
        "Encoding {} message bytes ({} payload bits) into {} slots",
        message.len(),
        payload_bits,
        available
    );

    modify(header, pixels, 0, HEADER_BITS);
    modify(0, pixels, HEADER_BITS, HEADER_SLOTS - HEADER_BITS);

    payload.iter().enumerate().for_each(|(i, &byte)| {
        modify(u32::from(byte), pixels, HEADER_SLOTS + 8 * i, 8);
    });

    trace!("Payload ends at slot {}", HEADER_SLOTS + payload_bits);

    Ok(())
}

/// 从像素缓冲区中恢复隐藏的消息。
///
/// 两条刻意保留的策略：
/// * 载荷位数不是 8 的倍数时，末尾不完整的字节被直接丢弃；
/// * 非法的 UTF-8 序列被替换为 U+FFFD，而不是报错。
///
/// # Errors
///
/// 若图像放不下长度头部，或头部声明的载荷超出图像容量，返回
/// [`StegoError::CorruptHeader`]。
pub fn decode(pixels: &PixelBuffer) -> Result<String> {
    let available = pixels.slot_count();

    if available < HEADER_SLOTS {
        return Err(StegoError::CorruptHeader {
            declared: 0,
            available: 0,
        });
    }

    let payload_bits = recover(pixels, 0, HEADER_BITS);
    let payload_capacity = available - HEADER_SLOTS;

    if payload_bits as usize > payload_capacity {
        return Err(StegoError::CorruptHeader {
            declared: u64::from(payload_bits),
            available: payload_capacity,
        });
    }

    let whole_bytes = payload_bits as usize / 8;
    debug!(
        "Header declares {} payload bits, reading {} whole bytes",
        payload_bits, whole_bytes
    );
    if payload_bits % 8 != 0 {
        trace!("Dropping {} trailing payload bits", payload_bits % 8);
    }

    let bytes: Vec<u8> = (0..whole_bytes)
        .map(|i| recover(pixels, HEADER_SLOTS + 8 * i, 8) as u8)
        .collect();

    let text = String::from_utf8_lossy(&bytes);
    let message = text.strip_suffix(TERMINATOR_MARKER).unwrap_or(text.as_ref());

    Ok(message.to_owned())
}

/// 读取长度头部中的原始载荷位数，不做任何容量校验。
///
/// 图像放不下头部时返回 `None`。
pub fn header_value(pixels: &PixelBuffer) -> Option<u32> {
    (pixels.slot_count() >= HEADER_SLOTS).then(|| recover(pixels, 0, HEADER_BITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(pixels: usize) -> PixelBuffer {
        PixelBuffer::from_raw(pixels as u32, 1, 3, vec![0xAA; pixels * 3]).unwrap()
    }

    #[test]
    fn modify_then_recover_is_msb_first() {
        let mut pix = buffer(4);
        modify(0b1011_0001, &mut pix, 2, 8);

        let lsbs: Vec<u8> = (2..10).map(|slot| pix.lsb(slot)).collect();
        assert_eq!(lsbs, vec![1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(recover(&pix, 2, 8), 0b1011_0001);
    }

    #[test]
    fn modify_keeps_upper_bits() {
        let mut pix = buffer(2);
        modify(0b11_1111, &mut pix, 0, 6);
        assert!(pix.samples().iter().all(|&s| s & 0xFE == 0xAA));
    }

    #[test]
    fn header_padding_is_zeroed() {
        let mut pix = PixelBuffer::from_raw(50, 1, 3, vec![0xFF; 150]).unwrap();
        encode_in_place(&mut pix, "").unwrap();
        assert!((HEADER_BITS..HEADER_SLOTS).all(|slot| pix.lsb(slot) == 0));
    }
}
