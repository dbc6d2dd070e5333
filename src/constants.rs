/// 每个像素中参与隐写的颜色通道数 (R, G, B)。
/// Alpha 通道永远不会被写入。
pub const COLOR_CHANNELS: usize = 3;

/// 长度头部中有意义的位数。
/// 长度以大端序 `u32` 存储，表示其后载荷的位数。
pub const HEADER_BITS: usize = 32;

/// 长度头部占用的颜色槽位数。
/// 头部保留前 12 个像素 (12 * 3 = 36 个槽位)，
/// 第 33 到 36 个槽位不携带数据，编码时将其最低位清零。
pub const HEADER_SLOTS: usize = 36;

/// 追加在消息末尾的终止标记。
/// 长度头部才是权威信息，该标记只是一个冗余的旧式安全网，
/// 解码时若出现在末尾则被去除，但解码从不依赖它。
pub const TERMINATOR_MARKER: &str = "£££";

/// 支持的无损图像扩展名 (不区分大小写)。
pub const LOSSLESS_EXTENSIONS: &[&str] = &["png", "bmp", "tif", "tiff", "qoi"];

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";
