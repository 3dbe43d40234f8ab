//! Bing 地图 quadkey 编解码
//!
//! quadkey 将瓦片 (x, y, z) 编码为长度为 z 的四进制字符串，
//! 高位在前，每位由当前层级的 x/y 位组合而成

use thiserror::Error;

use crate::types::TileCoord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuadKeyError {
    /// quadkey 中只允许出现 '0'..'3'
    #[error("quadkey 包含无效字符: {0:?}")]
    InvalidDigit(char),
    /// 瓦片坐标为 32 位，quadkey 最长 32 位
    #[error("quadkey 长度 {0} 超出 32 位上限")]
    TooLong(usize),
}

/// 将瓦片坐标编码为 quadkey
///
/// 返回字符串长度恒等于 z，z = 0 时为空串
pub fn tile_to_quadkey(x: u32, y: u32, z: u32) -> String {
    let mut quadkey = String::with_capacity(z as usize);
    for i in (1..=z).rev() {
        let mut digit = 0u8;
        let mask = 1u32 << (i - 1);
        if (x & mask) != 0 {
            digit += 1;
        }
        if (y & mask) != 0 {
            digit += 2;
        }
        quadkey.push((b'0' + digit) as char);
    }
    quadkey
}

/// 将 quadkey 解码回瓦片坐标
pub fn quadkey_to_tile(quadkey: &str) -> Result<TileCoord, QuadKeyError> {
    let len = quadkey.chars().count();
    if len > 32 {
        return Err(QuadKeyError::TooLong(len));
    }
    let z = len as u32;
    let mut x = 0u32;
    let mut y = 0u32;
    for (i, c) in quadkey.chars().enumerate() {
        let mask = 1u32 << (z as usize - i - 1);
        match c {
            '0' => {}
            '1' => x |= mask,
            '2' => y |= mask,
            '3' => {
                x |= mask;
                y |= mask;
            }
            other => return Err(QuadKeyError::InvalidDigit(other)),
        }
    }
    Ok(TileCoord::new(z, x, y))
}
