//! Web Mercator 瓦片坐标与经纬度互转
//!
//! 标准 slippy-map 切片方案：z 级下每轴 2^z 张瓦片，原点在左上角

use std::f64::consts::PI;

use crate::types::TileCoord;

/// 瓦片坐标转经纬度（瓦片左上角）
pub fn tile_to_lat_lng(x: u32, y: u32, z: u32) -> (f64, f64) {
    // 浮点求幂，z 不受 u32 位宽限制；层级上限由视口配置约束
    let n = 2f64.powi(z as i32);
    let lng = x as f64 / n * 360.0 - 180.0;
    let lat_rad = (PI * (1.0 - 2.0 * y as f64 / n)).sinh().atan();
    (lat_rad.to_degrees(), lng)
}

/// 经纬度转瓦片坐标
pub fn lat_lng_to_tile(lat: f64, lng: f64, z: u32) -> TileCoord {
    let n = 2f64.powi(z as i32);
    let x = ((lng + 180.0) / 360.0 * n).floor() as u32;
    let lat_rad = lat.to_radians();
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;
    TileCoord::new(z, x, y)
}
