//! 车辆轨迹数据处理
//!
//! 上游设备上报的轨迹点为 BD09 坐标，部分记录已带有预先转换好的
//! GCJ02 坐标。坐标来源在入库时一次性判定（[`Coordinate`]），
//! 渲染与批量转换不再做空值分支

use chrono::{DateTime, Duration};
use serde::{Deserialize, Serialize};

use crate::coords::{bd09_to_gcj02, gcj02_to_wgs84};
use crate::types::{Bounds, GeoPoint};

/// 车辆轨迹点
///
/// lat / lng 为设备上报的 BD09 原始坐标，
/// lat_gcj02 / lng_gcj02 为可选的预转换 GCJ02 坐标
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPoint {
    pub imei: String,
    /// GPS 时间（13 位毫秒时间戳）
    #[serde(rename = "gpsTime")]
    pub gps_time: i64,
    /// GPS 速度（km/h）
    #[serde(rename = "gpsSpeed", default)]
    pub gps_speed: f64,
    /// 方向（度）
    #[serde(default)]
    pub direction: i32,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub lat_gcj02: Option<f64>,
    #[serde(default)]
    pub lng_gcj02: Option<f64>,
}

/// 轨迹点的坐标来源
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// 设备原始 BD09 坐标，使用前需转换
    Raw(GeoPoint),
    /// 已预转换的 GCJ02 坐标
    Converted(GeoPoint),
}

impl Coordinate {
    /// 判定轨迹点的坐标来源，优先取预转换坐标
    ///
    /// 原始坐标为 0 的记录视为无效定位，返回 None
    pub fn of_track(point: &TrackPoint) -> Option<Coordinate> {
        if let (Some(lat), Some(lng)) = (point.lat_gcj02, point.lng_gcj02) {
            return Some(Coordinate::Converted(GeoPoint::new(lat, lng)));
        }
        if point.lat != 0.0 && point.lng != 0.0 {
            return Some(Coordinate::Raw(GeoPoint::new(point.lat, point.lng)));
        }
        None
    }

    /// 解析为 GCJ02 坐标，原始 BD09 坐标在此处转换
    pub fn resolve(self) -> GeoPoint {
        match self {
            Coordinate::Converted(p) => p,
            Coordinate::Raw(p) => {
                let (lat, lng) = bd09_to_gcj02(p.lat, p.lng);
                GeoPoint::new(lat, lng)
            }
        }
    }
}

/// 将轨迹数据转换为地图坐标数组（GCJ02）
///
/// 优先使用预转换坐标，否则回退到 BD09 转换；无效记录被跳过
pub fn convert_track_to_positions(track_data: &[TrackPoint]) -> Vec<GeoPoint> {
    track_data
        .iter()
        .filter_map(Coordinate::of_track)
        .map(Coordinate::resolve)
        .collect()
}

/// 计算轨迹的地图边界，空轨迹返回 None
pub fn calculate_track_bounds(positions: &[GeoPoint]) -> Option<Bounds> {
    let first = positions.first()?;
    let mut bounds = Bounds::new(first.lat, first.lat, first.lng, first.lng);
    for p in &positions[1..] {
        bounds.north = bounds.north.max(p.lat);
        bounds.south = bounds.south.min(p.lat);
        bounds.east = bounds.east.max(p.lng);
        bounds.west = bounds.west.min(p.lng);
    }
    Some(bounds)
}

/// 判断轨迹点是否落在可选的时间范围内
fn in_time_range(point: &TrackPoint, start_time: Option<i64>, end_time: Option<i64>) -> bool {
    if let Some(start) = start_time {
        if point.gps_time < start {
            return false;
        }
    }
    if let Some(end) = end_time {
        if point.gps_time > end {
            return false;
        }
    }
    true
}

/// 批量补齐 GCJ02 坐标
///
/// 对时间范围内尚无预转换坐标的记录执行 BD09 -> GCJ02，
/// 返回实际转换的记录数。时间参数为 None 时转换全部数据
pub fn convert_batch_to_gcj02(
    track_data: &mut [TrackPoint],
    start_time: Option<i64>,
    end_time: Option<i64>,
) -> usize {
    let mut converted = 0;
    for point in track_data.iter_mut() {
        if !in_time_range(point, start_time, end_time) {
            continue;
        }
        if point.lat_gcj02.is_some() && point.lng_gcj02.is_some() {
            continue;
        }
        if point.lat == 0.0 && point.lng == 0.0 {
            log::warn!("跳过无效定位记录: imei={} gps_time={}", point.imei, point.gps_time);
            continue;
        }
        let (lat, lng) = bd09_to_gcj02(point.lat, point.lng);
        point.lat_gcj02 = Some(lat);
        point.lng_gcj02 = Some(lng);
        converted += 1;
    }
    converted
}

/// 批量转换为 WGS84 坐标
///
/// 先按 [`Coordinate`] 规则解析出 GCJ02，再做单次修正转换。
/// 返回 (gps_time, 坐标) 对，便于调用方与原记录对齐
pub fn convert_batch_to_wgs84(
    track_data: &[TrackPoint],
    start_time: Option<i64>,
    end_time: Option<i64>,
) -> Vec<(i64, GeoPoint)> {
    track_data
        .iter()
        .filter(|p| in_time_range(p, start_time, end_time))
        .filter_map(|p| Coordinate::of_track(p).map(|c| (p.gps_time, c.resolve())))
        .map(|(t, gcj)| {
            let (lat, lng) = gcj02_to_wgs84(gcj.lat, gcj.lng);
            (t, GeoPoint::new(lat, lng))
        })
        .collect()
}

/// 格式化 GPS 时间戳为可读时间
///
/// 轨迹数据面向国内用户展示，固定按东八区换算，
/// 与上游产品的本地化显示保持一致
pub fn format_gps_time(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms)
        .and_then(|dt| dt.checked_add_signed(Duration::hours(8)))
    {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => {
            log::warn!("无效的时间戳: {}", timestamp_ms);
            String::new()
        }
    }
}
