use serde::{Deserialize, Serialize};

/// 地理坐标点（纬度、经度，单位：度）
///
/// 坐标值本身不携带坐标系信息，BD-09 / GCJ-02 / WGS84 由使用场景决定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// 瓦片坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

/// 地图类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    Road,
    Satellite,
}

impl ToString for MapType {
    fn to_string(&self) -> String {
        match self {
            MapType::Road => "road".to_string(),
            MapType::Satellite => "satellite".to_string(),
        }
    }
}

impl From<&str> for MapType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "road" => MapType::Road,
            "satellite" => MapType::Satellite,
            _ => MapType::Road,
        }
    }
}

/// 地图服务商
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapProvider {
    Bing,
    Gaode,
    Tianditu,
    Osm,
}

impl ToString for MapProvider {
    fn to_string(&self) -> String {
        match self {
            MapProvider::Bing => "bing".to_string(),
            MapProvider::Gaode => "gaode".to_string(),
            MapProvider::Tianditu => "tianditu".to_string(),
            MapProvider::Osm => "osm".to_string(),
        }
    }
}

impl From<&str> for MapProvider {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bing" => MapProvider::Bing,
            "gaode" => MapProvider::Gaode,
            "tianditu" => MapProvider::Tianditu,
            "osm" => MapProvider::Osm,
            _ => MapProvider::Osm,
        }
    }
}

/// 地图边界
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// 验证边界是否有效
    pub fn is_valid(&self) -> bool {
        self.north > self.south && self.east > self.west
            && self.north <= 85.0511 && self.south >= -85.0511
            && self.east <= 180.0 && self.west >= -180.0
    }
}

/// 服务商配置信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub min_zoom: u32,
    pub max_zoom: u32,
    pub map_types: Vec<String>,
    pub requires_key: bool,
}
