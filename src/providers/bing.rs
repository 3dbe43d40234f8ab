//! Bing 地图瓦片
//!
//! 道路图由国内节点提供，瓦片寻址本身就是 GCJ02，直接编码 quadkey。
//! 卫星影像服务端按 WGS84 寻址，而地图视口以 GCJ02 驱动，
//! 请求前需对瓦片坐标做一次重映射。两条路径的差异是各自服务端
//! 坐标系决定的既有行为，不要统一

use super::TileUrlProvider;
use crate::coords::gcj02_to_wgs84;
use crate::mercator::{lat_lng_to_tile, tile_to_lat_lng};
use crate::quadkey::tile_to_quadkey;
use crate::types::MapType;

pub struct BingProvider {
    api_key: Option<String>,
}

impl BingProvider {
    pub fn new() -> Self {
        Self { api_key: None }
    }

    /// 重映射卫星影像瓦片坐标并编码 quadkey
    ///
    /// 将视口给出的瓦片坐标还原为经纬度，视其为 GCJ02 转成 WGS84，
    /// 再按 WGS84 重新计算瓦片坐标
    pub fn remap_satellite_tile(x: u32, y: u32, z: u32) -> String {
        let (gcj_lat, gcj_lng) = tile_to_lat_lng(x, y, z);
        let (wgs_lat, wgs_lng) = gcj02_to_wgs84(gcj_lat, gcj_lng);
        let coord = lat_lng_to_tile(wgs_lat, wgs_lng, z);
        tile_to_quadkey(coord.x, coord.y, z)
    }
}

impl TileUrlProvider for BingProvider {
    fn id(&self) -> &str {
        "bing"
    }

    fn name(&self) -> &str {
        "Bing地图"
    }

    fn tile_url(&self, z: u32, x: u32, y: u32, map_type: &MapType) -> Option<String> {
        match map_type {
            MapType::Road => {
                // 道路图（火星坐标），无需转换
                let quadkey = tile_to_quadkey(x, y, z);
                Some(format!(
                    "https://t1.dynamic.tiles.ditu.live.com/comp/ch/{}?mkt=zh-CN&ur=CN&it=G,RL&n=z&og=804&cstl=vb",
                    quadkey
                ))
            }
            MapType::Satellite => {
                // 卫星影像（84坐标）
                let s = self.get_subdomain(x, y);
                let quadkey = Self::remap_satellite_tile(x, y, z);
                Some(format!(
                    "http://ecn.t{}.tiles.virtualearth.net/tiles/a{}.jpeg?g=1",
                    s, quadkey
                ))
            }
        }
    }

    fn max_zoom(&self) -> u32 {
        19
    }

    fn min_zoom(&self) -> u32 {
        1
    }

    fn supported_map_types(&self) -> Vec<MapType> {
        vec![MapType::Road, MapType::Satellite]
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    fn set_api_key(&mut self, key: &str) {
        self.api_key = Some(key.to_string());
    }

    fn subdomains(&self) -> Vec<&str> {
        vec!["0", "1", "2", "3"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_url_uses_plain_quadkey() {
        let p = BingProvider::new();
        let url = p.tile_url(3, 3, 5, &MapType::Road).unwrap();
        assert!(url.contains("/comp/ch/213?"), "url = {}", url);
        assert!(url.contains("dynamic.tiles.ditu.live.com"));
    }

    #[test]
    fn test_satellite_url_subdomain_rotation() {
        let p = BingProvider::new();
        let url = p.tile_url(10, 810, 405, &MapType::Satellite).unwrap();
        // (810 + 405) % 4 == 3
        assert!(url.starts_with("http://ecn.t3.tiles.virtualearth.net/tiles/a"));
        assert!(url.ends_with(".jpeg?g=1"));
    }

    #[test]
    fn test_remap_quadkey_length() {
        assert_eq!(BingProvider::remap_satellite_tile(810, 405, 10).len(), 10);
        assert_eq!(BingProvider::remap_satellite_tile(0, 0, 0), "");
    }

    #[test]
    fn test_remap_near_calibration_center() {
        // (810, 405, 10) 覆盖基准点 (105°E, 35°N) 附近，
        // 此处修正量最小，重映射只应影响 quadkey 末位
        let direct = tile_to_quadkey(810, 405, 10);
        let remapped = BingProvider::remap_satellite_tile(810, 405, 10);
        assert_eq!(remapped.len(), direct.len());
        assert_eq!(&remapped[..8], &direct[..8]);
    }

    #[test]
    fn test_remap_is_deterministic() {
        let a = BingProvider::remap_satellite_tile(1703, 811, 11);
        let b = BingProvider::remap_satellite_tile(1703, 811, 11);
        assert_eq!(a, b);
    }

    #[test]
    fn test_road_and_satellite_paths_differ() {
        // 同一瓦片在两条路径下的 quadkey 不保证一致：
        // 道路图不做坐标修正，卫星图做
        let p = BingProvider::new();
        let road = p.tile_url(11, 1703, 811, &MapType::Road).unwrap();
        assert!(road.contains(&tile_to_quadkey(1703, 811, 11)));
    }
}
