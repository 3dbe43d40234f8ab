//! 高德地图瓦片
//!
//! 瓦片寻址为 GCJ02，无需坐标修正。API Key 可选，
//! 无 Key 也能访问，但建议提供以确保稳定性和合规性

use super::TileUrlProvider;
use crate::types::MapType;

pub struct GaodeProvider {
    api_key: Option<String>,
}

impl GaodeProvider {
    pub fn new() -> Self {
        Self { api_key: None }
    }

    fn key_param(&self) -> String {
        match &self.api_key {
            Some(key) => format!("&key={}", key),
            None => String::new(),
        }
    }
}

impl TileUrlProvider for GaodeProvider {
    fn id(&self) -> &str {
        "gaode"
    }

    fn name(&self) -> &str {
        "高德地图"
    }

    fn tile_url(&self, z: u32, x: u32, y: u32, map_type: &MapType) -> Option<String> {
        let s = self.get_subdomain(x, y);

        match map_type {
            MapType::Road => Some(format!(
                "https://webrd0{}.is.autonavi.com/appmaptile?lang=zh_cn&size=1&scale=1&style=8&x={}&y={}&z={}{}",
                s, x, y, z, self.key_param()
            )),
            MapType::Satellite => Some(format!(
                "https://webst0{}.is.autonavi.com/appmaptile?style=6&x={}&y={}&z={}{}",
                s, x, y, z, self.key_param()
            )),
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
        vec!["1", "2", "3", "4"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_url() {
        let p = GaodeProvider::new();
        let url = p.tile_url(11, 1703, 811, &MapType::Road).unwrap();
        // (1703 + 811) % 4 == 2，子域名表从 1 开始
        assert_eq!(
            url,
            "https://webrd03.is.autonavi.com/appmaptile?lang=zh_cn&size=1&scale=1&style=8&x=1703&y=811&z=11"
        );
    }

    #[test]
    fn test_satellite_url_with_key() {
        let mut p = GaodeProvider::new();
        p.set_api_key("abc123");
        let url = p.tile_url(11, 1703, 811, &MapType::Satellite).unwrap();
        assert!(url.contains("style=6"));
        assert!(url.ends_with("&key=abc123"));
    }
}
