//! 天地图 WMTS 瓦片
//!
//! 国家基础地理信息中心服务，2000 坐标系，必须携带 tk 密钥

use super::TileUrlProvider;
use crate::types::MapType;

pub struct TiandituProvider {
    api_key: Option<String>,
}

impl TiandituProvider {
    pub fn new() -> Self {
        Self { api_key: None }
    }
}

impl TileUrlProvider for TiandituProvider {
    fn id(&self) -> &str {
        "tianditu"
    }

    fn name(&self) -> &str {
        "天地图"
    }

    fn tile_url(&self, z: u32, x: u32, y: u32, map_type: &MapType) -> Option<String> {
        let key = self.api_key.as_deref()?;
        let s = self.get_subdomain(x, y);

        let layer = match map_type {
            MapType::Road => "vec",      // 矢量底图
            MapType::Satellite => "img", // 影像底图
        };

        Some(format!(
            "https://t{}.tianditu.gov.cn/{}_w/wmts?SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0&LAYER={}&STYLE=default&TILEMATRIXSET=w&FORMAT=tiles&TILEMATRIX={}&TILEROW={}&TILECOL={}&tk={}",
            s, layer, layer, z, y, x, key
        ))
    }

    fn max_zoom(&self) -> u32 {
        18
    }

    fn min_zoom(&self) -> u32 {
        1
    }

    fn supported_map_types(&self) -> Vec<MapType> {
        vec![MapType::Road, MapType::Satellite]
    }

    fn requires_api_key(&self) -> bool {
        true
    }

    fn set_api_key(&mut self, key: &str) {
        self.api_key = Some(key.to_string());
    }

    fn subdomains(&self) -> Vec<&str> {
        vec!["0", "1", "2", "3", "4", "5", "6", "7"]
    }
}
