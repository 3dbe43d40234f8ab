//! 地图瓦片 URL 服务商
//!
//! 每个服务商实现 [`TileUrlProvider`]，由调用方注入到通用瓦片层。
//! 各服务商瓦片寻址使用的坐标系不同（Bing 卫星图为 WGS84、
//! 道路图为 GCJ02），坐标修正在各自实现内完成

mod bing;
mod gaode;
mod osm;
mod tianditu;

pub use bing::BingProvider;
pub use gaode::GaodeProvider;
pub use osm::OsmProvider;
pub use tianditu::TiandituProvider;

use crate::types::{MapType, ProviderInfo};

/// 瓦片 URL 服务商 trait
pub trait TileUrlProvider: Send + Sync {
    /// 服务商标识
    fn id(&self) -> &str;

    /// 服务商名称
    fn name(&self) -> &str;

    /// 获取瓦片 URL，不支持的地图类型返回 None
    fn tile_url(&self, z: u32, x: u32, y: u32, map_type: &MapType) -> Option<String>;

    /// 最大层级
    fn max_zoom(&self) -> u32;

    /// 最小层级
    fn min_zoom(&self) -> u32;

    /// 支持的地图类型
    fn supported_map_types(&self) -> Vec<MapType>;

    /// 是否需要 API Key
    fn requires_api_key(&self) -> bool;

    /// 设置 API Key
    fn set_api_key(&mut self, key: &str);

    /// 按 (x + y) 轮询选择子域名，分散镜像负载
    fn get_subdomain(&self, x: u32, y: u32) -> String {
        let subdomains = self.subdomains();
        if subdomains.is_empty() {
            return String::new();
        }
        let index = ((x + y) as usize) % subdomains.len();
        subdomains[index].to_string()
    }

    /// 子域名列表
    fn subdomains(&self) -> Vec<&str> {
        vec![]
    }

    /// 获取服务商信息
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            min_zoom: self.min_zoom(),
            max_zoom: self.max_zoom(),
            map_types: self.supported_map_types().iter().map(|t| t.to_string()).collect(),
            requires_key: self.requires_api_key(),
        }
    }
}

/// 创建服务商实例
pub fn create_provider(provider: &str, api_key: Option<&str>) -> Box<dyn TileUrlProvider> {
    let mut p: Box<dyn TileUrlProvider> = match provider.to_lowercase().as_str() {
        "bing" => Box::new(BingProvider::new()),
        "gaode" => Box::new(GaodeProvider::new()),
        "tianditu" => Box::new(TiandituProvider::new()),
        "osm" => Box::new(OsmProvider::new()),
        _ => Box::new(OsmProvider::new()),
    };

    if let Some(key) = api_key {
        p.set_api_key(key);
    }

    p
}

/// 获取所有服务商信息
pub fn get_all_providers() -> Vec<ProviderInfo> {
    vec![
        BingProvider::new().info(),
        GaodeProvider::new().info(),
        TiandituProvider::new().info(),
        OsmProvider::new().info(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_defaults_to_osm() {
        let p = create_provider("unknown", None);
        assert_eq!(p.id(), "osm");
    }

    #[test]
    fn test_create_provider_sets_key() {
        let p = create_provider("tianditu", Some("test-key"));
        let url = p.tile_url(10, 810, 405, &MapType::Road);
        assert!(url.unwrap().contains("tk=test-key"));
    }

    #[test]
    fn test_all_providers_listed() {
        let infos = get_all_providers();
        let ids: Vec<_> = infos.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["bing", "gaode", "tianditu", "osm"]);
    }
}
