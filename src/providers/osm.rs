//! OpenStreetMap 瓦片，默认底图

use super::TileUrlProvider;
use crate::types::MapType;

pub struct OsmProvider {
    api_key: Option<String>,
}

impl OsmProvider {
    pub fn new() -> Self {
        Self { api_key: None }
    }
}

impl TileUrlProvider for OsmProvider {
    fn id(&self) -> &str {
        "osm"
    }

    fn name(&self) -> &str {
        "OpenStreetMap"
    }

    fn tile_url(&self, z: u32, x: u32, y: u32, map_type: &MapType) -> Option<String> {
        let s = self.get_subdomain(x, y);

        match map_type {
            MapType::Road => Some(format!(
                "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
                s, z, x, y
            )),
            _ => None,
        }
    }

    fn max_zoom(&self) -> u32 {
        19
    }

    fn min_zoom(&self) -> u32 {
        1
    }

    fn supported_map_types(&self) -> Vec<MapType> {
        vec![MapType::Road]
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    fn set_api_key(&mut self, key: &str) {
        self.api_key = Some(key.to_string());
    }

    fn subdomains(&self) -> Vec<&str> {
        vec!["a", "b", "c"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_url() {
        let p = OsmProvider::new();
        let url = p.tile_url(11, 1703, 811, &MapType::Road).unwrap();
        // (1703 + 811) % 3 == 0
        assert_eq!(url, "https://a.tile.openstreetmap.org/11/1703/811.png");
    }

    #[test]
    fn test_satellite_unsupported() {
        let p = OsmProvider::new();
        assert!(p.tile_url(11, 1703, 811, &MapType::Satellite).is_none());
    }
}
