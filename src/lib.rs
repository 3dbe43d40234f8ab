//! 车辆轨迹坐标转换与地图瓦片寻址核心库
//!
//! 上游轨迹数据为 BD09 坐标，地图渲染使用 GCJ02，
//! 部分瓦片服务商按 WGS84 寻址。本库提供三套坐标系之间的
//! 纯函数转换、slippy-map 瓦片数学、quadkey 编解码，
//! 以及按服务商注入的瓦片 URL 生成。
//!
//! 所有转换函数无共享状态、无 I/O，可在任意线程并发调用

pub mod coords;
pub mod mercator;
pub mod providers;
pub mod quadkey;
pub mod track;
pub mod types;

pub use coords::{bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84};
pub use providers::{
    create_provider, get_all_providers, BingProvider, GaodeProvider, OsmProvider,
    TiandituProvider, TileUrlProvider,
};
pub use quadkey::{quadkey_to_tile, tile_to_quadkey, QuadKeyError};
pub use track::{
    calculate_track_bounds, convert_batch_to_gcj02, convert_batch_to_wgs84,
    convert_track_to_positions, format_gps_time, Coordinate, TrackPoint,
};
pub use types::{Bounds, GeoPoint, MapProvider, MapType, ProviderInfo, TileCoord};
