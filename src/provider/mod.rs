// ==========================================
// 空气质量哨兵 - 数据源层
// ==========================================
// 职责: 定位与污染物数据的外部 I/O
// 红线: 不含换算与决策逻辑
// ==========================================

pub mod csv_provider;
pub mod error;
pub mod http;
pub mod ip_api;
pub mod open_meteo;
pub mod provider_trait;
pub mod static_provider;

// 重导出
pub use csv_provider::CsvSeriesProvider;
pub use error::{ProviderError, ProviderResult};
pub use ip_api::IpApiLocationProvider;
pub use open_meteo::OpenMeteoProvider;
pub use provider_trait::{LocationProvider, PollutantDataProvider};
pub use static_provider::{FixedLocationProvider, StaticSeriesProvider};
