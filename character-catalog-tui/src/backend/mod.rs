//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! 数据流：
//!     主循环根据 App 上的请求标志调用 CatalogService
//!         ↓
//!     CatalogService 在 tokio 运行时上调用 character-catalog-core 的 PageLoader
//!         ↓
//!     PageLoader 通过 character-catalog-provider 请求目录 API
//!         ↓
//!     结果经 channel 回到主循环，转成 AppMessage::PageLoaded
//!         ↓
//!     Update 层合并到 App 持有的列表，View 层重新渲染
//!

mod catalog_service;
mod config_service;

pub use catalog_service::{CatalogService, PageCompletion};
pub use config_service::{AppConfig, ConfigService, JsonConfigService};
