// ==========================================
// 空气质量哨兵 - API 层
// ==========================================
// 职责: 编排数据源与引擎,渲染对外报告
// ==========================================

pub mod error;
pub mod report;
pub mod sentry_api;

// 重导出
pub use error::{ApiError, ApiResult};
pub use report::{summarize, SentryReport};
pub use sentry_api::SentryApi;
