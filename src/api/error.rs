// ==========================================
// 空气质量哨兵 - API层错误类型
// ==========================================
// 职责: 汇总引擎层、数据源层错误,给出显式原因
// ==========================================

use crate::engine::error::EngineError;
use crate::provider::error::ProviderError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 引擎错误 (分段表不合法 / 读数无效)
    // ==========================================
    #[error("引擎错误: {0}")]
    Engine(#[from] EngineError),

    // ==========================================
    // 数据源错误 (网络 / 文件 / 响应格式)
    // ==========================================
    #[error("数据源错误: {0}")]
    Provider(#[from] ProviderError),

    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为启动期致命错误 (分段表不合法)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ApiError::Engine(EngineError::MalformedTable { .. })
                | ApiError::Engine(EngineError::MissingTable(_))
        )
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Pollutant;

    #[test]
    fn test_fatal_classification() {
        let fatal: ApiError = EngineError::MissingTable(Pollutant::O3).into();
        assert!(fatal.is_fatal());

        let reading: ApiError = EngineError::InvalidReading {
            pollutant: Pollutant::O3,
            value: -1.0,
        }
        .into();
        assert!(!reading.is_fatal());
        assert!(reading.to_string().contains("o3"));
    }
}
