// ==========================================
// 空气质量哨兵 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::Pollutant;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 建表错误 (启动时致命) =====
    #[error("分段表不合法 (污染物 {pollutant}): {reason}")]
    MalformedTable { pollutant: Pollutant, reason: String },

    #[error("缺少分段表: {0}")]
    MissingTable(Pollutant),

    // ===== 读数错误 =====
    #[error("读数无效 (污染物 {pollutant}): {value} (浓度必须为非负有限数)")]
    InvalidReading { pollutant: Pollutant, value: f64 },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
