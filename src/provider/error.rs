// ==========================================
// 空气质量哨兵 - 数据源错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 数据源错误类型
#[derive(Error, Debug)]
pub enum ProviderError {
    // ===== 网络错误 =====
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("数据服务返回错误 ({status}): {body}")]
    Status { status: u16, body: String },

    // ===== 数据格式错误 =====
    #[error("响应格式错误: {0}")]
    Payload(String),

    #[error("时间格式错误 (行 {row}): {value}")]
    TimeFormat { row: usize, value: String },

    #[error("数值格式错误 (行 {row}, 字段 {field}): {value}")]
    ValueFormat {
        row: usize,
        field: String,
        value: String,
    },

    #[error("未知污染物列: {0}")]
    UnknownPollutant(String),

    // ===== 文件错误 =====
    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),
}

/// Result 类型别名
pub type ProviderResult<T> = Result<T, ProviderError>;
