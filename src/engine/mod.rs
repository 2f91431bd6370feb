// ==========================================
// 空气质量哨兵 - 引擎层
// ==========================================
// 职责: 分段表 / AQI 换算 / 预警决策
// 红线: 引擎不做 I/O,全部为纯计算
// ==========================================

pub mod aqi_converter;
pub mod breakpoint_table;
pub mod decision_engine;
pub mod error;

// 重导出核心引擎
pub use aqi_converter::{round_index, AqiConverter};
pub use breakpoint_table::{BreakpointTable, Placement};
pub use decision_engine::{classify, project_forecast, DecisionEngine, FORECAST_MULTIPLIER};
pub use error::{EngineError, EngineResult};
