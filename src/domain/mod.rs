// ==========================================
// 空气质量哨兵 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含 I/O,不含引擎逻辑
// ==========================================

pub mod breakpoint;
pub mod decision;
pub mod location;
pub mod reading;
pub mod types;

// 重导出核心类型
pub use breakpoint::Breakpoint;
pub use decision::{AqiResult, Decision, DecisionAssessment};
pub use location::Location;
pub use reading::{Observation, PollutantSeries, Reading, ReadingSet};
pub use types::{AbsentPolicy, AlertStatus, Pollutant};
