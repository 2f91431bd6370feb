// ==========================================
// 空气质量哨兵 - 分段点领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Breakpoint - 分段点
// ==========================================
// 一段浓度区间 [concentration_low, concentration_high] 映射到
// 一段指数区间 [index_low, index_high]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub concentration_low: f64,  // 浓度下限
    pub concentration_high: f64, // 浓度上限
    pub index_low: u32,          // 指数下限
    pub index_high: u32,         // 指数上限
}

impl Breakpoint {
    pub const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: u32,
        index_high: u32,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    /// 区间是否包含该浓度 (两端闭区间)
    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.concentration_low && concentration <= self.concentration_high
    }

    /// 浓度区间宽度
    pub fn width(&self) -> f64 {
        self.concentration_high - self.concentration_low
    }

    /// 线性插值斜率 (指数 / 浓度)
    ///
    /// 宽度为 0 的分段在建表时已被拒绝
    pub fn slope(&self) -> f64 {
        (self.index_high as f64 - self.index_low as f64) / self.width()
    }

    /// 按本段斜率插值 (不取整)
    pub fn interpolate(&self, concentration: f64) -> f64 {
        self.slope() * (concentration - self.concentration_low) + self.index_low as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let bp = Breakpoint::new(12.1, 35.4, 51, 100);
        assert!(bp.contains(12.1));
        assert!(bp.contains(35.4));
        assert!(bp.contains(20.0));
        assert!(!bp.contains(12.05));
        assert!(!bp.contains(35.45));
    }

    #[test]
    fn test_interpolate_endpoints() {
        let bp = Breakpoint::new(0.0, 12.0, 0, 50);
        assert_eq!(bp.interpolate(0.0), 0.0);
        assert!((bp.interpolate(12.0) - 50.0).abs() < 1e-9);
        assert!((bp.slope() - 50.0 / 12.0).abs() < 1e-12);
    }
}
