// ==========================================
// 空气质量哨兵 - AQI 换算引擎
// ==========================================
// 职责: 浓度 → 指数 (分段线性插值)
// 输入: 污染物 + 浓度
// 输出: 整数 AQI
// 红线: 纯函数,无副作用
// ==========================================

use crate::domain::decision::AqiResult;
use crate::domain::reading::{Reading, ReadingSet};
use crate::domain::types::{AbsentPolicy, Pollutant};
use crate::engine::breakpoint_table::{BreakpointTable, Placement};
use crate::engine::error::{EngineError, EngineResult};
use std::collections::BTreeMap;
use std::sync::Arc;

// ==========================================
// AqiConverter - AQI 换算引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct AqiConverter {
    table: Arc<BreakpointTable>,
}

impl AqiConverter {
    pub fn new(table: BreakpointTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// 共享同一张分段表
    pub fn with_shared_table(table: Arc<BreakpointTable>) -> Self {
        Self { table }
    }

    /// 使用标准分段表
    pub fn epa() -> EngineResult<Self> {
        Ok(Self::new(BreakpointTable::epa()?))
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 浓度换算为 AQI
    ///
    /// index = round(slope * (c - c_low) + i_low)
    ///
    /// # 规则
    /// - 取整: 四舍五入,.5 远离零
    /// - 负数/NaN/无穷: 拒绝,返回 InvalidReading
    /// - 超出末段: 沿末段斜率外推,不封顶
    /// - 精度缝隙: 截到下方分段上限
    pub fn to_index(&self, pollutant: Pollutant, concentration: f64) -> EngineResult<u32> {
        if !concentration.is_finite() || concentration < 0.0 {
            return Err(EngineError::InvalidReading {
                pollutant,
                value: concentration,
            });
        }

        let (bp, placement) = self.table.locate(pollutant, concentration);
        let effective = match placement {
            Placement::Within | Placement::AboveTable => concentration,
            Placement::Gap => bp.concentration_high,
            Placement::BelowTable => bp.concentration_low,
        };

        if placement == Placement::AboveTable {
            tracing::debug!(
                pollutant = %pollutant,
                concentration,
                ceiling = bp.concentration_high,
                "浓度超出分段表上限,沿末段外推"
            );
        }

        Ok(round_index(bp.interpolate(effective)))
    }

    /// 换算整组读数
    ///
    /// # 参数
    /// - `readings`: 按污染物汇总的读数
    /// - `policy`: 缺测处理策略
    ///
    /// # 返回
    /// AqiResult (缺测污染物记录在 missing 中)
    pub fn convert_all(
        &self,
        readings: &ReadingSet,
        policy: AbsentPolicy,
    ) -> EngineResult<AqiResult> {
        let mut by_pollutant = BTreeMap::new();
        let mut missing = Vec::new();

        for pollutant in Pollutant::ALL {
            match readings.get(pollutant) {
                Reading::Present { value, .. } => {
                    let aqi = self.to_index(pollutant, value)?;
                    by_pollutant.insert(pollutant, aqi);
                }
                Reading::Absent => {
                    missing.push(pollutant);
                    if policy == AbsentPolicy::TreatAsZero {
                        by_pollutant.insert(pollutant, 0);
                    }
                }
            }
        }

        let aqi_max = by_pollutant.values().copied().max().unwrap_or(0);

        Ok(AqiResult {
            by_pollutant,
            aqi_max,
            missing,
        })
    }
}

/// 插值结果取整 (四舍五入,.5 远离零)
pub fn round_index(raw: f64) -> u32 {
    raw.round().max(0.0) as u32
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> AqiConverter {
        AqiConverter::epa().unwrap()
    }

    #[test]
    fn test_round_index_half_away_from_zero() {
        assert_eq!(round_index(41.5), 42);
        assert_eq!(round_index(42.5), 43);
        assert_eq!(round_index(41.49), 41);
        assert_eq!(round_index(0.5), 1);
        assert_eq!(round_index(0.0), 0);
    }

    #[test]
    fn test_pm25_low_segment() {
        // 50 / 12 * 10 = 41.67
        assert_eq!(converter().to_index(Pollutant::Pm25, 10.0).unwrap(), 42);
    }

    #[test]
    fn test_pm25_very_unhealthy_segment() {
        assert_eq!(converter().to_index(Pollutant::Pm25, 200.0).unwrap(), 250);
    }

    #[test]
    fn test_half_point_rounds_away_from_zero() {
        // 斜率 0.5 可精确表示: 5.0 → 2.5 → 3 (银行家取整会得到 2)
        let mut tables = BTreeMap::new();
        for p in Pollutant::ALL {
            tables.insert(p, vec![crate::domain::Breakpoint::new(0.0, 100.0, 0, 50)]);
        }
        let c = AqiConverter::new(BreakpointTable::new(tables).unwrap());

        assert_eq!(c.to_index(Pollutant::Pm10, 1.0).unwrap(), 1);
        assert_eq!(c.to_index(Pollutant::Pm10, 3.0).unwrap(), 2);
        assert_eq!(c.to_index(Pollutant::Pm10, 5.0).unwrap(), 3);
        assert_eq!(c.to_index(Pollutant::Pm10, 4.0).unwrap(), 2);
    }

    #[test]
    fn test_gap_value_clamps_to_lower_segment_top() {
        let c = converter();
        assert_eq!(c.to_index(Pollutant::O3, 70.5).unwrap(), 100);
        assert_eq!(c.to_index(Pollutant::Pm25, 12.05).unwrap(), 50);
    }

    #[test]
    fn test_above_table_extrapolates() {
        // 末段 350.5–500.4 → 401–500, 斜率 99/149.9
        let c = converter();
        let at_ceiling = c.to_index(Pollutant::Pm25, 500.4).unwrap();
        let beyond = c.to_index(Pollutant::Pm25, 650.0).unwrap();
        assert_eq!(at_ceiling, 500);
        assert!(beyond > 500);
        assert_eq!(beyond, 599);
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        let c = converter();
        assert_eq!(
            c.to_index(Pollutant::No2, -1.0).unwrap_err(),
            EngineError::InvalidReading { pollutant: Pollutant::No2, value: -1.0 }
        );
        assert!(c.to_index(Pollutant::No2, f64::NAN).is_err());
        assert!(c.to_index(Pollutant::No2, f64::INFINITY).is_err());
    }

    #[test]
    fn test_convert_all_treat_as_zero() {
        let readings = ReadingSet::new().with(Pollutant::Pm25, Reading::present(10.0));
        let result = converter()
            .convert_all(&readings, AbsentPolicy::TreatAsZero)
            .unwrap();

        assert_eq!(result.aqi_max, 42);
        assert_eq!(result.by_pollutant.len(), 4);
        assert_eq!(result.by_pollutant[&Pollutant::O3], 0);
        assert_eq!(
            result.missing,
            vec![Pollutant::Pm10, Pollutant::O3, Pollutant::No2]
        );
    }

    #[test]
    fn test_convert_all_exclude() {
        let readings = ReadingSet::new().with(Pollutant::O3, Reading::present(60.0));
        let result = converter()
            .convert_all(&readings, AbsentPolicy::Exclude)
            .unwrap();

        assert_eq!(result.by_pollutant.len(), 1);
        assert!(result.by_pollutant.contains_key(&Pollutant::O3));
        assert_eq!(result.missing.len(), 3);
    }

    #[test]
    fn test_convert_all_propagates_invalid_reading() {
        let readings = ReadingSet::new()
            .with(Pollutant::Pm25, Reading::present(10.0))
            .with(Pollutant::Pm10, Reading::present(-3.0));
        assert!(converter()
            .convert_all(&readings, AbsentPolicy::TreatAsZero)
            .is_err());
    }
}
