// ==========================================
// 空气质量哨兵 - 分段表
// ==========================================
// 依据: EPA AQI Technical Assistance Document (浓度 → 指数分段)
// ==========================================
// 职责: 按污染物保存有序分段点,建表时一次性校验
// 输入: 污染物 + 浓度
// 输出: 命中的分段点 (永不失败)
// ==========================================

use crate::domain::breakpoint::Breakpoint;
use crate::domain::types::Pollutant;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 标准分段表 (µg/m³ → AQI)
// ==========================================

const PM25: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 350.4, 301, 400),
    Breakpoint::new(350.5, 500.4, 401, 500),
];

const PM10: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 154.0, 51, 100),
    Breakpoint::new(155.0, 254.0, 101, 150),
    Breakpoint::new(255.0, 354.0, 151, 200),
    Breakpoint::new(355.0, 424.0, 201, 300),
    Breakpoint::new(425.0, 504.0, 301, 400),
    Breakpoint::new(505.0, 604.0, 401, 500),
];

// 简化表
const O3: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 70.0, 51, 100),
    Breakpoint::new(71.0, 85.0, 101, 150),
    Breakpoint::new(86.0, 105.0, 151, 200),
    Breakpoint::new(106.0, 200.0, 201, 300),
    Breakpoint::new(201.0, 604.0, 301, 500),
];

const NO2: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 53.0, 0, 50),
    Breakpoint::new(54.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 360.0, 101, 150),
    Breakpoint::new(361.0, 649.0, 151, 200),
    Breakpoint::new(650.0, 1249.0, 201, 300),
    Breakpoint::new(1250.0, 2049.0, 301, 400),
    Breakpoint::new(2050.0, 3049.0, 401, 500),
];

// ==========================================
// Placement - 浓度相对分段表的位置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placement {
    Within,     // 命中某一分段
    Gap,        // 落在两段之间的精度缝隙,取下方分段并截到其上限
    BelowTable, // 低于首段下限,取首段并截到其下限
    AboveTable, // 超过末段上限,沿末段斜率外推
}

// ==========================================
// BreakpointTable - 分段表
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    tables: BTreeMap<Pollutant, Vec<Breakpoint>>,
}

impl BreakpointTable {
    /// 构造并校验分段表
    ///
    /// # 校验规则
    /// - 每种污染物都有非空分段表
    /// - 每段浓度上限严格大于下限,指数上限不小于下限
    /// - 相邻分段按浓度升序且不重叠 (允许精度缝隙)
    /// - 相邻分段指数不下降
    ///
    /// # 返回
    /// - Err(MalformedTable / MissingTable): 启动时必须终止
    pub fn new(tables: BTreeMap<Pollutant, Vec<Breakpoint>>) -> EngineResult<Self> {
        for pollutant in Pollutant::ALL {
            let breakpoints = tables
                .get(&pollutant)
                .ok_or(EngineError::MissingTable(pollutant))?;
            validate(pollutant, breakpoints)?;
        }

        tracing::debug!(pollutants = tables.len(), "分段表校验通过");
        Ok(Self { tables })
    }

    /// 标准分段表
    pub fn epa() -> EngineResult<Self> {
        let mut tables = BTreeMap::new();
        tables.insert(Pollutant::Pm25, PM25.to_vec());
        tables.insert(Pollutant::Pm10, PM10.to_vec());
        tables.insert(Pollutant::O3, O3.to_vec());
        tables.insert(Pollutant::No2, NO2.to_vec());
        Self::new(tables)
    }

    /// 某污染物的全部分段点
    pub fn breakpoints(&self, pollutant: Pollutant) -> &[Breakpoint] {
        self.tables
            .get(&pollutant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 外推起点: 末段浓度上限
    pub fn ceiling(&self, pollutant: Pollutant) -> f64 {
        self.breakpoints(pollutant)
            .last()
            .map(|b| b.concentration_high)
            .unwrap_or(0.0)
    }

    /// 查找浓度对应的分段点
    ///
    /// # 规则
    /// - 取第一个包含该浓度的分段 (两端闭区间)
    /// - 其余情况见 [`BreakpointTable::locate`]
    pub fn lookup(&self, pollutant: Pollutant, concentration: f64) -> &Breakpoint {
        self.locate(pollutant, concentration).0
    }

    /// 查找分段点并给出位置
    pub fn locate(&self, pollutant: Pollutant, concentration: f64) -> (&Breakpoint, Placement) {
        // 建表时已保证非空
        let breakpoints = self.breakpoints(pollutant);
        let first = &breakpoints[0];
        let last = &breakpoints[breakpoints.len() - 1];

        if let Some(bp) = breakpoints.iter().find(|b| b.contains(concentration)) {
            return (bp, Placement::Within);
        }

        if concentration < first.concentration_low {
            return (first, Placement::BelowTable);
        }

        if concentration > last.concentration_high {
            return (last, Placement::AboveTable);
        }

        match breakpoints
            .iter()
            .rev()
            .find(|b| b.concentration_high < concentration)
        {
            Some(bp) => (bp, Placement::Gap),
            None => (last, Placement::AboveTable),
        }
    }
}

/// 校验单个污染物的分段表
fn validate(pollutant: Pollutant, breakpoints: &[Breakpoint]) -> EngineResult<()> {
    let malformed = |reason: String| EngineError::MalformedTable { pollutant, reason };

    if breakpoints.is_empty() {
        return Err(malformed("分段表为空".to_string()));
    }

    for (i, bp) in breakpoints.iter().enumerate() {
        if !bp.concentration_low.is_finite() || !bp.concentration_high.is_finite() {
            return Err(malformed(format!("第{}段浓度不是有限数", i)));
        }
        if bp.concentration_high <= bp.concentration_low {
            return Err(malformed(format!(
                "第{}段浓度区间宽度为零或倒置: [{}, {}]",
                i, bp.concentration_low, bp.concentration_high
            )));
        }
        if bp.index_high < bp.index_low {
            return Err(malformed(format!(
                "第{}段指数区间倒置: [{}, {}]",
                i, bp.index_low, bp.index_high
            )));
        }
    }

    for (i, pair) in breakpoints.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.concentration_low <= prev.concentration_high {
            return Err(malformed(format!(
                "第{}段与第{}段浓度区间重叠或乱序: {} <= {}",
                i,
                i + 1,
                next.concentration_low,
                prev.concentration_high
            )));
        }
        if next.index_low < prev.index_high {
            return Err(malformed(format!(
                "第{}段与第{}段指数下降: {} < {}",
                i,
                i + 1,
                next.index_low,
                prev.index_high
            )));
        }
    }

    Ok(())
}
