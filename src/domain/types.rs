// ==========================================
// 空气质量哨兵 - 领域类型定义
// ==========================================
// 依据: EPA AQI Technical Assistance Document
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 污染物 (Pollutant)
// ==========================================
// 固定枚举集合,每种污染物对应唯一一张分段表
// 序列化格式: 小写键 (pm25 / pm10 / o3 / no2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25, // 细颗粒物
    Pm10, // 可吸入颗粒物
    O3,   // 臭氧
    No2,  // 二氧化氮
}

impl Pollutant {
    /// 全部污染物 (固定顺序)
    pub const ALL: [Pollutant; 4] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
    ];

    /// 规范键
    pub fn as_str(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::O3 => "o3",
            Pollutant::No2 => "no2",
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
        }
    }

    /// 浓度单位 (与上游数据源一致)
    pub fn unit(&self) -> &'static str {
        "µg/m³"
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pollutant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pm25" | "pm2.5" | "pm2_5" => Ok(Pollutant::Pm25),
            "pm10" => Ok(Pollutant::Pm10),
            "o3" | "ozone" => Ok(Pollutant::O3),
            "no2" | "nitrogen_dioxide" => Ok(Pollutant::No2),
            other => Err(format!("未知污染物: {}", other)),
        }
    }
}

// ==========================================
// 预警状态 (Alert Status)
// ==========================================
// 顺序: Ok < Alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Ok,    // 预测值未超过上限
    Alert, // 预测值超过上限
}

impl AlertStatus {
    /// 报告图标
    pub fn icon(&self) -> &'static str {
        match self {
            AlertStatus::Ok => "🌿",
            AlertStatus::Alert => "⚠️",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::Ok => write!(f, "OK"),
            AlertStatus::Alert => write!(f, "ALERT"),
        }
    }
}

// ==========================================
// 缺测处理策略 (Absent Policy)
// ==========================================
// TreatAsZero: 缺测视为 0 参与取最大值 (默认)
// Exclude:     缺测不参与取最大值,也不出现在分项结果中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentPolicy {
    #[default]
    TreatAsZero,
    Exclude,
}

impl AbsentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbsentPolicy::TreatAsZero => "zero",
            AbsentPolicy::Exclude => "exclude",
        }
    }
}

impl fmt::Display for AbsentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AbsentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" | "treat_as_zero" | "treat-as-zero" => Ok(AbsentPolicy::TreatAsZero),
            "exclude" => Ok(AbsentPolicy::Exclude),
            other => Err(format!("未知缺测处理策略: {}", other)),
        }
    }
}
