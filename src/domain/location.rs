// ==========================================
// 空气质量哨兵 - 位置领域模型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Location - 经纬度
// ==========================================
// 来源: 定位服务 (尽力而为,不保证精度) 或调用方显式指定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,  // 纬度
    pub longitude: f64, // 经度
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 经纬度是否落在合法范围内
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validity() {
        assert!(Location::new(51.5, -0.12).is_valid());
        assert!(!Location::new(91.0, 0.0).is_valid());
        assert!(!Location::new(0.0, -181.0).is_valid());
        assert!(!Location::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(1.5, 2.25).to_string(), "(1.5000, 2.2500)");
    }
}
