use serde::{Deserialize, Serialize};

/// Per-driver performance figures returned by `/api/drivers/performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverMetrics {
    pub driver_name: String,
    pub total_trips: u32,
    /// 0.0..=5.0
    pub avg_rating: f64,
    /// 0..=100
    pub safety_score: u32,
    /// miles per gallon
    pub fuel_efficiency: f64,
    pub on_time_percentage: u32,
    pub violations: u32,
    pub miles_driven: u32,
}

impl DriverMetrics {
    pub fn rating_band(&self) -> RatingBand {
        RatingBand::for_rating(self.avg_rating)
    }

    /// `13220` miles -> `"13.2k"`
    pub fn miles_label(&self) -> String {
        format!("{:.1}k", self.miles_driven as f64 / 1000.0)
    }
}

/// Colour band of a driver rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Good,
    Fair,
    Poor,
}

impl RatingBand {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            RatingBand::Good
        } else if rating >= 3.5 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            RatingBand::Good => "rating--good",
            RatingBand::Fair => "rating--fair",
            RatingBand::Poor => "rating--poor",
        }
    }
}

/// Demo figures shown when the performance API is unreachable.
pub fn sample_drivers() -> Vec<DriverMetrics> {
    vec![
        DriverMetrics {
            driver_name: "John Smith".into(),
            total_trips: 487,
            avg_rating: 4.8,
            safety_score: 95,
            fuel_efficiency: 8.2,
            on_time_percentage: 98,
            violations: 1,
            miles_driven: 12450,
        },
        DriverMetrics {
            driver_name: "Sarah Johnson".into(),
            total_trips: 512,
            avg_rating: 4.7,
            safety_score: 92,
            fuel_efficiency: 7.9,
            on_time_percentage: 96,
            violations: 3,
            miles_driven: 13220,
        },
        DriverMetrics {
            driver_name: "Michael Brown".into(),
            total_trips: 445,
            avg_rating: 4.5,
            safety_score: 88,
            fuel_efficiency: 7.5,
            on_time_percentage: 94,
            violations: 5,
            miles_driven: 11890,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bands() {
        assert_eq!(RatingBand::for_rating(4.5), RatingBand::Good);
        assert_eq!(RatingBand::for_rating(4.49), RatingBand::Fair);
        assert_eq!(RatingBand::for_rating(3.5), RatingBand::Fair);
        assert_eq!(RatingBand::for_rating(3.4), RatingBand::Poor);
    }

    #[test]
    fn sample_drivers_are_all_good() {
        let drivers = sample_drivers();
        assert_eq!(drivers.len(), 3);
        assert!(drivers.iter().all(|d| d.rating_band() == RatingBand::Good));
        assert_eq!(drivers[1].miles_label(), "13.2k");
    }
}
