//! Derived trend computations over the observation series
//!
//! All queries here are read-only. Insufficient data yields `None` (a
//! designed soft failure), never an error; only the full summary errors
//! on an empty tracker.

use crate::protocol::{round_to, FEVER_THRESHOLD_CELSIUS, TARGET_AG_RATIO, TREATMENT_DURATION_DAYS};

use super::error::TrackerError;
use super::structs::TreatmentTracker;
use super::types::{
    AGRatioTrend, CurrentStatus, FeverStatus, RatioTrendDirection, TreatmentDuration,
    TreatmentSummary, Trends, WeightTrend, WeightTrendDirection,
};

impl TreatmentTracker {
    /// Weight change between the first and last recorded observation
    ///
    /// Returns `None` with fewer than two observations. First and last
    /// are taken by insertion order, not by day number.
    pub fn weight_trend(&self) -> Option<WeightTrend> {
        let observations = self.observations();
        if observations.len() < 2 {
            return None;
        }

        let first = observations.first()?.weight();
        let last = observations.last()?.weight();
        let change = last - first;

        let trend = if change > 0.0 {
            WeightTrendDirection::Increasing
        } else if change < 0.0 {
            WeightTrendDirection::Decreasing
        } else {
            WeightTrendDirection::Stable
        };

        Some(WeightTrend {
            start_weight: first,
            current_weight: last,
            change_kg: round_to(change, 3),
            change_percent: round_to(change / first * 100.0, 1),
            trend,
        })
    }

    /// A:G ratio change between the first and last qualifying bloodwork
    ///
    /// Only observations carrying both albumin and globulin count;
    /// returns `None` with fewer than two. The normalization target
    /// (ratio ≥ 0.4) is checked against the latest raw ratio.
    pub fn ag_ratio_trend(&self) -> Option<AGRatioTrend> {
        let ratios: Vec<f64> = self
            .observations()
            .iter()
            .filter_map(|obs| obs.bloodwork().and_then(|bw| bw.ag_ratio()))
            .collect();

        if ratios.len() < 2 {
            return None;
        }

        let first = ratios[0];
        let last = ratios[ratios.len() - 1];

        let trend = if last > first {
            RatioTrendDirection::Improving
        } else if last < first {
            RatioTrendDirection::Worsening
        } else {
            RatioTrendDirection::Stable
        };

        Some(AGRatioTrend {
            start_ratio: round_to(first, 2),
            current_ratio: round_to(last, 2),
            change: round_to(last - first, 2),
            trend,
            target_met: last >= TARGET_AG_RATIO,
        })
    }

    /// Fever check over the last 7 temperature readings
    ///
    /// Returns `None` when no observation has a temperature. Fever is
    /// flagged when the mean of the recent readings exceeds 39.2°C.
    pub fn fever_status(&self) -> Option<FeverStatus> {
        let temps: Vec<f64> = self
            .observations()
            .iter()
            .filter_map(|obs| obs.temperature())
            .collect();

        if temps.is_empty() {
            return None;
        }

        let recent = &temps[temps.len().saturating_sub(7)..];
        let avg = recent.iter().sum::<f64>() / recent.len() as f64;
        let max = recent.iter().fold(f64::NEG_INFINITY, |m, &t| m.max(t));

        Some(FeverStatus {
            average_temp: round_to(avg, 1),
            max_temp: round_to(max, 1),
            has_fever: avg > FEVER_THRESHOLD_CELSIUS,
            measurements: recent.len(),
        })
    }

    /// Aggregate the patient info, elapsed duration, latest snapshot,
    /// and all three trends
    ///
    /// Errors with [`TrackerError::NoDataPoints`] when nothing has been
    /// recorded yet.
    pub fn summary(&self) -> Result<TreatmentSummary, TrackerError> {
        let latest = self.observations().last().ok_or(TrackerError::NoDataPoints)?;

        let days = latest.day();
        Ok(TreatmentSummary {
            patient: self.patient().clone(),
            treatment_duration: TreatmentDuration {
                days,
                weeks: days.div_euclid(7),
                target_days: TREATMENT_DURATION_DAYS,
            },
            current_status: CurrentStatus {
                date: latest.date(),
                weight: latest.weight(),
                temperature: latest.temperature(),
                clinical_signs: latest.clinical_signs().to_string(),
            },
            trends: Trends {
                weight: self.weight_trend(),
                ag_ratio: self.ag_ratio_trend(),
                fever: self.fever_status(),
            },
            data_points_recorded: self.observations().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::types::{Bloodwork, DataPoint, PatientInfo};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn tracker() -> TreatmentTracker {
        TreatmentTracker::new(PatientInfo::new("Miso").with_start_date(day(1)))
    }

    #[test]
    fn test_weight_trend_needs_two_points() {
        let mut t = tracker();
        assert!(t.weight_trend().is_none());
        t.add_data_point(DataPoint::new(day(1), 3.0));
        assert!(t.weight_trend().is_none());
        t.add_data_point(DataPoint::new(day(8), 3.2));
        assert!(t.weight_trend().is_some());
    }

    #[test]
    fn test_weight_trend_increasing() {
        let mut t = tracker();
        t.add_data_point(DataPoint::new(day(1), 3.0));
        t.add_data_point(DataPoint::new(day(8), 3.15));
        t.add_data_point(DataPoint::new(day(15), 3.3));

        let trend = t.weight_trend().unwrap();
        assert_eq!(trend.start_weight, 3.0);
        assert_eq!(trend.current_weight, 3.3);
        assert_eq!(trend.change_kg, 0.3);
        assert_eq!(trend.change_percent, 10.0);
        assert_eq!(trend.trend, WeightTrendDirection::Increasing);
    }

    #[test]
    fn test_weight_trend_stable_on_exact_equality_only() {
        let mut t = tracker();
        t.add_data_point(DataPoint::new(day(1), 3.0));
        t.add_data_point(DataPoint::new(day(8), 3.0));
        assert_eq!(t.weight_trend().unwrap().trend, WeightTrendDirection::Stable);
    }

    #[test]
    fn test_weight_trend_uses_insertion_order_not_day_order() {
        // Documented quirk: points appended out of chronological order
        // are compared by insertion order.
        let mut t = tracker();
        t.add_data_point(DataPoint::new(day(15), 3.3));
        t.add_data_point(DataPoint::new(day(1), 3.0));

        let trend = t.weight_trend().unwrap();
        assert_eq!(trend.start_weight, 3.3);
        assert_eq!(trend.current_weight, 3.0);
        assert_eq!(trend.trend, WeightTrendDirection::Decreasing);
    }

    #[test]
    fn test_ag_ratio_trend_reference_case() {
        // Ratio rising 0.25 → 0.45 over 14 days
        let mut t = tracker();
        t.add_data_point(
            DataPoint::new(day(1), 3.0).with_bloodwork(Bloodwork::new(Some(2.0), Some(8.0))),
        );
        t.add_data_point(
            DataPoint::new(day(15), 3.2).with_bloodwork(Bloodwork::new(Some(1.8), Some(4.0))),
        );

        let trend = t.ag_ratio_trend().unwrap();
        assert_eq!(trend.start_ratio, 0.25);
        assert_eq!(trend.current_ratio, 0.45);
        assert_eq!(trend.change, 0.2);
        assert_eq!(trend.trend, RatioTrendDirection::Improving);
        assert!(trend.target_met);
    }

    #[test]
    fn test_ag_ratio_skips_incomplete_bloodwork() {
        let mut t = tracker();
        t.add_data_point(
            DataPoint::new(day(1), 3.0).with_bloodwork(Bloodwork::new(Some(2.0), Some(8.0))),
        );
        t.add_data_point(
            DataPoint::new(day(8), 3.1).with_bloodwork(Bloodwork::new(Some(2.1), None)),
        );
        t.add_data_point(DataPoint::new(day(10), 3.1));

        // Only one qualifying point
        assert!(t.ag_ratio_trend().is_none());
    }

    #[test]
    fn test_ag_ratio_below_target() {
        let mut t = tracker();
        t.add_data_point(
            DataPoint::new(day(1), 3.0).with_bloodwork(Bloodwork::new(Some(1.6), Some(8.0))),
        );
        t.add_data_point(
            DataPoint::new(day(15), 3.2).with_bloodwork(Bloodwork::new(Some(2.1), Some(7.0))),
        );

        let trend = t.ag_ratio_trend().unwrap();
        assert_eq!(trend.trend, RatioTrendDirection::Improving);
        assert!(!trend.target_met);
    }

    #[test]
    fn test_fever_status_none_without_temperatures() {
        let mut t = tracker();
        t.add_data_point(DataPoint::new(day(1), 3.0));
        assert!(t.fever_status().is_none());
    }

    #[test]
    fn test_fever_flagged_on_mean_above_threshold() {
        let mut t = tracker();
        t.add_data_point(DataPoint::new(day(1), 3.0).with_temperature(39.8));
        t.add_data_point(DataPoint::new(day(2), 3.0).with_temperature(39.4));

        let fever = t.fever_status().unwrap();
        assert_eq!(fever.average_temp, 39.6);
        assert_eq!(fever.max_temp, 39.8);
        assert!(fever.has_fever);
        assert_eq!(fever.measurements, 2);
    }

    #[test]
    fn test_fever_considers_only_last_seven_readings() {
        let mut t = tracker();
        // An early spike that falls outside the 7-reading window
        t.add_data_point(DataPoint::new(day(1), 3.0).with_temperature(41.0));
        for d in 2..=8 {
            t.add_data_point(DataPoint::new(day(d), 3.0).with_temperature(38.5));
        }

        let fever = t.fever_status().unwrap();
        assert_eq!(fever.measurements, 7);
        assert_eq!(fever.max_temp, 38.5);
        assert!(!fever.has_fever);
    }

    #[test]
    fn test_summary_errors_on_empty_tracker() {
        let t = tracker();
        assert!(matches!(t.summary(), Err(TrackerError::NoDataPoints)));
    }

    #[test]
    fn test_summary_weeks_floor_when_latest_predates_start() {
        // A backdated point before the start date yields a negative day;
        // the week count floors rather than truncating toward zero.
        let mut t = tracker();
        t.add_data_point(DataPoint::new(
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            3.0,
        ));

        let summary = t.summary().unwrap();
        assert_eq!(summary.treatment_duration.days, -1);
        assert_eq!(summary.treatment_duration.weeks, -1);
    }

    #[test]
    fn test_summary_aggregates_latest_state() {
        let mut t = tracker();
        t.add_data_point(DataPoint::new(day(1), 3.0).with_temperature(39.5));
        t.add_data_point(
            DataPoint::new(day(15), 3.2)
                .with_temperature(38.7)
                .with_clinical_signs("eating well"),
        );

        let summary = t.summary().unwrap();
        assert_eq!(summary.treatment_duration.days, 14);
        assert_eq!(summary.treatment_duration.weeks, 2);
        assert_eq!(summary.treatment_duration.target_days, 84);
        assert_eq!(summary.current_status.weight, 3.2);
        assert_eq!(summary.current_status.clinical_signs, "eating well");
        assert_eq!(summary.data_points_recorded, 2);
        assert!(summary.trends.weight.is_some());
        assert!(summary.trends.ag_ratio.is_none());
        assert!(summary.trends.fever.is_some());
    }
}
