//! Metric averaging.
//!
//! The aggregator computes a plain arithmetic mean over the monthly records,
//! with one literal exclusion: pull-request metrics drop the record labeled
//! [`EXCLUDED_MONTH`](crate::data::EXCLUDED_MONTH) from both sum and count.
//! Inputs are the closed sample dataset, so there is no empty-sequence
//! guarding here.

use crate::data::{Metric, MonthlyRecord, EXCLUDED_MONTH};

/// Arithmetic mean of `metric` across `records`.
///
/// PR-related metrics exclude the anomalous month by label before averaging.
#[must_use]
pub fn metric_average(records: &[MonthlyRecord], metric: Metric) -> f64 {
    let included = records
        .iter()
        .filter(|r| !(metric.is_pull_request() && r.month == EXCLUDED_MONTH));

    let (sum, count) = included.fold((0.0_f64, 0_usize), |(sum, count), record| {
        (sum + metric.value(record), count + 1)
    });

    sum / count as f64
}

/// Mean of `metric`, formatted to two decimal places.
#[must_use]
pub fn formatted_average(records: &[MonthlyRecord], metric: Metric) -> String {
    format!("{:.2}", metric_average(records, metric))
}

/// Mean delivery rate as a percentage string with one decimal, e.g. `"83.0%"`.
#[must_use]
pub fn formatted_delivery_percent(records: &[MonthlyRecord]) -> String {
    format!("{:.1}%", metric_average(records, Metric::DeliveryRate) * 100.0)
}
