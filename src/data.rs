//! Metric records and series descriptors.
//!
//! The dashboard renders a closed, trusted sample dataset: seven monthly
//! records in chronological order. The data source is a static literal today
//! but could be swapped for a fetch without touching the rest of the design.

/// Month whose pull-request numbers are excluded from averages.
///
/// Literal policy carried over from the source data: this record is dropped by
/// label from PR-related averages, never inferred statistically.
pub const EXCLUDED_MONTH: &str = "Apr";

/// One month of engineering delivery metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    /// Month label, used as the chart category axis.
    pub month: &'static str,
    /// Pull requests opened.
    pub prs_created: f64,
    /// Pull requests merged.
    pub prs_merged: f64,
    /// Hours from PR creation to deployment.
    pub lead_time: f64,
    /// Bugs reported as critical severity.
    pub critical_defects: f64,
    /// Deployments per week.
    pub deploy_frequency: f64,
    /// Fraction of committed requirements delivered, in [0, 1].
    pub delivery_rate: f64,
}

/// Identifies one numeric field of a [`MonthlyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Pull requests opened.
    PrsCreated,
    /// Pull requests merged.
    PrsMerged,
    /// Lead time for change, in hours.
    LeadTime,
    /// Critical defects reported.
    CriticalDefects,
    /// Deployments per week.
    DeployFrequency,
    /// Requirement delivery rate, as a fraction.
    DeliveryRate,
}

impl Metric {
    /// Reads this field from a record.
    #[must_use]
    pub fn value(&self, record: &MonthlyRecord) -> f64 {
        match self {
            Metric::PrsCreated => record.prs_created,
            Metric::PrsMerged => record.prs_merged,
            Metric::LeadTime => record.lead_time,
            Metric::CriticalDefects => record.critical_defects,
            Metric::DeployFrequency => record.deploy_frequency,
            Metric::DeliveryRate => record.delivery_rate,
        }
    }

    /// Whether this metric counts pull requests.
    ///
    /// PR-related averages drop the [`EXCLUDED_MONTH`] record.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        matches!(self, Metric::PrsCreated | Metric::PrsMerged)
    }

    /// Default display label for this metric.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Metric::PrsCreated => "PRs created",
            Metric::PrsMerged => "PRs merged",
            Metric::LeadTime => "Lead Time (Hours)",
            Metric::CriticalDefects => "Critical Defects",
            Metric::DeployFrequency => "Deploys per Week",
            Metric::DeliveryRate => "Delivery Rate",
        }
    }
}

/// Tells a chart which field to plot and how to name the series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    /// Field to plot.
    pub metric: Metric,
    /// Legend name for the series.
    pub name: &'static str,
}

impl SeriesSpec {
    /// Creates a series descriptor.
    #[must_use]
    pub fn new(metric: Metric, name: &'static str) -> Self {
        Self { metric, name }
    }
}

/// The sample dataset: seven months, chronological order.
#[must_use]
pub fn sample_months() -> Vec<MonthlyRecord> {
    vec![
        MonthlyRecord {
            month: "Oct",
            prs_created: 95.0,
            prs_merged: 85.0,
            lead_time: 48.0,
            critical_defects: 5.0,
            deploy_frequency: 4.2,
            delivery_rate: 0.82,
        },
        MonthlyRecord {
            month: "Nov",
            prs_created: 82.0,
            prs_merged: 52.0,
            lead_time: 32.0,
            critical_defects: 4.0,
            deploy_frequency: 4.5,
            delivery_rate: 0.85,
        },
        MonthlyRecord {
            month: "Dec",
            prs_created: 40.0,
            prs_merged: 5.0,
            lead_time: 80.0,
            critical_defects: 3.0,
            deploy_frequency: 2.0,
            delivery_rate: 0.78,
        },
        MonthlyRecord {
            month: "Jan",
            prs_created: 75.0,
            prs_merged: 86.0,
            lead_time: 70.0,
            critical_defects: 3.0,
            deploy_frequency: 2.5,
            delivery_rate: 0.80,
        },
        MonthlyRecord {
            month: "Feb",
            prs_created: 55.0,
            prs_merged: 73.0,
            lead_time: 40.0,
            critical_defects: 2.0,
            deploy_frequency: 5.2,
            delivery_rate: 0.90,
        },
        MonthlyRecord {
            month: "Mar",
            prs_created: 86.0,
            prs_merged: 100.0,
            lead_time: 60.0,
            critical_defects: 2.0,
            deploy_frequency: 5.5,
            delivery_rate: 0.72,
        },
        MonthlyRecord {
            month: "Apr",
            prs_created: 50.0,
            prs_merged: 60.0,
            lead_time: 32.0,
            critical_defects: 1.0,
            deploy_frequency: 4.5,
            delivery_rate: 0.94,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_months_shape() {
        let records = sample_months();

        assert_eq!(records.len(), 7);
        assert_eq!(records[0].month, "Oct");
        assert_eq!(records[6].month, "Apr");
    }

    #[test]
    fn test_sample_months_chronological_order_is_stable() {
        let months: Vec<&str> = sample_months().iter().map(|r| r.month).collect();
        assert_eq!(months, ["Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr"]);
    }

    #[test]
    fn test_metric_value_reads_field() {
        let records = sample_months();

        assert_eq!(Metric::PrsCreated.value(&records[0]), 95.0);
        assert_eq!(Metric::PrsMerged.value(&records[2]), 5.0);
        assert_eq!(Metric::DeliveryRate.value(&records[6]), 0.94);
    }

    #[test]
    fn test_pull_request_metrics() {
        assert!(Metric::PrsCreated.is_pull_request());
        assert!(Metric::PrsMerged.is_pull_request());
        assert!(!Metric::LeadTime.is_pull_request());
        assert!(!Metric::CriticalDefects.is_pull_request());
        assert!(!Metric::DeployFrequency.is_pull_request());
        assert!(!Metric::DeliveryRate.is_pull_request());
    }

    #[test]
    fn test_excluded_month_exists_in_dataset() {
        let records = sample_months();
        assert!(records.iter().any(|r| r.month == EXCLUDED_MONTH));
    }

    #[test]
    fn test_delivery_rate_is_fraction() {
        for record in sample_months() {
            assert!((0.0..=1.0).contains(&record.delivery_rate), "{}", record.month);
        }
    }
}
