use crate::config::DashboardConfig;
use crate::models::{
    DashboardView, Horizon, HorizonOption, Metric, Series, SeriesPoint, SummaryResult,
};

pub fn horizon_options() -> Vec<HorizonOption> {
    Horizon::ALL.iter().copied().map(HorizonOption::from).collect()
}

/// Shapes a summary into metric cards and chart series for the client.
pub fn build_view(config: &DashboardConfig, summary: &SummaryResult) -> DashboardView {
    let points = summary.filtered_table.points();

    let price_series = Series {
        name: "Close Price".to_string(),
        points: points
            .iter()
            .map(|p| SeriesPoint { date: p.date, value: p.close })
            .collect(),
    };

    let volume_series = Series {
        name: "Volume".to_string(),
        points: points
            .iter()
            .map(|p| SeriesPoint { date: p.date, value: p.volume })
            .collect(),
    };

    DashboardView {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        horizon: summary.horizon,
        horizons: horizon_options(),
        metrics: metrics(summary),
        price_series,
        volume_series,
    }
}

fn metrics(summary: &SummaryResult) -> Vec<Metric> {
    vec![
        Metric {
            label: "Latest Close".to_string(),
            value: format_usd(summary.latest_close),
            delta: None,
        },
        Metric {
            label: "Daily Change".to_string(),
            value: format_usd(summary.absolute_change),
            delta: Some(format_percent(summary.percent_change)),
        },
        Metric {
            label: "Highest Price".to_string(),
            value: format_usd(summary.period_high),
            delta: None,
        },
        Metric {
            label: "Lowest Price".to_string(),
            value: format_usd(summary.period_low),
            delta: None,
        },
    ]
}

// Dollar sign goes before the minus: "$-5.00"
fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PricePoint, PriceTable};
    use crate::services::range_summarizer;
    use chrono::NaiveDate;

    fn summary() -> SummaryResult {
        let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap();
        let table = PriceTable::from_points(vec![
            PricePoint::new(day(1), 99.0, 102.0, 97.0, 100.0, 1_000),
            PricePoint::new(day(2), 100.0, 115.0, 99.0, 110.0, 2_000),
            PricePoint::new(day(3), 108.0, 111.0, 103.0, 105.0, 3_000),
        ]);
        range_summarizer::summarize(&table, Horizon::All).unwrap()
    }

    #[test]
    fn test_metric_cards() {
        let view = build_view(&DashboardConfig::default(), &summary());
        let rendered: Vec<(&str, &str, Option<&str>)> = view
            .metrics
            .iter()
            .map(|m| (m.label.as_str(), m.value.as_str(), m.delta.as_deref()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Latest Close", "$105.00", None),
                ("Daily Change", "$-5.00", Some("-4.55%")),
                ("Highest Price", "$115.00", None),
                ("Lowest Price", "$97.00", None),
            ]
        );
    }

    #[test]
    fn test_series_follow_filtered_rows() {
        let view = build_view(&DashboardConfig::default(), &summary());

        assert_eq!(view.price_series.name, "Close Price");
        let closes: Vec<f64> = view.price_series.points.iter().map(|p| p.value).collect();
        assert_eq!(closes, vec![100.0, 110.0, 105.0]);

        assert_eq!(view.volume_series.name, "Volume");
        let volumes: Vec<u64> = view.volume_series.points.iter().map(|p| p.value).collect();
        assert_eq!(volumes, vec![1_000, 2_000, 3_000]);

        assert_eq!(view.price_series.points[0].date, view.volume_series.points[0].date);
    }

    #[test]
    fn test_view_carries_title_and_selector() {
        let config = DashboardConfig {
            title: "ACME".to_string(),
            ..DashboardConfig::default()
        };
        let view = build_view(&config, &summary());
        assert_eq!(view.title, "ACME");
        assert_eq!(view.horizon, Horizon::All);
        assert_eq!(view.horizons.len(), 6);
        assert_eq!(view.horizons[0].label, "1 Month");
    }
}
