// src/render/chart.rs
//! Chart adapter: trend series -> declarative line-chart descriptor (Chart.js shape).

use serde::Serialize;
use serde_json::{json, Value};

use crate::feed::TrendPoint;

/// A chart to attach to the canvas with id `id` once the page is live.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMount {
    pub id: String,
    pub chart: Value,
}

#[derive(Debug, Clone)]
pub struct ChartAdapter {
    enabled: bool,
    series_label: String,
}

impl ChartAdapter {
    pub fn new(enabled: bool, series_label: &str) -> Self {
        Self {
            enabled,
            series_label: series_label.to_string(),
        }
    }

    /// Sparkline-style single-series line chart; `None` when there is nothing
    /// to draw or no charting library.
    pub fn line(&self, canvas_id: &str, series: &[TrendPoint]) -> Option<ChartMount> {
        if !self.enabled || series.is_empty() {
            return None;
        }
        let labels: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        Some(ChartMount {
            id: canvas_id.to_string(),
            chart: json!({
                "type": "line",
                "data": {
                    "labels": labels,
                    "datasets": [{ "label": self.series_label, "data": values }]
                },
                "options": {
                    "responsive": true,
                    "plugins": { "legend": { "display": false } },
                    "scales": { "x": { "display": false } }
                }
            }),
        })
    }
}

/// JSON for embedding inside a `<script>` element.
pub fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}
