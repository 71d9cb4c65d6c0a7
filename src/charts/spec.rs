//! Chart data shapes and the portal's sample datasets.
//!
//! DESIGN
//! ======
//! `ChartSpec` serializes directly into the `data` half of a Chart.js
//! config (camelCase keys), so specs built here or parsed from inline JSON
//! attributes hand off to the library without translation.

#[cfg(test)]
#[path = "spec_test.rs"]
mod spec_test;

use serde::{Deserialize, Serialize};

/// Chart flavors the portal renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
}

impl ChartKind {
    /// Type name understood by the Chart.js constructor.
    #[must_use]
    pub fn js_name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Radar => "radar",
        }
    }

    /// Parse a `data-chart` attribute value.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "pie" => Some(Self::Pie),
            "doughnut" => Some(Self::Doughnut),
            "radar" => Some(Self::Radar),
            _ => None,
        }
    }
}

/// One plotted series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    /// A single color or one per slice; Chart.js accepts both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// The `data` half of a Chart.js config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSpec {
    /// Parse inline JSON from a `data-chart-data` attribute.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error for malformed JSON; callers log
    /// it and skip the chart.
    pub fn parse_inline(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

// Grade bucket palette shared by several dashboards.
const COLOR_A: &str = "#10b981";
const COLOR_B: &str = "#4361ee";
const COLOR_C: &str = "#f59e0b";
const COLOR_D: &str = "#8b5cf6";
const COLOR_F: &str = "#ef4444";

/// Bucket color for a 0-100 score.
#[must_use]
pub fn score_color(score: f64) -> &'static str {
    if score >= 90.0 {
        COLOR_A
    } else if score >= 80.0 {
        COLOR_B
    } else if score >= 70.0 {
        COLOR_C
    } else if score >= 60.0 {
        COLOR_D
    } else {
        COLOR_F
    }
}

/// Letter grade for a 0-100 score.
#[must_use]
pub fn letter_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

/// Grade distribution across letter buckets (doughnut).
#[must_use]
pub fn grade_distribution() -> ChartSpec {
    ChartSpec {
        labels: labels(&["A (90-100%)", "B (80-89%)", "C (70-79%)", "D (60-69%)", "F (Below 60%)"]),
        datasets: vec![ChartDataset {
            data: vec![30.0, 25.0, 20.0, 15.0, 10.0],
            background_color: Some(serde_json::json!([COLOR_A, COLOR_B, COLOR_C, COLOR_D, COLOR_F])),
            border_width: Some(1.0),
            border_color: Some("#ffffff".to_owned()),
            ..ChartDataset::default()
        }],
    }
}

/// Weekly score trend for the current and previous semester (line).
#[must_use]
pub fn student_progress() -> ChartSpec {
    ChartSpec {
        labels: labels(&["Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6", "Week 7", "Week 8"]),
        datasets: vec![
            ChartDataset {
                label: Some("Current Semester".to_owned()),
                data: vec![65.0, 70.0, 68.0, 75.0, 82.0, 85.0, 80.0, 88.0],
                border_color: Some(COLOR_B.to_owned()),
                background_color: Some(serde_json::json!("rgba(67, 97, 238, 0.1)")),
                tension: Some(0.3),
                fill: Some(true),
                ..ChartDataset::default()
            },
            ChartDataset {
                label: Some("Previous Semester".to_owned()),
                data: vec![60.0, 65.0, 60.0, 68.0, 72.0, 75.0, 73.0, 78.0],
                border_color: Some(COLOR_A.to_owned()),
                background_color: Some(serde_json::json!("rgba(16, 185, 129, 0.1)")),
                tension: Some(0.3),
                fill: Some(true),
                border_dash: Some(vec![5.0, 5.0]),
                ..ChartDataset::default()
            },
        ],
    }
}

/// Monthly attendance split into present/absent/late (stacked bar).
#[must_use]
pub fn attendance() -> ChartSpec {
    ChartSpec {
        labels: labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]),
        datasets: vec![
            ChartDataset {
                label: Some("Present".to_owned()),
                data: vec![20.0, 18.0, 22.0, 19.0, 21.0, 20.0],
                background_color: Some(serde_json::json!(COLOR_A)),
                ..ChartDataset::default()
            },
            ChartDataset {
                label: Some("Absent".to_owned()),
                data: vec![2.0, 4.0, 0.0, 3.0, 1.0, 2.0],
                background_color: Some(serde_json::json!(COLOR_F)),
                ..ChartDataset::default()
            },
            ChartDataset {
                label: Some("Late".to_owned()),
                data: vec![1.0, 2.0, 3.0, 2.0, 1.0, 3.0],
                background_color: Some(serde_json::json!(COLOR_C)),
                ..ChartDataset::default()
            },
        ],
    }
}

/// Per-subject comparison of one student against the class average (radar).
#[must_use]
pub fn performance_comparison() -> ChartSpec {
    ChartSpec {
        labels: labels(&["Mathematics", "Science", "History", "Language", "Arts", "Physical Education"]),
        datasets: vec![
            ChartDataset {
                label: Some("Student Performance".to_owned()),
                data: vec![85.0, 75.0, 90.0, 80.0, 95.0, 70.0],
                background_color: Some(serde_json::json!("rgba(67, 97, 238, 0.2)")),
                border_color: Some(COLOR_B.to_owned()),
                ..ChartDataset::default()
            },
            ChartDataset {
                label: Some("Class Average".to_owned()),
                data: vec![75.0, 70.0, 80.0, 75.0, 85.0, 80.0],
                background_color: Some(serde_json::json!("rgba(16, 185, 129, 0.2)")),
                border_color: Some(COLOR_A.to_owned()),
                ..ChartDataset::default()
            },
        ],
    }
}

/// Course completion breakdown (horizontal bar via options).
#[must_use]
pub fn course_completion() -> ChartSpec {
    ChartSpec {
        labels: labels(&["Completed", "In Progress", "Not Started"]),
        datasets: vec![ChartDataset {
            data: vec![65.0, 25.0, 10.0],
            background_color: Some(serde_json::json!([COLOR_A, COLOR_C, COLOR_F])),
            border_width: Some(0.0),
            ..ChartDataset::default()
        }],
    }
}

/// Per-subject scores colored by grade bucket (bar).
#[must_use]
pub fn subject_performance(subjects: &[&str], scores: &[f64]) -> ChartSpec {
    let colors: Vec<&str> = scores.iter().map(|s| score_color(*s)).collect();
    ChartSpec {
        labels: labels(subjects),
        datasets: vec![ChartDataset {
            label: Some("Score".to_owned()),
            data: scores.to_vec(),
            background_color: Some(serde_json::json!(colors)),
            border_width: Some(1.0),
            ..ChartDataset::default()
        }],
    }
}

/// GPA trend across semesters (line).
#[must_use]
pub fn grade_history(semesters: &[&str], grades: &[f64]) -> ChartSpec {
    ChartSpec {
        labels: labels(semesters),
        datasets: vec![ChartDataset {
            label: Some("GPA".to_owned()),
            data: grades.to_vec(),
            border_color: Some(COLOR_B.to_owned()),
            background_color: Some(serde_json::json!("rgba(67, 97, 238, 0.1)")),
            tension: Some(0.3),
            fill: Some(true),
            ..ChartDataset::default()
        }],
    }
}

/// Y-axis bounds for a GPA history: half a point of headroom on each side,
/// clamped to the 0.0-4.0 scale. An empty history gets the full scale.
#[must_use]
pub fn gpa_axis_bounds(grades: &[f64]) -> (f64, f64) {
    let lowest = grades.iter().copied().fold(f64::INFINITY, f64::min);
    let highest = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lowest.is_finite() || !highest.is_finite() {
        return (0.0, 4.0);
    }
    ((lowest - 0.5).max(0.0), (highest + 0.5).min(4.0))
}

/// Options for a GPA history line: bounded GPA axis, no legend.
#[must_use]
pub fn grade_history_options(grades: &[f64]) -> serde_json::Value {
    let (min, max) = gpa_axis_bounds(grades);
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "y": {
                "beginAtZero": false,
                "min": min,
                "max": max,
                "title": { "display": true, "text": "GPA" }
            },
            "x": { "grid": { "display": false } }
        },
        "plugins": { "legend": { "display": false } }
    })
}

/// Options for the subject performance bars: percent axis, no legend.
#[must_use]
pub fn subject_performance_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "y": {
                "beginAtZero": true,
                "max": 100,
                "title": { "display": true, "text": "Score (%)" }
            },
            "x": { "grid": { "display": false } }
        },
        "plugins": { "legend": { "display": false } }
    })
}

/// Options for the doughnut dashboards: right-hand legend, hollow center.
#[must_use]
pub fn doughnut_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": { "legend": { "position": "right" } },
        "cutout": "40%"
    })
}

/// Options for the progress line: bounded percent axis, no x grid.
#[must_use]
pub fn progress_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "y": {
                "beginAtZero": false,
                "min": 50,
                "max": 100,
                "title": { "display": true, "text": "Score (%)" }
            },
            "x": { "grid": { "display": false } }
        },
        "plugins": { "legend": { "position": "top" } }
    })
}

/// Options for the attendance chart: both axes stacked.
#[must_use]
pub fn stacked_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "y": {
                "beginAtZero": true,
                "stacked": true,
                "title": { "display": true, "text": "Number of Days" }
            },
            "x": { "stacked": true, "grid": { "display": false } }
        },
        "plugins": { "legend": { "position": "top" } }
    })
}

/// Options for the radar comparison: shared 50-100 scale.
#[must_use]
pub fn radar_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": { "r": { "suggestedMin": 50, "suggestedMax": 100 } },
        "plugins": { "legend": { "position": "top" } }
    })
}

/// Options for the completion chart: horizontal percent bars.
#[must_use]
pub fn completion_options() -> serde_json::Value {
    serde_json::json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "indexAxis": "y",
        "plugins": { "legend": { "display": false } },
        "scales": {
            "x": { "beginAtZero": true, "max": 100, "grid": { "display": false } },
            "y": { "grid": { "display": false } }
        }
    })
}
