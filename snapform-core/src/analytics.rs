/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Range {
    #[default]
    #[serde(rename = "1W")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "1Y")]
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPoint {
    pub label: &'static str,
    pub count: u32,
}

const fn dp(label: &'static str, count: u32) -> DataPoint {
    DataPoint { label, count }
}

static WEEK: [DataPoint; 7] = [
    dp("Mon", 12), dp("Tue", 18), dp("Wed", 9), dp("Thu", 22),
    dp("Fri", 15), dp("Sat", 11), dp("Sun", 17),
];

static MONTH: [DataPoint; 10] = [
    dp("08/25", 10), dp("08/28", 14), dp("08/31", 9), dp("09/03", 18), dp("09/06", 13),
    dp("09/09", 21), dp("09/12", 15), dp("09/15", 24), dp("09/18", 16), dp("09/21", 19),
];

static YEAR: [DataPoint; 12] = [
    dp("Oct", 120), dp("Nov", 138), dp("Dec", 132), dp("Jan", 146), dp("Feb", 154), dp("Mar", 162),
    dp("Apr", 151), dp("May", 170), dp("Jun", 164), dp("Jul", 176), dp("Aug", 181), dp("Sep", 189),
];

impl Range {
    pub const ALL: [Range; 3] = [Range::Week, Range::Month, Range::Year];

    pub fn label(self) -> &'static str {
        match self {
            Range::Week => "1W",
            Range::Month => "1M",
            Range::Year => "1Y",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Range::Week => "Daily submissions (last 7 days)",
            Range::Month => "Submissions across the last month",
            Range::Year => "Monthly submissions (last 12 months)",
        }
    }

    pub fn dataset(self) -> &'static [DataPoint] {
        match self {
            Range::Week => &WEEK,
            Range::Month => &MONTH,
            Range::Year => &YEAR,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Range {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownRange(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: String,
    pub email: String,
    pub rating: u8,
    pub date: &'static str,
}

/// Eight fixed rows for the submissions table. Ratings cycle through 1..=5.
pub fn submissions() -> Vec<Submission> {
    (1..=8u8)
        .map(|i| Submission {
            id: format!("sub-{}", i),
            email: format!("user{}@example.com", i),
            rating: (i * 3) % 5 + 1,
            date: "2025-09-20",
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self { top: 8.0, right: 8.0, bottom: 24.0, left: 36.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub axis_max: u32,
    /// Tick value and its y coordinate, bottom to top.
    pub y_ticks: Vec<(u32, f64)>,
    pub points: Vec<PlotPoint>,
    pub baseline: f64,
}

impl ChartGeometry {
    pub fn layout(data: &[DataPoint], width: f64, height: f64, padding: Padding) -> Self {
        let plot_w = (width - padding.left - padding.right).max(0.0);
        let plot_h = (height - padding.top - padding.bottom).max(0.0);
        let baseline = padding.top + plot_h;

        let max = data.iter().map(|d| d.count).max().unwrap_or(0);
        let step = nice_step(max as f64 / 4.0);
        let axis_max = (max.div_ceil(step) * step).max(step);

        let y_for = |value: u32| baseline - plot_h * (value as f64 / axis_max as f64);

        let y_ticks = (0..=axis_max / step).map(|i| (i * step, y_for(i * step))).collect();

        let points = data
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let x = if data.len() > 1 {
                    padding.left + plot_w * i as f64 / (data.len() - 1) as f64
                } else {
                    padding.left + plot_w / 2.0
                };
                PlotPoint { x, y: y_for(d.count), label: d.label, count: d.count }
            })
            .collect();

        Self { width, height, padding, axis_max, y_ticks, points, baseline }
    }

    /// SVG path through the data points.
    pub fn line_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{} {:.1} {:.1}", if i == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The line path closed down to the baseline.
    pub fn area_path(&self) -> String {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => format!(
                "{} L {:.1} {:.1} L {:.1} {:.1} Z",
                self.line_path(),
                last.x,
                self.baseline,
                first.x,
                self.baseline
            ),
            _ => String::new(),
        }
    }
}

/// Smallest of 1, 2, 5 times a power of ten that is at least `raw`.
fn nice_step(raw: f64) -> u32 {
    if raw <= 1.0 {
        return 1;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_parse_and_describe() {
        assert_eq!("1m".parse::<Range>().unwrap(), Range::Month);
        assert!(matches!("2W".parse::<Range>(), Err(CoreError::UnknownRange(_))));
        assert_eq!(Range::Year.dataset().len(), 12);
        assert_eq!(Range::default().description(), "Daily submissions (last 7 days)");
    }

    #[test]
    fn submissions_are_fixed() {
        let rows = submissions();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].email, "user1@example.com");
        assert!(rows.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(0.0), 1);
        assert_eq!(nice_step(5.5), 10);
        assert_eq!(nice_step(47.25), 50);
        assert_eq!(nice_step(12.0), 20);
    }

    #[test]
    fn week_layout() {
        let geo = ChartGeometry::layout(Range::Week.dataset(), 400.0, 200.0, Padding::default());
        assert_eq!(geo.axis_max, 30);
        assert_eq!(geo.y_ticks.iter().map(|t| t.0).collect::<Vec<_>>(), vec![0, 10, 20, 30]);
        assert_eq!(geo.y_ticks[0].1, geo.baseline);
        assert_eq!(geo.y_ticks[3].1, 8.0);

        let first = &geo.points[0];
        let last = &geo.points[6];
        assert_eq!(first.x, 36.0);
        assert_eq!(last.x, 392.0);
        assert!(geo.line_path().starts_with("M 36.0"));
        assert!(geo.area_path().ends_with("Z"));
    }

    #[test]
    fn degenerate_layouts() {
        let empty = ChartGeometry::layout(&[], 100.0, 50.0, Padding::default());
        assert!(empty.points.is_empty());
        assert_eq!(empty.area_path(), "");

        let single = ChartGeometry::layout(&[dp("Only", 0)], 100.0, 100.0, Padding::default());
        assert_eq!(single.axis_max, 1);
        assert_eq!(single.points[0].y, single.baseline);
    }
}
