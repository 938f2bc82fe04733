// src/services/charts.rs

use std::f64::consts::PI;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::dashboard::{CategorySales, DonutChart, DonutSegment, LineChart, SalesPoint};
use crate::common::format::{format_date, MonthTable};

pub const LINE_WIDTH: f64 = 600.0;
pub const LINE_HEIGHT: f64 = 200.0;
pub const DONUT_RADIUS: f64 = 60.0;

const SEGMENT_COLORS: [&str; 6] = ["#6366f1", "#22c55e", "#f59e0b", "#ef4444", "#06b6d4", "#a855f7"];

/// Converte a série em pontos (x, y) no espaço SVG: x linear no índice,
/// y escalado pelo máximo (valores menores ficam mais embaixo).
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 * step;
            let y = if max > 0.0 {
                height - (value.max(0.0) / max) * height
            } else {
                height
            };
            (x, y)
        })
        .collect()
}

/// "M x,y L x,y ..."
pub fn line_path(values: &[f64], width: f64, height: f64) -> String {
    line_points(values, width, height)
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd} {x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutArc {
    pub length: f64,
    pub offset: f64,
}

/// Divide a circunferência proporcionalmente às participações (em %),
/// acumulando o deslocamento para os arcos não se sobreporem.
pub fn donut_segments(shares: &[f64], radius: f64) -> Vec<DonutArc> {
    let circumference = 2.0 * PI * radius;
    let mut offset = 0.0;
    shares
        .iter()
        .map(|share| {
            let length = share.max(0.0) / 100.0 * circumference;
            let arc = DonutArc { length, offset };
            offset += length;
            arc
        })
        .collect()
}

pub fn sales_line_chart(points: &[SalesPoint], months: MonthTable) -> LineChart {
    let values: Vec<f64> = points
        .iter()
        .map(|p| p.total.to_f64().unwrap_or(0.0))
        .collect();
    let max_value = points
        .iter()
        .map(|p| p.total)
        .max()
        .unwrap_or(Decimal::ZERO);

    LineChart {
        width: LINE_WIDTH,
        height: LINE_HEIGHT,
        path: line_path(&values, LINE_WIDTH, LINE_HEIGHT),
        labels: points.iter().map(|p| format_date(&p.day, months)).collect(),
        max_value,
    }
}

/// Participação percentual de cada categoria; total zero gera 0% para todas.
pub fn category_shares(rows: &[CategorySales]) -> Vec<f64> {
    let total: Decimal = rows.iter().map(|r| r.total).sum();
    rows.iter()
        .map(|r| {
            if total.is_zero() {
                0.0
            } else {
                (r.total / total * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            }
        })
        .collect()
}

pub fn category_donut(rows: &[CategorySales]) -> DonutChart {
    let shares = category_shares(rows);
    let arcs = donut_segments(&shares, DONUT_RADIUS);

    let segments = rows
        .iter()
        .zip(shares.iter().zip(arcs))
        .enumerate()
        .map(|(i, (row, (percent, arc)))| DonutSegment {
            label: row.category_name.clone(),
            percent: (percent * 100.0).round() / 100.0,
            length: arc.length,
            offset: arc.offset,
            color: SEGMENT_COLORS[i % SEGMENT_COLORS.len()].to_string(),
        })
        .collect();

    DonutChart {
        radius: DONUT_RADIUS,
        circumference: 2.0 * PI * DONUT_RADIUS,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::format::MONTHS_ES;
    use chrono::NaiveDate;

    const EPS: f64 = 1e-9;

    #[test]
    fn donut_segments_fill_circumference_in_order() {
        let arcs = donut_segments(&[50.0, 30.0, 20.0], 10.0);
        let circumference = 2.0 * PI * 10.0;

        let total: f64 = arcs.iter().map(|a| a.length).sum();
        assert!((total - circumference).abs() < EPS);

        assert_eq!(arcs[0].offset, 0.0);
        assert!((arcs[1].offset - arcs[0].length).abs() < EPS);
        assert!((arcs[2].offset - (arcs[0].length + arcs[1].length)).abs() < EPS);
        assert!((arcs[0].length / circumference - 0.5).abs() < EPS);
    }

    #[test]
    fn line_maps_max_to_top_and_zero_to_bottom() {
        let points = line_points(&[0.0, 50.0, 100.0], 600.0, 200.0);
        assert_eq!(points, vec![(0.0, 200.0), (300.0, 100.0), (600.0, 0.0)]);
    }

    #[test]
    fn line_path_formats_commands() {
        assert_eq!(
            line_path(&[10.0, 5.0], 100.0, 50.0),
            "M 0.00,0.00 L 100.00,25.00"
        );
        assert_eq!(line_path(&[], 100.0, 50.0), "");
    }

    #[test]
    fn flat_zero_series_sits_on_baseline() {
        let points = line_points(&[0.0, 0.0], 100.0, 50.0);
        assert!(points.iter().all(|(_, y)| *y == 50.0));
        assert_eq!(line_points(&[7.0], 100.0, 50.0), vec![(0.0, 0.0)]);
    }

    #[test]
    fn category_donut_uses_revenue_share() {
        let rows = vec![
            CategorySales { category_name: "Poleras".into(), total: Decimal::new(500, 0) },
            CategorySales { category_name: "Calzado".into(), total: Decimal::new(300, 0) },
            CategorySales { category_name: "Gorras".into(), total: Decimal::new(200, 0) },
        ];
        let chart = category_donut(&rows);
        let percents: Vec<f64> = chart.segments.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![50.0, 30.0, 20.0]);

        let covered: f64 = chart.segments.iter().map(|s| s.length).sum();
        assert!((covered - chart.circumference).abs() < 1e-6);
    }

    #[test]
    fn sales_chart_labels_each_day() {
        let points = vec![
            SalesPoint { day: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(), total: Decimal::new(10, 0) },
            SalesPoint { day: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(), total: Decimal::new(20, 0) },
        ];
        let chart = sales_line_chart(&points, MONTHS_ES);
        assert_eq!(chart.labels, vec!["1 oct, 2026", "2 oct, 2026"]);
        assert_eq!(chart.max_value, Decimal::new(20, 0));
        assert!(chart.path.starts_with("M 0.00,100.00"));
    }
}
