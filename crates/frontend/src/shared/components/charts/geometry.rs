//! Pure layout math for the SVG and CSS charts.

use std::f64::consts::PI;

/// Series colours, cycled when a chart has more series than entries.
pub const CHART_COLORS: [&str; 8] = [
    "hsl(210, 100%, 50%)",
    "hsl(173, 58%, 39%)",
    "hsl(38, 92%, 50%)",
    "hsl(280, 65%, 60%)",
    "hsl(346, 77%, 50%)",
    "hsl(199, 89%, 48%)",
    "hsl(142, 71%, 45%)",
    "hsl(25, 95%, 53%)",
];

pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Each value as a percentage of the largest one.
pub fn bar_percentages(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { (v.max(0.0) / max) * 100.0 } else { 0.0 })
        .collect()
}

/// Each value as a percentage of their sum.
pub fn segment_percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    values
        .iter()
        .map(|v| if total > 0.0 { v.max(0.0) / total * 100.0 } else { 0.0 })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSlice {
    pub index: usize,
    /// Degrees, 0 at twelve o'clock, clockwise.
    pub start_angle: f64,
    pub end_angle: f64,
    pub fraction: f64,
}

/// Slices for the non-zero values; empty when nothing is positive.
pub fn donut_slices(values: &[f64]) -> Vec<DonutSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(index, value)| {
            let fraction = value / total;
            let slice = DonutSlice {
                index,
                start_angle: angle,
                end_angle: angle + fraction * 360.0,
                fraction,
            };
            angle = slice.end_angle;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = (degrees - 90.0) * PI / 180.0;
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// SVG path of a ring segment between `start` and `end` degrees.
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A 360 degree arc has identical end points and renders as nothing.
    let end = end.min(start + 359.99);
    let large_arc = if end - start > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix2, iy2) = polar(cx, cy, inner, end);
    let (ix1, iy1) = polar(cx, cy, inner, start);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        ox1, oy1, outer, outer, large_arc, ox2, oy2, ix2, iy2, inner, inner, large_arc, ix1, iy1
    )
}

/// Plot area of a line chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    /// Y coordinate of `value` on a scale from zero to `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        let span = self.height - 2.0 * self.padding;
        if max <= 0.0 {
            return self.bottom();
        }
        self.bottom() - (value.max(0.0) / max) * span
    }

    /// X coordinate of point `index` out of `count`.
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        let span = self.width - 2.0 * self.padding;
        if count <= 1 {
            return self.padding + span / 2.0;
        }
        self.padding + index as f64 * span / (count - 1) as f64
    }

    pub fn points(&self, values: &[f64], max: f64) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (self.x_for(i, values.len()), self.y_for(*v, max)))
            .collect()
    }
}

/// Largest value across all series, for a shared y scale.
pub fn series_max<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> f64 {
    series
        .into_iter()
        .flat_map(|s| s.iter().cloned())
        .fold(0.0_f64, f64::max)
}

/// `points` attribute of an SVG polyline.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bars_scale_to_largest() {
        assert_eq!(bar_percentages(&[50.0, 100.0, 25.0]), vec![50.0, 100.0, 25.0]);
        assert_eq!(bar_percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_percentages(&[]).is_empty());
    }

    #[test]
    fn segments_split_the_total() {
        let parts = segment_percentages(&[1.0, 3.0, 0.0]);
        assert_eq!(parts, vec![25.0, 75.0, 0.0]);
        assert_eq!(segment_percentages(&[0.0]), vec![0.0]);
    }

    #[test]
    fn donut_slices_are_contiguous_and_skip_zeroes() {
        let slices = donut_slices(&[2.0, 0.0, 1.0, 1.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].index, 0);
        assert!(close(slices[0].end_angle, 180.0));
        assert_eq!(slices[1].index, 2);
        assert!(close(slices[1].start_angle, 180.0));
        assert!(close(slices[2].end_angle, 360.0));
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!(close(total, 1.0));
        assert!(donut_slices(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn arc_path_starts_at_twelve_o_clock() {
        let path = arc_path(100.0, 100.0, 90.0, 60.0, 0.0, 90.0);
        assert!(path.starts_with("M 100.00 10.00 A 90.00 90.00 0 0 1 190.00 100.00"));
        assert!(path.ends_with("Z"));
    }

    #[test]
    fn full_circle_uses_large_arc() {
        let path = arc_path(100.0, 100.0, 90.0, 60.0, 0.0, 360.0);
        assert!(path.contains(" 0 1 1 "));
    }

    #[test]
    fn line_points_scale_from_zero() {
        let area = PlotArea {
            width: 200.0,
            height: 100.0,
            padding: 10.0,
        };
        let points = area.points(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(points, vec![(10.0, 90.0), (100.0, 50.0), (190.0, 10.0)]);
        assert_eq!(area.points(&[5.0], 0.0), vec![(100.0, 90.0)]);
        assert_eq!(polyline(&points[..2]), "10.00,90.00 100.00,50.00");
    }

    #[test]
    fn series_max_spans_every_series() {
        let a = [1.0, 7.0];
        let b = [3.0, 4.0];
        assert_eq!(series_max([&a[..], &b[..]]), 7.0);
        assert_eq!(series_max(Vec::<&[f64]>::new()), 0.0);
    }
}
