// Cost structure donut
//
// The breakdown is a fixed configuration table; no fetched data feeds it.
use serde::Serialize;

pub const DONUT_RADIUS: f64 = 42.0;
/// Rounded ring circumference, used as the dash gap so each slice draws once.
pub const DONUT_CIRCUMFERENCE: f64 = 263.0;
pub const DONUT_TRACK_COLOR: &str = "#e6eef9";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub label: &'static str,
    pub percent: f64,
    pub color: &'static str,
    /// Stroke dash length and offset; `None` for the slice the track ring shows.
    pub stroke: Option<(f64, f64)>,
}

pub const COST_STRUCTURE: [DonutSegment; 4] = [
    DonutSegment {
        label: "ФОТ",
        percent: 31.0,
        color: "#2170e6",
        stroke: Some((79.0, -10.0)),
    },
    DonutSegment {
        label: "Продукты",
        percent: 28.5,
        color: "#6ea4f5",
        stroke: Some((73.0, -100.0)),
    },
    DonutSegment {
        label: "Аренда",
        percent: 18.0,
        color: "#9cc7ff",
        stroke: Some((47.0, -180.0)),
    },
    DonutSegment {
        label: "Прочее",
        percent: 22.5,
        color: "#c8defc",
        stroke: None,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutArc {
    pub color: &'static str,
    pub dash_array: String,
    pub dash_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostStructureView {
    pub radius: f64,
    pub track_color: &'static str,
    pub arcs: Vec<DonutArc>,
    pub legend: Vec<LegendEntry>,
}

impl CostStructureView {
    pub fn from_segments(segments: &[DonutSegment]) -> Self {
        let arcs = segments
            .iter()
            .filter_map(|s| {
                s.stroke.map(|(dash, offset)| DonutArc {
                    color: s.color,
                    dash_array: format!("{} {}", dash, DONUT_CIRCUMFERENCE),
                    dash_offset: offset,
                })
            })
            .collect();

        let legend = segments
            .iter()
            .map(|s| LegendEntry {
                color: s.color,
                label: format!("{} {}%", s.label, s.percent),
            })
            .collect();

        Self {
            radius: DONUT_RADIUS,
            track_color: DONUT_TRACK_COLOR,
            arcs,
            legend,
        }
    }
}

impl Default for CostStructureView {
    fn default() -> Self {
        Self::from_segments(&COST_STRUCTURE)
    }
}
