// Loyalty board - static demo figures per filter
use super::chart::{
    ChartGeometry, ChartPoint, GeometryError, VerticalScale, Viewport, build_geometry, grid_lines,
};
use super::layout::{Layout, LayoutVariant, Screen};
use super::metrics::format_plain;
use serde::Serialize;
use std::str::FromStr;

pub const BOARD_VIEWPORT: Viewport = Viewport::new(560.0, 220.0, 24.0);
const GRID_LINE_COUNT: usize = 4;
const EARNED: &str = "earned";
const SPENT: &str = "spent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFilter {
    #[default]
    Filter1,
    Filter2,
    Filter3,
}

impl BoardFilter {
    pub const ALL: [BoardFilter; 3] = [BoardFilter::Filter1, BoardFilter::Filter2, BoardFilter::Filter3];

    pub fn id(&self) -> &'static str {
        match self {
            BoardFilter::Filter1 => "filter1",
            BoardFilter::Filter2 => "filter2",
            BoardFilter::Filter3 => "filter3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoardFilter::Filter1 => "Фильтр 1",
            BoardFilter::Filter2 => "Фильтр 2",
            BoardFilter::Filter3 => "Фильтр 3",
        }
    }
}

impl FromStr for BoardFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardFilter::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| format!("unknown board filter '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Up,
    Down,
    Neutral,
}

impl Tone {
    fn arrow(&self) -> char {
        match self {
            Tone::Up => '▲',
            Tone::Down => '▼',
            Tone::Neutral => '▴',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardMetric {
    pub label: &'static str,
    pub value: f64,
    pub delta_percent: i32,
    pub tone: Tone,
}

impl BoardMetric {
    const fn new(label: &'static str, value: f64, delta_percent: i32, tone: Tone) -> Self {
        Self {
            label,
            value,
            delta_percent,
            tone,
        }
    }

    /// Delta badge text, e.g. `+7% ▲`. The arrow follows the tone, not the sign.
    pub fn delta_label(&self) -> String {
        let sign = if self.delta_percent > 0 { "+" } else { "" };
        format!("{}{}% {}", sign, self.delta_percent, self.tone.arrow())
    }
}

const MEMBERS: &str = "Участников программы лояльности";
const DEFERRED_DISCOUNT: &str = "Сумма отложенной скидки";
const PAID_WITH_BONUSES: &str = "Оплачено покупок бонусами";
const ACTIVE_MEMBERS: &str = "Активных участников";

fn board_metrics(filter: BoardFilter) -> [BoardMetric; 4] {
    match filter {
        BoardFilter::Filter1 => [
            BoardMetric::new(MEMBERS, 9292.0, 7, Tone::Up),
            BoardMetric::new(DEFERRED_DISCOUNT, 2400.0, 5, Tone::Up),
            BoardMetric::new(PAID_WITH_BONUSES, 7420.0, 15, Tone::Up),
            BoardMetric::new(ACTIVE_MEMBERS, 4700.0, 7, Tone::Down),
        ],
        BoardFilter::Filter2 => [
            BoardMetric::new(MEMBERS, 9812.0, 9, Tone::Up),
            BoardMetric::new(DEFERRED_DISCOUNT, 2640.0, 4, Tone::Up),
            BoardMetric::new(PAID_WITH_BONUSES, 7120.0, 3, Tone::Up),
            BoardMetric::new(ACTIVE_MEMBERS, 4380.0, -1, Tone::Down),
        ],
        BoardFilter::Filter3 => [
            BoardMetric::new(MEMBERS, 8940.0, -2, Tone::Down),
            BoardMetric::new(DEFERRED_DISCOUNT, 2180.0, 1, Tone::Up),
            BoardMetric::new(PAID_WITH_BONUSES, 6840.0, 0, Tone::Neutral),
            BoardMetric::new(ACTIVE_MEMBERS, 4120.0, 2, Tone::Up),
        ],
    }
}

/// Monthly bonus accruals and write-offs: `(earned, spent)`.
fn bonus_series(filter: BoardFilter) -> [(f64, f64); 12] {
    match filter {
        BoardFilter::Filter1 => [
            (210.0, 120.0), (430.0, 280.0), (90.0, 70.0), (260.0, 210.0),
            (180.0, 160.0), (420.0, 90.0), (140.0, 330.0), (360.0, 140.0),
            (230.0, 250.0), (310.0, 190.0), (200.0, 150.0), (380.0, 80.0),
        ],
        BoardFilter::Filter2 => [
            (240.0, 120.0), (360.0, 190.0), (120.0, 80.0), (280.0, 160.0),
            (220.0, 210.0), (180.0, 140.0), (420.0, 310.0), (140.0, 60.0),
            (320.0, 200.0), (380.0, 300.0), (260.0, 150.0), (310.0, 110.0),
        ],
        BoardFilter::Filter3 => [
            (200.0, 90.0), (150.0, 220.0), (280.0, 140.0), (120.0, 80.0),
            (260.0, 160.0), (180.0, 110.0), (300.0, 260.0), (190.0, 130.0),
            (240.0, 180.0), (210.0, 150.0), (170.0, 140.0), (260.0, 120.0),
        ],
    }
}

pub fn bonus_points(filter: BoardFilter) -> Vec<ChartPoint> {
    bonus_series(filter)
        .iter()
        .enumerate()
        .map(|(i, &(earned, spent))| {
            ChartPoint::new((i + 1).to_string())
                .with_value(EARNED, earned)
                .with_value(SPENT, spent)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub delta: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusChart {
    pub title: &'static str,
    pub viewport: Viewport,
    pub grid_lines: Vec<f64>,
    pub x_labels: Vec<String>,
    pub geometry: ChartGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub layout: Layout,
    pub brand: &'static str,
    pub caption: &'static str,
    pub metrics: Vec<MetricCard>,
    pub chart: BonusChart,
    pub filters: Vec<FilterOption>,
}

impl BoardView {
    pub fn build(filter: BoardFilter) -> Result<Self, GeometryError> {
        let metrics = board_metrics(filter)
            .iter()
            .map(|m| MetricCard {
                label: m.label,
                value: format_plain(Some(m.value)),
                delta: m.delta_label(),
                tone: m.tone,
            })
            .collect();

        let points = bonus_points(filter);
        let geometry = build_geometry(&points, &[EARNED, SPENT], BOARD_VIEWPORT, VerticalScale::Shared)?;

        let chart = BonusChart {
            title: "Начисления и списания бонусов",
            viewport: BOARD_VIEWPORT,
            grid_lines: grid_lines(&BOARD_VIEWPORT, GRID_LINE_COUNT),
            x_labels: points.into_iter().map(|p| p.label).collect(),
            geometry,
        };

        let filters = BoardFilter::ALL
            .into_iter()
            .map(|f| FilterOption {
                id: f.id(),
                label: f.label(),
                active: f == filter,
            })
            .collect();

        Ok(Self {
            layout: Layout::builder(LayoutVariant::Loyalty)
                .active(Screen::Fastboard)
                .build(),
            brand: "БЕТХОВЕН",
            caption: "Сеть зоомагазинов",
            metrics,
            chart,
            filters,
        })
    }
}
