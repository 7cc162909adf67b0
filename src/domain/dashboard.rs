// Dashboard domain model
use super::chart::{
    ChartGeometry, ChartPoint, GeometryError, VerticalScale, Viewport, build_geometry, sum_series,
};
use super::cost_structure::CostStructureView;
use super::layout::{Layout, LayoutVariant, Screen};
use super::metrics::{PLACEHOLDER, format_currency, format_percent, format_percent_whole};
use super::portal::{AiTicket, FranchiseSummary, KpiSummary, PortalSnapshot, WeeklyChartPoint};
use super::watermark::Watermark;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const WEEKLY_VIEWPORT: Viewport = Viewport::new(320.0, 120.0, 16.0);

/// Labor cost share above which the card is flagged.
const LABOR_COST_LIMIT: f64 = 28.0;

const REVENUE: &str = "revenue";
const CHECKS: &str = "checks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiIcon {
    Revenue,
    Labor,
    Food,
    Profit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    Default,
    Critical,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub hint: String,
    pub icon: KpiIcon,
    pub tone: CardTone,
}

pub fn kpi_cards(kpis: Option<&KpiSummary>) -> Vec<KpiCard> {
    let labor_critical = kpis.is_some_and(|k| k.labor_cost_percent > LABOR_COST_LIMIT);

    vec![
        KpiCard {
            title: "Выручка (Сегодня)",
            value: format_currency(kpis.map(|k| k.revenue_today)),
            hint: match kpis {
                Some(k) => format!("+{} план", format_percent_whole(Some(k.revenue_plan_percent))),
                None => PLACEHOLDER.to_string(),
            },
            icon: KpiIcon::Revenue,
            tone: CardTone::Success,
        },
        KpiCard {
            title: "ФОТ",
            value: format_percent(kpis.map(|k| k.labor_cost_percent)),
            hint: if labor_critical {
                "Критично! Норма 28%".to_string()
            } else {
                "В норме".to_string()
            },
            icon: KpiIcon::Labor,
            tone: if labor_critical {
                CardTone::Critical
            } else {
                CardTone::Success
            },
        },
        KpiCard {
            title: "Food Cost",
            value: format_percent(kpis.map(|k| k.food_cost_percent)),
            hint: match kpis {
                Some(k) => format!("LFL {}", format_percent(Some(k.lfl_percent))),
                None => PLACEHOLDER.to_string(),
            },
            icon: KpiIcon::Food,
            tone: CardTone::Default,
        },
        KpiCard {
            title: "Чистая прибыль (прогноз)",
            value: format_currency(kpis.map(|k| k.profit_forecast)),
            hint: "Прогноз месяца".to_string(),
            icon: KpiIcon::Profit,
            tone: CardTone::Default,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketsPanel {
    pub title: &'static str,
    pub items: Vec<AiTicket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl TicketsPanel {
    pub fn new(items: Vec<AiTicket>) -> Self {
        let empty_message = items.is_empty().then_some("Нет активных задач.");
        Self {
            title: "AI Кубер — подсказки",
            items,
            empty_message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FranchiseBalance {
    pub title: &'static str,
    pub rows: Vec<BalanceRow>,
    pub qsc_index: String,
}

impl FranchiseBalance {
    pub fn new(summary: Option<&FranchiseSummary>) -> Self {
        let row = |label, value: Option<f64>| BalanceRow {
            label,
            value: format_currency(value),
        };

        Self {
            title: "Баланс с УК",
            rows: vec![
                row("Роялти", summary.map(|s| s.royalty_due)),
                row("Маркетинг", summary.map(|s| s.marketing_due)),
                row("Закупки", summary.map(|s| s.supplies_due)),
            ],
            qsc_index: format_percent(summary.map(|s| s.qsc_index)),
        }
    }
}

/// Abbreviated ru-RU month names in the genitive, as used after a day number.
const SHORT_MONTHS: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// Axis label such as `06 мая`.
fn day_label(day: NaiveDate) -> String {
    format!("{} {}", day.format("%d"), SHORT_MONTHS[day.month0() as usize])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyChart {
    pub title: &'static str,
    pub viewport: Viewport,
    pub day_labels: Vec<String>,
    pub geometry: ChartGeometry,
    pub checks_total: i64,
}

impl WeeklyChart {
    pub fn build(weekly: &[WeeklyChartPoint]) -> Result<Self, GeometryError> {
        let points: Vec<ChartPoint> = weekly
            .iter()
            .map(|p| {
                ChartPoint::new(day_label(p.day))
                    .with_value(REVENUE, p.revenue)
                    .with_value(CHECKS, p.checks as f64)
            })
            .collect();

        let geometry = build_geometry(&points, &[REVENUE], WEEKLY_VIEWPORT, VerticalScale::PerSeries)?;
        let checks_total = sum_series(&points, CHECKS)?.round() as i64;

        Ok(Self {
            title: "Динамика недели",
            viewport: WEEKLY_VIEWPORT,
            day_labels: points.into_iter().map(|p| p.label).collect(),
            geometry,
            checks_total,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub layout: Layout,
    pub kpis: Vec<KpiCard>,
    pub tickets: TicketsPanel,
    pub franchise: FranchiseBalance,
    pub weekly: WeeklyChart,
    pub cost_structure: CostStructureView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<Watermark>,
}

impl DashboardView {
    pub fn assemble(
        snapshot: PortalSnapshot,
        watermark: Option<Watermark>,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            layout: Layout::builder(LayoutVariant::Portal)
                .active(Screen::Dashboard)
                .build(),
            kpis: kpi_cards(Some(&snapshot.kpis)),
            weekly: WeeklyChart::build(&snapshot.weekly)?,
            franchise: FranchiseBalance::new(Some(&snapshot.franchise)),
            tickets: TicketsPanel::new(snapshot.tickets),
            cost_structure: CostStructureView::default(),
            watermark,
        })
    }
}
