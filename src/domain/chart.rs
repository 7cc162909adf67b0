// Chart geometry - scales data series into SVG viewport coordinates
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid viewport: width {width} leaves no drawable area with padding {padding}")]
    InvalidViewport { width: f64, padding: f64 },
    #[error("series '{key}' is missing from chart point {index}")]
    MissingSeries { key: String, index: usize },
    #[error("series '{key}' has a non-finite value at chart point {index}")]
    NonFiniteValue { key: String, index: usize },
    #[error("series '{key}' spans a range too wide to scale")]
    UnscalableRange { key: String },
}

/// One observation on the horizontal axis, carrying any number of named series values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    values: BTreeMap<String, f64>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.padding.is_finite();
        if !finite || self.width <= 2.0 * self.padding {
            return Err(GeometryError::InvalidViewport {
                width: self.width,
                padding: self.padding,
            });
        }
        Ok(())
    }

    fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    fn x_position(&self, index: usize, count: usize) -> f64 {
        if count == 1 {
            return self.width / 2.0;
        }
        let step = (self.width - 2.0 * self.padding) / (count - 1) as f64;
        self.padding + index as f64 * step
    }
}

/// How series on one chart share the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalScale {
    /// Each series is scaled to its own min/max.
    PerSeries,
    /// All requested series are scaled to their joint min/max.
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |bounds, v| match bounds {
            None => Some(Self { min: v, max: v }),
            Some(b) => Some(Self {
                min: b.min.min(v),
                max: b.max.max(v),
            }),
        })
    }

    /// Value span, with a flat series treated as a span of 1.
    pub fn range(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 { 1.0 } else { range }
    }

    fn y_position(&self, value: f64, viewport: &Viewport) -> f64 {
        (viewport.height - viewport.padding)
            - ((value - self.min) / self.range()) * viewport.drawable_height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGeometry {
    pub key: String,
    pub points: Vec<PlotPoint>,
    /// SVG path data: `M` to the first point, `L` to every following one.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<ValueBounds>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub series: Vec<SeriesGeometry>,
}

impl ChartGeometry {
    #[cfg(test)]
    pub fn series(&self, key: &str) -> Option<&SeriesGeometry> {
        self.series.iter().find(|s| s.key == key)
    }
}

/// Scale `points` into `viewport`, producing one polyline per series key.
///
/// Points keep their input order along the x axis. Empty input yields empty
/// series rather than an error.
pub fn build_geometry(
    points: &[ChartPoint],
    series_keys: &[&str],
    viewport: Viewport,
    scale: VerticalScale,
) -> Result<ChartGeometry, GeometryError> {
    viewport.validate()?;

    let columns = series_keys
        .iter()
        .map(|key| series_values(points, key))
        .collect::<Result<Vec<_>, _>>()?;

    let shared_bounds = match scale {
        VerticalScale::Shared => ValueBounds::of(columns.iter().flatten().copied()),
        VerticalScale::PerSeries => None,
    };

    let series = series_keys
        .iter()
        .zip(columns)
        .map(|(key, values)| {
            let bounds = shared_bounds.or_else(|| ValueBounds::of(values.iter().copied()));
            if bounds.is_some_and(|b| !b.range().is_finite()) {
                return Err(GeometryError::UnscalableRange {
                    key: key.to_string(),
                });
            }
            let plotted: Vec<PlotPoint> = match bounds {
                Some(b) => values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| PlotPoint {
                        x: viewport.x_position(i, values.len()),
                        y: b.y_position(v, &viewport),
                    })
                    .collect(),
                None => Vec::new(),
            };

            Ok(SeriesGeometry {
                key: key.to_string(),
                path: path_descriptor(&plotted),
                points: plotted,
                bounds,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartGeometry { series })
}

/// Sum of one series across all points.
pub fn sum_series(points: &[ChartPoint], key: &str) -> Result<f64, GeometryError> {
    Ok(series_values(points, key)?.into_iter().sum())
}

/// Evenly spaced horizontal grid line positions, top to bottom.
pub fn grid_lines(viewport: &Viewport, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![viewport.padding],
        _ => (0..count)
            .map(|i| {
                let ratio = i as f64 / (count - 1) as f64;
                viewport.padding + ratio * viewport.drawable_height()
            })
            .collect(),
    }
}

fn series_values(points: &[ChartPoint], key: &str) -> Result<Vec<f64>, GeometryError> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| match point.value(key) {
            Some(value) if value.is_finite() => Ok(value),
            Some(_) => Err(GeometryError::NonFiniteValue {
                key: key.to_string(),
                index,
            }),
            None => Err(GeometryError::MissingSeries {
                key: key.to_string(),
                index,
            }),
        })
        .collect()
}

fn path_descriptor(points: &[PlotPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}{} {}", if i == 0 { 'M' } else { 'L' }, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
