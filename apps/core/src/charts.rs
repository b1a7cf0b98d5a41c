use crate::domain::{ChartData, ChartSeries};

pub const SIZE_BUCKETS: [&str; 5] = [
    "Earth-like",
    "Super-Earth",
    "Neptune-like",
    "Jupiter-like",
    "Unknown",
];

pub const DISTANCE_BUCKETS: [&str; 5] = ["<50 ly", "50-100 ly", "100-500 ly", ">500 ly", "Unknown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Timeline,
    Methods,
    Sizes,
    Distances,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Timeline, Self::Methods, Self::Sizes, Self::Distances];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Timeline),
            1 => Some(Self::Methods),
            2 => Some(Self::Sizes),
            3 => Some(Self::Distances),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Timeline => "Discoveries by Year",
            Self::Methods => "Discovery Methods",
            Self::Sizes => "Planet Sizes",
            Self::Distances => "Distance from Earth",
        }
    }

    pub const fn tab_title(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Methods => "Methods",
            Self::Sizes => "Sizes",
            Self::Distances => "Distances",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartView {
    pub kind: ChartKind,
    pub bars: Vec<(String, u64)>,
}

impl ChartView {
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|(_, value)| *value).max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.bars.iter().map(|(_, value)| *value).sum()
    }
}

pub fn chart_view(data: &ChartData, kind: ChartKind) -> ChartView {
    let bars = match kind {
        ChartKind::Timeline => by_year(&data.timeline),
        ChartKind::Methods => by_count(&data.methods),
        ChartKind::Sizes => by_buckets(&data.sizes, &SIZE_BUCKETS),
        ChartKind::Distances => by_buckets(&data.distances, &DISTANCE_BUCKETS),
    };
    ChartView { kind, bars }
}

fn by_year(series: &ChartSeries) -> Vec<(String, u64)> {
    let mut bars: Vec<(String, u64)> = series
        .iter()
        .map(|(label, value)| (label.clone(), *value))
        .collect();
    bars.sort_by_key(|(label, _)| label.parse::<i32>().unwrap_or(i32::MAX));
    bars
}

fn by_count(series: &ChartSeries) -> Vec<(String, u64)> {
    let mut bars: Vec<(String, u64)> = series
        .iter()
        .map(|(label, value)| (label.clone(), *value))
        .collect();
    bars.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    bars
}

/// Known buckets first in their fixed order, then anything unexpected.
fn by_buckets(series: &ChartSeries, order: &[&str]) -> Vec<(String, u64)> {
    let mut bars: Vec<(String, u64)> = order
        .iter()
        .filter_map(|label| series.get(*label).map(|value| ((*label).to_string(), *value)))
        .collect();
    bars.extend(
        series
            .iter()
            .filter(|(label, _)| !order.contains(&label.as_str()))
            .map(|(label, value)| (label.clone(), *value)),
    );
    bars
}
