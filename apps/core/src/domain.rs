use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page size used by every list request.
pub const PAGE_SIZE: u32 = 12;

/// One record from the exoplanet archive, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    #[serde(default = "unknown_name")]
    pub name: String,
    pub hostname: Option<String>,
    pub discoverymethod: Option<String>,
    pub disc_year: Option<i32>,
    /// Distance in light-years.
    pub sy_dist: Option<f64>,
    /// Radius in Earth radii.
    pub pl_rade: Option<f64>,
    /// Mass in Earth masses.
    pub pl_bmasse: Option<f64>,
    /// Orbital period in days.
    pub pl_orbper: Option<f64>,
    /// Host star effective temperature in Kelvin.
    pub st_teff: Option<f64>,
    /// Host star radius in solar radii.
    pub st_rad: Option<f64>,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

impl Exoplanet {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostname: None,
            discoverymethod: None,
            disc_year: None,
            sy_dist: None,
            pl_rade: None,
            pl_bmasse: None,
            pl_orbper: None,
            st_teff: None,
            st_rad: None,
        }
    }

    pub fn planet_type(&self) -> PlanetType {
        PlanetType::classify(self.pl_rade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetType {
    EarthLike,
    SuperEarth,
    NeptuneLike,
    JupiterLike,
    Unknown,
}

impl PlanetType {
    /// Half-open, lower-inclusive radius buckets.
    pub fn classify(radius: Option<f64>) -> Self {
        let Some(radius) = radius else {
            return Self::Unknown;
        };

        if radius < 1.25 {
            Self::EarthLike
        } else if radius < 2.0 {
            Self::SuperEarth
        } else if radius < 6.0 {
            Self::NeptuneLike
        } else {
            Self::JupiterLike
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarthLike => "Earth-like",
            Self::SuperEarth => "Super-Earth",
            Self::NeptuneLike => "Neptune-like",
            Self::JupiterLike => "Jupiter-like",
            Self::Unknown => "Unknown Type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Habitability {
    Habitable,
    Hot,
    Cold,
}

impl Habitability {
    pub const ALL: [Self; 3] = [Self::Habitable, Self::Hot, Self::Cold];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Habitable),
            1 => Some(Self::Hot),
            2 => Some(Self::Cold),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Habitable => "Habitable size",
            Self::Hot => "Too small (hot)",
            Self::Cold => "Too large (cold)",
        }
    }

    pub fn admits(self, radius: f64) -> bool {
        match self {
            Self::Habitable => (0.5..=1.5).contains(&radius),
            Self::Hot => radius < 0.5,
            Self::Cold => radius > 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_exoplanets: u64,
    pub habitable_exoplanets: u64,
    pub recent_discoveries: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetPage {
    pub exoplanets: Vec<Exoplanet>,
    pub has_more: bool,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl ExoplanetPage {
    pub const fn new(exoplanets: Vec<Exoplanet>, has_more: bool) -> Self {
        Self {
            exoplanets,
            has_more,
            page: None,
            limit: None,
            total: None,
        }
    }
}

/// Label to count. Keys arrive as JSON object keys, so years are strings too.
pub type ChartSeries = BTreeMap<String, u64>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub timeline: ChartSeries,
    #[serde(default)]
    pub methods: ChartSeries,
    #[serde(default)]
    pub sizes: ChartSeries,
    #[serde(default)]
    pub distances: ChartSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub star_temp: f64,
    pub star_radius: f64,
    pub star_mass: f64,
    pub orbital_period: f64,
    pub transit_depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
    #[serde(default)]
    pub planet_type: Option<String>,
    #[serde(default)]
    pub habitable_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub ml_model_loaded: bool,
    #[serde(default)]
    pub cache_active: bool,
}
