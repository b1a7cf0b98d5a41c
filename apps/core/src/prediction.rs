use crate::api::{ApiError, ExoplanetApi};
use crate::domain::PredictionInput;
use crate::view::{render_prediction, ResultView};
use tracing::warn;

pub const PREDICTION_ERROR_MESSAGE: &str = "Prediction failed. Please check your inputs and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionField {
    StarTemp,
    StarRadius,
    StarMass,
    OrbitalPeriod,
    TransitDepth,
}

impl PredictionField {
    pub const ALL: [Self; 5] = [
        Self::StarTemp,
        Self::StarRadius,
        Self::StarMass,
        Self::OrbitalPeriod,
        Self::TransitDepth,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::StarTemp => 0,
            Self::StarRadius => 1,
            Self::StarMass => 2,
            Self::OrbitalPeriod => 3,
            Self::TransitDepth => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StarTemp => "Star Temperature (K)",
            Self::StarRadius => "Star Radius (solar radii)",
            Self::StarMass => "Star Mass (solar masses)",
            Self::OrbitalPeriod => "Orbital Period (days)",
            Self::TransitDepth => "Transit Depth (%)",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::StarTemp => Self::StarRadius,
            Self::StarRadius => Self::StarMass,
            Self::StarMass => Self::OrbitalPeriod,
            Self::OrbitalPeriod => Self::TransitDepth,
            Self::TransitDepth => Self::StarTemp,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::StarTemp => Self::TransitDepth,
            Self::StarRadius => Self::StarTemp,
            Self::StarMass => Self::StarRadius,
            Self::OrbitalPeriod => Self::StarMass,
            Self::TransitDepth => Self::OrbitalPeriod,
        }
    }
}

/// Raw text of the five form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionForm {
    values: [String; 5],
    pub field: PredictionField,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionForm {
    pub const fn new() -> Self {
        Self {
            values: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            field: PredictionField::StarTemp,
        }
    }

    pub fn value(&self, field: PredictionField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: PredictionField, value: &str) {
        value.clone_into(&mut self.values[field.index()]);
    }

    pub fn push_char(&mut self, ch: char) {
        self.values[self.field.index()].push(ch);
    }

    pub fn pop_char(&mut self) {
        self.values[self.field.index()].pop();
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.field = PredictionField::StarTemp;
    }

    /// No range checks. Unparseable text becomes NaN and is sent as-is.
    pub fn to_input(&self) -> PredictionInput {
        let parse = |field: PredictionField| parse_field(self.value(field));
        PredictionInput {
            star_temp: parse(PredictionField::StarTemp),
            star_radius: parse(PredictionField::StarRadius),
            star_mass: parse(PredictionField::StarMass),
            orbital_period: parse(PredictionField::OrbitalPeriod),
            transit_depth: parse(PredictionField::TransitDepth),
        }
    }
}

pub fn parse_field(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionState {
    Idle,
    Loading,
    Ready(ResultView),
    Failed(String),
}

impl PredictionState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn from_result(result: Result<crate::domain::PredictionResult, ApiError>) -> Self {
        match result {
            Ok(result) => Self::Ready(render_prediction(&result)),
            Err(error) => {
                warn!(%error, "prediction request failed");
                Self::Failed(PREDICTION_ERROR_MESSAGE.to_string())
            }
        }
    }
}

/// Moves `state` through Loading to Ready or Failed.
pub async fn submit<A: ExoplanetApi>(
    state: &mut PredictionState,
    api: &A,
    input: &PredictionInput,
) {
    *state = PredictionState::Loading;
    let result = api.predict(input).await;
    *state = PredictionState::from_result(result);
}
