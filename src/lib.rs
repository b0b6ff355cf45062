mod app;
mod bridge;
mod characteristics;
mod envelope;
mod recommendation;
mod rules;
mod soil;

pub mod config;

pub use app::{run, AppError};
pub use bridge::{
    predict_crop, predict_from_image, predict_soil_type, FeatureMap, PlaceholderModel, SoilModel,
};
pub use characteristics::{for_soil_type, SoilCharacteristics};
pub use envelope::PredictionResult;
pub use recommendation::RecommendationService;
pub use rules::{classify_soil, recommend_crops, suitability_score, RankedLabel};
pub use soil::SoilData;
