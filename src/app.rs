use crate::bridge::{self, PlaceholderModel};
use crate::characteristics;
use crate::config::Settings;
use crate::envelope::PredictionResult;
use crate::recommendation::RecommendationService;
use crate::soil::SoilData;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(
        "usage: crop_prediction <command> [args...]\n\
         commands:\n  \
         predict_crop <json>   - recommend a crop for a soil sample\n  \
         predict_soil <json>   - classify the soil type of a sample\n  \
         predict_image <path>  - classify soil type from a photo"
    )]
    Usage,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("invalid soil data: {0}")]
    InvalidSoilData(#[from] serde_json::Error),
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Dispatch a prediction command and print the envelope as JSON on stdout.
pub fn run(config: Settings, args: &[String]) -> Result<(), AppError> {
    let command = args.first().ok_or(AppError::Usage)?;

    let envelope = match command.as_str() {
        "predict_crop" => {
            let sample = parse_sample(args.get(1), "predict_crop")?;
            let service = RecommendationService::new(
                PlaceholderModel,
                config.recommendation.confidence_threshold,
            );
            service.recommend_crop(&sample)
        }
        "predict_soil" => {
            let sample = parse_sample(args.get(1), "predict_soil")?;
            let envelope = bridge::predict_soil_type(&sample.to_feature_map());
            log_soil_profile(&envelope);
            envelope
        }
        "predict_image" => {
            let path = args
                .get(1)
                .ok_or(AppError::MissingArgument("predict_image"))?;
            let envelope = bridge::predict_from_image(Path::new(path));
            log_soil_profile(&envelope);
            envelope
        }
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    let json = serde_json::to_string_pretty(&envelope).map_err(AppError::Encode)?;
    println!("{}", json);

    Ok(())
}

fn parse_sample(arg: Option<&String>, command: &'static str) -> Result<SoilData, AppError> {
    let raw = arg.ok_or(AppError::MissingArgument(command))?;
    Ok(serde_json::from_str(raw)?)
}

fn log_soil_profile(envelope: &PredictionResult) {
    let profile = characteristics::for_soil_type(&envelope.result);
    tracing::debug!(
        soil_type = %envelope.result,
        drainage = profile.drainage,
        fertility = profile.fertility,
        water_retention = profile.water_retention,
        "soil profile"
    );
}
