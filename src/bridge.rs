use crate::envelope::PredictionResult;
use std::collections::HashMap;
use std::path::Path;

/// Named soil and environmental measurements, e.g. "n", "ph", "rainfall".
pub type FeatureMap = HashMap<String, f64>;

const CROP_LABEL: &str = "rice";
const CROP_CONFIDENCE: f64 = 0.85;
const SOIL_LABEL: &str = "Alluvial";
const SOIL_CONFIDENCE: f64 = 0.82;
const IMAGE_SOIL_LABEL: &str = "Black";
const IMAGE_SOIL_CONFIDENCE: f64 = 0.78;

/// Recommend a crop for the given soil and environmental features.
///
/// The trained crop classifier is not wired in yet; until it is, every call
/// returns the same fixed label. Inputs are accepted but ignored.
pub fn predict_crop(_features: &FeatureMap) -> PredictionResult {
    PredictionResult::ok(CROP_LABEL, CROP_CONFIDENCE)
}

/// Classify the soil type of a sample from its measured parameters.
///
/// Placeholder until the tabular soil classifier is wired in.
pub fn predict_soil_type(_features: &FeatureMap) -> PredictionResult {
    PredictionResult::ok(SOIL_LABEL, SOIL_CONFIDENCE)
}

/// Classify the soil type from a photo of the soil.
///
/// Placeholder until the image classifier is wired in. The path is not
/// opened or checked for existence.
pub fn predict_from_image(_image_path: &Path) -> PredictionResult {
    PredictionResult::ok(IMAGE_SOIL_LABEL, IMAGE_SOIL_CONFIDENCE)
}

/// Seam between callers and whatever produces predictions, so services can
/// be exercised against mock models.
pub trait SoilModel: Send + Sync + 'static {
    fn predict_crop(&self, features: &FeatureMap) -> PredictionResult;
    fn predict_soil_type(&self, features: &FeatureMap) -> PredictionResult;
    fn predict_from_image(&self, image_path: &Path) -> PredictionResult;
}

/// Stand-in model backed by the placeholder operations above.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderModel;

impl SoilModel for PlaceholderModel {
    fn predict_crop(&self, features: &FeatureMap) -> PredictionResult {
        predict_crop(features)
    }

    fn predict_soil_type(&self, features: &FeatureMap) -> PredictionResult {
        predict_soil_type(features)
    }

    fn predict_from_image(&self, image_path: &Path) -> PredictionResult {
        predict_from_image(image_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features() -> FeatureMap {
        FeatureMap::from([
            ("n".to_string(), 90.0),
            ("ph".to_string(), 6.5),
            ("rainfall".to_string(), 1100.0),
        ])
    }

    #[test]
    fn test_predict_crop_ignores_input() {
        let expected = PredictionResult::ok("rice", 0.85);

        assert_eq!(predict_crop(&FeatureMap::new()), expected);
        assert_eq!(predict_crop(&sample_features()), expected);
    }

    #[test]
    fn test_predict_soil_type_ignores_input() {
        let expected = PredictionResult::ok("Alluvial", 0.82);

        assert_eq!(predict_soil_type(&FeatureMap::new()), expected);
        assert_eq!(predict_soil_type(&sample_features()), expected);
    }

    #[test]
    fn test_predict_from_image_ignores_path() {
        let expected = PredictionResult::ok("Black", 0.78);

        assert_eq!(predict_from_image(Path::new("")), expected);
        assert_eq!(predict_from_image(Path::new("/no/such/photo.jpg")), expected);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let features = sample_features();
        let first = predict_crop(&features);

        for _ in 0..10 {
            assert_eq!(predict_crop(&features), first);
        }
    }

    #[test]
    fn test_concurrent_calls_match_sequential() {
        let sequential = predict_crop(&sample_features());

        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| predict_crop(&sample_features())))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), sequential);
        }
    }

    #[test]
    fn test_placeholder_model_delegates() {
        let model = PlaceholderModel;

        assert_eq!(
            model.predict_crop(&FeatureMap::new()),
            predict_crop(&FeatureMap::new())
        );
        assert_eq!(
            model.predict_soil_type(&FeatureMap::new()),
            predict_soil_type(&FeatureMap::new())
        );
        assert_eq!(
            model.predict_from_image(Path::new("soil.png")),
            predict_from_image(Path::new("soil.png"))
        );
    }
}
