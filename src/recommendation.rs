use crate::bridge::SoilModel;
use crate::envelope::PredictionResult;
use crate::rules;
use crate::soil::SoilData;

/// Runs samples through a model and falls back to the rule engine when the
/// model fails or answers below the configured confidence threshold.
pub struct RecommendationService<M: SoilModel> {
    model: M,
    confidence_threshold: f64,
}

impl<M: SoilModel> RecommendationService<M> {
    pub fn new(model: M, confidence_threshold: f64) -> Self {
        Self {
            model,
            confidence_threshold,
        }
    }

    /// Model-first crop recommendation. When the rule engine answers
    /// instead, its suitability score is logged at info level only; the
    /// envelope has no field to carry it.
    pub fn recommend_crop(&self, sample: &SoilData) -> PredictionResult {
        let prediction = self.model.predict_crop(&sample.to_feature_map());
        if prediction.success && prediction.confidence > self.confidence_threshold {
            return prediction;
        }

        tracing::warn!(
            success = prediction.success,
            confidence = prediction.confidence,
            "model answer not trustworthy, using rule-based recommendation"
        );

        let ranked = rules::recommend_crops(sample);
        let top = &ranked[0];
        let suitability = rules::suitability_score(top.label, sample);
        tracing::info!(crop = top.label, suitability, "rule-based recommendation");

        PredictionResult::ok(top.label, top.confidence)
    }

    pub fn classify_soil(&self, sample: &SoilData) -> PredictionResult {
        let prediction = self.model.predict_soil_type(&sample.to_feature_map());
        if prediction.success && prediction.confidence > self.confidence_threshold {
            return prediction;
        }

        tracing::warn!(
            success = prediction.success,
            confidence = prediction.confidence,
            "model answer not trustworthy, using rule-based classification"
        );

        let fallback = rules::classify_soil(sample);
        PredictionResult::ok(fallback.label, fallback.confidence)
    }
}
