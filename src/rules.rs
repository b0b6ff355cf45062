//! Deterministic agronomy rules used when no trained model answer is
//! trustworthy.

use crate::soil::SoilData;
use std::ops::RangeInclusive;

/// One candidate label with its confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLabel {
    pub label: &'static str,
    pub confidence: f64,
}

impl RankedLabel {
    fn new(label: &'static str, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Rank crop candidates for a sample, best first. Never empty.
///
/// Branches are checked most-specific first; the runner-ups trail the top
/// candidate at fixed confidence margins.
pub fn recommend_crops(sample: &SoilData) -> Vec<RankedLabel> {
    let top = if sample.rainfall > 1500.0 && sample.humidity > 80.0 && sample.temperature > 20.0 {
        RankedLabel::new("rice", 0.88)
    } else if sample.temperature > 30.0 && sample.rainfall < 800.0 && sample.ph > 6.5 {
        RankedLabel::new("cotton", 0.82)
    } else if sample.temperature < 25.0 && sample.rainfall < 700.0 && sample.ph > 6.0 {
        RankedLabel::new("wheat", 0.85)
    } else if sample.temperature > 25.0 && sample.rainfall > 600.0 && sample.n > 80.0 {
        RankedLabel::new("maize", 0.80)
    } else if sample.rainfall > 700.0 && sample.humidity > 70.0 {
        RankedLabel::new("sugarcane", 0.78)
    } else {
        RankedLabel::new("maize", 0.75)
    };

    let mut ranked = vec![top.clone()];
    for (label, margin) in [("wheat", 0.1), ("rice", 0.15), ("maize", 0.2)] {
        if label != top.label {
            ranked.push(RankedLabel::new(label, top.confidence - margin));
        }
    }

    ranked
}

/// Classify the soil type from pH, conductivity and organic carbon.
/// Missing lab values fall back to typical field readings.
pub fn classify_soil(sample: &SoilData) -> RankedLabel {
    let ph = sample.ph;
    let ec = sample.ec.unwrap_or(1.0);
    let oc = sample.oc.unwrap_or(0.8);

    if ph < 6.0 && oc < 0.6 {
        RankedLabel::new("red", 0.78)
    } else if ph > 7.5 && ec > 1.5 {
        RankedLabel::new("black", 0.82)
    } else if (6.0..=7.5).contains(&ph) && oc > 0.8 {
        RankedLabel::new("alluvial", 0.85)
    } else if ph < 5.5 && oc < 0.4 {
        RankedLabel::new("laterite", 0.75)
    } else {
        RankedLabel::new("alluvial", 0.70)
    }
}

struct OptimalRanges {
    temperature: RangeInclusive<f64>,
    rainfall: RangeInclusive<f64>,
    humidity: RangeInclusive<f64>,
    ph: RangeInclusive<f64>,
}

fn optimal_ranges(crop: &str) -> OptimalRanges {
    match crop {
        "rice" => OptimalRanges {
            temperature: 20.0..=35.0,
            rainfall: 1000.0..=2500.0,
            humidity: 70.0..=90.0,
            ph: 5.5..=7.0,
        },
        "wheat" => OptimalRanges {
            temperature: 10.0..=25.0,
            rainfall: 300.0..=800.0,
            humidity: 50.0..=70.0,
            ph: 6.0..=7.5,
        },
        "cotton" => OptimalRanges {
            temperature: 21.0..=35.0,
            rainfall: 500.0..=1000.0,
            humidity: 50.0..=80.0,
            ph: 5.8..=8.2,
        },
        // maize ranges double as the default for crops without a table entry
        _ => OptimalRanges {
            temperature: 18.0..=32.0,
            rainfall: 500.0..=1200.0,
            humidity: 60.0..=80.0,
            ph: 5.8..=7.0,
        },
    }
}

/// Score how well a sample matches a crop's optimal growing ranges.
/// Out-of-range parameters earn partial credit rather than zero, since a
/// single miss rarely rules a crop out.
pub fn suitability_score(crop: &str, sample: &SoilData) -> f64 {
    let ranges = optimal_ranges(crop);

    let scores = [
        if ranges.temperature.contains(&sample.temperature) {
            1.0
        } else {
            0.5
        },
        if ranges.rainfall.contains(&sample.rainfall) {
            1.0
        } else {
            0.6
        },
        if ranges.humidity.contains(&sample.humidity) {
            1.0
        } else {
            0.7
        },
        if ranges.ph.contains(&sample.ph) { 1.0 } else { 0.8 },
    ];

    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::tests::field_sample;

    #[test]
    fn test_very_wet_humid_sample_ranks_rice_first() {
        let mut sample = field_sample();
        sample.rainfall = 1600.0;
        sample.humidity = 82.0;

        let ranked = recommend_crops(&sample);

        assert_eq!(ranked[0], RankedLabel::new("rice", 0.88));
        assert_eq!(ranked[1].label, "wheat");
        assert!((ranked[1].confidence - 0.78).abs() < 1e-9);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_hot_dry_sample_ranks_cotton_first() {
        let mut sample = field_sample();
        sample.temperature = 31.0;
        sample.rainfall = 450.0;
        sample.ph = 6.8;

        assert_eq!(recommend_crops(&sample)[0], RankedLabel::new("cotton", 0.82));
    }

    #[test]
    fn test_cool_dry_sample_ranks_wheat_first() {
        let mut sample = field_sample();
        sample.temperature = 18.0;
        sample.rainfall = 500.0;
        sample.humidity = 60.0;

        assert_eq!(recommend_crops(&sample)[0], RankedLabel::new("wheat", 0.85));
    }

    #[test]
    fn test_warm_wet_nitrogen_rich_sample_ranks_maize_first() {
        let mut sample = field_sample();
        sample.temperature = 26.0;
        sample.rainfall = 900.0;
        sample.humidity = 65.0;
        sample.n = 90.0;

        let ranked = recommend_crops(&sample);

        assert_eq!(ranked[0], RankedLabel::new("maize", 0.80));
        // the top candidate is not repeated among the runner-ups
        assert_eq!(ranked.len(), 3);
        assert!(ranked[1..].iter().all(|candidate| candidate.label != "maize"));
    }

    #[test]
    fn test_low_nitrogen_wet_sample_ranks_sugarcane_first() {
        let mut sample = field_sample();
        sample.temperature = 26.0;
        sample.rainfall = 900.0;
        sample.humidity = 75.0;
        sample.n = 60.0;

        assert_eq!(recommend_crops(&sample)[0], RankedLabel::new("sugarcane", 0.78));
    }

    #[test]
    fn test_mild_wet_sample_ranks_sugarcane_first() {
        let mut sample = field_sample();
        sample.temperature = 24.0;
        sample.rainfall = 800.0;
        sample.humidity = 75.0;

        let ranked = recommend_crops(&sample);

        assert_eq!(ranked[0], RankedLabel::new("sugarcane", 0.78));
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn test_unremarkable_sample_defaults_to_maize() {
        let mut sample = field_sample();
        sample.temperature = 26.0;
        sample.rainfall = 550.0;
        sample.humidity = 60.0;

        assert_eq!(recommend_crops(&sample)[0], RankedLabel::new("maize", 0.75));
    }

    #[test]
    fn test_acidic_low_carbon_sample_classifies_as_red() {
        let mut sample = field_sample();
        sample.ph = 5.8;
        sample.oc = Some(0.5);

        assert_eq!(classify_soil(&sample), RankedLabel::new("red", 0.78));
    }

    #[test]
    fn test_alkaline_conductive_sample_classifies_as_black() {
        let mut sample = field_sample();
        sample.ph = 7.8;
        sample.ec = Some(1.8);

        assert_eq!(classify_soil(&sample).label, "black");
    }

    #[test]
    fn test_missing_lab_values_fall_back_to_alluvial() {
        // ph 6.5 with the default oc of 0.8 misses every specific branch
        assert_eq!(classify_soil(&field_sample()), RankedLabel::new("alluvial", 0.70));
    }

    #[test]
    fn test_neutral_rich_sample_classifies_as_alluvial() {
        let mut sample = field_sample();
        sample.oc = Some(1.1);

        assert_eq!(classify_soil(&sample), RankedLabel::new("alluvial", 0.85));
    }

    #[test]
    fn test_suitability_is_perfect_inside_all_ranges() {
        let mut sample = field_sample();
        sample.temperature = 25.0;
        sample.rainfall = 1500.0;
        sample.humidity = 80.0;
        sample.ph = 6.0;

        assert_eq!(suitability_score("rice", &sample), 1.0);
    }

    #[test]
    fn test_suitability_gives_partial_credit_outside_ranges() {
        let mut sample = field_sample();
        sample.temperature = 5.0; // 0.5
        sample.rainfall = 100.0; // 0.6
        sample.humidity = 30.0; // 0.7
        sample.ph = 9.0; // 0.8

        let score = suitability_score("wheat", &sample);

        assert!((score - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_crop_scores_against_default_ranges() {
        let mut sample = field_sample();
        sample.temperature = 24.0;
        sample.rainfall = 800.0;
        sample.humidity = 70.0;
        sample.ph = 6.5;

        assert_eq!(suitability_score("jute", &sample), 1.0);
    }
}
