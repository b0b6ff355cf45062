use serde::Serialize;

/// Agronomic profile of a soil type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilCharacteristics {
    pub drainage: &'static str,
    pub fertility: &'static str,
    pub water_retention: &'static str,
    pub suitable_crops: &'static [&'static str],
    pub ph_range: (f64, f64),
    pub organic_matter: &'static str,
}

/// Look up the profile for a predicted soil-type label. Labels are matched
/// case-insensitively; unknown labels get a generic mixed-soil profile.
pub fn for_soil_type(label: &str) -> SoilCharacteristics {
    match label.to_lowercase().as_str() {
        "alluvial" => SoilCharacteristics {
            drainage: "good",
            fertility: "high",
            water_retention: "moderate",
            suitable_crops: &["rice", "wheat", "sugarcane", "maize"],
            ph_range: (6.0, 8.0),
            organic_matter: "medium to high",
        },
        "black" => SoilCharacteristics {
            drainage: "poor",
            fertility: "high",
            water_retention: "high",
            suitable_crops: &["cotton", "soybean", "wheat", "sugarcane"],
            ph_range: (7.0, 8.5),
            organic_matter: "high",
        },
        "red" => SoilCharacteristics {
            drainage: "good",
            fertility: "medium",
            water_retention: "low",
            suitable_crops: &["groundnut", "cotton", "maize", "sunflower"],
            ph_range: (5.5, 7.0),
            organic_matter: "low to medium",
        },
        "laterite" => SoilCharacteristics {
            drainage: "excellent",
            fertility: "low",
            water_retention: "very low",
            suitable_crops: &["cashew", "coconut", "spices"],
            ph_range: (4.5, 6.5),
            organic_matter: "low",
        },
        "desert" | "arid" => SoilCharacteristics {
            drainage: "excellent",
            fertility: "very low",
            water_retention: "very low",
            suitable_crops: &["drought tolerant crops"],
            ph_range: (7.5, 9.0),
            organic_matter: "very low",
        },
        "mountain" => SoilCharacteristics {
            drainage: "good",
            fertility: "medium",
            water_retention: "moderate",
            suitable_crops: &["temperate crops"],
            ph_range: (5.5, 7.5),
            organic_matter: "medium",
        },
        _ => SoilCharacteristics {
            drainage: "moderate",
            fertility: "medium",
            water_retention: "moderate",
            suitable_crops: &["mixed crops"],
            ph_range: (6.0, 7.5),
            organic_matter: "medium",
        },
    }
}
