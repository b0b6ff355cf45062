use crate::bridge::FeatureMap;
use serde::{Deserialize, Serialize};

/// A soil sample with the measurements the models are trained on.
///
/// The macronutrients and climate fields are always collected; the trace
/// elements are only available when the sample went through a lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilData {
    /// Nitrogen
    pub n: f64,
    /// Phosphorus
    pub p: f64,
    /// Potassium
    pub k: f64,
    pub ph: f64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Humidity percentage
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    /// Electrical conductivity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec: Option<f64>,
    /// Organic carbon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oc: Option<f64>,
    /// Sulfur
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
    /// Zinc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zn: Option<f64>,
    /// Iron
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fe: Option<f64>,
    /// Copper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cu: Option<f64>,
    /// Manganese
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mn: Option<f64>,
    /// Boron
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

impl SoilData {
    /// Flatten the sample into the feature mapping the models accept.
    /// Absent trace elements are omitted rather than defaulted.
    pub fn to_feature_map(&self) -> FeatureMap {
        let mut features = FeatureMap::from([
            ("n".to_string(), self.n),
            ("p".to_string(), self.p),
            ("k".to_string(), self.k),
            ("ph".to_string(), self.ph),
            ("temperature".to_string(), self.temperature),
            ("humidity".to_string(), self.humidity),
            ("rainfall".to_string(), self.rainfall),
        ]);

        let optionals = [
            ("ec", self.ec),
            ("oc", self.oc),
            ("s", self.s),
            ("zn", self.zn),
            ("fe", self.fe),
            ("cu", self.cu),
            ("mn", self.mn),
            ("b", self.b),
        ];
        for (name, value) in optionals {
            if let Some(value) = value {
                features.insert(name.to_string(), value);
            }
        }

        features
    }
}
