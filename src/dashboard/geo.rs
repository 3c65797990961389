// src/dashboard/geo.rs
//
// Region names from a GeoJSON FeatureCollection. Only `features[].properties`
// is read; geometry is left to whatever draws the map.

use std::{collections::HashSet, error::Error, fs, path::Path};

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeoReference {
    names: HashSet<String>,
}

impl GeoReference {
    pub fn load(path: &Path, name_key: &str) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("GeoJSON {}: {e}", path.display()))?;
        let geo = Self::from_json_str(&text, name_key)?;
        logf!("Geo: {} region name(s) from {}", geo.len(), path.display());
        Ok(geo)
    }

    pub fn from_json_str(text: &str, name_key: &str) -> Result<Self, Box<dyn Error>> {
        let fc: FeatureCollection = serde_json::from_str(text)?;
        let names: HashSet<String> = fc
            .features
            .iter()
            .filter_map(|f| f.properties.as_ref()?.get(name_key)?.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if names.is_empty() {
            return Err(format!("GeoJSON has no features with a '{name_key}' property").into());
        }
        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool { self.names.contains(name) }
    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }
}
