//! Declarative registry configuration
//!
//! Basic units and conversions can be loaded from JSON instead of being
//! added one call at a time:
//!
//! ```json
//! {
//!   "name": "si",
//!   "basic": ["m", "s"],
//!   "conversions": [
//!     { "from": "m", "to": "km", "factor": 1000 },
//!     { "from": "s", "to": "h", "factor": 3600 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use unitsafe_core::UnitError;
use crate::UnitsBuilder;

/// One conversion: `from * factor = to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionDef {
    pub from: String,
    pub to: String,
    pub factor: f64,
}

/// Basic units and conversions of a unit system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub name: String,
    #[serde(default)]
    pub basic: Vec<String>,
    /// Applied in order, so later entries may build on earlier ones
    #[serde(default)]
    pub conversions: Vec<ConversionDef>,
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        serde_json::from_str(json).map_err(|e| UnitError::Config(e.to_string()))
    }
}

impl UnitsBuilder {
    /// Start a unit system populated from a configuration
    pub fn from_config(config: &RegistryConfig) -> Result<Self, UnitError> {
        let mut builder = UnitsBuilder::new(&config.name);
        for name in &config.basic {
            builder.add_basic(name)?;
        }
        for conv in &config.conversions {
            builder.add_conversion(&conv.from, &conv.to, conv.factor)?;
        }
        Ok(builder)
    }
}
