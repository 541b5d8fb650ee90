// src/model/reaction.rs
//
// Response shape of the "balance reaction" reasoning-API request. The
// schema is enforced server-side; everything optional here is optional
// in the schema too, so a sparse-but-valid payload still parses.

use serde::{Deserialize, Serialize};

/// Per-element atom count before/after balancing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCount {
    pub symbol: String,
    pub before: f64,
    pub after: f64,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thermodynamics {
    /// ΔH in kJ/mol; the model occasionally omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enthalpy_change: Option<f64>,
    pub is_exothermic: bool,
    /// 0-1 scale meant for visualization intensity.
    pub energy_intensity: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub melting_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boiling_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solubility: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicInsights {
    #[serde(default)]
    pub bonding_type: String,
    #[serde(default)]
    pub molecular_weight: String,
    #[serde(default)]
    pub geometry: String,
}

/// Everything the API reports about one product compound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundDetails {
    pub formula: String,
    pub name: String,
    /// e.g. "Baking Soda", "Table Salt".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    pub description: String,
    #[serde(default)]
    pub physical_properties: PhysicalProperties,
    #[serde(default)]
    pub atomic_insights: AtomicInsights,
    #[serde(default)]
    pub history: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancedReaction {
    #[serde(default)]
    pub balanced_equation: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub reaction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub element_counts: Vec<ElementCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermodynamics: Option<Thermodynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_details: Option<Vec<CompoundDetails>>,
    /// Set by the model itself when it could not process the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BalancedReaction {
    pub fn is_failure(&self) -> bool {
        self.error.as_deref().map(|e| !e.is_empty()).unwrap_or(false)
            || self.balanced_equation.is_empty()
    }
}
