// src/services/reasoning.rs
//
// Thin client for the generative reasoning API. The repository supplies
// prompts and JSON response schemas; all chemistry reasoning happens on
// the other side of this boundary. Malformed or empty responses surface
// as errors, never as renderer crashes.

use crate::model::geometry::MolecularGeometry;
use crate::model::reaction::BalancedReaction;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fmt;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug)]
pub enum ReasoningError {
    Http(reqwest::Error),
    Api { status: u16, message: String },
    EmptyResponse,
    Malformed(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ReasoningError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReasoningError::Http(e) => write!(f, "reasoning API request failed: {}", e),
            ReasoningError::Api { status, message } => {
                write!(f, "reasoning API returned HTTP {}: {}", status, message)
            }
            ReasoningError::EmptyResponse => {
                write!(f, "reasoning API returned no usable candidate text")
            }
            ReasoningError::Malformed(e) => {
                write!(f, "reasoning API payload is not valid JSON: {}", e)
            }
            ReasoningError::Invalid(msg) => write!(f, "reasoning API payload rejected: {}", msg),
        }
    }
}

impl std::error::Error for ReasoningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReasoningError::Http(e) => Some(e),
            ReasoningError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReasoningError {
    fn from(e: reqwest::Error) -> Self {
        ReasoningError::Http(e)
    }
}

pub struct ReasoningClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl ReasoningClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        ReasoningClient {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Endpoint override, mainly for tests against a local server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: Value,
    ) -> Result<T, ReasoningError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReasoningError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let envelope: Value = response.json().await?;
        let text = extract_candidate_text(&envelope)?;
        serde_json::from_str(text).map_err(ReasoningError::Malformed)
    }

    /// "Balance reaction" request: free-text reactants in, balanced
    /// equation with per-element counts, thermodynamics and product
    /// details out.
    pub async fn balance_reaction(
        &self,
        reactants: &str,
    ) -> Result<BalancedReaction, ReasoningError> {
        let prompt = format!(
            "ChemLab AI: Process reactants \"{}\".\n\
             1. Balance the equation.\n\
             2. Classify reaction.\n\
             3. For EVERY product, provide:\n\
                - Scientific name and formula.\n\
                - Common name if available (e.g., \"Baking Soda\", \"Table Salt\", \"Quicklime\").\n\
                - Physical properties (Melting, Boiling, Density, Solubility).\n\
                - Atomic insights (Bonding type, MW, Geometry name).\n\
                - Brief historical/industrial significance.\n\
             4. Provide Enthalpy (dH) in kJ/mol.\n\
             Return valid JSON.",
            reactants
        );
        self.generate(&prompt, reaction_schema()).await
    }

    /// "Molecular geometry" request: free-text species name in, atom
    /// coordinates (roughly [-3, 3]) and bond index pairs out. An empty
    /// or inconsistent geometry is rejected here so the renderer only
    /// ever sees drawable data.
    pub async fn molecular_geometry(
        &self,
        query: &str,
    ) -> Result<MolecularGeometry, ReasoningError> {
        let prompt = format!(
            "Return 3D molecular geometry for \"{}\".\n\
             Provide accurate VSEPR-based coordinates.\n\
             Ensure atoms are clearly spaced (coords between -3 and 3).\n\
             Include all chemical bonds.",
            query
        );
        let geometry: MolecularGeometry = self.generate(&prompt, geometry_schema()).await?;
        geometry.validate().map_err(ReasoningError::Invalid)?;
        Ok(geometry)
    }
}

/// Pulls the schema-constrained JSON text out of a generateContent
/// envelope.
fn extract_candidate_text(envelope: &Value) -> Result<&str, ReasoningError> {
    envelope["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or(ReasoningError::EmptyResponse)
}

fn reaction_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "balancedEquation": { "type": "STRING" },
            "product": { "type": "STRING" },
            "reactionType": { "type": "STRING" },
            "explanation": { "type": "STRING" },
            "elementCounts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "symbol": { "type": "STRING" },
                        "before": { "type": "NUMBER" },
                        "after": { "type": "NUMBER" },
                        "isBalanced": { "type": "BOOLEAN" }
                    },
                    "required": ["symbol", "before", "after", "isBalanced"]
                }
            },
            "thermodynamics": {
                "type": "OBJECT",
                "properties": {
                    "enthalpyChange": { "type": "NUMBER" },
                    "isExothermic": { "type": "BOOLEAN" },
                    "energyIntensity": { "type": "NUMBER" },
                    "description": { "type": "STRING" }
                },
                "required": ["isExothermic", "energyIntensity", "description"]
            },
            "productDetails": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "formula": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "commonName": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "physicalProperties": {
                            "type": "OBJECT",
                            "properties": {
                                "meltingPoint": { "type": "STRING" },
                                "boilingPoint": { "type": "STRING" },
                                "density": { "type": "STRING" },
                                "solubility": { "type": "STRING" }
                            }
                        },
                        "atomicInsights": {
                            "type": "OBJECT",
                            "properties": {
                                "bondingType": { "type": "STRING" },
                                "molecularWeight": { "type": "STRING" },
                                "geometry": { "type": "STRING" }
                            }
                        },
                        "history": { "type": "STRING" }
                    },
                    "required": ["formula", "name", "description",
                                 "physicalProperties", "atomicInsights", "history"]
                }
            },
            "error": { "type": "STRING" }
        },
        "required": ["balancedEquation", "product", "reactionType",
                     "elementCounts", "thermodynamics", "productDetails"]
    })
}

fn geometry_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "formula": { "type": "STRING" },
            "description": { "type": "STRING" },
            "atoms": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "symbol": { "type": "STRING" },
                        "x": { "type": "NUMBER" },
                        "y": { "type": "NUMBER" },
                        "z": { "type": "NUMBER" }
                    }
                }
            },
            "bonds": {
                "type": "ARRAY",
                "items": { "type": "ARRAY", "items": { "type": "NUMBER" } }
            }
        },
        "required": ["name", "formula", "atoms", "bonds"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
    }

    #[test]
    fn test_extracts_candidate_text() {
        let env = envelope("{\"name\":\"Water\"}");
        assert_eq!(extract_candidate_text(&env).unwrap(), "{\"name\":\"Water\"}");
    }

    #[test]
    fn test_missing_candidates_is_empty_response() {
        let env = json!({ "candidates": [] });
        assert!(matches!(
            extract_candidate_text(&env),
            Err(ReasoningError::EmptyResponse)
        ));
        assert!(matches!(
            extract_candidate_text(&envelope("")),
            Err(ReasoningError::EmptyResponse)
        ));
    }

    #[test]
    fn test_payload_roundtrip_through_envelope() {
        let payload = r#"{
            "name": "Water", "formula": "H2O",
            "atoms": [
                {"symbol": "O", "x": 0.0, "y": 0.4, "z": 0.0},
                {"symbol": "H", "x": -1.2, "y": -0.5, "z": 0.0},
                {"symbol": "H", "x": 1.2, "y": -0.5, "z": 0.0}
            ],
            "bonds": [[0, 1], [0, 2]]
        }"#;
        let env = envelope(payload);
        let text = extract_candidate_text(&env).unwrap();
        let geometry: MolecularGeometry = serde_json::from_str(text).unwrap();
        assert!(geometry.validate().is_ok());
        assert_eq!(geometry.atoms.len(), 3);
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        let env = envelope("not json");
        let text = extract_candidate_text(&env).unwrap();
        let parsed: Result<MolecularGeometry, _> = serde_json::from_str(text);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_schemas_name_their_required_fields() {
        let reaction = reaction_schema();
        let required: Vec<&str> = reaction["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"balancedEquation"));
        assert!(required.contains(&"thermodynamics"));

        let geometry = geometry_schema();
        assert!(geometry["properties"]["atoms"].is_object());
        assert!(geometry["properties"]["bonds"].is_object());
    }
}
