//! WASM bindings for building-script — the `/api/generate` JSON boundary.

use wasm_bindgen::prelude::*;

use building_script::core::config::GeneratorConfig;
use building_script::core::pipeline::ScriptEngine;
use building_script::schema::building::BuildingSpec;
use building_script::schema::request::{ErrorKind, GenerateRequest, GenerateResponse};
use building_script::schema::style::Style;
use building_script::styles::EXAMPLE_PROMPTS;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct SpecInfo {
    style: &'static str,
    floors: u32,
    width: f64,
    depth: f64,
    floor_height: f64,
    total_height: f64,
}

impl From<&BuildingSpec> for SpecInfo {
    fn from(spec: &BuildingSpec) -> Self {
        Self {
            style: spec.style.name(),
            floors: spec.floors,
            width: spec.width,
            depth: spec.depth,
            floor_height: spec.floor_height,
            total_height: spec.total_height(),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Decode a request body and answer it. Bodies that are not a JSON object
/// with an optional `prompt` string count as a generation failure.
fn handle(engine: &ScriptEngine, request_json: &str) -> GenerateResponse {
    match serde_json::from_str::<GenerateRequest>(request_json) {
        Ok(request) => engine.respond(&request),
        Err(e) => {
            tracing::error!(error = %e, "malformed request body");
            GenerateResponse::failure(ErrorKind::GenerationFailure)
        }
    }
}

// ---------------------------------------------------------------------------
// BuildingAssistant — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct BuildingAssistant {
    engine: ScriptEngine,
}

#[wasm_bindgen]
impl BuildingAssistant {
    /// Create an assistant, optionally from a RON config string.
    #[wasm_bindgen(constructor)]
    pub fn new(config_ron: Option<String>) -> Result<BuildingAssistant, JsError> {
        let config = match config_ron {
            Some(src) => GeneratorConfig::parse_ron(&src)
                .map_err(|e| JsError::new(&format!("Config parse error: {e}")))?,
            None => GeneratorConfig::default(),
        };
        let engine = ScriptEngine::builder()
            .with_config(config)
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        Ok(BuildingAssistant { engine })
    }

    /// Answer a generation request.
    ///
    /// Request: `{"prompt": "a gothic church"}`.
    /// Response: `{"code": "..."}` or `{"error": "...", "kind": "missing_prompt"}`.
    pub fn generate(&self, request_json: &str) -> String {
        to_json(&handle(&self.engine, request_json))
    }

    /// Return a JSON description of what a prompt parses to.
    pub fn describe(&self, prompt: &str) -> Result<String, JsError> {
        let spec = self
            .engine
            .parse(prompt)
            .map_err(|e| JsError::new(e.user_message()))?;
        Ok(to_json(&SpecInfo::from(&spec)))
    }

    /// Return JSON array of sample prompts.
    pub fn example_prompts() -> String {
        to_json(&EXAMPLE_PROMPTS)
    }

    /// Return JSON array of style names.
    pub fn styles() -> String {
        to_json(&Style::ALL.map(|s| s.name()))
    }
}
