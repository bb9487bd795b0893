/// The prompt pipeline: Prompt → BuildingSpec → Script orchestration.
///
/// Wires together parameter extraction, style classification, and template
/// dispatch, and maps every failure onto the two public error kinds.

use std::path::Path;
use thiserror::Error;

use crate::core::classify::StyleClassifier;
use crate::core::config::{ConfigError, GeneratorConfig};
use crate::core::extract::{NumberExtractor, DEPTH_KEYWORDS, FLOOR_KEYWORDS, WIDTH_KEYWORDS};
use crate::core::script::{Script, ScriptError};
use crate::schema::building::BuildingSpec;
use crate::schema::request::{ErrorKind, GenerateRequest, GenerateResponse};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("prompt is missing or empty")]
    MissingPrompt,
    #[error("{field} of {value} exceeds the limit of {max}")]
    DimensionOutOfRange {
        field: &'static str,
        value: u64,
        max: u32,
    },
    #[error("script error: {0}")]
    Script(#[from] ScriptError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl PipelineError {
    /// The public classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingPrompt => ErrorKind::MissingPrompt,
            _ => ErrorKind::GenerationFailure,
        }
    }

    /// Short message safe to show callers; the cause stays in the logs.
    pub fn user_message(&self) -> &'static str {
        self.kind().message()
    }
}

/// The top-level script generator. Built via `ScriptEngine::builder()`.
///
/// Holds only compiled patterns and configuration, so one engine can serve
/// any number of threads through `&self`.
#[derive(Debug, Clone)]
pub struct ScriptEngine {
    config: GeneratorConfig,
    floors: NumberExtractor,
    width: NumberExtractor,
    depth: NumberExtractor,
    classifier: StyleClassifier,
}

/// Builder for constructing a `ScriptEngine`.
#[derive(Debug, Default)]
pub struct ScriptEngineBuilder {
    config_path: Option<String>,
    /// Directly provided config (for testing without files).
    config: Option<GeneratorConfig>,
}

impl ScriptEngine {
    pub fn builder() -> ScriptEngineBuilder {
        ScriptEngineBuilder::default()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Turn a prompt into a [`BuildingSpec`] without generating anything.
    pub fn parse(&self, prompt: &str) -> Result<BuildingSpec, PipelineError> {
        if prompt.trim().is_empty() {
            tracing::warn!("rejected empty prompt");
            return Err(PipelineError::MissingPrompt);
        }
        let text = prompt.to_lowercase();
        let defaults = &self.config.defaults;
        let limits = &self.config.limits;

        // Zero counts as "not given", which keeps every dimension positive.
        let floors = bounded(
            "floors",
            pick(self.floors.extract(&text), defaults.floors),
            limits.max_floors,
        )?;
        let width = bounded(
            "width",
            pick(self.width.extract(&text), defaults.width),
            limits.max_width,
        )?;
        let depth = bounded(
            "depth",
            pick(self.depth.extract(&text), defaults.depth),
            limits.max_depth,
        )?;

        let spec = BuildingSpec {
            floors,
            width: f64::from(width),
            depth: f64::from(depth),
            floor_height: self.config.floor_height,
            style: self.classifier.classify(&text),
        };
        tracing::debug!(
            style = %spec.style,
            floors = spec.floors,
            width = spec.width,
            depth = spec.depth,
            "parsed building spec"
        );
        Ok(spec)
    }

    /// Generate the full script for a prompt, keeping the object manifest.
    pub fn generate_script(&self, prompt: &str) -> Result<Script, PipelineError> {
        let spec = self.parse(prompt)?;
        let generate = spec.style.generator();
        match generate(&spec) {
            Ok(script) => {
                tracing::info!(
                    style = %spec.style,
                    objects = script.objects().len(),
                    bytes = script.text().len(),
                    "script generated"
                );
                Ok(script)
            }
            Err(e) => {
                tracing::error!(style = %spec.style, error = %e, "script generation failed");
                Err(e.into())
            }
        }
    }

    /// Generate the script text for a prompt.
    pub fn generate(&self, prompt: &str) -> Result<String, PipelineError> {
        self.generate_script(prompt).map(Script::into_text)
    }

    /// Answer a boundary request. Never fails; errors become a
    /// [`GenerateResponse::Failure`]. Causes were already logged by
    /// [`parse`](Self::parse) or [`generate_script`](Self::generate_script).
    pub fn respond(&self, request: &GenerateRequest) -> GenerateResponse {
        let prompt = request.prompt.as_deref().unwrap_or_default();
        match self.generate(prompt) {
            Ok(code) => GenerateResponse::Success { code },
            Err(e) => GenerateResponse::failure(e.kind()),
        }
    }
}

fn pick(extracted: Option<u64>, default: u32) -> u64 {
    extracted.filter(|&n| n > 0).unwrap_or(u64::from(default))
}

fn bounded(field: &'static str, value: u64, max: u32) -> Result<u32, PipelineError> {
    match u32::try_from(value) {
        Ok(v) if v <= max => Ok(v),
        _ => {
            tracing::warn!(field, value, max, "dimension out of range");
            Err(PipelineError::DimensionOutOfRange { field, value, max })
        }
    }
}

impl ScriptEngineBuilder {
    /// Load configuration from a RON file at build time.
    pub fn config_path(mut self, path: &str) -> Self {
        self.config_path = Some(path.to_string());
        self
    }

    /// Provide a config directly (for testing without files).
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<ScriptEngine, PipelineError> {
        // A config file overrides a directly provided config.
        let config = match self.config_path {
            Some(ref path) => GeneratorConfig::load_from_ron(Path::new(path))?,
            None => self.config.unwrap_or_default(),
        };
        config.validate()?;

        Ok(ScriptEngine {
            config,
            floors: NumberExtractor::new(FLOOR_KEYWORDS)?,
            width: NumberExtractor::new(WIDTH_KEYWORDS)?,
            depth: NumberExtractor::new(DEPTH_KEYWORDS)?,
            classifier: StyleClassifier::new()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Limits;
    use crate::schema::style::Style;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn build_test_engine() -> ScriptEngine {
        ScriptEngine::builder().build().unwrap()
    }

    #[test]
    fn defaults_without_digits() {
        let engine = build_test_engine();
        let spec = engine.parse("a plain office block").unwrap();
        assert_eq!(spec.floors, 5);
        assert_eq!(spec.width, 10.0);
        assert_eq!(spec.depth, 10.0);
        assert_eq!(spec.floor_height, 3.0);
        assert_eq!(spec.style, Style::Standard);
    }

    #[test]
    fn dimensions_from_prompt() {
        let engine = build_test_engine();
        let spec = engine.parse("12 floors, 30 wide and depth 20").unwrap();
        assert_eq!(spec.floors, 12);
        assert_eq!(spec.width, 30.0);
        assert_eq!(spec.depth, 20.0);
    }

    #[test]
    fn zero_falls_back_to_default() {
        let engine = build_test_engine();
        let spec = engine.parse("0 floors, 0 wide").unwrap();
        assert_eq!(spec.floors, 5);
        assert_eq!(spec.width, 10.0);
    }

    #[test]
    fn empty_and_blank_prompts_rejected() {
        let engine = build_test_engine();
        for prompt in ["", "   ", "\n\t"] {
            let err = engine.generate(prompt).unwrap_err();
            assert!(matches!(err, PipelineError::MissingPrompt));
            assert_eq!(err.kind(), ErrorKind::MissingPrompt);
            assert_eq!(err.user_message(), "Prompt is required");
        }
    }

    #[test]
    fn limits_reject_oversized_prompts() {
        let engine = ScriptEngine::builder()
            .with_config(GeneratorConfig {
                limits: Limits {
                    max_floors: 20,
                    ..Limits::default()
                },
                ..GeneratorConfig::default()
            })
            .build()
            .unwrap();
        let err = engine.generate("a 21 floor block").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DimensionOutOfRange {
                field: "floors",
                value: 21,
                max: 20
            }
        ));
        assert_eq!(err.kind(), ErrorKind::GenerationFailure);
        assert_eq!(err.user_message(), "Failed to generate code");
        assert!(engine.generate("a 20 floor block").is_ok());
    }

    #[test]
    fn default_limits_bound_each_dimension() {
        let engine = build_test_engine();
        assert_eq!(engine.parse("a 200 floor office").unwrap().floors, 200);
        assert_eq!(engine.parse("an office 500 wide").unwrap().width, 500.0);

        let cases = [
            ("a 201 floor office", "floors", 201, 200),
            ("an office 501 wide", "width", 501, 500),
            ("an office 501 deep", "depth", 501, 500),
        ];
        for (prompt, want_field, want_value, want_max) in cases {
            match engine.parse(prompt) {
                Err(PipelineError::DimensionOutOfRange { field, value, max }) => {
                    assert_eq!((field, value, max), (want_field, want_value, want_max));
                }
                other => panic!("{prompt}: expected DimensionOutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn oversized_counts_are_rejected_not_defaulted() {
        let engine = build_test_engine();
        let err = engine.parse("a 5000000000 floor office").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DimensionOutOfRange {
                field: "floors",
                value: 5_000_000_000,
                max: 200
            }
        ));

        let err = engine.parse("an office 99999999999999999999999 wide").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DimensionOutOfRange {
                field: "width",
                value: u64::MAX,
                ..
            }
        ));
    }

    #[test]
    fn non_ascii_digit_does_not_hide_later_count() {
        let spec = build_test_engine().parse("\u{0665} floor 7").unwrap();
        assert_eq!(spec.floors, 7);
    }

    #[test]
    fn each_failure_is_logged_once() {
        let engine = build_test_engine();
        let respond = |prompt: &str| {
            engine.respond(&GenerateRequest {
                prompt: Some(prompt.to_string()),
            })
        };

        assert_eq!(captured_levels(|| drop(respond("a 201 floor office"))), ["WARN"]);
        assert_eq!(captured_levels(|| drop(respond("   "))), ["WARN"]);
        assert_eq!(
            captured_levels(|| drop(respond("a small cottage"))),
            ["DEBUG", "INFO"]
        );
    }

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Levels of the events `f` emits, in order.
    fn captured_levels(f: impl FnOnce()) -> Vec<String> {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    #[test]
    fn configured_floor_height_flows_into_script() {
        let engine = ScriptEngine::builder()
            .with_config(GeneratorConfig {
                floor_height: 4.0,
                ..GeneratorConfig::default()
            })
            .build()
            .unwrap();
        let text = engine.generate("an office block").unwrap();
        assert!(text.contains("floor_height = 4\n"));
        assert!(text.contains("total_height = 20\n"));
    }

    #[test]
    fn invalid_config_fails_build() {
        let result = ScriptEngine::builder()
            .with_config(GeneratorConfig {
                floor_height: 0.0,
                ..GeneratorConfig::default()
            })
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn builder_reads_config_file() {
        let engine = ScriptEngine::builder()
            .config_path("tests/fixtures/tall_config.ron")
            .build()
            .unwrap();
        assert_eq!(engine.config().defaults.floors, 12);
        let spec = engine.parse("an office").unwrap();
        assert_eq!(spec.floors, 12);
        assert_eq!(spec.width, 16.0);
        assert_eq!(spec.floor_height, 4.0);
    }

    #[test]
    fn missing_config_file_fails_build() {
        let result = ScriptEngine::builder()
            .config_path("tests/fixtures/missing.ron")
            .build();
        assert!(matches!(result, Err(PipelineError::Config(ConfigError::Io(_)))));
    }

    #[test]
    fn respond_wraps_success_and_failure() {
        let engine = build_test_engine();
        let ok = engine.respond(&GenerateRequest {
            prompt: Some("a cottage".to_string()),
        });
        assert!(ok.is_success());

        let missing = engine.respond(&GenerateRequest { prompt: None });
        assert_eq!(missing, GenerateResponse::failure(ErrorKind::MissingPrompt));
    }

    #[test]
    fn generate_script_keeps_manifest() {
        let engine = build_test_engine();
        let script = engine.generate_script("a medieval fortress").unwrap();
        assert_eq!(script.count_objects("Tower_"), 36);
        assert_eq!(
            engine.generate("a medieval fortress").unwrap(),
            script.into_text()
        );
    }
}
