/// Pipeline integration tests — end-to-end prompt-to-script generation.

use building_script::core::pipeline::{PipelineError, ScriptEngine};
use building_script::schema::request::{ErrorKind, GenerateRequest, GenerateResponse};
use building_script::schema::style::Style;
use building_script::styles::EXAMPLE_PROMPTS;

fn engine() -> ScriptEngine {
    ScriptEngine::builder().build().unwrap()
}

#[test]
fn modern_apartment_scenario() {
    let engine = engine();
    let prompt = "Create a modern 5-story apartment building";

    let spec = engine.parse(prompt).unwrap();
    assert_eq!(spec.style, Style::Modern);
    assert_eq!(spec.floors, 5);
    assert_eq!(spec.width, 10.0);
    assert_eq!(spec.depth, 10.0);

    let script = engine.generate_script(prompt).unwrap();
    assert!(script.text().contains("deform_method = 'TWIST'"));
    let balconies: Vec<&str> = script
        .object_names()
        .filter(|n| n.starts_with("Balcony_"))
        .collect();
    assert_eq!(
        balconies,
        vec!["Balcony_F1", "Balcony_F2", "Balcony_F3", "Balcony_F4"]
    );
}

#[test]
fn gothic_cathedral_scenario() {
    let engine = engine();
    let prompt = "Build a Gothic cathedral with tall spires";

    let spec = engine.parse(prompt).unwrap();
    assert_eq!(spec.style, Style::Gothic);
    assert_eq!(spec.floors, 5);

    let script = engine.generate_script(prompt).unwrap();
    let text = script.text();
    assert!(text.contains("\ndepth = 20\n"));
    assert!(text.contains("\nheight = 15\n"));
    assert_eq!(script.count_objects("Spire_Top_"), 2);
    assert_eq!(script.count_objects("Spire_") - script.count_objects("Spire_Top_"), 2);
}

#[test]
fn empty_prompt_scenario() {
    let err = engine().generate("").unwrap_err();
    assert!(matches!(err, PipelineError::MissingPrompt));
}

#[test]
fn castle_keyword_beats_modern() {
    let spec = engine().parse("a modern castle with glass walls").unwrap();
    assert_eq!(spec.style, Style::Castle);
}

#[test]
fn floor_keyword_beats_story_keyword() {
    // "story" appears first in the text, but "floor" is earlier in the list.
    let spec = engine().parse("a 3 story wing beside a 9 floor block").unwrap();
    assert_eq!(spec.floors, 9);
}

#[test]
fn identical_prompts_give_identical_scripts() {
    let prompts = [
        "a 7 floor office 14 wide",
        "a fortress 30 wide 20 deep",
        "a futuristic glass tower 40 floors",
        "an industrial factory",
    ];
    for prompt in prompts {
        let a = engine().generate(prompt).unwrap();
        let b = engine().generate(prompt).unwrap();
        assert_eq!(a, b, "prompt: {prompt}");
    }
}

#[test]
fn example_prompts_all_generate() {
    let engine = engine();
    let styles: Vec<Style> = EXAMPLE_PROMPTS
        .iter()
        .map(|p| engine.parse(p).unwrap().style)
        .collect();
    // The warehouse sample says "warehouse", which contains "house",
    // and Cottage is checked before Warehouse.
    assert_eq!(
        styles,
        vec![
            Style::Modern,
            Style::Gothic,
            Style::Modern,
            Style::Cottage,
            Style::Cottage,
            Style::Castle,
        ]
    );
    for prompt in EXAMPLE_PROMPTS {
        assert!(engine.generate(prompt).is_ok(), "prompt: {prompt}");
    }
}

#[test]
fn every_style_reachable_from_a_prompt() {
    let engine = engine();
    let cases = [
        ("an office block", Style::Standard),
        ("a contemporary office", Style::Modern),
        ("a church", Style::Gothic),
        ("a fortress", Style::Castle),
        ("a home", Style::Cottage),
        ("an industrial shed", Style::Warehouse),
    ];
    for (prompt, style) in cases {
        let script = engine.generate_script(prompt).unwrap();
        assert_eq!(engine.parse(prompt).unwrap().style, style, "prompt: {prompt}");
        assert_eq!(
            script.text(),
            style.generator()(&engine.parse(prompt).unwrap()).unwrap().text()
        );
    }
}

#[test]
fn concurrent_generation_shares_one_engine() {
    let engine = engine();
    let prompts = ["a church", "a fortress 24 wide", "a 12 floor office", "a garage"];
    let expected: Vec<String> = prompts.iter().map(|p| engine.generate(p).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = prompts
            .iter()
            .map(|p| {
                let engine = &engine;
                scope.spawn(move || engine.generate(p).unwrap())
            })
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

#[test]
fn respond_maps_errors_to_public_kinds() {
    let engine = engine();

    let resp = engine.respond(&GenerateRequest {
        prompt: Some("  ".to_string()),
    });
    assert_eq!(
        resp,
        GenerateResponse::Failure {
            error: "Prompt is required".to_string(),
            kind: ErrorKind::MissingPrompt,
        }
    );

    let resp = engine.respond(&GenerateRequest {
        prompt: Some("a 100000 floor tower".to_string()),
    });
    assert_eq!(resp, GenerateResponse::failure(ErrorKind::GenerationFailure));

    let resp = engine.respond(&GenerateRequest {
        prompt: Some("a small house".to_string()),
    });
    match resp {
        GenerateResponse::Success { code } => assert!(code.contains("Cottage_Main")),
        other => panic!("expected success, got {other:?}"),
    }
}
