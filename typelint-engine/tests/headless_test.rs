//! Headless protocol end to end: payload in, framed diagnostics out.

use std::fs;
use std::path::Path;

use typelint_engine::headless::{read_frame, run_headless, MessageType, WireDiagnostic, WireError};

fn frames(output: &[u8]) -> Vec<(MessageType, Vec<u8>)> {
    let mut reader = output;
    let mut frames = Vec::new();
    while let Some(frame) = read_frame(&mut reader).unwrap() {
        frames.push(frame);
    }
    frames
}

fn write_source(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn v2_session_streams_diagnostics_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
        dir.path(),
        "a.ts",
        "const n = 1;\nif (n == 2) { debugger; }\n",
    );

    let input = serde_json::json!({
        "version": 2,
        "configs": [{
            "file_paths": [path],
            "rules": [{"name": "eqeqeq"}, {"name": "no-debugger"}],
        }],
    });
    let mut output = Vec::new();
    let code = run_headless(input.to_string().as_bytes(), &mut output);
    assert_eq!(code, 0);

    let frames = frames(&output);
    assert_eq!(frames.len(), 2);
    let diagnostics: Vec<WireDiagnostic> = frames
        .iter()
        .map(|(message_type, payload)| {
            assert_eq!(*message_type, MessageType::Diagnostic);
            serde_json::from_slice(payload).unwrap()
        })
        .collect();

    let mut rules: Vec<&str> = diagnostics.iter().map(|d| d.rule.as_str()).collect();
    rules.sort();
    assert_eq!(rules, vec!["eqeqeq", "no-debugger"]);

    for diagnostic in &diagnostics {
        assert_eq!(diagnostic.file_path, path);
        match diagnostic.rule.as_str() {
            "eqeqeq" => {
                assert_eq!(diagnostic.fixes.len(), 1);
                assert_eq!(diagnostic.fixes[0].text, "===");
            }
            "no-debugger" => {
                assert_eq!(diagnostic.suggestions.len(), 1);
                assert!(diagnostic.suggestions[0].fixes[0].text.is_empty());
            }
            other => panic!("unexpected rule {other}"),
        }
    }
}

#[test]
fn legacy_payload_is_upgraded_and_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "legacy.ts", "debugger;\n");

    let input = serde_json::json!({
        "files": [{"file_path": path, "rules": ["no-debugger"]}],
    });
    let mut output = Vec::new();
    let code = run_headless(input.to_string().as_bytes(), &mut output);
    assert_eq!(code, 0);

    let frames = frames(&output);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, MessageType::Diagnostic);
    let diagnostic: WireDiagnostic = serde_json::from_slice(&frames[0].1).unwrap();
    assert_eq!(diagnostic.rule, "no-debugger");
}

#[test]
fn unknown_rule_aborts_before_linting() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "a.ts", "debugger;\n");

    let input = serde_json::json!({
        "version": 2,
        "configs": [{
            "file_paths": [path],
            "rules": [{"name": "no-debugger"}, {"name": "bogus"}],
        }],
    });
    let mut output = Vec::new();
    let code = run_headless(input.to_string().as_bytes(), &mut output);
    assert_eq!(code, 1);

    let frames = frames(&output);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, MessageType::Error);
    let error: WireError = serde_json::from_slice(&frames[0].1).unwrap();
    assert!(error.error.contains("unknown rule: bogus"));
}

#[test]
fn unsupported_version_is_rejected() {
    let mut output = Vec::new();
    let code = run_headless(br#"{"version":7,"configs":[]}"#, &mut output);
    assert_eq!(code, 1);

    let frames = frames(&output);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, MessageType::Error);
    let error: WireError = serde_json::from_slice(&frames[0].1).unwrap();
    assert!(error.error.contains("error parsing config"));
}

#[test]
fn missing_source_file_fails_program_construction() {
    let input = serde_json::json!({
        "version": 2,
        "configs": [{
            "file_paths": ["/nonexistent/never.ts"],
            "rules": [{"name": "no-debugger"}],
        }],
    });
    let mut output = Vec::new();
    let code = run_headless(input.to_string().as_bytes(), &mut output);
    assert_eq!(code, 1);

    let frames = frames(&output);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, MessageType::Error);
    let error: WireError = serde_json::from_slice(&frames[0].1).unwrap();
    assert!(error.error.contains("error building program"));
}

#[test]
fn non_json_input_produces_a_parse_error_frame() {
    let mut output = Vec::new();
    let code = run_headless(b"not json", &mut output);
    assert_eq!(code, 1);

    let frames = frames(&output);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, MessageType::Error);
}
