//! Padding atlas files on disk.

use std::fs;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use atlaspad::{pad_file, Atlas, Axis, Error, FrameErrorKind, PadOptions, PadReport};

static COLLECTABLES: &str = "testdata/collectables.json";
static COLLECTABLES_PADDED: &str = "testdata/collectables_padded.json";

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn pad_matches_reference_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("collectables_padded.json");
    let options = PadOptions::default().input(COLLECTABLES).output(&output);

    let report = pad_file(&options).unwrap();
    assert_eq!(report, PadReport { frames: 4, offset: 2, output: output.clone() });

    let expected = fs::read_to_string(COLLECTABLES_PADDED).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn every_frame_moves_and_nothing_else_changes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    pad_file(&PadOptions::default().input(COLLECTABLES).output(&output)).unwrap();

    let before = read_json(std::path::Path::new(COLLECTABLES));
    let after = read_json(&output);

    let before_frames = before["frames"].as_object().unwrap();
    let after_frames = after["frames"].as_object().unwrap();
    assert_eq!(
        before_frames.keys().collect::<Vec<_>>(),
        after_frames.keys().collect::<Vec<_>>()
    );

    for (name, entry) in before_frames {
        let mut moved = entry.clone();
        for axis in ["x", "y"] {
            let value = entry["frame"][axis].as_i64().unwrap();
            moved["frame"][axis] = json!(value + 2);
        }
        assert_eq!(&moved, &after_frames[name], "frame {}", name);
    }
    assert_eq!(before["meta"], after["meta"]);
    assert_eq!(before["animations"], after["animations"]);
}

#[test]
fn padding_twice_moves_twice() {
    let dir = tempfile::tempdir().unwrap();
    let once = dir.path().join("once.json");
    let twice = dir.path().join("twice.json");
    pad_file(&PadOptions::default().input(COLLECTABLES).output(&once)).unwrap();
    pad_file(&PadOptions::default().input(&once).output(&twice)).unwrap();

    let original = Atlas::load(COLLECTABLES).unwrap();
    let padded = Atlas::load(&twice).unwrap();
    for (before, after) in original.frames().zip(padded.frames()) {
        assert_eq!(before.name(), after.name());
        let before = before.rect().unwrap();
        let after = after.rect().unwrap();
        assert_eq!(after.x, before.x + 4.0);
        assert_eq!(after.y, before.y + 4.0);
        assert_eq!((after.w, after.h), (before.w, before.h));
    }
}

#[test]
fn empty_frames_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.json");
    let output = dir.path().join("empty_padded.json");
    fs::write(&input, r#"{"frames": {}, "meta": {"image": "empty.png"}}"#).unwrap();

    let report = pad_file(&PadOptions::default().input(&input).output(&output)).unwrap();
    assert_eq!(report.frames, 0);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\n  \"frames\": {},\n  \"meta\": {\n    \"image\": \"empty.png\"\n  }\n}"
    );
}

#[test]
fn missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");
    let options = PadOptions::default().input(dir.path().join("collectables.json")).output(&output);

    let err = pad_file(&options).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(!output.exists());
}

#[test]
fn malformed_entry_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("broken_padded.json");
    fs::write(
        &input,
        r#"{"frames": {"ok.png": {"frame": {"x": 0, "y": 0, "w": 4, "h": 4}}, "bad.png": {"frame": {"y": 1, "w": 4, "h": 4}}}}"#,
    )
    .unwrap();

    let err = pad_file(&PadOptions::default().input(&input).output(&output)).unwrap_err();
    match err {
        Error::Frame(frame) => {
            assert_eq!(frame.name, "bad.png");
            assert_eq!(frame.kind, FrameErrorKind::MissingCoordinate(Axis::X));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn invalid_json_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.json");
    let output = dir.path().join("garbage_padded.json");
    fs::write(&input, "{\"frames\": {\"a\": ").unwrap();

    let err = pad_file(&PadOptions::default().input(&input).output(&output)).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(!output.exists());
}

#[test]
fn missing_frames_key_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("no_frames.json");
    let output = dir.path().join("no_frames_padded.json");
    fs::write(&input, r#"{"meta": {}}"#).unwrap();

    let err = pad_file(&PadOptions::default().input(&input).output(&output)).unwrap_err();
    assert!(matches!(err, Error::MissingFrames));
    assert!(!output.exists());
}

#[test]
fn custom_offset_and_write_options() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("one.json");
    let output = dir.path().join("one_padded.json");
    fs::write(&input, r#"{"frames": {"é.png": {"frame": {"x": 10, "y": 20}}}}"#).unwrap();

    let options = PadOptions::default()
        .input(&input)
        .output(&output)
        .offset(-5)
        .write_options(atlaspad::WriteOptions::default().whitespace("\t").ensure_ascii(false));
    pad_file(&options).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\n\t\"frames\": {\n\t\t\"é.png\": {\n\t\t\t\"frame\": {\n\t\t\t\t\"x\": 5,\n\t\t\t\t\"y\": 15\n\t\t\t}\n\t\t}\n\t}\n}"
    );
}

#[test]
fn input_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("collectables.json");
    fs::copy(COLLECTABLES, &input).unwrap();
    let original = fs::read(&input).unwrap();

    pad_file(&PadOptions::default().input(&input).output(dir.path().join("padded.json"))).unwrap();
    assert_eq!(fs::read(&input).unwrap(), original);
}
