#![forbid(unsafe_code)]

use std::io::Write;

use bento_demo::script::{self, Step, Target};
use bento_demo::{Cli, DemoError, run};
use clap::Parser;
use proptest::prelude::*;

fn run_args(args: &[String]) -> Result<String, DemoError> {
    let cli = Cli::try_parse_from(std::iter::once("bento-demo".to_owned()).chain(args.iter().cloned()))
        .map_err(|err| DemoError::Usage(err.to_string()))?;
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn script_file_drives_the_row() {
    let script = write_temp(
        ".txt",
        "enter 02\nwait 1500\nsnapshot\ntap @3\nwait 1500\nsnapshot\nenter missing\nwait 1500\nsnapshot\n",
    );
    let text = run_args(&[
        "run".into(),
        "--format".into(),
        "json".into(),
        "--script".into(),
        script.path().display().to_string(),
    ])
    .unwrap();
    let frames: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0]["frame"]["active"], "02");
    assert_eq!(frames[0]["frame"]["settled"], true);
    assert_eq!(frames[1]["frame"]["active"], "04");
    assert!(frames[2]["frame"]["active"].is_null());
    assert_eq!(frames[2]["t_ms"], 4500);
}

#[test]
fn static_run_settles_immediately() {
    let script = write_temp(".txt", "enter @0\nsnapshot\n");
    let text = run_args(&[
        "run".into(),
        "--static".into(),
        "--format".into(),
        "json".into(),
        "--script".into(),
        script.path().display().to_string(),
    ])
    .unwrap();
    let frame: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(frame["t_ms"], 0);
    assert_eq!(frame["frame"]["active"], "01");
    assert_eq!(frame["frame"]["settled"], true);
}

#[test]
fn json_config_file_is_accepted() {
    let config = write_temp(
        ".json",
        r#"{"panels":[{"key":"a","title":"Alpha"},{"key":"b","title":"Beta"}]}"#,
    );
    let text = run_args(&[
        "config".into(),
        "--config".into(),
        config.path().display().to_string(),
    ])
    .unwrap();
    assert!(text.contains("key = \"a\""));
    assert!(text.contains("title = \"Beta\""));
}

#[test]
fn bad_script_maps_to_usage_exit() {
    let script = write_temp(".txt", "enter 01\nhover 02\n");
    let err = run_args(&[
        "run".into(),
        "--script".into(),
        script.path().display().to_string(),
    ])
    .unwrap_err();
    assert!(matches!(err, DemoError::Script(_)));
    assert_eq!(err.exit_code(), bento_demo::error::EXIT_USAGE);
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn invalid_config_maps_to_config_exit() {
    let config = write_temp(".toml", "panels = []\n");
    let err = run_args(&[
        "config".into(),
        "--config".into(),
        config.path().display().to_string(),
    ])
    .unwrap_err();
    assert_eq!(err.exit_code(), bento_demo::error::EXIT_CONFIG);
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..8).prop_map(|rank| Step::Enter(Target::Rank(rank))),
        "[a-z0-9]{1,6}".prop_map(|key| Step::Tap(Target::Key(key))),
        Just(Step::Leave),
        Just(Step::Snapshot),
        (0u16..200, 0u16..50).prop_map(|(x, y)| Step::Move { x, y }),
        (0u64..5000).prop_map(|ms| Step::Wait(std::time::Duration::from_millis(ms))),
    ]
}

fn render(step: &Step) -> String {
    let target = |t: &Target| match t {
        Target::Key(key) => key.clone(),
        Target::Rank(rank) => format!("@{rank}"),
    };
    match step {
        Step::Enter(t) => format!("enter {}", target(t)),
        Step::Tap(t) => format!("tap {}", target(t)),
        Step::Leave => "leave".into(),
        Step::Snapshot => "snapshot".into(),
        Step::Move { x, y } => format!("move {x} {y}"),
        Step::Touch { x, y } => format!("touch {x} {y}"),
        Step::Wait(d) => format!("wait {}", d.as_millis()),
        Step::Scroll { offset, viewport } => format!("scroll {offset} {viewport}"),
    }
}

proptest! {
    #[test]
    fn rendered_scripts_parse_back(steps in proptest::collection::vec(step_strategy(), 0..20)) {
        let source: String = steps.iter().map(|s| render(s) + "  # note\n").collect();
        prop_assert_eq!(script::parse(&source).unwrap(), steps);
    }
}
