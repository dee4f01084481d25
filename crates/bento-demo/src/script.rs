#![forbid(unsafe_code)]

//! Pointer scripts.
//!
//! One step per line; `#` starts a comment.
//!
//! | Step | Meaning |
//! |------|---------|
//! | `enter <target>` | pointer enters a panel |
//! | `leave` | pointer leaves the row |
//! | `tap <target>` | touch tap on a panel |
//! | `move <x> <y>` | mouse moves to a cell |
//! | `touch <x> <y>` | touch tap at a cell |
//! | `wait <ms>` | run frames for `ms` milliseconds |
//! | `snapshot` | emit the current frame |
//! | `scroll <offset> <viewport>` | report page scroll |
//!
//! A target is a panel key, or `@N` for rank `N`.

use std::time::Duration;

/// A panel reference in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Key(String),
    Rank(usize),
}

/// One script step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Enter(Target),
    Leave,
    Tap(Target),
    Move { x: u16, y: u16 },
    Touch { x: u16, y: u16 },
    Wait(Duration),
    Snapshot,
    Scroll { offset: f32, viewport: f32 },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown step {step:?}")]
    UnknownStep { line: usize, step: String },

    #[error("line {line}: `{step}` expects {expected}")]
    MissingArgument {
        line: usize,
        step: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unexpected trailing input {rest:?}")]
    TrailingInput { line: usize, rest: String },
}

/// Parse a whole script.
pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        steps.push(parse_line(index + 1, text)?);
    }
    Ok(steps)
}

fn parse_line(line: usize, text: &str) -> Result<Step, ScriptError> {
    let mut words = text.split_whitespace();
    let head = words.next().unwrap_or_default();
    let step = match head {
        "enter" => Step::Enter(target(line, "enter", words.next())?),
        "leave" => Step::Leave,
        "tap" => Step::Tap(target(line, "tap", words.next())?),
        "move" => {
            let (x, y) = point(line, "move", &mut words)?;
            Step::Move { x, y }
        }
        "touch" => {
            let (x, y) = point(line, "touch", &mut words)?;
            Step::Touch { x, y }
        }
        "wait" => {
            let ms: u64 = number(line, required(line, "wait", "<ms>", words.next())?)?;
            Step::Wait(Duration::from_millis(ms))
        }
        "snapshot" => Step::Snapshot,
        "scroll" => {
            let expected = "<offset> <viewport>";
            let offset = number(line, required(line, "scroll", expected, words.next())?)?;
            let viewport = number(line, required(line, "scroll", expected, words.next())?)?;
            Step::Scroll { offset, viewport }
        }
        other => {
            return Err(ScriptError::UnknownStep {
                line,
                step: other.to_owned(),
            });
        }
    };

    let rest: Vec<&str> = words.collect();
    if !rest.is_empty() {
        return Err(ScriptError::TrailingInput {
            line,
            rest: rest.join(" "),
        });
    }
    Ok(step)
}

fn required<'a>(
    line: usize,
    step: &'static str,
    expected: &'static str,
    word: Option<&'a str>,
) -> Result<&'a str, ScriptError> {
    word.ok_or(ScriptError::MissingArgument {
        line,
        step,
        expected,
    })
}

fn number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_owned(),
    })
}

fn target(line: usize, step: &'static str, word: Option<&str>) -> Result<Target, ScriptError> {
    let word = required(line, step, "<key|@rank>", word)?;
    match word.strip_prefix('@') {
        Some(rank) => Ok(Target::Rank(number(line, rank)?)),
        None => Ok(Target::Key(word.to_owned())),
    }
}

fn point<'a>(
    line: usize,
    step: &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<(u16, u16), ScriptError> {
    let x = number(line, required(line, step, "<x> <y>", words.next())?)?;
    let y = number(line, required(line, step, "<x> <y>", words.next())?)?;
    Ok((x, y))
}

/// Script used when none is given: sweep every panel, then leave.
#[must_use]
pub fn default_script(panels: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(panels * 4 + 3);
    steps.push(Step::Snapshot);
    for rank in 0..panels {
        steps.push(Step::Enter(Target::Rank(rank)));
        steps.push(Step::Wait(Duration::from_millis(400)));
        steps.push(Step::Snapshot);
    }
    steps.push(Step::Leave);
    steps.push(Step::Wait(Duration::from_millis(900)));
    steps.push(Step::Snapshot);
    steps
}
