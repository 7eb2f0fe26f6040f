// Scripted input for headless runs.
//
// A script is a TOML list of segments, each holding one input state for a number
// of ticks, e.g. `[[segments]] ticks = 30, right = true`. Omitted buttons are released.

use super::protocol::PlayerInputDto;
use crate::domain::{InputSource, PlayerInput};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    EmptySegment { index: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "failed to read input script: {e}"),
            ScriptError::Parse(e) => write!(f, "failed to parse input script: {e}"),
            ScriptError::EmptySegment { index } => {
                write!(f, "input script segment {index} must last at least one tick")
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Parse(e) => Some(e),
            ScriptError::EmptySegment { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io(e)
    }
}

impl From<toml::de::Error> for ScriptError {
    fn from(e: toml::de::Error) -> Self {
        ScriptError::Parse(e)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Segment {
    ticks: u32,
    #[serde(flatten)]
    input: PlayerInputDto,
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    segments: Vec<Segment>,
}

/// Expands segments frame by frame.
#[derive(Debug, Clone)]
pub struct InputScript {
    segments: Vec<(u32, PlayerInput)>,
    segment: usize,
    used: u32,
}

impl InputScript {
    pub fn from_toml_str(raw: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = toml::from_str(raw)?;
        let mut segments: Vec<(u32, PlayerInput)> = Vec::with_capacity(file.segments.len());
        for (index, s) in file.segments.into_iter().enumerate() {
            if s.ticks == 0 {
                return Err(ScriptError::EmptySegment { index });
            }
            segments.push((s.ticks, s.input.into()));
        }
        Ok(Self::from_segments(segments))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_segments(segments: Vec<(u32, PlayerInput)>) -> Self {
        Self {
            segments,
            segment: 0,
            used: 0,
        }
    }

    /// Built-in demo: walk right, jump toward the low platform, then run at the ground enemy.
    pub fn demo() -> Self {
        let idle = PlayerInput::default();
        let right = PlayerInput {
            right: true,
            ..idle
        };
        let right_jump = PlayerInput {
            jump: true,
            ..right
        };
        Self::from_segments(vec![
            (30, idle),
            (20, right),
            (20, right_jump),
            (60, right),
            (30, idle),
            (40, right_jump),
            (120, right),
            (60, idle),
        ])
    }

    /// Total number of frames the script yields.
    pub fn total_ticks(&self) -> u64 {
        self.segments.iter().map(|(n, _)| u64::from(*n)).sum()
    }
}

impl InputSource for InputScript {
    fn next_input(&mut self) -> Option<PlayerInput> {
        while let Some(&(ticks, input)) = self.segments.get(self.segment) {
            if self.used < ticks {
                self.used += 1;
                return Some(input);
            }
            self.segment += 1;
            self.used = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_script_has_segments_then_each_input_repeats_for_its_ticks() {
        let raw = r#"
            [[segments]]
            ticks = 2
            right = true

            [[segments]]
            ticks = 1
            jump = true
        "#;
        let mut script = InputScript::from_toml_str(raw).expect("script should parse");
        assert_eq!(script.total_ticks(), 3);

        let frames: Vec<PlayerInput> = std::iter::from_fn(|| script.next_input()).collect();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].right && frames[1].right && !frames[1].jump);
        assert!(frames[2].jump && !frames[2].right);
    }

    #[test]
    fn when_segment_has_zero_ticks_then_script_is_rejected() {
        let raw = r#"
            [[segments]]
            ticks = 0
        "#;
        let result = InputScript::from_toml_str(raw);
        assert!(matches!(result, Err(ScriptError::EmptySegment { index: 0 })));
    }

    #[test]
    fn when_script_is_empty_then_it_is_exhausted_immediately() {
        let mut script = InputScript::from_toml_str("").expect("empty script should parse");
        assert_eq!(script.next_input(), None);
    }

    #[test]
    fn demo_script_is_finite() {
        let mut script = InputScript::demo();
        let total = script.total_ticks();
        let mut count = 0;
        while script.next_input().is_some() {
            count += 1;
        }
        assert_eq!(count, total);
    }
}
