//! Interaction scripts replayed by `minisel run`.
//!
//! One step per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! open
//! type ha
//! enter
//! blur
//! wait 250
//! ```

use std::time::Duration;

use thiserror::Error;

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
	/// Replace the search text (`type <text>`; `type` alone clears it).
	Type(String),
	Enter,
	/// Pick the n-th filtered option, counting from zero.
	Pick(usize),
	/// Remove the n-th tag, counting from zero.
	Remove(usize),
	/// Click the "no results" entry.
	Add,
	/// Click the toggle arrow.
	Toggle,
	/// Click the tag area.
	Open,
	Close,
	/// Focus leaves the widget.
	Blur,
	/// Let time pass.
	Wait(Duration),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ScriptError {
	#[error("line {line}: unknown step '{step}'")]
	UnknownStep { line: usize, step: String },

	#[error("line {line}: '{step}' needs {expected}")]
	MissingArgument {
		line: usize,
		step: &'static str,
		expected: &'static str,
	},

	#[error("line {line}: '{value}' is not a valid number")]
	InvalidNumber { line: usize, value: String },

	#[error("line {line}: '{step}' takes no argument")]
	UnexpectedArgument { line: usize, step: &'static str },
}

/// Parse a whole script.
pub(crate) fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
	let mut steps = Vec::new();
	for (index, raw) in source.lines().enumerate() {
		let line = index + 1;
		let trimmed = raw.trim_start();
		if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
			continue;
		}
		steps.push(parse_step(line, trimmed)?);
	}
	Ok(steps)
}

fn parse_step(line: usize, text: &str) -> Result<Step, ScriptError> {
	let (name, argument) = match text.split_once(' ') {
		Some((name, rest)) => (name, Some(rest)),
		None => (text.trim_end(), None),
	};

	match name {
		// Text after `type ` is kept verbatim so queries may contain spaces.
		"type" => Ok(Step::Type(argument.unwrap_or_default().to_string())),
		"enter" => bare(line, "enter", argument, Step::Enter),
		"add" => bare(line, "add", argument, Step::Add),
		"toggle" => bare(line, "toggle", argument, Step::Toggle),
		"open" => bare(line, "open", argument, Step::Open),
		"close" => bare(line, "close", argument, Step::Close),
		"blur" => bare(line, "blur", argument, Step::Blur),
		"pick" => number(line, "pick", argument, "an option index").map(Step::Pick),
		"remove" => number(line, "remove", argument, "a tag index").map(Step::Remove),
		"wait" => number(line, "wait", argument, "a duration in milliseconds")
			.map(|millis| Step::Wait(Duration::from_millis(millis as u64))),
		other => Err(ScriptError::UnknownStep {
			line,
			step: other.to_string(),
		}),
	}
}

fn bare(
	line: usize,
	step: &'static str,
	argument: Option<&str>,
	parsed: Step,
) -> Result<Step, ScriptError> {
	match argument.map(str::trim) {
		None | Some("") => Ok(parsed),
		Some(_) => Err(ScriptError::UnexpectedArgument { line, step }),
	}
}

fn number(
	line: usize,
	step: &'static str,
	argument: Option<&str>,
	expected: &'static str,
) -> Result<usize, ScriptError> {
	let value = argument.map(str::trim).filter(|value| !value.is_empty()).ok_or(
		ScriptError::MissingArgument {
			line,
			step,
			expected,
		},
	)?;
	value.parse().map_err(|_| ScriptError::InvalidNumber {
		line,
		value: value.to_string(),
	})
}
