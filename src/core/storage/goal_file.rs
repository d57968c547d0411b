//! Line-oriented save format for goals
//!
//! ```text
//! <total score>
//! <type tag>
//! <name>
//! <points>
//! [variant fields...]
//! ```
//!
//! `SimpleGoal` records add `True`/`False` for completion, `EternalGoal`
//! records add nothing, and `ChecklistGoal` records add the required count,
//! current count and bonus points, in that order.

use crate::core::error::{GoalError, Result};
use crate::core::models::{ChecklistGoal, EternalGoal, Goal, GoalKind, SimpleGoal};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Render one goal as its record lines, type tag first
#[must_use]
pub fn serialize(goal: &Goal) -> Vec<String> {
    let mut record = vec![
        goal.kind().tag().to_string(),
        goal.name().to_string(),
        goal.points().to_string(),
    ];
    match goal {
        Goal::Simple(g) => {
            record.push(if g.is_complete() { "True" } else { "False" }.to_string());
        }
        Goal::Eternal(_) => {}
        Goal::Checklist(g) => {
            record.push(g.required_count().to_string());
            record.push(g.current_count().to_string());
            record.push(g.bonus_points().to_string());
        }
    }
    record
}

/// Rebuild a goal from the fields that follow its type tag
///
/// `fields` yields `(line number, text)` pairs and is advanced by exactly the
/// number of fields the variant owns.
///
/// # Arguments
/// * `tag` - Type tag already read from the input
/// * `tag_line` - 1-based line number of the tag, used in error messages
/// * `fields` - Remaining input lines
///
/// # Errors
/// Returns `GoalError::UnknownGoalType` for an unrecognised tag,
/// `GoalError::Truncated` if input ends mid-record, and `GoalError::Parse`
/// for malformed numbers, booleans or inconsistent checklist counts
pub fn deserialize<'a, I>(tag: &str, tag_line: usize, fields: &mut I) -> Result<Goal>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let kind = GoalKind::from_tag(tag).ok_or_else(|| GoalError::UnknownGoalType {
        line: tag_line,
        tag: tag.to_string(),
    })?;
    let mut reader = RecordReader {
        kind,
        tag_line,
        fields,
    };

    let name = reader.text("Name")?;
    let points = reader.number("Points")?;

    let goal = match kind {
        GoalKind::Simple => {
            let is_complete = reader.boolean("IsComplete")?;
            SimpleGoal::with_state(name, points, is_complete).into()
        }
        GoalKind::Eternal => EternalGoal::new(name, points).into(),
        GoalKind::Checklist => {
            let required_count = reader.number("RequiredCount")?;
            let current_count = reader.number("CurrentCount")?;
            let bonus_points = reader.number("BonusPoints")?;
            ChecklistGoal::with_progress(name, points, required_count, current_count, bonus_points)
                .map_err(|err| match err {
                    GoalError::InvalidGoal(message) => GoalError::parse(tag_line, message),
                    other => other,
                })?
                .into()
        }
    };
    Ok(goal)
}

/// Parse a whole save file into the total score and goal list
///
/// Blank lines between records are skipped.
///
/// # Errors
/// Returns a parse error if the score line is missing or not an integer, or
/// if any record fails to deserialize
pub fn parse_goals(content: &str) -> Result<(u64, Vec<Goal>)> {
    let mut lines = content.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let (score_line, score_text) = lines
        .next()
        .ok_or_else(|| GoalError::parse(1, "missing total score"))?;
    let total_score = parse_number(score_line, score_text, "Total score")?;

    let mut goals = Vec::new();
    while let Some((line, tag)) = lines.next() {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        goals.push(deserialize(tag, line, &mut lines)?);
    }

    Ok((total_score, goals))
}

/// Write the total score followed by each goal's record
///
/// # Errors
/// Returns `GoalError::Io` if the writer fails
pub fn write_goals<W: Write>(writer: &mut W, total_score: u64, goals: &[Goal]) -> Result<()> {
    writeln!(writer, "{total_score}")?;
    for goal in goals {
        for field in serialize(goal) {
            writeln!(writer, "{field}")?;
        }
    }
    Ok(())
}

/// Read and parse a save file from any reader
///
/// # Errors
/// Returns `GoalError::Io` if reading fails, otherwise as [`parse_goals`]
pub fn read_goals<R: Read>(reader: &mut R) -> Result<(u64, Vec<Goal>)> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_goals(&content)
}

/// Create or truncate `path` and write the goals to it
///
/// # Errors
/// Returns `GoalError::File` if the file cannot be created or written
pub fn save_goal_file(path: &Path, total_score: u64, goals: &[Goal]) -> Result<()> {
    let file_error = |source| GoalError::File {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(file_error)?;
    let mut writer = BufWriter::new(file);
    write_goals(&mut writer, total_score, goals).map_err(|err| match err {
        GoalError::Io(source) => file_error(source),
        other => other,
    })?;
    writer.flush().map_err(file_error)
}

/// Read and parse the save file at `path`
///
/// # Errors
/// Returns `GoalError::File` if the file cannot be read, otherwise as
/// [`parse_goals`]
pub fn load_goal_file(path: &Path) -> Result<(u64, Vec<Goal>)> {
    let file_error = |source| GoalError::File {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(file_error)?);
    read_goals(&mut reader).map_err(|err| match err {
        GoalError::Io(source) => file_error(source),
        other => other,
    })
}

/// Sequential field reader for one record
struct RecordReader<'r, I> {
    kind: GoalKind,
    tag_line: usize,
    fields: &'r mut I,
}

impl<'a, I> RecordReader<'_, I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    fn next_field(&mut self, field: &'static str) -> Result<(usize, &'a str)> {
        self.fields.next().ok_or_else(|| GoalError::Truncated {
            tag: self.kind.tag().to_string(),
            line: self.tag_line,
            field,
        })
    }

    fn text(&mut self, field: &'static str) -> Result<String> {
        self.next_field(field).map(|(_, value)| value.to_string())
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        let (line, value) = self.next_field(field)?;
        parse_number(line, value, field)
    }

    fn boolean(&mut self, field: &'static str) -> Result<bool> {
        let (line, value) = self.next_field(field)?;
        match value.trim() {
            v if v.eq_ignore_ascii_case("true") => Ok(true),
            v if v.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(GoalError::parse(
                line,
                format!("{field} must be True or False, found '{value}'"),
            )),
        }
    }
}

fn parse_number<T: FromStr>(line: usize, value: &str, field: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        GoalError::parse(
            line,
            format!("{field} must be a non-negative integer, found '{value}'"),
        )
    })
}
