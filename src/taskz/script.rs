//! # Task Scripts
//!
//! A task script is plain text with one command per line, replayed against a
//! single [`TaskApi`] session:
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy bread
//! add Finish the assignment
//! done 1
//! undo 1
//! rename 2 Finish the group assignment
//! list pending
//! search bread
//! rm 2
//! ```
//!
//! Everything after the keyword (minus the separating whitespace) is the
//! argument. `add` passes its argument through as given, so an empty one is
//! reported by the task layer like any other blank description.

use crate::api::{CmdResult, TaskApi, TaskFilter};
use crate::error::{Result, TaskError};
use crate::id::IdSource;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    Done(u64),
    Undo(u64),
    Rename(u64, String),
    Remove(u64),
    List(TaskFilter),
}

impl ScriptCommand {
    pub fn apply<G: IdSource>(&self, api: &mut TaskApi<G>) -> Result<CmdResult> {
        match self {
            ScriptCommand::Add(description) => api.add(description),
            ScriptCommand::Done(id) => api.complete(*id),
            ScriptCommand::Undo(id) => api.reopen(*id),
            ScriptCommand::Rename(id, description) => api.rename(*id, description),
            ScriptCommand::Remove(id) => api.remove(*id),
            ScriptCommand::List(filter) => Ok(api.list(filter)),
        }
    }
}

impl FromStr for ScriptCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (s, ""),
        };

        match keyword {
            "add" => Ok(ScriptCommand::Add(rest.to_string())),
            "done" => parse_id(rest).map(ScriptCommand::Done),
            "undo" => parse_id(rest).map(ScriptCommand::Undo),
            "rm" => parse_id(rest).map(ScriptCommand::Remove),
            "rename" => {
                let (id, description) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "rename needs an id and a description".to_string())?;
                Ok(ScriptCommand::Rename(
                    parse_id(id)?,
                    description.trim_start().to_string(),
                ))
            }
            "list" => match rest.trim() {
                "" | "all" => Ok(ScriptCommand::List(TaskFilter::All)),
                "done" => Ok(ScriptCommand::List(TaskFilter::Completed)),
                "pending" => Ok(ScriptCommand::List(TaskFilter::Pending)),
                other => Err(format!("Unknown list filter: {}", other)),
            },
            "search" if !rest.trim().is_empty() => {
                Ok(ScriptCommand::List(TaskFilter::Matching(rest.to_string())))
            }
            "search" => Err("search needs a term".to_string()),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

fn parse_id(s: &str) -> std::result::Result<u64, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("Invalid task id: {:?}", s.trim()))
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<ScriptCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|message| TaskError::Parse {
            line: line_number,
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add Buy bread", ScriptCommand::Add("Buy bread".into()))]
    #[case("add   spaced  out", ScriptCommand::Add("spaced  out".into()))]
    #[case("add", ScriptCommand::Add("".into()))]
    #[case("done 3", ScriptCommand::Done(3))]
    #[case("undo 3", ScriptCommand::Undo(3))]
    #[case("rm 12", ScriptCommand::Remove(12))]
    #[case("rename 2 New name", ScriptCommand::Rename(2, "New name".into()))]
    #[case("list", ScriptCommand::List(TaskFilter::All))]
    #[case("list all", ScriptCommand::List(TaskFilter::All))]
    #[case("list done", ScriptCommand::List(TaskFilter::Completed))]
    #[case("list pending", ScriptCommand::List(TaskFilter::Pending))]
    #[case("search bread", ScriptCommand::List(TaskFilter::Matching("bread".into())))]
    fn parses_commands(#[case] input: &str, #[case] expected: ScriptCommand) {
        assert_eq!(input.parse::<ScriptCommand>().unwrap(), expected);
    }

    #[rstest]
    #[case("fly away")]
    #[case("done")]
    #[case("done x")]
    #[case("rm -1")]
    #[case("rename 2")]
    #[case("list later")]
    #[case("search")]
    fn rejects_malformed(#[case] input: &str) {
        assert!(input.parse::<ScriptCommand>().is_err());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(parse_line(1, "").unwrap().is_none());
        assert!(parse_line(2, "   ").unwrap().is_none());
        assert!(parse_line(3, "# note").unwrap().is_none());
    }

    #[test]
    fn parse_errors_carry_line_number() {
        let err = parse_line(7, "bogus").unwrap_err();
        assert!(matches!(err, TaskError::Parse { line: 7, .. }));
        assert_eq!(err.to_string(), "Line 7: Unknown command: bogus");
    }

    #[test]
    fn applies_to_session() {
        let mut api = TaskApi::new();
        for (n, line) in ["add a", "add b", "done 1", "rm 2"].iter().enumerate() {
            let cmd = parse_line(n + 1, line).unwrap().unwrap();
            cmd.apply(&mut api).unwrap();
        }
        let listed = ScriptCommand::List(TaskFilter::Completed)
            .apply(&mut api)
            .unwrap()
            .listed_tasks;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
        assert_eq!(api.tasks().len(), 1);
    }
}
