//! Commands typed into an open window.

use casement_common::{BrowserId, Geometry};

#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    /// Move/resize: `move X Y W H`.
    Move(Geometry),
    List,
    State,
    /// Hand command to another window: `command ID`.
    Command(BrowserId),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "commands: move X Y W H | list | state | command ID | help | quit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<InputCommand>, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "move" => {
            const USAGE: &str = "move X Y W H";
            let [x, y, w, h] = rest.as_slice() else {
                return Err(InputError::Usage(USAGE));
            };
            let parsed = (
                x.parse::<i32>(),
                y.parse::<i32>(),
                w.parse::<u32>(),
                h.parse::<u32>(),
            );
            let (Ok(x), Ok(y), Ok(w), Ok(h)) = parsed else {
                return Err(InputError::Usage(USAGE));
            };
            InputCommand::Move(Geometry::new(x, y, w, h))
        }
        "command" => {
            const USAGE: &str = "command ID";
            let [id] = rest.as_slice() else {
                return Err(InputError::Usage(USAGE));
            };
            let id = id.parse::<u64>().map_err(|_| InputError::Usage(USAGE))?;
            InputCommand::Command(BrowserId(id))
        }
        "list" | "ls" => InputCommand::List,
        "state" => InputCommand::State,
        "help" | "?" => InputCommand::Help,
        "quit" | "exit" | "q" => InputCommand::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t"), Ok(None));
    }

    #[test]
    fn parses_move() {
        assert_eq!(
            parse_line("move -10 20 800 600"),
            Ok(Some(InputCommand::Move(Geometry::new(-10, 20, 800, 600))))
        );
    }

    #[test]
    fn move_needs_four_numbers() {
        assert_eq!(
            parse_line("move 1 2 3"),
            Err(InputError::Usage("move X Y W H"))
        );
        assert_eq!(
            parse_line("move 1 2 -3 4"),
            Err(InputError::Usage("move X Y W H"))
        );
    }

    #[test]
    fn parses_command() {
        assert_eq!(
            parse_line("command 7"),
            Ok(Some(InputCommand::Command(BrowserId(7))))
        );
        assert!(parse_line("command seven").is_err());
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_line("QUIT"), Ok(Some(InputCommand::Quit)));
        assert_eq!(parse_line("List"), Ok(Some(InputCommand::List)));
    }

    #[test]
    fn unknown_verb_is_error() {
        let err = parse_line("dance").unwrap_err();
        assert_eq!(err.to_string(), "unknown command: dance");
    }
}
