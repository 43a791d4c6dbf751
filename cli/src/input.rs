use sweeper_core::{Command, Coord};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r <row> <col>   reveal a cell
  f <row> <col>   toggle a flag
  n               new game with the same settings
  h               show this help
  q               quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    Command(Command),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input, type h for help")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    UnknownCommand(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

/// Translates one line of user input into a session command.
pub fn parse(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(InputError::Empty);
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "r" | "reveal" => {
            let (row, column) = parse_coords(&mut words)?;
            Input::Command(Command::Reveal { row, column })
        }
        "f" | "flag" => {
            let (row, column) = parse_coords(&mut words)?;
            Input::Command(Command::ToggleFlag { row, column })
        }
        "n" | "new" | "reset" => Input::Command(Command::Reset),
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => return Err(InputError::UnknownCommand(verb.to_owned())),
    };

    match words.next() {
        Some(extra) => Err(InputError::Trailing(extra.to_owned())),
        None => Ok(input),
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<(Coord, Coord), InputError> {
    let mut next_coord = || -> Result<Coord, InputError> {
        let word = words.next().ok_or(InputError::MissingCoords)?;
        word.parse::<Coord>()
            .map_err(|_| InputError::InvalidCoord(word.to_owned()))
    };
    let row = next_coord()?;
    let column = next_coord()?;
    Ok((row, column))
}
