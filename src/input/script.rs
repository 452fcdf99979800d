//! Recorded input streams.
//!
//! A script is one event per line:
//!
//! ```text
//! # comment
//! viewport 1280 800
//! origin 64 120
//! tool marker
//! color #ff8000
//! size 6
//! down 10 10
//! move 40 12
//! up
//! touchstart 80 140
//! touchmove 90 150
//! touchend
//! text Hello there
//! clear
//! save
//! share
//! ```

use super::events::{Action, InputEvent, PointerEvent, TouchEvent, TouchPoint};
use crate::draw::Point;
use thiserror::Error;

/// Errors raised while reading a script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    BadArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// Parses a script into events, in order.
pub fn parse_script(source: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };
        events.push(parse_line(line, command, rest)?);
    }
    Ok(events)
}

fn parse_line(line: usize, command: &str, rest: &str) -> Result<InputEvent, ScriptError> {
    let event = match command.to_lowercase().as_str() {
        "down" => InputEvent::Pointer(PointerEvent::Down(point(line, command, rest)?)),
        "move" => InputEvent::Pointer(PointerEvent::Move(point(line, command, rest)?)),
        "up" => {
            no_arguments(line, command, rest)?;
            InputEvent::Pointer(PointerEvent::Up)
        }
        "touchstart" => InputEvent::Touch(TouchEvent::Start(touches(line, command, rest)?)),
        "touchmove" => InputEvent::Touch(TouchEvent::Move(touches(line, command, rest)?)),
        "touchend" => {
            no_arguments(line, command, rest)?;
            InputEvent::Touch(TouchEvent::End)
        }
        "origin" => InputEvent::SurfaceOrigin(point(line, command, rest)?),
        "viewport" => {
            let [width, height] = numbers::<2>(line, command, rest, "a width and a height")?;
            InputEvent::Action(Action::Resize {
                width: dimension(line, width)?,
                height: dimension(line, height)?,
            })
        }
        "tool" => InputEvent::Action(Action::SelectTool(single_word(line, command, rest)?)),
        "color" => InputEvent::Action(Action::SelectColor(single_word(line, command, rest)?)),
        "size" => {
            let [size] = numbers::<1>(line, command, rest, "one number")?;
            InputEvent::Action(Action::SelectSize(size))
        }
        "clear" => {
            no_arguments(line, command, rest)?;
            InputEvent::Action(Action::Clear)
        }
        "text" => {
            let text = (!rest.is_empty()).then(|| rest.to_string());
            InputEvent::Action(Action::AddText(text))
        }
        "save" => {
            no_arguments(line, command, rest)?;
            InputEvent::Action(Action::Save)
        }
        "share" => {
            no_arguments(line, command, rest)?;
            InputEvent::Action(Action::Share)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };
    Ok(event)
}

fn parse_number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

fn numbers<const N: usize>(
    line: usize,
    command: &str,
    rest: &str,
    expected: &'static str,
) -> Result<[f64; N], ScriptError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() != N {
        return Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected,
        });
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_number(line, part)?;
    }
    Ok(out)
}

fn point(line: usize, command: &str, rest: &str) -> Result<Point, ScriptError> {
    let [x, y] = numbers::<2>(line, command, rest, "x and y coordinates")?;
    Ok(Point::new(x, y))
}

fn touches(line: usize, command: &str, rest: &str) -> Result<Vec<TouchPoint>, ScriptError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.is_empty() || parts.len() % 2 != 0 {
        return Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected: "one or more x y pairs",
        });
    }
    parts
        .chunks_exact(2)
        .map(|pair| -> Result<TouchPoint, ScriptError> {
            Ok(TouchPoint::new(
                parse_number(line, pair[0])?,
                parse_number(line, pair[1])?,
            ))
        })
        .collect()
}

fn dimension(line: usize, value: f64) -> Result<u32, ScriptError> {
    if value < 0.0 || value > u32::MAX as f64 || value.fract() != 0.0 {
        return Err(ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        });
    }
    Ok(value as u32)
}

fn single_word(line: usize, command: &str, rest: &str) -> Result<String, ScriptError> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(word), None) => Ok(word.to_string()),
        _ => Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected: "exactly one value",
        }),
    }
}

fn no_arguments(line: usize, command: &str, rest: &str) -> Result<(), ScriptError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::BadArguments {
            line,
            command: command.to_string(),
            expected: "no arguments",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_session() {
        let script = "\
# warm up
viewport 1000 800

tool marker
color #ff0000
size 3.5
down 10 20
move 30.5 40
up
text Hello there
save
";
        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Action(Action::Resize {
                    width: 1000,
                    height: 800
                }),
                InputEvent::Action(Action::SelectTool("marker".to_string())),
                InputEvent::Action(Action::SelectColor("#ff0000".to_string())),
                InputEvent::Action(Action::SelectSize(3.5)),
                InputEvent::Pointer(PointerEvent::Down(Point::new(10.0, 20.0))),
                InputEvent::Pointer(PointerEvent::Move(Point::new(30.5, 40.0))),
                InputEvent::Pointer(PointerEvent::Up),
                InputEvent::Action(Action::AddText(Some("Hello there".to_string()))),
                InputEvent::Action(Action::Save),
            ]
        );
    }

    #[test]
    fn parses_touch_lists_and_origin() {
        let events = parse_script("origin 5 6\ntouchstart 1 2 3 4\ntouchend").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::SurfaceOrigin(Point::new(5.0, 6.0)),
                InputEvent::Touch(TouchEvent::Start(vec![
                    TouchPoint::new(1.0, 2.0),
                    TouchPoint::new(3.0, 4.0)
                ])),
                InputEvent::Touch(TouchEvent::End),
            ]
        );
    }

    #[test]
    fn bare_text_is_a_dismissed_prompt() {
        assert_eq!(
            parse_script("text").unwrap(),
            vec![InputEvent::Action(Action::AddText(None))]
        );
    }

    #[test]
    fn unknown_tool_names_are_passed_through() {
        assert_eq!(
            parse_script("tool crayon").unwrap(),
            vec![InputEvent::Action(Action::SelectTool("crayon".to_string()))]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse_script("up\nwiggle 1 2"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                command: "wiggle".to_string()
            })
        );
        assert_eq!(
            parse_script("\n\ndown 1 abc"),
            Err(ScriptError::InvalidNumber {
                line: 3,
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            parse_script("move 1"),
            Err(ScriptError::BadArguments { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("viewport 10.5 20"),
            Err(ScriptError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("touchmove 1 2 3"),
            Err(ScriptError::BadArguments { line: 1, .. })
        ));
    }
}
