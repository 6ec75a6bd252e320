use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Context};
use pixy_engine_edit::{Color, GridEditor, Transform};

/// One editing step given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `paint:R,C`
    Paint { row: i32, column: i32 },
    /// `color:#rrggbb`
    DrawingColor(Color),
    /// `background:#rrggbb`
    Background(Color),
    /// `size:RxC`
    Size { rows: i32, columns: i32 },
    Rows(i32),
    Columns(i32),
    Spacing(i32),
    /// `aspect:on|off`
    AspectLock(bool),
    Transform(Transform),
    Undo,
    Redo,
}

impl Command {
    /// Run the command against `editor`. Undo and redo without a step
    /// available are logged and skipped.
    pub fn apply(&self, editor: &mut GridEditor) -> pixy_engine_edit::Result<()> {
        match *self {
            Command::Paint { row, column } => editor.paint_cell(row, column)?,
            Command::DrawingColor(color) => editor.set_drawing_color(color),
            Command::Background(color) => editor.set_background_color(color)?,
            Command::Size { rows, columns } => editor.set_dimensions(rows, columns)?,
            Command::Rows(rows) => editor.set_rows(rows)?,
            Command::Columns(columns) => editor.set_columns(columns)?,
            Command::Spacing(spacing) => editor.set_spacing(spacing)?,
            Command::AspectLock(enabled) => editor.set_maintain_aspect_ratio(enabled),
            Command::Transform(transform) => editor.apply_transform(transform)?,
            Command::Undo => {
                if !editor.undo() {
                    log::warn!("Nothing to undo");
                }
            }
            Command::Redo => {
                if !editor.redo() {
                    log::warn!("Nothing to redo");
                }
            }
        }
        Ok(())
    }
}

fn parse_number(value: &str, what: &str) -> anyhow::Result<i32> {
    value.trim().parse().with_context(|| format!("Invalid {what} '{value}'"))
}

fn parse_pair(value: &str, separator: char, what: &str) -> anyhow::Result<(i32, i32)> {
    let (first, second) = value
        .split_once(separator)
        .ok_or_else(|| anyhow!("Expected {what} as two numbers separated by '{separator}', got '{value}'"))?;
    Ok((parse_number(first, what)?, parse_number(second, what)?))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (s, None),
        };
        let name = name.trim().to_ascii_lowercase();

        let command = match (name.as_str(), argument) {
            ("paint", Some(arg)) => {
                let (row, column) = parse_pair(arg, ',', "cell")?;
                Command::Paint { row, column }
            }
            ("color", Some(arg)) => Command::DrawingColor(Color::from_hex(arg)?),
            ("background", Some(arg)) => Command::Background(Color::from_hex(arg)?),
            ("size", Some(arg)) => {
                let (rows, columns) = parse_pair(&arg.to_ascii_lowercase(), 'x', "size")?;
                Command::Size { rows, columns }
            }
            ("rows", Some(arg)) => Command::Rows(parse_number(arg, "row count")?),
            ("columns", Some(arg)) => Command::Columns(parse_number(arg, "column count")?),
            ("spacing", Some(arg)) => Command::Spacing(parse_number(arg, "spacing")?),
            ("aspect", Some(arg)) => match arg.trim() {
                "on" | "true" => Command::AspectLock(true),
                "off" | "false" => Command::AspectLock(false),
                other => bail!("Expected 'on' or 'off' for aspect, got '{other}'"),
            },
            ("flip-v", None) => Command::Transform(Transform::FlipVertical),
            ("flip-h", None) => Command::Transform(Transform::FlipHorizontal),
            ("rotate", None) => Command::Transform(Transform::Rotate90),
            ("center", None) => Command::Transform(Transform::CenterContent),
            ("undo", None) => Command::Undo,
            ("redo", None) => Command::Redo,
            _ => bail!("Unknown command '{s}'"),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Paint { row, column } => write!(f, "paint:{row},{column}"),
            Command::DrawingColor(color) => write!(f, "color:{}", color.to_hex()),
            Command::Background(color) => write!(f, "background:{}", color.to_hex()),
            Command::Size { rows, columns } => write!(f, "size:{rows}x{columns}"),
            Command::Rows(rows) => write!(f, "rows:{rows}"),
            Command::Columns(columns) => write!(f, "columns:{columns}"),
            Command::Spacing(spacing) => write!(f, "spacing:{spacing}"),
            Command::AspectLock(enabled) => write!(f, "aspect:{}", if *enabled { "on" } else { "off" }),
            Command::Transform(Transform::FlipVertical) => write!(f, "flip-v"),
            Command::Transform(Transform::FlipHorizontal) => write!(f, "flip-h"),
            Command::Transform(Transform::Rotate90) => write!(f, "rotate"),
            Command::Transform(Transform::CenterContent) => write!(f, "center"),
            Command::Undo => write!(f, "undo"),
            Command::Redo => write!(f, "redo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_commands() {
        assert_eq!("paint:3,4".parse::<Command>().unwrap(), Command::Paint { row: 3, column: 4 });
        assert_eq!("size:8x12".parse::<Command>().unwrap(), Command::Size { rows: 8, columns: 12 });
        assert_eq!("SIZE:8X12".parse::<Command>().unwrap(), Command::Size { rows: 8, columns: 12 });
        assert_eq!("color:#ff0000".parse::<Command>().unwrap(), Command::DrawingColor(Color::new(255, 0, 0)));
        assert_eq!("background:ffffff".parse::<Command>().unwrap(), Command::Background(Color::WHITE));
        assert_eq!("spacing:4".parse::<Command>().unwrap(), Command::Spacing(4));
        assert_eq!("aspect:off".parse::<Command>().unwrap(), Command::AspectLock(false));
        assert_eq!("rotate".parse::<Command>().unwrap(), Command::Transform(Transform::Rotate90));
        assert_eq!("undo".parse::<Command>().unwrap(), Command::Undo);
    }

    #[test]
    fn test_parse_errors() {
        for input in ["paint", "paint:3", "paint:a,b", "color:red", "aspect:maybe", "rotate:2", "explode", ""] {
            assert!(input.parse::<Command>().is_err(), "'{input}' should not parse");
        }
    }

    #[test]
    fn test_display_parses_back() {
        for input in ["paint:1,2", "size:4x4", "color:#0000ff", "aspect:on", "flip-h", "center", "redo"] {
            assert_eq!(input.parse::<Command>().unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_apply_commands() {
        let mut editor = GridEditor::new();
        for input in ["aspect:off", "size:4x6", "color:#ff0000", "paint:0,0", "flip-v", "paint:0,5", "undo"] {
            input.parse::<Command>().unwrap().apply(&mut editor).unwrap();
        }
        assert_eq!(editor.dimensions(), (4, 6));
        assert_eq!(editor.cell(3, 0).unwrap(), Color::new(255, 0, 0));
        assert_eq!(editor.cell(0, 5).unwrap(), Color::GRAY);
        assert!(editor.can_redo());
    }

    #[test]
    fn test_apply_reports_engine_errors() {
        let mut editor = GridEditor::new();
        assert!(Command::Spacing(3).apply(&mut editor).is_err());
        assert!(Command::Paint { row: 40, column: 0 }.apply(&mut editor).is_err());
        // empty history is not an error
        assert!(Command::Redo.apply(&mut editor).is_ok());
    }
}
