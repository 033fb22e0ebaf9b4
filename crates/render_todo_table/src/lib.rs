// crates/render_todo_table/src/lib.rs

use std::io::{self, Write};

use extract_todos::Todo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Separator placed between cells of a row.
pub const CELL_SEPARATOR: &str = "  |  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    Importance,
    User,
    Date,
    Comment,
    SourceFile,
}

impl Column {
    const ALL: [Column; 5] = [
        Column::Importance,
        Column::User,
        Column::Date,
        Column::Comment,
        Column::SourceFile,
    ];

    fn label(self) -> &'static str {
        match self {
            Column::Importance => "!",
            Column::User => "user",
            Column::Date => "date",
            Column::Comment => "comment",
            Column::SourceFile => "file",
        }
    }

    fn max_width(self) -> usize {
        match self {
            Column::Importance => 1,
            Column::User => 10,
            Column::Date => 10,
            Column::Comment => 50,
            Column::SourceFile => 30,
        }
    }

    fn cell(self, todo: &Todo) -> &str {
        match self {
            Column::Importance => {
                if todo.has_mark {
                    "!"
                } else {
                    ""
                }
            }
            Column::User => &todo.user,
            Column::Date => &todo.date,
            Column::Comment => &todo.comment,
            Column::SourceFile => &todo.source_file,
        }
    }

    /// Longest of the label and every cell, capped at the column maximum.
    fn working_width(self, todos: &[Todo]) -> usize {
        let longest = todos
            .iter()
            .map(|todo| display_width(self.cell(todo)))
            .fold(display_width(self.label()), usize::max);
        longest.min(self.max_width())
    }
}

/// Terminal columns taken by `text`.
fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `budget` terminal columns.
fn take_columns(text: &str, budget: usize) -> String {
    let mut cut = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        cut.push(c);
        used += w;
    }
    cut
}

/// Fits `text` into exactly `width` terminal columns: pads short text with
/// spaces, cuts long text and marks the cut with `...` when there is room for it.
/// A wide character that would straddle the edge is dropped and the gap padded.
pub fn format_cell(text: &str, width: usize) -> String {
    let mut cell = if display_width(text) > width {
        if width > 3 {
            let mut cut = take_columns(text, width - 3);
            cut.push_str("...");
            cut
        } else {
            take_columns(text, width)
        }
    } else {
        text.to_string()
    };
    let used = display_width(&cell);
    cell.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    cell
}

fn format_row<'a, F>(widths: &[(Column, usize)], cell: F) -> String
where
    F: Fn(Column) -> &'a str,
{
    widths
        .iter()
        .map(|&(col, width)| format_cell(cell(col), width))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Writes `todos` as an aligned table: header, separator, one row per todo,
/// separator.
pub fn render_todos<W: Write>(todos: &[Todo], out: &mut W) -> io::Result<()> {
    let widths: Vec<(Column, usize)> = Column::ALL
        .iter()
        .map(|&col| (col, col.working_width(todos)))
        .collect();

    let header = format_row(&widths, Column::label);
    let separator = "-".repeat(display_width(&header));

    writeln!(out, "{}", header)?;
    writeln!(out, "{}", separator)?;
    for todo in todos {
        writeln!(out, "{}", format_row(&widths, |col| col.cell(todo)))?;
    }
    writeln!(out, "{}", separator)?;
    Ok(())
}

/// Renders the table into a `String`.
pub fn render_to_string(todos: &[Todo]) -> String {
    let mut buf = Vec::new();
    render_todos(todos, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}
