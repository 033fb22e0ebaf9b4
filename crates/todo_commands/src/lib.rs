// crates/todo_commands/src/lib.rs

//! The interactive command language: parsing a command line, computing the
//! view it asks for, and the read-evaluate-print session around it.

pub mod dates;
mod session;
pub mod views;

use chrono::NaiveDate;
use extract_todos::Todo;

pub use session::{run_session, PROMPT, WRONG_COMMAND};

/// Key accepted by `sort`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Importance,
    User,
    Date,
}

impl SortKey {
    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "importance" => Some(SortKey::Importance),
            "user" => Some(SortKey::User),
            "date" => Some(SortKey::Date),
            _ => None,
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Show,
    Important,
    User(String),
    Sort(SortKey),
    /// Todos dated strictly after this day.
    Date(NaiveDate),
    /// Unknown verb or malformed arguments.
    Wrong,
}

/// What a command asks the session to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Table(Vec<Todo>),
    WrongCommand,
}

/// Parses one line of input. Carriage returns are dropped, surrounding
/// whitespace is ignored and the verb is matched case-insensitively.
pub fn parse_command(line: &str) -> Command {
    let line = line.replace('\r', "");
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(verb) = tokens.first() else {
        return Command::Wrong;
    };
    let args = &tokens[1..];

    match verb.to_lowercase().as_str() {
        "exit" => Command::Exit,
        "show" => Command::Show,
        "important" => Command::Important,
        "user" if !args.is_empty() => Command::User(args.join(" ")),
        "sort" => args
            .first()
            .and_then(|key| SortKey::parse(key))
            .map(Command::Sort)
            .unwrap_or(Command::Wrong),
        "date" => args
            .first()
            .and_then(|spec| dates::parse_calendar_point(spec))
            .map(Command::Date)
            .unwrap_or(Command::Wrong),
        _ => Command::Wrong,
    }
}

impl Command {
    /// Computes the outcome of this command over `todos` without modifying them.
    pub fn execute(&self, todos: &[Todo]) -> Outcome {
        match self {
            Command::Exit => Outcome::Exit,
            Command::Show => Outcome::Table(todos.to_vec()),
            Command::Important => Outcome::Table(views::important(todos)),
            Command::User(name) => Outcome::Table(views::by_user(todos, name)),
            Command::Sort(SortKey::Importance) => Outcome::Table(views::sorted_by_importance(todos)),
            Command::Sort(SortKey::User) => Outcome::Table(views::sorted_by_user(todos)),
            Command::Sort(SortKey::Date) => Outcome::Table(views::sorted_by_date(todos)),
            Command::Date(point) => Outcome::Table(views::after_date(todos, *point)),
            Command::Wrong => Outcome::WrongCommand,
        }
    }
}
