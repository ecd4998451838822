//! A line-oriented command interpreter driving the queue API.
//!
//! The queue library itself never prints or logs; this module turns parsed
//! commands into queue operations and hands printable results back to the
//! caller (the `qshell` binary, or a test).

use std::str::FromStr;

use thiserror::Error;

use crate::{Queue, QueueSet};

/// Errors produced while parsing or executing a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{cmd}` expects {expected}")]
    BadArguments {
        cmd: &'static str,
        expected: &'static str,
    },
    #[error("no active queue; run `new` first")]
    NoQueue,
}

/// A single console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` — create a fresh active queue, dropping any previous one.
    New,
    /// `free` — destroy the active queue.
    Free,
    /// `ih <str> [n]` — insert at the head, `n` times (default 1).
    InsertHead { value: String, count: usize },
    /// `it <str> [n]` — insert at the tail, `n` times (default 1).
    InsertTail { value: String, count: usize },
    /// `rh` — remove from the head and print the payload.
    RemoveHead,
    /// `rt` — remove from the tail and print the payload.
    RemoveTail,
    /// `size` — print the element count.
    Size,
    /// `show` — print the whole queue.
    Show,
    /// `dm` — delete the middle element.
    DeleteMiddle,
    /// `dedup` — delete adjacent duplicate runs.
    DeleteDuplicates,
    /// `swap` — swap adjacent pairs.
    SwapPairs,
    /// `reverse` — reverse the queue.
    Reverse,
    /// `reverseK <k>` — reverse each complete block of `k`.
    ReverseK { k: usize },
    /// `sort [descend]` — merge sort, ascending unless `descend` is given.
    Sort { descending: bool },
    /// `ascend` — monotonic filter, running-maximum sense.
    Ascend,
    /// `descend` — monotonic filter, running-minimum sense.
    Descend,
    /// `stage` — move the active queue into the merge staging area.
    Stage,
    /// `merge [descend]` — merge the active queue with all staged queues.
    Merge { descending: bool },
    /// `help` — print the command list.
    Help,
    /// `quit` — leave the console.
    Quit,
}

const HELP: &str = "\
Commands:
  new                create a fresh queue
  free               destroy the active queue
  ih <str> [n]       insert <str> at the head, n times
  it <str> [n]       insert <str> at the tail, n times
  rh                 remove from the head and print the value
  rt                 remove from the tail and print the value
  size               print the element count
  show               print the queue
  dm                 delete the middle element
  dedup              delete adjacent duplicate runs
  swap               swap adjacent pairs
  reverse            reverse the queue
  reverseK <k>       reverse each complete block of k elements
  sort [descend]     sort the queue
  ascend             keep only running maxima from the right
  descend            keep only running minima from the right
  stage              stage the active queue for a later merge
  merge [descend]    merge active + staged queues into one sorted queue
  help               print this text
  quit               leave the console";

fn parse_count(cmd: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    match arg {
        None => Ok(1),
        Some(raw) => match raw.parse() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(CommandError::BadArguments {
                cmd,
                expected: "an optional positive repeat count",
            }),
        },
    }
}

fn parse_descending(cmd: &'static str, arg: Option<&str>) -> Result<bool, CommandError> {
    match arg {
        None => Ok(false),
        Some("descend") => Ok(true),
        Some(_) => Err(CommandError::BadArguments {
            cmd,
            expected: "an optional `descend` flag",
        }),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or("");
        let arg1 = words.next();
        let arg2 = words.next();
        if words.next().is_some() {
            return Err(CommandError::Unknown(s.trim().to_string()));
        }

        let no_args = |command: Command| match arg1 {
            None => Ok(command),
            Some(_) => Err(CommandError::Unknown(s.trim().to_string())),
        };

        match name {
            "new" => no_args(Command::New),
            "free" => no_args(Command::Free),
            "ih" | "it" => {
                let value = arg1.ok_or(CommandError::BadArguments {
                    cmd: if name == "ih" { "ih" } else { "it" },
                    expected: "a value to insert",
                })?;
                let count = parse_count(if name == "ih" { "ih" } else { "it" }, arg2)?;
                let value = value.to_string();
                Ok(if name == "ih" {
                    Command::InsertHead { value, count }
                } else {
                    Command::InsertTail { value, count }
                })
            }
            "rh" => no_args(Command::RemoveHead),
            "rt" => no_args(Command::RemoveTail),
            "size" => no_args(Command::Size),
            "show" => no_args(Command::Show),
            "dm" => no_args(Command::DeleteMiddle),
            "dedup" => no_args(Command::DeleteDuplicates),
            "swap" => no_args(Command::SwapPairs),
            "reverse" => no_args(Command::Reverse),
            "reverseK" => {
                let k = arg1
                    .and_then(|raw| raw.parse().ok())
                    .ok_or(CommandError::BadArguments {
                        cmd: "reverseK",
                        expected: "a block size",
                    })?;
                Ok(Command::ReverseK { k })
            }
            "sort" => Ok(Command::Sort {
                descending: parse_descending("sort", arg1)?,
            }),
            "ascend" => no_args(Command::Ascend),
            "descend" => no_args(Command::Descend),
            "stage" => no_args(Command::Stage),
            "merge" => Ok(Command::Merge {
                descending: parse_descending("merge", arg1)?,
            }),
            "help" => no_args(Command::Help),
            "quit" | "exit" => no_args(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The result of executing one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A line to print.
    Message(String),
    /// Nothing to print.
    Silent,
    /// The console should terminate.
    Quit,
}

/// Executes commands against an active queue and a merge staging area.
///
/// # Examples
///
/// ```
/// use strqueue::harness::{Interpreter, Outcome};
///
/// let mut interpreter = Interpreter::new();
/// for line in ["new", "it 2", "it 1", "sort"] {
///     interpreter.run(line.parse().unwrap()).unwrap();
/// }
/// let outcome = interpreter.run("show".parse().unwrap()).unwrap();
/// assert_eq!(outcome, Outcome::Message("[\"1\", \"2\"]".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    queue: Option<Queue>,
    staged: Vec<Queue>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    fn active(&mut self) -> Result<&mut Queue, CommandError> {
        self.queue.as_mut().ok_or(CommandError::NoQueue)
    }

    pub fn run(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let outcome = match command {
            Command::New => {
                self.queue = Some(Queue::new());
                Outcome::Silent
            }
            Command::Free => {
                self.active()?;
                self.queue = None;
                Outcome::Silent
            }
            Command::InsertHead { value, count } => {
                let queue = self.active()?;
                for _ in 0..count {
                    queue.push_front(value.as_str());
                }
                Outcome::Silent
            }
            Command::InsertTail { value, count } => {
                let queue = self.active()?;
                for _ in 0..count {
                    queue.push_back(value.as_str());
                }
                Outcome::Silent
            }
            Command::RemoveHead => match self.active()?.pop_front() {
                Some(value) => Outcome::Message(value),
                None => Outcome::Message("(queue is empty)".to_string()),
            },
            Command::RemoveTail => match self.active()?.pop_back() {
                Some(value) => Outcome::Message(value),
                None => Outcome::Message("(queue is empty)".to_string()),
            },
            Command::Size => Outcome::Message(self.active()?.len().to_string()),
            Command::Show => Outcome::Message(format!("{:?}", self.active()?)),
            Command::DeleteMiddle => {
                if self.active()?.delete_middle() {
                    Outcome::Silent
                } else {
                    Outcome::Message("(queue is empty)".to_string())
                }
            }
            Command::DeleteDuplicates => {
                self.active()?.delete_duplicates();
                Outcome::Silent
            }
            Command::SwapPairs => {
                self.active()?.swap_pairs();
                Outcome::Silent
            }
            Command::Reverse => {
                self.active()?.reverse();
                Outcome::Silent
            }
            Command::ReverseK { k } => {
                self.active()?.reverse_k(k);
                Outcome::Silent
            }
            Command::Sort { descending } => {
                self.active()?.sort(descending);
                Outcome::Silent
            }
            Command::Ascend => Outcome::Message(self.active()?.ascend().to_string()),
            Command::Descend => Outcome::Message(self.active()?.descend().to_string()),
            Command::Stage => {
                let queue = self.queue.take().ok_or(CommandError::NoQueue)?;
                self.staged.push(queue);
                Outcome::Silent
            }
            Command::Merge { descending } => {
                let first = self.queue.take().ok_or(CommandError::NoQueue)?;
                let mut set = QueueSet::new();
                set.push(first);
                set.extend(self.staged.drain(..));
                let size = set.merge(descending);
                self.queue = set.into_first();
                Outcome::Message(size.to_string())
            }
            Command::Help => Outcome::Message(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}
