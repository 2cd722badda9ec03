//! NDJSON event stream for `--json`.
//!
//! A command writes one JSON object per line: `start`, then any number of
//! `data` and `warning` lines, then `complete` or `error`. Every line carries
//! the event kind and the command name; the rest of the object is the body.

use std::io::{self, Write};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum EventKind {
    Start,
    Data,
    Warning,
    Complete,
    Error,
}

#[derive(Serialize)]
struct Line<'a, B: Serialize> {
    event: EventKind,
    command: &'a str,
    #[serde(flatten)]
    body: B,
}

/// Writes the events of one command invocation.
pub struct EventStream<'a, W: Write = io::Stdout> {
    command: &'a str,
    out: W,
}

impl<'a> EventStream<'a> {
    pub fn stdout(command: &'a str) -> Self {
        Self::to_writer(command, io::stdout())
    }
}

impl<'a, W: Write> EventStream<'a, W> {
    pub fn to_writer(command: &'a str, out: W) -> Self {
        Self { command, out }
    }

    pub fn start(&mut self) -> io::Result<()> {
        #[derive(Serialize)]
        struct Start {
            version: &'static str,
        }
        self.write(
            EventKind::Start,
            Start {
                version: env!("CARGO_PKG_VERSION"),
            },
        )
    }

    /// The payload's fields sit next to `event` and `command`, so it must
    /// serialize as a map (a struct with named fields).
    pub fn data<T: Serialize + ?Sized>(&mut self, payload: &T) -> io::Result<()> {
        self.write(EventKind::Data, payload)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        #[derive(Serialize)]
        struct Warning<'m> {
            message: &'m str,
        }
        self.write(EventKind::Warning, Warning { message })
    }

    pub fn complete(&mut self, success: bool) -> io::Result<()> {
        #[derive(Serialize)]
        struct Complete {
            success: bool,
        }
        self.write(EventKind::Complete, Complete { success })
    }

    pub fn error(&mut self, code: &str, message: &str, help: Option<&str>) -> io::Result<()> {
        #[derive(Serialize)]
        struct Failure<'m> {
            code: &'m str,
            message: &'m str,
            #[serde(skip_serializing_if = "Option::is_none")]
            help: Option<&'m str>,
        }
        self.write(
            EventKind::Error,
            Failure {
                code,
                message,
                help,
            },
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write<B: Serialize>(&mut self, event: EventKind, body: B) -> io::Result<()> {
        let line = serde_json::to_string(&Line {
            event,
            command: self.command,
            body,
        })?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}
