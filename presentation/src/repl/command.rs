//! Slash command parsing for the REPL

use std::fmt;

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    ListMovies,
    AddMovie(String),
    DeleteMovie(String),
    Suggest(String),
    ExtractMovie,
    Vote(u32),
    ClosePoll,
    Setup(String),
    SwitchParticipant(String),
    SwitchChannel(String),
    Admin(bool),
    Whoami,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NotACommand,
    Unknown(String),
    MissingArgument { command: &'static str, usage: &'static str },
    InvalidArgument { command: &'static str, usage: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NotACommand => write!(f, "Commands start with '/', type /help"),
            ParseError::Unknown(cmd) => {
                write!(f, "Unknown command: {}\nType /help for available commands", cmd)
            }
            ParseError::MissingArgument { command, usage }
            | ParseError::InvalidArgument { command, usage } => {
                write!(f, "Usage: {} {}", command, usage)
            }
        }
    }
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if !line.starts_with('/') {
            return Err(ParseError::NotACommand);
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, usage: &'static str| {
            if arg.is_empty() {
                Err(ParseError::MissingArgument { command, usage })
            } else {
                Ok(arg.to_string())
            }
        };

        match cmd {
            "/listmovie" | "/list" => Ok(ReplCommand::ListMovies),
            "/addmovie" | "/add" => required("/addmovie", "<title>").map(ReplCommand::AddMovie),
            "/deletemovie" | "/delete" => {
                required("/deletemovie", "<title>").map(ReplCommand::DeleteMovie)
            }
            "/suggest" => Ok(ReplCommand::Suggest(arg.to_string())),
            "/extractmovie" | "/extract" => Ok(ReplCommand::ExtractMovie),
            "/vote" => {
                let raw = required("/vote", "<1|2>")?;
                raw.parse().map(ReplCommand::Vote).map_err(|_| {
                    ParseError::InvalidArgument {
                        command: "/vote",
                        usage: "<1|2>",
                    }
                })
            }
            "/closepoll" => Ok(ReplCommand::ClosePoll),
            "/setup" => required("/setup", "<channel>")
                .map(|c| ReplCommand::Setup(c.trim_start_matches('#').to_string())),
            "/as" => required("/as", "<participant>").map(ReplCommand::SwitchParticipant),
            "/in" => required("/in", "<channel>")
                .map(|c| ReplCommand::SwitchChannel(c.trim_start_matches('#').to_string())),
            "/admin" => match arg {
                "on" => Ok(ReplCommand::Admin(true)),
                "off" => Ok(ReplCommand::Admin(false)),
                _ => Err(ParseError::InvalidArgument {
                    command: "/admin",
                    usage: "on|off",
                }),
            },
            "/whoami" => Ok(ReplCommand::Whoami),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}
