//! REPL (Read-Eval-Print Loop) emulating the chat commands
//!
//! Each line runs as the current simulated participant, from the current
//! simulated channel. `/as`, `/in` and `/admin` switch that identity.

mod command;

pub use command::{ParseError, ReplCommand};

use crate::output::console::ConsoleFormatter;
use crate::poll::{BallotBox, PollTimer};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::{debug, warn};
use watchparty_application::{
    ExclusionStore, Invocation, PollPresenter, ProposalStore, Watchparty, WatchpartyError,
};
use watchparty_domain::{ChannelId, DomainError, ParticipantId};

/// Who is typing, and where
#[derive(Debug, Clone)]
pub struct Identity {
    pub participant: ParticipantId,
    pub channel: ChannelId,
    pub admin: bool,
}

impl Identity {
    pub fn new(participant: impl Into<ParticipantId>, channel: impl Into<ChannelId>) -> Self {
        Self {
            participant: participant.into(),
            channel: channel.into(),
            admin: false,
        }
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    fn invocation(&self) -> Invocation {
        Invocation::new(self.participant.clone(), self.channel.clone())
    }
}

/// Whether the loop should keep reading
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive watchparty REPL
pub struct WatchpartyRepl<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    workflow: Arc<Watchparty<P, E, V>>,
    timer: Arc<PollTimer<P, E, V>>,
    ballots: Arc<BallotBox>,
    identity: Identity,
}

impl<P, E, V> WatchpartyRepl<P, E, V>
where
    P: ProposalStore + 'static,
    E: ExclusionStore + 'static,
    V: PollPresenter + 'static,
{
    pub fn new(
        workflow: Arc<Watchparty<P, E, V>>,
        ballots: Arc<BallotBox>,
        identity: Identity,
    ) -> Self {
        let timer = Arc::new(PollTimer::new(workflow.clone(), ballots.clone()));
        Self {
            workflow,
            timer,
            ballots,
            identity,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("watchparty").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome().await;

        loop {
            let prompt = format!("{}@#{}> ", self.identity.participant, self.identity.channel);
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match ReplCommand::parse(line) {
                        Ok(command) => {
                            if self.execute(command).await == Flow::Exit {
                                break;
                            }
                        }
                        Err(e) => println!("{}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Watchparty - Movie Night          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        match self.workflow.bound_channel().await {
            Some(channel) => println!("Bound to #{}", channel),
            None => println!(
                "{}",
                "No channel set up yet: /admin on, then /setup <channel>".yellow()
            ),
        }
        println!("Type /help for commands");
        println!();
    }

    fn print_help() {
        println!();
        println!("Chat commands:");
        println!("  /listmovie             - List everyone's proposals");
        println!("  /addmovie <title>      - Propose a movie");
        println!("  /deletemovie <title>   - Remove one of your movies (exact title)");
        println!("  /suggest [partial]     - Find titles in your list");
        println!("  /extractmovie          - Draw two movies and open the poll");
        println!("  /setup <channel>       - Bind the bot to a channel (admin)");
        println!();
        println!("Simulation:");
        println!("  /vote <1|2>            - Vote in the open poll");
        println!("  /closepoll             - Close the poll now");
        println!("  /as <participant>      - Act as another participant");
        println!("  /in <channel>          - Type from another channel");
        println!("  /admin on|off          - Toggle administrator permission");
        println!("  /whoami                - Show the current identity");
        println!("  /help, /quit");
        println!();
    }

    async fn execute(&mut self, command: ReplCommand) -> Flow {
        debug!(participant = %self.identity.participant, ?command, "REPL command");
        let invocation = self.identity.invocation();

        match command {
            ReplCommand::ListMovies => match self.workflow.list(&invocation).await {
                Ok(registry) => print!("{}", ConsoleFormatter::proposals(&registry)),
                Err(e) => Self::report(&e),
            },
            ReplCommand::AddMovie(title) => match self.workflow.submit(&invocation, &title).await {
                Ok(stored) => println!("{}", ConsoleFormatter::added(&invocation.participant, &stored)),
                Err(e) => Self::report(&e),
            },
            ReplCommand::DeleteMovie(title) => {
                match self.workflow.remove(&invocation, &title).await {
                    Ok(removed) => {
                        println!("{}", ConsoleFormatter::removed(&invocation.participant, &removed))
                    }
                    Err(e) => {
                        Self::report(&e);
                        if matches!(
                            e,
                            WatchpartyError::Domain(DomainError::ProposalNotFound { .. })
                        ) {
                            if let Ok(hits) = self.workflow.suggest(&invocation, &title).await {
                                print!("{}", ConsoleFormatter::suggestions(&hits));
                            }
                        }
                    }
                }
            }
            ReplCommand::Suggest(partial) => {
                match self.workflow.suggest(&invocation, &partial).await {
                    Ok(hits) => print!("{}", ConsoleFormatter::suggestions(&hits)),
                    Err(e) => Self::report(&e),
                }
            }
            ReplCommand::ExtractMovie => match self.workflow.draw(&invocation).await {
                Ok(poll) => self.timer.schedule(invocation.channel.clone(), poll.duration()),
                Err(e) => Self::report(&e),
            },
            ReplCommand::Vote(answer) => {
                if let Err(e) = self.workflow.check_channel(&invocation.channel).await {
                    Self::report(&e);
                    return Flow::Continue;
                }
                match self.ballots.cast(&invocation.participant, answer) {
                    Ok(Some(previous)) if previous != answer => {
                        println!("Vote changed from {} to {}", previous, answer)
                    }
                    Ok(_) => println!("Vote recorded for option {}", answer),
                    Err(e) => println!("{} {}", "✗".yellow(), e),
                }
            }
            ReplCommand::ClosePoll => {
                if let Err(e) = self.timer.close_now(&invocation.channel).await {
                    Self::report(&e);
                }
            }
            ReplCommand::Setup(channel) => {
                let channel = ChannelId::from(channel);
                match self
                    .workflow
                    .bind_channel(&invocation, self.identity.admin, channel.clone())
                    .await
                {
                    Ok(previous) => {
                        println!("{}", ConsoleFormatter::bound(&channel, previous.as_ref()))
                    }
                    Err(e) => Self::report(&e),
                }
            }
            ReplCommand::SwitchParticipant(name) => {
                self.identity.participant = ParticipantId::from(name);
                println!("Now acting as {}", self.identity.participant);
            }
            ReplCommand::SwitchChannel(channel) => {
                self.identity.channel = ChannelId::from(channel);
                println!("Now typing in #{}", self.identity.channel);
            }
            ReplCommand::Admin(admin) => {
                self.identity.admin = admin;
                println!("Administrator permission {}", if admin { "on" } else { "off" });
            }
            ReplCommand::Whoami => println!(
                "{} in #{}{}",
                self.identity.participant,
                self.identity.channel,
                if self.identity.admin { " (admin)" } else { "" }
            ),
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    fn report(error: &WatchpartyError) {
        if !error.is_user_facing() {
            warn!("Request failed: {}", error);
        }
        println!("{}", ConsoleFormatter::error(error));
    }
}
