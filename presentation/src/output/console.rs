//! Console formatter for workflow results

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use watchparty_application::WatchpartyError;
use watchparty_domain::{ChannelId, ParticipantId, Poll, ProposalRegistry, WinnerDecision};

/// Emoji keycaps used to number poll options
const OPTION_MARKS: [&str; 2] = ["1️⃣", "2️⃣"];

/// Formats workflow results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Every participant's pending proposals
    pub fn proposals(registry: &ProposalRegistry) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            "Here are the movies proposed for Sunday:".cyan().bold()
        ));

        if registry.total_proposals() == 0 {
            output.push_str(&format!("  {}\n", "(no proposals yet)".dimmed()));
            return output;
        }

        for (participant, list) in registry.iter() {
            if list.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "- {} proposed -> {}\n",
                participant.to_string().yellow(),
                list.titles().join(", ")
            ));
        }
        output
    }

    /// The two-option vote, as posted in the channel
    pub fn poll(channel: &ChannelId, poll: &Poll) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("#{}", channel)));
        output.push_str(&format!("{}\n", "Vote @everyone".bold()));
        output.push_str(&format!("{}\n", poll.question().cyan()));
        for (mark, candidate) in OPTION_MARKS.iter().zip(poll.candidates()) {
            output.push_str(&format!("  {} {}\n", mark, candidate.title.bold()));
        }
        output.push_str(&format!(
            "{} {}  (/vote 1 or /vote 2)\n",
            "Closes:".dimmed(),
            Self::timestamp(poll.closes_at())
        ));
        output
    }

    /// Announcement after the winner moved to the blacklist
    pub fn resolution(decision: &WinnerDecision) -> String {
        let mut output = format!(
            "{} {} ({} - {})\n",
            "Winner:".green().bold(),
            decision.winner.title.bold(),
            decision.winner_votes,
            decision.runner_up_votes
        );
        if decision.tie_break {
            output.push_str(&format!(
                "{}\n",
                "Tie! The first option wins by default.".yellow()
            ));
        }
        output.push_str(&format!(
            "Movie {} has been removed from {}'s list and added to the blacklist\n",
            decision.winner.title, decision.winner.participant
        ));
        output
    }

    pub fn added(participant: &ParticipantId, title: &str) -> String {
        format!("{} movie {} added by {}", "✓".green(), title.bold(), participant)
    }

    pub fn removed(participant: &ParticipantId, title: &str) -> String {
        format!(
            "{} {} removed movie {} from their list",
            "✓".green(),
            participant,
            title.bold()
        )
    }

    pub fn bound(channel: &ChannelId, previous: Option<&ChannelId>) -> String {
        match previous {
            Some(previous) if previous != channel => format!(
                "{} Bot moved from #{} to #{}, rerun /setup to change it again",
                "✓".green(),
                previous,
                channel
            ),
            _ => format!(
                "{} Bot setup in #{}, rerun /setup to modify the channel",
                "✓".green(),
                channel
            ),
        }
    }

    /// Removal autocomplete hints
    pub fn suggestions(titles: &[String]) -> String {
        if titles.is_empty() {
            return format!("{}", "No matching movies in your list".dimmed());
        }
        let mut output = format!("{}\n", "Did you mean:".cyan());
        for title in titles {
            output.push_str(&format!("  - {}\n", title));
        }
        output
    }

    /// Message for a failed request.
    ///
    /// User-facing errors are shown verbatim; anything else is reported as a
    /// generic failure and left to the logs.
    pub fn error(error: &WatchpartyError) -> String {
        if error.is_user_facing() {
            format!("{} {}", "✗".yellow(), error)
        } else {
            format!(
                "{} Something went wrong ({}), see the logs for details",
                "✗".red().bold(),
                error
            )
        }
    }

    /// Local time of a millisecond epoch timestamp
    pub fn timestamp(millis: u64) -> String {
        i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|utc| {
                utc.with_timezone(&Local)
                    .format("%a %d %b %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn header(title: &str) -> String {
        let line = "─".repeat(40);
        format!("{}\n{}\n", line.dimmed(), title.bold())
    }
}
