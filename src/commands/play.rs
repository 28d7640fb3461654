//! Chat-channel simulator
//!
//! Reads chat lines from stdin and routes them the way a chat bot would:
//!
//! ```text
//! enable                 # "you" enables the game in channel #1
//! alice: guess shark
//! #2 bob: guess crane    # ignored, the game runs in #1
//! bob: guess s 🐑 r
//! disable
//! ```
//!
//! Each line is `[#channel] [name:] text`. Channel defaults to the last one
//! used; name defaults to `you`.

use crate::game::{
    ChannelDirectory, ChannelId, ChannelStatus, GameService, GroupId, Outbound, PlayerId,
    SendError,
};
use crate::output::print_bot_reply;
use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// The one group the simulator plays in
pub const GROUP: GroupId = GroupId(1);

const DEFAULT_PLAYER: &str = "you";

/// A routed chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Guess(Vec<&'a str>),
    Enable,
    Disable,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine<'a> {
    pub channel: Option<ChannelId>,
    pub name: &'a str,
    pub text: &'a str,
}

/// Split a line into channel, speaker and message
///
/// Returns `None` for blank lines and `#` comments.
#[must_use]
pub fn parse_line(line: &str) -> Option<ChatLine<'_>> {
    let mut rest = line.trim();
    if rest.is_empty() || rest.starts_with("# ") || rest == "#" {
        return None;
    }

    let mut channel = None;
    if let Some(tagged) = rest.strip_prefix('#') {
        let (tag, after) = tagged.split_once(char::is_whitespace).unwrap_or((tagged, ""));
        if let Ok(id) = tag.parse() {
            channel = Some(ChannelId(id));
            rest = after.trim_start();
        }
    }

    let (name, text) = match rest.split_once(':') {
        Some((name, text)) if is_name(name) => (name.trim(), text.trim()),
        _ => (DEFAULT_PLAYER, rest),
    };
    if text.is_empty() {
        return None;
    }

    Some(ChatLine {
        channel,
        name,
        text,
    })
}

fn is_name(candidate: &str) -> bool {
    let candidate = candidate.trim();
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Route a message to a command, ignoring chatter
#[must_use]
pub fn route(text: &str) -> Option<ChatCommand<'_>> {
    let mut words = text.split_whitespace();
    let command = words.next()?;
    if command.eq_ignore_ascii_case("guess") {
        Some(ChatCommand::Guess(words.collect()))
    } else if command.eq_ignore_ascii_case("enable") {
        Some(ChatCommand::Enable)
    } else if command.eq_ignore_ascii_case("disable") {
        Some(ChatCommand::Disable)
    } else {
        None
    }
}

/// Prints bot messages to stdout
#[derive(Debug, Default)]
pub struct ConsoleOutbound;

#[async_trait]
impl Outbound for ConsoleOutbound {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), SendError> {
        print_bot_reply(channel, text);
        Ok(())
    }
}

/// Every channel exists and accepts messages
#[derive(Debug, Default)]
pub struct OpenDirectory;

impl ChannelDirectory for OpenDirectory {
    fn status(&self, _channel: ChannelId) -> ChannelStatus {
        ChannelStatus::Sendable
    }
}

/// Stable player ids by name, in order of first appearance
#[derive(Debug, Default)]
pub struct Roster(FxHashMap<String, PlayerId>);

impl Roster {
    pub fn id(&mut self, name: &str) -> PlayerId {
        let next = PlayerId(self.0.len() as u64 + 1);
        *self.0.entry(name.to_lowercase()).or_insert(next)
    }
}

/// Feed stdin lines to the game until EOF
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run_play(service: &GameService) -> std::io::Result<()> {
    service.load(&[GROUP]).await;
    if let Some(channel) = service.games().channel(GROUP) {
        println!("Game running in #{channel}. Type 'guess <word>'.");
    } else {
        println!("No game yet. Type 'enable' to start one in #1.");
    }

    let mut roster = Roster::default();
    let mut channel = service.games().channel(GROUP).unwrap_or(ChannelId(1));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(chat) = parse_line(&line) else {
            continue;
        };
        channel = chat.channel.unwrap_or(channel);
        let player = roster.id(chat.name);

        match route(chat.text) {
            Some(ChatCommand::Guess(args)) => {
                service.guess(GROUP, channel, player, &args).await;
            }
            Some(ChatCommand::Enable) => {
                if let Err(e) = service.enable(GROUP, channel).await {
                    warn!(error = %e, "could not enable game");
                }
            }
            Some(ChatCommand::Disable) => {
                if let Err(e) = service.disable(GROUP, channel).await {
                    warn!(error = %e, "could not disable game");
                }
            }
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_line() {
        assert_eq!(
            parse_line("guess shark"),
            Some(ChatLine {
                channel: None,
                name: "you",
                text: "guess shark"
            })
        );
    }

    #[test]
    fn parse_named_line_with_channel() {
        assert_eq!(
            parse_line("#2 alice: guess 🦈"),
            Some(ChatLine {
                channel: Some(ChannelId(2)),
                name: "alice",
                text: "guess 🦈"
            })
        );
    }

    #[test]
    fn colons_inside_guesses_are_not_names() {
        let line = parse_line("guess <:lawnmower:927011154868449350>").unwrap();
        assert_eq!(line.name, "you");
        assert_eq!(line.text, "guess <:lawnmower:927011154868449350>");

        let line = parse_line("bob: guess <:AYAYA:1>").unwrap();
        assert_eq!(line.name, "bob");
        assert_eq!(line.text, "guess <:AYAYA:1>");
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# a comment"), None);
        assert_eq!(parse_line("alice:"), None);
    }

    #[test]
    fn route_commands() {
        assert_eq!(
            route("guess s 🐑 r"),
            Some(ChatCommand::Guess(vec!["s", "🐑", "r"]))
        );
        assert_eq!(route("GUESS"), Some(ChatCommand::Guess(vec![])));
        assert_eq!(route("enable"), Some(ChatCommand::Enable));
        assert_eq!(route("Disable please"), Some(ChatCommand::Disable));
        assert_eq!(route("hello there"), None);
    }

    #[test]
    fn roster_is_stable() {
        let mut roster = Roster::default();
        let alice = roster.id("alice");
        let bob = roster.id("bob");
        assert_ne!(alice, bob);
        assert_eq!(roster.id("Alice"), alice);
    }
}
