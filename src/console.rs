//! Terminal chat host.
//!
//! Reads one line per user turn, feeds it to the engine and prints the
//! assistant reply with any options numbered underneath. Steps that need no
//! input are advanced immediately.

use crate::engine::{ConversationEngine, Reply, Role, Session};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];
const HISTORY_COMMAND: &str = "/history";

/// Run a chat until the input ends or the user quits.
///
/// Blank lines are ignored. When the last reply offered options, the user
/// may answer with the option's number instead of its label.
pub async fn run<R, W>(engine: &ConversationEngine, input: R, mut output: W) -> Result<Session>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new();
    let mut options: Vec<String> = Vec::new();
    let mut lines = input.lines();

    loop {
        if !session.step().expects_input() {
            let (next, reply) = engine.advance(session, "").await;
            session = next;
            options = render(&mut output, &reply)?;
            continue;
        }

        write!(output, "> ").context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(output).context("Failed to write output")?;
            break;
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&line) {
            break;
        }
        if line == HISTORY_COMMAND {
            print_history(&mut output, &session)?;
            continue;
        }

        let message = resolve_option(line, &options);
        let (next, reply) = engine.advance(session, message).await;
        session = next;
        options = render(&mut output, &reply)?;
    }

    info!(
        turns = session.history().len() / 2,
        exercise_count = session.exercise_count(),
        "Chat ended"
    );
    Ok(session)
}

/// Map "1", "2", ... onto the offered option labels.
fn resolve_option<'a>(line: &'a str, options: &'a [String]) -> &'a str {
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(String::as_str)
        .unwrap_or(line)
}

/// Print a reply and return the options now on offer.
fn render<W: Write>(output: &mut W, reply: &Reply) -> Result<Vec<String>> {
    writeln!(output, "\nCoach: {}", reply.message).context("Failed to write reply")?;
    if !reply.expects_options {
        return Ok(Vec::new());
    }

    for (i, option) in reply.options.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, option).context("Failed to write options")?;
    }
    Ok(reply.options.clone())
}

fn print_history<W: Write>(output: &mut W, session: &Session) -> Result<()> {
    for turn in session.history() {
        let speaker = match turn.role {
            Role::User => "You",
            Role::Assistant => "Coach",
        };
        writeln!(
            output,
            "[{}] {}: {}",
            turn.at.format("%H:%M:%S"),
            speaker,
            turn.text
        )
        .context("Failed to write history")?;
    }
    Ok(())
}
