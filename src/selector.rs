//! Interactive console protocol
//!
//! The viewer stays responsive while the user types, so the blocking stdin
//! read lives on its own thread and hands complete lines to the frame loop
//! over a channel. Parsing is a pure function so the protocol is testable
//! without a terminal.

use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Prompt shown before every read
pub const PROMPT: &str = "Enter a player number to inspect (e.g. 1), or \"exit\" to quit: ";

/// Pause between console iterations so the loop never spins on stdin
const INPUT_LOOP_PAUSE: Duration = Duration::from_millis(100);

/// One parsed line of console input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorCommand {
    /// The exact sentinel `exit`
    Exit,
    /// A numeric player id to look up
    Select(u32),
    /// Anything else; the caller re-prompts without rendering
    Invalid,
}

/// Parse a console line. Surrounding whitespace is trimmed; the sentinel
/// match is exact and case-sensitive.
pub fn parse_selector_input(line: &str) -> SelectorCommand {
    let trimmed = line.trim();
    if trimmed == "exit" {
        return SelectorCommand::Exit;
    }
    match trimmed.parse::<u32>() {
        Ok(number) => SelectorCommand::Select(number),
        Err(_) => SelectorCommand::Invalid,
    }
}

/// Spawn the stdin reader thread.
///
/// The thread prompts, reads one line, sends it raw, and pauses briefly.
/// It stops on stdin EOF or once the receiving side hangs up.
pub fn spawn_input_thread() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();

    let _ = thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            loop {
                print!("{}", PROMPT);
                let _ = std::io::stdout().flush();

                let mut line = String::new();
                match stdin.lock().read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }
                if tx.send(line).is_err() {
                    break;
                }
                thread::sleep(INPUT_LOOP_PAUSE);
            }
        });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_sentinel_is_exact() {
        assert_eq!(parse_selector_input("exit"), SelectorCommand::Exit);
        assert_eq!(parse_selector_input("  exit\n"), SelectorCommand::Exit);
        // Case-sensitive: anything else is just invalid input.
        assert_eq!(parse_selector_input("EXIT"), SelectorCommand::Invalid);
        assert_eq!(parse_selector_input("exit now"), SelectorCommand::Invalid);
    }

    #[test]
    fn test_integer_input_selects() {
        assert_eq!(parse_selector_input("1"), SelectorCommand::Select(1));
        assert_eq!(parse_selector_input(" 42 \n"), SelectorCommand::Select(42));
    }

    #[test]
    fn test_junk_is_invalid() {
        assert_eq!(parse_selector_input(""), SelectorCommand::Invalid);
        assert_eq!(parse_selector_input("Player_1"), SelectorCommand::Invalid);
        assert_eq!(parse_selector_input("1.5"), SelectorCommand::Invalid);
        assert_eq!(parse_selector_input("-3"), SelectorCommand::Invalid);
    }
}
