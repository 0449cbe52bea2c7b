//! Line mapping from typed text to game commands.

use crate::types::Command;

/// Map one line of input to a command.
///
/// The line is trimmed and lowercased first, so `" W\n"` means up.
pub fn parse_line(line: &str) -> Option<Command> {
    Command::from_str(line)
}

/// Check if a line is the quit command.
pub fn should_quit(line: &str) -> bool {
    matches!(parse_line(line), Some(Command::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_movement_lines() {
        assert_eq!(parse_line("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(parse_line("s"), Some(Command::Move(Direction::Down)));
        assert_eq!(parse_line("a"), Some(Command::Move(Direction::Left)));
        assert_eq!(parse_line("d"), Some(Command::Move(Direction::Right)));

        assert_eq!(parse_line("W\n"), Some(Command::Move(Direction::Up)));
        assert_eq!(parse_line("\t D  \r\n"), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_unknown_lines() {
        assert_eq!(parse_line("z"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("\n"), None);
        assert_eq!(parse_line("w s"), None);
        assert_eq!(parse_line("up"), None);
    }

    #[test]
    fn test_quit_lines() {
        assert!(should_quit("q"));
        assert!(should_quit(" Q \n"));
        assert!(!should_quit("x"));
        assert!(!should_quit("quit"));
    }
}
