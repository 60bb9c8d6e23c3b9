//! Console formatting for chat messages

use colored::Colorize;
use zar_domain::{Message, Origin};

/// Formats chat messages for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one rendered message.
    ///
    /// The text is printed as-is; no markup is interpreted.
    pub fn format_message(message: &Message, bot_name: &str) -> String {
        let label = match message.origin() {
            Origin::User => "Você:".cyan().bold(),
            Origin::Bot => format!("{}:", bot_name).green().bold(),
        };

        let mut output = format!("{}\n", label);
        output.push_str(&Self::indent(message.text(), "  "));
        output.push('\n');
        output
    }

    /// Turn off ANSI colors for everything printed from now on
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Text shown next to the typing spinner
    pub fn typing_text(bot_name: &str) -> String {
        format!("{} está digitando...", bot_name)
    }

    /// Banner printed when the REPL starts
    pub fn welcome(bot_name: &str, endpoint: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str(&format!("│{:^45}│\n", format!("{} - Chat", bot_name)));
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Servidor:".dimmed(), endpoint));
        output.push('\n');
        output.push_str(&Self::help());
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str("Commands:\n");
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /quit, /exit, /q  - Exit chat\n");
        output
    }

    /// Indent every line of `text`, keeping blank and trailing lines
    pub fn indent(text: &str, prefix: &str) -> String {
        text.split('\n')
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bot_message() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_message(&Message::bot("hi there"), "ZAR");
        assert_eq!(out, "ZAR:\n  hi there\n");
    }

    #[test]
    fn test_format_multiline_user_message() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_message(&Message::user("a\nb"), "ZAR");
        assert_eq!(out, "Você:\n  a\n  b\n");
    }

    #[test]
    fn test_markup_is_not_interpreted() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_message(&Message::bot("<b>x</b>"), "ZAR");
        assert!(out.contains("<b>x</b>"));
    }

    #[test]
    fn test_typing_text() {
        assert_eq!(ConsoleFormatter::typing_text("ZAR"), "ZAR está digitando...");
    }

    #[test]
    fn test_reply_blank_lines_preserved() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_message(&Message::bot("a\n\nb\n"), "ZAR");
        assert_eq!(out, "ZAR:\n  a\n  \n  b\n  \n");
    }

    #[test]
    fn test_empty_reply_still_gets_a_line() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format_message(&Message::bot(""), "ZAR");
        assert_eq!(out, "ZAR:\n  \n");
    }
}
