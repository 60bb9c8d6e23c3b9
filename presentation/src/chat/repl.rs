//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::widget::{TerminalInput, TerminalSubmit};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use zar_application::{ChatGateway, ChatWidgetController, InputControl, SubmitOutcome};

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; returns None for ordinary messages
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}

/// Interactive chat REPL
///
/// Each line read from the editor is written to the input control and
/// submitted, the way Enter submits the field in a page.
pub struct ChatRepl<G: ChatGateway + 'static> {
    controller: ChatWidgetController<G>,
    input: Arc<TerminalInput>,
    submit: Arc<TerminalSubmit>,
    bot_name: String,
    endpoint: String,
}

impl<G: ChatGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(
        controller: ChatWidgetController<G>,
        input: Arc<TerminalInput>,
        submit: Arc<TerminalSubmit>,
    ) -> Self {
        Self {
            controller,
            input,
            submit,
            bot_name: "ZAR".to_string(),
            endpoint: String::new(),
        }
    }

    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }

    /// Backend address shown in the welcome banner
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Submit one line without entering the loop
    pub async fn send_line(&self, line: &str) -> SubmitOutcome {
        // Enter is ignored while the field is disabled
        if !self.input.is_enabled() {
            return SubmitOutcome::Busy;
        }
        self.input.set_value(line);
        self.controller.submit_from_input().await
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.controller.initialize();
        print!("{}", ConsoleFormatter::welcome(&self.bot_name, &self.endpoint));
        println!();

        loop {
            let readline = rl.readline(&self.submit.prompt());

            match readline {
                Ok(line) => {
                    if let Some(command) = ReplCommand::parse(&line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.trim());
                    }

                    println!();
                    self.send_line(&line).await;
                    self.input.take_focus();
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

        Ok(())
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                print!("{}", ConsoleFormatter::help());
                println!();
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{TerminalContainer, TerminalWidget};
    use async_trait::async_trait;
    use zar_application::GatewayError;
    use zar_domain::{Message, UserText};

    struct EchoGateway;

    #[async_trait]
    impl ChatGateway for EchoGateway {
        async fn send(&self, text: &UserText) -> Result<String, GatewayError> {
            Ok(format!("echo: {}", text))
        }
    }

    fn repl() -> (ChatRepl<EchoGateway>, TerminalWidget) {
        let widget = TerminalWidget::with_container(
            TerminalContainer::new("ZAR", Box::new(std::io::sink())).without_spinner(),
        );
        let controller = ChatWidgetController::new(Arc::new(EchoGateway), widget.controls());
        let repl = ChatRepl::new(
            controller,
            Arc::clone(&widget.input),
            Arc::clone(&widget.submit),
        );
        (repl, widget)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse(" /help "), Some(ReplCommand::Help));
        assert_eq!(
            ReplCommand::parse("/nope"),
            Some(ReplCommand::Unknown("/nope".to_string()))
        );
        assert_eq!(ReplCommand::parse("hello /q"), None);
    }

    #[tokio::test]
    async fn test_send_line_runs_turn() {
        let (repl, widget) = repl();
        let outcome = repl.send_line("  hello ").await;

        assert_eq!(outcome, SubmitOutcome::Replied("echo: hello".to_string()));
        assert_eq!(
            widget.container.messages(),
            vec![Message::user("hello"), Message::bot("echo: hello")]
        );
        assert!(widget.input.value().is_empty());
        assert!(widget.input.take_focus());
        assert!(widget.submit.is_enabled());
        assert_eq!(widget.submit.label(), "Enviar");
    }

    #[tokio::test]
    async fn test_send_blank_line_is_ignored() {
        let (repl, widget) = repl();
        assert_eq!(repl.send_line("   ").await, SubmitOutcome::Ignored);
        assert!(widget.container.messages().is_empty());
    }

    #[tokio::test]
    async fn test_send_line_while_disabled() {
        let (repl, widget) = repl();
        widget.input.set_enabled(false);
        assert_eq!(repl.send_line("hello").await, SubmitOutcome::Busy);
        assert!(widget.container.messages().is_empty());
    }
}
