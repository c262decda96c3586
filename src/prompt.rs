//! Line commands for the interactive search prompt

use tracing::debug;

use crate::render::RenderModel;
use crate::session::{SearchOutcome, SearchSession};

pub const NO_SUCH_CARD: &str = "No such recommendation.";
pub const CLEARED: &str = "Results cleared.";

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Quit,
    Clear,
    /// `:visit N`; `None` when the number is missing or malformed
    Visit(Option<usize>),
    Search(String),
}

impl PromptCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            ":quit" | ":q" => PromptCommand::Quit,
            ":clear" => PromptCommand::Clear,
            _ => match line.strip_prefix(":visit") {
                Some(rest) => PromptCommand::Visit(rest.trim().parse().ok()),
                None => PromptCommand::Search(line.to_string()),
            },
        }
    }
}

/// What the prompt loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Show(String),
    /// A superseded search; nothing to print
    Silent,
    Quit,
}

/// Interactive state: the session plus the model currently on screen
pub struct Prompt<'a> {
    session: &'a SearchSession,
    current: RenderModel,
}

impl<'a> Prompt<'a> {
    pub fn new(session: &'a SearchSession) -> Self {
        Self {
            session,
            current: RenderModel::Cleared,
        }
    }

    pub fn current(&self) -> &RenderModel {
        &self.current
    }

    pub async fn handle(&mut self, line: &str) -> PromptReply {
        match PromptCommand::parse(line) {
            PromptCommand::Quit => PromptReply::Quit,
            PromptCommand::Clear => {
                self.current = self.session.clear();
                PromptReply::Show(CLEARED.to_string())
            }
            PromptCommand::Visit(number) => {
                match number.and_then(|n| self.current.card(n)) {
                    Some(card) => PromptReply::Show(card.visit()),
                    None => PromptReply::Show(NO_SUCH_CARD.to_string()),
                }
            }
            PromptCommand::Search(term) => match self.session.search(&term).await {
                Ok(SearchOutcome::Current(model)) => {
                    let shown = model.to_string();
                    self.current = model;
                    PromptReply::Show(shown)
                }
                Ok(SearchOutcome::Superseded) => {
                    debug!("Dropping superseded search for {term:?}");
                    PromptReply::Silent
                }
                Err(e) => PromptReply::Show(e.user_message()),
            },
        }
    }
}
