//! Protokoll erfolgreich ausgeführter Commands (Diagnose, Tests).
//!
//! Fehlgeschlagene Commands landen nie im Log; der Controller trägt erst
//! nach erfolgreichem Handler-Lauf ein.

use super::AppCommand;

/// Obergrenze; beim Überlauf fällt die ältere Hälfte weg.
const CAPACITY: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    executed: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trägt einen erfolgreich ausgeführten Command ein.
    pub fn record_executed(&mut self, command: AppCommand) {
        if self.executed.len() == CAPACITY {
            self.executed.drain(..CAPACITY / 2);
            log::debug!("Command-Log gekürzt auf {} Einträge", self.executed.len());
        }
        self.executed.push(command);
    }

    pub fn len(&self) -> usize {
        self.executed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.executed.last()
    }

    /// Alle eingetragenen Commands, ältester zuerst.
    pub fn executed(&self) -> &[AppCommand] {
        &self.executed
    }
}
