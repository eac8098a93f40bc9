use log::trace;
use std::time::Duration;


/// Handle for one "running" highlight
/// The host schedules a timer for `duration` and hands the ticket back when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTicket {
    id: u64,
    pub duration: Duration,
}

/// Cosmetic running flag
/// Every start or cancel bumps the generation, so tickets from older runs go stale
#[derive(Clone, Debug, Default)]
pub struct RunState {
    running: bool,
    generation: u64,
}

impl RunState {

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, duration: Duration) -> RunTicket {
        self.generation += 1;
        self.running = true;
        RunTicket { id: self.generation, duration }
    }

    /// Clear the flag if `ticket` belongs to the current run
    /// Returns false for stale tickets, which leave the flag alone
    pub fn finish(&mut self, ticket: RunTicket) -> bool {
        if ticket.id != self.generation || !self.running {
            trace!("ignoring stale run ticket {}", ticket.id);
            return false;
        }
        self.running = false;
        true
    }

    /// Stop the current run and invalidate its ticket
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.running = false;
    }
}
