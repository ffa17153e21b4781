//! Confetti auto-hide timer.
//!
//! The session issues a [`TimerTicket`] each time the card opens and keeps
//! it as the single outstanding timer. A host schedules the callback with
//! [`wait_out`] and hands the ticket back to
//! [`CardSession::confetti_elapsed`](crate::session::CardSession::confetti_elapsed);
//! a ticket that is no longer the stored one is ignored.

use std::time::Duration;

/// Identifies one scheduled auto-hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    id: u64,
    delay: Duration,
}

impl TimerTicket {
    pub(crate) fn new(id: u64, delay: Duration) -> Self {
        Self { id, delay }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Sleep for the ticket's delay and return it.
pub async fn wait_out(ticket: TimerTicket) -> TimerTicket {
    tokio::time::sleep(ticket.delay).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn wait_out_sleeps_for_delay() {
        let ticket = TimerTicket::new(7, Duration::from_millis(5_000));
        let start = tokio::time::Instant::now();
        let returned = wait_out(ticket).await;
        assert_eq!(returned, ticket);
        assert!(start.elapsed() >= Duration::from_millis(5_000));
    }
}
