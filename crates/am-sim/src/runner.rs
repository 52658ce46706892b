//! The single-threaded event loop.
//!
//! Commands and fetch results arrive via an `mpsc` channel; ticks come from
//! the controller's [`IntervalTicker`].  Exactly one message is handled at a
//! time, so a tick never starts before the previous tick's position report
//! and proximity check have finished.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

use crate::alert::AlertPlayer;
use crate::display::DisplaySink;
use crate::fetch::RouteFetcher;
use crate::observer::SimObserver;
use crate::state::Event;
use crate::tick::IntervalTicker;
use crate::Controller;

/// What the event loop receives on its channel.
#[derive(Debug)]
pub enum LoopMessage {
    Event(Event),
    Shutdown,
}

/// When [`run_event_loop`] returns on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunUntil {
    /// Only on `Shutdown` or channel disconnect.
    Shutdown,
    /// Also as soon as the controller is settled after handling a message
    /// or tick (finished, or idle with no fetch in flight).
    Settled,
}

/// Why [`run_event_loop`] returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopExit {
    Settled,
    Shutdown,
    Disconnected,
}

/// Run until `until` is satisfied, a `Shutdown` arrives, or every sender is
/// dropped.
pub fn run_event_loop<D, A, F, O>(
    controller: &mut Controller<D, A, IntervalTicker, F>,
    rx:         &Receiver<LoopMessage>,
    observer:   &mut O,
    until:      RunUntil,
) -> LoopExit
where
    D: DisplaySink,
    A: AlertPlayer,
    F: RouteFetcher,
    O: SimObserver,
{
    loop {
        // 1. Fire a due tick before looking at the channel.
        if let Some(epoch) = controller.ticks_mut().poll(Instant::now()) {
            controller.handle(Event::Tick { epoch }, observer);
            if until == RunUntil::Settled && controller.is_settled() {
                return LoopExit::Settled;
            }
            continue;
        }

        // 2. Wait for the next message, but no longer than the next tick.
        let msg = match controller.ticks().next_deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(timeout) {
                    Ok(msg) => msg,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => return LoopExit::Disconnected,
                }
            }
            None => match rx.recv() {
                Ok(msg) => msg,
                Err(_) => return LoopExit::Disconnected,
            },
        };

        // 3. Handle it.
        match msg {
            LoopMessage::Shutdown => return LoopExit::Shutdown,
            LoopMessage::Event(event) => {
                controller.handle(event, observer);
                if until == RunUntil::Settled && controller.is_settled() {
                    return LoopExit::Settled;
                }
            }
        }
    }
}
