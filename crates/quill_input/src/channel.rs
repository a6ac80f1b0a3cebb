//! # Event Channel
//!
//! Ordered, non-blocking delivery from input callbacks to the frame loop.
//!
//! ```text
//!  publish() ──unbounded──> [ forwarder: VecDeque ] ──bounded(n)──> drain()
//! ```
//!
//! The forwarder owns the only buffer that can grow. On every wake-up it
//! waits for whichever comes first: a new event from the producers, or
//! room in the consumer side. Producers therefore never block, the
//! consumer never blocks, and a single queue keeps the publish order.
//!
//! When every publisher is gone the forwarder flushes what it still holds
//! before closing the consumer side, so nothing published is lost.

use std::cell::Cell;
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{
    bounded, select, unbounded, Receiver, RecvTimeoutError, Sender, TryRecvError,
};

use crate::error::InputResult;
use crate::event::Event;

/// Constructor for the publisher/stream pair.
pub struct EventChannel;

impl EventChannel {
    /// Opens a channel and starts its forwarder thread.
    ///
    /// # Arguments
    ///
    /// * `forward_capacity` - How many events may sit on the consumer side
    ///   before the forwarder keeps them in its own buffer. `0` hands over
    ///   one event at a time, only while the consumer is receiving.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Spawn`](crate::InputError::Spawn) if the
    /// forwarder thread cannot be started.
    pub fn new(forward_capacity: usize) -> InputResult<(EventPublisher, EventStream)> {
        let (in_tx, in_rx) = unbounded();
        let (out_tx, out_rx) = bounded(forward_capacity);

        thread::Builder::new()
            .name("quill-event-forwarder".into())
            .spawn(move || forward(&in_rx, &out_tx))?;

        tracing::debug!(forward_capacity, "event forwarder started");

        Ok((
            EventPublisher { sender: in_tx },
            EventStream {
                receiver: out_rx,
                closed: Cell::new(false),
            },
        ))
    }
}

enum Step {
    Received(Event),
    Forwarded,
    InputClosed,
    OutputClosed,
}

fn forward(input: &Receiver<Event>, output: &Sender<Event>) {
    let mut queue: VecDeque<Event> = VecDeque::with_capacity(64);

    loop {
        let step = match queue.front() {
            None => input.recv().map_or(Step::InputClosed, Step::Received),
            Some(&front) => select! {
                recv(input) -> msg => msg.map_or(Step::InputClosed, Step::Received),
                send(output, front) -> res => {
                    if res.is_ok() { Step::Forwarded } else { Step::OutputClosed }
                }
            },
        };

        match step {
            Step::Received(event) => queue.push_back(event),
            Step::Forwarded => {
                queue.pop_front();
            }
            Step::InputClosed => break,
            Step::OutputClosed => {
                tracing::debug!(dropped = queue.len(), "event consumer gone, forwarder stopping");
                return;
            }
        }
    }

    // Producers are gone. Hand over what is left, still in order.
    let pending = queue.len();
    for event in queue {
        if output.send(event).is_err() {
            return;
        }
    }
    tracing::debug!(flushed = pending, "event forwarder finished");
}

/// Producer handle. Clone it for every callback that publishes.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<Event>,
}

impl EventPublisher {
    /// Publishes an event. Never blocks.
    ///
    /// Returns `false` only when the consumer side is gone and the event
    /// has nowhere to go.
    #[inline]
    pub fn publish(&self, event: Event) -> bool {
        if self.sender.send(event).is_ok() {
            true
        } else {
            tracing::warn!(kind = event.kind(), "event published after consumer shut down");
            false
        }
    }
}

/// Consumer handle, polled by the frame loop.
pub struct EventStream {
    receiver: Receiver<Event>,
    closed: Cell<bool>,
}

impl EventStream {
    /// Receives everything the forwarder has handed over (non-blocking).
    ///
    /// Returns an empty vector when nothing is pending. Events still
    /// travelling through the forwarder show up on a later drain, never
    /// out of order. In a frame loop this means input published during
    /// this frame's `alive()` poll may only arrive on the next frame's
    /// drain.
    pub fn drain(&self) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.receiver.len().max(8));
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed.set(true);
                    break;
                }
            }
        }
        events
    }

    /// Receives one event, blocking until one arrives.
    ///
    /// Returns `None` once the channel is closed and fully flushed.
    pub fn recv(&self) -> Option<Event> {
        if let Ok(event) = self.receiver.recv() {
            Some(event)
        } else {
            self.closed.set(true);
            None
        }
    }

    /// Receives one event, waiting at most `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.closed.set(true);
                None
            }
        }
    }

    /// Blocking iterator that ends when the channel is closed.
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        std::iter::from_fn(move || self.recv())
    }

    /// Returns true once a receive has observed end-of-stream.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Position;
    use std::time::Instant;

    fn moved(i: i32) -> Event {
        Event::PointerMove(Position::new(i, 0))
    }

    fn drain_until_closed(stream: &EventStream) -> Vec<Event> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut got = Vec::new();
        while !stream.is_closed() {
            assert!(Instant::now() < deadline, "channel never closed");
            got.extend(stream.drain());
            thread::yield_now();
        }
        got
    }

    #[test]
    fn test_drain_empty_returns_immediately() {
        let (_publisher, stream) = EventChannel::new(16).unwrap();

        let start = Instant::now();
        let events = stream.drain();

        assert!(events.is_empty());
        assert!(!stream.is_closed());
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_fifo_single_producer() {
        let (publisher, stream) = EventChannel::new(4).unwrap();

        for i in 0..500 {
            assert!(publisher.publish(moved(i)));
        }
        drop(publisher);

        let got = drain_until_closed(&stream);
        let expected: Vec<_> = (0..500).map(moved).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_fifo_with_concurrent_drains() {
        let (publisher, stream) = EventChannel::new(2).unwrap();

        let producer = thread::spawn(move || {
            for i in 0..2000 {
                publisher.publish(moved(i));
                if i % 97 == 0 {
                    thread::yield_now();
                }
            }
        });

        let got = drain_until_closed(&stream);
        producer.join().unwrap();

        let expected: Vec<_> = (0..2000).map(moved).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_fifo_per_producer_with_concurrent_producers() {
        const PRODUCERS: i32 = 4;
        const PER_PRODUCER: i32 = 1000;

        let (publisher, stream) = EventChannel::new(3).unwrap();
        let producers: Vec<_> = (0..PRODUCERS)
            .map(|tag| {
                let publisher = publisher.clone();
                thread::spawn(move || {
                    for seq in 0..PER_PRODUCER {
                        assert!(publisher.publish(Event::PointerMove(Position::new(seq, tag))));
                    }
                })
            })
            .collect();
        drop(publisher);

        let got = drain_until_closed(&stream);
        for producer in producers {
            producer.join().unwrap();
        }

        assert_eq!(got.len(), (PRODUCERS * PER_PRODUCER) as usize);
        let mut next = vec![0; PRODUCERS as usize];
        for event in got {
            let Event::PointerMove(Position { x: seq, y: tag }) = event else {
                panic!("unexpected event {event}");
            };
            assert_eq!(seq, next[tag as usize], "producer {tag} out of order");
            next[tag as usize] += 1;
        }
        assert!(next.iter().all(|&n| n == PER_PRODUCER));
    }

    #[test]
    fn test_buffered_events_flushed_on_close() {
        let (publisher, stream) = EventChannel::new(0).unwrap();

        publisher.publish(Event::WindowClose);
        publisher.publish(moved(1));
        publisher.publish(moved(2));
        drop(publisher);

        let got: Vec<_> = stream.iter().collect();
        assert_eq!(got, vec![Event::WindowClose, moved(1), moved(2)]);
        assert!(stream.is_closed());
    }

    #[test]
    fn test_publish_after_consumer_dropped() {
        let (publisher, stream) = EventChannel::new(1).unwrap();
        drop(stream);

        // The forwarder notices on its next hand-over attempt.
        let deadline = Instant::now() + Duration::from_secs(10);
        while publisher.publish(moved(0)) {
            assert!(Instant::now() < deadline, "forwarder never stopped");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_recv_timeout_on_idle_channel() {
        let (_publisher, stream) = EventChannel::new(1).unwrap();
        assert_eq!(stream.recv_timeout(Duration::from_millis(10)), None);
        assert!(!stream.is_closed());
    }
}
