//! Input listener: a producer thread feeding key events to the frame loop.
//!
//! The thread owns the byte source and only ever sends immutable
//! [`KeyEvent`] values through a bounded FIFO queue. When the queue is full the
//! producer blocks, so no retained event is reordered or lost. The frame loop
//! drains the queue with [`InputListener::try_recv`], which never blocks.

use std::io::{self, Read};
use std::thread::{self, JoinHandle};

use log::{debug, trace};
use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::map::{decode_bytes, MAX_CHUNK};
use crate::types::KeyEvent;

pub struct InputListener {
    rx: mpsc::Receiver<KeyEvent>,
    closed: bool,
    _thread: JoinHandle<()>,
}

impl InputListener {
    /// Listen on stdin. The terminal should already be in raw mode.
    pub fn stdin(capacity: usize) -> io::Result<Self> {
        Self::spawn(io::stdin(), capacity)
    }

    /// Start reading `reader` on a named thread.
    ///
    /// The queue closes when the reader hits end of input or an error, or when
    /// this listener is dropped.
    pub fn spawn<R: Read + Send + 'static>(reader: R, capacity: usize) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let thread = thread::Builder::new()
            .name("tengine-input".to_string())
            .spawn(move || read_loop(reader, tx))?;
        Ok(Self {
            rx,
            closed: false,
            _thread: thread,
        })
    }

    /// Next queued event, if one is ready.
    pub fn try_recv(&mut self) -> Option<KeyEvent> {
        match self.rx.try_recv() {
            Ok(ev) => Some(ev),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.closed = true;
                None
            }
        }
    }

    /// True once the producer has stopped and the queue is drained.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

fn read_loop<R: Read>(mut reader: R, tx: mpsc::Sender<KeyEvent>) {
    debug!("input listener started");
    let mut buf = [0u8; MAX_CHUNK];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("input read failed: {e}");
                break;
            }
        };
        let events = decode_bytes(&buf[..n]);
        if events.len() < n {
            trace!("dropped {} undecodable input bytes", n - events.len());
        }
        for ev in events {
            if tx.blocking_send(ev).is_err() {
                debug!("input listener stopped: receiver dropped");
                return;
            }
        }
    }
    debug!("input listener stopped: end of input");
}
