//! Shutdown signal: bridges OS signals into the synchronous frame loop.
//!
//! A small tokio runtime waits for SIGINT/SIGTERM and flips a watch flag that
//! the frame loop polls without blocking.

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::watch;

pub struct ShutdownSignal {
    _rt: Runtime,
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Start listening for interrupt and terminate signals.
    pub fn install() -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("tengine-signal")
            .enable_all()
            .build()
            .context("create signal runtime")?;

        let (tx, rx) = watch::channel(false);
        let signal_tx = tx.clone();
        let mut terminate = {
            // Signal registration needs the runtime's reactor.
            let _guard = rt.enter();
            terminate_stream()?
        };
        rt.spawn(async move {
            let reason = tokio::select! {
                res = tokio::signal::ctrl_c() => match res {
                    Ok(()) => "interrupt",
                    Err(e) => {
                        warn!("ctrl-c listener failed: {e}");
                        return;
                    }
                },
                _ = terminate.recv() => "terminate",
            };
            info!("received {reason} signal");
            let _ = signal_tx.send(true);
        });

        Ok(Self { _rt: rt, tx, rx })
    }

    /// Non-blocking check.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Request shutdown from inside the process.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

#[cfg(unix)]
struct Terminate(tokio::signal::unix::Signal);

#[cfg(unix)]
impl Terminate {
    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

#[cfg(unix)]
fn terminate_stream() -> Result<Terminate> {
    use tokio::signal::unix::{signal, SignalKind};
    let sig = signal(SignalKind::terminate()).context("register SIGTERM handler")?;
    Ok(Terminate(sig))
}

#[cfg(not(unix))]
struct Terminate;

#[cfg(not(unix))]
impl Terminate {
    async fn recv(&mut self) -> Option<()> {
        std::future::pending().await
    }
}

#[cfg(not(unix))]
fn terminate_stream() -> Result<Terminate> {
    Ok(Terminate)
}
