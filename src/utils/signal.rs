use futures::future::{self, BoxFuture, FutureExt};
use smallvec::SmallVec;

/// Completes once the process is asked to stop. Unix listens for SIGINT,
/// SIGTERM and SIGQUIT; other platforms for Ctrl+C only. If no listener can
/// be installed the future never completes.
pub async fn shutdown_signal() {
    let listeners = listeners();

    if listeners.is_empty() {
        warn!("no shutdown listener could be installed");
        return future::pending().await;
    }

    let (name, _, _) = future::select_all(listeners).await;

    info!(signal = name, "draining connections before shutdown");
}

#[cfg(unix)]
fn listeners() -> SmallVec<[BoxFuture<'static, &'static str>; 3]> {
    use tokio::signal::unix::{signal, SignalKind};

    [
        ("SIGINT", SignalKind::interrupt()),
        ("SIGTERM", SignalKind::terminate()),
        ("SIGQUIT", SignalKind::quit()),
    ]
    .into_iter()
    .filter_map(|(name, kind)| match signal(kind) {
        Ok(mut stream) => Some(
            async move {
                stream.recv().await;
                name
            }
            .boxed(),
        ),
        Err(err) => {
            error!(signal = name, "failed to listen: {}", err);
            None
        }
    })
    .collect()
}

#[cfg(not(unix))]
fn listeners() -> SmallVec<[BoxFuture<'static, &'static str>; 3]> {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {}", err);
            future::pending::<()>().await;
        }
        "ctrl-c"
    };

    smallvec::smallvec![ctrl_c.boxed()]
}
