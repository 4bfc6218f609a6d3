use std::time::Duration;

/// Waits for `duration` on whichever runtime the client was built for.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "web")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    tokio::time::sleep(duration).await;

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    let _ = duration;
}
