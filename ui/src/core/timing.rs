//! Timer helpers that work on both the WASM and native executors.

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let capped = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(capped).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
