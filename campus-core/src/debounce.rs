//! Settle-after-quiet-period for search input.
//!
//! Each new value restarts the timer; only a value that stays current for
//! the whole delay is forwarded. Closing the input flushes the pending value.

use std::time::Duration;

use tokio::sync::mpsc;

/// Forward values from `input` once they have been stable for `delay`.
///
/// Spawns a task on the current tokio runtime. The returned receiver closes
/// after `input` closes and any pending value is delivered.
pub fn debounce<T: Send + 'static>(mut input: mpsc::Receiver<T>, delay: Duration) -> mpsc::Receiver<T> {
    let (out, rx) = mpsc::channel(1);

    tokio::spawn(async move {
        let mut pending: Option<T> = None;
        loop {
            let Some(value) = pending.take() else {
                match input.recv().await {
                    Some(next) => pending = Some(next),
                    None => break,
                }
                continue;
            };

            tokio::select! {
                next = input.recv() => match next {
                    Some(next) => pending = Some(next),
                    None => {
                        let _ = out.send(value).await;
                        break;
                    }
                },
                _ = tokio::time::sleep(delay) => {
                    if out.send(value).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(180);

    async fn drain<T>(mut rx: mpsc::Receiver<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(v) = rx.recv().await {
            out.push(v);
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce(rx, DELAY);

        for q in ["l", "la", "lab"] {
            tx.send(q).await.unwrap();
        }

        assert_eq!(out.recv().await, Some("lab"));
        drop(tx);
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_value_resets_timer() {
        let (tx, rx) = mpsc::channel(8);
        let out = debounce(rx, DELAY);

        tx.send("a").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send("ab").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send("abc").await.unwrap();
        drop(tx);

        assert_eq!(drain(out).await, vec!["abc"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_values_are_all_forwarded() {
        let (tx, rx) = mpsc::channel(8);
        let out = debounce(rx, DELAY);

        tx.send("it").await.unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;
        tx.send("wifi").await.unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;
        drop(tx);

        assert_eq!(drain(out).await, vec!["it", "wifi"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_input_flushes_pending() {
        let (tx, rx) = mpsc::channel(8);
        let out = debounce(rx, DELAY);

        tx.send("x").await.unwrap();
        drop(tx);

        assert_eq!(drain(out).await, vec!["x"]);
    }
}
