// src/ui/toast.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Called from the hide task once the toast it was armed for goes away.
pub type HideHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Idle,
    Showing,
}

/// Single-shot hide timer for the "copied" toast.
///
/// `shown` holds the generation of the toast currently on screen, or 0 when
/// hidden. A hide task only clears the generation it was armed for, so a
/// superseded task can never hide a newer toast.
pub struct ToastTimer {
    duration: Duration,
    shown: Arc<AtomicU64>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    on_hide: Option<HideHook>,
}

impl ToastTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            shown: Arc::new(AtomicU64::new(0)),
            generation: 0,
            pending: None,
            on_hide: None,
        }
    }

    pub fn set_on_hide(&mut self, hook: HideHook) {
        self.on_hide = Some(hook);
    }

    /// Show the toast and (re)start the hide countdown.
    ///
    /// Outside a tokio runtime the toast is shown but cannot hide itself;
    /// the next `arm` inside a runtime restarts the countdown.
    pub fn arm(&mut self) {
        self.abort_pending();

        self.generation += 1;
        let generation = self.generation;
        self.shown.store(generation, Ordering::SeqCst);

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("No runtime for the toast timer, toast will not auto-hide: {}", e);
                return;
            }
        };

        let shown = Arc::clone(&self.shown);
        let on_hide = self.on_hide.clone();
        let duration = self.duration;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if shown
                .compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                log::debug!("Toast {} hidden", generation);
                if let Some(hook) = on_hide {
                    hook();
                }
            }
        }));
    }

    pub fn is_visible(&self) -> bool {
        self.shown.load(Ordering::SeqCst) != 0
    }

    pub fn state(&self) -> ToastState {
        if self.is_visible() {
            ToastState::Showing
        } else {
            ToastState::Idle
        }
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for ToastTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Drop for ToastTimer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::sleep;

    fn counting_hook(timer: &mut ToastTimer) -> Arc<AtomicUsize> {
        let hides = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hides);
        timer.set_on_hide(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        hides
    }

    #[tokio::test(start_paused = true)]
    async fn hide_hook_fires_once_for_the_newest_arm() {
        let mut timer = ToastTimer::default();
        let hides = counting_hook(&mut timer);

        timer.arm();
        sleep(Duration::from_millis(1500)).await;
        timer.arm();

        // First deadline passed, but that countdown was superseded.
        sleep(Duration::from_millis(600)).await;
        assert_eq!(hides.load(Ordering::SeqCst), 0);
        assert!(timer.is_visible());

        sleep(Duration::from_millis(1401)).await;
        assert_eq!(hides.load(Ordering::SeqCst), 1);
        assert!(!timer.is_visible());

        sleep(Duration::from_millis(5000)).await;
        assert_eq!(hides.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn hide_hook_waits_for_the_full_duration() {
        let mut timer = ToastTimer::default();
        let hides = counting_hook(&mut timer);

        timer.arm();
        sleep(Duration::from_millis(1999)).await;
        assert_eq!(hides.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(hides.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arm_without_runtime_shows_without_panicking() {
        let mut timer = ToastTimer::default();
        timer.arm();
        assert_eq!(timer.state(), ToastState::Showing);
    }

    #[tokio::test(start_paused = true)]
    async fn arm_shows_immediately_and_hides_after_duration() {
        let mut timer = ToastTimer::default();
        assert_eq!(timer.state(), ToastState::Idle);

        timer.arm();
        assert_eq!(timer.state(), ToastState::Showing);

        sleep(Duration::from_millis(1999)).await;
        assert!(timer.is_visible());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(timer.state(), ToastState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_restarts_the_window() {
        let mut timer = ToastTimer::default();
        timer.arm();

        sleep(Duration::from_millis(1500)).await;
        timer.arm();

        // Past the first deadline, still inside the second window.
        sleep(Duration::from_millis(1000)).await;
        assert!(timer.is_visible());

        sleep(Duration::from_millis(1001)).await;
        assert!(!timer.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_aborts_the_pending_task() {
        let mut timer = ToastTimer::default();
        timer.arm();
        let shown = Arc::clone(&timer.shown);
        drop(timer);

        sleep(Duration::from_millis(2500)).await;
        // The aborted task never ran, so the flag it would have cleared is untouched.
        assert_ne!(shown.load(Ordering::SeqCst), 0);
    }
}
