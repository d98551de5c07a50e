//! Page views and navigation between them.

use tokio::sync::watch;

/// The pages a visitor can be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Reservation,
    /// Confirmation page shown after a successful submission.
    Success,
}

/// Performs view transitions.
///
/// Implementations must not block; the confirmation countdown calls
/// [`Navigator::navigate`] while holding its state lock.
pub trait Navigator: Send + Sync {
    fn navigate(&self, view: View);
}

/// A [`Navigator`] publishing the current view on a watch channel.
#[derive(Debug)]
pub struct ViewRouter {
    current: watch::Sender<View>,
}

impl ViewRouter {
    pub fn new(initial: View) -> Self {
        let (current, _) = watch::channel(initial);
        Self { current }
    }

    pub fn current(&self) -> View {
        *self.current.borrow()
    }

    /// Observe view changes.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.current.subscribe()
    }
}

impl Navigator for ViewRouter {
    fn navigate(&self, view: View) {
        tracing::debug!(?view, "Navigating");
        self.current.send_replace(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_navigation() {
        let router = ViewRouter::new(View::Reservation);
        let mut rx = router.subscribe();

        router.navigate(View::Success);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), View::Success);
        assert_eq!(router.current(), View::Success);
    }
}
