//! Disposer handles for event subscriptions.
//!
//! Every listener, observer or global export the browser layer installs is paired with a [`Subscription`] whose disposer
//! removes it again. Dropping the handle disposes it; [`Subscriptions`]
//! collects them so a whole page binding can be torn down at once.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

/// A single registered callback; disposes on drop.
#[must_use = "dropping a subscription removes it immediately"]
pub struct Subscription {
    disposer: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(disposer: impl FnOnce() + 'static) -> Self {
        Self { disposer: Some(Box::new(disposer)) }
    }

    /// Remove the subscription now.
    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.disposer.is_some()).finish()
    }
}

/// An ordered set of subscriptions disposed together.
#[derive(Debug, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

impl Subscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.entries.push(subscription);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dispose every subscription, most recent first.
    pub fn dispose_all(&mut self) {
        while let Some(subscription) = self.entries.pop() {
            subscription.dispose();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
