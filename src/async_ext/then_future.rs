//! Future wrapper applying an immediate step once a deferred container resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// Awaits the inner future, then hands its output to a single step.
    ///
    /// Returned by the plain-callback methods of
    /// [`FutureErrorOrExt`](super::FutureErrorOrExt). The step runs inside the
    /// `poll` that observes the inner future's completion and never before it.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `ThenFuture` drops the inner future and the pending step; the
    /// step is never run for a cancelled computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_or::prelude_async::*;
    ///
    /// async fn example() -> ErrorOr<i32> {
    ///     async { ErrorOr::from_value(20) }
    ///         .map(|x| x + 1)
    ///         .map(|x| x * 2)
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct ThenFuture<Fut, F> {
        #[pin]
        future: Fut,
        step: Option<F>,
    }
}

impl<Fut, F> ThenFuture<Fut, F> {
    /// Creates a new `ThenFuture` running `step` on the output of `future`.
    #[inline]
    pub fn new(future: Fut, step: F) -> Self {
        Self { future, step: Some(step) }
    }
}

impl<Fut, F, R> Future for ThenFuture<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| {
            let step = this
                .step
                .take()
                .expect("ThenFuture polled after completion; this is a bug");
            step(output)
        })
    }
}

impl<Fut, F, R> FusedFuture for ThenFuture<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    fn is_terminated(&self) -> bool {
        // The step is taken exactly when the inner future completes.
        self.step.is_none()
    }
}
