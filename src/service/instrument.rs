//! Opt-in `tracing` instrumentation for pipelines.

use std::fmt;

use tracing::Instrument;

use crate::control::Either;
use crate::effect::TaskEither;

impl<E, A> TaskEither<E, A>
where
    E: fmt::Debug + Send + 'static,
    A: Send + 'static,
{
    /// Runs every invocation inside a span named after `service`.
    ///
    /// Emits a `debug` event when an invocation starts and when it resolves
    /// to `Right`, and a `warn` event carrying the error when it resolves to
    /// `Left`. Results are passed through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskeither::control::Either;
    /// use taskeither::effect::TaskEither;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let task: TaskEither<String, i32> = TaskEither::right(3).instrument("fetch_person");
    /// assert_eq!(task.invoke().await, Either::Right(3));
    /// # });
    /// ```
    #[must_use]
    pub fn instrument(self, service: &'static str) -> Self {
        Self::new(move || {
            let pipeline = self.clone();
            let span = tracing::debug_span!("service", name = service);
            async move {
                tracing::debug!("invoking");
                let result = pipeline.invoke().await;
                match &result {
                    Either::Right(_) => tracing::debug!("succeeded"),
                    Either::Left(error) => tracing::warn!(?error, "failed"),
                }
                result
            }
            .instrument(span)
        })
    }
}
