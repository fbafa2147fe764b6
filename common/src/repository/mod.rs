//! Access seam for the remote testimonial store.
//!
//! `TestimonialRepository` is the only thing the carousel and submission flow
//! know about. The browser build implements it over HTTP using the request plans
//! in `rest`; tests use `MemoryRepository`.

pub mod memory;
pub mod rest;

use std::future::Future;
use std::pin::pin;

use futures_util::future::{select, Either};
use thiserror::Error;

use crate::model::testimonial::{NewTestimonial, RowMappingError, Testimonial};

pub use memory::MemoryRepository;
pub use rest::{RestMethod, RestPlan, RestRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("invalid store configuration: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Transport(String),
    /// Non-success answer from the store; `message` comes from its error body when present.
    #[error("{message}")]
    Store { status: u16, message: String },
    #[error("unexpected response from the testimonial store: {0}")]
    Decode(String),
    #[error(transparent)]
    Schema(#[from] RowMappingError),
    #[error("the testimonial store did not answer within {0} ms")]
    Timeout(u32),
}

/// The three operations the site needs from the store.
///
/// Futures are not required to be `Send`: the browser implementation runs on the
/// single-threaded wasm event loop.
#[allow(async_fn_in_trait)]
pub trait TestimonialRepository {
    /// Every testimonial, ordered by `created_at` ascending.
    async fn list_all(&self) -> Result<Vec<Testimonial>, RepositoryError>;

    /// Whether a record with exactly this name and role already exists.
    async fn exists_by_name_and_role(&self, name: &str, role: &str)
    -> Result<bool, RepositoryError>;

    /// Appends a record and returns it as stored, with `id` and `created_at` filled in.
    async fn insert(&self, candidate: &NewTestimonial) -> Result<Testimonial, RepositoryError>;
}

/// Races a store call against `timer`. Whichever finishes first decides the
/// result; if the timer does, the call is dropped and `Timeout(timeout_ms)` is
/// returned.
///
/// The timer is passed in so the browser can use its own clock.
pub async fn with_timeout<T, C, D>(
    call: C,
    timer: D,
    timeout_ms: u32,
) -> Result<T, RepositoryError>
where
    C: Future<Output = Result<T, RepositoryError>>,
    D: Future<Output = ()>,
{
    match select(pin!(call), pin!(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(RepositoryError::Timeout(timeout_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{pending, ready};

    #[tokio::test]
    async fn call_finishing_first_keeps_its_result() {
        let result = with_timeout(ready(Ok(7)), pending(), 500).await;
        assert_eq!(result, Ok(7));

        let failed: Result<u8, _> = with_timeout(
            ready(Err(RepositoryError::Transport("offline".into()))),
            pending(),
            500,
        )
        .await;
        assert_eq!(failed, Err(RepositoryError::Transport("offline".into())));
    }

    #[tokio::test]
    async fn timer_finishing_first_reports_timeout() {
        let result: Result<u8, _> = with_timeout(pending(), ready(()), 1500).await;
        assert_eq!(result, Err(RepositoryError::Timeout(1500)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "the testimonial store did not answer within 1500 ms"
        );
    }

    #[tokio::test]
    async fn hung_call_is_dropped_once_timer_fires() {
        let mut call_finished = false;
        let call = async {
            pending::<()>().await;
            call_finished = true;
            Ok(())
        };
        let result = with_timeout(call, async {}, 10).await;
        assert_eq!(result, Err(RepositoryError::Timeout(10)));
        assert!(!call_finished);
    }
}
