//! Browser implementation of `TestimonialRepository`.
//!
//! Requests are planned and decoded by `common::repository::rest`; this module
//! only executes them with `gloo-net` and races each one against a timeout so a
//! hung call can never leave the carousel or the form stuck in a busy state.

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

use common::config::StoreConfig;
use common::model::testimonial::{NewTestimonial, Testimonial};
use common::repository::rest::{decode_exists, decode_inserted, decode_list};
use common::repository::{
    with_timeout, RepositoryError, RestMethod, RestPlan, RestRequest, TestimonialRepository,
};

pub struct HttpTestimonialRepository {
    /// A bad configuration is kept as an error so every call reports it instead
    /// of the page failing to load.
    plan: Result<RestPlan, RepositoryError>,
}

impl HttpTestimonialRepository {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            plan: RestPlan::new(config),
        }
    }

    fn plan(&self) -> Result<&RestPlan, RepositoryError> {
        self.plan.as_ref().map_err(Clone::clone)
    }

    /// Sends the request and returns `(status, body)`, or `Timeout` once the
    /// plan's timeout has elapsed.
    async fn execute(
        plan: &RestPlan,
        request: RestRequest,
    ) -> Result<(u16, String), RepositoryError> {
        let timeout_ms = plan.timeout_ms();
        with_timeout(send(request), TimeoutFuture::new(timeout_ms), timeout_ms).await
    }
}

async fn send(request: RestRequest) -> Result<(u16, String), RepositoryError> {
    let mut builder: RequestBuilder = match request.method {
        RestMethod::Get => Request::get(&request.url),
        RestMethod::Post => Request::post(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let sent = match request.body {
        Some(body) => {
            builder
                .body(body)
                .map_err(|e| RepositoryError::Transport(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| RepositoryError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RepositoryError::Decode(e.to_string()))?;
    Ok((status, body))
}

impl TestimonialRepository for HttpTestimonialRepository {
    async fn list_all(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let plan = self.plan()?;
        let (status, body) = Self::execute(plan, plan.list_all()).await?;
        decode_list(status, &body)
    }

    async fn exists_by_name_and_role(
        &self,
        name: &str,
        role: &str,
    ) -> Result<bool, RepositoryError> {
        let plan = self.plan()?;
        let request = plan.exists_by_name_and_role(name, role);
        let (status, body) = Self::execute(plan, request).await?;
        decode_exists(status, &body)
    }

    async fn insert(&self, candidate: &NewTestimonial) -> Result<Testimonial, RepositoryError> {
        let plan = self.plan()?;
        let request = plan.insert(candidate)?;
        let (status, body) = Self::execute(plan, request).await?;
        decode_inserted(status, &body)
    }
}
