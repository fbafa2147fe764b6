//! Request plans and response decoding for a PostgREST-style hosted store
//! (the REST surface Supabase exposes under `/rest/v1`).
//!
//! Building the requests and decoding the answers is plain data work, so it lives
//! here where it can be tested. The frontend only has to execute a `RestRequest`
//! and hand the status and body back.

use serde::Deserialize;
use url::Url;

use super::RepositoryError;
use crate::config::StoreConfig;
use crate::model::testimonial::{NewTestimonial, Testimonial, TestimonialRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: RestMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

/// Error body returned by PostgREST on failure.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

/// Pre-computed endpoint and credentials for one table.
#[derive(Debug, Clone)]
pub struct RestPlan {
    table_url: Url,
    anon_key: String,
    timeout_ms: u32,
}

impl RestPlan {
    pub fn new(config: &StoreConfig) -> Result<Self, RepositoryError> {
        let raw = config.url.trim();
        let mut table_url =
            Url::parse(raw).map_err(|e| RepositoryError::Config(format!("{}: {}", raw, e)))?;
        if !matches!(table_url.scheme(), "http" | "https") {
            return Err(RepositoryError::Config(format!(
                "{}: store URL must be http or https",
                raw
            )));
        }
        if config.table.trim().is_empty() {
            return Err(RepositoryError::Config("store table name is empty".to_string()));
        }
        // The table name is always one encoded segment, whatever it contains.
        table_url
            .path_segments_mut()
            .map_err(|()| {
                RepositoryError::Config(format!("{}: store URL cannot be a base", raw))
            })?
            .pop_if_empty()
            .extend(["rest", "v1", config.table.as_str()]);
        table_url.set_query(None);
        table_url.set_fragment(None);

        Ok(Self {
            table_url,
            anon_key: config.anon_key.clone(),
            timeout_ms: config.request_timeout_ms,
        })
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// `GET ?select=*&order=created_at.asc`
    pub fn list_all(&self) -> RestRequest {
        let url = self.url_with(&[("select", "*"), ("order", "created_at.asc")]);
        self.request(RestMethod::Get, url, None)
    }

    /// `GET ?select=id&name=eq.<name>&role=eq.<role>&limit=1`
    pub fn exists_by_name_and_role(&self, name: &str, role: &str) -> RestRequest {
        let name_filter = format!("eq.{}", name);
        let role_filter = format!("eq.{}", role);
        let url = self.url_with(&[
            ("select", "id"),
            ("name", &name_filter),
            ("role", &role_filter),
            ("limit", "1"),
        ]);
        self.request(RestMethod::Get, url, None)
    }

    /// `POST ?select=*` with `Prefer: return=representation`.
    pub fn insert(&self, candidate: &NewTestimonial) -> Result<RestRequest, RepositoryError> {
        let body = serde_json::to_string(&[candidate])
            .map_err(|e| RepositoryError::Decode(e.to_string()))?;
        let url = self.url_with(&[("select", "*")]);
        let mut request = self.request(RestMethod::Post, url, Some(body));
        request
            .headers
            .push(("Content-Type", "application/json".to_string()));
        request
            .headers
            .push(("Prefer", "return=representation".to_string()));
        Ok(request)
    }

    fn url_with(&self, pairs: &[(&str, &str)]) -> String {
        let mut url = self.table_url.clone();
        url.query_pairs_mut().extend_pairs(pairs.iter().copied());
        url.into()
    }

    fn request(&self, method: RestMethod, url: String, body: Option<String>) -> RestRequest {
        RestRequest {
            method,
            url,
            headers: vec![
                ("apikey", self.anon_key.clone()),
                ("Authorization", format!("Bearer {}", self.anon_key)),
                ("Accept", "application/json".to_string()),
            ],
            body,
        }
    }
}

/// Decodes the answer to `list_all`. Rows are re-sorted by `created_at` so the
/// ordering holds even if the store ignored the `order` parameter.
pub fn decode_list(status: u16, body: &str) -> Result<Vec<Testimonial>, RepositoryError> {
    let rows: Vec<TestimonialRow> = decode_rows(status, body)?;
    let mut testimonials = rows
        .into_iter()
        .map(Testimonial::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    testimonials.sort_by_key(|t| t.created_at);
    Ok(testimonials)
}

pub fn decode_exists(status: u16, body: &str) -> Result<bool, RepositoryError> {
    let rows: Vec<serde_json::Value> = decode_rows(status, body)?;
    Ok(!rows.is_empty())
}

pub fn decode_inserted(status: u16, body: &str) -> Result<Testimonial, RepositoryError> {
    let rows: Vec<TestimonialRow> = decode_rows(status, body)?;
    let row = rows.into_iter().next().ok_or_else(|| {
        RepositoryError::Decode("insert returned no representation".to_string())
    })?;
    Ok(Testimonial::try_from(row)?)
}

fn decode_rows<T>(status: u16, body: &str) -> Result<Vec<T>, RepositoryError>
where
    T: for<'de> Deserialize<'de>,
{
    if !(200..300).contains(&status) {
        return Err(store_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| RepositoryError::Decode(e.to_string()))
}

/// Maps a non-success answer into `RepositoryError::Store`, preferring the
/// store's own message over the bare status.
pub fn store_error(status: u16, body: &str) -> RepositoryError {
    let message = serde_json::from_str::<StoreErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error).or(b.msg))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("testimonial store answered with status {}", status));
    RepositoryError::Store { status, message }
}
