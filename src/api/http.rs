//! REST client for the attendance service.

use super::source::{AttendanceSource, parse_records};
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecordDto;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 15;

pub struct HttpSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpSource {
    pub fn new(base_url: &str, token: Option<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.get(url).header(ACCEPT, "application/json");
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> AppResult<Vec<AttendanceRecordDto>> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(AppError::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        let records = parse_records(&body)?;
        debug!(count = records.len(), "fetched attendance records");
        Ok(records)
    }
}

#[async_trait]
impl AttendanceSource for HttpSource {
    async fn fetch_today(&self) -> AppResult<Vec<AttendanceRecordDto>> {
        self.send(self.get("/attendance/today/")).await
    }

    async fn fetch_by_employee(&self, employee_id: i64) -> AppResult<Vec<AttendanceRecordDto>> {
        self.send(self.get(&format!("/attendance/employee/{employee_id}/")))
            .await
    }

    async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<AttendanceRecordDto>> {
        let req = self.get("/attendance/date-range/").query(&[
            ("start_date", start.format("%Y-%m-%d").to_string()),
            ("end_date", end.format("%Y-%m-%d").to_string()),
        ]);
        self.send(req).await
    }
}
