use crate::domain::model::RequestOptions;
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

/// 以共用的 `reqwest::Client` 實作的傳輸層
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn apply_options(builder: RequestBuilder, options: RequestOptions) -> RequestBuilder {
        options
            .headers
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }
}

impl HttpTransport for ReqwestTransport {
    type Handle = PendingRequest;

    fn get(&self, url: &str, options: RequestOptions) -> PendingRequest {
        let builder = Self::apply_options(self.client.get(url), options);
        PendingRequest::new(Method::GET, url, builder)
    }

    fn post<B>(&self, url: &str, body: &B, options: RequestOptions) -> PendingRequest
    where
        B: Serialize + ?Sized,
    {
        let builder = Self::apply_options(self.client.post(url).json(body), options);
        PendingRequest::new(Method::POST, url, builder)
    }
}

/// 已建立但尚未送出的請求
///
/// await（或呼叫 [`PendingRequest::send`]）才會送出，直接 drop 則什麼都不送。
/// 這裡不解讀狀態碼：404 一樣回傳 `Ok(response)`
#[derive(Debug)]
pub struct PendingRequest {
    method: Method,
    url: String,
    builder: RequestBuilder,
}

impl PendingRequest {
    fn new(method: Method, url: &str, builder: RequestBuilder) -> Self {
        Self {
            method,
            url: url.to_string(),
            builder,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// body 為 stream 時回傳 `None`，與 `RequestBuilder::try_clone` 相同
    pub fn try_clone(&self) -> Option<Self> {
        self.builder.try_clone().map(|builder| Self {
            method: self.method.clone(),
            url: self.url.clone(),
            builder,
        })
    }

    pub fn into_builder(self) -> RequestBuilder {
        self.builder
    }

    pub async fn send(self) -> Result<Response> {
        tracing::debug!("Sending {} {}", self.method, self.url);
        let response = self.builder.send().await?;
        tracing::debug!("{} {} -> {}", self.method, self.url, response.status());
        Ok(response)
    }
}

impl IntoFuture for PendingRequest {
    type Output = Result<Response>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}
