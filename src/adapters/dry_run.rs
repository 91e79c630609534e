use crate::domain::model::{HttpMethod, RequestDescriptor, RequestOptions};
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;
use serde::Serialize;

/// 只描述請求，不實際送出
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunTransport;

impl HttpTransport for DryRunTransport {
    type Handle = Result<RequestDescriptor>;

    fn get(&self, url: &str, options: RequestOptions) -> Self::Handle {
        Ok(RequestDescriptor {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: options.headers,
            body: None,
        })
    }

    fn post<B>(&self, url: &str, body: &B, options: RequestOptions) -> Self::Handle
    where
        B: Serialize + ?Sized,
    {
        Ok(RequestDescriptor {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers: options.headers,
            body: Some(serde_json::to_value(body)?),
        })
    }
}
