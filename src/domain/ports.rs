use crate::domain::model::RequestOptions;
use serde::Serialize;
use std::sync::Arc;

/// 能發出 GET / POST 請求的傳輸層
///
/// 呼叫 `get`/`post` 時不得進行任何 I/O，回傳的 `Handle` 由呼叫端決定何時執行
pub trait HttpTransport: Send + Sync {
    type Handle;

    fn get(&self, url: &str, options: RequestOptions) -> Self::Handle;

    fn post<B>(&self, url: &str, body: &B, options: RequestOptions) -> Self::Handle
    where
        B: Serialize + ?Sized;
}

impl<T: HttpTransport> HttpTransport for &T {
    type Handle = T::Handle;

    fn get(&self, url: &str, options: RequestOptions) -> Self::Handle {
        (**self).get(url, options)
    }

    fn post<B>(&self, url: &str, body: &B, options: RequestOptions) -> Self::Handle
    where
        B: Serialize + ?Sized,
    {
        (**self).post(url, body, options)
    }
}

impl<T: HttpTransport> HttpTransport for Arc<T> {
    type Handle = T::Handle;

    fn get(&self, url: &str, options: RequestOptions) -> Self::Handle {
        (**self).get(url, options)
    }

    fn post<B>(&self, url: &str, body: &B, options: RequestOptions) -> Self::Handle
    where
        B: Serialize + ?Sized,
    {
        (**self).post(url, body, options)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}
