use crate::core::{ConfigProvider, HttpTransport, RequestOptions, User};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/user";

/// 將使用者帳號操作對應到 `base_url` 底下的 REST 呼叫
///
/// 每個方法都原樣回傳傳輸層的 handle，呼叫端執行之前不會送出任何請求；
/// 不驗證輸入，也不檢查回應
#[derive(Debug, Clone)]
pub struct UserApiClient<T: HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> UserApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(transport: T, config: &C) -> Self {
        Self::with_base_url(transport, config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn register(&self, user: &User) -> T::Handle {
        self.transport.post(
            &format!("{}/sign-up", self.base_url),
            user,
            RequestOptions::default(),
        )
    }

    pub fn get_all_users(&self) -> T::Handle {
        self.transport
            .get(&format!("{}/all", self.base_url), RequestOptions::default())
    }

    pub fn get_by_id(&self, id: &str) -> T::Handle {
        self.transport
            .get(&format!("{}/{}", self.base_url, id), RequestOptions::default())
    }

    /// token 原樣放進 `Authorization`，不加任何前綴
    pub fn get_by_username(&self, username: &str, token: &str) -> T::Handle {
        let options = RequestOptions::default()
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", token);

        self.transport.get(
            &format!("{}/byUsername/{}", self.base_url, username),
            options,
        )
    }

    pub fn retrieve_user_picture(&self, username: &str) -> T::Handle {
        self.transport.get(
            &format!("{}/retrievePicture/{}", self.base_url, username),
            RequestOptions::default(),
        )
    }
}
