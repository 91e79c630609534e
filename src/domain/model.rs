use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 註冊時送出的帳號資料
///
/// 只列出已知欄位，伺服器端其他欄位原樣保留在 `extra`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}

/// 單一請求的設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// 與傳輸層無關的 HTTP 請求描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case_and_skips_missing_fields() {
        let mut user = User::new("alice");
        user.first_name = Some("Alice".to_string());
        user.extra.insert("role".to_string(), json!("trainer"));

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({"username": "alice", "firstName": "Alice", "role": "trainer"})
        );
    }

    #[test]
    fn test_user_keeps_unknown_fields_from_json() {
        let raw = json!({
            "id": "42",
            "username": "bob",
            "lastName": "Builder",
            "picture": "bob.png"
        });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.extra.get("picture"), Some(&json!("bob.png")));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_request_options_with_header() {
        let options = RequestOptions::default()
            .with_header("Authorization", "tok")
            .with_header("Authorization", "tok2");
        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.headers["Authorization"], "tok2");
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
