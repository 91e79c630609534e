// Adapters layer: HttpTransport 的具體實作

pub mod dry_run;
pub mod http;
