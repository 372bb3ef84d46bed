//! OVH API request/response types

use serde::{Deserialize, Serialize};

/// `POST /email/domain/{domain}/redirection` 请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRedirectionRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub local_copy: bool,
}

/// OVH 错误响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OvhErrorResponse {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub http_code: Option<String>,
    pub message: String,
}
