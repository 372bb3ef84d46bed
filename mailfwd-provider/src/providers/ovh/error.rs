//! OVH 错误映射

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::client::OvhClient;
use super::types::OvhErrorResponse;

impl ProviderErrorMapper for OvhClient {
    fn provider_name(&self) -> &'static str {
        super::PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let code = raw.code.as_deref().unwrap_or_default();

        match (raw.status, code) {
            // 凭证错误
            (_, "INVALID_CREDENTIAL" | "INVALID_KEY" | "INVALID_SIGNATURE") | (Some(401), _) => {
                ProviderError::InvalidCredentials {
                    provider,
                    raw_message: Some(raw.message),
                }
            }
            // 权限不足
            (_, "NOT_GRANTED_CALL" | "NOT_CREDENTIAL") | (Some(403), _) => {
                ProviderError::PermissionDenied {
                    provider,
                    raw_message: Some(raw.message),
                }
            }
            (Some(404), _) => match (context.redirection_id, context.domain) {
                (Some(redirection_id), _) => ProviderError::RedirectionNotFound {
                    provider,
                    redirection_id,
                    raw_message: Some(raw.message),
                },
                (None, Some(domain)) => ProviderError::DomainNotFound {
                    provider,
                    domain,
                    raw_message: Some(raw.message),
                },
                (None, None) => self.unknown_error(raw),
            },
            (Some(409), _) => ProviderError::RedirectionExists {
                provider,
                from: context.from.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            _ if raw.message.to_lowercase().contains("already exist") => {
                ProviderError::RedirectionExists {
                    provider,
                    from: context.from.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }
            (Some(400), _) => ProviderError::InvalidParameter {
                provider,
                param: if context.from.is_some() {
                    "redirection".to_string()
                } else {
                    "request".to_string()
                },
                detail: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}

impl OvhClient {
    /// 统一处理 OVH 响应错误
    pub(crate) fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // 尝试解析结构化错误
        if let Ok(error) = serde_json::from_str::<OvhErrorResponse>(response_text) {
            log::debug!(
                "[{}] API error: status={status}, httpCode={:?}, errorCode={:?}",
                self.provider_name(),
                error.http_code,
                error.error_code
            );
            return Err(self.map_error(
                RawApiError::with_status(status, error.error_code, error.message),
                ctx,
            ));
        }

        // 回退到通用错误
        Err(self.map_error(
            RawApiError::with_status(
                status,
                None,
                format!("HTTP {status}: {}", truncate_for_log(response_text)),
            ),
            ctx,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OvhEndpoint;

    fn client() -> Option<OvhClient> {
        OvhClient::new(OvhEndpoint::OvhEu, "ak", "as", "ck").ok()
    }

    fn ctx_for_id(id: &str) -> ErrorContext {
        ErrorContext {
            redirection_id: Some(id.to_string()),
            domain: Some("test.xyz".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn success_status_passes() {
        let Some(client) = client() else { return };
        assert!(client.handle_response_error(200, "", ErrorContext::default()).is_ok());
    }

    #[test]
    fn invalid_credential_code_wins_over_status() {
        let Some(client) = client() else { return };
        let body = r#"{"errorCode":"INVALID_CREDENTIAL","httpCode":"403 Forbidden","message":"This credential is not valid"}"#;
        let err = client.handle_response_error(403, body, ErrorContext::default());
        assert!(matches!(
            err,
            Err(ProviderError::InvalidCredentials { raw_message: Some(ref m), .. }) if m == "This credential is not valid"
        ));
    }

    #[test]
    fn forbidden_without_code_is_permission_denied() {
        let Some(client) = client() else { return };
        let body = r#"{"message":"This call has not been granted"}"#;
        let err = client.handle_response_error(403, body, ErrorContext::default());
        assert!(matches!(err, Err(ProviderError::PermissionDenied { .. })));
    }

    #[test]
    fn not_found_with_redirection_id() {
        let Some(client) = client() else { return };
        let body = r#"{"message":"The requested object (id = 42) does not exist"}"#;
        let err = client.handle_response_error(404, body, ctx_for_id("42"));
        assert!(matches!(
            err,
            Err(ProviderError::RedirectionNotFound { ref redirection_id, .. }) if redirection_id == "42"
        ));
    }

    #[test]
    fn not_found_on_listing_is_domain_not_found() {
        let Some(client) = client() else { return };
        let ctx = ErrorContext {
            domain: Some("test.xyz".to_string()),
            ..Default::default()
        };
        let body = r#"{"message":"This service does not exist"}"#;
        let err = client.handle_response_error(404, body, ctx);
        assert!(matches!(
            err,
            Err(ProviderError::DomainNotFound { ref domain, .. }) if domain == "test.xyz"
        ));
    }

    #[test]
    fn already_exists_message_maps_to_exists() {
        let Some(client) = client() else { return };
        let ctx = ErrorContext {
            from: Some("order@test.xyz".to_string()),
            ..Default::default()
        };
        let body = r#"{"message":"This redirection already exists"}"#;
        let err = client.handle_response_error(400, body, ctx);
        assert!(matches!(
            err,
            Err(ProviderError::RedirectionExists { ref from, .. }) if from == "order@test.xyz"
        ));
    }

    #[test]
    fn bad_request_is_invalid_parameter() {
        let Some(client) = client() else { return };
        let ctx = ErrorContext {
            from: Some("bad@test.xyz".to_string()),
            ..Default::default()
        };
        let body = r#"{"message":"Invalid email address"}"#;
        let err = client.handle_response_error(400, body, ctx);
        assert!(matches!(
            err,
            Err(ProviderError::InvalidParameter { ref param, ref detail, .. })
                if param == "redirection" && detail == "Invalid email address"
        ));
    }

    #[test]
    fn unparseable_body_falls_back_to_unknown() {
        let Some(client) = client() else { return };
        let err = client.handle_response_error(500, "<html>oops</html>", ErrorContext::default());
        assert!(matches!(
            err,
            Err(ProviderError::Unknown { ref raw_message, .. }) if raw_message == "HTTP 500: <html>oops</html>"
        ));
    }
}
