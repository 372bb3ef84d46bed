//! OVH `$1$` request signature

use sha1::{Digest, Sha1};

/// Generate the OVH API signature
/// Reference: <https://help.ovhcloud.com/csm/en-api-getting-started-ovhcloud-api>
///
/// `$1$` + hex(SHA1("AS+CK+METHOD+URL+BODY+TIMESTAMP"))，
/// URL 为包含 query 的完整地址，无 body 时为空串。
pub(crate) fn signature(
    app_secret: &str,
    consumer_key: &str,
    method: &str,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let payload = format!("{app_secret}+{consumer_key}+{method}+{url}+{body}+{timestamp}");
    format!("$1${}", hex::encode(Sha1::digest(payload.as_bytes())))
}
