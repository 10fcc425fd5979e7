//! Request headers expected by the upstream service.
//!
//! The values mimic the official web and mobile clients and must be sent
//! verbatim; the service rejects requests that deviate from them.

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    ORIGIN, PRAGMA, REFERER, USER_AGENT,
};

/// Desktop browser user agent used for the token refresh call.
pub const WEB_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Mobile client user agent used for the member (sign-in / reward) calls.
pub const MOBILE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 D/C501C6D2-FAF6-4DA8-B65B-7B8B392901EB";

const WEB_ORIGIN: &str = "https://www.aliyundrive.com";
const WEB_REFERER: &str = "https://www.aliyundrive.com/";

/// Headers for `POST /v2/account/token`.
pub fn token_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh;q=0.9"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json;charset=UTF-8"),
    );
    headers.insert(ORIGIN, HeaderValue::from_static(WEB_ORIGIN));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(REFERER, HeaderValue::from_static(WEB_REFERER));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-site"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(WEB_UA));
    headers
}

/// Headers shared by the member endpoints, minus `Authorization`.
pub fn member_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_UA));
    headers
}
