//! HTTP header name constants.
//!
//! Header names are stored lowercase because [`crate::probe::ResponseHeaders`]
//! normalizes every key on insertion.

// Security header names
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";

// Infrastructure/Server identification
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";
/// X-Powered-By header (identifies server framework)
pub const HEADER_X_POWERED_BY: &str = "x-powered-by";
/// Content-Type header
pub const HEADER_CONTENT_TYPE: &str = "content-type";
/// Content-Length header
pub const HEADER_CONTENT_LENGTH: &str = "content-length";
/// Content-Encoding header (compression)
pub const HEADER_CONTENT_ENCODING: &str = "content-encoding";
/// X-Forwarded-For header (client address as seen by a proxy)
pub const HEADER_X_FORWARDED_FOR: &str = "x-forwarded-for";
/// X-Real-IP header
pub const HEADER_X_REAL_IP: &str = "x-real-ip";

// CDN/Proxy identification
/// CF-Ray header (Cloudflare request ID)
pub const HEADER_CF_RAY: &str = "cf-ray";
/// CF-Cache-Status header (Cloudflare cache result)
pub const HEADER_CF_CACHE_STATUS: &str = "cf-cache-status";
/// Fastly-Debug-Digest header
pub const HEADER_FASTLY_DEBUG_DIGEST: &str = "fastly-debug-digest";
/// X-Served-By header (Fastly and other edge caches)
pub const HEADER_X_SERVED_BY: &str = "x-served-by";
/// X-Amz-Cf-Id header (CloudFront request ID)
pub const HEADER_X_AMZ_CF_ID: &str = "x-amz-cf-id";
/// X-Amz-Cf-Pop header (CloudFront edge location)
pub const HEADER_X_AMZ_CF_POP: &str = "x-amz-cf-pop";
/// Akamai-Origin-Hop header
pub const HEADER_AKAMAI_ORIGIN_HOP: &str = "akamai-origin-hop";
/// X-Akamai-Transformed header
pub const HEADER_X_AKAMAI_TRANSFORMED: &str = "x-akamai-transformed";
/// X-Cache header (cache status)
pub const HEADER_X_CACHE: &str = "x-cache";
/// X-Edge-Location header
pub const HEADER_X_EDGE_LOCATION: &str = "x-edge-location";

// Caching
/// Cache-Control header
pub const HEADER_CACHE_CONTROL: &str = "cache-control";
/// ETag header
pub const HEADER_ETAG: &str = "etag";
/// Expires header
pub const HEADER_EXPIRES: &str = "expires";
/// Last-Modified header
pub const HEADER_LAST_MODIFIED: &str = "last-modified";

/// Headers whose presence means the response carries caching rules.
pub const CACHE_HEADERS: &[&str] = &[
    HEADER_CACHE_CONTROL,
    HEADER_ETAG,
    HEADER_EXPIRES,
    HEADER_LAST_MODIFIED,
];
