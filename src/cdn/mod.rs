//! CDN / edge provider classification.
//!
//! Response headers are matched against a fixed, priority-ordered signature
//! table (CloudFlare, Fastly, AWS CloudFront, Akamai, generic cache CDN).
//! Classification is a pure function of the headers and the table: no
//! network access, no randomness, and it never fails.

mod classifier;
mod signatures;

pub use classifier::{
    classify, classify_for_host, detect_provider, detect_provider_with, ClassificationResult,
};
pub use signatures::{CdnProvider, ProviderSignature, Rule, SIGNATURES};
