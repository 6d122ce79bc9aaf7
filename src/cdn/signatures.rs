//! Static CDN signature table.
//!
//! Providers are listed in evaluation order; the first matching provider wins.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::{
    HEADER_AKAMAI_ORIGIN_HOP, HEADER_CF_CACHE_STATUS, HEADER_CF_RAY, HEADER_FASTLY_DEBUG_DIGEST,
    HEADER_SERVER, HEADER_X_AKAMAI_TRANSFORMED, HEADER_X_AMZ_CF_ID, HEADER_X_AMZ_CF_POP,
    HEADER_X_CACHE, HEADER_X_EDGE_LOCATION, HEADER_X_SERVED_BY,
};
use crate::probe::ResponseHeaders;

/// CDN / edge providers the classifier can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum CdnProvider {
    CloudFlare,
    Fastly,
    AwsCloudFront,
    Akamai,
    GenericCdn,
}

impl CdnProvider {
    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            CdnProvider::CloudFlare => "CloudFlare",
            CdnProvider::Fastly => "Fastly",
            CdnProvider::AwsCloudFront => "AWS CloudFront",
            CdnProvider::Akamai => "Akamai",
            CdnProvider::GenericCdn => "Generic CDN",
        }
    }
}

impl std::fmt::Display for CdnProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A condition over response headers.
///
/// "Present" always means the key matches case-insensitively and the value
/// is non-empty.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Header is present
    Present(&'static str),
    /// Header is absent (missing or empty)
    Absent(&'static str),
    /// Header is present and its value contains `needle`
    Contains {
        header: &'static str,
        needle: &'static str,
        ignore_case: bool,
    },
    /// At least one sub-rule matches
    Any(&'static [Rule]),
    /// Every sub-rule matches
    All(&'static [Rule]),
}

impl Rule {
    pub fn matches(&self, headers: &ResponseHeaders) -> bool {
        match *self {
            Rule::Present(name) => headers.has(name),
            Rule::Absent(name) => !headers.has(name),
            Rule::Contains {
                header,
                needle,
                ignore_case: true,
            } => headers.value_contains_ignore_case(header, needle),
            Rule::Contains {
                header,
                needle,
                ignore_case: false,
            } => headers.value_contains(header, needle),
            Rule::Any(rules) => rules.iter().any(|r| r.matches(headers)),
            Rule::All(rules) => rules.iter().all(|r| r.matches(headers)),
        }
    }
}

/// One provider and its indicators (OR semantics).
#[derive(Debug, Clone, Copy)]
pub struct ProviderSignature {
    pub provider: CdnProvider,
    pub indicators: &'static [Rule],
}

impl ProviderSignature {
    pub fn matches(&self, headers: &ResponseHeaders) -> bool {
        self.indicators.iter().any(|rule| rule.matches(headers))
    }
}

/// Provider signatures in priority order.
pub static SIGNATURES: &[ProviderSignature] = &[
    ProviderSignature {
        provider: CdnProvider::CloudFlare,
        indicators: &[
            Rule::Present(HEADER_CF_RAY),
            Rule::Present(HEADER_CF_CACHE_STATUS),
            Rule::Contains {
                header: HEADER_SERVER,
                needle: "cloudflare",
                ignore_case: true,
            },
        ],
    },
    ProviderSignature {
        provider: CdnProvider::Fastly,
        indicators: &[
            Rule::Present(HEADER_FASTLY_DEBUG_DIGEST),
            Rule::Contains {
                header: HEADER_X_SERVED_BY,
                needle: "fastly",
                ignore_case: false,
            },
        ],
    },
    ProviderSignature {
        provider: CdnProvider::AwsCloudFront,
        indicators: &[
            Rule::Present(HEADER_X_AMZ_CF_ID),
            Rule::Present(HEADER_X_AMZ_CF_POP),
        ],
    },
    ProviderSignature {
        provider: CdnProvider::Akamai,
        indicators: &[
            Rule::Present(HEADER_AKAMAI_ORIGIN_HOP),
            Rule::Present(HEADER_X_AKAMAI_TRANSFORMED),
        ],
    },
    // A cache hit/miss header plus an edge identifier; an x-served-by value
    // must look like a cache node.
    ProviderSignature {
        provider: CdnProvider::GenericCdn,
        indicators: &[Rule::All(&[
            Rule::Present(HEADER_X_CACHE),
            Rule::Any(&[
                Rule::Present(HEADER_X_SERVED_BY),
                Rule::Present(HEADER_X_EDGE_LOCATION),
            ]),
            Rule::Any(&[
                Rule::Absent(HEADER_X_SERVED_BY),
                Rule::Contains {
                    header: HEADER_X_SERVED_BY,
                    needle: "cache",
                    ignore_case: false,
                },
            ]),
        ])],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn headers(pairs: &[(&str, &str)]) -> ResponseHeaders {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_table_priority_order() {
        let order: Vec<CdnProvider> = SIGNATURES.iter().map(|s| s.provider).collect();
        assert_eq!(
            order,
            vec![
                CdnProvider::CloudFlare,
                CdnProvider::Fastly,
                CdnProvider::AwsCloudFront,
                CdnProvider::Akamai,
                CdnProvider::GenericCdn,
            ]
        );
    }

    #[test]
    fn test_every_provider_has_a_signature() {
        for provider in CdnProvider::iter() {
            assert_eq!(
                SIGNATURES.iter().filter(|s| s.provider == provider).count(),
                1,
                "{provider} should appear exactly once"
            );
        }
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(CdnProvider::CloudFlare.name(), "CloudFlare");
        assert_eq!(CdnProvider::AwsCloudFront.to_string(), "AWS CloudFront");
        assert_eq!(CdnProvider::GenericCdn.name(), "Generic CDN");
    }

    #[test]
    fn test_rule_present_and_absent() {
        let h = headers(&[("x-cache", "HIT"), ("x-served-by", "")]);
        assert!(Rule::Present("x-cache").matches(&h));
        assert!(!Rule::Present("x-served-by").matches(&h));
        assert!(Rule::Absent("x-served-by").matches(&h));
        assert!(Rule::Absent("via").matches(&h));
    }

    #[test]
    fn test_rule_contains_respects_case_flag() {
        let h = headers(&[("x-served-by", "Cache-FRA")]);
        let sensitive = Rule::Contains {
            header: "x-served-by",
            needle: "cache",
            ignore_case: false,
        };
        let insensitive = Rule::Contains {
            header: "x-served-by",
            needle: "cache",
            ignore_case: true,
        };
        assert!(!sensitive.matches(&h));
        assert!(insensitive.matches(&h));
    }

    #[test]
    fn test_empty_combinators() {
        let h = ResponseHeaders::new();
        assert!(!Rule::Any(&[]).matches(&h));
        assert!(Rule::All(&[]).matches(&h));
    }
}
