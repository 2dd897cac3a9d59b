//! Single-pass `#include` expansion against a remote shader library.
//!
//! Only includes under the library prefix are fetched. Fetched text is inserted as-is and is
//! not scanned again, so nested includes inside library files stay unresolved.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::IncludeError;

/// Where library includes come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncludeConfig {
    /// Include paths starting with this are library includes.
    pub prefix: String,
    /// Replaces `prefix` to form the fetch URL.
    pub base_url: String,
    /// Sent as the `Origin` header.
    pub origin: String,
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            prefix: "lygia".to_string(),
            base_url: "https://lygia.xyz".to_string(),
            origin: "ComfyUI Server".to_string(),
        }
    }
}

impl IncludeConfig {
    /// Fetch URL for a library include, `None` for anything else.
    pub fn url_for(&self, path: &str) -> Option<String> {
        path.strip_prefix(self.prefix.as_str())
            .map(|rest| format!("{}{}", self.base_url, rest))
    }
}

/// Supplies include text for a URL.
pub trait IncludeProvider {
    fn fetch(&mut self, url: &str) -> Result<String, IncludeError>;
}

impl<F> IncludeProvider for F
where
    F: FnMut(&str) -> Result<String, IncludeError>,
{
    fn fetch(&mut self, url: &str) -> Result<String, IncludeError> {
        self(url)
    }
}

/// What happened to each include directive during a resolve pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub fetched: Vec<String>,
    pub failed: Vec<(String, String)>,
    /// Include paths outside the library prefix; their lines are dropped.
    pub skipped: Vec<String>,
}

impl ResolveReport {
    /// Every include directive was inlined.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

fn include_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)#include\s*["<](.*\.glsl)[">]"#).expect("include pattern is valid")
    })
}

/// Expand library includes in `src`.
///
/// Every output line ends with `\n`. Failed fetches are logged and leave nothing behind.
pub fn resolve_includes(
    src: &str,
    config: &IncludeConfig,
    provider: &mut dyn IncludeProvider,
) -> (String, ResolveReport) {
    let mut out = String::with_capacity(src.len());
    let mut report = ResolveReport::default();

    for line in src.lines() {
        let Some(caps) = include_pattern().captures(line) else {
            out.push_str(line);
            out.push('\n');
            continue;
        };
        let path = &caps[1];

        let Some(url) = config.url_for(path) else {
            tracing::debug!(%path, "include outside library prefix dropped");
            report.skipped.push(path.to_string());
            continue;
        };

        match provider.fetch(&url) {
            Ok(text) => {
                tracing::info!(%url, "include resolved");
                out.push_str(&text);
                out.push('\n');
                report.fetched.push(url);
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "include fetch failed; omitting");
                report.failed.push((url, e.to_string()));
            }
        }
    }

    (out, report)
}

#[cfg(feature = "http")]
pub use http::HttpIncludeProvider;

#[cfg(feature = "http")]
mod http {
    use std::fmt;

    use super::{IncludeConfig, IncludeProvider};
    use crate::IncludeError;

    /// Blocking HTTP fetcher. No timeout, retry or cache.
    pub struct HttpIncludeProvider {
        agent: ureq::Agent,
        origin: String,
    }

    impl HttpIncludeProvider {
        pub fn new(config: &IncludeConfig) -> Self {
            Self {
                agent: ureq::AgentBuilder::new().build(),
                origin: config.origin.clone(),
            }
        }
    }

    impl fmt::Debug for HttpIncludeProvider {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("HttpIncludeProvider")
                .field("origin", &self.origin)
                .field("agent", &"<ureq agent>")
                .finish()
        }
    }

    impl IncludeProvider for HttpIncludeProvider {
        fn fetch(&mut self, url: &str) -> Result<String, IncludeError> {
            let resp = match self.agent.get(url).set("Origin", &self.origin).call() {
                Ok(resp) => resp,
                Err(ureq::Error::Status(status, _)) => {
                    return Err(IncludeError::Status {
                        url: url.to_string(),
                        status,
                    })
                }
                Err(e) => {
                    return Err(IncludeError::Transport {
                        url: url.to_string(),
                        msg: e.to_string(),
                    })
                }
            };

            if resp.status() != 200 {
                return Err(IncludeError::Status {
                    url: url.to_string(),
                    status: resp.status(),
                });
            }
            resp.into_string().map_err(|e| IncludeError::Body {
                url: url.to_string(),
                msg: e.to_string(),
            })
        }
    }
}
