//! Console configuration baked in at build time.
//!
//! Browser builds have no process environment, so values come from
//! `option_env!` when the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "libris_access_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// REST API root, without a trailing slash.
    pub api_base_url: &'static str,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: &'static str,
}

impl ConsoleConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `LIBRIS_API_BASE_URL`: default `http://localhost:3000/api/v1`
    /// - `LIBRIS_TOKEN_KEY`: default `libris_access_token`
    pub const fn from_build_env() -> Self {
        Self::resolve(option_env!("LIBRIS_API_BASE_URL"), option_env!("LIBRIS_TOKEN_KEY"))
    }

    const fn resolve(api_base_url: Option<&'static str>, token_storage_key: Option<&'static str>) -> Self {
        Self {
            api_base_url: match api_base_url {
                Some(url) if !url.is_empty() => url,
                _ => DEFAULT_API_BASE_URL,
            },
            token_storage_key: match token_storage_key {
                Some(key) if !key.is_empty() => key,
                _ => DEFAULT_TOKEN_STORAGE_KEY,
            },
        }
    }

    /// Join an endpoint path onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
