//! Request builder for the SMC job resource
//!
//! Builds the URL and headers for
//! `{protocol}://{host}:{port}/INTERSHOP/rest/{srvGroup}/SMC/-/domains/{domain}/jobs/{job}`
//! once per trigger call. The resulting [`JobRequest`] is reused for the
//! initial PUT and every following GET.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use reqwest::Method;
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::JobRunnerConfig;
use crate::error::{JobRunnerError, Result};

/// Media type sent and expected by the job resource
pub const APPLICATION_JSON: &str = "application/json";

/// A fully described HTTP request, ready for a [`Transport`](crate::Transport)
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Authenticated target of one job
#[derive(Debug, Clone)]
pub struct JobRequest {
    job_name: String,
    url: Url,
    headers: HeaderMap,
}

impl JobRequest {
    /// Builds the job target from the runner configuration
    ///
    /// Fails with a configuration error when the configuration does not
    /// validate, the job name is empty, a path part is `.` or `..`, or the
    /// server address does not form a URL.
    pub fn build(config: &JobRunnerConfig, job_name: &str) -> Result<Self> {
        config.validate()?;
        if job_name.is_empty() {
            return Err(JobRunnerError::configuration("job name must not be empty"));
        }
        for (label, segment) in [
            ("server group", config.server_group.as_str()),
            ("domain", config.domain.as_str()),
            ("job name", job_name),
        ] {
            if is_dot_segment(segment) {
                return Err(JobRunnerError::configuration(format!(
                    "{} '{}' is not a valid path segment",
                    label, segment
                )));
            }
        }

        let url = job_url(config, job_name)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(
            AUTHORIZATION,
            basic_auth(&config.user.name, &config.user.password)?,
        );

        Ok(Self {
            job_name: job_name.to_string(),
            url,
            headers,
        })
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// PUT request with a JSON body
    pub fn put(&self, body: String) -> HttpRequest {
        self.request(Method::PUT, Some(body))
    }

    /// GET request without body
    pub fn get(&self) -> HttpRequest {
        self.request(Method::GET, None)
    }

    fn request(&self, method: Method, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            body,
        }
    }
}

/// Builds the job URL, encoding each dynamic part as a single path segment
///
/// Segment encoding escapes space, `/`, `?`, `#` and `%` but keeps `+` as a
/// literal `+`, so the server never reads it back as a space.
fn job_url(config: &JobRunnerConfig, job_name: &str) -> Result<Url> {
    let base = config.server.base_url();
    let mut url = Url::parse(&base).map_err(|e| {
        JobRunnerError::configuration(format!("invalid server address '{}': {}", base, e))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            JobRunnerError::configuration(format!("server address '{}' cannot be a base", base))
        })?
        .pop_if_empty()
        .extend([
            "INTERSHOP",
            "rest",
            config.server_group.as_str(),
            "SMC",
            "-",
            "domains",
            config.domain.as_str(),
            "jobs",
            job_name,
        ]);

    Ok(url)
}

/// `.` and `..` are dropped by path segment encoding and would retarget the URL
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

fn basic_auth(name: &str, password: &str) -> Result<HeaderValue> {
    let credentials = BASE64_ENGINE.encode(format!("{}:{}", name, password));
    let mut value = HeaderValue::from_str(&format!("Basic {}", credentials))
        .map_err(|e| JobRunnerError::configuration(format!("invalid credentials: {}", e)))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobrunner_core::domain::server::{Protocol, Server};
    use jobrunner_core::domain::user::User;
    use percent_encoding::percent_decode_str;

    fn config() -> JobRunnerConfig {
        JobRunnerConfig::new(
            Server::new(Protocol::Http, "localhost", 8080),
            "SLDSystem",
            "BOS",
            User::new("admin", "!InterShop00!"),
        )
    }

    fn decode_segment(segment: &str) -> String {
        percent_decode_str(segment).decode_utf8().unwrap().into_owned()
    }

    fn last_segment(request: &JobRequest) -> String {
        request
            .url()
            .path_segments()
            .and_then(|mut s| s.next_back())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_job_url() {
        let request = JobRequest::build(&config(), "RebuildIndex").unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/INTERSHOP/rest/BOS/SMC/-/domains/SLDSystem/jobs/RebuildIndex"
        );
    }

    #[test]
    fn test_job_name_is_encoded_as_one_segment() {
        let request = JobRequest::build(&config(), "Rebuild Index+Cache/All").unwrap();
        assert_eq!(last_segment(&request), "Rebuild%20Index+Cache%2FAll");
    }

    #[test]
    fn test_job_name_round_trips_through_path_decoding() {
        let names = [
            "a+b",
            "with space",
            "C++ & Java",
            "50% off?",
            "hash#tag",
            "slash/inside",
            "Umlaut Überprüfung",
        ];
        for name in names {
            let request = JobRequest::build(&config(), name).unwrap();
            assert_eq!(decode_segment(&last_segment(&request)), name);
        }
    }

    #[test]
    fn test_headers() {
        let request = JobRequest::build(&config(), "RebuildIndex").unwrap();
        let headers = request.headers();
        assert_eq!(headers[CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(headers[ACCEPT], APPLICATION_JSON);
        // base64("admin:!InterShop00!")
        assert_eq!(
            headers[AUTHORIZATION],
            "Basic YWRtaW46IUludGVyU2hvcDAwIQ=="
        );
    }

    #[test]
    fn test_put_then_get_share_target() {
        let request = JobRequest::build(&config(), "RebuildIndex").unwrap();
        let put = request.put("{}".to_string());
        let get = request.get();
        assert_eq!(put.method, Method::PUT);
        assert_eq!(put.body.as_deref(), Some("{}"));
        assert_eq!(get.method, Method::GET);
        assert!(get.body.is_none());
        assert_eq!(put.url, get.url);
        assert_eq!(put.headers, get.headers);
    }

    #[test]
    fn test_empty_credentials_fail_before_building() {
        let mut config = config();
        config.user = User::new("", "pw");
        let err = JobRequest::build(&config, "RebuildIndex").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_job_name_is_rejected() {
        let err = JobRequest::build(&config(), "").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for name in [".", ".."] {
            let err = JobRequest::build(&config(), name).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains("job name"));
        }

        let mut config = config();
        config.domain = "..".to_string();
        let err = JobRequest::build(&config, "RebuildIndex").unwrap_err();
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_names_containing_dots_are_kept() {
        for name in ["...", ".hidden", "v1.2"] {
            let request = JobRequest::build(&config(), name).unwrap();
            assert_eq!(decode_segment(&last_segment(&request)), name);
        }
    }

    #[test]
    fn test_invalid_host_is_a_configuration_error() {
        let mut config = config();
        config.server.host = "bad host".to_string();
        let err = JobRequest::build(&config, "RebuildIndex").unwrap_err();
        assert!(err.is_configuration());
    }
}
