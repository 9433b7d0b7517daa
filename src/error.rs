use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding a widget to the server-rendered markup.
///
/// The markup is owned by the page templates, so none of these are recovered
/// from: the widget that hit one is simply not attached.
#[derive(Debug, Error)]
pub(crate) enum DomError {
    #[error("no window/document available")]
    NoDocument,

    #[error("missing element: {0}")]
    Missing(String),

    #[error("element {0} is not a {1}")]
    WrongType(String, &'static str),

    #[error("sidebar links out of step: {headings} headings, {desktop} desktop links, {mobile} mobile links")]
    UnpairedLinks {
        headings: usize,
        desktop: usize,
        mobile: usize,
    },

    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(v: JsValue) -> Self {
        DomError::Js(
            v.as_string()
                .unwrap_or_else(|| format!("{v:?}")),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Url,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub(crate) fn url(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Url,
            message: e.to_string(),
        }
    }

    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    pub(crate) fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaired_links_message_names_all_counts() {
        let e = DomError::UnpairedLinks {
            headings: 3,
            desktop: 3,
            mobile: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("3 headings"));
        assert!(msg.contains("2 mobile"));
    }

    #[test]
    fn test_api_error_http_formats_context_and_status() {
        let e = ApiError::http(
            reqwest::StatusCode::NOT_FOUND,
            "gone".to_string(),
            "mark read",
        );
        assert_eq!(e.kind, ApiErrorKind::Http);
        assert_eq!(e.to_string(), "mark read (404 Not Found): gone");
    }
}
