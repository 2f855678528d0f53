//! Extractors whose rejections render as `{"message": ...}`.

use axum::{
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header, request::Parts, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::util::error::{HandlerError, HandlerErrorKind};

/// Form body, either urlencoded or `multipart/form-data`. File parts of a
/// multipart body are ignored. A missing or unparsable field is a 400.
#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

impl<S, T> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(req.headers()) {
            let multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
                warn!("Rejected multipart body: {}", rejection.body_text());
                HandlerError::bad_request(rejection.body_text())
            })?;
            return from_multipart(multipart).await.map(FormBody);
        }

        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(FormBody(value)),
            Err(rejection) => {
                warn!("Rejected form body: {}", rejection.body_text());
                Err(HandlerError::bad_request(rejection.body_text()))
            }
        }
    }
}

/// Body that is read as JSON when the request says so, and as a form
/// (urlencoded or multipart) otherwise.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonOrForm(value)),
                Err(rejection) => {
                    warn!("Rejected JSON body: {}", rejection.body_text());
                    Err(HandlerError::bad_request(rejection.body_text()))
                }
            }
        } else {
            let FormBody(value) = FormBody::<T>::from_request(req, state).await?;
            Ok(JsonOrForm(value))
        }
    }
}

/// Collect the text fields of a multipart body and deserialize `T` from them
/// with the same rules as an urlencoded form.
async fn from_multipart<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, HandlerError> {
    let mut fields: Vec<(String, String)> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        HandlerError::bad_request(format!("Failed to read multipart field: {}", e))
    })? {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };
        if field.file_name().is_some() {
            debug!("Skipping file part {}", name);
            continue;
        }
        let value = field.text().await.map_err(|e| {
            warn!("Failed to read multipart field {}: {}", name, e);
            HandlerError::bad_request(format!("Failed to read field `{}`: {}", name, e))
        })?;
        fields.push((name, value));
    }

    let encoded = serde_urlencoded::to_string(&fields).map_err(|e| {
        warn!("Failed to encode multipart fields: {}", e);
        HandlerError::bad_request(format!("Failed to deserialize form body: {}", e))
    })?;
    serde_urlencoded::from_str(&encoded).map_err(|e| {
        warn!("Rejected multipart body: {}", e);
        HandlerError::bad_request(format!("Failed to deserialize form body: {}", e))
    })
}

/// Path parameters. A segment that does not parse into `T` is answered like
/// an unknown route: 404 `{"message": "Not Found"}`.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => {
                warn!("Rejected path {}: {}", parts.uri.path(), rejection.body_text());
                Err(HandlerError::new(HandlerErrorKind::NotFound, "Not Found"))
            }
        }
    }
}

fn media_type(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok())?;
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().to_ascii_lowercase())
}

/// `application/json` or any `application/*+json` media type.
pub fn is_json(headers: &HeaderMap) -> bool {
    let Some(mime) = media_type(headers) else {
        return false;
    };
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

pub fn is_multipart(headers: &HeaderMap) -> bool {
    media_type(headers).is_some_and(|mime| mime == "multipart/form-data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(&headers_with("application/json")));
        assert!(is_json(&headers_with("application/json; charset=utf-8")));
        assert!(is_json(&headers_with("application/vnd.api+json")));
        assert!(!is_json(&headers_with("application/x-www-form-urlencoded")));
        assert!(!is_json(&headers_with("text/plain")));
        assert!(!is_json(&HeaderMap::new()));
    }

    #[test]
    fn test_is_multipart() {
        assert!(is_multipart(&headers_with("multipart/form-data; boundary=X-BOUNDARY")));
        assert!(is_multipart(&headers_with("Multipart/Form-Data; boundary=abc")));
        assert!(!is_multipart(&headers_with("application/x-www-form-urlencoded")));
        assert!(!is_multipart(&HeaderMap::new()));
    }
}
