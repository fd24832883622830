/// Error types for provider calls
use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_workspaces::config::http::HttpResponse;
use aws_sdk_workspaces::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Errors raised while talking to the cloud provider.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable credentials were configured
    #[error("Missing AWS credentials: {0}")]
    MissingCredentials(String),

    /// The request never produced an HTTP response, or timed out
    #[error("Network error calling {service}: {message}")]
    Network {
        service: &'static str,
        message: String,
    },

    /// The provider answered with a non-success status
    #[error("{service} returned HTTP {status} ({code}): {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        code: String,
        message: String,
    },

    /// The request could not be built, or the response could not be read
    #[error("Malformed {service} response: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn service(&self) -> Option<&'static str> {
        match self {
            ApiError::MissingCredentials(_) => None,
            ApiError::Network { service, .. }
            | ApiError::Upstream { service, .. }
            | ApiError::Malformed { service, .. } => Some(service),
        }
    }
}

impl ApiError {
    /// Classify an SDK failure. Modeled and unmodeled service errors keep the
    /// provider's status, code, and message.
    pub(crate) fn from_sdk<E>(service: &'static str, err: SdkError<E, HttpResponse>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
    {
        if let Some(service_err) = err.as_service_error() {
            return ApiError::Upstream {
                service,
                status: err.raw_response().map(|r| r.status().as_u16()).unwrap_or_default(),
                code: service_err.code().unwrap_or("Unknown").to_string(),
                message: service_err.message().unwrap_or_default().to_string(),
            };
        }
        let message = DisplayErrorContext(&err).to_string();
        if caused_by_credentials(&err) {
            return ApiError::MissingCredentials(message);
        }
        match err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ApiError::Network { service, message },
            _ => ApiError::Malformed { service, message },
        }
    }
}

fn caused_by_credentials(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<CredentialsError>() {
            return true;
        }
        current = e.source();
    }
    false
}
