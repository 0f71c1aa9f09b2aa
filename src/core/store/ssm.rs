//! AWS SSM Parameter Store backend.
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, etc.) or
//! from the default credential provider chain.

use tracing::trace;

use super::{Page, Parameter, ParameterKind, ParameterStore};
use crate::error::{Error, Result};

/// Real store backed by `aws-sdk-ssm`.
///
/// The SDK is async; the tool is synchronous and single-threaded, so the
/// store owns a current-thread runtime and blocks on each request.
pub struct SsmStore {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Load the default AWS configuration and build a client.
    pub fn connect() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Store(format!("failed to create runtime: {}", e)))?;

        let config = runtime.block_on(aws_config::load_defaults(
            aws_config::BehaviorVersion::latest(),
        ));
        let client = aws_sdk_ssm::Client::new(&config);

        Ok(Self { runtime, client })
    }
}

impl ParameterStore for SsmStore {
    fn list(&self, path: &str, recursive: bool, next_token: Option<&str>) -> Result<Page> {
        trace!(path, recursive, "requesting parameter page");

        let request = self
            .client
            .get_parameters_by_path()
            .path(path)
            .recursive(recursive)
            .with_decryption(true)
            .set_next_token(next_token.map(String::from));

        let response = self
            .runtime
            .block_on(request.send())
            .map_err(|e| Error::Store(e.to_string()))?;

        let parameters = response
            .parameters()
            .iter()
            .filter_map(|p| {
                let name = p.name()?.to_string();
                let value = p.value()?.to_string();
                let kind = match p.r#type() {
                    Some(t) if *t == aws_sdk_ssm::types::ParameterType::SecureString => {
                        ParameterKind::SecureString
                    }
                    _ => ParameterKind::String,
                };
                Some(Parameter { name, value, kind })
            })
            .collect();

        Ok(Page {
            parameters,
            next_token: response.next_token().map(String::from),
        })
    }
}
