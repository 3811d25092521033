//! The Lambda entry point serving generated letters.
//!
//! Configuration and fonts are loaded once at cold start; every invocation gets its own data
//! source and document so nothing mutable is shared between invocations.

use std::error::Error as _;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use letter_pdf::{LetterConfig, LetterDocumentBuilder, LetterError, LetterGenerator, LetterResponse};
use log::{error, info};
use serde_json::Value;

async fn handler(
    config: &LetterConfig,
    document: &LetterDocumentBuilder,
    event: LambdaEvent<Value>,
) -> Result<LetterResponse, Error> {
    let (payload, context) = (event.payload, event.context);
    info!("Invocation {} ({} variant)", context.request_id, config.variant);

    LetterGenerator::new(config, document).generate(&payload).map_err(|err| {
        error!("Invocation {} failed: {}", context.request_id, err);
        Error::from(describe(&err))
    })
}

/// Flattens the error and its sources into a single message for the platform error report.
fn describe(err: &LetterError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    message
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = LetterConfig::from_env().map_err(|err| Error::from(describe(&err)))?;
    info!(
        "Serving {} letters as '{}' (content length: {:?})",
        config.variant, config.filename, config.content_length
    );

    let document = LetterDocumentBuilder::from_env().map_err(|err| Error::from(describe(&err)))?;

    lambda_runtime::run(service_fn(|event| handler(&config, &document, event))).await?;
    Ok(())
}
