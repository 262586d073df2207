// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use yeojeong_services::{Config, function_handler, setup_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    setup_tracing();

    // Resolved once per container, reused by every invocation
    let config = Config::from_env()?;
    let environment = config.service.environment;

    run(service_fn(move |event: LambdaEvent<Value>| {
        let environment = environment.clone();
        async move { function_handler(event, &environment).await }
    }))
    .await
}
