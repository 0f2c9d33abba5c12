/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use mixer_example_adapter::{
    adapter::LogEnv,
    error::AdapterError,
    example::get_info,
    harness::{Harness, Request, Response, TestEnv},
    template::{checknothing, examplereport, reportnothing, TemplateTypes, ValueType},
};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

async fn start(env: &TestEnv, prefix: &str) -> Harness {
    let params = json!({ "logPrefix": prefix });
    Harness::start(
        get_info(),
        Arc::new(env.clone()),
        Some(&params),
        TemplateTypes::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_example_scenario() {
    let env = TestEnv::new();
    let harness = start(&env, "Test").await;

    let requests: Vec<Request> = serde_json::from_value(json!([
        {"template": "checknothing", "instances": null},
        {"template": "reportnothing", "instances": [{"name": "rni"}]},
        {"template": "examplereport", "instances": [{"name": "ei", "attributes": {"foo": "bar"}}]}
    ]))
    .unwrap();

    for request in requests {
        match harness.handle(request).await.unwrap() {
            Response::Check(result) => assert!(result.status.is_ok()),
            Response::Report => {}
        }
    }

    let logs = env.logs();
    assert_eq!(logs.len(), 3);
    for log in logs {
        assert!(log.starts_with("Test:"), "unexpected log line: {}", log);
    }

    harness.close().await.unwrap();
}

#[tokio::test]
async fn test_start_with_types() {
    let env = TestEnv::new();

    let mut types = TemplateTypes::default();
    types
        .checknothing
        .insert("cn".to_owned(), checknothing::Type::default());
    types
        .reportnothing
        .insert("rn".to_owned(), reportnothing::Type::default());
    let mut attributes = examplereport::Type::default();
    attributes
        .attributes
        .insert("foo".to_owned(), ValueType::String);
    types.examplereport = vec![("er".to_owned(), attributes)]
        .into_iter()
        .collect::<HashMap<_, _>>();

    let harness = Harness::start(get_info(), Arc::new(env.clone()), None, types)
        .await
        .unwrap();
    harness.close().await.unwrap();
    assert!(env.logs().is_empty());
}

#[tokio::test]
async fn test_start_with_log_env() {
    let harness = Harness::start(
        get_info(),
        Arc::new(LogEnv::new("example")),
        None,
        TemplateTypes::default(),
    )
    .await
    .unwrap();

    harness
        .handle(Request::ReportNothing(vec![reportnothing::Instance::new(
            "rni",
        )]))
        .await
        .unwrap();
    harness.close().await.unwrap();
}

#[tokio::test]
async fn test_invalid_params() {
    let params = json!({"logPrefix": "Test", "verbose": true});
    let result = Harness::start(
        get_info(),
        Arc::new(TestEnv::new()),
        Some(&params),
        TemplateTypes::default(),
    )
    .await;
    assert!(matches!(result, Err(AdapterError::InvalidConfig(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reports() {
    let env = TestEnv::new();
    let harness = Arc::new(start(&env, "Test").await);

    let tasks = (0..16)
        .map(|i| {
            let harness = harness.clone();
            tokio::spawn(async move {
                harness
                    .handle(Request::ExampleReport(vec![
                        examplereport::Instance::new(format!("ei-{}", i)).attribute("index", i),
                    ]))
                    .await
            })
        })
        .collect::<Vec<_>>();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), Response::Report);
    }

    assert_eq!(env.logs().len(), 16);
    assert!(env.logs().iter().all(|log| log.starts_with("Test:")));
}
