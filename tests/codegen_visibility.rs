/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use mixer_example_adapter::prelude::*;

mod private_module {
    use async_trait::async_trait;
    use mixer_example_adapter::{prelude::*, template::examplereport};

    #[handler(examplereport)]
    pub struct TestHandler;

    #[async_trait]
    impl examplereport::Handler for TestHandler {
        async fn handle_example_report(
            &self,
            _instances: &[examplereport::Instance],
        ) -> Result<(), String> {
            Ok(())
        }
    }
}

impl Handler for private_module::TestHandler {}

#[test]
fn test_private_handler() {
    assert!(private_module::TestHandler.examplereport().is_some());
}
