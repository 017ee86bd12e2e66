/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use dioxus::prelude::*;
use passin_ui::components::config_error::ConfigError;
use passin_ui::constants::{app_config, debug_logs_enabled};
use passin_ui::routing::Route;

/// App root component
#[component]
fn App() -> Element {
    // Check config validity
    if let Err(e) = app_config() {
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") || debug_logs_enabled() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
