// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for passin-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, and a mocked
// `window.fetch` that serves the attendees endpoint, so that individual
// test files stay focused on assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Click the first element matching `selector` inside `mount`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

/// Whether the button matching `selector` is disabled.
pub fn is_disabled(mount: &web_sys::Element, selector: &str) -> bool {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlButtonElement>()
        .disabled()
}

/// Set the value of the input matching `selector` and fire a bubbling
/// `input` event, as typing would.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<web_sys::HtmlInputElement>();
    input.set_value(value);

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element. Follow with
/// [`yield_now`] or [`settle`] before asserting.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process its mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

/// Wait long enough for a mocked fetch to resolve and the resulting state
/// change to render.
pub async fn settle() {
    yield_now().await;
    gloo_timers::future::TimeoutFuture::new(50).await;
    yield_now().await;
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

pub const TEST_EVENT_ID: &str = "9e9bd979-9d10-4915-b339-3786b1634f33";

/// Inject a `window.__APP_CONFIG` object with every field the app reads.
pub fn inject_app_config() {
    inject_app_config_with_debug_logs("false");
}

/// Same as [`inject_app_config`], with `debugLogs` set to `debug_logs`.
pub fn inject_app_config_with_debug_logs(debug_logs: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &"http://test:3333".into());
    set("eventId", &TEST_EVENT_ID.into());
    set("debugLogs", &debug_logs.into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Fetch mocking
// ---------------------------------------------------------------------------

/// Serve `GET .../attendees` from an in-memory list of `total` attendees.
///
/// Attendee `n` is named `Attendee n`, subscribed three days ago, and has
/// checked in two hours ago when `n` is odd. A non-empty `query` matches a
/// single attendee, `Ana Souza`. Requests whose `query` equals
/// `slow_query` are answered after `slow_ms` milliseconds. Every requested
/// URL is recorded in `window.__fetch_calls`.
pub fn mock_fetch_attendees_with_delay(total: u32, slow_query: &str, slow_ms: u32) {
    let script = format!(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetch_calls = [];
        window.fetch = function(input) {{
            var url = typeof input === 'string' ? input : input.url;
            window.__fetch_calls.push(url);
            var params = new URL(url).searchParams;
            var pageIndex = Number(params.get('pageIndex'));
            var query = params.get('query') || '';
            var now = Date.now();
            var attendees = [];
            var total = {total};
            if (query.length > 0) {{
                total = 1;
                attendees.push({{
                    id: 999,
                    name: 'Ana Souza',
                    email: 'ana@example.com',
                    subscribedAt: new Date(now - 3 * 86400000).toISOString(),
                    checkedInAt: null
                }});
            }} else {{
                for (var n = pageIndex * 10 + 1; n <= Math.min(total, pageIndex * 10 + 10); n++) {{
                    attendees.push({{
                        id: n,
                        name: 'Attendee ' + n,
                        email: 'attendee' + n + '@example.com',
                        subscribedAt: new Date(now - 3 * 86400000).toISOString(),
                        checkedInAt: n % 2 === 1 ? new Date(now - 2 * 3600000).toISOString() : null
                    }});
                }}
            }}
            var body = JSON.stringify({{ attendees: attendees, total: total }});
            var delay = query === {slow_query:?} ? {slow_ms} : 0;
            return new Promise(function(resolve) {{
                setTimeout(function() {{
                    var resp = new Response(body, {{
                        status: 200,
                        headers: {{ 'Content-Type': 'application/json' }}
                    }});
                    Object.defineProperty(resp, 'url', {{ value: url }});
                    resolve(resp);
                }}, delay);
            }});
        }};
        "#
    );
    js_sys::eval(&script).expect("failed to mock fetch with attendees");
}

/// Serve `total` attendees with no artificial delay.
pub fn mock_fetch_attendees(total: u32) {
    // No real request uses this query, so nothing is delayed.
    mock_fetch_attendees_with_delay(total, "__no_delay__", 0);
}

/// Answer every request with the given HTTP status and a plain-text body.
pub fn mock_fetch_status(status: u16) {
    let script = format!(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetch_calls = [];
        window.fetch = function(input) {{
            var url = typeof input === 'string' ? input : input.url;
            window.__fetch_calls.push(url);
            var resp = new Response('upstream failure', {{ status: {status} }});
            Object.defineProperty(resp, 'url', {{ value: url }});
            return Promise.resolve(resp);
        }};
        "#
    );
    js_sys::eval(&script).expect("failed to mock fetch with status");
}

/// URLs requested through the mocked fetch, oldest first.
pub fn fetch_calls() -> Vec<String> {
    let calls = js_sys::Reflect::get(&gloo_utils::window(), &"__fetch_calls".into())
        .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
    if calls.is_undefined() {
        return Vec::new();
    }
    js_sys::Array::from(&calls)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

pub fn restore_fetch() {
    js_sys::eval(
        r#"
        if (window.__original_fetch) {
            window.fetch = window.__original_fetch;
            delete window.__original_fetch;
        }
        delete window.__fetch_calls;
        "#,
    )
    .expect("failed to restore fetch");
}
