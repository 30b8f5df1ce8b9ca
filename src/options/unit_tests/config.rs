use crate::options::{app::App, config::RaptorOptions};

#[test]
fn defaults() {
    let options = RaptorOptions::default();
    assert_eq!(options.app, App::Firefox);
    assert!(options.fission);
    assert!(!options.fission_mobile);
    assert!(!options.gecko_profile);
    assert_eq!(options.binary, None);
    assert_eq!(options.activity, None);
    assert!(options.extra_prefs.is_empty());
}

#[test]
fn builder() {
    let options = RaptorOptions::new(App::Fenix)
        .binary("org.mozilla.fenix.browser")
        .activity("org.mozilla.fenix.browser.BrowserPerformanceTestActivity")
        .intent("android.intent.action.VIEW")
        .extra_prefs(["browser.tabs.remote.autostart=true"])
        .page_cycles(25)
        .page_timeout(60000)
        .post_startup_delay(30000)
        .benchmark("https://github.com/mozilla/perf-automation", "abc123", "master")
        .host("sophie");

    assert_eq!(options.app, App::Fenix);
    assert_eq!(options.binary.as_deref(), Some("org.mozilla.fenix.browser"));
    assert_eq!(
        options.activity.as_deref(),
        Some("org.mozilla.fenix.browser.BrowserPerformanceTestActivity")
    );
    assert_eq!(options.intent.as_deref(), Some("android.intent.action.VIEW"));
    assert_eq!(
        options.extra_prefs,
        vec!["browser.tabs.remote.autostart=true".to_string()]
    );
    assert_eq!(options.page_cycles, Some(25));
    assert_eq!(options.page_timeout, Some(60000));
    assert_eq!(options.post_startup_delay, Some(30000));
    assert_eq!(options.benchmark_revision.as_deref(), Some("abc123"));
    assert_eq!(options.benchmark_branch.as_deref(), Some("master"));
    assert_eq!(options.host.as_deref(), Some("sophie"));
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_partial_document() {
    let options: RaptorOptions = serde_json::from_str(
        r#"{"app": "chrome-m", "binary": "com.android.chrome", "page_cycles": 5}"#,
    )
    .unwrap();

    assert_eq!(options.app, App::ChromeM);
    assert_eq!(options.binary.as_deref(), Some("com.android.chrome"));
    assert_eq!(options.page_cycles, Some(5));
    assert!(options.fission);
}

#[cfg(feature = "serde")]
#[test]
fn reject_unknown_app_in_document() {
    let result = serde_json::from_str::<RaptorOptions>(r#"{"app": "safari"}"#);
    assert!(result.is_err());
}
