use crate::options::{
    app::{APPS, App, AppKind},
    error::OptionsError,
};

#[test]
fn table_matches_variant_order() {
    for (index, policy) in APPS.iter().enumerate() {
        assert_eq!(policy.app as usize, index, "{} is out of order", policy.id);
        assert_eq!(policy.app.policy(), policy);
    }
}

#[test]
fn mobile_apps_have_default_activity() {
    for policy in APPS {
        match policy.kind {
            AppKind::Mobile => assert!(policy.default_activity.is_some(), "{}", policy.id),
            AppKind::Desktop => assert!(policy.default_activity.is_none(), "{}", policy.id),
        }
    }
}

#[test]
fn parse_known_ids() {
    for policy in APPS {
        assert_eq!(policy.id.parse::<App>(), Ok(policy.app));
        assert_eq!(policy.app.to_string(), policy.id);
    }
    assert_eq!("chrome-m".parse::<App>(), Ok(App::ChromeM));
}

#[test]
fn reject_unknown_ids() {
    for id in ["", "Firefox", "safari", "chrome_m", " fenix"] {
        assert_eq!(
            id.parse::<App>(),
            Err(OptionsError::UnknownApp(id.to_string()))
        );
    }
}

#[test]
fn kinds() {
    assert!(!App::Firefox.is_mobile());
    assert!(!App::Chromium.is_mobile());
    assert!(App::Geckoview.is_mobile());
    assert!(App::ChromeM.is_mobile());
    assert_eq!(App::default(), App::Firefox);
    assert_eq!(App::Refbrow.long_name(), "Firefox Android Components Reference Browser");
}
