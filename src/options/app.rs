use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::error::OptionsError;

/// How an app's `--binary` value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    /// `binary` is a path to an executable on the local file system.
    Desktop,
    /// `binary` is an Android package identifier, launched through activity/intent.
    Mobile,
}

/// Target application for a raptor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum App {
    #[default]
    Firefox,
    Chrome,
    Chromium,
    Geckoview,
    Refbrow,
    Fenix,
    ChromeM,
}

/// Policy row for one app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppPolicy {
    pub app: App,
    pub id: &'static str,
    pub long_name: &'static str,
    pub kind: AppKind,
    pub default_activity: Option<&'static str>,
}

/// Built-in app table. Mobile rows always carry a default activity.
pub const APPS: &[AppPolicy] = &[
    AppPolicy {
        app: App::Firefox,
        id: "firefox",
        long_name: "Firefox Desktop",
        kind: AppKind::Desktop,
        default_activity: None,
    },
    AppPolicy {
        app: App::Chrome,
        id: "chrome",
        long_name: "Google Chrome Desktop",
        kind: AppKind::Desktop,
        default_activity: None,
    },
    AppPolicy {
        app: App::Chromium,
        id: "chromium",
        long_name: "Google Chromium Desktop",
        kind: AppKind::Desktop,
        default_activity: None,
    },
    AppPolicy {
        app: App::Geckoview,
        id: "geckoview",
        long_name: "Firefox GeckoView on Android",
        kind: AppKind::Mobile,
        default_activity: Some("org.mozilla.geckoview_example.GeckoViewActivity"),
    },
    AppPolicy {
        app: App::Refbrow,
        id: "refbrow",
        long_name: "Firefox Android Components Reference Browser",
        kind: AppKind::Mobile,
        default_activity: Some("org.mozilla.reference.browser.BrowserTestActivity"),
    },
    AppPolicy {
        app: App::Fenix,
        id: "fenix",
        long_name: "Firefox Android Fenix Browser",
        kind: AppKind::Mobile,
        default_activity: Some("org.mozilla.fenix.IntentReceiverActivity"),
    },
    AppPolicy {
        app: App::ChromeM,
        id: "chrome-m",
        long_name: "Google Chrome on Android",
        kind: AppKind::Mobile,
        default_activity: Some("com.google.android.apps.chrome.Main"),
    },
];

impl App {
    pub fn policy(self) -> &'static AppPolicy {
        // APPS lists every variant in declaration order.
        &APPS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.policy().id
    }

    pub fn long_name(self) -> &'static str {
        self.policy().long_name
    }

    pub fn kind(self) -> AppKind {
        self.policy().kind
    }

    pub fn is_mobile(self) -> bool {
        self.kind() == AppKind::Mobile
    }

    /// Activity used when a mobile run does not pass `--activity`.
    pub fn default_activity(self) -> Option<&'static str> {
        self.policy().default_activity
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for App {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        APPS.iter()
            .find(|policy| policy.id == s)
            .map(|policy| policy.app)
            .ok_or_else(|| OptionsError::UnknownApp(s.to_string()))
    }
}
