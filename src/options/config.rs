#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::{
    app::App, diagnostics::Diagnostics, error::OptionsError, validator::OptionsValidator,
};

/// Parsed raptor options, as handed over by the argument parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaptorOptions {
    /// Target application
    pub app: App,

    /// Executable path for desktop apps, package identifier for mobile apps
    pub binary: Option<String>,

    /// Android activity to launch; filled from the app's default when absent
    pub activity: Option<String>,

    /// Android intent used to launch the activity
    pub intent: Option<String>,

    pub gecko_profile: bool,
    pub debug_mode: bool,
    pub fission: bool,
    pub fission_mobile: bool,
    pub test_bytecode_cache: bool,
    pub webext: bool,
    pub chimera: bool,
    pub browsertime_video: bool,
    pub browsertime_visualmetrics: bool,
    pub is_release_build: bool,

    /// `name=value` preference overrides
    pub extra_prefs: Vec<String>,

    /// Number of times each page is cycled
    pub page_cycles: Option<u32>,

    /// Page load timeout in milliseconds
    pub page_timeout: Option<u64>,

    /// Delay after browser startup in milliseconds
    pub post_startup_delay: Option<u64>,

    pub benchmark_repository: Option<String>,
    pub benchmark_revision: Option<String>,
    pub benchmark_branch: Option<String>,

    /// Host the device is reachable on
    pub host: Option<String>,
}

impl Default for RaptorOptions {
    fn default() -> Self {
        RaptorOptions {
            app: App::Firefox,
            binary: None,
            activity: None,
            intent: None,
            gecko_profile: false,
            debug_mode: false,
            fission: true,
            fission_mobile: false,
            test_bytecode_cache: false,
            webext: false,
            chimera: false,
            browsertime_video: false,
            browsertime_visualmetrics: false,
            is_release_build: false,
            extra_prefs: Vec::new(),
            page_cycles: None,
            page_timeout: None,
            post_startup_delay: None,
            benchmark_repository: None,
            benchmark_revision: None,
            benchmark_branch: None,
            host: None,
        }
    }
}

impl RaptorOptions {
    pub fn new(app: App) -> Self {
        RaptorOptions {
            app,
            ..Default::default()
        }
    }

    pub fn binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    pub fn activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    pub fn intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    pub fn extra_prefs<I, S>(mut self, prefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_prefs = prefs.into_iter().map(Into::into).collect();
        self
    }

    pub fn page_cycles(mut self, cycles: u32) -> Self {
        self.page_cycles = Some(cycles);
        self
    }

    pub fn page_timeout(mut self, timeout_ms: u64) -> Self {
        self.page_timeout = Some(timeout_ms);
        self
    }

    pub fn post_startup_delay(mut self, delay_ms: u64) -> Self {
        self.post_startup_delay = Some(delay_ms);
        self
    }

    pub fn benchmark(
        mut self,
        repository: impl Into<String>,
        revision: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        self.benchmark_repository = Some(repository.into());
        self.benchmark_revision = Some(revision.into());
        self.benchmark_branch = Some(branch.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Verifies these options in place. See [`OptionsValidator::verify_options`].
    pub fn verify<D: Diagnostics + ?Sized>(
        &mut self,
        diagnostics: &mut D,
    ) -> Result<(), OptionsError> {
        OptionsValidator::verify_options(diagnostics, self)
    }
}
