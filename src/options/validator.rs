use std::path::Path;

use crate::options::{
    app::{App, AppKind},
    config::RaptorOptions,
    diagnostics::Diagnostics,
    error::OptionsError,
};

/// Verification of parsed raptor options before a run starts
pub struct OptionsValidator;

impl OptionsValidator {
    /// Verifies `options`, normalizing them in place.
    ///
    /// Desktop apps must point `binary` at an existing file. Mobile apps treat
    /// `binary` as a package identifier and get their default activity when
    /// none was given. Every other field passes through untouched.
    ///
    /// # Arguments
    ///
    /// * `diagnostics` - Receives the usage error before it is returned.
    /// * `options` - The parsed options, updated in place.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::MissingBinary`] for a desktop app whose binary is
    /// absent or not a file. Diagnostics that terminate the process never let
    /// this return.
    ///
    /// # Examples
    /// ```rust
    /// use raptor_cmdline::options::{
    ///     app::App, config::RaptorOptions, diagnostics::RecordingDiagnostics,
    ///     validator::OptionsValidator,
    /// };
    ///
    /// let mut diagnostics = RecordingDiagnostics::new();
    /// let mut options = RaptorOptions::new(App::Refbrow).binary("org.mozilla.reference.browser");
    /// assert!(OptionsValidator::verify_options(&mut diagnostics, &mut options).is_ok());
    /// assert_eq!(
    ///     options.activity.as_deref(),
    ///     Some("org.mozilla.reference.browser.BrowserTestActivity")
    /// );
    ///
    /// let mut options = RaptorOptions::new(App::Firefox).binary("invalid/path");
    /// assert!(OptionsValidator::verify_options(&mut diagnostics, &mut options).is_err());
    /// assert_eq!(diagnostics.messages().len(), 1);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(app = %options.app))
    )]
    pub fn verify_options<D: Diagnostics + ?Sized>(
        diagnostics: &mut D,
        options: &mut RaptorOptions,
    ) -> Result<(), OptionsError> {
        match options.app.kind() {
            AppKind::Desktop => {
                if let Err(e) = Self::validate_binary(options.app, options.binary.as_deref()) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %e, "Rejecting options");
                    diagnostics.usage_error(&e);
                    return Err(e);
                }
            }
            AppKind::Mobile => {
                Self::apply_default_activity(options);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            binary = ?options.binary,
            activity = ?options.activity,
            "Options accepted"
        );
        Ok(())
    }

    /// Checks that a desktop binary is an existing file.
    ///
    /// # Examples
    /// ```rust
    /// use raptor_cmdline::options::{app::App, validator::OptionsValidator};
    ///
    /// assert!(OptionsValidator::validate_binary(App::Firefox, None).is_err());
    /// assert!(OptionsValidator::validate_binary(App::Firefox, Some("invalid/path")).is_err());
    /// ```
    pub fn validate_binary(app: App, binary: Option<&str>) -> Result<(), OptionsError> {
        match binary {
            Some(path) if Path::new(path).is_file() => Ok(()),
            _ => Err(OptionsError::MissingBinary {
                app,
                binary: binary.map(str::to_string),
            }),
        }
    }

    /// Fills in the app's default activity when `activity` is absent or empty.
    ///
    /// Returns `true` if the options were changed.
    pub fn apply_default_activity(options: &mut RaptorOptions) -> bool {
        if options.activity.as_deref().is_some_and(|a| !a.is_empty()) {
            return false;
        }
        let Some(default) = options.app.default_activity() else {
            return false;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(app = %options.app, activity = default, "Using default activity");
        options.activity = Some(default.to_string());
        true
    }
}
