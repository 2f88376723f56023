//! Conversion settings.

/// Options for a conversion. The defaults reproduce the classic behavior.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Write `(error:<command>)` into the output when input ends too early.
    ///
    /// The diagnostic is recorded either way.
    pub error_markers: bool,
    /// Trigger of the mapping to use inside `$...$`.
    ///
    /// `None` uses the table's own math mapping.
    pub math_command: Option<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            error_markers: true,
            math_command: None,
        }
    }
}

impl ConvertConfig {
    /// Builder-style setter for [`Self::error_markers`].
    pub fn with_error_markers(mut self, on: bool) -> Self {
        self.error_markers = on;
        self
    }

    /// Builder-style setter for [`Self::math_command`].
    pub fn with_math_command(mut self, command: impl Into<String>) -> Self {
        self.math_command = Some(command.into());
        self
    }
}
