/// Global configuration options for a single CLI invocation.
///
/// This struct controls the runtime behavior of the application, mostly
/// around how results are rendered. It is constructed from the parsed
/// command line before any wireless operation runs.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Toggles the display of the startup ASCII banner.
    ///
    /// If `true`, the application starts immediately with log output/spinners
    /// without printing the stylized branding. Useful for clean logs or
    /// frequent executions.
    pub no_banner: bool,

    /// Controls the visual density and formatting of the terminal output.
    ///
    /// This value is typically mapped from the `-q` or `--quiet` CLI flags.
    ///
    /// # Levels
    /// * **0** (Default): Full UI, including colors, spinners, and section headers.
    /// * **1**: Reduced styling. No banner, no headers, plain log lines.
    /// * **2**: Raw mode. Output is strictly data, suitable for piping into other tools.
    pub quiet: u8,

    /// Emits results as JSON documents instead of formatted terminal text.
    ///
    /// Connection verdicts, link snapshots and scan tables are serialized
    /// with their structured field names. Implies banner suppression so the
    /// output stream stays machine-parseable.
    pub json: bool,
}
