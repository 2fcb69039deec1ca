use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Custom logger initialization to exclude timestamps but keep colors.
///
/// Use ARMEASURE_LOG=debug to see every anchored point and scene command.
/// Example: ARMEASURE_LOG=debug cargo run
pub fn init_custom_logger() {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let default_level =
        std::env::var("ARMEASURE_LOG").unwrap_or_else(|_| "info".to_string());

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    let mut filter = tracing_subscriber::filter::EnvFilter::from_default_env();
    for directive in [
        default_level.as_str(),
        // Suppress very noisy render layer messages
        "wgpu_core=error",
        "wgpu_hal=error",
        "naga=warn",
        "bevy_render=warn",
    ] {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Ignoring log directive '{directive}': {e}"),
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_filter(filter))
        .init();
}
