use tracing_subscriber::{fmt, EnvFilter};

/// Where the log lines end up and how they are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogStyle {
    /// Compact lines on stderr, so stdout stays clean JSON for the CLI.
    Terminal,
    /// Compact lines on stdout with timestamps.
    Service,
    /// One JSON object per event.
    ServiceJson,
    /// JSON without timestamps, CloudWatch stamps each line itself.
    Lambda,
}

/// `RUST_LOG` wins; otherwise the crate logs at `crate_level` and everything else at `rest`.
fn directives(crate_level: &str, rest: Option<&str>) -> String {
    match rest {
        Some(rest) => format!("shipping_quote={},{}", crate_level, rest),
        None => format!("shipping_quote={}", crate_level),
    }
}

fn filter_or(default_directives: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn install(style: LogStyle, filter: EnvFilter) {
    let builder = fmt().with_env_filter(filter).with_target(false).with_thread_ids(false);

    // 重複初始化時 (例如測試) 只提示，不中斷
    let installed = match style {
        LogStyle::Terminal => builder
            .with_writer(std::io::stderr)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .try_init(),
        LogStyle::Service => builder.compact().try_init(),
        LogStyle::ServiceJson => builder.json().try_init(),
        LogStyle::Lambda => builder.without_time().json().try_init(),
    };

    if let Err(e) = installed {
        eprintln!("⚠️ Logger already installed, keeping the existing one: {}", e);
    }
}

/// `verbose` turns on this crate's debug output for `quote` and `summary`.
pub fn init_cli_logger(verbose: bool) {
    let defaults = if verbose {
        directives("debug", Some("info"))
    } else {
        directives("warn", None)
    };
    install(LogStyle::Terminal, filter_or(defaults));
}

/// Logger for the standalone HTTP listener. `level` is used when `RUST_LOG` is unset.
pub fn init_server_logger(level: &str, json: bool) {
    let style = if json { LogStyle::ServiceJson } else { LogStyle::Service };
    install(style, filter_or(directives(level, Some("info"))));
}

pub fn init_lambda_logger() {
    install(LogStyle::Lambda, filter_or(directives("info", None)));
}
