use std::io::Write;

/// Initialise `env_logger` once for the process.
///
/// An explicit `log_level` filter wins over everything, including `RUST_LOG`.
/// Without one, `RUST_LOG` is honoured and falls back to `debug` or `info`
/// depending on the flag.
pub fn init_logging(debug: bool, log_level: Option<&str>) {
    builder(debug, log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn builder(debug: bool, log_level: Option<&str>) -> env_logger::Builder {
    match log_level {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(level);
            builder
        }
        None => {
            let fallback = if debug { "debug" } else { "info" };
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(fallback))
        }
    }
}
