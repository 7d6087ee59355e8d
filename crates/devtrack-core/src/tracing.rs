use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber for a service binary.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` applies, e.g.
/// `"info,tower_http=debug"`. Later calls are ignored.
pub fn init_tracing(default_directives: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        )
        .try_init();
}

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ignore_repeated_init() {
        init_tracing("info");
        init_tracing("debug");
    }

    #[test]
    fn should_fall_back_to_info_on_bad_directives() {
        let filter = env_filter("=[not a directive");
        assert!(!filter.to_string().is_empty());
    }
}
