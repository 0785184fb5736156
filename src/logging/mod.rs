use crate::env::RUST_LOG;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "walk_safe=info";

pub fn init() {
    let env_filter = EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| {
        EnvFilter::default().add_directive(
            DEFAULT_DIRECTIVE
                .parse()
                .expect("The default logging directive is malformed."),
        )
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
