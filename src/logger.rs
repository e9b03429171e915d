use chrono::Utc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct Timestamp;

impl FormatTime for Timestamp {

    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {

        write!(w, "{}", Utc::now().format(TIMESTAMP_FORMAT))

    }

}

pub fn init() {

    // RUST_LOG wins, otherwise startup and fatal lines only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Timestamp)
        .with_writer(std::io::stderr)
        .init();

}
