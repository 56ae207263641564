use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

// Installs the global tracing subscriber. json output is meant for log collectors that
// add their own timestamps.
pub fn setup_tracing<W>(json: bool, writer: W)
    where W: for<'w> MakeWriter<'w> + Send + Sync + 'static {
    if let Err(err) = tracing::subscriber::set_global_default(build_subscriber(json, writer)) {
        eprintln!("tracing already initialized: {}", err);
    }
}

pub(crate) fn build_subscriber<W>(json: bool, writer: W) -> Box<dyn Subscriber + Send + Sync>
    where W: for<'w> MakeWriter<'w> + Send + Sync + 'static {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(writer);
    if json {
        Box::new(builder
            .with_ansi(false)
            .without_time()
            .json()
            .finish())
    } else {
        Box::new(builder.finish())
    }
}
