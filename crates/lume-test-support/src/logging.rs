//! Test subscribers: fmt output in failing test logs, plus warning counts for assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_TEST_LOG_LEVEL: &str = "debug";

static INIT: Once = Once::new();

/// Install a fmt subscriber writing through the test harness. Safe to call from every test.
///
/// `RUST_LOG` overrides the default `debug` level. A subscriber installed elsewhere wins.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_LOG_LEVEL));
        let installed = fmt::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
        drop(installed);
    });
}

/// Run `f` under a scoped subscriber and return how many `warn` events it emitted.
pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, warnings.load(Ordering::SeqCst))
}

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
