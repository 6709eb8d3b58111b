//! Handler trait for log output destinations

use super::{error::Result, record::LogRecord};

/// A sink that persists or displays fully rendered records.
///
/// Handlers are shared between loggers as `Arc<dyn Handler>`, so `write`
/// takes `&self` and implementations serialize their own interior I/O
/// state. Delivery is best effort: a handler that cannot persist a record
/// returns an error and the record is dropped for that sink; the logging
/// call itself never fails.
pub trait Handler: Send + Sync {
    fn write(&self, record: &LogRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
