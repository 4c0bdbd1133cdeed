/*!
Diagnostics go through the `log` facade, so an application's own logger receives them. For programs
without one, `init` installs a small logger gated by a global verbosity level and writing to stderr.

| verbosity | records shown |
|-----------|---------------|
| `<= 0`    | none          |
| 1         | errors        |
| 2         | + warnings    |
| 3         | + info        |
| 4         | + debug       |
| `>= 5`    | + trace       |
*/

pub use verbosity::*;


// Global control over verbose messaging.
pub(crate) mod verbosity {
  use std::{
    io::{stderr, Stderr, Write},
    sync::{
      atomic::{AtomicI32, Ordering},
      Mutex
    }
  };
  use lazy_static::lazy_static;
  use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
  use yansi::Paint;

  static VERBOSITY: AtomicI32        = AtomicI32::new(0);
  static LOGGER   : VerboseLogger    = VerboseLogger;
  lazy_static! {
    static ref VERBOSE_STREAM: Mutex<Stderr> = Mutex::new(stderr());
  }

  pub fn verbosity() -> i32 {
    VERBOSITY.load(Ordering::Relaxed)
  }

  pub fn set_verbosity(new_value: i32) {
    VERBOSITY.store(new_value, Ordering::Relaxed);
    log::set_max_level(level_filter(new_value));
  }

  pub fn level_filter(verbosity: i32) -> LevelFilter {
    match verbosity {
      i32::MIN..=0 => LevelFilter::Off,
      1            => LevelFilter::Error,
      2            => LevelFilter::Warn,
      3            => LevelFilter::Info,
      4            => LevelFilter::Debug,
      _            => LevelFilter::Trace,
    }
  }

  /// Installs the stderr logger. Fails if another logger is already installed.
  pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_filter(verbosity()));
    Ok(())
  }

  struct VerboseLogger;

  impl Log for VerboseLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
      metadata.level() <= level_filter(verbosity())
    }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        verbose_emit(&format!("{} {}: {}", label(record.level()), record.target(), record.args()));
      }
    }

    fn flush(&self) {
      if let Ok(mut stream) = VERBOSE_STREAM.lock() {
        let _ = stream.flush();
      }
    }
  }

  fn label(level: Level) -> String {
    let name = level.as_str();
    match level {
      Level::Error => Paint::red(name).bold().to_string(),
      Level::Warn  => Paint::yellow(name).to_string(),
      Level::Info  => Paint::green(name).to_string(),
      Level::Debug => Paint::blue(name).to_string(),
      Level::Trace => Paint::new(name).dimmed().to_string(),
    }
  }

  pub(crate) fn verbose_emit(msg: &str) {
    // A poisoned lock only means another thread panicked mid-message.
    let mut stream = match VERBOSE_STREAM.lock() {
      Ok(stream) => stream,
      Err(poisoned) => poisoned.into_inner(),
    };
    let _ = stream.write_all(msg.as_bytes());
    let _ = stream.write_all("\n".as_bytes());
  }
}


#[cfg(test)]
mod tests {
  use log::LevelFilter;
  use super::*;

  #[test]
  fn verbosity_levels() {
    assert_eq!(level_filter(-3), LevelFilter::Off);
    assert_eq!(level_filter(0), LevelFilter::Off);
    assert_eq!(level_filter(1), LevelFilter::Error);
    assert_eq!(level_filter(4), LevelFilter::Debug);
    assert_eq!(level_filter(17), LevelFilter::Trace);
  }

  #[test]
  fn set_verbosity_raises_the_facade_level() {
    set_verbosity(3);
    assert_eq!(verbosity(), 3);
    assert_eq!(log::max_level(), LevelFilter::Info);

    set_verbosity(0);
    assert_eq!(log::max_level(), LevelFilter::Off);
  }
}
