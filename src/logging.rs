/*!

Global control over verbose messaging.

Messages are sent on a `Channel` at a verbosity level. A message is emitted only if the global verbosity is at least
its level. Level 0 is off, which is the default. Level 1 is "normal" enabled. Level 4 gives word length progress.
Level 5 gives rewriting and diagram construction progress. Level n includes all messages in levels m < n.

*/

use std::{
  io::{Stderr, stderr, Write},
  sync::{
    Mutex,
    atomic::{AtomicI32, Ordering}
  }
};

use lazy_static::lazy_static;
use strum_macros::{Display, IntoStaticStr};
use yansi::Paint;


static VERBOSITY: AtomicI32 = AtomicI32::new(0);

lazy_static! {
  static ref VERBOSE_STREAM: Mutex<Stderr> = Mutex::new(stderr());
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Display, IntoStaticStr)]
pub enum Channel {
  Error,
  Warning,
  Notice,
  Info,
  Debug,
}

impl Channel {
  fn prefix(&self) -> String {
    let name: &'static str = (*self).into();
    match self {
      Channel::Error   => Paint::red(name).bold().to_string(),
      Channel::Warning => Paint::yellow(name).bold().to_string(),
      Channel::Notice  => Paint::magenta(name).to_string(),
      Channel::Info    => Paint::blue(name).to_string(),
      Channel::Debug   => Paint::cyan(name).to_string(),
    }
  }
}

fn verbosity_is_at_least(level: i32) -> bool {
  VERBOSITY.load(Ordering::Relaxed) >= level
}

pub fn set_verbosity(new_value: i32) {
  VERBOSITY.store(new_value, Ordering::Relaxed);
}

pub fn get_verbosity() -> i32 {
  VERBOSITY.load(Ordering::Relaxed)
}

pub(crate) fn verbose_emit(msg: &str) {
  // Messages are dropped if the stream is poisoned.
  if let Ok(mut stream) = VERBOSE_STREAM.lock() {
    let _ = stream.write_all(msg.as_bytes());
    let _ = stream.write_all(b"\n");
  }
}

/// Only emits a message if the verbosity level is at least `level`.
pub(crate) fn log_at_level(level: i32, msg: &str) {
  if verbosity_is_at_least(level) {
    verbose_emit(msg);
  }
}

/// Emits `msg` on `channel` if the verbosity level is at least `level`.
pub(crate) fn log(channel: Channel, level: i32, msg: &str) {
  if verbosity_is_at_least(level) {
    verbose_emit(format!("{}: {}", channel.prefix(), msg).as_str());
  }
}
