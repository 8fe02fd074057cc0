// Conditional logging: forwards to `tracing` when the feature is enabled,
// compiles to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! trace {
  ($($arg:tt)*) => {
    tracing::trace!($($arg)*)
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
  ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
  ($($arg:tt)*) => {
    tracing::debug!($($arg)*)
  };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
  ($($arg:tt)*) => {};
}

pub(crate) use debug;
pub(crate) use trace;
