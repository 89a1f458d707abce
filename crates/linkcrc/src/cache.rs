//! One-time lazy storage for lookup tables.
//!
//! A [`TableCache`] has exactly two states, `Uninitialized -> Built`, and the
//! transition is irreversible. It has the same semantics as
//! `std::sync::OnceLock` but also works on `no_std` targets.
//!
//! # Caching Strategy
//!
//! - **std**: Uses `OnceLock` for thread-safe lazy initialization
//! - **no_std with atomics**: Uses an atomic `UNINIT -> BUILDING -> READY` state machine
//! - **no_std without atomics**: Per-call construction (single-threaded embedded targets)
//!
//! Concurrent first use from several threads runs the builder once; every
//! caller then reads the same immutable table.

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::cell::UnsafeCell;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::mem::MaybeUninit;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::sync::atomic::{AtomicU8, Ordering};

/// Lazily built, never mutated value shared for the process lifetime.
pub struct TableCache<T> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  state: AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  value: UnsafeCell<MaybeUninit<T>>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
  _marker: core::marker::PhantomData<T>,
}

// SAFETY: `value` is written exactly once, by the thread that moved `state`
// from UNINIT to BUILDING, and only read after `state` is READY (Release/Acquire).
#[allow(unsafe_code)]
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
unsafe impl<T: Send + Sync> Sync for TableCache<T> {}

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const UNINIT: u8 = 0;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const BUILDING: u8 = 1;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const READY: u8 = 2;

impl<T> TableCache<T> {
  /// Create an empty (uninitialized) cache.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      state: AtomicU8::new(UNINIT),
      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
      _marker: core::marker::PhantomData,
    }
  }

  /// Whether the value has been built.
  ///
  /// Always `false` on targets without atomics, where nothing is cached.
  #[inline]
  #[must_use]
  pub fn is_built(&self) -> bool {
    #[cfg(feature = "std")]
    {
      self.inner.get().is_some()
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      self.state.load(Ordering::Acquire) == READY
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      false
    }
  }

  /// Run `f` against the cached value, building it with `build` first if needed.
  ///
  /// This is the portable entry point: on targets without atomics the value
  /// is built on every call and dropped when `f` returns.
  #[inline]
  pub fn with<R>(&self, build: impl FnOnce() -> T, f: impl FnOnce(&T) -> R) -> R {
    #[cfg(any(feature = "std", target_has_atomic = "8"))]
    {
      f(self.get_or_init(build))
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      f(&build())
    }
  }

  /// Get the cached value, building it with `build` if not yet set.
  ///
  /// The builder runs at most once. Threads racing the first call wait for
  /// the winner and then observe its value.
  #[cfg(feature = "std")]
  #[inline]
  pub fn get_or_init(&self, build: impl FnOnce() -> T) -> &T {
    self.inner.get_or_init(build)
  }

  /// Get the cached value, building it with `build` if not yet set.
  ///
  /// The builder runs at most once. Threads racing the first call spin until
  /// the winner publishes its value.
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  #[inline]
  pub fn get_or_init(&self, build: impl FnOnce() -> T) -> &T {
    if self.state.load(Ordering::Acquire) != READY {
      if self
        .state
        .compare_exchange(UNINIT, BUILDING, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
      {
        let value = build();
        // SAFETY: We hold exclusive access while the state is BUILDING.
        #[allow(unsafe_code)]
        unsafe {
          (*self.value.get()).write(value);
        }
        self.state.store(READY, Ordering::Release);
      } else {
        while self.state.load(Ordering::Acquire) != READY {
          core::hint::spin_loop();
        }
      }
    }

    // SAFETY: The value is initialized once the state is READY and never written again.
    #[allow(unsafe_code)]
    unsafe {
      (*self.value.get()).assume_init_ref()
    }
  }
}

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
impl<T> Drop for TableCache<T> {
  fn drop(&mut self) {
    if *self.state.get_mut() == READY {
      // SAFETY: READY means the value was written; `&mut self` rules out readers.
      #[allow(unsafe_code)]
      unsafe {
        self.value.get_mut().assume_init_drop();
      }
    }
  }
}

impl<T> Default for TableCache<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> core::fmt::Debug for TableCache<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("TableCache").field("built", &self.is_built()).finish()
  }
}
