//! Callback Core Library
//!
//! A small library showing how a component (the [`Caller`]) is wired to a
//! piece of client-supplied behavior (a callback) and invokes it later.
//!
//! # Architecture
//!
//! Two independent variants of the same idea:
//! - [`CallbackSlot`] holds any [`Callback`]: plain functions, closures with
//!   captured state, or function-like objects with internal state
//! - [`FnSlot`] holds only a plain `fn(i32) -> i32` pointer (C-style
//!   callbacks, no captured state)
//!
//! A [`Caller`] owns exactly one slot. Binding replaces any previous
//! callback; invoking an empty slot returns [`CallbackError::Unbound`].
//!
//! The library does NOT:
//! - Hold more than one callback per slot
//! - Unregister callbacks
//! - Share slots across threads
//!
//! The demonstration driver lives in the application layer (callback-cli).
//!
//! # Example Usage
//!
//! ```
//! use callback_core::{Callback, ClosureCaller, FnCaller};
//!
//! fn callee1(i: i32) -> i32 {
//!     10 * i
//! }
//!
//! struct Callee {
//!     factor: i32,
//! }
//!
//! impl Callback for Callee {
//!     fn call(&mut self, input: i32) -> i32 {
//!         self.factor * input
//!     }
//! }
//!
//! let mut out = std::io::stdout();
//!
//! let mut caller = ClosureCaller::new();
//! caller.connect_callback(callee1);
//! assert_eq!(caller.test(&mut out).unwrap(), 100);
//!
//! caller.connect_callback(|i: i32| 20 * i);
//! assert_eq!(caller.test(&mut out).unwrap(), 200);
//!
//! caller.connect_callback(Callee { factor: 30 });
//! assert_eq!(caller.test(&mut out).unwrap(), 300);
//!
//! let mut c_style = FnCaller::new();
//! assert!(c_style.test(&mut out).is_err());
//! c_style.connect_callback(callee1);
//! assert_eq!(c_style.test(&mut out).unwrap(), 100);
//! ```

// Public modules
pub mod callback;
pub mod caller;
pub mod fn_slot;
pub mod slot;
pub mod types;

// Re-export main types for convenience
pub use callback::{Callback, CallbackFn};
pub use caller::{Caller, ClosureCaller, FnCaller, DEMO_ARGUMENT};
pub use fn_slot::FnSlot;
pub use slot::{CallbackSlot, Slot};
pub use types::{CallbackError, Invocation, Result, Transcript};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
