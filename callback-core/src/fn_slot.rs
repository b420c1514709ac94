//! Restricted callback slot (plain function pointers only)
//!
//! [`FnSlot`] accepts nothing but a [`CallbackFn`]. Named functions and
//! closures that capture nothing coerce to it; closures with captured state
//! and function-like objects do not, so they are rejected by the compiler:
//!
//! ```compile_fail
//! use callback_core::FnSlot;
//!
//! let factor = 20;
//! let mut slot = FnSlot::new();
//! slot.bind(move |i: i32| factor * i);
//! ```
//!
//! ```compile_fail
//! use callback_core::{Callback, FnSlot};
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
//! let mut slot = FnSlot::new();
//! slot.bind(Callee { factor: 30 });
//! ```

use crate::callback::CallbackFn;
use crate::slot::Slot;
use crate::types::{CallbackError, Result};

/// Holds at most one plain function pointer
///
/// Starts empty rather than holding a null pointer; invoking it before a
/// function is bound yields [`CallbackError::Unbound`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FnSlot {
    callback: Option<CallbackFn>,
}

impl FnSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a function pointer, replacing any previous one
    ///
    /// # Example
    /// ```
    /// use callback_core::{FnSlot, Slot};
    ///
    /// fn callee(i: i32) -> i32 {
    ///     10 * i
    /// }
    ///
    /// let mut slot = FnSlot::new();
    /// slot.bind(callee);
    /// assert_eq!(slot.invoke(10).unwrap(), 100);
    ///
    /// // Non-capturing closures coerce to `fn(i32) -> i32`
    /// slot.bind(|i| 20 * i);
    /// assert_eq!(slot.invoke(10).unwrap(), 200);
    /// ```
    pub fn bind(&mut self, callback: CallbackFn) {
        if self.callback.replace(callback).is_some() {
            log::debug!("Replacing bound function pointer");
        } else {
            log::debug!("Binding function pointer");
        }
    }
}

impl Slot for FnSlot {
    fn invoke(&mut self, argument: i32) -> Result<i32> {
        let callback = self.callback.ok_or(CallbackError::Unbound)?;
        log::trace!("Invoking function pointer with argument {}", argument);
        Ok(callback(argument))
    }

    fn is_bound(&self) -> bool {
        self.callback.is_some()
    }
}
