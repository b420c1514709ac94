//! The caller: owns one slot and triggers it on demand
//!
//! A [`Caller`] lets another part of the program connect a callback and later
//! calls it with a fixed demonstration argument. The slot type decides which
//! shapes of behavior can be connected:
//!
//! - [`ClosureCaller`] accepts anything implementing [`Callback`]
//! - [`FnCaller`] accepts only plain function pointers

use crate::callback::{Callback, CallbackFn};
use crate::fn_slot::FnSlot;
use crate::slot::{CallbackSlot, Slot};
use crate::types::{Invocation, Result};
use std::io::Write;

/// Argument passed to the callback by [`Caller::test`] unless overridden
pub const DEMO_ARGUMENT: i32 = 10;

/// Caller over the generic slot
pub type ClosureCaller = Caller<CallbackSlot>;

/// Caller over the function-pointer slot
pub type FnCaller = Caller<FnSlot>;

/// Owns exactly one callback slot and triggers it
#[derive(Debug)]
pub struct Caller<S> {
    slot: S,
    argument: i32,
}

impl<S: Slot + Default> Caller<S> {
    /// Create an unbound caller using [`DEMO_ARGUMENT`]
    pub fn new() -> Self {
        Self {
            slot: S::default(),
            argument: DEMO_ARGUMENT,
        }
    }
}

impl<S: Slot + Default> Default for Caller<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slot> Caller<S> {
    /// Builder method: set the argument used when triggering the callback
    pub fn with_argument(mut self, argument: i32) -> Self {
        self.argument = argument;
        self
    }

    /// Argument the callback is triggered with
    pub fn argument(&self) -> i32 {
        self.argument
    }

    /// Whether a callback is currently connected
    pub fn is_bound(&self) -> bool {
        self.slot.is_bound()
    }

    /// Test the callback to make sure it works
    ///
    /// Writes a line announcing the call, invokes the callback with the
    /// caller's argument, then writes the result and returns it.
    ///
    /// # Example
    /// ```
    /// use callback_core::ClosureCaller;
    ///
    /// let mut caller = ClosureCaller::new();
    /// caller.connect_callback(|i: i32| 10 * i);
    ///
    /// let mut out = Vec::new();
    /// assert_eq!(caller.test(&mut out).unwrap(), 100);
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Caller::test(): calling the callback...\nResult: 100\n"
    /// );
    /// ```
    pub fn test<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<i32> {
        writeln!(out, "Caller::test(): calling the callback...")?;
        out.flush()?;

        let result = self.slot.invoke(self.argument).map_err(|e| {
            log::error!("Caller::test() failed: {}", e);
            e
        })?;

        writeln!(out, "Result: {}", result)?;
        Ok(result)
    }

    /// Invoke the callback and return a labelled record instead of printing
    pub fn trigger(&mut self, label: impl Into<String>) -> Result<Invocation> {
        let result = self.slot.invoke(self.argument)?;
        Ok(Invocation::new(label, self.argument, result))
    }
}

impl Caller<CallbackSlot> {
    /// Clients connect their callback using this
    ///
    /// Any previously connected callback is dropped.
    pub fn connect_callback(&mut self, callback: impl Callback + 'static) {
        self.slot.bind(callback);
    }
}

impl Caller<FnSlot> {
    /// Clients connect their function pointer using this
    pub fn connect_callback(&mut self, callback: CallbackFn) {
        self.slot.bind(callback);
    }
}
