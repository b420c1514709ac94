//! Generic callback slot
//!
//! [`CallbackSlot`] holds at most one boxed [`Callback`]: a plain function, a
//! closure with or without captured state, or a function-like object.

use crate::callback::Callback;
use crate::types::{CallbackError, Result};

/// Storage a [`Caller`](crate::Caller) can trigger
///
/// Implemented by both slot variants. Each slot has its own `bind`, since the
/// shapes of behavior they accept differ.
pub trait Slot {
    /// Call the bound behavior exactly once with `argument`
    ///
    /// Returns [`CallbackError::Unbound`] if nothing is bound.
    fn invoke(&mut self, argument: i32) -> Result<i32>;

    /// Whether a behavior is currently bound
    fn is_bound(&self) -> bool;
}

/// Holds one invocable `(i32) -> i32` of any concrete form
#[derive(Default)]
pub struct CallbackSlot {
    callback: Option<Box<dyn Callback>>,
}

impl CallbackSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a behavior, replacing and dropping any previous one
    ///
    /// # Example
    /// ```
    /// use callback_core::{CallbackSlot, Slot};
    ///
    /// let mut slot = CallbackSlot::new();
    /// slot.bind(|i: i32| 10 * i);
    /// assert_eq!(slot.invoke(10).unwrap(), 100);
    ///
    /// let factor = 20;
    /// slot.bind(move |i: i32| factor * i);
    /// assert_eq!(slot.invoke(10).unwrap(), 200);
    /// ```
    pub fn bind(&mut self, callback: impl Callback + 'static) {
        if self.callback.is_some() {
            log::debug!("Replacing bound callback");
        } else {
            log::debug!("Binding callback");
        }
        self.callback = Some(Box::new(callback));
    }
}

impl Slot for CallbackSlot {
    fn invoke(&mut self, argument: i32) -> Result<i32> {
        let callback = self.callback.as_mut().ok_or(CallbackError::Unbound)?;
        log::trace!("Invoking callback with argument {}", argument);
        Ok(callback.call(argument))
    }

    fn is_bound(&self) -> bool {
        self.callback.is_some()
    }
}

impl std::fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn callee1(i: i32) -> i32 {
        10 * i
    }

    struct Callee {
        factor: i32,
    }

    impl Callback for Callee {
        fn call(&mut self, input: i32) -> i32 {
            self.factor * input
        }
    }

    /// Sets a flag when dropped
    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_new_slot_is_unbound() {
        let mut slot = CallbackSlot::new();
        assert!(!slot.is_bound());
        assert!(matches!(slot.invoke(10), Err(CallbackError::Unbound)));
    }

    #[test]
    fn test_every_shape_binds() {
        let mut slot = CallbackSlot::new();

        slot.bind(callee1);
        assert_eq!(slot.invoke(10).unwrap(), 100);

        slot.bind(|i: i32| 20 * i);
        assert_eq!(slot.invoke(10).unwrap(), 200);

        slot.bind(Callee { factor: 30 });
        assert_eq!(slot.invoke(10).unwrap(), 300);
    }

    #[test]
    fn test_rebind_drops_previous_behavior() {
        let dropped = Rc::new(Cell::new(false));
        let flag = DropFlag(Rc::clone(&dropped));

        let mut slot = CallbackSlot::new();
        slot.bind(move |i: i32| {
            let _keep = &flag;
            i
        });
        assert!(!dropped.get());

        slot.bind(|i: i32| i + 1);
        assert!(dropped.get());
        assert_eq!(slot.invoke(1).unwrap(), 2);
    }

    #[test]
    fn test_invoke_calls_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut slot = CallbackSlot::new();
        slot.bind(move |i: i32| {
            counter.set(counter.get() + 1);
            i
        });

        slot.invoke(5).unwrap();
        assert_eq!(calls.get(), 1);
        slot.invoke(5).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_debug_shows_binding_state() {
        let mut slot = CallbackSlot::new();
        assert_eq!(format!("{:?}", slot), "CallbackSlot { bound: false }");
        slot.bind(callee1);
        assert_eq!(format!("{:?}", slot), "CallbackSlot { bound: true }");
    }
}
