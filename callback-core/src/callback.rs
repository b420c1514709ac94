//! The callback capability set
//!
//! Anything that can be called with one `i32` and returns an `i32` is a
//! [`Callback`]. Plain functions and closures get the implementation for free;
//! function-like objects implement the trait themselves and may keep state
//! between calls.

/// A unit of behavior a [`Caller`](crate::Caller) can invoke later
///
/// # Example
/// ```
/// use callback_core::Callback;
///
/// struct Scale {
///     factor: i32,
/// }
///
/// impl Callback for Scale {
///     fn call(&mut self, input: i32) -> i32 {
///         self.factor * input
///     }
/// }
///
/// let mut scale = Scale { factor: 30 };
/// assert_eq!(scale.call(10), 300);
///
/// let mut double = |i: i32| 2 * i;
/// assert_eq!(Callback::call(&mut double, 21), 42);
/// ```
///
/// Values with the wrong shape are rejected when the program is compiled:
/// ```compile_fail
/// use callback_core::ClosureCaller;
///
/// let mut caller = ClosureCaller::new();
/// caller.connect_callback(|s: &str| s.len());
/// ```
pub trait Callback {
    fn call(&mut self, input: i32) -> i32;
}

impl<F> Callback for F
where
    F: FnMut(i32) -> i32,
{
    fn call(&mut self, input: i32) -> i32 {
        self(input)
    }
}

/// Plain function pointer accepted by the restricted slot
pub type CallbackFn = fn(i32) -> i32;
