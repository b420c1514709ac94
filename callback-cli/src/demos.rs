//! Demonstration callees
//!
//! One of each shape a caller can be connected to. Each callee announces
//! itself through the `callee` log target so the console shows which one ran.
//!
//! The argument and the object's factor come from the command line or the
//! config file, so every product uses two's-complement wrapping instead of
//! panicking on overflow.

use callback_core::Callback;

/// Example 1: a conventional function
pub fn callee1(i: i32) -> i32 {
    log::info!(target: "callee", "Callback: inside function callee1()");
    i.wrapping_mul(10)
}

/// The single callback of the C-style example
pub fn callee(i: i32) -> i32 {
    log::info!(target: "callee", "Callback: inside function callee()");
    i.wrapping_mul(10)
}

/// Example 2: a closure defined on the spot
pub fn closure() -> impl FnMut(i32) -> i32 {
    |i: i32| {
        log::info!(target: "callee", "Callback: inside the closure");
        i.wrapping_mul(20)
    }
}

/// Example 3: an object that behaves like a function
#[derive(Debug, Clone)]
pub struct Callee {
    factor: i32,
}

impl Callee {
    pub fn new(factor: i32) -> Self {
        Self { factor }
    }
}

impl Callback for Callee {
    fn call(&mut self, input: i32) -> i32 {
        log::info!(target: "callee", "Callback: inside the Callee instance");
        self.factor.wrapping_mul(input)
    }
}
