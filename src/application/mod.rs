//! Application layer containing the checkout orchestration.
//!
//! This module defines the `CheckoutFlow` which wires the pure form
//! assembler and response classifier to the injected gateway and presenter
//! ports, and guarantees the submit control is restored on every exit path.

pub mod checkout;
