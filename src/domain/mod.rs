pub mod assembler;
pub mod method;
pub mod outcome;
pub mod payload;
pub mod ports;
