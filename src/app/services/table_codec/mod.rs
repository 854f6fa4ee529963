//! Byte-level table codec.
//!
//! The only I/O boundary of the engine: [`decode::decode_table`] turns
//! uploaded bytes into a [`RawTable`](crate::app::models::RawTable) and
//! [`encode::encode_table`] serializes a table back to bytes for delivery.
//! Everything between the two is pure in-memory computation.
//!
//! The wire format is CSV; callers treat it as opaque bytes.

pub mod decode;
pub mod encode;

#[cfg(test)]
pub mod tests;

pub use decode::decode_table;
pub use encode::encode_table;
