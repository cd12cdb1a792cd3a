//! DynamoDB-backed `KeyValueStore`.
//!
//! Items live in a single table with partition key `user_id` and sort key `id`.

mod conversions;
mod error;
mod store;

pub use store::DynamoStore;
