//! Generator directory handling for the `cdkey` command.
//!
//! The binary is a thin layer over [`GeneratorDir`]: it opens a directory of
//! key material, issues keys under the persisted serial counter, and reads
//! keys back.

mod features;
mod store;

pub use features::{format_features, parse_features};
pub use store::{
    GeneratorDir, IssuedKey, StoreError, StoreResult, GENERATOR_FILE, ISSUED_FILE, MAX_FILE_SIZE,
    PARAMS_FILE, PUBLIC_KEY_FILE, SECRET_KEY_FILE, SERIAL_FILE,
};
