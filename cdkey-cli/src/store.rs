//! Generator directory.
//!
//! A generator directory holds everything needed to keep issuing keys:
//!
//! | File             | Contents                                       |
//! |------------------|------------------------------------------------|
//! | `pairing.param`  | textual domain parameters                      |
//! | `g.bin`          | compressed G2 generator                        |
//! | `secret_key.bin` | secret scalar                                  |
//! | `public_key.bin` | compressed public key (optional)               |
//! | `serial`         | last issued serial, 4 bytes big-endian         |
//! | `cdkeys`         | append-only log of issued keys                 |
//!
//! Creating a directory (choosing a curve, drawing `g` and `sk`) is not done
//! here.

use crate::features::format_features;
use cdkey_license::{Bls12KeyGenerator, Bls12KeyReader, KeygenError, Message};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Domain parameter file.
pub const PARAMS_FILE: &str = "pairing.param";
/// Generator file.
pub const GENERATOR_FILE: &str = "g.bin";
/// Secret key file.
pub const SECRET_KEY_FILE: &str = "secret_key.bin";
/// Public key file.
pub const PUBLIC_KEY_FILE: &str = "public_key.bin";
/// Serial counter file.
pub const SERIAL_FILE: &str = "serial";
/// Issued-key log.
pub const ISSUED_FILE: &str = "cdkeys";

/// Largest key-material file accepted, in bytes.
pub const MAX_FILE_SIZE: u64 = 1024;

const SERIAL_SIZE: usize = 4;

/// Result type for generator directory operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Generator directory errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Path does not exist or is not a directory.
    #[error("not a generator directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Filesystem error on a specific file.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Key-material file exceeds [`MAX_FILE_SIZE`].
    #[error("{}: file too large ({size} bytes, max {max})", .path.display(), max = MAX_FILE_SIZE)]
    FileTooLarge {
        /// Offending file.
        path: PathBuf,
        /// Its size.
        size: u64,
    },

    /// Parameter file is not UTF-8 text.
    #[error("{}: not valid UTF-8", .0.display())]
    NotText(PathBuf),

    /// Serial counter file is not exactly four bytes.
    #[error("{}: serial counter must be {expected} bytes, got {len}", .path.display(), expected = SERIAL_SIZE)]
    CorruptSerial {
        /// Serial file.
        path: PathBuf,
        /// Its length.
        len: usize,
    },

    /// Issuing the requested number of keys would overflow the serial.
    #[error("serial counter exhausted: {remaining} serials left after {current}")]
    SerialExhausted {
        /// Last issued serial.
        current: u32,
        /// Serials still available.
        remaining: u32,
    },

    /// Key material was rejected or a key could not be produced.
    #[error(transparent)]
    Keygen(#[from] KeygenError),
}

/// One line of the issued-key log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedKey {
    /// Serial the key was issued under.
    pub serial: u32,
    /// Feature mask signed into the key.
    pub features: u8,
    /// The formatted license key.
    pub key: String,
}

impl IssuedKey {
    /// Formats the key the way it is appended to the log.
    pub fn log_line(&self) -> String {
        format!("{} features:{}", self.key, format_features(self.features))
    }
}

/// An opened generator directory.
#[derive(Debug, Clone)]
pub struct GeneratorDir {
    root: PathBuf,
}

impl GeneratorDir {
    /// Opens an existing generator directory.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = path.into();
        if !root.is_dir() {
            return Err(StoreError::NotADirectory(root));
        }
        Ok(Self { root })
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_small(&self, name: &str) -> StoreResult<Vec<u8>> {
        let path = self.file(name);
        let size = fs::metadata(&path)
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?
            .len();
        if size > MAX_FILE_SIZE {
            return Err(StoreError::FileTooLarge { path, size });
        }
        fs::read(&path).map_err(|source| StoreError::Io { path, source })
    }

    fn read_params(&self) -> StoreResult<String> {
        String::from_utf8(self.read_small(PARAMS_FILE)?)
            .map_err(|_| StoreError::NotText(self.file(PARAMS_FILE)))
    }

    /// Loads the key generator from `pairing.param`, `g.bin` and
    /// `secret_key.bin`.
    pub fn load_generator(&self) -> StoreResult<Bls12KeyGenerator> {
        let params = self.read_params()?;
        let g = self.read_small(GENERATOR_FILE)?;
        let secret_key = Zeroizing::new(self.read_small(SECRET_KEY_FILE)?);

        let generator = Bls12KeyGenerator::new(&params, &g, &secret_key)?;
        debug!(
            dir = %self.root.display(),
            public_key = %hex::encode(generator.public_key()?),
            "loaded generator"
        );
        Ok(generator)
    }

    /// Loads a key reader.
    ///
    /// Uses `public_key.bin` when present, otherwise derives the public key
    /// from the generator and secret key.
    pub fn load_reader(&self) -> StoreResult<Bls12KeyReader> {
        if self.file(PUBLIC_KEY_FILE).exists() {
            let params = self.read_params()?;
            let public_key = self.read_small(PUBLIC_KEY_FILE)?;
            return Ok(Bls12KeyReader::new(&params, &public_key)?);
        }
        Ok(self.load_generator()?.reader()?)
    }

    /// Reads the last issued serial.
    pub fn read_serial(&self) -> StoreResult<u32> {
        let path = self.file(SERIAL_FILE);
        let bytes = self.read_small(SERIAL_FILE)?;
        let bytes: [u8; SERIAL_SIZE] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| StoreError::CorruptSerial {
                path,
                len: bytes.len(),
            })?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Persists the last issued serial.
    ///
    /// Written to a temporary file, then renamed over the counter.
    pub fn write_serial(&self, serial: u32) -> StoreResult<()> {
        let path = self.file(SERIAL_FILE);
        let tmp = self.file(&format!("{SERIAL_FILE}.tmp"));
        fs::write(&tmp, serial.to_be_bytes()).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }

    /// Issues `count` keys with the given features.
    ///
    /// Serials continue from the stored counter: the first key gets
    /// `serial + 1`. All keys are generated before anything is written; the
    /// log is appended and then the counter is advanced.
    pub fn issue(&self, count: u32, features: u8) -> StoreResult<Vec<IssuedKey>> {
        let current = self.read_serial()?;
        let last = current
            .checked_add(count)
            .ok_or(StoreError::SerialExhausted {
                current,
                remaining: u32::MAX - current,
            })?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let generator = self.load_generator()?;
        let issued = (current + 1..=last)
            .map(|serial| -> StoreResult<IssuedKey> {
                Ok(IssuedKey {
                    serial,
                    features,
                    key: generator.generate(serial, features)?,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        self.append_log(&issued)?;
        self.write_serial(last)?;

        info!(
            count,
            features = %format_features(features),
            first = current + 1,
            last,
            "issued license keys"
        );
        Ok(issued)
    }

    /// Reads the serial and features carried by `key`.
    ///
    /// The signature is not checked.
    pub fn inspect(&self, key: &str) -> StoreResult<Message> {
        Ok(self.load_reader()?.read(key)?)
    }

    fn append_log(&self, issued: &[IssuedKey]) -> StoreResult<()> {
        let path = self.file(ISSUED_FILE);
        let io_err = |source: io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        let mut lines = String::new();
        for key in issued {
            lines.push_str(&key.log_line());
            lines.push('\n');
        }
        log.write_all(lines.as_bytes()).map_err(io_err)?;
        log.flush().map_err(io_err)
    }
}
