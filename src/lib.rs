//! Rail fence (zig-zag) transposition cipher.
//!
//! Characters are written down and up across a number of rails and read off
//! rail by rail. This is a teaching cipher; it offers no security.
//!
//! The free functions [`encrypt`], [`decrypt`] and [`build_visualization_matrix`]
//! never fail: an empty input or fewer than two rails leaves the text unchanged
//! (or yields an empty grid). [`RailFence`] takes a validated [`Rails`] instead,
//! so the rail count is checked once, up front.
//!
//! Two backends produce identical output. The default `walk` backend follows
//! the fence grid step by step; the `cycle` feature switches to closed-form
//! index arithmetic over the zig-zag period.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use zeroize::Zeroizing;

// --- Errors ---
pub mod error;
pub use error::{Error, Result};

// --- Zig-zag Path ---
pub mod path;

// --- Backends ---
pub(crate) mod backends;

// --- Visualization ---
pub mod matrix;
pub use matrix::FenceMatrix;

// --- Mission 1 ---
pub mod puzzle;

// --- Constants ---
/// Smallest rail count that transposes anything.
pub const MIN_RAILS: usize = 2;

// --- Validated Rail Count ---

/// A rail count of at least [`MIN_RAILS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rails(usize);

impl Rails {
    pub const MIN: Rails = Rails(MIN_RAILS);

    pub fn new(rails: usize) -> Result<Self> {
        if rails < MIN_RAILS {
            return Err(Error::TooFewRails(rails));
        }
        Ok(Self(rails))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for Rails {
    type Error = Error;

    fn try_from(rails: usize) -> Result<Self> {
        Self::new(rails)
    }
}

impl From<Rails> for usize {
    fn from(rails: Rails) -> usize {
        rails.0
    }
}

impl core::fmt::Display for Rails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Slice-level Codec ---

fn is_degenerate(len: usize, rails: usize) -> bool {
    len == 0 || rails < MIN_RAILS
}

/// Encrypts any sequence of `Copy` items. Degenerate input is returned as is.
pub fn encrypt_slice<T: Copy>(text: &[T], rails: usize) -> Vec<T> {
    if is_degenerate(text.len(), rails) {
        tracing::debug!(len = text.len(), rails, "degenerate input, encrypt is identity");
        return text.to_vec();
    }
    tracing::trace!(backend = backends::active::NAME, len = text.len(), rails, "encrypt");
    backends::active::encrypt(text, rails)
}

/// Decrypts any sequence of `Copy` items. Degenerate input is returned as is.
pub fn decrypt_slice<T: Copy>(text: &[T], rails: usize) -> Vec<T> {
    if is_degenerate(text.len(), rails) {
        tracing::debug!(len = text.len(), rails, "degenerate input, decrypt is identity");
        return text.to_vec();
    }
    tracing::trace!(backend = backends::active::NAME, len = text.len(), rails, "decrypt");
    backends::active::decrypt(text, rails)
}

// --- String Codec ---

/// Runs a slice transform over the characters of `text`, wiping the scratch buffers.
fn transform_str(text: &str, rails: usize, f: fn(&[char], usize) -> Vec<char>) -> String {
    if is_degenerate(text.len(), rails) {
        tracing::debug!(len = text.len(), rails, "degenerate input, returning text unchanged");
        return String::from(text);
    }
    let chars = Zeroizing::new(text.chars().collect::<Vec<char>>());
    let out = Zeroizing::new(f(chars.as_slice(), rails));
    out.iter().collect()
}

/// Encrypts `text` across `rails` rails.
///
/// # Examples
///
/// ```
/// assert_eq!(railfence::encrypt("DEFENDTHEFORT", 3), "DNETEEDHFRFTO");
/// assert_eq!(railfence::encrypt("SHORT", 1), "SHORT");
/// ```
pub fn encrypt(text: &str, rails: usize) -> String {
    transform_str(text, rails, encrypt_slice::<char>)
}

/// Decrypts `text` that was encrypted across `rails` rails.
///
/// The default `walk` backend builds a `min(rails, len) × len` grid, so memory
/// grows with the square of the text length once `rails` reaches it. The
/// `cycle` feature decrypts in linear time and space.
///
/// # Examples
///
/// ```
/// assert_eq!(railfence::decrypt("DNETEEDHFRFTO", 3), "DEFENDTHEFORT");
/// ```
pub fn decrypt(text: &str, rails: usize) -> String {
    transform_str(text, rails, decrypt_slice::<char>)
}

/// Lays ciphertext out on the fence the way decryption fills it.
///
/// Returns `rails` rows by `text.chars().count()` columns, or an empty grid for
/// degenerate input. The grid is allocated in full, so `rails` should stay at a
/// displayable size.
pub fn build_visualization_matrix(text: &str, rails: usize) -> FenceMatrix<char> {
    if is_degenerate(text.len(), rails) {
        return FenceMatrix::empty();
    }
    let chars = Zeroizing::new(text.chars().collect::<Vec<char>>());
    FenceMatrix::ciphertext_view(chars.as_slice(), rails)
}

// --- Typed Codec ---

/// Rail fence codec bound to a validated rail count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RailFence {
    rails: Rails,
}

impl RailFence {
    pub fn new(rails: Rails) -> Self {
        Self { rails }
    }

    pub fn rails(&self) -> Rails {
        self.rails
    }

    pub fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.rails.get())
    }

    pub fn decrypt(&self, text: &str) -> String {
        decrypt(text, self.rails.get())
    }

    pub fn encrypt_slice<T: Copy>(&self, text: &[T]) -> Vec<T> {
        encrypt_slice(text, self.rails.get())
    }

    pub fn decrypt_slice<T: Copy>(&self, text: &[T]) -> Vec<T> {
        decrypt_slice(text, self.rails.get())
    }

    /// Ciphertext layout, see [`build_visualization_matrix`].
    pub fn visualize(&self, text: &str) -> FenceMatrix<char> {
        build_visualization_matrix(text, self.rails.get())
    }
}
