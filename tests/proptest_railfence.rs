//! Property-based tests for the rail fence codec.
//!
//! These check the codec's defining properties for arbitrary text and rail
//! counts, not just the fixed vectors in the unit tests.

use proptest::prelude::*;
use railfence::{FenceMatrix, build_visualization_matrix, decrypt, decrypt_slice, encrypt, encrypt_slice};

fn sorted(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

// ============================================================================
// Codec Properties
// ============================================================================

proptest! {
    /// Property: decryption inverts encryption for every rail count.
    #[test]
    fn prop_round_trip(text in ".{1,200}", rails in 2usize..=10) {
        let cipher = encrypt(&text, rails);
        prop_assert_eq!(decrypt(&cipher, rails), text);
    }

    /// Property: encryption also inverts decryption.
    #[test]
    fn prop_inverse_round_trip(text in ".{1,200}", rails in 2usize..=10) {
        prop_assert_eq!(encrypt(&decrypt(&text, rails), rails), text);
    }

    /// Property: more rails than characters still round-trips.
    #[test]
    fn prop_wide_fence_round_trip(
        text in "[A-Z]{1,8}",
        extra in prop_oneof![0usize..32, (usize::MAX / 2)..=usize::MAX],
    ) {
        let rails = text.len().saturating_add(extra);
        let cipher = encrypt(&text, rails);
        prop_assert_eq!(&cipher, &text);
        prop_assert_eq!(decrypt(&cipher, rails), text);
    }

    /// Property: the closed-form rail matches the bounce rule at any width.
    #[test]
    fn prop_rail_of_any_width(
        index in any::<usize>(),
        rails in prop_oneof![2usize..64, (usize::MAX / 2)..=usize::MAX],
    ) {
        let period = 2 * (rails as u128 - 1);
        let k = index as u128 % period;
        let expected = if k < rails as u128 { k } else { period - k };
        prop_assert_eq!(railfence::path::rail_of(index, rails) as u128, expected);
    }

    /// Property: output has as many characters as input.
    #[test]
    fn prop_length_preserved(text in ".{0,200}", rails in 0usize..=12) {
        let n = text.chars().count();
        prop_assert_eq!(encrypt(&text, rails).chars().count(), n);
        prop_assert_eq!(decrypt(&text, rails).chars().count(), n);
    }

    /// Property: the ciphertext is a permutation of the plaintext.
    #[test]
    fn prop_permutation(text in ".{0,200}", rails in 2usize..=10) {
        prop_assert_eq!(sorted(&encrypt(&text, rails)), sorted(&text));
    }

    /// Property: fewer than two rails leaves text untouched.
    #[test]
    fn prop_degenerate_identity(text in ".{0,64}", rails in 0usize..2) {
        prop_assert_eq!(encrypt(&text, rails), text.clone());
        prop_assert_eq!(decrypt(&text, rails), text.clone());
        prop_assert!(build_visualization_matrix(&text, rails).is_empty());
    }

    /// Property: identical inputs give identical outputs.
    #[test]
    fn prop_deterministic(text in ".{0,100}", rails in 0usize..=10) {
        prop_assert_eq!(encrypt(&text, rails), encrypt(&text, rails));
        prop_assert_eq!(decrypt(&text, rails), decrypt(&text, rails));
        prop_assert_eq!(
            build_visualization_matrix(&text, rails),
            build_visualization_matrix(&text, rails)
        );
    }

    /// Property: the slice codec agrees with the string codec.
    #[test]
    fn prop_slice_matches_str(text in "[ -~]{0,100}", rails in 2usize..=10) {
        let bytes = encrypt_slice(text.as_bytes(), rails);
        let cipher = encrypt(&text, rails);
        prop_assert_eq!(bytes.as_slice(), cipher.as_bytes());
        prop_assert_eq!(decrypt_slice(&bytes, rails), text.into_bytes());
    }
}

// ============================================================================
// Matrix Properties
// ============================================================================

proptest! {
    /// Property: the grid is rails × length with one occupied cell per column.
    #[test]
    fn prop_matrix_shape(text in ".{1,100}", rails in 2usize..=10) {
        let matrix = build_visualization_matrix(&text, rails);
        let n = text.chars().count();
        prop_assert_eq!(matrix.rails(), rails);
        prop_assert_eq!(matrix.width(), n);
        prop_assert_eq!(matrix.rows().count(), rails);

        let mut per_column = vec![0usize; n];
        for (row, col, _) in matrix.occupied() {
            prop_assert_eq!(row, railfence::path::rail_of(col, rails));
            per_column[col] += 1;
        }
        prop_assert!(per_column.iter().all(|&c| c == 1));
    }

    /// Property: reading the ciphertext view along the path decrypts.
    #[test]
    fn prop_ciphertext_view_reads_as_plaintext(text in ".{1,100}", rails in 2usize..=10) {
        let matrix = build_visualization_matrix(&text, rails);
        prop_assert_eq!(matrix.read_zigzag().into_iter().collect::<String>(), decrypt(&text, rails));
        prop_assert_eq!(matrix.read_rows().into_iter().collect::<String>(), text);
    }

    /// Property: reading the plaintext view rail by rail encrypts.
    #[test]
    fn prop_plaintext_view_reads_as_ciphertext(text in ".{1,100}", rails in 2usize..=10) {
        let chars: Vec<char> = text.chars().collect();
        let matrix = FenceMatrix::plaintext_view(&chars, rails);
        prop_assert_eq!(matrix.read_rows().into_iter().collect::<String>(), encrypt(&text, rails));
        prop_assert_eq!(matrix.read_zigzag(), chars);
    }
}
