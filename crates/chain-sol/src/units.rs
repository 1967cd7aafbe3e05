//! Lamport-denominated amount arithmetic.
//!
//! SOL amounts are carried as integer lamports (`u64`); decimal display
//! strings are converted at the host boundary. The decimal codec is
//! written by hand — the full weight of a units library is not needed
//! for one fixed 9-decimal asset.

use crate::error::SolError;

/// Lamports per 1 SOL (9 decimals).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Minimum balance withheld from a SOL sweep: 0.00001 SOL.
///
/// Covers the transaction fee plus Solana's rent-exemption floor for the
/// sender account.
pub const MIN_TRANSFER_RESERVE_LAMPORTS: u64 = 10_000;

/// Parses a decimal SOL amount string into lamports.
///
/// Accepts up to 9 fractional digits; rejects negative amounts, empty
/// input, and anything that is not plain decimal notation.
pub fn parse_sol(value: &str) -> Result<u64, SolError> {
    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(SolError::InvalidAmount(format!("{value:?}: empty amount")));
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(SolError::InvalidAmount(format!(
            "{value:?}: not a decimal number"
        )));
    }
    if frac.len() > 9 {
        return Err(SolError::InvalidAmount(format!(
            "{value:?}: more than 9 fractional digits"
        )));
    }

    let whole_lamports = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .ok()
            .and_then(|w| w.checked_mul(LAMPORTS_PER_SOL))
            .ok_or_else(|| {
                SolError::InvalidAmount(format!("{value:?}: exceeds u64 lamports"))
            })?
    };

    // Right-pad the fractional part to 9 digits: "5" -> 500_000_000.
    let mut frac_lamports = 0u64;
    if !frac.is_empty() {
        let padded = format!("{frac:0<9}");
        frac_lamports = padded.parse::<u64>().map_err(|_| {
            SolError::InvalidAmount(format!("{value:?}: invalid fractional part"))
        })?;
    }

    whole_lamports.checked_add(frac_lamports).ok_or_else(|| {
        SolError::InvalidAmount(format!("{value:?}: exceeds u64 lamports"))
    })
}

/// Formats lamports as a decimal SOL string, trimming trailing zeros.
pub fn format_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;

    if frac == 0 {
        return whole.to_string();
    }

    let frac_str = format!("{frac:09}");
    format!("{whole}.{}", frac_str.trim_end_matches('0'))
}
