use arrayvec::ArrayVec;

use crate::bits::BitBuf;
use crate::error::{Error, assert};

/// A `u64` extracts to at most 65 bits under the width rule below.
const MAX_EXTRACT_BITS: usize = u64::BITS as usize + 1;

/// Number of bits used to store a positive value: `ceil(log2(i)) + 1`.
///
/// Powers of two get exactly their magnitude width; everything else carries
/// one leading zero bit. So 4 stores as `100` while 5 stores as `0101`.
///
/// Preconditions:
/// - `i > 0`
pub fn bit_len(i: u64) -> usize {
	debug_assert!(i > 0);
	let floor_log2 = 63 - i.leading_zeros() as usize;
	if i.is_power_of_two() { floor_log2 + 1 } else { floor_log2 + 2 }
}

/// Extracts the binary representation of `i`, MSB first.
///
/// The bits come out of the value 1s place first and fill the buffer from the
/// last index backward. A zero magnitude has no defined width and is rejected.
pub fn from_u64(i: u64) -> Result<BitBuf, Error> {
	assert(i > 0, || Error::new_invalid_magnitude("BitInt::new: magnitude must be positive"))?;

	let mut lsb_first = ArrayVec::<bool, MAX_EXTRACT_BITS>::new();
	let mut v = i;
	for _ in 0..bit_len(i) {
		lsb_first.push(v % 2 == 1);
		v >>= 1;
	}
	Ok(lsb_first.iter().rev().copied().collect())
}

/// Reconstructs the machine value, scanning MSB to LSB.
///
/// Exact for any pattern whose value bits fit in a `u64`; wider values are
/// silently truncated to the low 64 bits, the host integer's wrapping rule.
/// `to_u64_checked` is the variant that refuses to drop bits.
pub fn to_u64_wrapping(bits: &[bool]) -> u64 {
	let mut t: u64 = 0;
	for &bit in bits {
		t = (t << 1) | bit as u64;
	}
	t
}

/// Like `to_u64_wrapping`, but fails if any bit above the host width is set.
pub fn to_u64_checked(bits: &[bool]) -> Result<u64, Error> {
	let (high, low) = bits.split_at(bits.len().saturating_sub(u64::BITS as usize));
	assert(!high.contains(&true), || {
		Error::new_overflow("BitInt::try_to_u64: value does not fit in 64 bits")
	})?;
	Ok(to_u64_wrapping(low))
}

/// Renders `"0b"` followed by every stored bit, MSB first. Leading zeros are
/// part of the representation and are not dropped.
pub fn render(bits: &[bool], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
	f.write_str("0b")?;
	for &bit in bits {
		f.write_str(if bit { "1" } else { "0" })?;
	}
	Ok(())
}

//--------------------------------------------------------------------------------------------------
