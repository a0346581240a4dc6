//! Helpers for fixed-width unsigned arithmetic on single limbs.



//		Modules

#[cfg(test)]
#[path = "tests/uints.rs"]
mod tests;



//		Packages

use crate::digit_vector::Digit;



//		Functions

//		uaddc																	
/// Adds two limbs and an incoming carry, returning the sum and updating the
/// carry flag.
///
/// # Parameters
///
/// * `a`     - The first limb.
/// * `b`     - The second limb.
/// * `carry` - The carry flag, updated in place.
///
pub(crate) fn uaddc(a: Digit, b: Digit, carry: &mut bool) -> Digit {
	let temp = a.wrapping_add(Digit::from(*carry));
	let r    = b.wrapping_add(temp);
	*carry   = (r < b) || (temp < a);
	r
}

//		usubb																	
/// Subtracts a limb and an incoming borrow from another limb, returning the
/// difference and updating the borrow flag.
///
/// # Parameters
///
/// * `a`      - The limb to subtract from.
/// * `b`      - The limb to subtract.
/// * `borrow` - The borrow flag, updated in place.
///
pub(crate) fn usubb(a: Digit, b: Digit, borrow: &mut bool) -> Digit {
	let temp = a.wrapping_sub(b);
	let r    = temp.wrapping_sub(Digit::from(*borrow));
	*borrow  = (r > temp) || (temp > a);
	r
}

//		bit_length																
/// Returns the number of bits required to represent a limb.
///
/// A value of zero is reported as requiring one bit, matching the width of
/// the digit `0`.
///
/// # Parameters
///
/// * `number` - The limb to measure.
///
pub(crate) fn bit_length(number: Digit) -> u32 {
	if number == 0 {
		1
	} else {
		Digit::BITS - number.leading_zeros()
	}
}


