//! Arbitrary-precision signed integer type.

//	These lint checks are unnecessary in this module because:
//	  1. Limb indices are always derived from the sizes of the vectors they
//	     index into, so the indexing operations are fundamentally safe.
//	  2. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are always derived from vector sizes"
)]

//	This lint check is unnecessary in this module because the limb kernels
//	depend on wrapping and truncating behaviour: two's-complement windows,
//	carry propagation, and double-width accumulators are essential parts of
//	the algorithms, and the proofs of their correctness live alongside the
//	code that relies on them.
#![allow(clippy::arithmetic_side_effects, reason = "Limb kernels rely on modular arithmetic")]



//		Modules																											

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																										

use crate::digit_vector::{BitCount, DDigit, DIGIT_BITS, DIGIT_MAX, Digit, DigitVector, MAX_DIGITS, MAX_BITS, SDDigit};
use crate::errors::BigIntError;
use crate::uints;
use core::{
	cmp::Ordering,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	mem,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};



//		Constants																										

/// Maps an ASCII byte to the base-36 digit value it represents, or `0xFF`
/// for bytes that are not alphanumeric. Letters are case-insensitive.
const CHAR_TO_DIGIT: [u8; 256] = {
	let mut map = [0xFF_u8; 256];
	let mut i = 0_u8;
	while i < 10 {
		map[(b'0' + i) as usize] = i;
		i += 1;
	}
	let mut j = 0_u8;
	while j < 26 {
		map[(b'a' + j) as usize] = 10 + j;
		map[(b'A' + j) as usize] = 10 + j;
		j += 1;
	}
	map
};

/// The lower-case characters used to render digits in bases up to 36.
const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";



//		Enums																											

//		BitwiseOp																
/// The bitwise operations that share the two's-complement bridging kernel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum BitwiseOp {
	/// Bitwise AND.
	And,
	
	/// Bitwise inclusive OR.
	Or,
	
	/// Bitwise exclusive OR.
	Xor,
}



//		Traits																											

/// Sealing for [`PrimInt`], preventing implementations outside this crate.
mod private {
	//		Sealed																
	/// Implemented only by the built-in integer types.
	pub trait Sealed {}
	
	impl Sealed for i8 {}
	impl Sealed for i16 {}
	impl Sealed for i32 {}
	impl Sealed for i64 {}
	impl Sealed for i128 {}
	impl Sealed for isize {}
	impl Sealed for u8 {}
	impl Sealed for u16 {}
	impl Sealed for u32 {}
	impl Sealed for u64 {}
	impl Sealed for u128 {}
	impl Sealed for usize {}
}

//		PrimInt																	
/// A built-in integer type that an [`Int`] can be losslessly created from,
/// compared against without allocation, and converted back into.
///
/// This trait is sealed: it is implemented for the built-in integer types
/// and cannot be implemented elsewhere.
pub trait PrimInt: Copy + private::Sealed {
	/// Whether the type is signed.
	#[doc(hidden)]
	const SIGNED: bool;
	
	/// The width of the type in bits.
	#[doc(hidden)]
	const BITS: u32;
	
	/// Splits the value into a sign flag and an unsigned magnitude.
	#[doc(hidden)]
	fn split(self) -> (bool, u128);
	
	/// Reassembles a value from a sign flag and the low bits of a magnitude,
	/// wrapping modulo the width of the type.
	#[doc(hidden)]
	fn from_parts(negative: bool, magnitude: u128) -> Self;
}

//󰭅		PrimInt: i8																
impl PrimInt for i8 {
	const SIGNED: bool = true;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(self < 0, u128::from(self.unsigned_abs()))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: i16															
impl PrimInt for i16 {
	const SIGNED: bool = true;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(self < 0, u128::from(self.unsigned_abs()))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: i32															
impl PrimInt for i32 {
	const SIGNED: bool = true;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(self < 0, u128::from(self.unsigned_abs()))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: i64															
impl PrimInt for i64 {
	const SIGNED: bool = true;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(self < 0, u128::from(self.unsigned_abs()))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: i128															
impl PrimInt for i128 {
	const SIGNED: bool = true;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(self < 0, self.unsigned_abs())
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_wrap, reason = "Wrapping is the contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: isize															
impl PrimInt for isize {
	const SIGNED: bool = true;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(self < 0, self.unsigned_abs() as u128)
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: u8																
impl PrimInt for u8 {
	const SIGNED: bool = false;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(false, u128::from(self))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: u16															
impl PrimInt for u16 {
	const SIGNED: bool = false;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(false, u128::from(self))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: u32															
impl PrimInt for u32 {
	const SIGNED: bool = false;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(false, u128::from(self))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: u64															
impl PrimInt for u64 {
	const SIGNED: bool = false;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(false, u128::from(self))
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}

//󰭅		PrimInt: u128															
impl PrimInt for u128 {
	const SIGNED: bool = false;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(false, self)
	}
	
	//		from_parts															
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		if negative { magnitude.wrapping_neg() } else { magnitude }
	}
}

//󰭅		PrimInt: usize															
impl PrimInt for usize {
	const SIGNED: bool = false;
	const BITS:   u32  = (mem::size_of::<Self>() * 8) as u32;
	
	//		split																
	fn split(self) -> (bool, u128) {
		(false, self as u128)
	}
	
	//		from_parts															
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the wrapping contract")]
	fn from_parts(negative: bool, magnitude: u128) -> Self {
		let value = magnitude as Self;
		if negative { value.wrapping_neg() } else { value }
	}
}



//		Structs																											

//		Int																		
/// A signed integer of unbounded magnitude.
///
/// The value is stored in sign-magnitude form: a sign flag plus a sequence
/// of base-`2^W` limbs, least significant first, where `W` is 32 by default
/// and 64 behind the `digit-64` feature. The empty magnitude is the unique
/// representation of zero, the top limb of a nonzero magnitude is never
/// zero, and zero is never negative. Every public operation upholds these
/// invariants.
///
/// # Arithmetic
///
/// The standard operators (`+ - * / % & | ^ ~ << >>` and their compound
/// forms) follow standard Rust integer behaviour: division or remainder by
/// zero panics, and so does an operation whose result would exceed the
/// maximum representable size. The fallible equivalents are available as the
/// `try_*` methods, which report the precise failure as a
/// [`BigIntError`] instead of panicking. Either way, a failed operation
/// never modifies its operands.
///
/// Division truncates toward zero, so the remainder takes the sign of the
/// dividend and `(x / y) * y + x % y == x` holds whenever `y` is nonzero.
/// The shift operators are arithmetic: `x << s` equals `x * 2^s`, and
/// `x >> s` equals `x / 2^s` rounded toward negative infinity, so
/// `Int::from(-1) >> s` is `-1` for every `s`.
///
/// # Bitwise behaviour
///
/// The bitwise operators behave as if both operands were encoded in
/// infinite-precision two's complement and the result were reinterpreted
/// back into sign-magnitude form. In particular `!x == -x - 1`, matching
/// the complement operator on the built-in integer types.
///
/// # Conversion
///
/// This type can be converted losslessly from any of the following types,
/// via [`From`]:
///
///   - [`i8`], [`i16`], [`i32`], [`i64`], [`i128`], [`isize`]
///   - [`u8`], [`u16`], [`u32`], [`u64`], [`u128`], [`usize`]
///
/// Conversions back are available in two forms: [`TryFrom`], which fails
/// with [`BigIntError::Overflow`] when the value does not fit, and
/// [`to_int()`](Int::to_int), which wraps modulo the width of the target
/// type. [`within()`](Int::within) tests whether the exact value lies in a
/// target type's range.
///
/// Conversions from [`f64`] truncate toward zero, so every double in
/// `(-1, 1)` becomes zero; NaN and the infinities are rejected with
/// [`BigIntError::FromFloat`]. Conversion to [`f64`] rounds, and overflows
/// silently to infinity, matching the IEEE-754 semantics of `f64` itself.
///
/// # Strings
///
/// Values parse from and render to strings in any base from 2 to 36, with
/// digits beyond 9 represented by letters in either case. Parsing accepts
/// leading ASCII whitespace and an optional sign, requires at least one
/// digit, and rejects anything following the digits. [`Display`] renders
/// base 10, and [`Binary`], [`Octal`], [`LowerHex`], and [`UpperHex`]
/// render bases 2, 8, and 16 with the usual alternate-form prefixes.
///
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Int {
	/// Whether the value is strictly negative. Never `true` for zero.
	negative: bool,
	
	/// The magnitude: the absolute value of the integer, least significant
	/// limb first, with no trailing zero limbs.
	vec: DigitVector,
}

//󰭅		Int																		
impl Int {
	//		Private constants													
	/// The limb base as a double: `2^W`, exactly representable.
	const BASE_DBL: f64 = (1_u128 << DIGIT_BITS) as f64;
	
	/// The reciprocal of the limb base. A power of two, so multiplying by it
	/// is exact and equivalent to dividing by the base.
	const BASE_DBL_RECIPROCAL: f64 = 1.0 / Self::BASE_DBL;
	
	/// The largest integer exactly representable in a double: `2^53 - 1`.
	const DBL_MAX_INT: BitCount = (1 << 53) - 1;
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`Int`] with value zero. No allocation occurs.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			negative: false,
			vec:      DigitVector::new(),
		}
	}
	
	//		from_str_radix														
	/// Parses an [`Int`] from a string in the given base.
	///
	/// The string may begin with ASCII whitespace, followed by an optional
	/// `+` or `-` sign, followed by one or more digits in the given base.
	/// Digits beyond 9 are represented by the letters `a`-`z` in either
	/// case. Nothing may follow the digits: parsing is all-or-nothing.
	///
	/// Digits are processed in batches: as many source digits as fit in a
	/// single limb are accumulated into a limb-sized value, and the running
	/// result is advanced with one multiply-and-add per batch rather than
	/// one per digit.
	///
	/// # Parameters
	///
	/// * `s`    - The string to parse.
	/// * `base` - The base to parse in, from 2 to 36 inclusive.
	///
	/// # Errors
	///
	/// Returns [`InvalidArgument`](BigIntError::InvalidArgument) if the base
	/// is outside `2..=36`, and [`ParseError`](BigIntError::ParseError) if
	/// the string is empty, contains no digits, or contains any character
	/// that is not a digit in the given base. Allocation failures are
	/// reported as for any other operation.
	///
	pub fn from_str_radix(s: &str, base: u32) -> Result<Self, BigIntError> {
		if !(2..=36).contains(&base) {
			return Err(BigIntError::InvalidArgument);
		}
		
		let bytes = s.as_bytes();
		let mut i = 0;
		
		//	Allow leading ASCII whitespace
		while i < bytes.len() && bytes[i].is_ascii_whitespace() {
			i += 1;
		}
		
		//	Allow one plus/minus sign before the first digit
		let mut negative = false;
		if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
			negative = bytes[i] == b'-';
			i += 1;
		}
		
		//	At least one digit is mandatory, and nothing may follow the run
		if i == bytes.len() {
			return Err(BigIntError::ParseError);
		}
		for &byte in &bytes[i..] {
			let digit = CHAR_TO_DIGIT[byte as usize];
			if digit == 0xFF || u32::from(digit) >= base {
				return Err(BigIntError::ParseError);
			}
		}
		
		let n_chars               = bytes.len() - i;
		let (max_batch, _)        = Self::batch_info(base);
		let mut value             = Self::new();
		value.vec.reserve(n_chars.div_ceil(max_batch))?;
		
		//	Powers of the base up to one whole batch
		let mut powers = [0 as Digit; 64];
		powers[0]      = 1;
		for e in 1..=max_batch {
			powers[e] = powers[e - 1] * base as Digit;
		}
		
		while i < bytes.len() {
			let batch_len = max_batch.min(bytes.len() - i);
			let mut batch = 0 as Digit;
			for _ in 0..batch_len {
				batch = batch * base as Digit + Digit::from(CHAR_TO_DIGIT[bytes[i] as usize]);
				i += 1;
			}
			value.imul1add1(powers[batch_len], batch)?;
		}
		
		value.trim();
		value.negative = negative && value.size() > 0;
		Ok(value)
	}
	
	//		Public methods														
	
	//		abs																	
	/// Returns the absolute value of the integer.
	#[must_use]
	pub fn abs(&self) -> Self {
		let mut result      = self.clone();
		result.negative     = false;
		result
	}
	
	//		bit_length															
	/// Returns the number of bits required to represent the absolute value
	/// of the integer, or `0` if the integer is zero.
	#[must_use]
	pub fn bit_length(&self) -> BitCount {
		if self.size() == 0 {
			return 0;
		}
		(self.size() as BitCount - 1) * BitCount::from(DIGIT_BITS)
			+ BitCount::from(uints::bit_length(self.vec[self.size() - 1]))
	}
	
	//		capacity															
	/// Returns the number of limbs the allocated magnitude store can hold.
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.vec.capacity()
	}
	
	//		decrement															
	/// Subtracts one from the integer in place.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the magnitude cannot
	/// grow; the integer is unchanged on failure.
	///
	pub fn decrement(&mut self) -> Result<(), BigIntError> {
		if self.negative {
			self.increment_abs()
		} else {
			self.decrement_abs()
		}
	}
	
	//		digits																
	/// Represents the magnitude as a slice of limbs, least significant
	/// first. The slice is empty if the integer is zero.
	#[must_use]
	pub fn digits(&self) -> &[Digit] {
		self.vec.as_slice()
	}
	
	//		increment															
	/// Adds one to the integer in place.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the magnitude cannot
	/// grow; the integer is unchanged on failure.
	///
	pub fn increment(&mut self) -> Result<(), BigIntError> {
		if self.negative {
			self.decrement_abs()
		} else {
			self.increment_abs()
		}
	}
	
	//		is_even																
	/// Returns `true` if the integer is even.
	#[must_use]
	pub fn is_even(&self) -> bool {
		!self.is_odd()
	}
	
	//		is_negative															
	/// Returns `true` if the integer is strictly negative.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.negative
	}
	
	//		is_odd																
	/// Returns `true` if the integer is odd.
	#[must_use]
	pub fn is_odd(&self) -> bool {
		self.size() != 0 && self.vec[0] & 1 == 1
	}
	
	//		is_zero																
	/// Returns `true` if the integer is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.size() == 0
	}
	
	//		negate																
	/// Negates the integer in place. Zero is unaffected.
	pub fn negate(&mut self) {
		if self.size() != 0 {
			self.negative = !self.negative;
		}
	}
	
	//		pow																	
	/// Raises `base` to the power `exp`.
	///
	/// `exp` must be non-negative. Any base raised to the power zero is one,
	/// including zero itself. The computation is left-to-right binary
	/// exponentiation, so the number of multiplications is logarithmic in
	/// the exponent.
	///
	/// # Parameters
	///
	/// * `base` - The base.
	/// * `exp`  - The exponent, which must be non-negative.
	///
	/// # Errors
	///
	/// Returns [`InvalidArgument`](BigIntError::InvalidArgument) if `exp` is
	/// negative, and [`Overflow`](BigIntError::Overflow) if the result would
	/// exceed the maximum representable bit length. A base of `-1`, `0`, or
	/// `1` never overflows, whatever the exponent.
	///
	pub fn pow(base: &Self, exp: &Self) -> Result<Self, BigIntError> {
		if exp.is_negative() {
			return Err(BigIntError::InvalidArgument);
		}
		if exp.size() == 0 {
			return Ok(Self::from(1));
		}
		if base.size() == 0 {
			return Ok(Self::new());
		}
		//	-1 and 1 cycle without growing, whatever the exponent
		if base.size() == 1 && base.vec[0] == 1 {
			return Ok(if base.negative && exp.is_odd() {
				Self::from(-1)
			} else {
				Self::from(1)
			});
		}
		
		//	|base| >= 2, so the result has more bits than the exponent
		if !exp.within::<u64>() {
			return Err(BigIntError::Overflow);
		}
		let e = exp.to_int::<u64>();
		if e >= MAX_BITS {
			return Err(BigIntError::Overflow);
		}
		
		//	Left-to-right square and multiply
		let mut result = Self::from(1);
		for i in (0..64 - e.leading_zeros()).rev() {
			result = result.try_mul(&result)?;
			if (e >> i) & 1 == 1 {
				result = result.try_mul(base)?;
			}
		}
		Ok(result)
	}
	
	//		set_bit																
	/// Sets bit `index`, acting as if the integer were non-negative but
	/// preserving its original sign.
	///
	/// The magnitude grows as needed to contain the bit.
	///
	/// # Parameters
	///
	/// * `index` - The zero-based index of the bit to set, where `0` is the
	///             least significant bit.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) if the bit index lies
	/// beyond the maximum representable bit length, or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the magnitude cannot
	/// grow; the integer is unchanged on failure.
	///
	pub fn set_bit(&mut self, index: BitCount) -> Result<(), BigIntError> {
		let digit_idx = index / BitCount::from(DIGIT_BITS);
		let bit       = (1 as Digit) << ((index % BitCount::from(DIGIT_BITS)) as u32);
		
		if digit_idx < self.size() as BitCount {
			self.vec[digit_idx as usize] |= bit;
		} else {
			if digit_idx >= MAX_DIGITS as BitCount {
				return Err(BigIntError::Overflow);
			}
			self.vec.resize(digit_idx as usize + 1)?;
			self.vec[digit_idx as usize] = bit;
		}
		Ok(())
	}
	
	//		sign																
	/// Returns the sign of the integer: `-1` for negative, `0` for zero,
	/// and `1` for positive.
	#[must_use]
	pub fn sign(&self) -> i32 {
		if self.size() == 0 {
			0
		} else if self.negative {
			-1
		} else {
			1
		}
	}
	
	//		size																
	/// Returns the number of limbs used by the magnitude. The integer is
	/// zero if and only if this is zero.
	#[must_use]
	pub fn size(&self) -> usize {
		self.vec.size()
	}
	
	//		swap																
	/// Swaps the contents of this integer with another.
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other);
	}
	
	//		test_bit															
	/// Tests bit `index`, acting as if the integer were non-negative.
	///
	/// Indices beyond the magnitude are reported as `false`.
	///
	/// # Parameters
	///
	/// * `index` - The zero-based index of the bit to test, where `0` is the
	///             least significant bit.
	///
	#[must_use]
	pub fn test_bit(&self, index: BitCount) -> bool {
		let digit_idx = index / BitCount::from(DIGIT_BITS);
		if digit_idx >= self.size() as BitCount {
			return false;
		}
		(self.vec[digit_idx as usize] >> ((index % BitCount::from(DIGIT_BITS)) as u32)) & 1 == 1
	}
	
	//		to_f64																
	/// Converts the integer to a double.
	///
	/// The limbs are streamed most significant first, so the result is the
	/// correctly-rounded double nearest the exact value. Values beyond the
	/// finite range of [`f64`] overflow silently to infinity, matching the
	/// IEEE-754 semantics of `f64` arithmetic.
	///
	#[must_use]
	#[expect(clippy::cast_precision_loss, reason = "Rounding is the contract here")]
	pub fn to_f64(&self) -> f64 {
		let mut result = 0.0_f64;
		for i in (0..self.size()).rev() {
			result = result * Self::BASE_DBL + self.vec[i] as f64;
		}
		if self.negative { -result } else { result }
	}
	
	//		to_int																
	/// Converts the integer to a built-in integer type, wrapping.
	///
	/// The result is the unique value of `T` congruent to this integer
	/// modulo `2^{bits(T)}`: the low limbs are packed into the target width
	/// and the sign is applied by two's-complement negation. Use
	/// [`within()`](Int::within) or [`TryFrom`] when wrapping is not wanted.
	///
	#[must_use]
	pub fn to_int<T: PrimInt>(&self) -> T {
		let n_limbs = self.size().min((128 / DIGIT_BITS) as usize);
		let mut low = 0_u128;
		for i in (0..n_limbs).rev() {
			low = (low << DIGIT_BITS) | u128::from(self.vec[i]);
		}
		T::from_parts(self.negative, low)
	}
	
	//		to_string_radix														
	/// Renders the integer as a string in the given base.
	///
	/// Zero renders as `"0"`; negative values gain a leading `-`. Digits
	/// beyond 9 use the lower-case letters `a`-`z`. The conversion divides a
	/// working copy of the magnitude by the largest power of the base that
	/// fits in one limb, unpacking each single-limb remainder into a whole
	/// batch of output digits at a time.
	///
	/// # Parameters
	///
	/// * `base` - The base to render in, from 2 to 36 inclusive.
	///
	/// # Errors
	///
	/// Returns [`InvalidArgument`](BigIntError::InvalidArgument) if the base
	/// is outside `2..=36`, and [`Overflow`](BigIntError::Overflow) if the
	/// length of the output string cannot be estimated within the host's
	/// size type.
	///
	pub fn to_string_radix(&self, base: u32) -> Result<String, BigIntError> {
		if !(2..=36).contains(&base) {
			return Err(BigIntError::InvalidArgument);
		}
		if self.size() == 0 {
			return Ok(String::from("0"));
		}
		
		let estimate            = self.base_length(base)?;
		let mut buffer: Vec<u8> = Vec::new();
		buffer.try_reserve(estimate + 1).map_err(|_err| BigIntError::AllocFailure)?;
		
		let (max_batch, batch_pow) = Self::batch_info(base);
		let mut copy               = self.abs();
		
		while copy.size() != 0 {
			let mut remainder = copy.idiv_pow(batch_pow);
			if copy.size() == 0 {
				//	Highest-order batch: no internal zero padding
				while remainder != 0 {
					buffer.push(DIGIT_CHARS[(remainder % base as Digit) as usize]);
					remainder /= base as Digit;
				}
			} else {
				for _ in 0..max_batch {
					buffer.push(DIGIT_CHARS[(remainder % base as Digit) as usize]);
					remainder /= base as Digit;
				}
			}
		}
		
		if self.negative {
			buffer.push(b'-');
		}
		buffer.reverse();
		Ok(buffer.into_iter().map(char::from).collect())
	}
	
	//		try_add																
	/// Adds another integer to this one, reporting failure as an error.
	///
	/// # Parameters
	///
	/// * `other` - The value to add.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) if the result would
	/// exceed the maximum representable size, or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the allocator refuses.
	/// The operands are unchanged on failure.
	///
	pub fn try_add(&self, other: &Self) -> Result<Self, BigIntError> {
		if self.negative == other.negative {
			//	Same signs: |x| + |y|, keeping the shared sign
			let mut result  = Self::add_abs(self, other)?;
			result.negative = self.negative && result.size() > 0;
			Ok(result)
		} else if self.negative {
			//	x < 0, y >= 0 ==> x + y = |y| - |x|
			Self::sub_abs(other, self)
		} else {
			//	x >= 0, y < 0 ==> x + y = |x| - |y|
			Self::sub_abs(self, other)
		}
	}
	
	//		try_bitand															
	/// Computes the bitwise AND of this integer and another, behaving as if
	/// both were encoded in infinite-precision two's complement.
	///
	/// # Parameters
	///
	/// * `other` - The value to combine with.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the result store
	/// cannot be obtained. The operands are unchanged on failure.
	///
	pub fn try_bitand(&self, other: &Self) -> Result<Self, BigIntError> {
		Self::bitwise_operation(self, other, BitwiseOp::And)
	}
	
	//		try_bitor															
	/// Computes the bitwise inclusive OR of this integer and another,
	/// behaving as if both were encoded in infinite-precision two's
	/// complement.
	///
	/// # Parameters
	///
	/// * `other` - The value to combine with.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the result store
	/// cannot be obtained. The operands are unchanged on failure.
	///
	pub fn try_bitor(&self, other: &Self) -> Result<Self, BigIntError> {
		Self::bitwise_operation(self, other, BitwiseOp::Or)
	}
	
	//		try_bitxor															
	/// Computes the bitwise exclusive OR of this integer and another,
	/// behaving as if both were encoded in infinite-precision two's
	/// complement.
	///
	/// # Parameters
	///
	/// * `other` - The value to combine with.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the result store
	/// cannot be obtained. The operands are unchanged on failure.
	///
	pub fn try_bitxor(&self, other: &Self) -> Result<Self, BigIntError> {
		Self::bitwise_operation(self, other, BitwiseOp::Xor)
	}
	
	//		try_div																
	/// Divides this integer by another, truncating toward zero.
	///
	/// # Parameters
	///
	/// * `other` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`DivisionByZero`](BigIntError::DivisionByZero) if the
	/// divisor is zero. The operands are unchanged on failure.
	///
	pub fn try_div(&self, other: &Self) -> Result<Self, BigIntError> {
		self.try_divrem(other).map(|(quotient, _remainder)| quotient)
	}
	
	//		try_divrem															
	/// Divides this integer by another, returning the truncated quotient
	/// and the remainder in one pass.
	///
	/// The results satisfy `quotient * other + remainder == self`, with
	/// `|remainder| < |other|` and the remainder zero or taking the sign of
	/// the dividend.
	///
	/// Division dispatches on the divisor: a single-limb divisor runs the
	/// short division recommended by Knuth for that case, and anything
	/// larger runs Algorithm D.
	///
	/// # Parameters
	///
	/// * `other` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`DivisionByZero`](BigIntError::DivisionByZero) if the
	/// divisor is zero. The operands are unchanged on failure.
	///
	pub fn try_divrem(&self, other: &Self) -> Result<(Self, Self), BigIntError> {
		if other.size() == 0 {
			return Err(BigIntError::DivisionByZero);
		}
		
		let size_n = self.size();
		let size_d = other.size();
		
		//	|N| < |D| ==> quotient is 0 and remainder is N
		if size_n < size_d || (size_n == size_d && Self::cmp_abs(self, other) == Ordering::Less) {
			return Ok((Self::new(), self.clone()));
		}
		
		//	TRUE: size_n >= size_d > 0
		let size_q       = size_n - size_d + 1;
		let mut quotient = Self::new();
		quotient.vec.reserve(size_q)?;
		quotient.vec.resize_unchecked(size_q);
		let mut remainder = Self::new();
		remainder.vec.reserve(size_d)?;
		remainder.vec.resize_unchecked(size_d);
		
		if size_d == 1 {
			Self::div_algo_single(&mut quotient, &mut remainder, self, other);
		} else {
			Self::div_algo_knuth(&mut quotient, &mut remainder, self, other)?;
		}
		
		quotient.negative  = quotient.size() > 0 && (self.negative != other.negative);
		remainder.negative = remainder.size() > 0 && self.negative;
		Ok((quotient, remainder))
	}
	
	//		try_mul																
	/// Multiplies this integer by another, reporting failure as an error.
	///
	/// # Parameters
	///
	/// * `other` - The value to multiply by.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) if the result would
	/// exceed the maximum representable size, or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the allocator refuses.
	/// The operands are unchanged on failure.
	///
	pub fn try_mul(&self, other: &Self) -> Result<Self, BigIntError> {
		if self.size() == 0 || other.size() == 0 {
			return Ok(Self::new());
		}
		
		let m           = self.size();
		let n           = other.size();
		let result_size = m.checked_add(n).ok_or(BigIntError::Overflow)?;
		
		let mut vec = DigitVector::new();
		vec.reserve(result_size)?;
		vec.resize_unchecked(result_size);
		
		//	Zero the low m limbs; every other limb is written before read
		for i in 0..m {
			vec[i] = 0;
		}
		
		for j in 0..n {
			let mut k = 0 as Digit;
			for i in 0..m {
				//	A two-limb multiply-add never overflows 2W bits, because
				//	(B - 1)^2 + 2(B - 1) = B^2 - 1
				let t = DDigit::from(self.vec[i]) * DDigit::from(other.vec[j])
					+ DDigit::from(vec[i + j])
					+ DDigit::from(k);
				k          = (t >> DIGIT_BITS) as Digit;
				vec[i + j] = t as Digit;
			}
			vec[j + m] = k;
		}
		
		let mut result = Self {
			negative: self.negative != other.negative,
			vec,
		};
		result.trim();
		Ok(result)
	}
	
	//		try_rem																
	/// Computes the remainder of dividing this integer by another.
	///
	/// The remainder is zero or takes the sign of the dividend, and its
	/// magnitude is strictly less than the divisor's.
	///
	/// # Parameters
	///
	/// * `other` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`DivisionByZero`](BigIntError::DivisionByZero) if the
	/// divisor is zero. The operands are unchanged on failure.
	///
	pub fn try_rem(&self, other: &Self) -> Result<Self, BigIntError> {
		self.try_divrem(other).map(|(_quotient, remainder)| remainder)
	}
	
	//		try_shl																
	/// Shifts the integer left by a number of bits, equivalent to
	/// multiplying by `2^shift`.
	///
	/// # Parameters
	///
	/// * `shift` - The number of bit positions to shift by.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) if the result would
	/// exceed the maximum representable size, or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the allocator refuses.
	/// The operand is unchanged on failure.
	///
	pub fn try_shl(&self, shift: BitCount) -> Result<Self, BigIntError> {
		if self.size() == 0 {
			return Ok(Self::new());
		}
		if shift == 0 {
			return Ok(self.clone());
		}
		
		let digit_shift_big = shift / BitCount::from(DIGIT_BITS);
		if digit_shift_big >= MAX_DIGITS as BitCount {
			return Err(BigIntError::Overflow);
		}
		let digit_shift = digit_shift_big as usize;
		let bit_shift   = (shift % BitCount::from(DIGIT_BITS)) as u32;
		
		let result_size = self.size()
			.checked_add(digit_shift + usize::from(bit_shift != 0))
			.ok_or(BigIntError::Overflow)?;
		
		let mut vec = DigitVector::new();
		vec.reserve(result_size)?;
		vec.resize_unchecked(result_size);
		
		//	Zero-fill the vacated limbs
		let mut i = 0;
		for _ in 0..digit_shift {
			vec[i] = 0;
			i += 1;
		}
		
		let compl_bit_shift = DIGIT_BITS - bit_shift;
		let mut carry       = 0 as Digit;
		for j in 0..self.size() {
			let current = self.vec[j];
			vec[i]      = (current << bit_shift) | carry;
			carry       = if bit_shift != 0 { current >> compl_bit_shift } else { 0 };
			i += 1;
		}
		if bit_shift != 0 {
			vec[i] = carry;
		}
		
		let mut result = Self {
			negative: self.negative,
			vec,
		};
		result.trim();
		Ok(result)
	}
	
	//		try_shr																
	/// Shifts the integer right by a number of bits, equivalent to dividing
	/// by `2^shift` and rounding toward negative infinity.
	///
	/// This is an arithmetic shift with sign extension, so `-1` shifted
	/// right by any amount remains `-1`.
	///
	/// # Parameters
	///
	/// * `shift` - The number of bit positions to shift by.
	///
	/// # Errors
	///
	/// Returns [`AllocFailure`](BigIntError::AllocFailure) if the result
	/// store cannot be allocated. The operand is unchanged on failure.
	///
	pub fn try_shr(&self, shift: BitCount) -> Result<Self, BigIntError> {
		let digit_shift_big = shift / BitCount::from(DIGIT_BITS);
		let bit_shift       = (shift % BitCount::from(DIGIT_BITS)) as u32;
		
		//	Shifting the whole magnitude away leaves the sign extension digit
		if self.size() as BitCount <= digit_shift_big {
			return Ok(if self.negative { Self::from(-1) } else { Self::new() });
		}
		
		let digit_shift = digit_shift_big as usize;
		let result_size = self.size() - digit_shift;
		let mut vec     = DigitVector::new();
		vec.reserve(result_size)?;
		vec.resize_unchecked(result_size);
		
		if bit_shift == 0 {
			for i in 0..result_size {
				vec[i] = self.vec[i + digit_shift];
			}
		} else {
			let compl_bit_shift = DIGIT_BITS - bit_shift;
			for i in 0..result_size {
				let k  = digit_shift + i;
				vec[i] = self.vec[k] >> bit_shift;
				if k + 1 < self.size() {
					vec[i] |= self.vec[k + 1] << compl_bit_shift;
				}
			}
		}
		
		let mut result = Self {
			negative: self.negative,
			vec,
		};
		result.trim();
		
		//	At this point the result is the truncation; adjust to the floor
		//	for negative values if any discarded bit was set
		if self.negative {
			let mut subtract_one = false;
			if bit_shift > 0 {
				let mask = ((1 as Digit) << bit_shift) - 1;
				if self.vec[digit_shift] & mask != 0 {
					subtract_one = true;
				}
			}
			if !subtract_one && digit_shift > 0 {
				for i in 0..digit_shift {
					if self.vec[i] != 0 {
						subtract_one = true;
						break;
					}
				}
			}
			if subtract_one {
				result.decrement()?;
			}
		}
		Ok(result)
	}
	
	//		try_sub																
	/// Subtracts another integer from this one, reporting failure as an
	/// error.
	///
	/// # Parameters
	///
	/// * `other` - The value to subtract.
	///
	/// # Errors
	///
	/// Returns [`Overflow`](BigIntError::Overflow) if the result would
	/// exceed the maximum representable size, or
	/// [`AllocFailure`](BigIntError::AllocFailure) if the allocator refuses.
	/// The operands are unchanged on failure.
	///
	pub fn try_sub(&self, other: &Self) -> Result<Self, BigIntError> {
		if self.negative != other.negative {
			//	Differing signs: |x| + |y|, keeping the sign of x
			let mut result  = Self::add_abs(self, other)?;
			result.negative = self.negative && result.size() > 0;
			Ok(result)
		} else if self.negative {
			//	x < 0, y < 0 ==> x - y = |y| - |x|
			Self::sub_abs(other, self)
		} else {
			//	x >= 0, y >= 0 ==> x - y = |x| - |y|
			Self::sub_abs(self, other)
		}
	}
	
	//		within																
	/// Tests whether the exact value of the integer lies within the range of
	/// a built-in integer type.
	#[must_use]
	pub fn within<T: PrimInt>(&self) -> bool {
		if self.size() == 0 {
			return true;
		}
		let bit_len = self.bit_length();
		if T::SIGNED {
			if self.negative {
				//	Fits iff |x| <= 2^(BITS - 1): either the magnitude has
				//	fewer bits, or it is exactly that power of two
				bit_len <= BitCount::from(T::BITS - 1)
					|| (bit_len == BitCount::from(T::BITS)
						&& self.vec.iter().map(|digit| digit.count_ones()).sum::<u32>() == 1)
			} else {
				bit_len <= BitCount::from(T::BITS - 1)
			}
		} else {
			!self.negative && bit_len <= BitCount::from(T::BITS)
		}
	}
	
	//		Private methods														
	
	//		add_abs																
	/// Computes `|x| + |y|` by Knuth Algorithm A: limb by limb with a carry
	/// bit, propagating the final carry into a new high limb.
	fn add_abs(x: &Self, y: &Self) -> Result<Self, BigIntError> {
		//	Algorithm assumes x.size() >= y.size()
		let (large, small) = if x.size() >= y.size() { (x, y) } else { (y, x) };
		
		let mut vec = DigitVector::new();
		vec.reserve(large.size() + 1)?;
		vec.resize_unchecked(large.size() + 1);
		
		let mut carry = false;
		let mut i     = 0;
		while i < small.size() {
			vec[i] = uints::uaddc(large.vec[i], small.vec[i], &mut carry);
			i += 1;
		}
		while i < large.size() {
			let temp = large.vec[i].wrapping_add(Digit::from(carry));
			carry    = temp < Digit::from(carry);
			vec[i]   = temp;
			i += 1;
		}
		vec[i] = Digit::from(carry);
		
		let mut result = Self {
			negative: false,
			vec,
		};
		result.trim();
		Ok(result)
	}
	
	//		base_length															
	/// Estimates the number of characters needed to render the magnitude in
	/// the given base, as `floor(bitlen * log(2) / log(base)) + 1`.
	#[expect(clippy::cast_precision_loss,     reason = "Guarded to at most 2^53 - 1")]
	#[expect(clippy::cast_possible_truncation, reason = "Bounded below the size type's maximum")]
	#[expect(clippy::cast_sign_loss,           reason = "At least 1 by construction")]
	fn base_length(&self, base: u32) -> Result<usize, BigIntError> {
		let bit_len = self.bit_length();
		if bit_len > Self::DBL_MAX_INT {
			return Err(BigIntError::Overflow);
		}
		let length = (bit_len as f64 * (core::f64::consts::LN_2 / f64::from(base).ln())).floor() + 1.0;
		if length > (usize::MAX - 2) as f64 {
			return Err(BigIntError::Overflow);
		}
		Ok(length as usize)
	}
	
	//		batch_info															
	/// Returns the largest exponent `e` such that `base^e` fits in a single
	/// limb, together with `base^e` itself. Used to batch string digits.
	fn batch_info(base: u32) -> (usize, Digit) {
		let mut exponent = 0_usize;
		let mut power    = 1 as Digit;
		while power <= DIGIT_MAX / base as Digit {
			power    *= base as Digit;
			exponent += 1;
		}
		(exponent, power)
	}
	
	//		bitwise_operation													
	/// Combines two integers with a bitwise operation, behaving as if both
	/// were encoded in infinite-precision two's complement.
	///
	/// Negative operands are materialised as two's-complement limb
	/// sequences on entry; beyond their length they extend with all-ones
	/// (negative) or all-zeros (non-negative). A negative result is
	/// re-complemented back to sign-magnitude form on exit.
	///
	fn bitwise_operation(x: &Self, y: &Self, op: BitwiseOp) -> Result<Self, BigIntError> {
		let mut result_size = x.size().max(y.size());
		let result_negative = match op {
			BitwiseOp::And => x.negative && y.negative,
			BitwiseOp::Or  => x.negative || y.negative,
			BitwiseOp::Xor => {
				//	One extra limb so the sign-extension bit is captured
				result_size += 1;
				x.negative != y.negative
			},
		};
		
		let lhs_complement = if x.negative { Some(Self::to_twos_complement(&x.vec)?) } else { None };
		let rhs_complement = if y.negative { Some(Self::to_twos_complement(&y.vec)?) } else { None };
		let lhs_digits     = lhs_complement.as_ref().unwrap_or(&x.vec);
		let rhs_digits     = rhs_complement.as_ref().unwrap_or(&y.vec);
		
		let mut vec = DigitVector::new();
		vec.reserve(result_size)?;
		vec.resize_unchecked(result_size);
		
		for i in 0..result_size {
			let lhs = if i < lhs_digits.size() {
				lhs_digits[i]
			} else if x.negative {
				DIGIT_MAX
			} else {
				0
			};
			let rhs = if i < rhs_digits.size() {
				rhs_digits[i]
			} else if y.negative {
				DIGIT_MAX
			} else {
				0
			};
			vec[i] = match op {
				BitwiseOp::And => lhs & rhs,
				BitwiseOp::Or  => lhs | rhs,
				BitwiseOp::Xor => lhs ^ rhs,
			};
		}
		
		let mut result = Self {
			negative: result_negative,
			vec,
		};
		if result.negative {
			Self::twos_complement_in_place(&mut result.vec);
		}
		result.trim();
		Ok(result)
	}
	
	//		cmp_abs																
	/// Compares the magnitudes of two integers: by size, then limb by limb
	/// from the most significant end.
	fn cmp_abs(x: &Self, y: &Self) -> Ordering {
		if x.size() != y.size() {
			return x.size().cmp(&y.size());
		}
		for i in (0..x.size()).rev() {
			if x.vec[i] != y.vec[i] {
				return x.vec[i].cmp(&y.vec[i]);
			}
		}
		Ordering::Equal
	}
	
	//		cmp_abs_f64															
	/// Compares the magnitude of a nonzero integer against a finite double
	/// of at least 1, exactly.
	///
	/// The double is decomposed into its 53-bit mantissa and exponent, and
	/// the integer's limbs are compared most significant first against
	/// windows of the scaled mantissa, with any fractional mantissa bits
	/// breaking a tie.
	///
	fn cmp_abs_f64(&self, other: f64) -> Ordering {
		let bits     = other.to_bits();
		#[expect(clippy::cast_possible_wrap, reason = "Biased exponent occupies 11 bits")]
		let exponent = ((bits >> 52) & 0x7FF) as i64 - 1023;
		let mantissa = (bits & ((1_u64 << 52) - 1)) | (1_u64 << 52);
		
		//	Compare bit lengths first: floor(log2(other)) is the exponent
		#[expect(clippy::cast_sign_loss, reason = "Exponent is non-negative for values of 1 or more")]
		let other_length = (exponent + 1) as BitCount;
		let self_length  = self.bit_length();
		if self_length != other_length {
			return self_length.cmp(&other_length);
		}
		
		//	Equal bit lengths: compare limb windows, most significant first
		let shift = exponent - 52;
		for i in (0..self.size()).rev() {
			let self_digit  = self.vec[i];
			let other_digit = Self::float_digit(mantissa, shift, i);
			if self_digit != other_digit {
				return self_digit.cmp(&other_digit);
			}
		}
		
		//	Integer parts are equal; any fractional bits make the double larger
		#[expect(clippy::cast_possible_truncation, reason = "Shift is in [-52, -1] in this branch")]
		#[expect(clippy::cast_sign_loss,           reason = "Negated shift is positive")]
		if shift < 0 && mantissa & ((1_u64 << (-shift) as u32) - 1) != 0 {
			return Ordering::Less;
		}
		Ordering::Equal
	}
	
	//		cmp_f64																
	/// Compares an integer against a double, consistently with IEEE-754
	/// ordering.
	///
	/// NaN compares as unordered; infinities order outside every integer;
	/// finite doubles compare exactly against the integer's value.
	///
	fn cmp_f64(&self, other: f64) -> Option<Ordering> {
		if other.is_nan() {
			return None;
		}
		if other == f64::INFINITY {
			return Some(Ordering::Less);
		}
		if other == f64::NEG_INFINITY {
			return Some(Ordering::Greater);
		}
		if self.size() == 0 {
			return 0.0_f64.partial_cmp(&other);
		}
		if self.negative && other >= 0.0 {
			return Some(Ordering::Less);
		}
		if !self.negative && other <= 0.0 {
			return Some(Ordering::Greater);
		}
		
		//	Same nonzero sign: compare magnitudes
		let magnitude = other.abs();
		let ordering  = if magnitude < 1.0 {
			//	A nonzero integer's magnitude is at least 1
			Ordering::Greater
		} else {
			self.cmp_abs_f64(magnitude)
		};
		Some(if self.negative { ordering.reverse() } else { ordering })
	}
	
	//		cmp_int																
	/// Compares an integer against a built-in integer, with no allocation.
	///
	/// The primitive is normalised into a sign and unsigned magnitude, the
	/// number of limbs that magnitude occupies is counted, and the same
	/// three-stage comparison as for two [`Int`]s is applied.
	///
	fn cmp_int<T: PrimInt>(&self, other: T) -> Ordering {
		let (other_negative, other_magnitude) = other.split();
		
		if other_magnitude == 0 {
			return if self.size() == 0 {
				Ordering::Equal
			} else if self.negative {
				Ordering::Less
			} else {
				Ordering::Greater
			};
		}
		if self.negative && !other_negative {
			return Ordering::Less;
		}
		if !self.negative && other_negative {
			return Ordering::Greater;
		}
		
		//	Count the limbs the primitive's magnitude occupies
		let mut n_digits  = 0_usize;
		let mut remaining = other_magnitude;
		while remaining != 0 {
			remaining >>= DIGIT_BITS;
			n_digits += 1;
		}
		
		let ordering = if self.size() != n_digits {
			self.size().cmp(&n_digits)
		} else {
			let mut found = Ordering::Equal;
			for i in (0..n_digits).rev() {
				let self_digit  = self.vec[i];
				#[expect(clippy::cast_possible_truncation, reason = "Truncation extracts the limb")]
				let other_digit = (other_magnitude >> (DIGIT_BITS * i as u32)) as Digit;
				if self_digit != other_digit {
					found = self_digit.cmp(&other_digit);
					break;
				}
			}
			found
		};
		if self.negative { ordering.reverse() } else { ordering }
	}
	
	//		cmp_values															
	/// Compares two integers: by sign, then by magnitude, with the
	/// magnitude ordering reversed for two negatives.
	fn cmp_values(x: &Self, y: &Self) -> Ordering {
		if !x.negative && y.negative {
			Ordering::Greater
		} else if x.negative && !y.negative {
			Ordering::Less
		} else if x.negative && y.negative {
			Self::cmp_abs(x, y).reverse()
		} else {
			Self::cmp_abs(x, y)
		}
	}
	
	//		decrement_abs														
	/// Subtracts one from the magnitude in place, borrowing limb by limb.
	/// Decrementing a zero magnitude yields one with the sign set negative.
	fn decrement_abs(&mut self) -> Result<(), BigIntError> {
		if self.size() == 0 {
			self.vec.reserve(1)?;
			self.vec.resize_unchecked(1);
			self.vec[0]   = 1;
			self.negative = true;
			return Ok(());
		}
		
		let mut i      = 0;
		let mut borrow = true;
		while borrow && i < self.size() {
			if self.vec[i] == 0 {
				//	Borrow from the next more significant limb
				self.vec[i] = DIGIT_MAX;
			} else {
				self.vec[i] -= 1;
				borrow = false;
			}
			i += 1;
		}
		
		self.trim();
		Ok(())
	}
	
	//		div_algo_knuth														
	/// Divides multi-limb magnitudes by Knuth Algorithm D, with the
	/// corrections of Exercise 37.
	///
	/// The divisor must have at least two limbs and the dividend at least as
	/// many as the divisor. `quotient` and `remainder` must already be sized
	/// to receive the results.
	///
	fn div_algo_knuth(
		quotient:  &mut Self,
		remainder: &mut Self,
		u:         &Self,
		v:         &Self,
	) -> Result<(), BigIntError> {
		const B_HALF: Digit = 1 << (DIGIT_BITS - 1);
		
		let m = u.size();
		let n = v.size();
		
		//	(1) Normalise: find e such that the divisor's top limb, shifted
		//	left e bits, is at least half the base
		let v_msd  = v.vec[n - 1];
		let mut e  = 0_u32;
		while (v_msd << e) < B_HALF {
			e += 1;
		}
		let compl_e = DIGIT_BITS - e;
		
		//	Both operands shifted left by e bits; the dividend gains at most
		//	one high limb, which may be zero. Casting through DDigit makes
		//	the complementary shift safe when e is zero.
		let mut u_norm = DigitVector::new();
		u_norm.reserve(m + 1)?;
		u_norm.resize_unchecked(m + 1);
		let mut v_norm = DigitVector::new();
		v_norm.reserve(n)?;
		v_norm.resize_unchecked(n);
		
		u_norm[0] = u.vec[0] << e;
		for i in 1..m {
			u_norm[i] = (u.vec[i] << e) | (DDigit::from(u.vec[i - 1]) >> compl_e) as Digit;
		}
		u_norm[m] = (DDigit::from(u.vec[m - 1]) >> compl_e) as Digit;
		
		v_norm[0] = v.vec[0] << e;
		for i in 1..n {
			v_norm[i] = (v.vec[i] << e) | (DDigit::from(v.vec[i - 1]) >> compl_e) as Digit;
		}
		
		let base = (1 as DDigit) << DIGIT_BITS;
		let vp   = v_norm[n - 1];
		let vpp  = v_norm[n - 2];
		
		//	(2) Loop on j from the high end of the quotient
		for j in (0..=(m - n)).rev() {
			//	(3) Estimate q_hat from the top two dividend limbs
			let tmp       = (DDigit::from(u_norm[j + n]) << DIGIT_BITS) | DDigit::from(u_norm[j + n - 1]);
			let mut q_hat = tmp / DDigit::from(vp);
			let mut r_hat = tmp % DDigit::from(vp);
			
			while q_hat == base || q_hat * DDigit::from(vpp) > (r_hat << DIGIT_BITS) + DDigit::from(u_norm[j + n - 2]) {
				q_hat -= 1;
				r_hat += DDigit::from(vp);
				if r_hat >= base {
					break;
				}
			}
			
			//	(4) Multiply and subtract, with a signed running borrow
			let mut borrow = 0 as SDDigit;
			for i in 0..n {
				let product   = q_hat * DDigit::from(v_norm[i]);
				let stmp      = u_norm[j + i] as SDDigit - (product as Digit) as SDDigit - borrow;
				u_norm[j + i] = stmp as Digit;
				borrow        = (product >> DIGIT_BITS) as SDDigit - (stmp >> DIGIT_BITS);
			}
			let needs_add_back = (u_norm[j + n] as SDDigit) < borrow;
			u_norm[j + n]      = (u_norm[j + n] as SDDigit).wrapping_sub(borrow) as Digit;
			
			//	(5) Set the quotient limb
			quotient.vec[j] = q_hat as Digit;
			
			if needs_add_back {
				//	(6) The subtraction went negative: decrement the quotient
				//	limb and add the divisor back in. The carry out of the top
				//	must cancel the earlier borrow.
				quotient.vec[j] = quotient.vec[j].wrapping_sub(1);
				
				let mut carry = 0 as DDigit;
				for i in 0..n {
					let tmp2      = DDigit::from(u_norm[j + i]) + DDigit::from(v_norm[i]) + carry;
					u_norm[j + i] = tmp2 as Digit;
					carry         = tmp2 >> DIGIT_BITS;
				}
				u_norm[j + n] = u_norm[j + n].wrapping_add(carry as Digit);
				debug_assert!(u_norm[j + n] == 0, "Add-back carry must cancel the borrow");
			}
		}
		
		//	(8) Denormalise the remainder: the low n limbs, shifted right e
		let last = n - 1;
		remainder.vec[last] = u_norm[last] >> e;
		for i in (0..last).rev() {
			remainder.vec[i] = ((DDigit::from(u_norm[i + 1]) << compl_e) as Digit) | (u_norm[i] >> e);
		}
		
		quotient.trim();
		remainder.trim();
		Ok(())
	}
	
	//		div_algo_single														
	/// Divides a magnitude by a single-limb divisor, maintaining a two-limb
	/// running remainder from the most significant end.
	///
	/// `quotient` must already be sized to the dividend's limb count and
	/// `remainder` to one limb.
	///
	fn div_algo_single(quotient: &mut Self, remainder: &mut Self, u: &Self, v: &Self) {
		let divisor = DDigit::from(v.vec[0]);
		let mut rem = 0 as DDigit;
		
		for j in (0..u.size()).rev() {
			let temp        = (rem << DIGIT_BITS) | DDigit::from(u.vec[j]);
			quotient.vec[j] = (temp / divisor) as Digit;
			rem             = temp % divisor;
		}
		remainder.vec[0] = rem as Digit;
		
		quotient.trim();
		remainder.trim();
	}
	
	//		float_digit															
	/// Extracts limb `index` of the integer part of `mantissa * 2^shift`,
	/// where the mantissa is the 53-bit significand of a double.
	#[expect(clippy::cast_possible_truncation, reason = "Truncation extracts the limb")]
	#[expect(clippy::cast_possible_wrap,       reason = "Limb indices are far below the wrap point")]
	#[expect(clippy::cast_sign_loss,           reason = "Sign is checked on each branch")]
	fn float_digit(mantissa: u64, shift: i64, index: usize) -> Digit {
		//	Position within the mantissa of the limb's least significant bit
		let lo = index as i64 * i64::from(DIGIT_BITS) - shift;
		if lo >= 64 || -lo >= i64::from(DIGIT_BITS) {
			0
		} else if lo >= 0 {
			(mantissa >> lo as u32) as Digit
		} else {
			(u128::from(mantissa) << (-lo) as u32) as Digit
		}
	}
	
	//		from_magnitude														
	/// Builds an integer from a sign flag and an unsigned magnitude,
	/// decomposing the magnitude into limbs least significant first.
	fn from_magnitude(negative: bool, magnitude: u128) -> Self {
		let mut digits: Vec<Digit> = Vec::with_capacity((128 / DIGIT_BITS) as usize);
		let mut remaining          = magnitude;
		while remaining != 0 {
			#[expect(clippy::cast_possible_truncation, reason = "Truncation extracts the limb")]
			digits.push(remaining as Digit);
			remaining >>= DIGIT_BITS;
		}
		Self {
			negative: negative && !digits.is_empty(),
			vec:      DigitVector::from(digits),
		}
	}
	
	//		from_prim															
	/// Builds an integer from any built-in integer, losslessly.
	fn from_prim<T: PrimInt>(value: T) -> Self {
		let (negative, magnitude) = value.split();
		Self::from_magnitude(negative, magnitude)
	}
	
	//		idiv_pow															
	/// Divides the magnitude in place by a single-limb divisor, returning
	/// the remainder. Used by the string formatter with a divisor of
	/// `base^E`, so each call peels one whole batch of output digits.
	fn idiv_pow(&mut self, divisor: Digit) -> Digit {
		let divisor = DDigit::from(divisor);
		let mut rem = 0 as DDigit;
		
		for i in (0..self.size()).rev() {
			let current = (rem << DIGIT_BITS) | DDigit::from(self.vec[i]);
			self.vec[i] = (current / divisor) as Digit;
			rem         = current % divisor;
		}
		
		self.trim();
		rem as Digit
	}
	
	//		imul1add1															
	/// Multiplies the magnitude in place by a single limb and adds a limb:
	/// `self := self * v + k`. May grow the magnitude by one limb.
	///
	/// Algorithm M, recognising that `j` is always zero and the target limb
	/// is the one being replaced, so the whole inner product collapses into
	/// a single carry-propagating sweep. Callers operate on freshly built
	/// scratch values, as the magnitude is not restored if the final push
	/// fails.
	///
	fn imul1add1(&mut self, v: Digit, k: Digit) -> Result<(), BigIntError> {
		let mut carry = k;
		for i in 0..self.size() {
			let t       = DDigit::from(self.vec[i]) * DDigit::from(v) + DDigit::from(carry);
			carry       = (t >> DIGIT_BITS) as Digit;
			self.vec[i] = t as Digit;
		}
		if carry != 0 {
			self.vec.push(carry)?;
		}
		Ok(())
	}
	
	//		increment_abs														
	/// Adds one to the magnitude in place, carrying limb by limb and
	/// growing by one limb if the carry runs off the top.
	fn increment_abs(&mut self) -> Result<(), BigIntError> {
		//	Reserve ahead of any mutation so failure leaves the value intact
		if self.size() == 0 || self.vec[self.size() - 1] == DIGIT_MAX {
			self.vec.reserve(self.size() + 1)?;
		}
		
		if self.size() == 0 {
			self.vec.resize_unchecked(1);
			self.vec[0] = 1;
			return Ok(());
		}
		
		let mut i     = 0;
		let mut carry = true;
		while carry && i < self.size() {
			if self.vec[i] == DIGIT_MAX {
				self.vec[i] = 0;
			} else {
				self.vec[i] += 1;
				carry = false;
			}
			i += 1;
		}
		if carry {
			self.vec.push(1)?;
		}
		Ok(())
	}
	
	//		sub_abs																
	/// Computes `||x| - |y||`, setting the result negative when `|y|` is the
	/// larger magnitude.
	fn sub_abs(x: &Self, y: &Self) -> Result<Self, BigIntError> {
		if x.size() == y.size() {
			match Self::cmp_abs(x, y) {
				Ordering::Equal   => Ok(Self::new()),
				Ordering::Greater => Self::sub_abs_gt(x, y),
				Ordering::Less    => {
					let mut result  = Self::sub_abs_gt(y, x)?;
					result.negative = true;
					Ok(result)
				},
			}
		} else if x.size() > y.size() {
			Self::sub_abs_gt(x, y)
		} else {
			let mut result  = Self::sub_abs_gt(y, x)?;
			result.negative = true;
			Ok(result)
		}
	}
	
	//		sub_abs_gt															
	/// Computes `|x| - |y|` by Knuth Algorithm S, assuming `|x| >= |y|`:
	/// limb by limb with a borrow bit.
	fn sub_abs_gt(x: &Self, y: &Self) -> Result<Self, BigIntError> {
		debug_assert!(x.size() >= y.size(), "Minuend must have at least as many limbs");
		
		let mut vec = DigitVector::new();
		vec.reserve(x.size())?;
		vec.resize_unchecked(x.size());
		
		let mut borrow = false;
		let mut i      = 0;
		while i < y.size() {
			vec[i] = uints::usubb(x.vec[i], y.vec[i], &mut borrow);
			i += 1;
		}
		while i < x.size() {
			let temp = x.vec[i].wrapping_sub(Digit::from(borrow));
			borrow   = temp > x.vec[i];
			vec[i]   = temp;
			i += 1;
		}
		
		let mut result = Self {
			negative: false,
			vec,
		};
		result.trim();
		Ok(result)
	}
	
	//		to_twos_complement													
	/// Materialises the two's complement of a magnitude: every limb
	/// inverted, plus one with carry. A pure function of the limb sequence;
	/// the persistent representation is never two's complement.
	fn to_twos_complement(vec: &DigitVector) -> Result<DigitVector, BigIntError> {
		let mut result = DigitVector::new();
		result.reserve(vec.size())?;
		result.resize_unchecked(vec.size());
		
		let mut carry = true;
		for i in 0..vec.size() {
			let sum   = (!vec[i]).wrapping_add(Digit::from(carry));
			carry     = sum < Digit::from(carry);
			result[i] = sum;
		}
		Ok(result)
	}
	
	//		trim																
	/// Drops trailing zero limbs, and resets the sign to positive if the
	/// magnitude becomes empty. Restores the canonical form after every
	/// kernel.
	fn trim(&mut self) {
		let mut new_size = self.vec.size();
		while new_size > 0 && self.vec[new_size - 1] == 0 {
			new_size -= 1;
		}
		self.vec.resize_unchecked(new_size);
		if new_size == 0 {
			self.negative = false;
		}
	}
	
	//		twos_complement_in_place											
	/// Applies two's-complement inversion to a magnitude in place: the
	/// reverse bridging applied to negative bitwise results on exit.
	fn twos_complement_in_place(vec: &mut DigitVector) {
		let mut carry = true;
		for i in 0..vec.size() {
			let sum = (!vec[i]).wrapping_add(Digit::from(carry));
			carry   = sum < Digit::from(carry);
			vec[i]  = sum;
		}
	}
}

//󰭅		Add																		
impl Add for Int {
	type Output = Self;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(&rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		Add<&>																	
impl Add<&Self> for Int {
	type Output = Self;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: &Self) -> Self::Output {
		self.try_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		Add: &Int																
impl Add for &Int {
	type Output = Int;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign																
impl AddAssign for Int {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self += &rhs;
	}
}

//󰭅		AddAssign<&>															
impl AddAssign<&Self> for Int {
	//		add_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add_assign(&mut self, rhs: &Self) {
		let result = self.try_add(rhs).expect("Attempt to add overflowed");
		*self = result;
	}
}

//󰭅		Binary																	
impl Binary for Int {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let rendered = self.to_string_radix(2).map_err(|_err| fmt::Error)?;
		let digits   = rendered.strip_prefix('-').unwrap_or(&rendered);
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0b")?;
		}
		write!(f, "{digits}")
	}
}

//󰭅		BitAnd																	
impl BitAnd for Int {
	type Output = Self;
	
	//		bitand																
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitand(self, rhs: Self) -> Self::Output {
		self.try_bitand(&rhs).expect("Attempt to perform bitwise AND overflowed")
	}
}

//󰭅		BitAnd: &Int															
impl BitAnd for &Int {
	type Output = Int;
	
	//		bitand																
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitand(self, rhs: Self) -> Self::Output {
		self.try_bitand(rhs).expect("Attempt to perform bitwise AND overflowed")
	}
}

//󰭅		BitAndAssign															
impl BitAndAssign for Int {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: Self) {
		*self &= &rhs;
	}
}

//󰭅		BitAndAssign<&>															
impl BitAndAssign<&Self> for Int {
	//		bitand_assign														
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitand_assign(&mut self, rhs: &Self) {
		let result = self.try_bitand(rhs).expect("Attempt to perform bitwise AND overflowed");
		*self = result;
	}
}

//󰭅		BitOr																	
impl BitOr for Int {
	type Output = Self;
	
	//		bitor																
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitor(self, rhs: Self) -> Self::Output {
		self.try_bitor(&rhs).expect("Attempt to perform bitwise OR overflowed")
	}
}

//󰭅		BitOr: &Int																
impl BitOr for &Int {
	type Output = Int;
	
	//		bitor																
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitor(self, rhs: Self) -> Self::Output {
		self.try_bitor(rhs).expect("Attempt to perform bitwise OR overflowed")
	}
}

//󰭅		BitOrAssign																
impl BitOrAssign for Int {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: Self) {
		*self |= &rhs;
	}
}

//󰭅		BitOrAssign<&>															
impl BitOrAssign<&Self> for Int {
	//		bitor_assign														
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitor_assign(&mut self, rhs: &Self) {
		let result = self.try_bitor(rhs).expect("Attempt to perform bitwise OR overflowed");
		*self = result;
	}
}

//󰭅		BitXor																	
impl BitXor for Int {
	type Output = Self;
	
	//		bitxor																
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitxor(self, rhs: Self) -> Self::Output {
		self.try_bitxor(&rhs).expect("Attempt to perform bitwise XOR overflowed")
	}
}

//󰭅		BitXor: &Int															
impl BitXor for &Int {
	type Output = Int;
	
	//		bitxor																
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitxor(self, rhs: Self) -> Self::Output {
		self.try_bitxor(rhs).expect("Attempt to perform bitwise XOR overflowed")
	}
}

//󰭅		BitXorAssign															
impl BitXorAssign for Int {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: Self) {
		*self ^= &rhs;
	}
}

//󰭅		BitXorAssign<&>															
impl BitXorAssign<&Self> for Int {
	//		bitxor_assign														
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn bitxor_assign(&mut self, rhs: &Self) {
		let result = self.try_bitxor(rhs).expect("Attempt to perform bitwise XOR overflowed");
		*self = result;
	}
}

//󰭅		Debug																	
impl Debug for Int {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - Int(value)
		write!(f, "Int({self})")?;
		
		//	For alternate formatting (#), show the limbs as well
		if f.alternate() {
			write!(f, " ([")?;
			for (i, digit) in self.vec.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "{digit:#x}")?;
			}
			write!(f, "])")?;
		}
		
		Ok(())
	}
}

//󰭅		Display																	
impl Display for Int {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let rendered = self.to_string_radix(10).map_err(|_err| fmt::Error)?;
		write!(f, "{rendered}")
	}
}

//󰭅		Div																		
impl Div for Int {
	type Output = Self;
	
	//		div																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.try_div(&rhs).expect("Attempt to divide overflowed")
	}
}

//󰭅		Div: &Int																
impl Div for &Int {
	type Output = Int;
	
	//		div																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.try_div(rhs).expect("Attempt to divide overflowed")
	}
}

//󰭅		DivAssign																
impl DivAssign for Int {
	//		div_assign															
	fn div_assign(&mut self, rhs: Self) {
		*self /= &rhs;
	}
}

//󰭅		DivAssign<&>															
impl DivAssign<&Self> for Int {
	//		div_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div_assign(&mut self, rhs: &Self) {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		let result = self.try_div(rhs).expect("Attempt to divide overflowed");
		*self = result;
	}
}

//󰭅		From: i8 -> Int															
impl From<i8> for Int {
	//		from																
	fn from(v: i8) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: i16 -> Int														
impl From<i16> for Int {
	//		from																
	fn from(v: i16) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: i32 -> Int														
impl From<i32> for Int {
	//		from																
	fn from(v: i32) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: i64 -> Int														
impl From<i64> for Int {
	//		from																
	fn from(v: i64) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: i128 -> Int														
impl From<i128> for Int {
	//		from																
	fn from(v: i128) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: isize -> Int														
impl From<isize> for Int {
	//		from																
	fn from(v: isize) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: u8 -> Int															
impl From<u8> for Int {
	//		from																
	fn from(v: u8) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: u16 -> Int														
impl From<u16> for Int {
	//		from																
	fn from(v: u16) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: u32 -> Int														
impl From<u32> for Int {
	//		from																
	fn from(v: u32) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: u64 -> Int														
impl From<u64> for Int {
	//		from																
	fn from(v: u64) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: u128 -> Int														
impl From<u128> for Int {
	//		from																
	fn from(v: u128) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		From: usize -> Int														
impl From<usize> for Int {
	//		from																
	fn from(v: usize) -> Self {
		Self::from_prim(v)
	}
}

//󰭅		FromStr																	
impl FromStr for Int {
	type Err = BigIntError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_str_radix(s, 10)
	}
}

//󰭅		LowerHex																
impl LowerHex for Int {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let rendered = self.to_string_radix(16).map_err(|_err| fmt::Error)?;
		let digits   = rendered.strip_prefix('-').unwrap_or(&rendered);
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}
		write!(f, "{digits}")
	}
}

//󰭅		Mul																		
impl Mul for Int {
	type Output = Self;
	
	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.try_mul(&rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		Mul<&>																	
impl Mul<&Self> for Int {
	type Output = Self;
	
	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: &Self) -> Self::Output {
		self.try_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		Mul: &Int																
impl Mul for &Int {
	type Output = Int;
	
	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.try_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign																
impl MulAssign for Int {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self *= &rhs;
	}
}

//󰭅		MulAssign<&>															
impl MulAssign<&Self> for Int {
	//		mul_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul_assign(&mut self, rhs: &Self) {
		let result = self.try_mul(rhs).expect("Attempt to multiply overflowed");
		*self = result;
	}
}

//󰭅		Neg																		
impl Neg for Int {
	type Output = Self;
	
	//		neg																	
	fn neg(mut self) -> Self::Output {
		self.negate();
		self
	}
}

//󰭅		Neg: &Int																
impl Neg for &Int {
	type Output = Int;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		let mut result = self.clone();
		result.negate();
		result
	}
}

//󰭅		Not																		
impl Not for Int {
	type Output = Self;
	
	//		not																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn not(mut self) -> Self::Output {
		//	The complement is defined algebraically: !x == -x - 1
		self.negate();
		self.decrement().expect("Attempt to complement overflowed");
		self
	}
}

//󰭅		Not: &Int																
impl Not for &Int {
	type Output = Int;
	
	//		not																	
	fn not(self) -> Self::Output {
		!self.clone()
	}
}

//󰭅		Octal																	
impl Octal for Int {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let rendered = self.to_string_radix(8).map_err(|_err| fmt::Error)?;
		let digits   = rendered.strip_prefix('-').unwrap_or(&rendered);
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0o")?;
		}
		write!(f, "{digits}")
	}
}

//󰭅		Ord																		
impl Ord for Int {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		Self::cmp_values(self, other)
	}
}

//󰭅		PartialOrd																
impl PartialOrd for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		PartialEq: Int == i8													
impl PartialEq<i8> for Int {
	//		eq																	
	fn eq(&self, other: &i8) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == i16													
impl PartialEq<i16> for Int {
	//		eq																	
	fn eq(&self, other: &i16) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == i32													
impl PartialEq<i32> for Int {
	//		eq																	
	fn eq(&self, other: &i32) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == i64													
impl PartialEq<i64> for Int {
	//		eq																	
	fn eq(&self, other: &i64) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == i128													
impl PartialEq<i128> for Int {
	//		eq																	
	fn eq(&self, other: &i128) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == isize													
impl PartialEq<isize> for Int {
	//		eq																	
	fn eq(&self, other: &isize) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == u8													
impl PartialEq<u8> for Int {
	//		eq																	
	fn eq(&self, other: &u8) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == u16													
impl PartialEq<u16> for Int {
	//		eq																	
	fn eq(&self, other: &u16) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == u32													
impl PartialEq<u32> for Int {
	//		eq																	
	fn eq(&self, other: &u32) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == u64													
impl PartialEq<u64> for Int {
	//		eq																	
	fn eq(&self, other: &u64) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == u128													
impl PartialEq<u128> for Int {
	//		eq																	
	fn eq(&self, other: &u128) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == usize													
impl PartialEq<usize> for Int {
	//		eq																	
	fn eq(&self, other: &usize) -> bool {
		self.cmp_int(*other) == Ordering::Equal
	}
}

//󰭅		PartialEq: Int == f64													
impl PartialEq<f64> for Int {
	//		eq																	
	fn eq(&self, other: &f64) -> bool {
		self.cmp_f64(*other) == Some(Ordering::Equal)
	}
}

//󰭅		PartialOrd: Int / i8													
impl PartialOrd<i8> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &i8) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / i16													
impl PartialOrd<i16> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &i16) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / i32													
impl PartialOrd<i32> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / i64													
impl PartialOrd<i64> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / i128													
impl PartialOrd<i128> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &i128) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / isize													
impl PartialOrd<isize> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &isize) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / u8													
impl PartialOrd<u8> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &u8) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / u16													
impl PartialOrd<u16> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &u16) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / u32													
impl PartialOrd<u32> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / u64													
impl PartialOrd<u64> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / u128													
impl PartialOrd<u128> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &u128) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / usize													
impl PartialOrd<usize> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
		Some(self.cmp_int(*other))
	}
}

//󰭅		PartialOrd: Int / f64													
impl PartialOrd<f64> for Int {
	//		partial_cmp															
	fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
		self.cmp_f64(*other)
	}
}

//󰭅		Product																	
impl Product for Int {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::from(1), |acc, x| acc * x)
	}
}

//󰭅		Product<&>																
impl<'a> Product<&'a Self> for Int {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::from(1), |acc, x| acc * x)
	}
}

//󰭅		Rem																		
impl Rem for Int {
	type Output = Self;
	
	//		rem																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.try_rem(&rhs).expect("Attempt to calculate remainder overflowed")
	}
}

//󰭅		Rem: &Int																
impl Rem for &Int {
	type Output = Int;
	
	//		rem																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.try_rem(rhs).expect("Attempt to calculate remainder overflowed")
	}
}

//󰭅		RemAssign																
impl RemAssign for Int {
	//		rem_assign															
	fn rem_assign(&mut self, rhs: Self) {
		*self %= &rhs;
	}
}

//󰭅		RemAssign<&>															
impl RemAssign<&Self> for Int {
	//		rem_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem_assign(&mut self, rhs: &Self) {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		let result = self.try_rem(rhs).expect("Attempt to calculate remainder overflowed");
		*self = result;
	}
}

//󰭅		Serialize																
impl Serialize for Int {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		//	The decimal string is unambiguous at any magnitude, and round
		//	trips exactly in both human-readable and binary formats
		serializer.collect_str(self)
	}
}

//󰭅		Shl																		
impl Shl<BitCount> for Int {
	type Output = Self;
	
	//		shl																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shl(self, rhs: BitCount) -> Self::Output {
		self.try_shl(rhs).expect("Attempt to shift left overflowed")
	}
}

//󰭅		Shl: &Int																
impl Shl<BitCount> for &Int {
	type Output = Int;
	
	//		shl																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shl(self, rhs: BitCount) -> Self::Output {
		self.try_shl(rhs).expect("Attempt to shift left overflowed")
	}
}

//󰭅		ShlAssign																
impl ShlAssign<BitCount> for Int {
	//		shl_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shl_assign(&mut self, rhs: BitCount) {
		let result = self.try_shl(rhs).expect("Attempt to shift left overflowed");
		*self = result;
	}
}

//󰭅		Shr																		
impl Shr<BitCount> for Int {
	type Output = Self;
	
	//		shr																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shr(self, rhs: BitCount) -> Self::Output {
		self.try_shr(rhs).expect("Attempt to shift right overflowed")
	}
}

//󰭅		Shr: &Int																
impl Shr<BitCount> for &Int {
	type Output = Int;
	
	//		shr																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shr(self, rhs: BitCount) -> Self::Output {
		self.try_shr(rhs).expect("Attempt to shift right overflowed")
	}
}

//󰭅		ShrAssign																
impl ShrAssign<BitCount> for Int {
	//		shr_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn shr_assign(&mut self, rhs: BitCount) {
		let result = self.try_shr(rhs).expect("Attempt to shift right overflowed");
		*self = result;
	}
}

//󰭅		Sub																		
impl Sub for Int {
	type Output = Self;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(&rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		Sub<&>																	
impl Sub<&Self> for Int {
	type Output = Self;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: &Self) -> Self::Output {
		self.try_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		Sub: &Int																
impl Sub for &Int {
	type Output = Int;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign																
impl SubAssign for Int {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self -= &rhs;
	}
}

//󰭅		SubAssign<&>															
impl SubAssign<&Self> for Int {
	//		sub_assign															
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub_assign(&mut self, rhs: &Self) {
		let result = self.try_sub(rhs).expect("Attempt to subtract overflowed");
		*self = result;
	}
}

//󰭅		Sum																		
impl Sum for Int {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::new(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>																	
impl<'a> Sum<&'a Self> for Int {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::new(), |acc, x| acc + x)
	}
}

//󰭅		TryFrom: f64 -> Int														
impl TryFrom<f64> for Int {
	type Error = BigIntError;
	
	//		try_from															
	/// Converts a double to an [`Int`], truncating toward zero.
	///
	/// Every double in `(-1, 1)` truncates to zero, including the negative
	/// ones. Limbs are peeled off the most significant end by repeatedly
	/// scaling the value down by the limb base; scaling uses the exact
	/// reciprocal, as the base is a power of two.
	///
	/// # Errors
	///
	/// Returns [`FromFloat`](BigIntError::FromFloat) for NaN or infinite
	/// inputs.
	///
	#[expect(clippy::cast_possible_truncation, reason = "The value is below the base when truncated")]
	#[expect(clippy::cast_sign_loss,           reason = "Operating on the absolute value")]
	#[expect(clippy::cast_precision_loss,      reason = "Limbs reconstruct the double exactly")]
	fn try_from(d: f64) -> Result<Self, Self::Error> {
		if d.is_nan() || d.is_infinite() {
			return Err(BigIntError::FromFloat);
		}
		if d > -1.0 && d < 1.0 {
			return Ok(Self::new());
		}
		
		let negative = d < 0.0;
		let mut d    = d.abs();
		
		//	Count the limbs by scaling down until one limb remains
		let mut n_digits = 1_usize;
		while Self::BASE_DBL <= d {
			d *= Self::BASE_DBL_RECIPROCAL;
			n_digits += 1;
		}
		
		let mut vec = DigitVector::new();
		vec.reserve(n_digits)?;
		vec.resize_unchecked(n_digits);
		
		//	Peel off limbs from the most significant end
		for i in (0..n_digits).rev() {
			let limb = d as Digit;
			vec[i]   = limb;
			d        = (d - limb as f64) * Self::BASE_DBL;
		}
		
		let mut result = Self {
			negative,
			vec,
		};
		result.trim();
		Ok(result)
	}
}

//󰭅		TryFrom: &Int -> i8														
impl TryFrom<&Int> for i8 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> i16													
impl TryFrom<&Int> for i16 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> i32													
impl TryFrom<&Int> for i32 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> i64													
impl TryFrom<&Int> for i64 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> i128													
impl TryFrom<&Int> for i128 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> isize													
impl TryFrom<&Int> for isize {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> u8														
impl TryFrom<&Int> for u8 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> u16													
impl TryFrom<&Int> for u16 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> u32													
impl TryFrom<&Int> for u32 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> u64													
impl TryFrom<&Int> for u64 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> u128													
impl TryFrom<&Int> for u128 {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		TryFrom: &Int -> usize													
impl TryFrom<&Int> for usize {
	type Error = BigIntError;
	
	//		try_from															
	fn try_from(value: &Int) -> Result<Self, Self::Error> {
		value.within::<Self>().then(|| value.to_int::<Self>()).ok_or(BigIntError::Overflow)
	}
}

//󰭅		UpperHex																
impl UpperHex for Int {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut rendered = self.to_string_radix(16).map_err(|_err| fmt::Error)?;
		rendered.make_ascii_uppercase();
		let digits = rendered.strip_prefix('-').unwrap_or(&rendered);
		if self.negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}
		write!(f, "{digits}")
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for Int {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntVisitor)
		} else {
			//	Binary formats carry the decimal string
			deserializer.deserialize_str(IntVisitor)
		}
	}
}

//		IntVisitor																
/// A visitor for parsing integers from numbers or strings.
struct IntVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for IntVisitor {
	type Value = Int;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer or a string containing an integer")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Int::from(v))
	}
	
	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Int::from(v))
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Int::from(v))
	}
	
	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Int::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}


