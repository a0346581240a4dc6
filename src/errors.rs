//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		BigIntError																
/// Represents all possible errors that can occur when operating on
/// [`Int`](crate::Int) values.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BigIntError {
	/// The host allocator refused a request to grow a magnitude store.
	#[error("Memory allocation failed")]
	AllocFailure,
	
	/// A divisor of zero was supplied to a division or remainder operation.
	#[error("Division by zero attempt")]
	DivisionByZero,
	
	/// A NaN or infinite double was supplied where an integer was required.
	#[error("NaN or infinity cannot be converted to an integer")]
	FromFloat,
	
	/// An argument lies outside the domain of the operation, e.g. a base
	/// outside `2..=36` or a negative exponent.
	#[error("Argument outside the permitted range")]
	InvalidArgument,
	
	/// An operation's result would require more limbs than the maximum
	/// representable size, or an intermediate count overflowed the host's
	/// size type.
	#[error("Result exceeds the maximum representable size")]
	Overflow,
	
	/// A string could not be parsed as an integer: it was empty, contained
	/// no digits, or contained an invalid character.
	#[error("Invalid string format")]
	ParseError,
}


