//		Packages

use super::*;



//		Tests

mod functions {
	use super::*;
	
	//		uaddc																
	#[test]
	fn uaddc__no_carry() {
		let mut carry = false;
		assert_eq!(uaddc(1, 2, &mut carry), 3);
		assert!(!carry);
	}
	#[test]
	fn uaddc__generates_carry() {
		let mut carry = false;
		assert_eq!(uaddc(Digit::MAX, 1, &mut carry), 0);
		assert!(carry);
	}
	#[test]
	fn uaddc__consumes_and_regenerates_carry() {
		let mut carry = true;
		assert_eq!(uaddc(Digit::MAX, Digit::MAX, &mut carry), Digit::MAX);
		assert!(carry);
	}
	#[test]
	fn uaddc__consumes_carry() {
		let mut carry = true;
		assert_eq!(uaddc(1, 2, &mut carry), 4);
		assert!(!carry);
	}
	
	//		usubb																
	#[test]
	fn usubb__no_borrow() {
		let mut borrow = false;
		assert_eq!(usubb(5, 3, &mut borrow), 2);
		assert!(!borrow);
	}
	#[test]
	fn usubb__generates_borrow() {
		let mut borrow = false;
		assert_eq!(usubb(3, 5, &mut borrow), Digit::MAX - 1);
		assert!(borrow);
	}
	#[test]
	fn usubb__consumes_and_regenerates_borrow() {
		let mut borrow = true;
		assert_eq!(usubb(0, 0, &mut borrow), Digit::MAX);
		assert!(borrow);
	}
	#[test]
	fn usubb__consumes_borrow() {
		let mut borrow = true;
		assert_eq!(usubb(5, 3, &mut borrow), 1);
		assert!(!borrow);
	}
	
	//		bit_length															
	#[test]
	fn bit_length__zero() {
		assert_eq!(bit_length(0), 1);
	}
	#[test]
	fn bit_length__one() {
		assert_eq!(bit_length(1), 1);
	}
	#[test]
	fn bit_length__powers_of_two() {
		assert_eq!(bit_length(2),   2);
		assert_eq!(bit_length(4),   3);
		assert_eq!(bit_length(255), 8);
		assert_eq!(bit_length(256), 9);
	}
	#[test]
	fn bit_length__max() {
		assert_eq!(bit_length(Digit::MAX), Digit::BITS);
	}
}


