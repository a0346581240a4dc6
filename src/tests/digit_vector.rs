//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok};



//		Tests

mod constructors {
	use super::*;
	
	//		new																	
	#[test]
	fn new__is_empty() {
		let vec = DigitVector::new();
		assert_eq!(vec.size(),     0);
		assert_eq!(vec.capacity(), 0);
	}
	#[test]
	fn new__default_matches() {
		assert_eq!(DigitVector::new(), DigitVector::default());
	}
}

mod public_methods {
	use super::*;
	
	//		as_slice															
	#[test]
	fn as_slice__contents_in_order() {
		let vec = DigitVector::from(vec![1, 2, 3]);
		assert_eq!(vec.as_slice(), &[1, 2, 3]);
	}
	
	//		iter																
	#[test]
	fn iter__lsb_first() {
		let vec              = DigitVector::from(vec![10, 20, 30]);
		let collected: Vec<_> = vec.iter().copied().collect();
		assert_eq!(collected, vec![10, 20, 30]);
	}
	#[test]
	fn iter__msb_first_when_reversed() {
		let vec              = DigitVector::from(vec![10, 20, 30]);
		let collected: Vec<_> = vec.iter().rev().copied().collect();
		assert_eq!(collected, vec![30, 20, 10]);
	}
	
	//		push																
	#[test]
	fn push__appends() {
		let mut vec = DigitVector::new();
		assert_ok!(vec.push(7));
		assert_ok!(vec.push(8));
		assert_eq!(vec.size(),     2);
		assert_eq!(vec.as_slice(), &[7, 8]);
	}
	
	//		reserve																
	#[test]
	fn reserve__grows_capacity() {
		let mut vec = DigitVector::new();
		assert_ok!(vec.reserve(10));
		assert!(vec.capacity() >= 10);
		assert_eq!(vec.size(), 0);
	}
	#[test]
	fn reserve__beyond_maximum() {
		let mut vec = DigitVector::new();
		assert_err_eq!(vec.reserve(MAX_DIGITS + 1), BigIntError::Overflow);
	}
	#[test]
	fn reserve__noop_within_capacity() {
		let mut vec = DigitVector::from(vec![1, 2, 3]);
		let before  = vec.capacity();
		assert_ok!(vec.reserve(1));
		assert_eq!(vec.capacity(), before);
	}
	
	//		resize																
	#[test]
	fn resize__extends_with_zeros() {
		let mut vec = DigitVector::from(vec![9]);
		assert_ok!(vec.resize(3));
		assert_eq!(vec.as_slice(), &[9, 0, 0]);
	}
	#[test]
	fn resize__shrinks() {
		let mut vec = DigitVector::from(vec![1, 2, 3]);
		assert_ok!(vec.resize(1));
		assert_eq!(vec.as_slice(), &[1]);
	}
	#[test]
	fn resize__beyond_maximum() {
		let mut vec = DigitVector::new();
		assert_err_eq!(vec.resize(MAX_DIGITS + 1), BigIntError::Overflow);
	}
	
	//		resize_unchecked													
	#[test]
	fn resize_unchecked__within_capacity() {
		let mut vec = DigitVector::new();
		assert_ok!(vec.reserve(4));
		vec.resize_unchecked(4);
		assert_eq!(vec.size(), 4);
	}
	#[test]
	fn resize_unchecked__shrinks() {
		let mut vec = DigitVector::from(vec![1, 2, 3]);
		vec.resize_unchecked(0);
		assert_eq!(vec.size(), 0);
	}
	
	//		size																
	#[test]
	fn size__tracks_contents() {
		assert_eq!(DigitVector::new().size(),              0);
		assert_eq!(DigitVector::from(vec![1, 2]).size(),   2);
	}
}

mod traits {
	use super::*;
	
	//		clone																
	#[test]
	fn clone__is_deep() {
		let original = DigitVector::from(vec![1, 2, 3]);
		let mut copy = original.clone();
		copy[0]      = 99;
		assert_eq!(original[0], 1);
		assert_eq!(copy[0],     99);
	}
	
	//		index																
	#[test]
	fn index__reads_and_writes() {
		let mut vec = DigitVector::from(vec![5, 6]);
		vec[1]      = 7;
		assert_eq!(vec[0], 5);
		assert_eq!(vec[1], 7);
	}
}


