//		Packages																										

use super::*;
use claims::{assert_err, assert_ok};
use std::io::Cursor;



//		Tests																											

mod functions {
	use super::*;
	
	//		Helpers																
	fn run(value: Option<i64>, bit: usize, input: &str) -> IoResult<String> {
		let mut out = Vec::new();
		report(value, bit, &mut Cursor::new(input), &mut out)?;
		Ok(String::from_utf8(out).unwrap())
	}
	
	//		report																
	#[test]
	fn report__from_argument() {
		let output = run(Some(19), 4, "").unwrap();
		assert_eq!(output, concat!(
			"The binary representation of this number is:\n",
			"10011\n",
			"Bit 4 of this number is:\n",
			"1\n",
			"\n",
			"Compute c = a + b\n",
			"c = 111101\n",
			"Compute d = a + b - c\n",
			"d = 0\n",
			"\n",
			"Does a == c?\n",
			"a != c\n",
			"\n",
			"Test assignment operators\n",
			"x = 0    y = -1000000\n",
			"\n",
			"Bit operations on a = -1000001 (7 bits)\n",
			"  set_bit(3)         applied\n",
			"  set_bit(1000)      out of range\n",
			"  clear_bit(3)       applied\n",
			"  clear_bit(10000)   out of range\n",
			"  toggle_bit(3)      applied\n",
			"a = -1001001\n",
		));
	}
	#[test]
	fn report__from_input() {
		let output = run(None, 4, "  19\n").unwrap();
		assert!(output.starts_with("Enter integer to be converted to binary:  The binary representation of this number is:\n10011\n"));
		assert_eq!(output, format!("Enter integer to be converted to binary:  {}", run(Some(19), 4, "").unwrap()));
	}
	#[test]
	fn report__argument_ignores_input() {
		assert_eq!(run(Some(-13), 4, "19\n").unwrap(), run(Some(-13), 4, "").unwrap());
	}
	#[test]
	fn report__chosen_bit() {
		assert!(run(Some(19), 1, "").unwrap().contains("Bit 1 of this number is:\n1\n"));
		assert!(run(Some(19), 2, "").unwrap().contains("Bit 2 of this number is:\n0\n"));
		assert!(run(Some(19), 99, "").unwrap().contains("Bit 99 of this number is:\n0\n"));
	}
	#[test]
	fn report__overflow() {
		let err = run(Some(i64::MAX), 4, "").unwrap_err();
		assert_eq!(err.kind(), IoErrorKind::InvalidInput);
		assert_eq!(err.to_string(), "Arithmetic overflowed the range of an i64");
	}
	#[test]
	fn report__at_limits() {
		assert_ok!(run(Some(i64::MAX - 42), 4, ""));
		assert_ok!(run(Some(i64::MIN + 84), 4, ""));
		assert_err!(run(Some(i64::MIN + 83), 4, ""));
	}
	#[test]
	fn report__empty_input() {
		let err = run(None, 4, "").unwrap_err();
		assert_eq!(err.kind(), IoErrorKind::UnexpectedEof);
	}
	#[test]
	fn report__invalid_input() {
		let err = run(None, 4, "nineteen\n").unwrap_err();
		assert_eq!(err.kind(), IoErrorKind::InvalidData);
	}
}
