//! Console driver that exercises [`BitValue`] end to end.
//!
//! Converts an integer to binary, reports one of its bits, runs the arithmetic
//! and assignment operations against a few fixed values, and then pokes at
//! bits both inside and outside the stored width.



//		Global configuration																							

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																											

#[cfg(test)]
#[path = "../tests/signbits_demo.rs"]
mod tests;



//		Packages																										

use clap::Parser;
use signbits::BitValue;
use std::io::{BufRead, BufWriter, Error as IoError, ErrorKind as IoErrorKind, Result as IoResult, Write, self};



//		Structs																											

//		Args																	
/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Converts an integer to binary and exercises the result")]
struct Args {
	/// Integer to convert. Read from standard input when omitted.
	#[arg(short, long, allow_negative_numbers = true)]
	value: Option<i64>,
	
	/// Bit position to report for the converted integer.
	#[arg(short, long, default_value_t = 4)]
	bit:   usize,
}



//		Functions																										

//		main																	
fn main() -> IoResult<()> {
	let args    = Args::parse();
	let mut out = BufWriter::new(io::stdout().lock());
	report(args.value, args.bit, &mut io::stdin().lock(), &mut out)?;
	out.flush()
}

//		overflowed																
/// The error reported when the entered integer pushes an operation past the
/// range of an [`i64`].
fn overflowed() -> IoError {
	IoError::new(IoErrorKind::InvalidInput, "Arithmetic overflowed the range of an i64")
}

//		prompt																	
/// Asks for the integer to convert, and reads it as one token from `input`.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> IoResult<BitValue> {
	write!(out, "Enter integer to be converted to binary:  ")?;
	out.flush()?;
	BitValue::read_from(input)
}

//		report																	
/// Runs the conversions and operations in turn, writing each result to `out`.
/// 
/// # Parameters
/// 
/// * `value` - The integer to convert. When [`None`], it is read from `input`
///   after a prompt.
/// * `bit`   - The bit position to report for the converted integer.
/// * `input` - Where to read the integer from when `value` is not given.
/// * `out`   - Where to write the report.
/// 
/// # Errors
/// 
/// Returns an [`IoErrorKind::InvalidInput`] error if the integer pushes any of
/// the arithmetic past the range of an [`i64`]. Errors from reading `input` or
/// writing to `out` are passed through.
/// 
fn report<R: BufRead, W: Write>(value: Option<i64>, bit: usize, input: &mut R, out: &mut W) -> IoResult<()> {
	let mut b   = BitValue::new(42);
	let mut d   = BitValue::new(-13);
	let mut y   = &BitValue::zero() + &BitValue::new(1);
	
	let mut a   = value.map_or_else(|| prompt(input, out), |value| Ok(BitValue::new(value)))?;
	writeln!(out, "The binary representation of this number is:")?;
	writeln!(out, "{a}")?;
	writeln!(out, "Bit {bit} of this number is:")?;
	writeln!(out, "{}", u8::from(a.get_bit(bit)))?;
	writeln!(out)?;
	
	writeln!(out, "Compute c = a + b")?;
	let mut c = a.checked_add(&b).ok_or_else(overflowed)?;
	writeln!(out, "c = {c}")?;
	writeln!(out, "Compute d = a + b - c")?;
	d.clone_from(&a.checked_add(&b).and_then(|sum| sum.checked_sub(&c)).ok_or_else(overflowed)?);
	writeln!(out, "d = {d}")?;
	writeln!(out)?;
	
	writeln!(out, "Does a == c?")?;
	writeln!(out, "{}", if a == c { "a == c" } else { "a != c" })?;
	writeln!(out)?;
	
	writeln!(out, "Test assignment operators")?;
	c.clone_from(&d);
	let x = c.clone();
	b     = b.checked_add(&b).ok_or_else(overflowed)?;
	a     = a.checked_sub(&b).ok_or_else(overflowed)?;
	y     = y.checked_add(&a).ok_or_else(overflowed)?;
	writeln!(out, "x = {x}    y = {y}")?;
	writeln!(out)?;
	
	writeln!(out, "Bit operations on a = {a} ({} bits)", a.size())?;
	let results = [
		("set_bit(3)",       a.set_bit(3)),
		("set_bit(1000)",    a.set_bit(1000)),
		("clear_bit(3)",     a.clear_bit(3)),
		("clear_bit(10000)", a.clear_bit(10_000)),
		("toggle_bit(3)",    a.toggle_bit(3)),
	];
	for (operation, applied) in results {
		writeln!(out, "  {operation:<18} {}", if applied { "applied" } else { "out of range" })?;
	}
	writeln!(out, "a = {a}")
}
