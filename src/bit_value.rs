//! Sign-and-magnitude binary value type.

//	Bit positions are validated before any direct indexing, and the width of a
//	value never exceeds the 64 bits needed for the magnitude of an i64, so the
//	shifts and index operations in here cannot go out of range.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Width is bounded by construction"
)]

//	Arithmetic follows the native i64 semantics, including panicking on
//	overflow in the operators.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

#[cfg(test)]
#[path = "tests/bit_value.rs"]
mod tests;



//		Packages																										

use crate::errors::ConversionError;
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, self},
	iter::Sum,
	ops::{Add, AddAssign, Bound, RangeBounds, Sub, SubAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
	ser::Error as SerdeSerError,
};
use serde_json::Error as JsonError;
use std::io::{BufRead, Error as IoError, ErrorKind as IoErrorKind, Result as IoResult};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs																											

//		BitValue																
/// A signed integer held as a sign flag plus a sequence of bits.
/// 
/// The magnitude is stored least-significant bit first, so position `0` is
/// always the ones place. A value built from an integer is always at its
/// canonical width, i.e. the most-significant stored bit is `1`, except for
/// zero, which is a single `0` bit and is never negative.
/// 
/// # Bit access
/// 
/// The accessors and mutators work on the bits that are currently stored, and
/// never grow the value. An out-of-range position is not an error: the
/// mutators do nothing and return `false`, and [`get_bit()`](Self::get_bit())
/// returns `false`. Note that this means [`get_bit()`](Self::get_bit()) cannot
/// tell an out-of-range position apart from a bit that is unset, so callers
/// that care need to check against [`size()`](Self::size()) first.
/// 
/// Clearing the most-significant bit leaves the value at its old width, with
/// a leading zero. Such a value is numerically fine, but is not equal to the
/// canonical form of the same number, as equality compares sign, width, and
/// bits. Use [`canonicalize()`](Self::canonicalize()) to restore the canonical
/// form.
/// 
/// # Arithmetic
/// 
/// Addition and subtraction are carried out by converting both operands to
/// [`i64`], performing the native operation, and converting the result back.
/// The operators follow standard Rust integer behaviour and panic on
/// overflow; explicit checked and wrapping variants are also available.
/// 
/// # Conversion
/// 
/// [`to_integer()`](Self::to_integer()) is unchecked, and wraps if the stored
/// magnitude does not fit in an [`i64`], which can happen after setting bits
/// below the top bit of [`i64::MIN`]. [`TryFrom`] is implemented for the
/// checked equivalents, and [`i128`] can hold every possible value exactly.
/// 
/// # Formatting
/// 
/// The [`Display`] form is an optional `-` followed by the bits from most- to
/// least-significant, e.g. `-1101` for `-13`. There is no `0b` prefix unless
/// the alternate [`Binary`] form (`{:#b}`) is requested.
/// 
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BitValue {
	/// Whether the value is negative. Never set for zero when produced by a
	/// conversion.
	negative: bool,
	
	/// The magnitude, least-significant bit first. Never empty.
	bits:     Vec<bool>,
}

//󰭅		BitValue																
impl BitValue {
	//		Public constants													
	/// The maximum number of bits a value can hold, which is the width of the
	/// magnitude of [`i64::MIN`].
	pub const MAX_BITS: usize = 64;
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`BitValue`] from an integer.
	/// 
	/// The result is at its canonical width, i.e. just wide enough to hold the
	/// magnitude of the integer.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The integer to represent.
	/// 
	#[must_use]
	pub fn new(value: i64) -> Self {
		Self::from_magnitude(value.unsigned_abs(), value < 0)
	}
	
	//		zero																
	/// Creates a new [`BitValue`] representing zero.
	/// 
	/// This is a single unset bit, and is not negative.
	/// 
	#[must_use]
	pub fn zero() -> Self {
		Self { negative: false, bits: vec![false] }
	}
	
	//		Public methods														
	
	//		as_slice															
	/// The stored bits, least-significant first.
	#[must_use]
	pub fn as_slice(&self) -> &[bool] {
		&self.bits
	}
	
	//		assign																
	/// Replaces the value with the representation of an integer.
	/// 
	/// The existing bits are discarded and new storage is created at the
	/// canonical width of the incoming integer.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The integer to represent.
	/// 
	pub fn assign(&mut self, value: i64) {
		*self = Self::new(value);
	}
	
	//		bits																
	/// Returns the bits in the specified range as a [`Vec`] of booleans.
	/// 
	/// Returns an empty [`Vec`] if the range is invalid or out of bounds.
	/// 
	/// # Parameters
	/// 
	/// * `range` - The range of bits to get, where `0` is the least-significant
	///   bit. The range is end-exclusive, like all Rust ranges.
	/// 
	#[must_use]
	pub fn bits<R: RangeBounds<usize>>(&self, range: R) -> Vec<bool> {
		let start = match range.start_bound() {
			Bound::Included(&n) => n,
			Bound::Excluded(&n) => n.saturating_add(1),
			Bound::Unbounded    => 0,
		};
		let end   = match range.end_bound() {
			Bound::Included(&n) => n.saturating_add(1),
			Bound::Excluded(&n) => n,
			Bound::Unbounded    => self.size(),
		};
		self.bits.get(start..end).map(<[bool]>::to_vec).unwrap_or_default()
	}
	
	//		canonicalize														
	/// Trims any leading zero bits, restoring the canonical width.
	/// 
	/// A value whose bits are all unset becomes the canonical zero, which also
	/// drops any negative sign.
	/// 
	pub fn canonicalize(&mut self) {
		if !self.is_canonical() {
			*self = Self::from_magnitude(self.magnitude(), self.negative);
		}
	}
	
	//		checked_add															
	/// Checked addition.
	/// 
	/// Computes `self + rhs`, returning [`None`] if overflow occurred.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
		self.to_integer().checked_add(rhs.to_integer()).map(Self::new)
	}
	
	//		checked_sub															
	/// Checked subtraction.
	/// 
	/// Computes `self - rhs`, returning [`None`] if overflow occurred.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
		self.to_integer().checked_sub(rhs.to_integer()).map(Self::new)
	}
	
	//		clear_bit															
	/// Sets a specific bit to `0`.
	/// 
	/// Returns `false`, leaving the value untouched, if the position is out of
	/// range. Otherwise, returns `true`.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to clear, where `0` is the
	///   least-significant bit.
	/// 
	pub fn clear_bit(&mut self, pos: usize) -> bool {
		self.update_bit(pos, |_| false)
	}
	
	//		from_json															
	/// Deserialises a value from a JSON string.
	/// 
	/// Both plain numbers and decimal strings are accepted.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to parse.
	/// 
	/// # Errors
	/// 
	/// If the JSON is invalid, or does not hold an integer that fits in an
	/// [`i64`], an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		get_bit																
	/// Gets the value of a specific bit.
	/// 
	/// Returns `false` if the position is out of range, which is
	/// indistinguishable from an unset bit.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to get, where `0` is the
	///   least-significant bit.
	/// 
	#[must_use]
	pub fn get_bit(&self, pos: usize) -> bool {
		self.bits.get(pos).copied().unwrap_or(false)
	}
	
	//		is_canonical														
	/// Whether the value is at its canonical width.
	/// 
	/// This is the case when the most-significant stored bit is set, or when
	/// the value is the single-bit, non-negative zero.
	/// 
	#[must_use]
	pub fn is_canonical(&self) -> bool {
		match self.bits.as_slice() {
			[false]    => !self.negative,
			[.., last] => *last,
			[]         => false,
		}
	}
	
	//		is_negative															
	/// Whether the sign flag is set.
	#[must_use]
	pub const fn is_negative(&self) -> bool {
		self.negative
	}
	
	//		is_zero																
	/// Whether the magnitude is zero, regardless of width or sign.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		!self.bits.contains(&true)
	}
	
	//		parse																
	/// Parses a decimal integer string.
	/// 
	/// # Parameters
	/// 
	/// * `s` - The string to parse.
	/// 
	/// # Errors
	/// 
	/// If the number is invalid, an error will be returned.
	/// 
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		s.parse()
	}
	
	//		read_from															
	/// Reads the next whitespace-delimited integer from a stream.
	/// 
	/// Leading whitespace, including blank lines, is skipped. Only the token
	/// and the single whitespace character that ends it are consumed, so
	/// further tokens on the same line remain available to the next read.
	/// 
	/// # Parameters
	/// 
	/// * `reader` - The stream to read from.
	/// 
	/// # Errors
	/// 
	/// Returns [`IoErrorKind::UnexpectedEof`] if the stream ends before a token
	/// is found, and [`IoErrorKind::InvalidData`] if the token is not a valid
	/// [`i64`]. Errors from the underlying reader are passed through.
	/// 
	pub fn read_from<R: BufRead>(reader: &mut R) -> IoResult<Self> {
		let mut token = Vec::new();
		loop {
			let buffer = reader.fill_buf()?;
			if buffer.is_empty() {
				break;
			}
			let mut used  = 0;
			let mut ended = false;
			for &byte in buffer {
				used += 1;
				if !byte.is_ascii_whitespace() {
					token.push(byte);
				} else if !token.is_empty() {
					ended = true;
					break;
				}
			}
			reader.consume(used);
			if ended {
				break;
			}
		}
		if token.is_empty() {
			return Err(IoError::new(IoErrorKind::UnexpectedEof, "No integer to read"));
		}
		String::from_utf8(token)
			.map_err(|err| IoError::new(IoErrorKind::InvalidData, err))?
			.parse()
			.map_err(|err: ConversionError| IoError::new(IoErrorKind::InvalidData, err))
	}
	
	//		set_bit																
	/// Sets a specific bit to `1`.
	/// 
	/// Returns `false`, leaving the value untouched, if the position is out of
	/// range. The value is never widened to make room. Otherwise, returns
	/// `true`.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to set, where `0` is the
	///   least-significant bit.
	/// 
	pub fn set_bit(&mut self, pos: usize) -> bool {
		self.update_bit(pos, |_| true)
	}
	
	//		size																
	/// The number of bits currently stored. Always at least `1`.
	#[must_use]
	pub fn size(&self) -> usize {
		self.bits.len()
	}
	
	//		to_integer															
	/// Converts the value to an [`i64`].
	/// 
	/// This conversion is unchecked: a magnitude that does not fit wraps in
	/// two's complement. Use `i64::try_from()` for a checked conversion.
	/// 
	#[must_use]
	pub fn to_integer(&self) -> i64 {
		if self.is_zero() {
			return 0;
		}
		#[expect(clippy::cast_possible_wrap, reason = "Unchecked by contract")]
		let value = self.magnitude() as i64;
		if self.negative {
			value.wrapping_neg()
		} else {
			value
		}
	}
	
	//		to_json																
	/// Serialises the value to a JSON string.
	/// 
	/// # Errors
	/// 
	/// If the magnitude does not fit in an [`i64`], an error will be returned.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		toggle_bit															
	/// Flips a specific bit.
	/// 
	/// Returns `false`, leaving the value untouched, if the position is out of
	/// range. Otherwise, returns `true`.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to toggle, where `0` is the
	///   least-significant bit.
	/// 
	pub fn toggle_bit(&mut self, pos: usize) -> bool {
		self.update_bit(pos, |bit| !bit)
	}
	
	//		wrapping_add														
	/// Wrapping (modular) addition.
	/// 
	/// Computes `self + rhs`, wrapping around at the boundary of [`i64`].
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn wrapping_add(&self, rhs: &Self) -> Self {
		Self::new(self.to_integer().wrapping_add(rhs.to_integer()))
	}
	
	//		wrapping_sub														
	/// Wrapping (modular) subtraction.
	/// 
	/// Computes `self - rhs`, wrapping around at the boundary of [`i64`].
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn wrapping_sub(&self, rhs: &Self) -> Self {
		Self::new(self.to_integer().wrapping_sub(rhs.to_integer()))
	}
	
	//		Private methods														
	
	//		from_magnitude														
	/// Builds a canonical-width value from a magnitude and sign.
	/// 
	/// A zero magnitude always produces the non-negative zero.
	/// 
	fn from_magnitude(magnitude: u64, negative: bool) -> Self {
		if magnitude == 0 {
			return Self::zero();
		}
		let width = (u64::BITS - magnitude.leading_zeros()) as usize;
		Self {
			negative,
			bits: (0..width).map(|pos| (magnitude >> pos) & 1 == 1).collect(),
		}
	}
	
	//		magnitude															
	/// The unsigned magnitude of the stored bits.
	fn magnitude(&self) -> u64 {
		self.bits.iter()
			.enumerate()
			.filter(|&(_, &bit)| bit)
			.fold(0, |acc, (pos, _)| acc | (1_u64 << pos))
	}
	
	//		update_bit															
	/// Applies a change to a single bit, if the position is in range.
	fn update_bit<F: FnOnce(bool) -> bool>(&mut self, pos: usize, change: F) -> bool {
		match self.bits.get_mut(pos) {
			Some(bit) => {
				*bit = change(*bit);
				true
			},
			None      => false,
		}
	}
	
	//		write_digits														
	/// Writes the bits, most-significant first, to a [`String`].
	/// 
	/// The sign and any prefix are left to [`Formatter::pad_integral()`], which
	/// ignores precision, so the digits are never truncated.
	/// 
	fn write_digits(&self) -> String {
		self.bits.iter().rev().map(|&bit| if bit { '1' } else { '0' }).collect()
	}
}

//󰭅		Add																		
impl Add for BitValue {
	type Output = Self;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		&self + &rhs
	}
}

//󰭅		Add<&>																	
impl Add<&BitValue> for &BitValue {
	type Output = BitValue;
	
	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: &BitValue) -> Self::Output {
		self.checked_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign																
impl AddAssign for BitValue {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self += &rhs;
	}
}

//󰭅		AddAssign<&>															
impl AddAssign<&Self> for BitValue {
	//		add_assign															
	fn add_assign(&mut self, rhs: &Self) {
		*self = &*self + rhs;
	}
}

//󰭅		Binary																	
impl Binary for BitValue {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "0b", &self.write_digits())
	}
}

//󰭅		Debug																	
impl Debug for BitValue {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	For alternate formatting (#), show the raw fields
		if f.alternate() {
			return f.debug_struct("BitValue")
				.field("negative", &self.negative)
				.field("bits",     &self.bits)
				.finish()
			;
		}
		write!(f, "BitValue({self})")
	}
}

//󰭅		Default																	
impl Default for BitValue {
	//		default																
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for BitValue {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BitValueVisitor)
		} else {
			deserializer.deserialize_i64(BitValueVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for BitValue {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "", &self.write_digits())
	}
}

//󰭅		From: i8 -> BitValue													
impl From<i8> for BitValue {
	//		from																
	fn from(v: i8) -> Self {
		Self::new(i64::from(v))
	}
}

//󰭅		From: i16 -> BitValue													
impl From<i16> for BitValue {
	//		from																
	fn from(v: i16) -> Self {
		Self::new(i64::from(v))
	}
}

//󰭅		From: i32 -> BitValue													
impl From<i32> for BitValue {
	//		from																
	fn from(v: i32) -> Self {
		Self::new(i64::from(v))
	}
}

//󰭅		From: i64 -> BitValue													
impl From<i64> for BitValue {
	//		from																
	fn from(v: i64) -> Self {
		Self::new(v)
	}
}

//󰭅		From: u8 -> BitValue													
impl From<u8> for BitValue {
	//		from																
	fn from(v: u8) -> Self {
		Self::new(i64::from(v))
	}
}

//󰭅		From: u16 -> BitValue													
impl From<u16> for BitValue {
	//		from																
	fn from(v: u16) -> Self {
		Self::new(i64::from(v))
	}
}

//󰭅		From: u32 -> BitValue													
impl From<u32> for BitValue {
	//		from																
	fn from(v: u32) -> Self {
		Self::new(i64::from(v))
	}
}

//󰭅		From: BitValue -> i128													
impl From<&BitValue> for i128 {
	//		from																
	fn from(v: &BitValue) -> Self {
		let magnitude = Self::from(v.magnitude());
		if v.negative {
			-magnitude
		} else {
			magnitude
		}
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for BitValue {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BitValue: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr																	
impl FromStr for BitValue {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		Ok(Self::new(trimmed.parse::<i64>()?))
	}
}

//󰭅		Serialize																
impl Serialize for BitValue {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_i64(i64::try_from(self).map_err(SerdeSerError::custom)?)
	}
}

//󰭅		Sub																		
impl Sub for BitValue {
	type Output = Self;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		&self - &rhs
	}
}

//󰭅		Sub<&>																	
impl Sub<&BitValue> for &BitValue {
	type Output = BitValue;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: &BitValue) -> Self::Output {
		self.checked_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign																
impl SubAssign for BitValue {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self -= &rhs;
	}
}

//󰭅		SubAssign<&>															
impl SubAssign<&Self> for BitValue {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: &Self) {
		*self = &*self - rhs;
	}
}

//󰭅		Sum																		
impl Sum for BitValue {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>																	
impl<'a> Sum<&'a Self> for BitValue {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + x)
	}
}

//󰭅		ToSql																	
impl ToSql for BitValue {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => i64::try_from(self)?.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BitValue: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: i128 -> BitValue												
impl TryFrom<i128> for BitValue {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i128) -> Result<Self, Self::Error> {
		i64::try_from(v).map(Self::new).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: isize -> BitValue												
impl TryFrom<isize> for BitValue {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: isize) -> Result<Self, Self::Error> {
		i64::try_from(v).map(Self::new).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: u64 -> BitValue												
impl TryFrom<u64> for BitValue {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u64) -> Result<Self, Self::Error> {
		i64::try_from(v).map(Self::new).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: u128 -> BitValue												
impl TryFrom<u128> for BitValue {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u128) -> Result<Self, Self::Error> {
		i64::try_from(v).map(Self::new).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: usize -> BitValue												
impl TryFrom<usize> for BitValue {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: usize) -> Result<Self, Self::Error> {
		i64::try_from(v).map(Self::new).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: BitValue -> i16												
impl TryFrom<&BitValue> for i16 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: &BitValue) -> Result<Self, Self::Error> {
		Ok(Self::try_from(i64::try_from(v)?)?)
	}
}

//󰭅		TryFrom: BitValue -> i32												
impl TryFrom<&BitValue> for i32 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: &BitValue) -> Result<Self, Self::Error> {
		Ok(Self::try_from(i64::try_from(v)?)?)
	}
}

//󰭅		TryFrom: BitValue -> i64												
impl TryFrom<&BitValue> for i64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: &BitValue) -> Result<Self, Self::Error> {
		Self::try_from(i128::from(v)).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: BitValue -> u64												
impl TryFrom<&BitValue> for u64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: &BitValue) -> Result<Self, Self::Error> {
		(!v.negative || v.is_zero()).then(|| v.magnitude()).ok_or(ConversionError::ValueIsNegative)
	}
}

//		BitValueVisitor															
/// A visitor for parsing values from integers and strings.
struct BitValueVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BitValueVisitor {
	type Value = BitValue;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer that fits in an i64")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BitValue::new(v))
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BitValue::try_from(v).map_err(E::custom)
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}
