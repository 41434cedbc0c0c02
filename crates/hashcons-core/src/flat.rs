//! Word-fold fallback for plain-data aggregates.
//!
//! An aggregate is viewed as the ordered sequence of 32-bit words of its
//! fields. The hash folds those words with [`combine`](crate::mix::combine),
//! seeded by the first word; equality compares them word by word.
//!
//! Nothing is reinterpreted in memory. Each field type declares its words
//! through [`FlatWord`], and the [`flat_aggregate!`](crate::flat_aggregate)
//! macro checks at compile time that the listed fields account for every byte
//! of the type.

use crate::mix::WordFold;

/// Width of one word, in bytes.
pub const WORD_BYTES: usize = core::mem::size_of::<u32>();

/// A fixed-width value that is a whole number of 32-bit words and whose bit
/// pattern fully determines its value.
///
/// Narrower types (`u8`, `u16`, `bool`) and platform-sized ones (`usize`) are
/// deliberately absent.
pub trait FlatWord {
    /// Number of words this value occupies.
    const WORDS: usize;

    /// Visit each word in order.
    fn for_each_word(&self, f: &mut impl FnMut(u32));

    /// Word-by-word equality.
    fn same_words(&self, other: &Self) -> bool;
}

impl FlatWord for u32 {
    const WORDS: usize = 1;

    #[inline]
    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        f(*self);
    }

    #[inline]
    fn same_words(&self, other: &Self) -> bool {
        self == other
    }
}

impl FlatWord for i32 {
    const WORDS: usize = 1;

    #[inline]
    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        f(*self as u32);
    }

    #[inline]
    fn same_words(&self, other: &Self) -> bool {
        self == other
    }
}

impl FlatWord for f32 {
    const WORDS: usize = 1;

    #[inline]
    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        f(self.to_bits());
    }

    #[inline]
    fn same_words(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

// 64-bit values: low word first.
impl FlatWord for u64 {
    const WORDS: usize = 2;

    #[inline]
    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        f(*self as u32);
        f((*self >> 32) as u32);
    }

    #[inline]
    fn same_words(&self, other: &Self) -> bool {
        self == other
    }
}

impl FlatWord for i64 {
    const WORDS: usize = 2;

    #[inline]
    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        (*self as u64).for_each_word(f);
    }

    #[inline]
    fn same_words(&self, other: &Self) -> bool {
        self == other
    }
}

impl FlatWord for f64 {
    const WORDS: usize = 2;

    #[inline]
    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        self.to_bits().for_each_word(f);
    }

    #[inline]
    fn same_words(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl<W: FlatWord, const N: usize> FlatWord for [W; N] {
    const WORDS: usize = W::WORDS * N;

    fn for_each_word(&self, f: &mut impl FnMut(u32)) {
        for item in self {
            item.for_each_word(&mut *f);
        }
    }

    fn same_words(&self, other: &Self) -> bool {
        self.iter().zip(other).all(|(a, b)| a.same_words(b))
    }
}

/// Fold the words of `value`, seeded by the first one.
pub fn hash_words<T: ?Sized + FlatWord>(value: &T) -> u64 {
    let mut fold = WordFold::new();
    value.for_each_word(&mut |word| fold.push(word));
    fold.finish()
}

/// Collect the words of `value`.
pub fn words<T: ?Sized + FlatWord>(value: &T) -> Vec<u32> {
    let mut out = Vec::with_capacity(T::WORDS);
    value.for_each_word(&mut |word| out.push(word));
    out
}

/// Derive [`FlatWord`], [`StructuralHash`](crate::StructuralHash) and
/// [`StructuralEq`](crate::StructuralEq) for plain-data structs.
///
/// Every field must be listed with its type, in declaration order. The
/// order is part of the hash: listing the same fields in a different order
/// produces different hashes.
///
/// ```
/// use hashcons_core::{flat_aggregate, StructuralHash};
///
/// struct Interval {
///     lo: i32,
///     hi: i32,
/// }
///
/// flat_aggregate! {
///     Interval { lo: i32, hi: i32 }
/// }
///
/// assert_eq!(Interval { lo: 3, hi: 5 }.structural_hash(), 28);
/// ```
///
/// Fields narrower than a word are rejected at compile time:
///
/// ```compile_fail
/// use hashcons_core::flat_aggregate;
///
/// struct Tagged {
///     tag: u8,
///     len: u16,
/// }
///
/// flat_aggregate! {
///     Tagged { tag: u8, len: u16 }
/// }
/// ```
///
/// So are types whose size is not covered by the listed words, whether
/// through padding or an omitted field:
///
/// ```compile_fail
/// use hashcons_core::flat_aggregate;
///
/// struct Partial {
///     lo: i32,
///     hi: i32,
///     flag: bool,
/// }
///
/// flat_aggregate! {
///     Partial { lo: i32, hi: i32 }
/// }
/// ```
#[macro_export]
macro_rules! flat_aggregate {
    ($($name:ident { $($field:ident : $fty:ty),+ $(,)? })+) => {$(
        const _: () = {
            let size = ::core::mem::size_of::<$name>();
            let listed = (0 $(+ <$fty as $crate::flat::FlatWord>::WORDS)+) * $crate::flat::WORD_BYTES;
            assert!(
                size % $crate::flat::WORD_BYTES == 0,
                concat!(stringify!($name), " is not a whole number of 32-bit words")
            );
            assert!(
                size == listed,
                concat!(stringify!($name), " has padding or fields not listed in flat_aggregate!")
            );
        };

        impl $crate::flat::FlatWord for $name {
            const WORDS: usize = 0 $(+ <$fty as $crate::flat::FlatWord>::WORDS)+;

            #[inline]
            fn for_each_word(&self, f: &mut impl FnMut(u32)) {
                $( <$fty as $crate::flat::FlatWord>::for_each_word(&self.$field, &mut *f); )+
            }

            #[inline]
            fn same_words(&self, other: &Self) -> bool {
                true $(&& <$fty as $crate::flat::FlatWord>::same_words(&self.$field, &other.$field))+
            }
        }

        impl $crate::structural::StructuralHash for $name {
            fn structural_hash(&self) -> u64 {
                $crate::flat::hash_words(self)
            }
        }

        impl $crate::structural::StructuralEq for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                $crate::flat::FlatWord::same_words(self, other)
            }
        }
    )+};
}
