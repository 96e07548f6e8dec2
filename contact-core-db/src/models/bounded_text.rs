use heapless::String as HeaplessString;

/// Longest UTF-8 encoding of a single `char`.
pub const UTF8_MAX_CHAR_LEN: usize = 4;

/// Byte capacity of a `HeaplessString` that must hold `chars` characters
/// of any script.
pub const fn utf8_capacity(chars: usize) -> usize {
    chars * UTF8_MAX_CHAR_LEN
}

/// Character bound of a `HeaplessString<N>` sized with [`utf8_capacity`].
///
/// Text columns are `VARCHAR(n)`, which counts characters, so the models
/// count characters too.
pub const fn char_limit(capacity: usize) -> usize {
    capacity / UTF8_MAX_CHAR_LEN
}

/// Copies `value` into a bounded string, or returns `None` when it has more
/// than `char_limit(N)` characters.
pub fn to_bounded<const N: usize>(value: &str) -> Option<HeaplessString<N>> {
    if value.chars().count() > char_limit(N) {
        return None;
    }
    HeaplessString::try_from(value).ok()
}
