// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::StreamId;

/// Value coming from either side of a two-stream combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Merged<T, K> {
    Left(T),
    Right(K),
}

impl<T, K> Merged<T, K> {
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    pub fn left(self) -> Option<T> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<K> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

impl<T> Merged<T, T> {
    /// Collapses a record whose sides share one type.
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

/// Tagged output of [`concat`](crate::ConcatExt::concat) and
/// [`merge`](crate::MergeExt::merge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord<T, K> {
    pub value: Merged<T, K>,
    /// Stream the value was emitted by.
    pub source_id: StreamId,
    /// Emission index within that source.
    pub source_index: usize,
    /// Position within the combined stream, starting at 0.
    pub combined_index: usize,
}
