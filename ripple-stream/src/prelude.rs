// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator trait.
//!
//! ```rust
//! use ripple_stream::prelude::*;
//! ```

pub use crate::concat::ConcatExt;
pub use crate::count::CountExt;
pub use crate::filter::FilterExt;
pub use crate::last_value::LastValueExt;
pub use crate::map::MapExt;
pub use crate::merge::MergeExt;
pub use crate::merge_record::{MergeRecord, Merged};
pub use crate::reduce::ReduceExt;
pub use crate::run::RunExt;
pub use crate::switch_map::SwitchMapExt;
pub use crate::take::TakeExt;
pub use crate::throttle::ThrottleExt;
pub use crate::to_array::ToArrayExt;
pub use crate::until::UntilExt;
pub use crate::zip::ZipExt;
