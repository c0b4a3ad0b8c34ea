// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::map_filter_bench::bench_map_filter;
use crate::merge_bench::bench_merge;
use criterion::{criterion_group, criterion_main};


criterion_group!(benches, bench_map_filter, bench_merge);
criterion_main!(benches);
