//! Per-keystroke search recomputation benchmarks.
//!
//! Every keystroke re-runs matching, highlighting and the visibility cascade
//! over the whole index and re-projects it, so this is the latency a reader
//! feels while typing.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knowdex::model::{DocIndex, Entry, Section, SectionId, SectionKind};
use knowdex::state::{reduce, PageOptions, PageState};
use knowdex::surface::MemorySurface;

const SECTIONS: usize = 200;
const ENTRIES_PER_SECTION: usize = 50;

/// Index of 10,000 entries spread over 200 sections of mixed kinds.
fn generate_large_index() -> DocIndex {
    let kinds = [SectionKind::Step, SectionKind::Info, SectionKind::Trouble];
    let sections = (0..SECTIONS)
        .map(|s| {
            let section = Section::new(
                SectionId::new(format!("section-{s:04}")).expect("valid id"),
                kinds[s % kinds.len()],
            )
            .with_title(format!("Section {s}"));
            (0..ENTRIES_PER_SECTION).fold(section, |section, e| {
                let entry = Entry::new(format!("Troubleshooting guide {s}-{e}: network and VPN"));
                let entry = if e % 4 == 0 {
                    entry.with_search_key(format!("keyword-{s}-{e} printer toner"))
                } else {
                    entry
                };
                section.with_entry(entry)
            })
        })
        .collect();
    DocIndex::new(sections).expect("unique ids")
}

fn benchmark_search(c: &mut Criterion) {
    let index = generate_large_index();
    println!(
        "Benchmark index: {} sections, {} entries",
        index.section_count(),
        index.entry_count()
    );

    c.bench_function("reduce_common_term", |b| {
        b.iter(|| black_box(reduce(black_box(&index), black_box("net"))))
    });

    c.bench_function("reduce_rare_term", |b| {
        b.iter(|| black_box(reduce(black_box(&index), black_box("keyword-199-48"))))
    });

    c.bench_function("reduce_no_match", |b| {
        b.iter(|| black_box(reduce(black_box(&index), black_box("xyznonexistent"))))
    });

    let mut page = PageState::new(index.clone(), PageOptions::default());
    let mut surface = MemorySurface::for_index(page.index());
    c.bench_function("keystroke_project_to_surface", |b| {
        b.iter(|| page.query_changed(black_box(&mut surface), black_box("vpn")))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_search
}

criterion_main!(benches);
