//! Benchmarks for filter evaluation
//!
//! Run with: cargo bench --package pipeline
//!
//! Listings are generated in memory so the benchmark needs no data files.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::InternshipRecord;
use pipeline::{FilterCriteria, FilterPipeline, filter_internships, match_count};

const CITIES: [&str; 4] = ["Jakarta", "Bandung", "Surabaya", "Yogyakarta"];
const TYPES: [&str; 3] = ["on-site", "remote", "hybrid"];
const SKILLS: [&str; 6] = ["Python", "SQL", "React", "Go", "Figma", "Computer Science"];

fn generate_listings(count: usize) -> Vec<InternshipRecord> {
    (0..count)
        .map(|i| {
            let mut record = InternshipRecord::new(i.to_string(), format!("Intern role {}", i));
            record.company = format!("Company {}", i % 97);
            record.location = CITIES[i % CITIES.len()].to_string();
            record.work_type = TYPES[i % TYPES.len()].to_string();
            record.description = "Work with the platform team on production services".to_string();
            record.requirements = vec![
                SKILLS[i % SKILLS.len()].to_string(),
                SKILLS[(i + 2) % SKILLS.len()].to_string(),
            ];
            record.paid = if i % 4 == 0 { "unpaid" } else { "paid" }.to_string();
            record.min_semester = (i % 8) as u32;
            record
        })
        .collect()
}

fn full_criteria() -> FilterCriteria {
    FilterCriteria::new()
        .with_search_term("intern")
        .with_location("jakarta")
        .with_type("remote")
        .with_skills("python, sql")
        .with_semester("5")
        .with_paid_status("paid")
}

fn bench_filter_small(c: &mut Criterion) {
    let records = generate_listings(200);
    let criteria = full_criteria();

    c.bench_function("filter_internships_200", |b| {
        b.iter(|| {
            let matches = filter_internships(black_box(&records), black_box(&criteria));
            black_box(matches.len())
        })
    });
}

fn bench_filter_large(c: &mut Criterion) {
    let records = generate_listings(50_000);
    let criteria = full_criteria();

    c.bench_function("filter_internships_50k", |b| {
        b.iter(|| {
            let matches = filter_internships(black_box(&records), black_box(&criteria));
            black_box(matches.len())
        })
    });

    c.bench_function("filter_internships_50k_sequential", |b| {
        let pipeline = FilterPipeline::from_criteria(&criteria).with_parallel_threshold(usize::MAX);
        b.iter(|| black_box(pipeline.apply(black_box(&records)).len()))
    });
}

fn bench_match_count(c: &mut Criterion) {
    let records = generate_listings(50_000);
    let criteria = FilterCriteria::new().with_skills("computer science");

    c.bench_function("match_count_50k", |b| {
        b.iter(|| black_box(match_count(black_box(&records), black_box(&criteria))))
    });
}

criterion_group!(benches, bench_filter_small, bench_filter_large, bench_match_count);
criterion_main!(benches);
