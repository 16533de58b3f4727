// Criterion benchmarks for gradmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gradmatch::core::eligibility::match_score;
use gradmatch::services::institutions_from_payload;
use gradmatch::{
    compute_normalized_score, rank_institutions, Institution, PrestigeCategory, RankingMode,
    StudentProfile, TierFilter,
};
use gradmatch::models::Eligibility;
use serde_json::json;

const COUNTRIES: [&str; 4] = ["United States", "Canada", "United Kingdom", "Germany"];

fn create_institution(id: usize) -> Institution {
    Institution {
        id: format!("inst-{}", id),
        name: format!("University {}", id),
        country: COUNTRIES[id % COUNTRIES.len()].to_string(),
        location: String::new(),
        ranking_position: (id % 300) as u32 + 1,
        website: String::new(),
        eligibility: Eligibility {
            min_gre: 295.0 + (id % 35) as f64,
            min_ielts: 6.0 + (id % 4) as f64 * 0.5,
            min_cgpa: 7.0 + (id % 3) as f64,
        },
        programs: vec!["Computer Science".to_string()],
        normalized_score: None,
    }
}

fn create_student() -> StudentProfile {
    let mut student = StudentProfile::new(318.0, 7.5).with_cgpa(8.7);
    student.preferred_countries.insert("Canada".to_string());
    student.preferred_university_names.insert("University 7".to_string());
    student
}

fn bench_normalization(c: &mut Criterion) {
    c.bench_function("compute_normalized_score", |b| {
        b.iter(|| compute_normalized_score(black_box(315.0), black_box(7.5), black_box(8.5)));
    });
}

fn bench_match_score(c: &mut Criterion) {
    let student = create_student();
    let institution = create_institution(7);

    c.bench_function("match_score", |b| {
        b.iter(|| match_score(black_box(&student), black_box(&institution)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let student = create_student();
    let modes = [
        ("fit", RankingMode::Fit),
        ("tiered_all", RankingMode::Tiered(TierFilter::All)),
        (
            "tiered_dream",
            RankingMode::Tiered(TierFilter::Category(PrestigeCategory::Dream)),
        ),
    ];

    let mut group = c.benchmark_group("rank_institutions");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Institution> = (0..*catalog_size).map(create_institution).collect();

        for (label, mode) in modes.iter() {
            group.bench_with_input(BenchmarkId::new(*label, catalog_size), catalog_size, |b, _| {
                b.iter(|| rank_institutions(black_box(&student), black_box(&catalog), black_box(mode)));
            });
        }
    }

    group.finish();
}

fn bench_payload_mapping(c: &mut Criterion) {
    let colleges: Vec<_> = (0..100)
        .map(|i| {
            json!({
                "University Name": format!("University {}", i),
                "Ranking": i + 1,
                "min_gre": "310",
                "IELTS": 6.5,
                "normalised_score": 70.0 + (i % 20) as f64
            })
        })
        .collect();
    let payload = json!({ "results": { "colleges": colleges } });

    c.bench_function("institutions_from_payload_100_records", |b| {
        b.iter(|| institutions_from_payload(black_box(&payload)));
    });
}

criterion_group!(
    benches,
    bench_normalization,
    bench_match_score,
    bench_ranking,
    bench_payload_mapping
);

criterion_main!(benches);
