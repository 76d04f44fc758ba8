use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ini_edit::IniDocument;

fn synthetic_document(sections: usize, entries_per_section: usize) -> String {
    let mut text = String::from("# synthetic benchmark document\n\n");
    for s in 0..sections {
        text.push_str(&format!("[section_{s}]\n"));
        for e in 0..entries_per_section {
            if e % 4 == 0 {
                text.push_str(&format!("key_{e} = value_{e} # trailing note\n"));
            } else {
                text.push_str(&format!("key_{e} = value_{e}\n"));
            }
        }
        text.push('\n');
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [4, 16, 64].iter() {
        let text = synthetic_document(*size, 16);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(text).parse::<IniDocument>().unwrap());
        });
    }

    group.finish();
}

fn benchmark_dump(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump");

    for size in [4, 16, 64].iter() {
        let doc: IniDocument = synthetic_document(*size, 16).parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| black_box(doc).to_string());
        });
    }

    group.finish();
}

fn benchmark_lookup_and_set(c: &mut Criterion) {
    let doc: IniDocument = synthetic_document(64, 16).parse().unwrap();

    c.bench_function("get_deep", |b| {
        b.iter(|| black_box(&doc).get("key_15", "section_63"));
    });

    c.bench_function("set_existing", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut doc| doc.set("key_0", "changed", "section_32"),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_dump,
    benchmark_lookup_and_set
);
criterion_main!(benches);
