use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::Path;

use ftsforge::core::config::{BuildConfig, ScriptSource};
use ftsforge::pipeline::context::BuildContext;
use ftsforge::pipeline::plan::BuildPlan;

/// Helper to stage a buildable base tree
fn stage_base_tree(image_root: &Path) {
    fs::create_dir_all(image_root.join("share/extension")).unwrap();
    fs::write(image_root.join("version"), "16").unwrap();
    fs::write(
        image_root.join("share/extension/pgroonga.control"),
        "comment = 'full text search'\n",
    )
    .unwrap();
}

/// Helper to stage every build-context input under one temp dir
fn stage_inputs(root: &Path) -> BuildConfig {
    let package_dir = root.join("packages/hunspell-en-us");
    fs::create_dir_all(&package_dir).unwrap();
    fs::write(package_dir.join("en_US.aff"), "SET UTF-8\n".repeat(64)).unwrap();
    fs::write(package_dir.join("en_US.dic"), "search\n".repeat(4096)).unwrap();

    let stopword_source = root.join("fts_english.stop");
    fs::write(&stopword_source, "a\nan\nthe\nis\nof\n".repeat(128)).unwrap();

    let create_db = root.join("create-db.sql");
    fs::write(&create_db, "CREATE DATABASE app OWNER app;\n").unwrap();
    let enable_ext = root.join("enable-extension.sql");
    fs::write(&enable_ext, "CREATE EXTENSION IF NOT EXISTS pgroonga;\n").unwrap();

    let mut config = BuildConfig::default();
    config.package_source = root.join("packages");
    config.stopword_source = stopword_source;
    config.scripts = vec![
        ScriptSource::new("create-db", create_db),
        ScriptSource::new("enable-extension", enable_ext).after("create-db"),
    ];
    config
}

/// Benchmark declared-order validation of the standard plan
fn bench_plan_validation(c: &mut Criterion) {
    let plan = BuildPlan::standard();

    c.bench_function("standard_plan_validation", |b| {
        b.iter(|| black_box(plan.validate().is_ok()));
    });
}

/// Benchmark a full image build into a fresh root
fn bench_full_build(c: &mut Criterion) {
    let tmp = tempfile::tempdir().unwrap();
    let config = stage_inputs(tmp.path());

    c.bench_function("full_image_build", |b| {
        let mut iteration = 0u64;
        b.iter(|| {
            let root = tmp.path().join(format!("image-{}", iteration));
            iteration += 1;
            stage_base_tree(&root);

            let mut ctx = BuildContext::new(config.clone(), root).unwrap();
            BuildPlan::standard().execute(&mut ctx).unwrap();
        });
    });
}

criterion_group!(benches, bench_plan_validation, bench_full_build);
criterion_main!(benches);
