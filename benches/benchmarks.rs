criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_kuhn_tree,
        building_leduc_tree,
        enumerating_leduc_policy,
        computing_kuhn_infosets,
        computing_leduc_reach,
}

fn building_kuhn_tree(c: &mut criterion::Criterion) {
    c.bench_function("build the Kuhn history tree", |b| {
        b.iter(|| HistoryTree::new(KuhnPoker::default(), 0))
    });
}

fn building_leduc_tree(c: &mut criterion::Criterion) {
    c.bench_function("build the Leduc history tree", |b| {
        b.iter(|| HistoryTree::new(LeducPoker::default(), 0))
    });
}

fn enumerating_leduc_policy(c: &mut criterion::Criterion) {
    c.bench_function("enumerate a uniform Leduc policy", |b| {
        b.iter(|| TabularPolicy::uniform(&LeducPoker::default()))
    });
}

fn computing_kuhn_infosets(c: &mut criterion::Criterion) {
    let tree = HistoryTree::new(KuhnPoker::default(), 0).unwrap();
    let policy = TabularPolicy::uniform(&KuhnPoker::default());
    c.bench_function("group Kuhn information sets", |b| {
        b.iter(|| infosets(&tree, 0, &policy))
    });
}

fn computing_leduc_reach(c: &mut criterion::Criterion) {
    let tree = HistoryTree::new(LeducPoker::default(), 1).unwrap();
    let policy = TabularPolicy::uniform(&LeducPoker::default());
    c.bench_function("compute Leduc counterfactual reach", |b| {
        b.iter(|| Counterfactual::new(&tree, 1, &policy).map(|reach| reach.decisions().count()))
    });
}

use histree::games::KuhnPoker;
use histree::games::LeducPoker;
use histree::*;
