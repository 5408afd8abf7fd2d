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
        enumerating_kuhn_spots,
        encoding_kuhn_uniform,
        decoding_kuhn_table,
        simulating_kuhn_episode,
        playing_rps_league,
}

fn enumerating_kuhn_spots(c: &mut criterion::Criterion) {
    c.bench_function("enumerate every Kuhn decision spot", |b| {
        b.iter(|| Spot::<Kuhn>::enumerate().len())
    });
}

fn encoding_kuhn_uniform(c: &mut criterion::Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let ref path = dir.path().join("kuhn.csv");
    c.bench_function("encode a uniform Kuhn policy table", |b| {
        b.iter(|| encode::<Kuhn, _>(&Uniform, path).expect("encode"))
    });
}

fn decoding_kuhn_table(c: &mut criterion::Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let ref path = dir.path().join("kuhn.csv");
    encode::<Kuhn, _>(&Uniform, path).expect("encode");
    c.bench_function("decode a Kuhn policy table", |b| {
        b.iter(|| decode::<Kuhn>(path).expect("decode"))
    });
}

fn simulating_kuhn_episode(c: &mut criterion::Criterion) {
    let ref table = TabularPolicy::<Kuhn>::new();
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("simulate a Kuhn episode", |b| {
        b.iter(|| simulate::<Kuhn, _>(table, table, rng).expect("episode"))
    });
}

fn playing_rps_league(c: &mut criterion::Criterion) {
    let roster = Roster::<Rps>::new(
        ["a", "b", "c", "d"]
            .into_iter()
            .map(|team| (team.to_string(), [TabularPolicy::new(), TabularPolicy::new()])),
    );
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("play a 4-team RPS league over 20 rounds", |b| {
        b.iter(|| Tournament::default().play(&roster, rng).expect("league"))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use roboarena::arena::*;
use roboarena::codec::*;
use roboarena::game::*;
use roboarena::policy::*;
