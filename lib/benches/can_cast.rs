#[macro_use]
extern crate criterion;
#[macro_use]
extern crate deadhand;

use criterion::Criterion;
use deadhand::card::Card;
use deadhand::castability::CastStrategy;

fn criterion_function(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "can_cast 1*WUBRG from 8 dual lands",
        move |b, strategy| {
            // A five color hand where most of the work is in the dual lands
            let lands: Vec<Card> = vec![
                card!(">WU"),
                card!(">UB"),
                card!(">BR"),
                card!(">RG"),
                card!(">GW"),
                card!(">WB"),
                card!(">UR"),
                card!(">C"),
            ];
            let sources: Vec<&Card> = lands.iter().collect();
            let spell = card!("1*WUBRG");
            b.iter(|| strategy.can_cast(&spell, &sources, 8))
        },
        &[CastStrategy::Exhaustive, CastStrategy::Matching],
    );
}

criterion_group!(benches, criterion_function);
criterion_main!(benches);
