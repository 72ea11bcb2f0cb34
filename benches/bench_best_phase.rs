// benches/bench_best_phase.rs
use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, Criterion, PlotConfiguration,
};
use junction_sim::flow_analyzer::priority::best_phase;
use junction_sim::simulation_engine::approaches::Approach;
use junction_sim::simulation_engine::intersections::Intersection;
use junction_sim::simulation_engine::vehicles::Vehicle;
use std::time::Duration;

const ROUTES: [(Approach, Approach); 4] = [
    (Approach::North, Approach::South),
    (Approach::East, Approach::North),
    (Approach::South, Approach::West),
    (Approach::West, Approach::West),
];

// Helper function to build a junction with a given number of queued vehicles.
fn create_loaded_intersection(num_vehicles: usize) -> Intersection {
    let mut intersection = Intersection::new();
    for n in 0..num_vehicles {
        let (start, end) = ROUTES[n % ROUTES.len()];
        let mut vehicle = Vehicle::new(format!("vehicle{}", n), start, end);
        vehicle.waiting_for = (n % 17) as u32;
        intersection.enqueue(vehicle);
    }
    intersection
}

fn bench_best_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_phase");

    // Increase sample size and extend measurement time for more detailed stats.
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(2));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    // Benchmark the evaluation over 16, 64, and 256 queued vehicles.
    for &size in [16, 64, 256].iter() {
        group.bench_function(format!("size_{}", size), |b| {
            let intersection = create_loaded_intersection(size);
            b.iter(|| black_box(best_phase(&intersection)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_best_phase);
criterion_main!(benches);
