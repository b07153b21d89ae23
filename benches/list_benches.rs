use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use std::sync::{Arc, Barrier};
use std::thread;
use sync_linkedlist::linked_list::{SpinList, TicketList};
use sync_linkedlist::ListError;

const PREFILL: usize = 1_000;
const OPS_PER_ROUND: usize = 2_000;

// Enum to define the workload mix
enum Workload {
    WriteHeavy, // 80% writes, 20% reads
    ReadHeavy,  // 20% writes, 80% reads
    Mixed,      // 50% writes, 50% reads
}

impl Workload {
    fn write_ratio(&self) -> u32 {
        match self {
            Workload::WriteHeavy => 80,
            Workload::ReadHeavy => 20,
            Workload::Mixed => 50,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Workload::WriteHeavy => "write_heavy",
            Workload::ReadHeavy => "read_heavy",
            Workload::Mixed => "mixed",
        }
    }
}

/// The operations a benchmark round needs, independent of the lock backend.
trait BenchList: Send + Sync + 'static {
    fn create() -> Self;
    fn add(&self, value: u64) -> Result<(), ListError>;
    fn update(&self, index: usize, value: u64) -> Result<(), ListError>;
    fn get(&self, index: usize) -> Result<u64, ListError>;
}

macro_rules! impl_bench_list {
    ($list:ty) => {
        impl BenchList for $list {
            fn create() -> Self {
                let list = <$list>::new().expect("failed to create list");
                for i in 0..PREFILL as u64 {
                    list.add(&i).expect("failed to prefill list");
                }
                list
            }

            fn add(&self, value: u64) -> Result<(), ListError> {
                <$list>::add(self, &value)
            }

            fn update(&self, index: usize, value: u64) -> Result<(), ListError> {
                <$list>::update(self, index, &value)
            }

            fn get(&self, index: usize) -> Result<u64, ListError> {
                <$list>::get(self, index)
            }
        }
    };
}

impl_bench_list!(SpinList<u64>);
impl_bench_list!(TicketList<u64>);

fn list_benchmark<B: BenchList>(c: &mut Criterion, list_name: &str, threads: usize, workload: Workload) {
    let mut group = c.benchmark_group(format!("{}_{}_threads", list_name, threads));
    let write_ratio = workload.write_ratio();

    group.throughput(Throughput::Elements(OPS_PER_ROUND as u64));

    group.bench_function(BenchmarkId::new(workload.name(), PREFILL), |b| {
        b.iter_with_setup(
            || (Arc::new(B::create()), Arc::new(Barrier::new(threads))),
            |(list, barrier)| {
                thread::scope(|s| {
                    for _ in 0..threads {
                        let list = Arc::clone(&list);
                        let barrier = Arc::clone(&barrier);

                        s.spawn(move || {
                            let mut rng = rand::rng();
                            barrier.wait();
                            for i in 0..OPS_PER_ROUND / threads {
                                let index = rng.random_range(0..PREFILL);
                                let random_val = rng.random_range(0..100);

                                if random_val < write_ratio / 2 {
                                    list.add(i as u64).expect("add failed");
                                } else if random_val < write_ratio {
                                    list.update(index, i as u64).expect("update failed");
                                } else {
                                    black_box(list.get(index).expect("get failed"));
                                }
                            }
                        });
                    }
                });
            },
        );
    });

    group.finish();
}

fn spin_list_pressure(c: &mut Criterion) {
    for threads in [2, 4, 8] {
        list_benchmark::<SpinList<u64>>(c, "SpinList", threads, Workload::Mixed);
        list_benchmark::<SpinList<u64>>(c, "SpinList", threads, Workload::ReadHeavy);
        list_benchmark::<SpinList<u64>>(c, "SpinList", threads, Workload::WriteHeavy);
    }
}

fn ticket_list_pressure(c: &mut Criterion) {
    for threads in [2, 4, 8] {
        list_benchmark::<TicketList<u64>>(c, "TicketList", threads, Workload::Mixed);
        list_benchmark::<TicketList<u64>>(c, "TicketList", threads, Workload::ReadHeavy);
        list_benchmark::<TicketList<u64>>(c, "TicketList", threads, Workload::WriteHeavy);
    }
}

criterion_group!(benches, spin_list_pressure, ticket_list_pressure);
criterion_main!(benches);
