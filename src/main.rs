use env_logger::Builder;
use log::{error, info, LevelFilter};
use rusty_tables::puzzles::{is_anagram, two_sum};
use rusty_tables::{ChainedTable, HashTable, OpenAddressTable, UniversalTable};

const DEFAULT_SAMPLE_SIZE: usize = 100_000;

fn initialize_logger() {
    let mut builder: Builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();
    let _ = builder.try_init();
}

fn show<T>(table: &T, filiere: &str)
where
    T: HashTable<String, i32>,
{
    match table.search(&filiere.to_string()) {
        Some(eff) => println!("{} maps to {}", filiere, eff),
        None => println!("{} is not in the map", filiere),
    }
}

fn demo<T>(name: &str, mut numbers: T)
where
    T: HashTable<String, i32>,
{
    println!("------ {} ------", name);
    numbers.insert("ISLI".to_string(), 25);
    numbers.insert("GMS".to_string(), 60);
    numbers.insert("GME".to_string(), 40);
    numbers.insert("API".to_string(), 450);

    println!("Search for a key : ");
    show(&numbers, "API");
    show(&numbers, "GEC");

    println!("List of keys : ");
    for key in numbers.keys() {
        println!("{}", key);
    }
    println!("List of values : ");
    for value in numbers.values() {
        println!("{}", value);
    }

    numbers.delete(&"GMS".to_string());
    println!("After deleting GMS: {} entries", numbers.size());
}

/// Average insert, search and delete times of `table` over `samples`.
fn time<T>(name: &str, mut table: T, samples: &[u64])
where
    T: HashTable<u64, u64>,
{
    benchmarking::warm_up();

    let inserted = benchmarking::measure_function(|measurer| {
        table.clear();
        for sample in samples {
            measurer.measure(|| table.try_insert(*sample, *sample).is_ok());
        }
    });
    let searched = benchmarking::measure_function(|measurer| {
        for sample in samples {
            measurer.measure(|| table.search(sample).is_some());
        }
    });
    let deleted = benchmarking::measure_function(|measurer| {
        for sample in samples {
            measurer.measure(|| table.delete(sample).is_some());
        }
    });

    match (inserted, searched, deleted) {
        (Ok(inserted), Ok(searched), Ok(deleted)) => info!(
            "{}: capacity {}, insert {:?}, search {:?}, delete {:?}",
            name,
            table.capacity(),
            inserted.elapsed(),
            searched.elapsed(),
            deleted.elapsed()
        ),
        _ => error!("{}: benchmark failed", name),
    }
}

fn main() {
    initialize_logger();

    let sample_size: usize = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(e) => {
                error!("invalid sample size {:?}: {}", arg, e);
                std::process::exit(2);
            }
        },
        None => DEFAULT_SAMPLE_SIZE,
    };

    println!("------ This program exercises different implementations of hash tables -----");
    demo("ChainedTable", ChainedTable::<String, i32>::new());
    demo("UniversalTable", UniversalTable::<String, i32>::randomized());
    match OpenAddressTable::<String, i32>::with_capacity(17) {
        Ok(table) => demo("OpenAddressTable", table),
        Err(e) => error!("{}", e),
    }

    let numbers: [i64; 6] = [2, 7, 11, 15, 3, 6];
    match two_sum(&numbers, 9) {
        Some((i, j)) => println!("two_sum({:?}, 9) = ({}, {})", numbers, i, j),
        None => println!("two_sum({:?}, 9) has no solution", numbers),
    }
    for (first, second) in [("listen", "silent"), ("hello", "world"), ("Dormitory", "dirty room")] {
        println!("is_anagram({:?}, {:?}) = {}", first, second, is_anagram(first, second));
    }

    let samples: Vec<u64> = (0..sample_size).map(|_| rand::random::<u64>()).collect();
    time("ChainedTable", ChainedTable::<u64, u64>::new(), &samples);
    time("UniversalTable", UniversalTable::<u64, u64>::randomized(), &samples);
    match OpenAddressTable::<u64, u64>::with_capacity(sample_size.max(1) * 2 + 1) {
        Ok(table) => time("OpenAddressTable", table, &samples),
        Err(e) => error!("{}", e),
    }
}
