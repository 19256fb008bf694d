use anyhow::Result;
use chrono::Utc;
use std::{sync::Arc, thread};
use structopt::StructOpt;

pub const MAX_CAPACITY: usize = 10_000;
pub const MAX_ITEMS: usize = 1_000_000;
/// Produced items are drawn from 0..ITEM_BOUND.
pub const ITEM_BOUND: i32 = 1000;

// println that is thread safe
macro_rules! threadprintln {
    ($($arg:tt)*) => {{
        use std::io::Write;
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, $($arg)*);
    }};
}

mod bounded_buffer;
mod consumer;
mod producer;

use bounded_buffer::BoundedBuffer;

fn in_range(start: usize, end: usize) -> Box<dyn Fn(String) -> std::result::Result<(), String>> {
    Box::new(move |string| match string.parse::<usize>() {
        Ok(size) if (start..=end).contains(&size) => Ok(()),
        _ => Err(format!("Not in range [{}, {}]", start, end)),
    })
}

#[derive(Debug, StructOpt)]
#[structopt()]
struct Cli {
    /// Number of slots in the shared buffer
    #[structopt(short, long, default_value = "100", validator = in_range(1, MAX_CAPACITY))]
    capacity: usize,

    /// Number of items to produce before shutting down
    #[structopt(short = "n", long, default_value = "1000", validator = in_range(1, MAX_ITEMS))]
    items: u64,
}

fn main() -> Result<()> {
    let Cli { capacity, items } = Cli::from_args();

    let shared = Arc::new(BoundedBuffer::new(capacity));

    let start_time = Utc::now().time();

    let producer_handle = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || producer::producer(shared, items))
    };

    let consumer_handle = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || consumer::consumer(shared))
    };

    producer_handle.join().unwrap()?;

    // Everything is queued; closing lets the consumer drain the backlog
    // and exit instead of blocking on an empty buffer forever.
    shared.close();
    consumer_handle.join().unwrap()?;

    let end_time = Utc::now().time();
    let diff = end_time - start_time;

    println!(
        "Time to run: {} seconds",
        diff.num_milliseconds() as f64 / 1000.0
    );

    Ok(())
}
