use crate::bounded_buffer::BoundedBuffer;
use crate::ITEM_BOUND;
use anyhow::{Context, Result};
use rand::Rng;
use std::sync::Arc;

pub fn producer(shared: Arc<BoundedBuffer<i32>>, items: u64) -> Result<()> {
    for _ in 0..items {
        let item = produce_item();

        // Blocks while the buffer is full; fails only if the buffer was
        // closed underneath us.
        shared
            .insert(item)
            .context("buffer closed before all items were produced")?;
    }

    Ok(())
}

fn produce_item() -> i32 {
    let item = rand::thread_rng().gen_range(0..ITEM_BOUND);
    threadprintln!("produced {}", item);
    item
}
