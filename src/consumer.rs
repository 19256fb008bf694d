use crate::bounded_buffer::BoundedBuffer;
use anyhow::Result;
use std::sync::Arc;

pub fn consumer(shared: Arc<BoundedBuffer<i32>>) -> Result<()> {
    loop {
        let item = match shared.remove() {
            Ok(item) => item,
            // Closed and drained: the producer is done, so are we.
            Err(_) => return Ok(()),
        };

        consume_item(item);
    }
}

fn consume_item(item: i32) {
    threadprintln!("consumed {}", item);
}
