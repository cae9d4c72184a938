//! Example: a tour of the pipeline
//!
//! Expands items with `flat_map`, recovers from a producer error, and stops an
//! infinite producer that runs on the io scheduler while its items are
//! delivered on the computation scheduler.

use std::{thread, time::Duration};

use rxpipe::prelude::*;

fn main() {
  env_logger::builder().filter_level(log::LevelFilter::Info).init();

  log::info!("Example 1: flat_map");
  observable::from_iter::<_, String>(1..=3)
    .flat_map(|n| {
      observable::create(move |mut subscriber: Subscriber<i32, String>| {
        thread::sleep(Duration::from_millis(100));
        subscriber.next(n * 10);
        subscriber.next(n * 20);
        subscriber.complete();
        Ok(())
      })
    })
    .subscribe_all(
      |v| log::info!("flat_map result: {}", v),
      |e| log::error!("error: {}", e),
      || log::info!("flat_map completed"),
    );

  log::info!("Example 2: error handling");
  observable::create(|mut subscriber: Subscriber<i32, String>| {
    subscriber.next(1);
    subscriber.next(2);
    Err("simulated error".to_owned())
  })
  .subscribe_all(
    |v| log::info!("received: {}", v),
    |e| log::info!("error handled: {}", e),
    || log::info!("not reached, the source failed"),
  );

  log::info!("Example 3: disposing an infinite stream");
  let infinite = observable::create(|mut subscriber: Subscriber<u64, String>| {
    let mut i = 0;
    // poll the subscriber, otherwise the producer outlives the subscription
    while !subscriber.is_closed() {
      subscriber.next(i);
      i += 1;
      thread::sleep(Duration::from_millis(100));
    }
    log::info!("producer stopped after {} items", i);
    Ok(())
  });

  let disposable = infinite
    .subscribe_on(scheduler::io())
    .observe_on(scheduler::computation())
    .subscribe_all(
      |v| log::info!("infinite: {}", v),
      |e| log::error!("error: {}", e),
      || log::info!("not reached, the source never completes"),
    );

  thread::sleep(Duration::from_millis(500));
  disposable.dispose();
  log::info!("infinite stream disposed");
  thread::sleep(Duration::from_millis(300));
}
