use std::{
  sync::{mpsc, Arc, Mutex},
  thread,
  time::Duration,
};

use rxpipe::prelude::*;

#[derive(Debug, PartialEq)]
enum Event {
  Next(i32),
  Error(String),
  Complete,
}

fn collect(source: &Observable<i32, String>) -> (Disposable, Arc<Mutex<Vec<Event>>>) {
  let events = Arc::new(Mutex::new(vec![]));
  let (c_next, c_err, c_complete) = (events.clone(), events.clone(), events.clone());
  let disposable = source.subscribe_all(
    move |v| c_next.lock().unwrap().push(Event::Next(v)),
    move |e| c_err.lock().unwrap().push(Event::Error(e)),
    move || c_complete.lock().unwrap().push(Event::Complete),
  );
  (disposable, events)
}

#[test]
fn items_arrive_in_order_then_one_completion() {
  let source = observable::from_iter(1..=5).map(|v| v * 2).filter(|v| *v > 4);
  let (_, events) = collect(&source);
  assert_eq!(
    *events.lock().unwrap(),
    vec![Event::Next(6), Event::Next(8), Event::Next(10), Event::Complete]
  );
}

#[test]
fn flat_map_delivers_every_inner_item() {
  let source: Observable<i32, String> = observable::from_iter(1..=3)
    .flat_map(|n| observable::from_iter(vec![n * 10, n * 20]).subscribe_on(scheduler::io()));
  let (tx, rx) = mpsc::channel();
  source.subscribe_next(move |v| tx.send(v).unwrap());

  let mut values: Vec<i32> = (0..6)
    .map(|_| rx.recv_timeout(Duration::from_secs(5)).unwrap())
    .collect();
  values.sort_unstable();
  assert_eq!(values, vec![10, 20, 20, 30, 40, 60]);
}

#[test]
fn producer_error_follows_emitted_items() {
  let source = observable::create(|mut subscriber: Subscriber<i32, String>| {
    subscriber.next(1);
    subscriber.next(2);
    Err("Simulated error".to_owned())
  });
  let (_, events) = collect(&source);
  assert_eq!(
    *events.lock().unwrap(),
    vec![Event::Next(1), Event::Next(2), Event::Error("Simulated error".to_owned())]
  );
}

#[test]
fn dispose_before_first_item() {
  let (start_tx, start_rx) = mpsc::channel::<()>();
  let start_rx = Arc::new(Mutex::new(start_rx));
  let (done_tx, done_rx) = mpsc::channel();

  let source = observable::create(move |mut subscriber: Subscriber<i32, String>| {
    start_rx.lock().unwrap().recv().ok();
    subscriber.next(1);
    subscriber.complete();
    done_tx.send(()).unwrap();
    Ok(())
  })
  .subscribe_on(scheduler::io());

  let (disposable, events) = collect(&source);
  disposable.dispose();
  start_tx.send(()).unwrap();
  done_rx.recv_timeout(Duration::from_secs(5)).unwrap();

  assert!(events.lock().unwrap().is_empty());
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn infinite_producer_stops_after_dispose() {
  let (stopped_tx, stopped_rx) = mpsc::channel();
  let source = observable::create(move |mut subscriber: Subscriber<u64, String>| {
    let mut emitted = 0;
    while !subscriber.is_closed() {
      subscriber.next(emitted);
      emitted += 1;
      thread::sleep(Duration::from_millis(5));
    }
    stopped_tx.send(emitted).unwrap();
    Ok(())
  });

  let received = Arc::new(Mutex::new(0));
  let c_received = received.clone();
  let disposable = source
    .subscribe_on(scheduler::io())
    .observe_on(scheduler::computation())
    .subscribe_next(move |_| *c_received.lock().unwrap() += 1);

  thread::sleep(Duration::from_millis(50));
  disposable.dispose();
  let emitted = stopped_rx.recv_timeout(Duration::from_secs(5)).unwrap();
  thread::sleep(Duration::from_millis(20));

  assert!(emitted > 0);
  assert!(*received.lock().unwrap() <= emitted);
}

#[test]
fn two_subscriptions_run_independently() {
  let runs = Arc::new(Mutex::new(0));
  let c_runs = runs.clone();
  let source = observable::create(move |mut subscriber: Subscriber<i32, String>| {
    *c_runs.lock().unwrap() += 1;
    subscriber.next(7);
    subscriber.complete();
    Ok(())
  });

  let (first, first_events) = collect(&source);
  let (second, second_events) = collect(&source);
  first.dispose();

  assert_eq!(*runs.lock().unwrap(), 2);
  assert!(!second.is_disposed());
  assert_eq!(*first_events.lock().unwrap(), vec![Event::Next(7), Event::Complete]);
  assert_eq!(*second_events.lock().unwrap(), vec![Event::Next(7), Event::Complete]);
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn single_thread_observe_on_keeps_order() {
  let (tx, rx) = mpsc::channel();
  let c_tx = tx.clone();
  observable::from_iter::<_, String>(0..100)
    .subscribe_on(scheduler::io())
    .observe_on(scheduler::single())
    .subscribe_all(move |v| tx.send(Some(v)).unwrap(), |_| {}, move || c_tx.send(None).unwrap());

  let mut values = vec![];
  while let Some(v) = rx.recv_timeout(Duration::from_secs(5)).unwrap() {
    values.push(v);
  }
  assert_eq!(values, (0..100).collect::<Vec<_>>());
}

#[test]
fn guard_disposes_when_scope_ends() {
  let (tx, rx) = mpsc::channel::<i32>();
  let rx = Arc::new(Mutex::new(rx));
  let received = Arc::new(Mutex::new(vec![]));
  let c_received = received.clone();

  let source = observable::create(move |mut subscriber: Subscriber<i32, String>| {
    let rx = rx.clone();
    thread::spawn(move || {
      while let Ok(v) = rx.lock().unwrap().recv() {
        subscriber.next(v);
      }
    });
    Ok(())
  });

  {
    let _guard = source
      .subscribe_next(move |v| c_received.lock().unwrap().push(v))
      .unsubscribe_when_dropped();
    tx.send(1).unwrap();
    thread::sleep(Duration::from_millis(50));
  }
  tx.send(2).unwrap();
  thread::sleep(Duration::from_millis(50));

  assert_eq!(*received.lock().unwrap(), vec![1]);
}
