use crate::{observable::Observable, scheduler::Scheduler};

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Moves the whole producer side onto `scheduler`.
  ///
  /// Subscribing returns as soon as the subscription has been handed to the
  /// scheduler; the upstream is subscribed, and runs, on a worker.
  pub fn subscribe_on<SD>(&self, scheduler: SD) -> Observable<Item, Err>
  where
    SD: Scheduler + 'static,
  {
    let source = self.clone();
    Observable::create(move |subscriber| {
      let source = source.clone();
      scheduler.execute(Box::new(move || {
        source.subscribe(subscriber);
      }));
      Ok(())
    })
  }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;
  use std::{
    sync::{mpsc, Arc, Mutex},
    time::Duration,
  };

  #[cfg(feature = "futures-scheduler")]
  #[test]
  fn thread_pool() {
    let (tx, rx) = mpsc::channel();
    let c_tx = tx.clone();
    let threads = Arc::new(Mutex::new(vec![]));
    let c_threads = threads.clone();

    observable::from_iter::<_, ()>(1..5).subscribe_on(scheduler::computation()).subscribe_all(
      move |v| {
        c_threads.lock().unwrap().push(std::thread::current().id());
        tx.send(Some(v)).unwrap();
      },
      |_| {},
      move || c_tx.send(None).unwrap(),
    );

    let received: Vec<_> =
      (0..5).map(|_| rx.recv_timeout(Duration::from_secs(5)).unwrap()).collect();
    assert_eq!(received, vec![Some(1), Some(2), Some(3), Some(4), None]);
    assert!(threads.lock().unwrap().iter().all(|id| *id != std::thread::current().id()));
  }

  #[test]
  fn returns_before_producer_runs() {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let release_rx = Arc::new(Mutex::new(release_rx));

    let source = observable::create(move |mut subscriber: Subscriber<i32, ()>| {
      release_rx.lock().unwrap().recv().unwrap();
      subscriber.next(1);
      Ok(())
    });
    source.subscribe_on(IoScheduler::new().unwrap()).subscribe_next(move |v| {
      started_tx.send(v).unwrap();
    });

    // the producer is still blocked, yet subscribe has already returned.
    assert!(started_rx.try_recv().is_err());
    release_tx.send(()).unwrap();
    assert_eq!(started_rx.recv_timeout(Duration::from_secs(5)).unwrap(), 1);
  }

  #[test]
  fn producer_error_reaches_observer() {
    let (tx, rx) = mpsc::channel();
    observable::create(|_: Subscriber<i32, String>| Err("producer failed".to_owned()))
      .subscribe_on(scheduler::io())
      .subscribe_err(|_| {}, move |e| tx.send(e).unwrap());

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "producer failed");
  }

  #[test]
  fn dispose_before_start() {
    let hits = Arc::new(Mutex::new(0));
    let c_hits = hits.clone();
    let (done_tx, done_rx) = mpsc::channel::<()>();
    let (gate_tx, gate_rx) = mpsc::channel::<()>();
    let gate_rx = Arc::new(Mutex::new(gate_rx));
    let done_tx = Arc::new(Mutex::new(done_tx));

    let source = observable::create(move |mut subscriber: Subscriber<i32, ()>| {
      gate_rx.lock().unwrap().recv().unwrap();
      for v in 0..10 {
        subscriber.next(v);
      }
      subscriber.complete();
      done_tx.lock().unwrap().send(()).unwrap();
      Ok(())
    });

    let d = source.subscribe_on(scheduler::io()).subscribe_all(
      move |_| *c_hits.lock().unwrap() += 1,
      |_| {},
      || {},
    );
    d.dispose();
    gate_tx.send(()).unwrap();
    done_rx.recv_timeout(Duration::from_secs(5)).unwrap();

    assert_eq!(*hits.lock().unwrap(), 0);
  }
}
