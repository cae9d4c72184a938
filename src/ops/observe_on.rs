use crate::{observable::Observable, observer::Observer, scheduler::Scheduler};

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Delivers every notification on `scheduler`.
  ///
  /// The upstream is still subscribed on the caller. Each `next`, the
  /// `error` and the `complete` become separate tasks, so delivery order is
  /// only kept when the scheduler runs tasks one at a time, as
  /// [`SingleThreadScheduler`](crate::scheduler::SingleThreadScheduler)
  /// does.
  pub fn observe_on<SD>(&self, scheduler: SD) -> Observable<Item, Err>
  where
    SD: Scheduler + Clone + 'static,
  {
    let source = self.clone();
    Observable::create(move |subscriber| {
      source.subscribe(ObserveOnObserver { observer: subscriber, scheduler: scheduler.clone() });
      Ok(())
    })
  }
}

pub struct ObserveOnObserver<O, SD> {
  observer: O,
  scheduler: SD,
}

impl<O, SD> ObserveOnObserver<O, SD>
where
  O: Clone + Send + 'static,
  SD: Scheduler,
{
  fn schedule(&self, task: impl FnOnce(O) + Send + 'static) {
    let observer = self.observer.clone();
    self.scheduler.execute(Box::new(move || task(observer)));
  }
}

impl<Item, Err, O, SD> Observer<Item, Err> for ObserveOnObserver<O, SD>
where
  Item: Send + 'static,
  Err: Send + 'static,
  O: Observer<Item, Err> + Clone + Send + 'static,
  SD: Scheduler,
{
  fn next(&mut self, value: Item) { self.schedule(move |mut observer| observer.next(value)); }

  fn error(&mut self, err: Err) { self.schedule(move |mut observer| observer.error(err)); }

  fn complete(&mut self) { self.schedule(|mut observer| observer.complete()); }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
