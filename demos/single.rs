//! Prints the outcome of `single` and `single_or_default` on live sources.
//!
//! ```text
//! cargo run --example single
//! ```

use std::fmt::Display;

use rxsingle::prelude::*;

/// Observer printing every notification with a name prefix.
struct PrintObserver {
  name: &'static str,
}

impl<Item: Display, Err: Display> Observer<Item, Err> for PrintObserver {
  fn next(&mut self, value: Item) { println!("{}: {}", self.name, value); }

  fn error(self, err: Err) { println!("{}: Error: {}", self.name, err); }

  fn complete(self) { println!("{}: Completed", self.name); }

  fn is_closed(&self) -> bool { false }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  tokio::task::LocalSet::new()
    .run_until(async {
      let values = || Local::interval(Duration::from_millis(100));

      values()
        .take(10)
        .single(|v| *v == 5)
        .subscribe_with(PrintObserver { name: "Single1" });

      // Never emits: the source never completes.
      let single2 = values()
        .single(|v| *v == 5)
        .subscribe_with(PrintObserver { name: "Single2" });

      Local::empty::<i32>()
        .single_or_default(-1)
        .subscribe_with(PrintObserver { name: "SingleOrDefault" });

      tokio::time::sleep(Duration::from_millis(1500)).await;
      single2.unsubscribe();
    })
    .await;

  // SingleOrDefault: -1
  // SingleOrDefault: Completed
  // Single1: 5
  // Single1: Completed
}
