//! Counter factory.
//!
//! `create_counter` is the closure form: the count lives inside the returned
//! closure and nothing else can see it. `Counter` is the same thing as a
//! struct with a private field.

/// Returns a closure that increments a private count and returns the new value.
///
/// ```
/// use closures::create_counter;
///
/// let mut counter_a = create_counter();
/// let mut counter_b = create_counter();
///
/// assert_eq!(counter_a(), 1);
/// assert_eq!(counter_a(), 2);
/// assert_eq!(counter_b(), 1);
/// ```
pub fn create_counter() -> impl FnMut() -> u64 {
    let mut counter = 0;
    move || {
        counter += 1;
        counter
    }
}

/// A counter whose value can only be observed by incrementing it.
///
/// ```compile_fail
/// let counter = closures::Counter::new();
/// let peek = counter.count;
/// ```
#[derive(Default)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Counter { count: 0 }
    }

    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }
}

/// Each `next()` is an increment, so the sequence never ends.
impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.increment())
    }
}
