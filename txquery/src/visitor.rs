/// Receives matching transaction ids (or any intersection output) one at a
/// time, so engines never decide how results are stored.
pub trait Visitor<T> {
    fn visit(&mut self, value: T);
}

/// Counts matches without storing them.
pub struct Counter {
    count: usize,
}

impl<T> Visitor<T> for Counter {
    fn visit(&mut self, _value: T) {
        self.count += 1;
    }
}

impl Counter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects matches into a vector, in visit order.
pub struct VecWriter<T> {
    items: Vec<T>,
}

impl<T> VecWriter<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
        }
    }
}

impl<T> AsRef<[T]> for VecWriter<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<VecWriter<T>> for Vec<T> {
    fn from(value: VecWriter<T>) -> Self {
        value.items
    }
}

impl<T> Default for VecWriter<T> {
    fn default() -> Self {
        Self { items: Vec::default() }
    }
}

impl<T> Visitor<T> for VecWriter<T> {
    fn visit(&mut self, value: T) {
        self.items.push(value);
    }
}
