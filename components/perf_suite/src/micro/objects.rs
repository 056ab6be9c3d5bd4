//! Structs, methods, dynamic dispatch and a linked list

use std::hint::black_box;

struct SimpleClass {
    value: i64,
}

impl SimpleClass {
    fn new(value: i64) -> Self {
        Self { value }
    }

    fn get_value(&self) -> i64 {
        self.value
    }

    fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

struct TestClass {
    a: i64,
    b: i64,
}

impl TestClass {
    fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    fn compute(&self) -> i64 {
        self.a + self.b
    }
}

pub(crate) trait Speaker {
    fn name(&self) -> &str;

    fn speak(&self) -> String {
        format!("{} speaks", self.name())
    }
}

pub(crate) struct Parent {
    name: String,
}

impl Parent {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Speaker for Parent {
    fn name(&self) -> &str {
        &self.name
    }
}

pub(crate) struct Child {
    parent: Parent,
}

impl Child {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            parent: Parent::new(name),
        }
    }
}

impl Speaker for Child {
    fn name(&self) -> &str {
        self.parent.name()
    }

    fn speak(&self) -> String {
        format!("{} speaks loudly", self.name())
    }
}

pub(crate) struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn new(value: i64) -> Self {
        Self { value, next: None }
    }

    /// Link `node` after this one and return it
    pub(crate) fn add_next(&mut self, node: Node) -> &mut Node {
        self.next.insert(Box::new(node))
    }

    /// Walk the chain from this node, returning the number of nodes visited
    pub(crate) fn traverse(&self) -> u64 {
        let mut sum_val = 0_i64;
        let mut current = Some(self);
        let mut count = 0;
        while let Some(node) = current {
            sum_val += node.value;
            current = node.next.as_deref();
            count += 1;
        }
        black_box(sum_val);
        count
    }
}

impl Drop for Node {
    // Unlink iteratively so long chains don't recurse on drop.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

struct Calculator {
    value: i64,
}

impl Calculator {
    fn new() -> Self {
        Self { value: 0 }
    }

    fn add(&mut self, n: i64) {
        self.value = self.value.wrapping_add(n);
    }

    fn mul(&mut self, n: i64) {
        self.value = self.value.wrapping_mul(n);
    }

    fn get(&self) -> i64 {
        self.value
    }
}

pub(crate) struct Counter {
    value: i64,
}

impl Counter {
    pub(crate) fn new(start: i64) -> Self {
        Self { value: start }
    }

    pub(crate) fn increment(&mut self) {
        self.value += 1;
    }

    pub(crate) fn get_value(&self) -> i64 {
        self.value
    }
}

pub(crate) struct Controller {
    counter: Counter,
}

impl Controller {
    pub(crate) fn new() -> Self {
        Self {
            counter: Counter::new(0),
        }
    }

    pub(crate) fn update(&mut self) -> i64 {
        self.counter.increment();
        self.counter.get_value()
    }
}

pub(crate) fn compute(x: i64) -> i64 {
    if x < 0 {
        0
    } else if x > 100 {
        100
    } else {
        x * 2
    }
}

pub(crate) struct Processor {
    total: i64,
}

impl Processor {
    pub(crate) fn new() -> Self {
        Self { total: 0 }
    }

    pub(crate) fn process(&mut self, value: i64) {
        self.total += compute(value);
    }

    pub(crate) fn get_total(&self) -> i64 {
        self.total
    }
}

/// Setter and getter on one long-lived object
pub fn class_creation() -> u64 {
    let mut count = 0;
    let mut obj = SimpleClass::new(0);
    for i in 0..10000_i64 {
        black_box(&mut obj).set_value(i);
        let v = black_box(&obj).get_value();
        black_box(v);
        count += 2;
    }
    count
}

/// A fresh object per iteration
pub fn multiple_objects() -> u64 {
    let mut count = 0;
    for i in 0..1000_i64 {
        let obj = black_box(TestClass::new(i, i + 1));
        let result = obj.compute();
        black_box(result);
        count += 1;
    }
    count
}

/// Overridden trait method called through a trait object
pub fn inheritance() -> u64 {
    let mut count = 0;
    let child = Child::new("Child");
    let speaker: &dyn Speaker = black_box(&child);
    for _ in 0..10000 {
        let result = speaker.speak();
        black_box(result);
        count += 1;
    }
    count
}

/// Build a 1000-node chain, then walk it
pub fn linked_list() -> u64 {
    let mut count = 0;
    let mut head = Node::new(0);
    let mut current = &mut head;
    for i in 1..1000_i64 {
        current = current.add_next(Node::new(i));
        count += 1;
    }
    let traversed = head.traverse();
    count + traversed
}

/// Three mutating and reading methods per iteration
pub fn class_methods() -> u64 {
    let mut count = 0;
    let mut calc = Calculator::new();
    for _ in 0..10000 {
        let calc_ref = black_box(&mut calc);
        calc_ref.add(1);
        calc_ref.mul(2);
        let v = calc_ref.get();
        black_box(v);
        count += 3;
    }
    count
}

/// Method on an object that delegates to an owned object
pub fn nested_classes() -> u64 {
    let mut count = 0;
    let mut controller = Controller::new();
    for _ in 0..10000 {
        let v = black_box(&mut controller).update();
        black_box(v);
        count += 1;
    }
    count
}

/// Free function, struct method and accumulation together
pub fn combined() -> u64 {
    let mut count = 0;
    let mut processor = Processor::new();
    for i in 0..10000_i64 {
        black_box(&mut processor).process(compute(i));
        count += 1;
    }
    let total = processor.get_total();
    black_box(total);
    count + 1
}
