use segmented_deque::{Queue, SegmentedDeque, Stack, BLOCK_SIZE};

#[test]
fn queue_interleaved_traffic() {
    let mut queue = Queue::new();
    let mut next_in = 0;
    let mut next_out = 0;

    for round in 0..50 {
        for _ in 0..(BLOCK_SIZE + round) {
            queue.push(next_in);
            next_in += 1;
        }
        for _ in 0..BLOCK_SIZE {
            assert_eq!(queue.pop(), Some(next_out));
            next_out += 1;
        }
    }

    assert_eq!(queue.len(), next_in - next_out);
    assert_eq!(queue.front(), Some(&next_out));
    assert_eq!(queue.back(), Some(&(next_in - 1)));
    assert!(queue.iter().copied().eq(next_out..next_in));
}

#[test]
fn queue_drains_to_empty() {
    let mut queue: Queue<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

    let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();

    assert_eq!(drained, ["a", "b", "c"]);
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.front(), None);
}

#[test]
fn stack_reverses_input() {
    let mut stack: Stack<_> = (0..1000).collect();
    stack.extend(1000..1010);

    let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();

    assert_eq!(popped, (0..1010).rev().collect::<Vec<_>>());
    assert!(stack.is_empty());
}

#[test]
fn stack_and_queue_agree_with_deque() {
    let deque: SegmentedDeque<_> = (0..300).collect();
    let queue: Queue<_> = deque.iter().copied().collect();
    let stack: Stack<_> = deque.iter().copied().collect();

    assert_eq!(queue.to_vec(), deque.to_vec());
    assert_eq!(stack.to_vec(), deque.to_vec());
    assert_eq!(queue.front(), deque.front());
    assert_eq!(stack.top(), deque.back());
}

#[test]
fn adapters_format_as_lists() {
    let queue: Queue<_> = [1, 2].into_iter().collect();
    let stack: Stack<_> = [1, 2].into_iter().collect();

    assert_eq!(format!("{queue:?}"), "[1, 2]");
    assert_eq!(format!("{stack:?}"), "[1, 2]");
}
