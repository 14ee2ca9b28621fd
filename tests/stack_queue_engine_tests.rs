use linear_viz::core::{StructureEngine, StructureKind};

#[test]
fn stack_pops_most_recent_push() {
    let mut engine = StructureEngine::new();
    engine.push_stack("a");
    engine.push_stack("b");

    assert_eq!(engine.peek_stack(), Some(&"b"));
    assert_eq!(engine.pop_stack(), Some("b"));
    assert_eq!(engine.pop_stack(), Some("a"));
    assert!(engine.is_empty(StructureKind::Stack));
}

#[test]
fn popping_empty_stack_returns_empty_signal() {
    let mut engine: StructureEngine<i32> = StructureEngine::new();
    assert_eq!(engine.pop_stack(), None);
    assert!(engine.is_empty(StructureKind::Stack));
    assert_eq!(engine.pop_stack(), None);
    assert!(engine.is_empty(StructureKind::Stack));
}

#[test]
fn queue_dequeues_oldest_enqueue() {
    let mut engine = StructureEngine::new();
    engine.enqueue_queue("a");
    engine.enqueue_queue("b");

    assert_eq!(engine.front_queue(), Some(&"a"));
    assert_eq!(engine.dequeue_queue(), Some("a"));
    assert_eq!(engine.dequeue_queue(), Some("b"));
    assert!(engine.is_empty(StructureKind::Queue));
}

#[test]
fn dequeuing_empty_queue_returns_empty_signal() {
    let mut engine: StructureEngine<String> = StructureEngine::new();
    assert_eq!(engine.dequeue_queue(), None);
    assert!(engine.is_empty(StructureKind::Queue));
}

#[test]
fn falsy_payloads_are_not_confused_with_empty() {
    let mut engine = StructureEngine::new();
    engine.push_stack(0);
    engine.enqueue_queue(0);

    assert_eq!(engine.pop_stack(), Some(0));
    assert_eq!(engine.dequeue_queue(), Some(0));
    assert_eq!(engine.pop_stack(), None);
    assert_eq!(engine.dequeue_queue(), None);
}

#[test]
fn structures_are_independent() {
    let mut engine = StructureEngine::new();
    engine.push_stack(1);
    engine.enqueue_queue(2);
    engine.insert_linked_list(3);

    assert_eq!(engine.pop_stack(), Some(1));
    assert_eq!(engine.len(StructureKind::Queue), 1);
    assert_eq!(engine.len(StructureKind::LinkedList), 1);
}

#[test]
fn reset_after_mixed_operations_empties_all() {
    let mut engine = StructureEngine::new();
    for value in 0..5 {
        engine.insert_linked_list(value);
        engine.push_stack(value);
        engine.enqueue_queue(value);
    }
    let _ = engine.pop_stack();
    let _ = engine.remove_linked_list(&3);

    engine.reset();

    for kind in StructureKind::ALL {
        assert!(engine.is_empty(kind), "{kind} should be empty after reset");
    }
    assert!(engine.linked_list().head().is_none());
}
