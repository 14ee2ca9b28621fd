use linear_viz::core::{Operation, StructureKind};
use linear_viz::layout::LayoutConfig;
use linear_viz::render::{CanvasState, NullRenderer, PrimitiveKind, Renderer, TaggedCanvas};
use linear_viz::{OperationOutcome, VisualizerSession, VizError, VizResult};

fn session() -> VisualizerSession<NullRenderer> {
    VisualizerSession::new(NullRenderer::default(), LayoutConfig::default()).expect("session init")
}

fn box_labels(session: &VisualizerSession<NullRenderer>, kind: StructureKind) -> Vec<String> {
    session
        .plan(kind)
        .expect("structure is drawn")
        .boxes()
        .map(|rect| rect.label.clone())
        .collect()
}

#[test]
fn new_session_draws_every_structure_empty() {
    let session = session();
    for kind in StructureKind::ALL {
        assert_eq!(session.canvas_state(kind), CanvasState::Drawn);
        assert!(session.engine().is_empty(kind));
        assert!(box_labels(&session, kind).is_empty());
    }
    assert_eq!(session.renderer().render_count, 1);
    assert_eq!(session.renderer().last_box_count, 0);
}

#[test]
fn insert_and_remove_redraw_the_list_immediately() {
    let mut session = session();
    for value in ["1", "2", "3"] {
        let outcome = session
            .apply(StructureKind::LinkedList, Operation::Insert, value)
            .expect("insert");
        assert!(outcome.is_mutation());
    }
    assert_eq!(box_labels(&session, StructureKind::LinkedList), vec!["3", "2", "1"]);

    let outcome = session
        .apply(StructureKind::LinkedList, Operation::Remove, "2")
        .expect("remove");
    assert_eq!(
        outcome,
        OperationOutcome::Removed {
            structure: StructureKind::LinkedList,
            value: "2".to_owned(),
        }
    );
    assert_eq!(box_labels(&session, StructureKind::LinkedList), vec!["3", "1"]);
    assert_eq!(session.engine().len(StructureKind::LinkedList), 2);
    assert_eq!(session.renderer().last_box_count, 2);
    assert_eq!(session.renderer().last_line_count, 2);
}

#[test]
fn missing_value_reports_not_found_without_changes() {
    let mut session = session();
    session
        .apply(StructureKind::LinkedList, Operation::Insert, "a")
        .expect("insert");
    let before = session.plan(StructureKind::LinkedList).cloned();

    let outcome = session
        .apply(StructureKind::LinkedList, Operation::Remove, "zzz")
        .expect("remove");

    assert!(matches!(outcome, OperationOutcome::NotFound { .. }));
    assert_eq!(outcome.to_string(), "zzz not found in the linked list");
    assert_eq!(session.plan(StructureKind::LinkedList).cloned(), before);
}

#[test]
fn pop_and_dequeue_on_empty_report_empty_structure() {
    let mut session = session();
    let popped = session
        .apply(StructureKind::Stack, Operation::Remove, "")
        .expect("pop");
    let dequeued = session
        .apply(StructureKind::Queue, Operation::Remove, "")
        .expect("dequeue");

    assert_eq!(
        popped,
        OperationOutcome::Empty {
            structure: StructureKind::Stack
        }
    );
    assert!(matches!(dequeued, OperationOutcome::Empty { .. }));
    assert!(session.engine().is_empty(StructureKind::Stack));
    assert!(session.engine().is_empty(StructureKind::Queue));
}

#[test]
fn stack_and_queue_removal_return_the_right_end() {
    let mut session = session();
    for value in ["a", "b"] {
        session
            .apply(StructureKind::Stack, Operation::Insert, value)
            .expect("push");
        session
            .apply(StructureKind::Queue, Operation::Insert, value)
            .expect("enqueue");
    }

    let popped = session
        .apply(StructureKind::Stack, Operation::Remove, "")
        .expect("pop");
    let dequeued = session
        .apply(StructureKind::Queue, Operation::Remove, "")
        .expect("dequeue");

    assert_eq!(
        popped,
        OperationOutcome::Removed {
            structure: StructureKind::Stack,
            value: "b".to_owned(),
        }
    );
    assert_eq!(
        dequeued,
        OperationOutcome::Removed {
            structure: StructureKind::Queue,
            value: "a".to_owned(),
        }
    );
    assert_eq!(box_labels(&session, StructureKind::Stack), vec!["a"]);
    assert_eq!(box_labels(&session, StructureKind::Queue), vec!["b"]);
}

#[test]
fn invalid_codes_are_reported_and_change_nothing() {
    let mut session = session();
    session.apply_codes(1, 1, "x").expect("insert by code");
    let renders_before = session.renderer().render_count;

    let bad_structure = session.apply_codes(9, 1, "y").expect("status");
    let bad_operation = session.apply_codes(1, 0, "y").expect("status");

    assert!(matches!(bad_structure, OperationOutcome::InvalidSelector { .. }));
    assert!(matches!(bad_operation, OperationOutcome::InvalidSelector { .. }));
    assert_eq!(bad_structure.structure(), None);
    assert!(bad_structure.to_string().starts_with("invalid option"));
    assert_eq!(session.engine().len(StructureKind::LinkedList), 1);
    assert_eq!(session.renderer().render_count, renders_before);
}

#[test]
fn named_selectors_map_to_structure_operations() {
    let mut session = session();
    session.apply_named("queue", "enqueue", "first").expect("enqueue");
    session.apply_named("queue", "enqueue", "second").expect("enqueue");
    let outcome = session.apply_named("queue", "dequeue", "").expect("dequeue");

    assert_eq!(
        outcome,
        OperationOutcome::Removed {
            structure: StructureKind::Queue,
            value: "first".to_owned(),
        }
    );
    assert!(matches!(
        session.apply_named("tree", "insert", "1").expect("status"),
        OperationOutcome::InvalidSelector { .. }
    ));
}

#[test]
fn mutation_replaces_only_its_own_plan() {
    let mut session = session();
    session
        .apply(StructureKind::Queue, Operation::Insert, "q")
        .expect("enqueue");
    let queue_plan = session.plan(StructureKind::Queue).cloned();

    session
        .apply(StructureKind::Stack, Operation::Insert, "s")
        .expect("push");

    assert_eq!(session.plan(StructureKind::Queue).cloned(), queue_plan);
    assert_eq!(
        session.canvas().primitive_count(),
        session.canvas().plans().map(|plan| plan.len()).sum::<usize>()
    );
    assert_eq!(session.renderer().last_box_count, 2);
}

#[test]
fn reset_leaves_only_header_and_terminal_labels() {
    let mut session = session();
    for value in ["1", "2", "3"] {
        session
            .apply(StructureKind::LinkedList, Operation::Insert, value)
            .expect("insert");
        session
            .apply(StructureKind::Stack, Operation::Insert, value)
            .expect("push");
        session
            .apply(StructureKind::Queue, Operation::Insert, value)
            .expect("enqueue");
    }

    session.reset().expect("reset");

    for kind in StructureKind::ALL {
        assert!(session.engine().is_empty(kind));
        let plan = session.plan(kind).expect("drawn after reset");
        assert_eq!(plan.count(PrimitiveKind::Box), 0);
        assert_eq!(plan.count(PrimitiveKind::Line), 0);
    }
    assert_eq!(session.renderer().last_text_count, 5);
}

#[test]
fn invalid_layout_config_is_rejected() {
    let err = VisualizerSession::new(
        NullRenderer::default(),
        LayoutConfig::default().with_font_size(0.0),
    )
    .err()
    .expect("zero font size must fail");
    assert!(matches!(err, VizError::InvalidLayout(_)));

    let mut session = session();
    assert!(
        session
            .set_layout_config(LayoutConfig::default().with_list_pitch(f64::NAN))
            .is_err()
    );
    assert_eq!(session.layout_config(), &LayoutConfig::default());
}

/// Accepts the first `budget` renders, then reports a backend failure.
struct BudgetedRenderer {
    budget: usize,
}

impl Renderer for BudgetedRenderer {
    fn render(&mut self, canvas: &TaggedCanvas) -> VizResult<()> {
        canvas.validate()?;
        if self.budget == 0 {
            return Err(VizError::Backend("surface lost".to_owned()));
        }
        self.budget -= 1;
        Ok(())
    }
}

#[test]
fn failed_redraw_keeps_the_applied_outcome_available() {
    let mut session = VisualizerSession::new(BudgetedRenderer { budget: 1 }, LayoutConfig::default())
        .expect("initial draw fits the budget");

    let err = session
        .apply(StructureKind::LinkedList, Operation::Insert, "7")
        .err()
        .expect("second render must fail");
    assert!(matches!(err, VizError::Backend(_)));

    assert_eq!(
        session.last_outcome(),
        Some(&OperationOutcome::Inserted {
            structure: StructureKind::LinkedList,
            value: "7".to_owned(),
        })
    );
    assert_eq!(session.engine().len(StructureKind::LinkedList), 1);
    let labels: Vec<&str> = session
        .plan(StructureKind::LinkedList)
        .expect("plan replaced before render")
        .boxes()
        .map(|rect| rect.label.as_str())
        .collect();
    assert_eq!(labels, vec!["7"]);
}

#[test]
fn last_outcome_tracks_rejected_selectors_too() {
    let mut session = session();
    assert!(session.last_outcome().is_none());
    session.apply_codes(5, 1, "x").expect("status");
    assert!(matches!(
        session.last_outcome(),
        Some(OperationOutcome::InvalidSelector { .. })
    ));
}
