use easel_core::story::{Branch, Story};

#[test]
fn starts_pending_with_painting_off() {
    let story = Story::new();
    assert_eq!(story.branch(), Branch::Pending);
    assert!(!story.is_settled());
    assert!(!story.painting_active());
}

#[test]
fn accept_settles_the_branch_and_enables_painting() {
    let mut story = Story::new();
    assert!(story.accept());
    assert_eq!(story.branch(), Branch::Accepted);
    assert!(story.is_settled());
    assert!(story.painting_active());
}

#[test]
fn reject_settles_the_branch_without_painting() {
    let mut story = Story::new();
    assert!(story.reject());
    assert_eq!(story.branch(), Branch::Rejected);
    assert!(story.is_settled());
    assert!(!story.painting_active());
}

#[test]
fn terminal_branches_are_mutually_exclusive() {
    let mut story = Story::new();
    assert!(story.accept());
    assert!(!story.reject(), "reject after accept must be a no-op");
    assert_eq!(story.branch(), Branch::Accepted);
    assert!(story.painting_active());

    let mut story = Story::new();
    assert!(story.reject());
    assert!(!story.accept(), "accept after reject must be a no-op");
    assert_eq!(story.branch(), Branch::Rejected);
    assert!(!story.painting_active());
}

#[test]
fn repeated_triggers_are_idempotent() {
    let mut story = Story::new();
    assert!(story.accept());
    assert!(!story.accept());
    assert_eq!(story.branch(), Branch::Accepted);
}
